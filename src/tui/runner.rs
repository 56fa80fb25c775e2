//! Terminal setup/teardown and the draw/update loop.

use anyhow::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use super::app::TuiApp;
use super::event::{Event, EventHandler};
use super::input::handle_key;
use super::layout;
use crate::config::ConsoleConfig;
use crate::scripts::Page;

/// Run the dashboard until the user quits. Restores the terminal on the
/// way out, including when the loop fails.
pub async fn run(config: &ConsoleConfig, start_page: Page) -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    let mut app = TuiApp::new(config, start_page);
    let result = event_loop(&mut terminal, &mut app).await;
    app.shutdown();
    ratatui::try_restore()?;
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp) -> Result<()> {
    let mut events = EventHandler::new(app.tick);
    for state in &app.pages {
        events.watch_console(state.page, state.console.subscribe());
    }
    info!(page = ?app.active, "dashboard started");

    terminal.draw(|f| layout::draw(f, app))?;
    while let Some(event) = events.next().await {
        match event {
            Event::Key(key) => handle_key(app, key),
            // Background pages only move the tab-bar dot; the tick covers them.
            Event::ConsoleChanged(page) if page != app.active => continue,
            Event::ConsoleChanged(_) | Event::Resize(..) | Event::Tick => {}
        }
        if app.should_quit {
            break;
        }
        terminal.draw(|f| layout::draw(f, app))?;
    }
    info!("dashboard closed");
    Ok(())
}
