//! Key binding dispatch for the TUI.
//!
//! q / Ctrl+C quit. Space or s toggles the active console, c clears it.
//! Tab / Shift+Tab or 1/2/3 switch pages. Up/Down/PgUp/PgDn/Home/End
//! scroll the log. On the automation page j/k pick a workflow and Enter
//! runs it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::TuiApp;
use crate::scripts::Page;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Windows reports both press and release.
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    let page_step = app.active_page().viewport_height.max(1);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') | KeyCode::Char('s') => app.toggle_active(),
        KeyCode::Char('c') => app.clear_active(),

        KeyCode::Tab => app.switch_to(app.active.next()),
        KeyCode::BackTab => app.switch_to(app.active.prev()),
        KeyCode::Char(d @ '1'..='9') => {
            let index = d as usize - '1' as usize;
            if let Some(page) = Page::ALL.get(index) {
                app.switch_to(*page);
            }
        }

        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(page_step),
        KeyCode::PageDown => app.scroll_down(page_step),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_end(),

        KeyCode::Char('j') if app.active == Page::Automation => app.select_workflow(1),
        KeyCode::Char('k') if app.active == Page::Automation => app.select_workflow(-1),
        KeyCode::Enter if app.active == Page::Automation => app.run_selected_workflow(),
        KeyCode::Enter => app.toggle_active(),

        _ => {}
    }
}
