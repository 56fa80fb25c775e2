//! Page layout.
//!
//! ```text
//! ┌ [1 Backlink Analyzer] [2 MindPal Intelligence] [3 AI Automation] ┐
//! │ MindPal Intelligence  AI-powered competitor analysis ...        │
//! ├─ AI Agent Console ● Running ──────────┬─ Results ────────────────┤
//! │ [14:23:45] Initializing ...           │ competitor1.com  DA 78   │
//! │ [14:23:46] Connecting ...             │ ...                      │
//! ├───────────────────────────────────────┴──────────────────────────┤
//! │ [running] 2 entries   Space:Start/Stop  c:Clear  Tab:Page  q:Quit│
//! └──────────────────────────────────────────────────────────────────┘
//! ```

mod console;
mod panels;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::app::TuiApp;
use crate::scripts::Page;

/// Fallback colour for text without a semantic colour.
pub(super) const NEUTRAL: Color = Color::DarkGray;

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &mut TuiApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // page tabs
            Constraint::Length(1), // page title
            Constraint::Min(5),    // console + panel
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_tab_bar(f, app, outer[0]);
    draw_title(f, app.active, outer[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[2]);
    console::draw_console(f, app.active_page_mut(), body[0]);
    panels::draw_panel(f, app, body[1]);

    draw_status(f, app, outer[3]);
}

fn draw_tab_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let spans: Vec<Span> = Page::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, page)| {
            let is_active = *page == app.active;
            let style = if is_active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(NEUTRAL)
            };
            // A dot marks pages whose console is running in the background.
            let dot = if app.page(*page).console.is_running() { " \u{25cf}" } else { "" };
            vec![
                Span::raw(" "),
                Span::styled(format!("[{} {}{dot}]", i + 1, page.title()), style),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_title(f: &mut Frame, page: Page, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {}", page.title()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", page.subtitle()), Style::default().fg(NEUTRAL)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_status(f: &mut Frame, app: &TuiApp, area: Rect) {
    let state = app.active_page();
    let status = if state.console.is_running() {
        Span::styled("running", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("idle", Style::default().fg(Color::Green))
    };
    let mut spans = vec![
        Span::styled(" [", Style::default().fg(NEUTRAL)),
        status,
        Span::styled("]", Style::default().fg(NEUTRAL)),
        Span::raw("  "),
        Span::styled(
            format!("[{} entries]", state.console.len()),
            Style::default().fg(Color::Cyan),
        ),
    ];
    let shortcuts = if app.active == Page::Automation {
        "Space:Start/Stop  c:Clear  j/k:Workflow  Enter:Run  Tab:Page  q:Quit"
    } else {
        "Space:Start/Stop  c:Clear  Tab:Page  \u{2191}\u{2193}:Scroll  q:Quit"
    };
    spans.push(Span::raw("  "));
    spans.push(Span::styled(shortcuts, Style::default().fg(NEUTRAL)));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
