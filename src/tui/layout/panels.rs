//! Side panels: the canned records each page shows next to its console.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use super::NEUTRAL;
use crate::console::RunOutcome;
use crate::scripts::automation::{self, WorkflowStatus};
use crate::scripts::backlinks::{self, LinkStatus};
use crate::scripts::mindpal::{self, Relevance};
use crate::scripts::Page;
use crate::tui::app::TuiApp;

pub(super) fn draw_panel(f: &mut Frame, app: &TuiApp, area: Rect) {
    let state = app.active_page();
    let completed = state.console.outcome() == Some(RunOutcome::Completed);
    match state.page {
        Page::Backlinks if completed => draw_backlinks(f, area),
        Page::Mindpal if completed => draw_mindpal(f, area),
        Page::Automation => draw_workflows(f, app, area),
        _ => draw_waiting(f, area),
    }
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn draw_waiting(f: &mut Frame, area: Rect) {
    let para = Paragraph::new(Line::from(Span::styled(
        "Results appear here when a run completes.",
        Style::default().fg(NEUTRAL),
    )))
    .block(panel_block("Results"))
    .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn link_status_color(status: LinkStatus) -> Color {
    match status {
        LinkStatus::Active => Color::Green,
        LinkStatus::Broken => Color::Red,
    }
}

fn draw_backlinks(f: &mut Frame, area: Rect) {
    let header = Row::new(["URL", "DA", "Status", "Type", "Traffic"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = backlinks::BACKLINKS.iter().map(|link| {
        Row::new(vec![
            Cell::from(link.url.trim_start_matches("https://")),
            Cell::from(link.domain_authority.to_string()),
            Cell::from(link.status.label())
                .style(Style::default().fg(link_status_color(link.status))),
            Cell::from(link.link_type.label()),
            Cell::from(link.traffic),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(panel_block("Backlinks"));
    f.render_widget(table, area);
}

fn relevance_color(relevance: Relevance) -> Color {
    match relevance {
        Relevance::High => Color::Green,
        Relevance::Medium => Color::Yellow,
        _ => NEUTRAL,
    }
}

fn draw_mindpal(f: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(NEUTRAL);
    let mut lines = vec![Line::from(Span::styled("Competitor Analysis", bold))];
    for c in mindpal::COMPETITORS {
        lines.push(Line::from(vec![
            Span::styled(c.domain, Style::default().fg(Color::Cyan)),
            Span::styled(format!("  DA {}", c.domain_authority), dim),
        ]));
        lines.push(Line::from(format!(
            "  {} backlinks, {} domains, {} traffic, {} opportunities",
            c.backlinks, c.referring_domains, c.traffic, c.opportunities
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", c.top_keywords.join(", ")),
            dim,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Link Opportunities", bold)));
    for o in mindpal::OPPORTUNITIES {
        lines.push(Line::from(vec![
            Span::styled(o.domain, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {} Relevance", o.relevance.label()),
                Style::default().fg(relevance_color(o.relevance)),
            ),
            Span::styled(format!("  DA {}", o.domain_authority), dim),
        ]));
        lines.push(Line::from(format!(
            "  {}  last post {}",
            o.contact_email, o.last_post
        )));
        lines.push(Line::from(Span::styled(format!("  {}", o.topics.join(", ")), dim)));
    }
    let para = Paragraph::new(lines)
        .block(panel_block("Results"))
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

/// Badge colour of a workflow status.
fn workflow_status_color(status: WorkflowStatus) -> Color {
    match status {
        WorkflowStatus::Active | WorkflowStatus::Running => Color::Green,
        WorkflowStatus::Scheduled => Color::Blue,
        WorkflowStatus::Paused => Color::Yellow,
    }
}

fn draw_workflows(f: &mut Frame, app: &TuiApp, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        format!("{} workflows active", automation::live_count()),
        Style::default().fg(Color::Green),
    ))];
    for (i, w) in automation::WORKFLOWS.iter().enumerate() {
        let selected = i == app.selected_workflow;
        let marker = if selected { "> " } else { "  " };
        let name_style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(w.name, name_style),
            Span::raw("  "),
            Span::styled(
                w.status.label(),
                Style::default().fg(workflow_status_color(w.status)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", w.description),
            Style::default().fg(NEUTRAL),
        )));
        lines.push(Line::from(format!(
            "  success {}  last run {}",
            w.success_rate, w.last_run
        )));
    }
    let para = Paragraph::new(lines)
        .block(panel_block("Workflows  [j/k] select  [Enter] run"))
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
