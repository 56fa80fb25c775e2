//! Console pane: timestamped log, run indicator, auto-scroll.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use ratatui::Frame;

use super::NEUTRAL;
use crate::console::LogKind;
use crate::tui::app::PageState;

pub(super) const EMPTY_HINT: &str = "Console ready... Start an AI agent to see logs";

/// Line colour for a log kind.
pub(super) fn kind_color(kind: LogKind) -> Color {
    match kind {
        LogKind::Info => Color::Cyan,
        LogKind::Success => Color::Green,
        LogKind::Warning => Color::Yellow,
        LogKind::Error => Color::Red,
    }
}

/// Line colour for a kind tag. Tags outside the known set render neutral.
pub(super) fn tag_color(tag: &str) -> Color {
    tag.parse::<LogKind>().map_or(NEUTRAL, kind_color)
}

pub(super) fn draw_console(f: &mut Frame, state: &mut PageState, area: Rect) {
    let snapshot = state.console.snapshot();
    if snapshot.revision != state.seen_revision {
        state.seen_revision = snapshot.revision;
        state.auto_scroll = true;
    }

    let mut title = vec![Span::styled(
        " AI Agent Console ",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if snapshot.running {
        title.push(Span::styled("\u{25cf} Running ", Style::default().fg(Color::Green)));
    }
    let control = if snapshot.running { "[Space] stop" } else { "[Space] start" };
    let block = Block::default()
        .title(Line::from(title))
        .title_bottom(Line::from(Span::styled(
            format!(" {control}  [c] clear "),
            Style::default().fg(NEUTRAL),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = if snapshot.entries.is_empty() {
        vec![Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(NEUTRAL).add_modifier(Modifier::ITALIC),
        ))]
    } else {
        snapshot
            .entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", entry.timestamp()),
                        Style::default().fg(NEUTRAL),
                    ),
                    Span::styled(
                        entry.message().to_string(),
                        Style::default().fg(tag_color(entry.kind().as_str())),
                    ),
                ])
            })
            .collect()
    };

    let inner_height = area.height.saturating_sub(2) as u32;
    let inner_width = area.width.saturating_sub(2).max(1);
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total_lines = para.line_count(inner_width) as u32;
    let max_scroll = total_lines.saturating_sub(inner_height);
    let max_scroll_u16 = max_scroll.min(u16::MAX as u32) as u16;
    let scroll = if state.auto_scroll {
        max_scroll_u16
    } else {
        state.scroll.min(max_scroll_u16)
    };
    state.scroll = scroll;
    state.max_scroll = max_scroll_u16;
    state.viewport_height = inner_height.min(u16::MAX as u32) as u16;

    f.render_widget(para.block(block).scroll((scroll, 0)), area);

    if total_lines > inner_height {
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll_u16 as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut scrollbar_state,
        );
    }
}
