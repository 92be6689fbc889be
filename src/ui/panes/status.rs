//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Last applied step; `None` before the first one
    pub position: Option<usize>,
    pub total_steps: usize,
    pub speed_ms: u64,
    pub is_playing: bool,
}

/// Badge shown at the far right, if any
fn badge(data: &StatusRenderData) -> Option<(&'static str, Color)> {
    let at_end = data.total_steps > 0 && data.position.is_some_and(|p| p + 1 >= data.total_steps);
    if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if data.position.is_none() {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Left side: step counter, speed and status message
    let step_text = match data.position {
        Some(p) => format!(" Step {}/{} ", p + 1, data.total_steps),
        None => format!(" Step 0/{} ", data.total_steps),
    };

    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ms ", data.speed_ms),
            bar_style.fg(DEFAULT_THEME.secondary),
        ),
        Span::styled(" | ", bar_style.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let bindings = [
        ("←/→", "step"),
        ("⎵", "play"),
        ("↵ / ⌫", "end/start"),
        ("r", "reset"),
        ("s", "shuffle"),
        ("+/-", "speed"),
        ("⇥", "algorithm"),
        ("v", "view"),
        ("q", "quit"),
    ];

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    if let Some((label, color)) = badge(&data) {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
