//! Bar chart for the sorting algorithms

use super::pane_block;
use crate::replay::ReplayState;
use crate::step::{Algorithm, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 9;

/// Colour for the bar at `index`. The pivot wins over a comparison, which
/// wins over a highlight, which wins over sorted.
fn bar_color(state: &ReplayState, index: usize) -> Color {
    if state.pivot_index == Some(index) && !state.sorted_indices.contains(&index) {
        DEFAULT_THEME.pivot
    } else if state.compare_indices.contains(&index) {
        DEFAULT_THEME.compare
    } else if state.highlight_indices.contains(&index) {
        DEFAULT_THEME.highlight
    } else if state.sorted_indices.contains(&index) {
        DEFAULT_THEME.sorted
    } else {
        DEFAULT_THEME.bar
    }
}

/// Bar heights must be positive, so non-positive inputs are shifted up
fn bar_height(value: Value, min: Value) -> u64 {
    let offset = if min < 1 { min.saturating_sub(1) } else { 0 };
    u64::try_from(value.saturating_sub(offset)).unwrap_or(0)
}

fn bar_width(area: Rect, bars: usize) -> u16 {
    let inner = usize::from(area.width.saturating_sub(2));
    let per_bar = (inner + usize::from(BAR_GAP)) / bars.max(1);
    u16::try_from(per_bar)
        .unwrap_or(MAX_BAR_WIDTH)
        .saturating_sub(BAR_GAP)
        .clamp(1, MAX_BAR_WIDTH)
}

fn legend() -> Line<'static> {
    let entry = |color: Color, label: &'static str| {
        [
            Span::styled(" ■ ", Style::default().fg(color)),
            Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(entry(DEFAULT_THEME.compare, "compare"));
    spans.extend(entry(DEFAULT_THEME.pivot, "pivot"));
    spans.extend(entry(DEFAULT_THEME.sorted, "sorted "));
    Line::from(spans)
}

/// Render the array as vertical bars.
///
/// The technical view labels each bar with its index.
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    state: &ReplayState,
    technical: bool,
) {
    let block = pane_block(algorithm.name(), true).title_bottom(legend());

    let Some(&min) = state.array.iter().min() else {
        let paragraph = Paragraph::new("(no data)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let bars: Vec<Bar> = state
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(state, index);
            let bar = Bar::default()
                .value(bar_height(value, min))
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color));
            if technical {
                bar.label(Line::from(index.to_string()))
            } else {
                bar
            }
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area, bars.len()))
        .bar_gap(BAR_GAP);

    frame.render_widget(chart, area);
}
