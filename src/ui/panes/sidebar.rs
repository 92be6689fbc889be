//! Algorithm catalog sidebar

use super::pane_block;
use crate::step::{Algorithm, Category};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the catalog, grouped by category, with the selection marked.
///
/// The technical view lists time complexity next to every entry; the simple
/// view shows complexity for the selected algorithm only.
pub fn render_sidebar(frame: &mut Frame, area: Rect, selected: Algorithm, technical: bool) {
    let heading = Style::default()
        .fg(DEFAULT_THEME.comment)
        .add_modifier(Modifier::BOLD);
    let mut items = Vec::new();
    let mut category: Option<Category> = None;

    for algorithm in Algorithm::ALL {
        if category != Some(algorithm.category()) {
            if category.is_some() {
                items.push(ListItem::new(""));
            }
            category = Some(algorithm.category());
            items.push(ListItem::new(Line::from(Span::styled(
                algorithm.category().title(),
                heading,
            ))));
        }

        let is_selected = algorithm == selected;
        let style = if is_selected {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let marker = if is_selected { "▶ " } else { "  " };

        let mut spans = vec![Span::styled(marker, style), Span::styled(algorithm.name(), style)];
        if technical {
            spans.push(Span::styled(
                format!(" {}", algorithm.time_complexity()),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }

    if !technical {
        let label = Style::default().fg(DEFAULT_THEME.comment);
        let value = Style::default().fg(DEFAULT_THEME.secondary);
        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("Time:  ", label),
            Span::styled(selected.time_complexity(), value),
        ])));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("Space: ", label),
            Span::styled(selected.space_complexity(), value),
        ])));
    }

    frame.render_widget(List::new(items).block(pane_block("Algorithms", false)), area);
}
