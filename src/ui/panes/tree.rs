//! Binary search tree pane
//!
//! Nodes are laid out on a character grid: the column is the node's in-order
//! rank and the row is its depth, so the drawing is always a valid BST
//! picture regardless of insertion order. Rows between levels carry `╱`/`╲`
//! markers above each child.

use super::pane_block;
use crate::replay::{BinaryTree, ReplayState};
use crate::step::{Step, StepAction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashMap;

/// One drawn cell: in-order column, text, style
type Cell = (usize, String, Style);

/// Node the current step is acting on, if it is a tree step
fn focused_node(step: Option<&Step>) -> Option<&str> {
    step.and_then(|s| match &s.action {
        StepAction::InsertNode { node_id, .. }
        | StepAction::TraverseNode { node_id }
        | StepAction::DeleteNode { node_id } => Some(node_id.as_str()),
        _ => None,
    })
}

/// Grid rows for `tree`: node rows at even indices, connectors at odd ones
fn layout_rows(tree: &BinaryTree, focused: Option<&str>) -> Vec<Vec<Cell>> {
    let height = tree.height();
    if height == 0 {
        return Vec::new();
    }

    let columns: FxHashMap<&str, usize> = tree
        .in_order()
        .into_iter()
        .enumerate()
        .map(|(column, node)| (node.id.as_str(), column))
        .collect();
    let column_of = |id: &str| columns.get(id).copied().unwrap_or(0);

    let edge = Style::default().fg(DEFAULT_THEME.comment);
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); height * 2 - 1];

    for (node, depth) in tree.nodes_with_depth() {
        let style = if focused == Some(node.id.as_str()) {
            Style::default()
                .fg(Color::Black)
                .bg(DEFAULT_THEME.current)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        rows[depth * 2].push((column_of(node.id.as_str()), node.value.to_string(), style));

        if let Some(left) = &node.left {
            rows[depth * 2 + 1].push((column_of(left.id.as_str()), "╱".to_string(), edge));
        }
        if let Some(right) = &node.right {
            rows[depth * 2 + 1].push((column_of(right.id.as_str()), "╲".to_string(), edge));
        }
    }

    for row in &mut rows {
        row.sort_by_key(|(column, _, _)| *column);
    }
    rows
}

/// Lay out one grid row, padded to the full grid width so that centring the
/// paragraph keeps columns aligned across rows
fn render_row(cells: &[Cell], cell_width: usize, total_columns: usize) -> Line<'static> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for (column, text, style) in cells {
        if *column > cursor {
            spans.push(Span::raw(" ".repeat((column - cursor) * cell_width)));
        }
        spans.push(Span::styled(
            format!("{:^width$}", text, width = cell_width),
            *style,
        ));
        cursor = column + 1;
    }
    if total_columns > cursor {
        spans.push(Span::raw(" ".repeat((total_columns - cursor) * cell_width)));
    }
    Line::from(spans)
}

/// Render the tree, highlighting the node the current step acts on
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ReplayState,
    current_step: Option<&Step>,
    technical: bool,
) {
    let block = pane_block("Binary Search Tree", true);
    let tree = &state.tree;

    if tree.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let cell_width = tree
        .in_order()
        .iter()
        .map(|n| n.value.to_string().len())
        .max()
        .unwrap_or(1)
        + 2;

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(
        layout_rows(tree, focused_node(current_step))
            .iter()
            .map(|row| render_row(row, cell_width, tree.len())),
    );

    if technical {
        let order: Vec<String> = tree.in_order().iter().map(|n| n.value.to_string()).collect();
        let label = Style::default().fg(DEFAULT_THEME.comment);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("In-order: ", label),
            Span::styled(order.join(" "), Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("Nodes: {}  Height: {}", tree.len(), tree.height()),
            label,
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
