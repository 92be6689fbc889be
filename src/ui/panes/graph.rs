//! Graph traversal pane
//!
//! The demonstration graph is drawn on a fixed grid, three vertices per row
//! in declaration order, with horizontal and vertical edge segments between
//! grid neighbours. Below it sit the visited set and the pending frontier.

use super::pane_block;
use crate::generators::Graph;
use crate::replay::ReplayState;
use crate::step::{Algorithm, NodeId, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GRID_COLUMNS: usize = 3;
const HORIZONTAL_EDGE: &str = " ───── ";
const NO_EDGE: &str = "       ";

/// Frontier entries not yet visited, oldest first
fn pending<'a>(frontier: &'a [NodeId], state: &ReplayState) -> Vec<&'a str> {
    frontier
        .iter()
        .filter(|n| !state.visited_nodes.contains(n.as_str()))
        .map(String::as_str)
        .collect()
}

struct Highlights<'a> {
    state: &'a ReplayState,
    node: Option<&'a str>,
    edge: Option<(&'a str, &'a str)>,
}

impl Highlights<'_> {
    fn node_style(&self, id: &str) -> Style {
        if self.node == Some(id) {
            Style::default()
                .fg(Color::Black)
                .bg(DEFAULT_THEME.current)
                .add_modifier(Modifier::BOLD)
        } else if self.state.visited_nodes.contains(id) {
            Style::default().fg(Color::Black).bg(DEFAULT_THEME.visited)
        } else if self.state.queue.iter().chain(&self.state.stack).any(|n| n == id) {
            Style::default().fg(DEFAULT_THEME.secondary)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        }
    }

    fn edge_style(&self, a: &str, b: &str) -> Style {
        let is_current = self
            .edge
            .is_some_and(|(from, to)| (from == a && to == b) || (from == b && to == a));
        if is_current {
            Style::default()
                .fg(DEFAULT_THEME.current)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        }
    }
}

fn grid_lines(graph: &Graph, highlights: &Highlights) -> Vec<Line<'static>> {
    let rows: Vec<&[NodeId]> = graph.nodes().chunks(GRID_COLUMNS).collect();
    let mut lines = Vec::new();

    for (r, row) in rows.iter().enumerate() {
        let mut spans = Vec::new();
        for (c, node) in row.iter().enumerate() {
            if c > 0 {
                let left = &row[c - 1];
                if graph.has_edge(left, node) {
                    spans.push(Span::styled(HORIZONTAL_EDGE, highlights.edge_style(left, node)));
                } else {
                    spans.push(Span::raw(NO_EDGE));
                }
            }
            spans.push(Span::styled(format!("({})", node), highlights.node_style(node)));
        }
        lines.push(Line::from(spans));

        let Some(below) = rows.get(r + 1) else {
            continue;
        };
        let mut connectors = Vec::new();
        for (c, node) in row.iter().enumerate() {
            if c > 0 {
                connectors.push(Span::raw(NO_EDGE));
            }
            match below.get(c) {
                Some(under) if graph.has_edge(node, under) => {
                    connectors.push(Span::styled(" │ ", highlights.edge_style(node, under)));
                }
                _ => connectors.push(Span::raw("   ")),
            }
        }
        lines.push(Line::from(connectors.clone()));
        lines.push(Line::from(connectors));
    }

    lines
}

/// Render the demonstration graph for a BFS or DFS run
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    state: &ReplayState,
    current_step: Option<&Step>,
) {
    let graph = Graph::demo();
    let highlights = Highlights {
        state,
        node: current_step.and_then(|s| s.node_id()),
        edge: current_step.and_then(|s| s.edge()),
    };

    let mut lines = vec![Line::from("")];
    lines.extend(grid_lines(&graph, &highlights));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.secondary);
    let visited: Vec<&str> = graph
        .nodes()
        .iter()
        .map(String::as_str)
        .filter(|n| state.visited_nodes.contains(*n))
        .collect();
    let (frontier_label, frontier) = match algorithm {
        Algorithm::Dfs => ("Stack:   ", pending(&state.stack, state)),
        _ => ("Queue:   ", pending(&state.queue, state)),
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Visited: ", label),
        Span::styled(visited.join(" "), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled(frontier_label, label),
        Span::styled(frontier.join(" "), value),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(pane_block(algorithm.name(), true))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_skips_visited_entries() {
        let mut state = ReplayState::default();
        state.queue = vec!["B".to_string(), "D".to_string(), "C".to_string()];
        state.visited_nodes.insert("B".to_string());
        assert_eq!(pending(&state.queue, &state), vec!["D", "C"]);
    }

    #[test]
    fn test_grid_has_node_and_connector_rows() {
        let state = ReplayState::default();
        let highlights = Highlights {
            state: &state,
            node: None,
            edge: None,
        };
        // Two node rows with two connector rows between them
        assert_eq!(grid_lines(&Graph::demo(), &highlights).len(), 4);
    }
}
