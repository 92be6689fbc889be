//! Breadth-first and depth-first traversal traces over an undirected graph
//!
//! The demonstration graph has six vertices and seven edges:
//!
//! ```text
//! A ─── B ─── C
//! │     │     │
//! D ─── E ─── F
//! ```
//!
//! Neighbours are visited in edge-list order, which fixes the traversal
//! orders: breadth-first from `A` visits A, B, D, C, E, F and depth-first
//! visits A, B, C, F, E, D.

use crate::step::{NodeId, Step, StepAction};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// An undirected graph with insertion-ordered adjacency lists
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new(nodes: &[&str], edges: &[(&str, &str)]) -> Self {
        let mut adjacency: FxHashMap<NodeId, Vec<NodeId>> = nodes
            .iter()
            .map(|n| (n.to_string(), Vec::new()))
            .collect();

        for &(from, to) in edges {
            adjacency
                .entry(from.to_string())
                .or_default()
                .push(to.to_string());
            adjacency
                .entry(to.to_string())
                .or_default()
                .push(from.to_string());
        }

        Graph {
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            edges: edges
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            adjacency,
        }
    }

    /// The fixed six-vertex demonstration graph
    pub fn demo() -> Self {
        Graph::new(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B"),
                ("A", "D"),
                ("B", "C"),
                ("B", "E"),
                ("C", "F"),
                ("D", "E"),
                ("E", "F"),
            ],
        )
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn neighbours(&self, node: &str) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `a` and `b` are joined, in either direction
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.neighbours(a).iter().any(|n| n == b)
    }
}

/// Start vertex of the demonstration traversals
pub const DEMO_START: &str = "A";

fn visit(node: &str, description: String) -> Step {
    Step::new(
        StepAction::VisitNode {
            node_id: node.to_string(),
        },
        description,
    )
}

fn explore(from: &str, to: &str) -> Step {
    Step::new(
        StepAction::ExploreEdge {
            from: from.to_string(),
            to: to.to_string(),
        },
        format!("Explore edge {} → {}", from, to),
    )
}

/// Breadth-first traversal with a FIFO frontier.
///
/// A vertex is marked discovered when it is enqueued, so each reachable
/// vertex is enqueued and visited exactly once.
pub fn bfs_steps(graph: &Graph, start: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    if !graph.contains(start) {
        return steps;
    }

    let mut discovered: FxHashSet<&str> = FxHashSet::default();
    let mut frontier: VecDeque<(&str, &str)> = VecDeque::new();

    discovered.insert(start);
    steps.push(visit(start, format!("Start BFS at node {}", start)));
    enqueue_neighbours(graph, start, &mut discovered, &mut frontier, &mut steps);

    while let Some((parent, node)) = frontier.pop_front() {
        steps.push(explore(parent, node));
        steps.push(visit(node, format!("Visit node {}", node)));
        enqueue_neighbours(graph, node, &mut discovered, &mut frontier, &mut steps);
    }

    steps
}

fn enqueue_neighbours<'g>(
    graph: &'g Graph,
    node: &'g str,
    discovered: &mut FxHashSet<&'g str>,
    frontier: &mut VecDeque<(&'g str, &'g str)>,
    steps: &mut Vec<Step>,
) {
    for next in graph.neighbours(node) {
        if discovered.insert(next.as_str()) {
            steps.push(Step::new(
                StepAction::QueueNode {
                    node_id: next.clone(),
                },
                format!("Add {} to queue", next),
            ));
            frontier.push_back((node, next.as_str()));
        }
    }
}

/// Depth-first traversal with an explicit LIFO frontier of (parent, vertex).
///
/// A vertex is marked discovered when it is pushed, so each reachable vertex
/// is pushed and visited exactly once. Neighbours are pushed in reverse
/// adjacency order so the first neighbour is popped first.
pub fn dfs_steps(graph: &Graph, start: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    if !graph.contains(start) {
        return steps;
    }

    let mut discovered: FxHashSet<&str> = FxHashSet::default();
    let mut frontier: Vec<(&str, &str)> = Vec::new();

    discovered.insert(start);
    steps.push(visit(start, format!("Start DFS at node {}", start)));
    push_neighbours(graph, start, &mut discovered, &mut frontier, &mut steps);

    while let Some((parent, node)) = frontier.pop() {
        steps.push(explore(parent, node));
        steps.push(visit(node, format!("Visit node {}", node)));
        push_neighbours(graph, node, &mut discovered, &mut frontier, &mut steps);
    }

    steps
}

fn push_neighbours<'g>(
    graph: &'g Graph,
    node: &'g str,
    discovered: &mut FxHashSet<&'g str>,
    frontier: &mut Vec<(&'g str, &'g str)>,
    steps: &mut Vec<Step>,
) {
    for next in graph.neighbours(node).iter().rev() {
        if discovered.insert(next.as_str()) {
            steps.push(Step::new(
                StepAction::StackNode {
                    node_id: next.clone(),
                },
                format!("Push {} to stack", next),
            ));
            frontier.push((node, next.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit_order(steps: &[Step]) -> Vec<&str> {
        steps
            .iter()
            .filter_map(|s| match &s.action {
                StepAction::VisitNode { node_id } => Some(node_id.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_demo_graph_is_undirected() {
        let graph = Graph::demo();
        assert_eq!(graph.edges().len(), 7);
        assert!(graph.has_edge("E", "D"));
        assert!(!graph.has_edge("A", "F"));
        assert_eq!(graph.neighbours("E"), &["B", "D", "F"]);
    }

    #[test]
    fn test_bfs_trace_matches_demonstration() {
        let steps = bfs_steps(&Graph::demo(), DEMO_START);
        let descriptions: Vec<&str> = steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Start BFS at node A",
                "Add B to queue",
                "Add D to queue",
                "Explore edge A → B",
                "Visit node B",
                "Add C to queue",
                "Add E to queue",
                "Explore edge A → D",
                "Visit node D",
                "Explore edge B → C",
                "Visit node C",
                "Add F to queue",
                "Explore edge B → E",
                "Visit node E",
                "Explore edge C → F",
                "Visit node F",
            ]
        );
    }

    #[test]
    fn test_dfs_visit_order() {
        let steps = dfs_steps(&Graph::demo(), DEMO_START);
        assert_eq!(visit_order(&steps), vec!["A", "B", "C", "F", "E", "D"]);
        assert_eq!(steps[1].description, "Push D to stack");
        assert_eq!(steps[2].description, "Push B to stack");
    }

    #[test]
    fn test_dfs_pushes_each_vertex_once() {
        let steps = dfs_steps(&Graph::demo(), DEMO_START);
        let pushed: Vec<&str> = steps
            .iter()
            .filter_map(|s| match &s.action {
                StepAction::StackNode { node_id } => Some(node_id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(pushed, vec!["D", "B", "E", "C", "F"]);

        let edges: Vec<&str> = steps
            .iter()
            .filter(|s| matches!(s.action, StepAction::ExploreEdge { .. }))
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            edges,
            vec![
                "Explore edge A → B",
                "Explore edge B → C",
                "Explore edge C → F",
                "Explore edge B → E",
                "Explore edge A → D",
            ]
        );
    }

    #[test]
    fn test_unknown_start_yields_nothing() {
        assert!(bfs_steps(&Graph::demo(), "Z").is_empty());
        assert!(dfs_steps(&Graph::demo(), "Z").is_empty());
    }
}
