//! Algorithm tags and their catalog metadata

use crate::errors::VisualizerError;
use std::fmt;
use std::str::FromStr;

/// Grouping used by the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sorting,
    Tree,
    Graph,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::Sorting => "Sorting Algorithms",
            Category::Tree => "Tree Algorithms",
            Category::Graph => "Graph Algorithms",
        }
    }
}

/// The supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Merge,
    Quick,
    Heap,
    Bst,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bst,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Short tag accepted on the command line
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Bst => "bst",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Bst => "Binary Search Tree",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Algorithm::Bubble | Algorithm::Merge | Algorithm::Quick | Algorithm::Heap => {
                Category::Sorting
            }
            Algorithm::Bst => Category::Tree,
            Algorithm::Bfs | Algorithm::Dfs => Category::Graph,
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble => "O(n²)",
            Algorithm::Merge | Algorithm::Quick | Algorithm::Heap => "O(n log n)",
            Algorithm::Bst => "O(log n)",
            Algorithm::Bfs | Algorithm::Dfs => "O(V + E)",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Heap => "O(1)",
            Algorithm::Merge | Algorithm::Bst => "O(n)",
            Algorithm::Quick => "O(log n)",
            Algorithm::Bfs | Algorithm::Dfs => "O(V)",
        }
    }

    /// Whether the generator consumes the caller's array.
    ///
    /// Tree and graph algorithms replay a fixed canonical sequence instead.
    pub fn uses_input(self) -> bool {
        self.category() == Category::Sorting
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.tag() == needle)
            .ok_or_else(|| VisualizerError::UnknownAlgorithm(s.to_string()))
    }
}
