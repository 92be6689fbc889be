//! TUI pane rendering modules
//!
//! Each pane is a stateless function of the store's current snapshot.
//!
//! # Pane Modules
//!
//! - [`sidebar`]: Algorithm catalog grouped by category, with complexity figures
//! - [`array`]: Bar chart for the sorting algorithms
//! - [`tree`]: Binary search tree laid out by in-order column and depth
//! - [`graph`]: Demonstration graph with visited nodes and the frontier
//! - [`description`]: Current step description and position
//! - [`status`]: Status bar with keybindings and playback state

pub mod array;
pub mod description;
pub mod graph;
pub mod sidebar;
pub mod status;
pub mod tree;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use description::{render_description_pane, DescriptionRenderData};
pub use graph::render_graph_pane;
pub use sidebar::render_sidebar;
pub use status::{render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;

/// Bordered block shared by every pane
fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}
