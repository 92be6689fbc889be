//! # Introduction
//!
//! algoscope animates sorting, tree and graph algorithms as a sequence of
//! discrete, inspectable steps. Each algorithm runs to completion ahead of
//! time and records every observable micro-operation; the visual state at any
//! position is then rebuilt by replaying those steps, forward or backward,
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Algorithm + input → Generator → Steps → Replay machine → ReplayState → TUI
//!                                              ↑
//!                                      Playback driver
//! ```
//!
//! 1. [`step`] defines the immutable [`step::Step`] record and the
//!    [`step::Algorithm`] catalog.
//! 2. [`generators`] run each algorithm on a private working copy and emit
//!    its full step sequence.
//! 3. [`replay`] applies steps to derive a [`replay::ReplayState`] and moves
//!    backward by replaying from the start, or from a [`snapshot`]
//!    checkpoint.
//! 4. [`playback`] is the single cooperative timer that advances the replay
//!    while playing.
//! 5. [`store`] ties these together behind one `dispatch` surface.
//! 6. [`ui`] is the ratatui shell; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble, merge, quick and heap sort over a user-supplied array; a binary
//! search tree demonstration; breadth-first and depth-first traversal of a
//! fixed six-vertex graph.

pub mod config;
pub mod errors;
pub mod generators;
pub mod playback;
pub mod replay;
pub mod snapshot;
pub mod step;
pub mod store;
pub mod ui;
