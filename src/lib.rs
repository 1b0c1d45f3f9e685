//! Optimal solver for the 3×3 sliding-tile puzzle.
//!
//! Build a [`State`] (parse one, or [`scramble_from_goal`]), then [`solve`] it
//! with a [`Heuristic`]. The result is the sequence of boards from the start to
//! [`State::GOAL`] together with the number of nodes the search expanded.

pub mod error;
pub mod heuristic;
pub mod puzzle;
pub mod scramble;
pub mod search;

pub use error::PuzzleError;
pub use heuristic::Heuristic;
pub use puzzle::{Move, State};
pub use scramble::{scramble_from_goal, scramble_with};
pub use search::{solve, SearchResult, DEFAULT_EXPANSION_LIMIT};
