use thiserror::Error;

/// Everything that can go wrong while building, scrambling or solving a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("steps must be >= 0 (got {0})")]
    InvalidSteps(i64),
    #[error("unknown heuristic: {0}")]
    UnknownHeuristic(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("solution not found after {expanded} expansions")]
    NoSolution { expanded: usize },
    #[error("expansion limit of {limit} exceeded ({expanded} expansions)")]
    ExpansionLimit { expanded: usize, limit: usize },
}

impl PuzzleError {
    /// Nodes expanded before a search gave up, if this error came from one.
    pub fn expanded(&self) -> Option<usize> {
        match self {
            PuzzleError::NoSolution { expanded } | PuzzleError::ExpansionLimit { expanded, .. } => {
                Some(*expanded)
            }
            _ => None,
        }
    }
}
