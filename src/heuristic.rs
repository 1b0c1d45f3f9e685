use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::puzzle::{State, BLANK, GRID_SIZE};

/// Remaining-cost estimate used to order the A* frontier.
///
/// All variants are admissible, so any of them yields an optimal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Sum of each tile's row and column distance from its home cell.
    #[default]
    Manhattan,
    /// Number of tiles not on their home cell.
    Misplaced,
    /// Always zero; turns A* into uniform-cost search.
    Uninformed,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Manhattan,
        Heuristic::Misplaced,
        Heuristic::Uninformed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Misplaced => "Misplaced",
            Heuristic::Uninformed => "Uninformed",
        }
    }

    pub fn cost(&self, state: &State) -> usize {
        match self {
            Heuristic::Manhattan => manhattan_distance(state),
            Heuristic::Misplaced => misplaced_tiles(state),
            Heuristic::Uninformed => 0,
        }
    }
}

fn misplaced_tiles(state: &State) -> usize {
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(i, &value)| value != BLANK && value as usize != i + 1)
        .count()
}

fn manhattan_distance(state: &State) -> usize {
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(|(i, &value)| {
            // Tile v belongs at index v - 1.
            let target = value as usize - 1;
            (i / GRID_SIZE).abs_diff(target / GRID_SIZE) + (i % GRID_SIZE).abs_diff(target % GRID_SIZE)
        })
        .sum()
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for Heuristic {
    type Error = PuzzleError;

    fn try_from(discriminant: i64) -> Result<Self, Self::Error> {
        match discriminant {
            0 => Ok(Heuristic::Manhattan),
            1 => Ok(Heuristic::Misplaced),
            2 => Ok(Heuristic::Uninformed),
            other => Err(PuzzleError::UnknownHeuristic(other.to_string())),
        }
    }
}

impl FromStr for Heuristic {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PuzzleError::UnknownHeuristic(s.to_string()))
    }
}
