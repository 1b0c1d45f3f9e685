//! A* over board states.
//!
//! Each call to [`solve`] owns its frontier, best-cost map and closed set;
//! nothing survives between calls, so concurrent calls are independent.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::error::PuzzleError;
use crate::heuristic::Heuristic;
use crate::puzzle::{Move, State};

/// Expansion limit meaning "no cap".
pub const DEFAULT_EXPANSION_LIMIT: usize = 0;

/// A discovered state together with its path cost, estimate and predecessor.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: State,
    pub g: usize,
    pub h: usize,
    /// Index of the predecessor in the node arena; `None` for the start node.
    pub parent: Option<usize>,
}

impl SearchNode {
    pub fn f(&self) -> usize {
        self.g + self.h
    }
}

/// Frontier ordering: lowest `f`, then lowest `h`, then earliest insertion.
///
/// The field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: usize,
    pub h: usize,
    pub sequence: u64,
}

/// A path from the start state to the goal plus search diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Start to goal inclusive.
    pub path: Vec<State>,
    pub expanded: usize,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.last().is_some_and(State::is_goal)
    }

    /// Number of slides, one less than the number of states.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The direction of each slide along the path.
    pub fn steps(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }
}

/// Finds a shortest sequence of slides from `start` to [`State::GOAL`].
///
/// `expansion_limit == 0` means unbounded. Otherwise the search gives up with
/// [`PuzzleError::ExpansionLimit`] once the expansion counter exceeds the limit.
/// An exhausted frontier yields [`PuzzleError::NoSolution`], which only happens
/// for boards of the wrong parity.
pub fn solve(
    start: State,
    heuristic: Heuristic,
    expansion_limit: usize,
) -> Result<SearchResult, PuzzleError> {
    debug!(
        "solving {} with {} heuristic (limit {})",
        start, heuristic, expansion_limit
    );

    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut open: BinaryHeap<Reverse<(FrontierKey, usize)>> = BinaryHeap::new();
    let mut best_g: HashMap<u64, usize> = HashMap::new();
    let mut closed: HashSet<u64> = HashSet::new();
    let mut sequence: u64 = 0;
    let mut expanded: usize = 0;

    let h0 = heuristic.cost(&start);
    nodes.push(SearchNode {
        state: start,
        g: 0,
        h: h0,
        parent: None,
    });
    open.push(Reverse((
        FrontierKey {
            f: h0,
            h: h0,
            sequence,
        },
        0,
    )));
    best_g.insert(start.canonical_key(), 0);

    while let Some(Reverse((_, current))) = open.pop() {
        let SearchNode { state, g, .. } = nodes[current];

        if state.is_goal() {
            let path = reconstruct_path(&nodes, current);
            debug!(
                "solved in {} moves after {} expansions",
                path.len() - 1,
                expanded
            );
            return Ok(SearchResult { path, expanded });
        }

        closed.insert(state.canonical_key());
        expanded += 1;
        if expansion_limit > 0 && expanded > expansion_limit {
            debug!("expansion limit {} exceeded", expansion_limit);
            return Err(PuzzleError::ExpansionLimit {
                expanded,
                limit: expansion_limit,
            });
        }
        trace!("expand {} g={} frontier={}", state, g, open.len());

        for next in state.neighbors() {
            let key = next.canonical_key();
            if closed.contains(&key) {
                continue;
            }
            let tentative = g + 1;
            if best_g.get(&key).is_some_and(|&known| tentative >= known) {
                continue;
            }
            best_g.insert(key, tentative);

            let h = heuristic.cost(&next);
            sequence += 1;
            nodes.push(SearchNode {
                state: next,
                g: tentative,
                h,
                parent: Some(current),
            });
            open.push(Reverse((
                FrontierKey {
                    f: tentative + h,
                    h,
                    sequence,
                },
                nodes.len() - 1,
            )));
        }
    }

    debug!("frontier exhausted after {} expansions", expanded);
    Err(PuzzleError::NoSolution { expanded })
}

fn reconstruct_path(nodes: &[SearchNode], goal: usize) -> Vec<State> {
    let mut path = Vec::with_capacity(nodes[goal].g + 1);
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        path.push(nodes[index].state);
        cursor = nodes[index].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> State {
        s.parse().unwrap()
    }

    #[test]
    fn frontier_key_lower_f_wins() {
        let a = FrontierKey {
            f: 3,
            h: 3,
            sequence: 9,
        };
        let b = FrontierKey {
            f: 4,
            h: 0,
            sequence: 1,
        };
        assert!(a < b);
    }

    #[test]
    fn frontier_key_ties_broken_by_h_then_sequence() {
        let a = FrontierKey {
            f: 5,
            h: 1,
            sequence: 8,
        };
        let b = FrontierKey {
            f: 5,
            h: 2,
            sequence: 2,
        };
        assert!(a < b, "smaller h should sort first on f tie");

        let c = FrontierKey {
            f: 5,
            h: 1,
            sequence: 3,
        };
        assert!(c < a, "earlier insertion should sort first on full tie");
    }

    #[test]
    fn goal_is_solved_without_expanding() {
        for h in Heuristic::ALL {
            let result = solve(State::GOAL, h, 1).unwrap();
            assert_eq!(result.path, vec![State::GOAL]);
            assert_eq!(result.expanded, 0);
            assert_eq!(result.moves(), 0);
            assert!(result.found());
        }
    }

    #[test]
    fn two_move_board() {
        let start = state("1,2,3|4,5,6|_,7,8");
        let result = solve(start, Heuristic::Manhattan, DEFAULT_EXPANSION_LIMIT).unwrap();
        assert_eq!(
            result.path,
            vec![start, state("1,2,3|4,5,6|7,_,8"), State::GOAL]
        );
        assert_eq!(result.expanded, 2);
        assert_eq!(result.steps(), vec![Move::Right, Move::Right]);
    }

    #[test]
    fn fourteen_move_board_expansion_counts() {
        let start = state("8,1,3|4,_,2|7,6,5");
        let manhattan = solve(start, Heuristic::Manhattan, 0).unwrap();
        let misplaced = solve(start, Heuristic::Misplaced, 0).unwrap();
        let uninformed = solve(start, Heuristic::Uninformed, 0).unwrap();

        assert_eq!(manhattan.moves(), 14);
        assert_eq!(misplaced.moves(), 14);
        assert_eq!(uninformed.moves(), 14);

        assert_eq!(manhattan.expanded, 37);
        assert_eq!(misplaced.expanded, 224);
        assert_eq!(uninformed.expanded, 5960);
    }

    #[test]
    fn capped_search_reports_limit() {
        let start = state("8,1,3|4,_,2|7,6,5");
        let err = solve(start, Heuristic::Manhattan, 5).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::ExpansionLimit {
                expanded: 6,
                limit: 5
            }
        );
        assert_eq!(err.expanded(), Some(6));

        // A generous cap does not change the answer.
        let capped = solve(start, Heuristic::Manhattan, 1_000).unwrap();
        assert_eq!(capped.moves(), 14);
    }

    #[test]
    fn every_path_step_is_a_single_slide() {
        let result = solve(state("4,1,3|7,2,6|_,5,8"), Heuristic::Misplaced, 0).unwrap();
        assert_eq!(result.moves(), 6);
        assert_eq!(result.steps().len(), result.moves());
        for pair in result.path.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]));
        }
    }
}
