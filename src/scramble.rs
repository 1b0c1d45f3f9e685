use log::debug;
use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::error::PuzzleError;
use crate::puzzle::State;

pub const DEFAULT_SCRAMBLE_STEPS: i64 = 30;
pub const MAX_SCRAMBLE_STEPS: i64 = 200;

/// Random walk of `steps` slides away from the goal, using the thread-local RNG.
///
/// The result is always solvable but may be the goal itself if the walk backtracks.
pub fn scramble_from_goal(steps: i64) -> Result<State, PuzzleError> {
    scramble_with(&mut thread_rng(), steps)
}

pub fn scramble_with<R: Rng + ?Sized>(rng: &mut R, steps: i64) -> Result<State, PuzzleError> {
    if steps < 0 {
        return Err(PuzzleError::InvalidSteps(steps));
    }

    let mut state = State::GOAL;
    for _ in 0..steps {
        if let Some(&next) = state.neighbors().choose(rng) {
            state = next;
        }
    }

    debug!("scrambled {} steps to {}", steps, state);
    Ok(state)
}
