use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

pub const GRID_SIZE: usize = 3;
pub const BOARD_LEN: usize = GRID_SIZE * GRID_SIZE;
pub const BLANK: u8 = 0;

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Neighbor generation order. Equal-cost successors enter the frontier in this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One arrangement of the eight tiles and the blank, row-major.
///
/// A `State` is always a permutation of `0..=8`; the only ways to obtain one
/// are [`State::new`], parsing, [`State::GOAL`] and moving from another state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    tiles: [u8; BOARD_LEN],
    blank: usize,
}

impl State {
    pub const GOAL: State = State {
        tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
        blank: BOARD_LEN - 1,
    };

    pub fn new(tiles: [u8; BOARD_LEN]) -> Result<Self, PuzzleError> {
        let mut seen = [false; BOARD_LEN];
        for &tile in &tiles {
            let slot = seen.get_mut(tile as usize).ok_or_else(|| {
                PuzzleError::InvalidState(format!("tile {} out of range 0..={}", tile, BOARD_LEN - 1))
            })?;
            if *slot {
                return Err(PuzzleError::InvalidState(format!("tile {} appears twice", tile)));
            }
            *slot = true;
        }

        // Every value 0..9 seen exactly once, so the blank is present.
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Ok(Self { tiles, blank })
    }

    pub fn tiles(&self) -> &[u8; BOARD_LEN] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(GRID_SIZE)
    }

    /// The state reached by sliding the blank one cell in `movement`,
    /// or `None` if that would leave the board.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let row = (self.blank / GRID_SIZE) as isize + dr;
        let col = (self.blank % GRID_SIZE) as isize + dc;

        if row < 0 || row >= GRID_SIZE as isize || col < 0 || col >= GRID_SIZE as isize {
            return None;
        }

        let target = row as usize * GRID_SIZE + col as usize;
        let mut tiles = self.tiles;
        tiles.swap(self.blank, target);
        Some(Self {
            tiles,
            blank: target,
        })
    }

    pub fn successors(self) -> impl Iterator<Item = (Move, State)> {
        Move::ALL
            .into_iter()
            .filter_map(move |movement| self.apply(movement).map(|next| (movement, next)))
    }

    /// Legal successor states in [`Move::ALL`] order: 2 in a corner, 3 on an edge, 4 in the center.
    pub fn neighbors(&self) -> Vec<State> {
        self.successors().map(|(_, next)| next).collect()
    }

    /// The move that turns `self` into `next`, if they are adjacent.
    pub fn move_to(&self, next: &State) -> Option<Move> {
        self.successors()
            .find(|(_, candidate)| candidate == next)
            .map(|(movement, _)| movement)
    }

    /// Packs the board into 4 bits per cell, row-major.
    pub fn canonical_key(&self) -> u64 {
        self.tiles
            .iter()
            .fold(0u64, |key, &tile| (key << 4) | u64::from(tile))
    }

    /// Whether the goal is reachable, decided by inversion parity.
    pub fn is_solvable(&self) -> bool {
        // On an odd-width board every slide preserves inversion parity.
        count_inversions(&self.tiles) % 2 == 0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::GOAL
    }
}

fn count_inversions(tiles: &[u8]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != BLANK)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == BLANK {
                write!(f, "_")?;
            } else {
                write!(f, "{}", tile)?;
            }
            if i == BOARD_LEN - 1 {
                break;
            }
            if i % GRID_SIZE == GRID_SIZE - 1 {
                write!(f, "|")?;
            } else {
                write!(f, ",")?;
            }
        }
        Ok(())
    }
}

impl FromStr for State {
    type Err = PuzzleError;

    /// Parses the rendered form, e.g. `1,2,3|4,5,6|7,8,_`. Either `_` or `0` marks the blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('|').collect();
        if rows.len() != GRID_SIZE {
            return Err(PuzzleError::InvalidState(format!(
                "expected {} rows separated by '|', found {}",
                GRID_SIZE,
                rows.len()
            )));
        }

        let mut tiles = [BLANK; BOARD_LEN];
        for (r, row) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.split(',').map(str::trim).collect();
            if cells.len() != GRID_SIZE {
                return Err(PuzzleError::InvalidState(format!(
                    "row {} has {} cells, expected {}",
                    r + 1,
                    cells.len(),
                    GRID_SIZE
                )));
            }
            for (c, cell) in cells.iter().enumerate() {
                tiles[r * GRID_SIZE + c] = match *cell {
                    "_" => BLANK,
                    other => other
                        .parse()
                        .map_err(|_| PuzzleError::InvalidState(format!("bad tile {:?}", other)))?,
                };
            }
        }

        State::new(tiles)
    }
}
