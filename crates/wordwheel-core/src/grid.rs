//! Grid coordinates, word placements, and the occupancy map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A (row, col) cell. Coordinates may go negative while a layout is being
/// grown; finished puzzles are normalised so the top-left cell is (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Step `n` cells along `orientation`.
    pub fn step(self, orientation: Orientation, n: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + n),
            Orientation::Vertical => Self::new(self.row + n, self.col),
        }
    }

    /// The two neighbours across `orientation` (above/below for a
    /// horizontal word, left/right for a vertical one).
    pub fn flanks(self, orientation: Orientation) -> [Position; 2] {
        match orientation {
            Orientation::Horizontal => {
                [Self::new(self.row - 1, self.col), Self::new(self.row + 1, self.col)]
            }
            Orientation::Vertical => {
                [Self::new(self.row, self.col - 1), Self::new(self.row, self.col + 1)]
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Word direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn crossing(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "across"),
            Orientation::Vertical => write!(f, "down"),
        }
    }
}

/// A word laid on the grid from `start` along `orientation`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub orientation: Orientation,
    pub start: Position,
}

impl Placement {
    pub fn new(word: impl Into<String>, orientation: Orientation, start: Position) -> Self {
        Self {
            word: word.into(),
            orientation,
            start,
        }
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cell of the `index`-th letter.
    pub fn position_at(&self, index: usize) -> Position {
        self.start.step(self.orientation, index as i32)
    }

    /// Occupied cells paired with their letters, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(move |(i, ch)| (self.position_at(i), ch))
    }

    pub fn positions(&self) -> Vec<Position> {
        self.cells().map(|(pos, _)| pos).collect()
    }

    pub fn contains(&self, pos: Position) -> bool {
        let offset = match self.orientation {
            Orientation::Horizontal if pos.row == self.start.row => pos.col - self.start.col,
            Orientation::Vertical if pos.col == self.start.col => pos.row - self.start.row,
            _ => return false,
        };
        offset >= 0 && (offset as usize) < self.len()
    }

    /// Cell just before the first letter.
    pub fn before(&self) -> Position {
        self.start.step(self.orientation, -1)
    }

    /// Cell just after the last letter.
    pub fn after(&self) -> Position {
        self.start.step(self.orientation, self.len() as i32)
    }

    /// Same placement moved by (-rows, -cols).
    pub fn shifted(&self, rows: i32, cols: i32) -> Self {
        Self::new(
            self.word.clone(),
            self.orientation,
            Position::new(self.start.row - rows, self.start.col - cols),
        )
    }
}

/// Inclusive bounding box of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    /// Box around every cell of `placements`, or `None` if there are none.
    pub fn of<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for placement in placements {
            if placement.is_empty() {
                continue;
            }
            let first = placement.start;
            let last = placement.position_at(placement.len() - 1);
            bounds = Some(match bounds {
                None => Bounds { min: first, max: last },
                Some(b) => b.including(first).including(last),
            });
        }
        bounds
    }

    pub fn including(self, pos: Position) -> Self {
        Self {
            min: Position::new(self.min.row.min(pos.row), self.min.col.min(pos.col)),
            max: Position::new(self.max.row.max(pos.row), self.max.col.max(pos.col)),
        }
    }

    pub fn width(&self) -> usize {
        (self.max.col - self.min.col + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.max.row - self.min.row + 1) as usize
    }
}

/// Sparse map from cell to letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: HashMap<Position, char>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(&pos).copied()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells.iter().map(|(&pos, &ch)| (pos, ch))
    }

    /// Write the placement's letters. Does not check legality; call
    /// [`can_place_word`](Self::can_place_word) first.
    pub fn place(&mut self, placement: &Placement) {
        for (pos, ch) in placement.cells() {
            self.cells.insert(pos, ch);
        }
    }

    /// Write the placement's letters unless a shared cell disagrees.
    ///
    /// On conflict returns the first disagreeing cell; cells written before
    /// the conflict stay written.
    pub fn try_place(&mut self, placement: &Placement) -> Result<(), Position> {
        for (pos, ch) in placement.cells() {
            match self.cells.get(&pos) {
                Some(&existing) if existing != ch => return Err(pos),
                _ => {
                    self.cells.insert(pos, ch);
                }
            }
        }
        Ok(())
    }

    /// Whether `placement` may be added without touching other words
    /// except at deliberate crossings:
    ///
    /// - the cells just before and after the word along its axis are empty;
    /// - every already-occupied cell holds the same letter;
    /// - every newly-filled cell has empty neighbours across the axis;
    /// - no two consecutive letters both land on occupied cells, so a word
    ///   can cross others but never run along one.
    pub fn can_place_word(&self, placement: &Placement) -> bool {
        if placement.is_empty() {
            return false;
        }
        if self.is_occupied(placement.before()) || self.is_occupied(placement.after()) {
            return false;
        }

        let mut previous_shared = false;
        for (pos, ch) in placement.cells() {
            match self.get(pos) {
                Some(existing) => {
                    if existing != ch || previous_shared {
                        return false;
                    }
                    previous_shared = true;
                }
                None => {
                    if pos.flanks(placement.orientation).iter().any(|&p| self.is_occupied(p)) {
                        return false;
                    }
                    previous_shared = false;
                }
            }
        }
        true
    }

    /// Maximal runs of two or more occupied cells, across then down.
    pub fn runs(&self) -> Vec<(Orientation, Position, String)> {
        let mut starts: Vec<Position> = self.cells.keys().copied().collect();
        starts.sort();

        let mut runs = Vec::new();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for &start in &starts {
                if self.is_occupied(start.step(orientation, -1)) {
                    continue;
                }
                let mut text = String::new();
                let mut pos = start;
                while let Some(ch) = self.get(pos) {
                    text.push(ch);
                    pos = pos.step(orientation, 1);
                }
                if text.len() >= 2 {
                    runs.push((orientation, start, text));
                }
            }
        }
        runs
    }
}
