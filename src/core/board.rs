//! Board representation.
//!
//! A square grid of cells, each either empty or holding one player's stone.
//! Cells live in an `im::Vector`, so cloning a board for the undo history
//! shares structure with the live board and costs O(1).
//!
//! ## Coordinates
//!
//! Cells are addressed as `(x, y)`, both in `0..size`. The board is stored
//! and serialized row by row with `x` selecting the row, so the serialized
//! form reads `board[x][y]`.
//!
//! ```
//! use zone_game::core::{Board, Player, Pos};
//!
//! let board: Board = "R..\n.B.\n...".parse().unwrap();
//! assert_eq!(board.get(Pos::new(0, 0)), Some(Player::Red));
//! assert_eq!(board.get(Pos::new(1, 1)), Some(Player::Blue));
//! assert_eq!(board.get(Pos::new(2, 2)), None);
//! ```

use im::Vector;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::player::{Player, PlayerPair};
use crate::error::EngineError;

/// Contents of one cell: `None` when empty.
pub type Cell = Option<Player>;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell in `dir`, staying on a board of edge `size`.
    ///
    /// Returns `None` when the step would leave the board.
    #[must_use]
    pub fn step(self, dir: Direction, size: usize) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Pos { x, y })
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The two board axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Along `y`: neighbours `(x, y-1)` and `(x, y+1)`.
    Vertical,
    /// Along `x`: neighbours `(x-1, y)` and `(x+1, y)`.
    Horizontal,
}

impl Axis {
    /// Both directions along this axis.
    #[must_use]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::Up, Direction::Down],
            Axis::Horizontal => [Direction::Left, Direction::Right],
        }
    }
}

/// The four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// `(dx, dy)` offset of one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Square game board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board with edge `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
        }
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `(x, y)` lies on the board.
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Validate `(x, y)` into a position on this board.
    pub fn pos(&self, x: usize, y: usize) -> Result<Pos, EngineError> {
        if self.contains(x, y) {
            Ok(Pos::new(x, y))
        } else {
            Err(EngineError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Get the cell at `pos`.
    ///
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Overwrite the cell at `pos`.
    ///
    /// Panics if `pos` is off the board.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells.set(idx, cell);
    }

    /// Neighbour of `pos` in `dir`, if it is on the board.
    #[must_use]
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        pos.step(dir, self.size)
    }

    /// Iterate over every position in row order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Pos::new(x, y)))
    }

    /// Number of stones `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// Stone counts for both players.
    #[must_use]
    pub fn counts(&self) -> PlayerPair<usize> {
        PlayerPair::from_fn(|p| self.count(p))
    }

    /// Check whether every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Cells as nested rows, `rows()[x][y]`.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size)
            .map(|x| (0..self.size).map(|y| self.get(Pos::new(x, y))).collect())
            .collect()
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos.x, pos.y),
            "position {} off {}x{} board",
            pos,
            self.size,
            self.size
        );
        pos.x * self.size + pos.y
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for x in 0..self.size {
            let row: Vec<Cell> = (0..self.size).map(|y| self.get(Pos::new(x, y))).collect();
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

impl std::fmt::Display for Board {
    /// One line per row `x`: `R`, `B`, or `.` for each `y`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.size {
            if x > 0 {
                writeln!(f)?;
            }
            for y in 0..self.size {
                let c = match self.get(Pos::new(x, y)) {
                    Some(player) => player.marker(),
                    None => ".",
                };
                f.write_str(c)?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = EngineError;

    /// Parse the `Display` form. Surrounding whitespace on each line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let size = lines.len();
        let mut board = Board::new(size);

        for (x, line) in lines.iter().enumerate() {
            if line.chars().count() != size {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    x,
                    line.chars().count(),
                    size
                )));
            }
            for (y, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    'R' => Some(Player::Red),
                    'B' => Some(Player::Blue),
                    other => {
                        return Err(EngineError::InvalidBoard(format!(
                            "unexpected '{}' at ({}, {})",
                            other, x, y
                        )))
                    }
                };
                board.set(Pos::new(x, y), cell);
            }
        }

        Ok(board)
    }
}
