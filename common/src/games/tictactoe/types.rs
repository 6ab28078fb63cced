use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// X and O trade places, empty stays empty.
    pub fn mirrored(&self) -> Mark {
        self.opponent().unwrap_or(Mark::Empty)
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Result<Mark, String> {
        match c {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            '.' | '_' | '-' | ' ' => Ok(Mark::Empty),
            other => Err(format!("Unknown cell character '{}'", other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    pub fn from_winner(mark: Mark) -> Outcome {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
            Mark::Empty => Outcome::Ongoing,
        }
    }
}

/// A cell index in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub index: usize,
}

impl Move {
    pub fn new(index: usize) -> Result<Self, String> {
        if index >= CELL_COUNT {
            return Err(format!(
                "Cell index {} is out of bounds (expected 0..{})",
                index, CELL_COUNT
            ));
        }
        Ok(Self { index })
    }

    pub fn from_row_col(row: usize, col: usize) -> Result<Self, String> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(format!("Position ({}, {}) is out of bounds", row, col));
        }
        Ok(Self {
            index: row * BOARD_SIZE + col,
        })
    }

    pub fn row(&self) -> usize {
        self.index / BOARD_SIZE
    }

    pub fn col(&self) -> usize {
        self.index % BOARD_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell {} (row {}, col {})", self.index + 1, self.row() + 1, self.col() + 1)
    }
}

/// Three cell indices that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub cells: [usize; 3],
}

impl WinLine {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { cells: [a, b, c] }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new(0, 1, 2),
    WinLine::new(3, 4, 5),
    WinLine::new(6, 7, 8),
    WinLine::new(0, 3, 6),
    WinLine::new(1, 4, 7),
    WinLine::new(2, 5, 8),
    WinLine::new(0, 4, 8),
    WinLine::new(2, 4, 6),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    VsPlayer,
    VsComputer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    InProgress,
    Won(Mark),
    Drawn,
}
