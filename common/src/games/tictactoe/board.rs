use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::types::{CELL_COUNT, Mark, Move};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| Move { index })
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// X moves first, so O is next only once X is a mark ahead.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub fn mirrored(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.mirrored();
        }
        Board { cells }
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Mark {
        &mut self.cells[index]
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cells such as `"XO.X....O"`. Rows may be separated by `/`
    /// or newlines, e.g. `"XO./X../..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| *c != '/' && *c != '\n').collect();
        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Board needs exactly {} cells, got {}",
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = Mark::from_char(symbol)?;
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
