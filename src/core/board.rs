use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{BOARD_SIZE, Cell, Vec2, WinRule};
use crate::error::{BoardError, LoadError};

/// The fixed-size grid. Rows are indexed by `Vec2::i`, columns by `Vec2::j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new_empty() -> Board {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn load<R: Read>(mut source: R) -> Result<Board, LoadError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        Board::parse(&bytes)
    }

    /// Parses `BOARD_SIZE` rows of `BOARD_SIZE` cell codes, each row ended by a newline.
    /// A carriage return before the newline is accepted, and the final newline may be missing.
    pub fn parse(source: &[u8]) -> Result<Board, LoadError> {
        let mut rows: Vec<&[u8]> = source.split(|&b| b == b'\n').collect();
        if rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.len() != BOARD_SIZE {
            return Err(LoadError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Board::new_empty();
        for (i, row) in rows.iter().enumerate() {
            let row = row.strip_suffix(b"\r".as_slice()).unwrap_or(row);
            if row.len() != BOARD_SIZE {
                return Err(LoadError::RowLength {
                    row: i,
                    expected: BOARD_SIZE,
                    found: row.len(),
                });
            }
            for (j, &byte) in row.iter().enumerate() {
                board.cells[i][j] =
                    Cell::from_code(byte).ok_or(LoadError::UnknownCell { row: i, col: j, byte })?;
            }
        }
        Ok(board)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in &self.cells {
            result.extend(row.iter().map(|c| c.code()));
            result.push(b'\n');
        }
        result
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        let size = BOARD_SIZE as i32;
        pos.i >= 0 && pos.i < size && pos.j >= 0 && pos.j < size
    }

    pub fn cell_at(&self, pos: Vec2) -> Result<Cell, BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(self[pos])
    }

    pub fn set_cell(&mut self, pos: Vec2, value: Cell) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        self[pos] = value;
        Ok(())
    }

    /// Scans the whole grid for the player. If more than one player cell exists the
    /// last one in row-major order wins.
    pub fn locate_player(&self) -> Option<Vec2> {
        let mut found = None;
        let mut count = 0;
        for (pos, cell) in self.iter_cells() {
            if cell.is_player() {
                found = Some(pos);
                count += 1;
            }
        }
        if count > 1 {
            warn!(count, ?found, "board has several player cells, using the last one");
        }
        found
    }

    pub fn is_won(&self) -> bool {
        self.is_won_by(WinRule::BoxesOnTargets)
    }

    pub fn is_won_by(&self, rule: WinRule) -> bool {
        self.iter_cells().all(|(_, c)| match rule {
            WinRule::BoxesOnTargets => c != Cell::Target && c != Cell::PlayerOnTarget,
            WinRule::TargetsCovered => c != Cell::Target,
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.iter_cells().filter(|&(_, c)| c == cell).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &c)| {
                (Vec2 { i: i as i32, j: j as i32 }, c)
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl std::ops::Index<Vec2> for Board {
    type Output = Cell;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self.cells[index.i as usize][index.j as usize]
    }
}

impl std::ops::IndexMut<Vec2> for Board {
    fn index_mut(&mut self, index: Vec2) -> &mut Self::Output {
        &mut self.cells[index.i as usize][index.j as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for c in row {
                write!(f, "{}", c.code() as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
