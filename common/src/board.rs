use std::fmt;

use crate::error::GameError;

pub const BOARD_SIZE: usize = 3;

/// Turn marker and the symbol a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Geometry of a completed line. Derived from the board when a win is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinLine {
    Row(usize),
    Col(usize),
    /// Top-left to bottom-right.
    DiagMain,
    /// Top-right to bottom-left.
    DiagAnti,
}

impl WinLine {
    /// Lines in the order they are checked: rows top to bottom, columns left to
    /// right, then the main and anti diagonals.
    pub fn all() -> impl Iterator<Item = WinLine> {
        (0..BOARD_SIZE)
            .map(WinLine::Row)
            .chain((0..BOARD_SIZE).map(WinLine::Col))
            .chain([WinLine::DiagMain, WinLine::DiagAnti])
    }

    /// `(row, col)` of every cell on the line, from its first end to its last.
    pub fn cells(self) -> [(usize, usize); BOARD_SIZE] {
        std::array::from_fn(|i| match self {
            WinLine::Row(row) => (row, i),
            WinLine::Col(col) => (i, col),
            WinLine::DiagMain => (i, i),
            WinLine::DiagAnti => (i, BOARD_SIZE - 1 - i),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Puts `mark` into an empty cell. Marks are never overwritten.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GameError::OutOfRange {
                row: i32::try_from(row).unwrap_or(i32::MAX),
                col: i32::try_from(col).unwrap_or(i32::MAX),
            })?;

        if *cell != Cell::Empty {
            return Err(GameError::CellOccupied { row, col });
        }

        *cell = mark.into();
        Ok(())
    }

    pub fn winner_for(&self, mark: Mark) -> Option<WinLine> {
        let target = Cell::from(mark);
        WinLine::all().find(|line| {
            line.cells()
                .iter()
                .all(|&(row, col)| self.cells[row][col] == target)
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// A tie is only called once neither side holds a line.
    pub fn is_draw(&self, just_moved: Mark) -> bool {
        self.winner_for(just_moved).is_none()
            && self.winner_for(just_moved.opponent()).is_none()
            && self.is_full()
    }

    pub fn reset(&mut self) {
        self.cells = Default::default();
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell == Cell::Empty {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    pub fn marked_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.empty_cells().len()
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Cell::X,
                    'O' => Cell::O,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_rng::SessionRng;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marked_count(), 0);
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_marked_count_tracks_distinct_placements() {
        let mut rng = SessionRng::new(7);
        for _ in 0..20 {
            let mut board = Board::new();
            let mut mark = Mark::X;
            for placed in 1..=9 {
                let empty = board.empty_cells();
                let (row, col) = empty[rng.random_range(0..empty.len())];
                board.place(row, col, mark).unwrap();
                assert_eq!(board.marked_count(), placed);
                mark = mark.opponent();
            }
            assert!(board.is_full());
        }
    }

    #[test]
    fn test_place_on_occupied_cell_fails_without_change() {
        let mut board = Board::new();
        board.place(1, 1, Mark::X).unwrap();
        let before = board.clone();

        let result = board.place(1, 1, Mark::O);
        assert_eq!(result, Err(GameError::CellOccupied { row: 1, col: 1 }));
        assert_eq!(board, before);

        let result = board.place(1, 1, Mark::X);
        assert_eq!(result, Err(GameError::CellOccupied { row: 1, col: 1 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Mark::X),
            Err(GameError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, Mark::O),
            Err(GameError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn test_row_win_with_interleaved_opponent() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 0, Mark::O).unwrap();
        board.place(0, 1, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        board.place(0, 2, Mark::X).unwrap();

        assert_eq!(board.winner_for(Mark::X), Some(WinLine::Row(0)));
        assert_eq!(board.winner_for(Mark::O), None);
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        let board = Board::from_rows([".O.", "XOX", ".O."]);
        assert_eq!(board.winner_for(Mark::O), Some(WinLine::Col(1)));

        let board = Board::from_rows(["X.O", ".XO", "..X"]);
        assert_eq!(board.winner_for(Mark::X), Some(WinLine::DiagMain));

        let board = Board::from_rows(["X.O", "XO.", "O.."]);
        assert_eq!(board.winner_for(Mark::O), Some(WinLine::DiagAnti));
    }

    #[test]
    fn test_winner_for_reports_first_line_in_priority_order() {
        let board = Board::from_rows(["XXX", "X..", "X.."]);
        assert_eq!(board.winner_for(Mark::X), Some(WinLine::Row(0)));

        let board = Board::from_rows(["X.O", "XO.", "OXX"]);
        assert_eq!(board.winner_for(Mark::O), Some(WinLine::DiagAnti));

        let board = Board::from_rows(["O.X", "OX.", "XXX"]);
        assert_eq!(board.winner_for(Mark::X), Some(WinLine::Row(2)));
    }

    #[test]
    fn test_winner_for_matches_brute_force_line_check() {
        let mut rng = SessionRng::new(99);
        for _ in 0..200 {
            let mut board = Board::new();
            let moves = rng.random_range(0..=9);
            let mut mark = Mark::X;
            for _ in 0..moves {
                let empty = board.empty_cells();
                let (row, col) = empty[rng.random_range(0..empty.len())];
                board.place(row, col, mark).unwrap();
                mark = mark.opponent();
            }

            for mark in [Mark::X, Mark::O] {
                let owns_line = WinLine::all().any(|line| {
                    line.cells()
                        .iter()
                        .all(|&(r, c)| board.cell(r, c) == Some(mark.into()))
                });
                assert_eq!(board.winner_for(mark).is_some(), owns_line);
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows(["XOX", "OXO", "OXO"]);
        assert_eq!(board.winner_for(Mark::X), None);
        assert_eq!(board.winner_for(Mark::O), None);
        assert!(board.is_full());
        assert!(board.is_draw(Mark::X));
        assert!(board.is_draw(Mark::O));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_rows(["XXX", "OOX", "XOO"]);
        assert!(board.is_full());
        assert!(!board.is_draw(Mark::X));
        assert!(!board.is_draw(Mark::O));
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let board = Board::from_rows(["XOX", "OXO", "OX."]);
        assert!(!board.is_full());
        assert!(!board.is_draw(Mark::X));
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::from_rows(["XOX", "OXO", "OXO"]);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_win_line_cells() {
        assert_eq!(WinLine::Row(2).cells(), [(2, 0), (2, 1), (2, 2)]);
        assert_eq!(WinLine::Col(0).cells(), [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(WinLine::DiagMain.cells(), [(0, 0), (1, 1), (2, 2)]);
        assert_eq!(WinLine::DiagAnti.cells(), [(0, 2), (1, 1), (2, 0)]);
        assert_eq!(WinLine::all().count(), 8);
    }
}
