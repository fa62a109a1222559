use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;
use crate::error::GameError;

pub const BUTTON_HEIGHT: i32 = 60;

/// Axis-aligned pixel rectangle. Contains its top/left edge but not its bottom/right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are widened so a rect near `i32::MAX` cannot overflow.
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && i64::from(x) < self.right()
            && y >= self.y
            && i64::from(y) < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn is_inside(&self, outer: &Rect) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }
}

/// Board area and button hit regions, in window pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub board: Rect,
    pub two_player_region: Rect,
    pub one_player_region: Rect,
    pub play_first_region: Rect,
    pub play_second_region: Rect,
    pub back_region: Rect,
    pub menu_region: Rect,
    pub restart_region: Rect,
}

impl Layout {
    /// Board fills the window; every menu stacks its buttons at a third and at half
    /// of the window height, with the one-player menu's "Back" button at two thirds.
    pub fn for_window(width: i32, height: i32) -> Self {
        let upper = Rect::new(width / 4, height / 3, width / 2, BUTTON_HEIGHT);
        let middle = Rect::new(width / 4, height / 2, width / 2, BUTTON_HEIGHT);
        let lower = Rect::new(width / 4, height * 2 / 3, width / 2, BUTTON_HEIGHT);

        Self {
            board: Rect::new(0, 0, width, height),
            two_player_region: upper,
            one_player_region: middle,
            play_first_region: upper,
            play_second_region: middle,
            back_region: lower,
            menu_region: upper,
            restart_region: middle,
        }
    }

    pub fn regions(&self) -> [(&'static str, Rect); 8] {
        [
            ("board", self.board),
            ("two_player_region", self.two_player_region),
            ("one_player_region", self.one_player_region),
            ("play_first_region", self.play_first_region),
            ("play_second_region", self.play_second_region),
            ("back_region", self.back_region),
            ("menu_region", self.menu_region),
            ("restart_region", self.restart_region),
        ]
    }

    pub fn cell_size(&self) -> (i32, i32) {
        let cells = BOARD_SIZE as i32;
        (self.board.width / cells, self.board.height / cells)
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let (cell_width, cell_height) = self.cell_size();
        Rect::new(
            self.board.x + col as i32 * cell_width,
            self.board.y + row as i32 * cell_height,
            cell_width,
            cell_height,
        )
    }

    /// Maps a pointer position to `(row, col)`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<(usize, usize), GameError> {
        let (cell_width, cell_height) = self.cell_size();
        if cell_width <= 0 || cell_height <= 0 {
            return Err(GameError::OutOfRange { row: 0, col: 0 });
        }

        let row = cell_index(y, self.board.y, cell_height);
        let col = cell_index(x, self.board.x, cell_width);
        let cells = 0..BOARD_SIZE as i32;
        if !self.board.contains(x, y) || !cells.contains(&row) || !cells.contains(&col) {
            return Err(GameError::OutOfRange { row, col });
        }

        Ok((row as usize, col as usize))
    }
}

fn cell_index(pos: i32, origin: i32, cell: i32) -> i32 {
    let index = (i64::from(pos) - i64::from(origin)).div_euclid(i64::from(cell));
    i32::try_from(index).unwrap_or(if index < 0 { i32::MIN } else { i32::MAX })
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_window(600, 600)
    }
}
