mod frame;
mod recording;

pub use frame::{render_frame, run, status_text};
pub use recording::{DrawCommand, EventQueue, RecordingRenderer};

use crate::board::{Mark, WinLine};
use crate::controller::UiEvent;
use crate::layout::Rect;

pub const TWO_PLAYERS_LABEL: &str = "2 Players";
pub const ONE_PLAYER_LABEL: &str = "1 Player";
pub const PLAY_FIRST_LABEL: &str = "Play First";
pub const PLAY_SECOND_LABEL: &str = "Play Second";
pub const BACK_LABEL: &str = "Back";
pub const MAIN_MENU_LABEL: &str = "Main Menu";
pub const RESTART_LABEL: &str = "Restart";

/// Draw commands issued once per frame. Implementations never report back to the game.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_grid_lines(&mut self);
    fn draw_mark(&mut self, row: usize, col: usize, mark: Mark);
    fn draw_winning_line(&mut self, line: WinLine, mark: Mark);
    fn draw_button(&mut self, rect: Rect, label: &str);
    fn draw_status(&mut self, _text: &str) {}
    fn present(&mut self);
}

/// Source of UI events. `None` means the source is exhausted.
pub trait InputSource {
    fn poll_event(&mut self) -> Option<UiEvent>;
}
