use egui::Color32;
use tictactoe_common::Mark;

pub const BG_COLOR: Color32 = Color32::from_rgb(28, 170, 156);
pub const LINE_COLOR: Color32 = Color32::from_rgb(23, 145, 135);
pub const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);
pub const BUTTON_COLOR: Color32 = Color32::from_rgb(50, 50, 200);
pub const BUTTON_TEXT_COLOR: Color32 = Color32::WHITE;

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => CROSS_COLOR,
        Mark::O => CIRCLE_COLOR,
    }
}
