use eframe::egui;
use tictactoe_common::render::Renderer;
use tictactoe_common::{BOARD_SIZE, Layout, Mark, Rect, WinLine};

use crate::colors::{
    BG_COLOR, BUTTON_COLOR, BUTTON_TEXT_COLOR, CIRCLE_COLOR, CROSS_COLOR, LINE_COLOR,
    mark_color,
};

const LINE_WIDTH: f32 = 15.0;
const CROSS_WIDTH: f32 = 25.0;
const CIRCLE_WIDTH: f32 = 15.0;
const WIN_LINE_INSET: f32 = 15.0;
const BUTTON_FONT_SIZE: f32 = 28.0;
const STATUS_FONT_SIZE: f32 = 40.0;

/// Paints frames onto an egui painter. Layout pixels are offsets from `window.min`.
pub struct EguiRenderer<'a> {
    painter: &'a egui::Painter,
    window: egui::Rect,
    layout: &'a Layout,
}

impl<'a> EguiRenderer<'a> {
    pub fn new(painter: &'a egui::Painter, window: egui::Rect, layout: &'a Layout) -> Self {
        Self {
            painter,
            window,
            layout,
        }
    }

    fn to_screen(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.window.min + egui::vec2(rect.x as f32, rect.y as f32),
            egui::vec2(rect.width as f32, rect.height as f32),
        )
    }

    fn cell(&self, row: usize, col: usize) -> egui::Rect {
        self.to_screen(self.layout.cell_rect(row, col))
    }
}

impl Renderer for EguiRenderer<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.window, 0.0, BG_COLOR);
    }

    fn draw_grid_lines(&mut self) {
        let board = self.to_screen(self.layout.board);
        let stroke = egui::Stroke::new(LINE_WIDTH, LINE_COLOR);

        for i in 1..BOARD_SIZE {
            let y = self.cell(i, 0).top();
            self.painter.line_segment(
                [egui::pos2(board.left(), y), egui::pos2(board.right(), y)],
                stroke,
            );

            let x = self.cell(0, i).left();
            self.painter.line_segment(
                [egui::pos2(x, board.top()), egui::pos2(x, board.bottom())],
                stroke,
            );
        }
    }

    fn draw_mark(&mut self, row: usize, col: usize, mark: Mark) {
        let rect = self.cell(row, col);

        match mark {
            Mark::X => {
                let space = rect.width().min(rect.height()) / 4.0;
                let inner = rect.shrink(space);
                let stroke = egui::Stroke::new(CROSS_WIDTH, CROSS_COLOR);
                self.painter
                    .line_segment([inner.left_bottom(), inner.right_top()], stroke);
                self.painter
                    .line_segment([inner.left_top(), inner.right_bottom()], stroke);
            }
            Mark::O => {
                let radius = rect.width().min(rect.height()) / 3.0;
                self.painter.circle_stroke(
                    rect.center(),
                    radius,
                    egui::Stroke::new(CIRCLE_WIDTH, CIRCLE_COLOR),
                );
            }
        }
    }

    fn draw_winning_line(&mut self, line: WinLine, mark: Mark) {
        let board = self.to_screen(self.layout.board).shrink(WIN_LINE_INSET);
        let cells = line.cells();
        let first = self.cell(cells[0].0, cells[0].1).center();

        let (start, end) = match line {
            WinLine::Row(_) => (
                egui::pos2(board.left(), first.y),
                egui::pos2(board.right(), first.y),
            ),
            WinLine::Col(_) => (
                egui::pos2(first.x, board.top()),
                egui::pos2(first.x, board.bottom()),
            ),
            WinLine::DiagMain => (board.left_top(), board.right_bottom()),
            WinLine::DiagAnti => (board.right_top(), board.left_bottom()),
        };

        self.painter.line_segment(
            [start, end],
            egui::Stroke::new(LINE_WIDTH, mark_color(mark)),
        );
    }

    fn draw_button(&mut self, rect: Rect, label: &str) {
        let rect = self.to_screen(rect);
        self.painter.rect_filled(rect, 4.0, BUTTON_COLOR);
        self.painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(BUTTON_FONT_SIZE),
            BUTTON_TEXT_COLOR,
        );
    }

    fn draw_status(&mut self, text: &str) {
        self.painter.text(
            egui::pos2(self.window.center().x, self.window.top() + STATUS_FONT_SIZE),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(STATUS_FONT_SIZE),
            BUTTON_TEXT_COLOR,
        );
    }

    // egui presents the painted shapes when the frame ends.
    fn present(&mut self) {}
}
