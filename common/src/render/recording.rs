use std::collections::VecDeque;

use crate::board::{Mark, WinLine};
use crate::controller::UiEvent;
use crate::layout::Rect;

use super::{InputSource, Renderer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear,
    GridLines,
    Mark { row: usize, col: usize, mark: Mark },
    WinningLine { line: WinLine, mark: Mark },
    Button { rect: Rect, label: String },
    Status(String),
    Present,
}

/// Headless renderer that keeps every presented frame as a list of commands.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCommand>,
    frames: Vec<Vec<DrawCommand>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear);
    }

    fn draw_grid_lines(&mut self) {
        self.pending.push(DrawCommand::GridLines);
    }

    fn draw_mark(&mut self, row: usize, col: usize, mark: Mark) {
        self.pending.push(DrawCommand::Mark { row, col, mark });
    }

    fn draw_winning_line(&mut self, line: WinLine, mark: Mark) {
        self.pending.push(DrawCommand::WinningLine { line, mark });
    }

    fn draw_button(&mut self, rect: Rect, label: &str) {
        self.pending.push(DrawCommand::Button {
            rect,
            label: label.to_string(),
        });
    }

    fn draw_status(&mut self, text: &str) {
        self.pending.push(DrawCommand::Status(text.to_string()));
    }

    fn present(&mut self) {
        self.pending.push(DrawCommand::Present);
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

/// FIFO of pending events. Reports the source as exhausted once drained.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<UiEvent>,
}

impl EventQueue {
    pub fn new(events: impl IntoIterator<Item = UiEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: UiEvent) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for EventQueue {
    fn poll_event(&mut self) -> Option<UiEvent> {
        self.events.pop_front()
    }
}
