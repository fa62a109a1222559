use std::io::{BufRead, Write};

use tictactoe_common::log;
use tictactoe_common::render::{InputSource, Renderer};
use tictactoe_common::{BOARD_SIZE, Layout, Mark, Rect, UiEvent, WinLine};

/// Writes each frame as plain text: the grid when one was drawn, then buttons and status.
pub struct TerminalRenderer<W: Write> {
    out: W,
    grid: Option<[[char; BOARD_SIZE]; BOARD_SIZE]>,
    lines: Vec<String>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            grid: None,
            lines: Vec::new(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self) -> std::io::Result<()> {
        writeln!(self.out)?;
        if let Some(grid) = &self.grid {
            for (i, row) in grid.iter().enumerate() {
                let cells: Vec<String> = row.iter().map(char::to_string).collect();
                writeln!(self.out, " {}", cells.join(" | "))?;
                if i + 1 < BOARD_SIZE {
                    writeln!(self.out, "---+---+---")?;
                }
            }
        }
        for line in &self.lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

fn describe_line(line: WinLine) -> String {
    match line {
        WinLine::Row(row) => format!("row {}", row),
        WinLine::Col(col) => format!("column {}", col),
        WinLine::DiagMain => "main diagonal".to_string(),
        WinLine::DiagAnti => "anti diagonal".to_string(),
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        self.grid = None;
        self.lines.clear();
    }

    fn draw_grid_lines(&mut self) {
        self.grid = Some([[' '; BOARD_SIZE]; BOARD_SIZE]);
    }

    fn draw_mark(&mut self, row: usize, col: usize, mark: Mark) {
        let grid = self.grid.get_or_insert([[' '; BOARD_SIZE]; BOARD_SIZE]);
        grid[row][col] = mark.symbol();
    }

    fn draw_winning_line(&mut self, line: WinLine, mark: Mark) {
        self.lines
            .push(format!("{} completed the {}", mark, describe_line(line)));
    }

    fn draw_button(&mut self, rect: Rect, label: &str) {
        let (x, y) = rect.center();
        self.lines.push(format!("[{}] click {} {}", label, x, y));
    }

    fn draw_status(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn present(&mut self) {
        if let Err(err) = self.write_frame() {
            log!("Failed to write frame: {}", err);
        }
    }
}

/// Reads one command per line: `quit`, `cell <row> <col>` or a raw `<x> <y>` click.
pub struct StdinInput<R: BufRead> {
    reader: R,
    layout: Layout,
}

impl<R: BufRead> StdinInput<R> {
    pub fn new(reader: R, layout: Layout) -> Self {
        Self { reader, layout }
    }

    fn parse(&self, line: &str) -> Option<UiEvent> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["quit"] | ["q"] => Some(UiEvent::Quit),
            ["cell", row, col] => {
                let row: usize = row.parse().ok()?;
                let col: usize = col.parse().ok()?;
                if row >= BOARD_SIZE || col >= BOARD_SIZE {
                    return None;
                }
                let (x, y) = self.layout.cell_rect(row, col).center();
                Some(UiEvent::PointerDown { x, y })
            }
            [x, y] => Some(UiEvent::PointerDown {
                x: x.parse().ok()?,
                y: y.parse().ok()?,
            }),
            _ => None,
        }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    fn poll_event(&mut self) -> Option<UiEvent> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    log!("Failed to read input: {}", err);
                    return None;
                }
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match self.parse(trimmed) {
                Some(event) => return Some(event),
                None => log!("Ignoring unrecognized command: {}", trimmed),
            }
        }
    }
}
