use crate::board::{Board, Mark, WinLine};
use crate::error::GameError;
use crate::layout::Layout;
use crate::log;
use crate::random_agent::RandomAgent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    OnePlayerMenu,
    Playing,
    GameOver,
}

/// Who controls each mark for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TwoPlayer,
    OnePlayerAsX,
    OnePlayerAsO,
}

impl Mode {
    pub fn agent_mark(self) -> Option<Mark> {
        match self {
            Mode::TwoPlayer => None,
            Mode::OnePlayerAsX => Some(Mark::O),
            Mode::OnePlayerAsO => Some(Mark::X),
        }
    }

    pub fn human_mark(self) -> Option<Mark> {
        self.agent_mark().map(Mark::opponent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Quit,
    PointerDown { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark, WinLine),
    Draw,
}

/// Drives menu, mode selection, play and end screens. Owns the board, the turn
/// marker and the computer player; nothing else mutates them.
pub struct GameFlowController {
    board: Board,
    current_mark: Mark,
    mode: Option<Mode>,
    screen: Screen,
    outcome: Option<Outcome>,
    layout: Layout,
    agent: RandomAgent,
}

impl GameFlowController {
    pub fn new(layout: Layout, agent: RandomAgent) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode: None,
            screen: Screen::MainMenu,
            outcome: None,
            layout,
            agent,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Set only while the game-over screen is showing.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// `NoLegalMove` aborts the session back to the main menu before it is returned.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<Flow, GameError> {
        let (x, y) = match event {
            UiEvent::Quit => {
                log!("Quit requested on {:?}", self.screen);
                return Ok(Flow::Quit);
            }
            UiEvent::PointerDown { x, y } => (x, y),
        };

        let result = match self.screen {
            Screen::MainMenu => self.on_main_menu_click(x, y),
            Screen::OnePlayerMenu => self.on_one_player_menu_click(x, y),
            Screen::Playing => self.on_board_click(x, y),
            Screen::GameOver => self.on_game_over_click(x, y),
        };

        self.settle(result)
    }

    fn settle(&mut self, result: Result<(), GameError>) -> Result<Flow, GameError> {
        if let Err(err) = result {
            self.abort_session(err);
            return Err(err);
        }
        Ok(Flow::Continue)
    }

    fn on_main_menu_click(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        if self.layout.two_player_region.contains(x, y) {
            return self.start_game(Mode::TwoPlayer);
        }
        if self.layout.one_player_region.contains(x, y) {
            self.switch_screen(Screen::OnePlayerMenu);
        }
        Ok(())
    }

    fn on_one_player_menu_click(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        if self.layout.play_first_region.contains(x, y) {
            self.start_game(Mode::OnePlayerAsX)
        } else if self.layout.play_second_region.contains(x, y) {
            self.start_game(Mode::OnePlayerAsO)
        } else {
            if self.layout.back_region.contains(x, y) {
                self.switch_screen(Screen::MainMenu);
            }
            Ok(())
        }
    }

    fn on_board_click(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        let Ok((row, col)) = self.layout.cell_at(x, y) else {
            return Ok(());
        };
        if self.apply_move(row, col).is_err() {
            return Ok(());
        }
        self.play_agent_if_due()
    }

    fn on_game_over_click(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        if self.layout.menu_region.contains(x, y) {
            self.mode = None;
            self.outcome = None;
            self.switch_screen(Screen::MainMenu);
        } else if self.layout.restart_region.contains(x, y)
            && let Some(mode) = self.mode
        {
            return self.start_game(mode);
        }
        Ok(())
    }

    fn start_game(&mut self, mode: Mode) -> Result<(), GameError> {
        self.mode = Some(mode);
        self.begin_round();
        self.play_agent_if_due()
    }

    fn begin_round(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.outcome = None;
        log!("Starting {:?} game", self.mode);
        self.switch_screen(Screen::Playing);
    }

    fn play_agent_if_due(&mut self) -> Result<(), GameError> {
        let agent_mark = self.mode.and_then(Mode::agent_mark);
        if self.screen != Screen::Playing || agent_mark != Some(self.current_mark) {
            return Ok(());
        }

        let (row, col) = self
            .agent
            .choose_move(&self.board)
            .ok_or(GameError::NoLegalMove)?;
        self.apply_move(row, col)
    }

    /// Places the current mark, then either ends the round or passes the turn.
    fn apply_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let mark = self.current_mark;
        self.board.place(row, col, mark)?;

        if let Some(line) = self.board.winner_for(mark) {
            log!("{} wins on {:?}", mark, line);
            self.finish(Outcome::Winner(mark, line));
        } else if self.board.is_draw(mark) {
            log!("Game ended in a draw");
            self.finish(Outcome::Draw);
        } else {
            self.current_mark = mark.opponent();
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.switch_screen(Screen::GameOver);
    }

    fn abort_session(&mut self, err: GameError) {
        log!("Aborting {:?} session: {}", self.mode, err);
        self.mode = None;
        self.outcome = None;
        self.switch_screen(Screen::MainMenu);
    }

    fn switch_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            log!("Screen {:?} -> {:?}", self.screen, screen);
        }
        self.screen = screen;
    }
}
