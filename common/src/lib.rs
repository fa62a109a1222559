pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod logger;
pub mod random_agent;
pub mod render;
pub mod session_rng;

pub use board::{BOARD_SIZE, Board, Cell, Mark, WinLine};
pub use controller::{Flow, GameFlowController, Mode, Outcome, Screen, UiEvent};
pub use error::GameError;
pub use layout::{Layout, Rect};
pub use random_agent::RandomAgent;
pub use render::{InputSource, Renderer};
pub use session_rng::SessionRng;
