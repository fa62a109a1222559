use thiserror::Error;

/// Failures raised while applying moves to the board.
///
/// `CellOccupied` and `OutOfRange` are ordinary input noise and are swallowed by the
/// controller. `NoLegalMove` means the computer player was asked to move on a full
/// board, which the controller treats as a broken session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: i32, col: i32 },

    #[error("computer player has no legal move")]
    NoLegalMove,
}
