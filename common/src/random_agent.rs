use crate::board::Board;
use crate::session_rng::SessionRng;

/// Computer opponent that picks uniformly among the empty cells.
pub struct RandomAgent {
    rng: SessionRng,
}

impl RandomAgent {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns `None` only when the board has no empty cell left.
    pub fn choose_move(&mut self, board: &Board) -> Option<(usize, usize)> {
        let available_moves = board.empty_cells();
        if available_moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..available_moves.len());
        Some(available_moves[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_full_board_has_no_move() {
        let mut agent = RandomAgent::new(SessionRng::new(5));
        let board = Board::from_rows(["XOX", "OXO", "OXO"]);
        assert_eq!(agent.choose_move(&board), None);
    }

    #[test]
    fn test_chosen_cell_is_always_empty() {
        let mut agent = RandomAgent::new(SessionRng::new(17));
        for _ in 0..100 {
            let mut board = Board::new();
            let mut mark = Mark::X;
            while let Some((row, col)) = agent.choose_move(&board) {
                assert!(board.empty_cells().contains(&(row, col)));
                board.place(row, col, mark).unwrap();
                mark = mark.opponent();
            }
            assert!(board.is_full());
        }
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let mut agent = RandomAgent::new(SessionRng::new(3));
        let board = Board::from_rows(["XOX", "OXO", "OX."]);
        for _ in 0..10 {
            assert_eq!(agent.choose_move(&board), Some((2, 2)));
        }
    }

    #[test]
    fn test_two_empty_cells_are_chosen_uniformly() {
        const TRIALS: usize = 2000;
        // Chi-square critical value for one degree of freedom at 0.1 % significance.
        const CRITICAL: f64 = 10.828;

        let mut agent = RandomAgent::new(SessionRng::new(2024));
        let board = Board::from_rows(["XO.", "OXO", "OX."]);
        let mut counts = [0usize; 2];
        for _ in 0..TRIALS {
            match agent.choose_move(&board) {
                Some((0, 2)) => counts[0] += 1,
                Some((2, 2)) => counts[1] += 1,
                other => panic!("unexpected move {:?}", other),
            }
        }

        let expected = TRIALS as f64 / 2.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(
            chi_square < CRITICAL,
            "counts {:?} give chi-square {}",
            counts,
            chi_square
        );
    }

    #[test]
    fn test_same_seed_replays_same_moves() {
        let board = Board::from_rows(["X..", ".O.", "..."]);
        let mut a = RandomAgent::new(SessionRng::new(42));
        let mut b = RandomAgent::new(SessionRng::new(42));
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
        assert_eq!(a.seed(), 42);
    }
}
