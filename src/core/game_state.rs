//! Game state module - the spawn/fall/lock/clear cycle
//!
//! `GameState` owns the board, the lookahead queue and the active piece,
//! and is their sole mutator. Gravity timing lives in the runner; `tick`
//! performs one forced downward step. Invalid moves are silently reverted,
//! never reported: the only terminal outcome is the game-over flag.

use crate::config::GameConfig;
use crate::core::board::Board;
use crate::core::catalog::PieceQueue;
use crate::core::piece::Piece;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    queue: PieceQueue,
    current: Piece,
    score: u32,
    game_over: bool,
}

impl GameState {
    /// Create a running game: empty board sized from the configuration,
    /// queue pre-filled from the seeded stream, first piece already active.
    pub fn new(config: &GameConfig, seed: u32) -> Self {
        let board = Board::new(config.cols(), config.rows());
        let mut queue = PieceQueue::new(seed, config.cols());
        let current = queue.draw();
        Self {
            board,
            queue,
            current,
            score: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// One gravity step: move the piece down, or lock it where it rests.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        self.current.y += 1;
        if !self.valid_current() {
            self.current.y -= 1;
            self.lock();
        }
    }

    /// Apply a player command. A command that would produce an invalid
    /// placement is undone; after game over every command is ignored.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.game_over {
            return;
        }
        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::SoftDrop => {
                // Unlike the gravity tick, a blocked soft drop does not
                // lock; the piece settles on the next tick.
                self.current.y += 1;
                if !self.valid_current() {
                    self.current.y -= 1;
                }
            }
            GameAction::Rotate => {
                self.current.rotate_cw();
                if !self.valid_current() {
                    // Three more quarter turns restore the original
                    // orientation for every shape.
                    for _ in 0..3 {
                        self.current.rotate_cw();
                    }
                }
            }
        }
    }

    /// Merge the resting piece, clear full rows, bring up the next piece.
    /// A blocked spawn position ends the game.
    fn lock(&mut self) {
        self.board.merge(&self.current);
        self.score += self.board.clear_full_rows() as u32;

        self.current = self.queue.draw();
        if !self.valid_current() {
            self.game_over = true;
        }
    }

    fn try_shift(&mut self, dx: i16) {
        self.current.x += dx;
        if !self.valid_current() {
            self.current.x -= dx;
        }
    }

    fn valid_current(&self) -> bool {
        self.board
            .is_valid_placement(&self.current.shape, self.current.x, self.current.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::PieceCatalog;
    use crate::types::{Rgb, LOOKAHEAD};

    const O_COLOR: Rgb = Rgb::new(255, 0, 0);
    const GRAY: Rgb = Rgb::new(128, 128, 128);

    fn new_game(seed: u32) -> GameState {
        GameState::new(&GameConfig::default(), seed)
    }

    /// Swap in a specific catalog piece as the active one.
    fn force_current(state: &mut GameState, index: usize) {
        state.current = Piece::spawn(&PieceCatalog::descriptors()[index], 10);
    }

    #[test]
    fn test_construction() {
        let state = new_game(1);
        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.queue_len(), LOOKAHEAD);
        assert_eq!(state.current().y, 0);
    }

    #[test]
    fn test_tick_applies_gravity() {
        let mut state = new_game(1);
        let y = state.current().y;
        state.tick();
        assert_eq!(state.current().y, y + 1);
    }

    #[test]
    fn test_tick_at_floor_locks_and_respawns() {
        let mut state = new_game(1);
        force_current(&mut state, 1); // O at x=4
        state.current.y = 18;

        state.tick();

        // Locked cells carry the O color; a new piece is active at the top.
        assert_eq!(state.board().get(4, 18), Some(Some(O_COLOR)));
        assert_eq!(state.board().get(5, 18), Some(Some(O_COLOR)));
        assert_eq!(state.board().get(4, 19), Some(Some(O_COLOR)));
        assert_eq!(state.board().get(5, 19), Some(Some(O_COLOR)));
        assert_eq!(state.current().y, 0);
        assert_eq!(state.queue_len(), LOOKAHEAD);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_lock_with_full_row_scores_and_compacts() {
        let mut state = new_game(1);
        for x in 0..=7 {
            state.board.set(x, 19, Some(GRAY));
        }
        force_current(&mut state, 1); // O
        state.current.x = 8;
        state.current.y = 18;

        state.tick();

        // Row 19 was completed by the O's bottom half and cleared; the top
        // half compacted down into it.
        assert_eq!(state.score(), 1);
        assert_eq!(state.board().get(8, 19), Some(Some(O_COLOR)));
        assert_eq!(state.board().get(9, 19), Some(Some(O_COLOR)));
        assert_eq!(state.board().get(8, 18), Some(None));
        for x in 0..=7 {
            assert_eq!(state.board().get(x, 19), Some(None));
        }
    }

    #[test]
    fn test_lock_without_full_row_leaves_score() {
        // Unattended pieces stack in the center columns and never complete
        // a row, so every lock is a zero-score lock.
        let mut state = new_game(1);

        for _ in 0..200 {
            state.tick();
            if state.game_over() {
                break;
            }
        }
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut state = new_game(1);
        // Occupy the spawn area without completing any row.
        for x in 3..=6 {
            state.board.set(x, 0, Some(GRAY));
            state.board.set(x, 1, Some(GRAY));
        }
        force_current(&mut state, 1); // O
        state.current.x = 0;
        state.current.y = 18;

        state.tick();

        assert!(state.game_over());
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = new_game(1);
        state.game_over = true;

        let board = state.board().cells().to_vec();
        let current = *state.current();
        let score = state.score();

        state.tick();
        state.apply_action(GameAction::MoveLeft);
        state.apply_action(GameAction::MoveRight);
        state.apply_action(GameAction::SoftDrop);
        state.apply_action(GameAction::Rotate);

        assert_eq!(state.board().cells(), &board[..]);
        assert_eq!(*state.current(), current);
        assert_eq!(state.score(), score);
    }

    #[test]
    fn test_move_left_clamps_at_wall() {
        let mut state = new_game(1);
        for _ in 0..20 {
            state.apply_action(GameAction::MoveLeft);
        }
        assert_eq!(state.current().x, 0);

        // One more is rejected without side effects.
        state.apply_action(GameAction::MoveLeft);
        assert_eq!(state.current().x, 0);
    }

    #[test]
    fn test_move_right_clamps_at_wall() {
        let mut state = new_game(1);
        let width = state.current().shape.width() as i16;
        for _ in 0..20 {
            state.apply_action(GameAction::MoveRight);
        }
        assert_eq!(state.current().x, 10 - width);
    }

    #[test]
    fn test_soft_drop_at_floor_does_not_lock() {
        let mut state = new_game(1);
        force_current(&mut state, 1); // O
        state.current.y = 18;

        state.apply_action(GameAction::SoftDrop);

        // Rejected but still falling: nothing merged, nothing spawned.
        assert_eq!(state.current().y, 18);
        assert_eq!(state.board().get(4, 19), Some(None));
        assert!(!state.game_over());

        // The next gravity tick is what locks it.
        state.tick();
        assert_eq!(state.board().get(4, 19), Some(Some(O_COLOR)));
    }

    #[test]
    fn test_soft_drop_moves_down_when_free() {
        let mut state = new_game(1);
        let y = state.current().y;
        state.apply_action(GameAction::SoftDrop);
        assert_eq!(state.current().y, y + 1);
    }

    #[test]
    fn test_failed_rotation_fully_restores_orientation() {
        let mut state = new_game(1);
        force_current(&mut state, 3); // L: 3 wide, 2 tall
        state.current.y = 18;
        let shape = state.current().shape;

        // Rotating at the floor would need three rows of space below.
        state.apply_action(GameAction::Rotate);

        // The L is not 180-degree symmetric, so a single corrective turn
        // would leave it sideways; the revert must be a full cycle.
        assert_eq!(state.current().shape, shape);
        assert_eq!(state.current().y, 18);
    }

    #[test]
    fn test_failed_rotation_against_occupancy() {
        let mut state = new_game(1);
        force_current(&mut state, 0); // I at x=3, 4 wide, 1 tall
        state.current.y = 5;
        // Block the column the vertical I would need.
        for y in 6..=8 {
            state.board.set(3, y, Some(GRAY));
        }
        let shape = state.current().shape;

        state.apply_action(GameAction::Rotate);

        assert_eq!(state.current().shape, shape);
    }

    #[test]
    fn test_rotation_applies_when_free() {
        let mut state = new_game(1);
        force_current(&mut state, 0); // I
        state.current.y = 5;

        state.apply_action(GameAction::Rotate);

        assert_eq!(state.current().shape.width(), 1);
        assert_eq!(state.current().shape.height(), 4);
    }

    #[test]
    fn test_no_full_rows_survive_a_lock() {
        let mut state = new_game(42);

        for _ in 0..2000 {
            state.tick();
            if state.game_over() {
                break;
            }
        }

        let board = state.board();
        for y in 0..board.height() as i16 {
            let full = (0..board.width() as i16).all(|x| board.is_occupied(x, y));
            assert!(!full, "row {} left fully occupied", y);
        }
    }
}
