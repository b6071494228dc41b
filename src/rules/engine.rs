//! Engine contract.
//!
//! `GameEngine` is the whole surface a renderer or input layer talks to:
//! - Apply moves and query their legality
//! - Start new games
//! - Undo one step
//! - Continue past a win

use crate::board::Move;
use crate::core::Result;
use crate::rules::GameState;

/// Operations on a single game session.
///
/// ## Implementation Notes
///
/// - `make_move`: a no-op on `Lost`; never fails
/// - `undo`: keeps exactly one level of history; `None` when there is none
/// - `is_valid_move`: false while a fresh win awaits `continue_game`
pub trait GameEngine {
    /// The current state.
    fn current_state(&self) -> &GameState;

    /// Slide tiles in `direction` and return the resulting state.
    fn make_move(&mut self, direction: Move) -> &GameState;

    /// Whether `direction` would change the game right now.
    fn is_valid_move(&self, direction: Move) -> bool;

    /// Start over on an empty `size`×`size` board with fresh starting tiles.
    ///
    /// Fails only for `size == 0`; the previous game is kept in that case.
    fn new_game(&mut self, size: usize) -> Result<&GameState>;

    /// Roll back the last accepted move.
    ///
    /// Returns `None` when there is nothing to roll back.
    fn undo(&mut self) -> Option<&GameState>;

    /// Acknowledge a win and keep playing.
    fn continue_game(&mut self) -> &GameState;

    // === Convenience Methods ===

    /// All directions that are currently valid, in `Move::ALL` order.
    fn valid_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&direction| self.is_valid_move(direction))
            .collect()
    }
}
