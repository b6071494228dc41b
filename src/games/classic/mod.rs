//! Classic 2048: a square board, 2s and 4s spawning after every effective
//! move, a win at 2048, and one step of undo.

mod game;

pub use game::{ClassicGame, ClassicGameBuilder};
