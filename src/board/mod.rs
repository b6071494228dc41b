//! Board primitives: the grid snapshot, move directions, and slide resolution.
//!
//! Nothing here holds game state. These are pure functions over values,
//! shared by the rules layer and by anything that wants to look ahead
//! without touching an engine.

pub mod direction;
pub mod grid;
pub mod slide;

pub use direction::Move;
pub use grid::Grid;
pub use slide::{can_move, has_any_move, merge_line, slide, LineBuf, SlideOutcome};
