//! Puzzle session state machine
//!
//! Owns the grid, cursor and phase of today's puzzle and applies keystrokes.

mod key;
mod machine;
mod phase;

pub use key::Key;
pub use crate::error::SessionError;
pub use machine::Session;
pub use phase::Phase;
