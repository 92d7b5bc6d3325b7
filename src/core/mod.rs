//! Core domain types for the daily puzzle
//!
//! This module contains the fundamental, I/O-free types: the secret word,
//! the guess grid and the letter scorer. Everything here is pure and testable.

mod classification;
mod grid;
mod word;

pub use classification::{Classification, Keycaps, classify, classify_keycaps};
pub use grid::{Cell, Cursor, Grid, TRIES};
pub use word::{SecretWord, WordError};
