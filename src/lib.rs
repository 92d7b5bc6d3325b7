//! Wordle Daily
//!
//! One puzzle per calendar day: six tries to guess a secret word, with
//! progress saved per day and statistics computed from the saved history.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Classification, SecretWord};
//! use wordle_daily::session::{Key, Phase, Session};
//!
//! let mut session = Session::new(SecretWord::new("hello").unwrap());
//! for c in "hello".chars() {
//!     session.submit_key(Key::Letter(c));
//! }
//! session.submit_key(Key::Enter);
//!
//! assert_eq!(session.phase(), Phase::Won);
//! assert_eq!(session.classify(0, 0), Classification::Correct);
//! ```

// Core domain types and scoring
pub mod core;

// Game state machine
pub mod session;

// Calendar keys and countdown
pub mod daily;

// Persistence
pub mod storage;

// Aggregated statistics
pub mod stats;

// Today's game wired to storage
pub mod game;

pub mod error;

pub mod config;

pub mod logging;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
