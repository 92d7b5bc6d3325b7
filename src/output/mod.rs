//! Terminal output formatting
//!
//! Share text, statistics and countdown display for the CLI.

pub mod display;
pub mod formatters;

pub use display::{print_share, print_statistics, print_today};
pub use formatters::{SHARE_BANNER, share_text};
