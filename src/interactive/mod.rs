//! Interactive TUI
//!
//! Terminal front end for today's puzzle. It only draws what the session
//! reports and forwards keystrokes; all game rules live in the core.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
