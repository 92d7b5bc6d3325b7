//! Formatting utilities for share text and terminal output

use crate::session::Session;

/// Banner line at the top of the share text
pub const SHARE_BANNER: &str = "WORDLE";

/// Glyphs for one submitted row, e.g. "🟩🟨⬛⬛🟩"
///
/// Returns an empty string for rows that haven't been submitted.
#[must_use]
pub fn row_glyphs(session: &Session, row: usize) -> String {
    (0..session.width())
        .filter_map(|col| session.classify(row, col).glyph())
        .collect()
}

/// Share text: the banner, then one glyph line per submitted row
///
/// # Examples
/// ```
/// use wordle_daily::core::SecretWord;
/// use wordle_daily::output::share_text;
/// use wordle_daily::session::{Key, Session};
///
/// let mut session = Session::new(SecretWord::new("hi").unwrap());
/// for key in [Key::Letter('h'), Key::Letter('o'), Key::Enter] {
///     session.submit_key(key);
/// }
/// assert_eq!(share_text(&session), "WORDLE\n🟩⬛");
/// ```
#[must_use]
pub fn share_text(session: &Session) -> String {
    let mut lines = vec![SHARE_BANNER.to_string()];
    lines.extend((0..session.guesses_used()).map(|row| row_glyphs(session, row)));
    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    let filled = (value * width / max).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
