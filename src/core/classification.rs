//! Per-cell feedback classification
//!
//! Scoring is position-naive: a guessed letter that occurs anywhere in the
//! secret is `Present` unless it sits in the matching column, regardless of
//! how many times it occurs in either word.
//! - Correct = letter matches the secret at this column
//! - Present = letter is elsewhere in the secret
//! - Absent = letter is not in the secret
//! - Untested = row has not been submitted yet

use super::{Grid, SecretWord};
use rustc_hash::FxHashSet;

/// Feedback for a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Untested,
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Share glyph for a scored cell
    ///
    /// `Untested` cells have no glyph and never appear in share text.
    #[must_use]
    pub const fn glyph(self) -> Option<char> {
        match self {
            Self::Correct => Some('🟩'),
            Self::Present => Some('🟨'),
            Self::Absent => Some('⬛'),
            Self::Untested => None,
        }
    }

    /// Check whether the cell belongs to a submitted row
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Untested)
    }
}

/// Classify the cell at `(row, col)`
///
/// `current_row` is the cursor row: every row below it has been submitted.
///
/// # Examples
/// ```
/// use wordle_daily::core::{Classification, Grid, SecretWord, classify};
///
/// let secret = SecretWord::new("hello").unwrap();
/// let mut grid = Grid::new(6, 5);
/// for (col, ch) in "lleho".chars().enumerate() {
///     grid.set(0, col, Some(ch));
/// }
///
/// assert_eq!(classify(&grid, 1, 0, 0, &secret), Classification::Present);
/// assert_eq!(classify(&grid, 1, 0, 4, &secret), Classification::Correct);
/// assert_eq!(classify(&grid, 0, 0, 4, &secret), Classification::Untested);
/// ```
#[must_use]
pub fn classify(
    grid: &Grid,
    current_row: usize,
    row: usize,
    col: usize,
    secret: &SecretWord,
) -> Classification {
    if row >= current_row || row >= grid.height() || col >= grid.width() {
        return Classification::Untested;
    }

    match grid.cell(row, col) {
        Some(letter) if secret.char_at(col) == Some(letter) => Classification::Correct,
        Some(letter) if secret.has_letter(letter) => Classification::Present,
        _ => Classification::Absent,
    }
}

/// Letters grouped by how they should tint the on-screen keyboard
///
/// A letter lands in at most one set: `correct` wins over `present`.
/// `absent` is disjoint from both because scoring is position-naive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keycaps {
    pub correct: FxHashSet<char>,
    pub present: FxHashSet<char>,
    pub absent: FxHashSet<char>,
}

impl Keycaps {
    /// Classification for a single key, `Untested` if never scored
    #[must_use]
    pub fn of(&self, letter: char) -> Classification {
        if self.correct.contains(&letter) {
            Classification::Correct
        } else if self.present.contains(&letter) {
            Classification::Present
        } else if self.absent.contains(&letter) {
            Classification::Absent
        } else {
            Classification::Untested
        }
    }
}

/// Aggregate the scored cells of all submitted rows into key-cap sets
#[must_use]
pub fn classify_keycaps(grid: &Grid, current_row: usize, secret: &SecretWord) -> Keycaps {
    let mut caps = Keycaps::default();

    for row in 0..current_row.min(grid.height()) {
        for col in 0..grid.width() {
            let Some(letter) = grid.cell(row, col) else {
                continue;
            };
            match classify(grid, current_row, row, col, secret) {
                Classification::Correct => {
                    caps.correct.insert(letter);
                }
                Classification::Present => {
                    caps.present.insert(letter);
                }
                Classification::Absent => {
                    caps.absent.insert(letter);
                }
                Classification::Untested => {}
            }
        }
    }

    caps.present.retain(|letter| !caps.correct.contains(letter));
    caps
}
