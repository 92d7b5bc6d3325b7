//! Keystroke-driven puzzle session

use super::{Key, Phase};
use crate::core::{
    Cell, Classification, Cursor, Grid, Keycaps, SecretWord, TRIES, classify, classify_keycaps,
};
use crate::error::SessionError;
use crate::storage::Snapshot;

fn violation(msg: impl Into<String>) -> SessionError {
    SessionError::InvariantViolation(msg.into())
}

/// One day's puzzle: the grid of guesses, the input cursor and the phase
///
/// All mutation goes through [`Session::submit_key`]. Classification is always
/// derived from the grid and the secret, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: SecretWord,
    grid: Grid,
    cursor: Cursor,
    phase: Phase,
}

impl Session {
    /// Start a fresh session for `secret`
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        let grid = Grid::new(TRIES, secret.len());
        Self {
            secret,
            grid,
            cursor: Cursor::default(),
            phase: Phase::Playing,
        }
    }

    /// Rebuild a session from a stored snapshot
    ///
    /// The snapshot must describe a state this machine could have reached:
    /// `TRIES` rows of `secret.len()` single-letter-or-empty cells, submitted
    /// rows full, the cursor row filled up to the cursor column and nothing
    /// after it. A `Playing` snapshot is re-evaluated, so a save taken between
    /// the row advance and the phase change settles on restore.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvariantViolation` if any of the above fails.
    pub fn restore(secret: SecretWord, snapshot: &Snapshot) -> Result<Self, SessionError> {
        let width = secret.len();

        if snapshot.rows.len() != TRIES {
            return Err(violation(format!(
                "expected {TRIES} rows, found {}",
                snapshot.rows.len()
            )));
        }

        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(TRIES);
        for (r, row) in snapshot.rows.iter().enumerate() {
            if row.len() != width {
                return Err(violation(format!(
                    "row {r} has {} cells, expected {width}",
                    row.len()
                )));
            }
            let cells = row
                .iter()
                .map(|cell| parse_cell(cell).ok_or_else(|| violation(format!("bad cell {cell:?} in row {r}"))))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        let cursor = Cursor::new(snapshot.cur_row, snapshot.cur_col);
        if cursor.row > TRIES || cursor.column > width {
            return Err(violation(format!(
                "cursor ({}, {}) out of bounds",
                cursor.row, cursor.column
            )));
        }
        if cursor.row == TRIES && cursor.column != 0 {
            return Err(violation("cursor column set past the last row"));
        }

        for (r, row) in rows.iter().enumerate() {
            let filled = match r.cmp(&cursor.row) {
                std::cmp::Ordering::Less => width,
                std::cmp::Ordering::Equal => cursor.column,
                std::cmp::Ordering::Greater => 0,
            };
            let consistent = row
                .iter()
                .enumerate()
                .all(|(c, cell)| cell.is_some() == (c < filled));
            if !consistent {
                return Err(violation(format!("row {r} disagrees with the cursor")));
            }
        }

        let grid = Grid::from_rows(rows, width).ok_or_else(|| violation("ragged grid"))?;

        match snapshot.game_state {
            Phase::Won => {
                let last = cursor.row.checked_sub(1).and_then(|r| grid.row(r));
                if !last.is_some_and(|row| secret.matches(row)) {
                    return Err(violation("won snapshot whose last row is not the secret"));
                }
            }
            Phase::Lost if cursor.row != TRIES => {
                return Err(violation("lost snapshot with attempts remaining"));
            }
            _ => {}
        }

        let mut session = Self {
            secret,
            grid,
            cursor,
            phase: snapshot.game_state,
        };
        session.evaluate_phase();
        Ok(session)
    }

    /// Serialize the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let rows = self
            .grid
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(String::from).unwrap_or_default()).collect())
            .collect();

        Snapshot {
            rows,
            cur_row: self.cursor.row,
            cur_col: self.cursor.column,
            game_state: self.phase,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Grid width, equal to the secret's length
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.secret.len()
    }

    /// Number of submitted rows
    #[inline]
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.cursor.row
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Apply a keystroke
    ///
    /// Returns `true` if the grid, cursor or phase changed. Rejected keys
    /// (full row, empty row, incomplete row on enter, finished game) leave the
    /// session untouched and return `false`.
    pub fn submit_key(&mut self, key: Key) -> bool {
        if self.phase.is_terminal() || self.cursor.row >= TRIES {
            return false;
        }

        let width = self.width();
        match key {
            Key::Clear => {
                if self.cursor.column == 0 {
                    return false;
                }
                self.cursor.column -= 1;
                self.grid.set(self.cursor.row, self.cursor.column, None);
                true
            }
            Key::Enter => {
                if self.cursor.column != width {
                    return false;
                }
                self.cursor.row += 1;
                self.cursor.column = 0;
                self.evaluate_phase();
                true
            }
            Key::Letter(letter) => {
                if self.cursor.column >= width || !letter.is_ascii_alphabetic() {
                    return false;
                }
                let letter = letter.to_ascii_lowercase();
                self.grid.set(self.cursor.row, self.cursor.column, Some(letter));
                self.cursor.column += 1;
                true
            }
        }
    }

    /// Settle the phase after a row has been submitted
    ///
    /// A win is checked before a loss, so a correct final row is never
    /// reported as lost. Returns `true` if the phase changed.
    pub fn evaluate_phase(&mut self) -> bool {
        if self.phase.is_terminal() || self.cursor.row == 0 {
            return false;
        }

        let won = self
            .grid
            .row(self.cursor.row - 1)
            .is_some_and(|row| self.secret.matches(row));

        if won {
            self.phase = Phase::Won;
        } else if self.cursor.row >= TRIES {
            self.phase = Phase::Lost;
        } else {
            return false;
        }

        tracing::debug!(phase = %self.phase, guesses = self.cursor.row, "session finished");
        true
    }

    /// Classify the cell at `(row, col)` against the secret
    #[must_use]
    pub fn classify(&self, row: usize, col: usize) -> Classification {
        classify(&self.grid, self.cursor.row, row, col, &self.secret)
    }

    /// Key-cap tint sets for every letter scored so far
    #[must_use]
    pub fn classify_keycaps(&self) -> Keycaps {
        classify_keycaps(&self.grid, self.cursor.row, &self.secret)
    }
}

fn parse_cell(cell: &str) -> Option<Cell> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(c), None) if c.is_ascii_lowercase() => Some(Some(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hello() -> Session {
        Session::new(SecretWord::new("hello").unwrap())
    }

    fn type_word(session: &mut Session, word: &str) {
        for c in word.chars() {
            session.submit_key(Key::Letter(c));
        }
    }

    fn guess(session: &mut Session, word: &str) {
        type_word(session, word);
        session.submit_key(Key::Enter);
    }

    #[test]
    fn letters_fill_the_current_row() {
        let mut session = hello();
        type_word(&mut session, "he");

        assert_eq!(session.cursor(), Cursor::new(0, 2));
        assert_eq!(session.grid().cell(0, 0), Some('h'));
        assert_eq!(session.grid().cell(0, 1), Some('e'));
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn letter_on_full_row_is_rejected() {
        let mut session = hello();
        type_word(&mut session, "hello");
        let before = session.clone();

        assert!(!session.submit_key(Key::Letter('x')));
        assert_eq!(session, before);
    }

    #[test]
    fn clear_at_column_zero_is_noop() {
        let mut session = hello();
        let before = session.clone();

        assert!(!session.submit_key(Key::Clear));
        assert_eq!(session, before);
    }

    #[test]
    fn clear_erases_previous_cell() {
        let mut session = hello();
        type_word(&mut session, "hex");

        assert!(session.submit_key(Key::Clear));
        assert_eq!(session.cursor(), Cursor::new(0, 2));
        assert_eq!(session.grid().cell(0, 2), None);
        assert_eq!(session.grid().cell(0, 1), Some('e'));
    }

    #[test]
    fn enter_on_incomplete_row_is_noop() {
        let mut session = hello();
        type_word(&mut session, "hell");
        let before = session.clone();

        assert!(!session.submit_key(Key::Enter));
        assert_eq!(session, before);
    }

    #[test]
    fn enter_on_full_row_advances() {
        let mut session = hello();
        guess(&mut session, "world");

        assert_eq!(session.cursor(), Cursor::new(1, 0));
        assert_eq!(session.guesses_used(), 1);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn any_full_row_is_accepted_without_dictionary_check() {
        let mut session = hello();
        guess(&mut session, "zzzzz");
        assert_eq!(session.cursor().row, 1);
    }

    #[test]
    fn win_detection() {
        let mut session = hello();
        guess(&mut session, "world");
        guess(&mut session, "hello");

        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(session.guesses_used(), 2);
    }

    #[test]
    fn loss_only_after_sixth_row() {
        let mut session = hello();
        for attempt in 1..=TRIES {
            assert_eq!(session.phase(), Phase::Playing, "lost before attempt {attempt}");
            guess(&mut session, "world");
        }
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.cursor(), Cursor::new(TRIES, 0));
    }

    #[test]
    fn winning_final_row_is_not_a_loss() {
        let mut session = hello();
        for _ in 0..TRIES - 1 {
            guess(&mut session, "world");
        }
        guess(&mut session, "hello");
        assert_eq!(session.phase(), Phase::Won);
    }

    #[test]
    fn terminal_phase_freezes_session() {
        let mut session = hello();
        guess(&mut session, "hello");
        let before = session.clone();

        for key in [Key::Letter('a'), Key::Clear, Key::Enter] {
            assert!(!session.submit_key(key));
        }
        assert_eq!(session, before);
    }

    #[test]
    fn evaluate_phase_is_idempotent() {
        let mut session = hello();
        assert!(!session.evaluate_phase());

        guess(&mut session, "hello");
        assert!(!session.evaluate_phase());
        assert_eq!(session.phase(), Phase::Won);
    }

    #[test]
    fn classify_reads_submitted_rows_only() {
        let mut session = hello();
        guess(&mut session, "lleho");
        type_word(&mut session, "hel");

        assert_eq!(session.classify(0, 0), Classification::Present);
        assert_eq!(session.classify(0, 2), Classification::Present);
        assert_eq!(session.classify(0, 4), Classification::Correct);
        assert_eq!(session.classify(1, 0), Classification::Untested);
    }

    #[test]
    fn snapshot_restore_preserves_state() {
        let mut session = hello();
        guess(&mut session, "world");
        type_word(&mut session, "he");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.cur_row, 1);
        assert_eq!(snapshot.cur_col, 2);
        assert_eq!(snapshot.rows[0], vec!["w", "o", "r", "l", "d"]);
        assert_eq!(snapshot.rows[1], vec!["h", "e", "", "", ""]);

        let restored = Session::restore(SecretWord::new("hello").unwrap(), &snapshot).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn restore_settles_unevaluated_phase() {
        let mut session = hello();
        guess(&mut session, "hello");
        let mut snapshot = session.snapshot();
        snapshot.game_state = Phase::Playing;

        let restored = Session::restore(SecretWord::new("hello").unwrap(), &snapshot).unwrap();
        assert_eq!(restored.phase(), Phase::Won);
    }

    #[test]
    fn restore_rejects_wrong_dimensions() {
        let secret = SecretWord::new("hello").unwrap();
        let mut snapshot = hello().snapshot();
        snapshot.rows.pop();
        assert!(matches!(
            Session::restore(secret.clone(), &snapshot),
            Err(SessionError::InvariantViolation(_))
        ));

        let mut snapshot = hello().snapshot();
        snapshot.rows[2].push(String::new());
        assert!(Session::restore(secret.clone(), &snapshot).is_err());

        // Snapshot from a four-letter day
        let short = Session::new(SecretWord::new("word").unwrap()).snapshot();
        assert!(Session::restore(secret, &short).is_err());
    }

    #[test]
    fn restore_rejects_inconsistent_cursor() {
        let secret = SecretWord::new("hello").unwrap();

        let mut snapshot = hello().snapshot();
        snapshot.cur_col = 3;
        assert!(Session::restore(secret.clone(), &snapshot).is_err());

        let mut snapshot = hello().snapshot();
        snapshot.cur_row = TRIES + 1;
        assert!(Session::restore(secret.clone(), &snapshot).is_err());

        let mut snapshot = hello().snapshot();
        snapshot.rows[0][0] = "ab".into();
        snapshot.cur_col = 1;
        assert!(Session::restore(secret, &snapshot).is_err());
    }

    #[test]
    fn restore_rejects_impossible_phase() {
        let secret = SecretWord::new("hello").unwrap();

        let mut snapshot = hello().snapshot();
        snapshot.game_state = Phase::Lost;
        assert!(Session::restore(secret.clone(), &snapshot).is_err());

        let mut session = hello();
        guess(&mut session, "world");
        let mut snapshot = session.snapshot();
        snapshot.game_state = Phase::Won;
        assert!(Session::restore(secret, &snapshot).is_err());
    }

    fn key_strategy() -> impl Strategy<Value = Key> {
        prop_oneof![
            6 => prop::sample::select(vec!['h', 'e', 'l', 'o', 'x']).prop_map(Key::Letter),
            1 => Just(Key::Clear),
            2 => Just(Key::Enter),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn cursor_stays_in_bounds(keys in prop::collection::vec(key_strategy(), 0..120)) {
            let mut session = hello();
            for key in keys {
                session.submit_key(key);
                let cursor = session.cursor();
                prop_assert!(cursor.row <= TRIES);
                prop_assert!(cursor.column <= session.width());
                prop_assert!(cursor.row == TRIES || !session.grid().row_is_empty(cursor.row) || cursor.column == 0);
                for row in cursor.row + 1..TRIES {
                    prop_assert!(session.grid().row_is_empty(row));
                }
            }
        }

        #[test]
        fn terminal_phase_never_changes(keys in prop::collection::vec(key_strategy(), 0..120)) {
            let mut session = hello();
            let mut frozen: Option<Session> = None;
            for key in keys {
                session.submit_key(key);
                if let Some(ref done) = frozen {
                    prop_assert_eq!(&session, done);
                } else if session.is_finished() {
                    frozen = Some(session.clone());
                }
            }
        }

        #[test]
        fn snapshots_always_restore(keys in prop::collection::vec(key_strategy(), 0..120)) {
            let mut session = hello();
            for key in keys {
                session.submit_key(key);
            }
            let restored = Session::restore(SecretWord::new("hello").unwrap(), &session.snapshot());
            prop_assert_eq!(restored, Ok(session));
        }
    }
}
