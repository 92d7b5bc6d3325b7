//! Wire format of one day's session

use crate::session::Phase;
use serde::{Deserialize, Serialize};

/// Persisted state of a single day's puzzle
///
/// Serializes as `{ "rows": [[..]], "curRow": n, "curCol": n, "gameState": ".." }`.
/// Empty cells are stored as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub rows: Vec<Vec<String>>,
    pub cur_row: usize,
    pub cur_col: usize,
    pub game_state: Phase,
}

impl Snapshot {
    /// Number of rows holding at least one letter
    ///
    /// For a won game this is the number of guesses it took.
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_matches_stored_layout() {
        let snapshot = Snapshot {
            rows: vec![
                vec!["h".into(), "i".into()],
                vec![String::new(), String::new()],
            ],
            cur_row: 1,
            cur_col: 0,
            game_state: Phase::Playing,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rows": [["h", "i"], ["", ""]],
                "curRow": 1,
                "curCol": 0,
                "gameState": "playing"
            })
        );
    }

    #[test]
    fn guesses_used_counts_non_empty_rows() {
        let snapshot = Snapshot {
            rows: vec![
                vec!["a".into(), "b".into()],
                vec!["c".into(), "d".into()],
                vec![String::new(), String::new()],
            ],
            cur_row: 2,
            cur_col: 0,
            game_state: Phase::Won,
        };
        assert_eq!(snapshot.guesses_used(), 2);
    }
}
