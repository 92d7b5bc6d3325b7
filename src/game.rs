//! Today's game: a session bound to a daily key and a save queue
//!
//! Keystrokes mutate the in-memory session first; only an accepted mutation
//! queues a snapshot. Persistence failures are logged by the queue and never
//! reach the player.

use crate::core::SecretWord;
use crate::daily::DailyKey;
use crate::error::StoreError;
use crate::output::share_text;
use crate::session::{Key, Session};
use crate::stats::Statistics;
use crate::storage::{History, SaveQueue, Store};

/// The running puzzle for one calendar day
#[derive(Debug)]
pub struct DailyGame {
    session: Session,
    key: DailyKey,
    saves: Option<SaveQueue>,
}

impl DailyGame {
    /// Resume `key` from `history`, or start fresh
    ///
    /// A stored snapshot that fails validation is logged and ignored.
    #[must_use]
    pub fn resume(
        secret: SecretWord,
        key: DailyKey,
        history: &History,
        saves: Option<SaveQueue>,
    ) -> Self {
        let session = match history.get(&key.to_string()) {
            Some(snapshot) => match Session::restore(secret.clone(), snapshot) {
                Ok(session) => {
                    tracing::info!(%key, phase = %session.phase(), row = session.cursor().row, "resumed session");
                    session
                }
                Err(err) => {
                    tracing::warn!(%key, error = %err, "stored session rejected, starting fresh");
                    Session::new(secret)
                }
            },
            None => {
                tracing::info!(%key, "starting new session");
                Session::new(secret)
            }
        };

        Self {
            session,
            key,
            saves,
        }
    }

    /// Load the history and resume today's game
    pub async fn open(secret: SecretWord, store: &dyn Store, saves: Option<SaveQueue>) -> Self {
        let history = load_history(store).await;
        Self::resume(secret, DailyKey::today(), &history, saves)
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn key(&self) -> DailyKey {
        self.key
    }

    /// Apply a keystroke and queue a save if anything changed
    pub fn press(&mut self, key: Key) -> bool {
        if !self.session.submit_key(key) {
            return false;
        }

        if let Some(saves) = &self.saves {
            saves.enqueue(self.key.to_string(), self.session.snapshot());
        }
        true
    }

    /// Switch to a new day's puzzle if the calendar has moved on
    ///
    /// Returns `true` if a fresh session was started.
    pub fn roll_over(&mut self, today: DailyKey, secret: SecretWord) -> bool {
        if today == self.key {
            return false;
        }
        tracing::info!(from = %self.key, to = %today, "new day, new puzzle");
        self.key = today;
        self.session = Session::new(secret);
        true
    }

    /// Share text for the current board
    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(&self.session)
    }
}

/// Load the history, treating any failure as an empty history
///
/// Errors are logged, never returned: play must go on without storage.
pub async fn load_history(store: &dyn Store) -> History {
    match store.load().await {
        Ok(history) => history,
        Err(StoreError::Deserialization(err)) => {
            tracing::warn!(error = %err, "stored history is malformed, ignoring it");
            History::new()
        }
        Err(err) => {
            tracing::warn!(error = %err, "storage unavailable, playing in memory");
            History::new()
        }
    }
}

/// Load the history and aggregate statistics
pub async fn load_statistics(store: &dyn Store) -> Statistics {
    Statistics::from_history(&load_history(store).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn hello() -> SecretWord {
        SecretWord::new("hello").unwrap()
    }

    fn key(day: u32) -> DailyKey {
        DailyKey::for_date(NaiveDate::from_yo_opt(2026, day).unwrap())
    }

    fn play(game: &mut DailyGame, word: &str) {
        for c in word.chars() {
            game.press(Key::Letter(c));
        }
        game.press(Key::Enter);
    }

    #[tokio::test]
    async fn every_accepted_key_is_persisted() {
        let store = Arc::new(MemoryStore::new());
        let (saves, _worker) = SaveQueue::spawn(store.clone());
        let mut game = DailyGame::resume(hello(), key(289), &History::new(), Some(saves.clone()));

        play(&mut game, "world");
        game.press(Key::Letter('h'));
        assert!(!game.press(Key::Enter));
        saves.flush().await;

        let history = store.load().await.unwrap();
        assert_eq!(
            history.get("day-2026-289"),
            Some(&game.session().snapshot())
        );
    }

    #[tokio::test]
    async fn rejected_keys_are_not_persisted() {
        let store = Arc::new(MemoryStore::new());
        let (saves, _worker) = SaveQueue::spawn(store.clone());
        let mut game = DailyGame::resume(hello(), key(289), &History::new(), Some(saves.clone()));

        assert!(!game.press(Key::Clear));
        assert!(!game.press(Key::Enter));
        saves.flush().await;

        assert_eq!(store.payload().await, None);
    }

    #[tokio::test]
    async fn reopening_resumes_today() {
        let store = Arc::new(MemoryStore::new());
        let (saves, _worker) = SaveQueue::spawn(store.clone());
        let mut game = DailyGame::resume(hello(), key(289), &History::new(), Some(saves.clone()));
        play(&mut game, "world");
        play(&mut game, "hello");
        saves.flush().await;

        let history = load_history(&*store).await;
        let resumed = DailyGame::resume(hello(), key(289), &history, None);
        assert_eq!(resumed.session().phase(), Phase::Won);
        assert_eq!(resumed.session(), game.session());

        let tomorrow = DailyGame::resume(hello(), key(290), &history, None);
        assert_eq!(tomorrow.session().phase(), Phase::Playing);
        assert_eq!(tomorrow.session().cursor().row, 0);
    }

    #[test]
    fn invalid_snapshot_falls_back_to_fresh_session() {
        let mut snapshot = Session::new(hello()).snapshot();
        snapshot.rows.truncate(2);
        let history: History = [("day-2026-289", snapshot)].into_iter().collect();

        let game = DailyGame::resume(hello(), key(289), &history, None);
        assert_eq!(game.session(), &Session::new(hello()));
    }

    #[tokio::test]
    async fn malformed_store_means_empty_history() {
        let store = MemoryStore::with_payload("{{{{");
        assert!(load_history(&store).await.is_empty());
        assert_eq!(load_statistics(&store).await, Statistics::default());
    }

    #[tokio::test]
    async fn playing_over_malformed_store_keeps_old_payload() {
        let broken = r#"{"day-2026-001":{"rows":[],"curRow":0,"curCol":0,"gameState":"won""#;
        let store = Arc::new(MemoryStore::with_payload(broken));
        let (saves, _worker) = SaveQueue::spawn(store.clone());
        let history = load_history(&*store).await;
        let mut game = DailyGame::resume(hello(), key(289), &history, Some(saves.clone()));

        assert!(game.press(Key::Letter('a')));
        saves.flush().await;

        assert_eq!(game.session().cursor().column, 1);
        assert_eq!(store.payload().await.as_deref(), Some(broken));
    }

    #[test]
    fn playing_without_storage_still_works() {
        let mut game = DailyGame::resume(hello(), key(289), &History::new(), None);
        play(&mut game, "hello");
        assert_eq!(game.session().phase(), Phase::Won);
    }

    #[test]
    fn roll_over_starts_new_day() {
        let mut game = DailyGame::resume(hello(), key(289), &History::new(), None);
        play(&mut game, "world");

        assert!(!game.roll_over(key(289), hello()));
        assert_eq!(game.session().cursor().row, 1);

        assert!(game.roll_over(key(290), hello()));
        assert_eq!(game.key(), key(290));
        assert_eq!(game.session().cursor().row, 0);
    }

    #[test]
    fn share_text_lists_submitted_rows() {
        let mut game = DailyGame::resume(hello(), key(289), &History::new(), None);
        play(&mut game, "lleho");
        play(&mut game, "hello");

        assert_eq!(game.share_text(), "WORDLE\n🟨🟨🟨🟨🟩\n🟩🟩🟩🟩🟩");
    }
}
