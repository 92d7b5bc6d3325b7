//! Cross-day statistics
//!
//! Everything here is recomputed from the full history on demand; nothing is
//! stored. Days are walked in insertion order, which is the order they were
//! first played, not re-sorted by date.

use crate::core::TRIES;
use crate::daily::DailyKey;
use crate::session::Phase;
use crate::storage::History;

/// Summary numbers shown when a game ends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Days with any saved session, finished or not
    pub played: usize,
    pub wins: usize,
    /// `floor(100 * wins / played)`, 0 for an empty history
    pub win_rate_percent: usize,
    pub current_streak: usize,
    /// Highest running streak, including the current one
    pub max_streak: usize,
    /// Wins bucketed by guesses used; index 0 is unused
    pub guess_distribution: [usize; TRIES + 1],
}

impl Statistics {
    /// Aggregate the whole history
    ///
    /// Streak rules, in insertion order:
    /// - a win with no running streak starts one at 1
    /// - a win on the day right after the previous entry extends it
    /// - any other win restarts it at 1
    /// - a loss resets it to 0
    ///
    /// Days still being played count as played but leave the streak alone.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::stats::Statistics;
    /// use wordle_daily::storage::History;
    ///
    /// let stats = Statistics::from_history(&History::new());
    /// assert_eq!(stats.played, 0);
    /// assert_eq!(stats.win_rate_percent, 0);
    /// ```
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        let mut stats = Self {
            played: history.len(),
            ..Self::default()
        };

        let mut streak = 0;
        let mut previous: Option<DailyKey> = None;

        for (raw_key, snapshot) in history.iter() {
            let key = raw_key.parse::<DailyKey>().ok();

            match snapshot.game_state {
                Phase::Playing => continue,
                Phase::Won => {
                    stats.wins += 1;

                    let guesses = snapshot.guesses_used();
                    if let Some(bucket) = stats.guess_distribution.get_mut(guesses)
                        && guesses > 0
                    {
                        *bucket += 1;
                    }

                    let adjacent = matches!(
                        (previous, key),
                        (Some(prev), Some(next)) if prev.is_followed_by(next)
                    );
                    streak = if streak > 0 && adjacent { streak + 1 } else { 1 };
                }
                Phase::Lost => {
                    streak = 0;
                }
            }

            stats.max_streak = stats.max_streak.max(streak);
            previous = key;
        }

        stats.current_streak = streak;
        stats.win_rate_percent = if stats.played == 0 {
            0
        } else {
            100 * stats.wins / stats.played
        };

        stats
    }

    /// Largest bucket of the guess distribution, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }
}
