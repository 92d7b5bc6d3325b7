//! Game phase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the puzzle is still being played
///
/// Only `Playing → Won` and `Playing → Lost` are legal; terminal phases stick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{label}")
    }
}
