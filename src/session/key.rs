//! Keystroke tokens accepted by the session

use std::fmt;
use std::str::FromStr;

/// A single keystroke from the keyboard widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A letter `a`-`z`, always stored lowercase
    Letter(char),
    /// Erase the previous cell
    Clear,
    /// Submit the current row
    Enter,
}

impl Key {
    /// Build a letter key, normalising case
    ///
    /// Returns `None` for anything that isn't an ASCII letter.
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_lowercase()))
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "enter" => Ok(Self::Enter),
            "clear" | "backspace" | "del" => Ok(Self::Clear),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::letter(c).ok_or_else(|| format!("Invalid key: {s}")),
                    _ => Err(format!("Invalid key: {s}")),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Clear => write!(f, "CLEAR"),
            Self::Enter => write!(f, "ENTER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Key::letter('H'), Some(Key::Letter('h')));
        assert_eq!(Key::letter('z'), Some(Key::Letter('z')));
        assert_eq!(Key::letter('1'), None);
        assert_eq!(Key::letter('é'), None);
    }

    #[test]
    fn parse_tokens() {
        assert_eq!("enter".parse::<Key>(), Ok(Key::Enter));
        assert_eq!("CLEAR".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("Backspace".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("Q".parse::<Key>(), Ok(Key::Letter('q')));
        assert!("qq".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
        assert!("7".parse::<Key>().is_err());
    }
}
