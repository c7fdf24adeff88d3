use std::fmt;

use thiserror::Error;

/// One of the 26 Latin letters A-Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a letter A-Z")]
pub struct ParseLetterError(pub char);

impl Letter {
    pub const COUNT: usize = 26;
    pub const A: Letter = Letter(0);

    /// Accepts upper- and lowercase ASCII letters.
    pub fn from_char(ch: char) -> Result<Self, ParseLetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Letter(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(ParseLetterError(ch))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// A through Z, in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = ParseLetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_is_case_insensitive() {
        assert_eq!(Letter::from_char('m'), Letter::from_char('M'));
        assert_eq!(Letter::from_char('m').unwrap().as_char(), 'M');
    }

    #[test]
    fn test_from_char_rejects_non_letters() {
        assert_eq!(Letter::from_char('1'), Err(ParseLetterError('1')));
        assert!(Letter::from_char('é').is_err());
    }

    #[test]
    fn test_all_covers_alphabet_in_order() {
        let text: String = Letter::all().map(Letter::as_char).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
