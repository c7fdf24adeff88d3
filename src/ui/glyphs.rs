use std::str::FromStr;

use ancients::alphabet::Letter;
use ancients::engine::random::RandomSource;
use ancients::session::quiz::{Face, QuizSession};

/// Rune used by the ancients face for each cipher glyph A-Z.
const RUNES: [char; Letter::COUNT] = [
    'ᚨ', 'ᛒ', 'ᚲ', 'ᛞ', 'ᛖ', 'ᚠ', 'ᚷ', 'ᚺ', 'ᛁ', 'ᛃ', 'ᚴ', 'ᛚ', 'ᛗ', 'ᚾ', 'ᛟ', 'ᛈ', 'ᛩ', 'ᚱ', 'ᛋ',
    'ᛏ', 'ᚢ', 'ᚡ', 'ᚹ', 'ᛪ', 'ᚤ', 'ᛉ',
];

/// How the ancients face draws a glyph in the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphFace {
    /// A-Z glyphs become runes; other glyphs are drawn as-is.
    #[default]
    Runic,
    /// Glyphs are drawn as-is, only styled.
    Plain,
}

impl FromStr for GlyphFace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "runic" => Ok(GlyphFace::Runic),
            "plain" => Ok(GlyphFace::Plain),
            other => Err(format!("unknown face '{other}'")),
        }
    }
}

impl GlyphFace {
    pub fn render(self, glyph: char) -> char {
        match (self, Letter::from_char(glyph)) {
            (GlyphFace::Runic, Ok(letter)) if glyph.is_ascii_uppercase() => RUNES[letter.index()],
            _ => glyph,
        }
    }

    /// Character shown in the prompt: the styled glyph while waiting for a
    /// guess, the plain answer letter during the success flash.
    pub fn prompt_char<R: RandomSource>(self, session: &QuizSession<R>) -> char {
        match session.prompt_face() {
            Face::Ancients => self.render(session.glyph()),
            Face::Normal => session.target().as_char(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::time::Instant;

    use ancients::alphabet::{Alphabet, Cipher};
    use ancients::engine::random::ScriptedSource;
    use ancients::session::quiz::{AdvancePolicy, DEFAULT_FLASH};

    use super::*;

    #[test]
    fn test_runes_are_distinct() {
        let unique: BTreeSet<char> = RUNES.iter().copied().collect();
        assert_eq!(unique.len(), Letter::COUNT);
    }

    #[test]
    fn test_runic_face_maps_uppercase_only() {
        assert_eq!(GlyphFace::Runic.render('A'), 'ᚨ');
        assert_eq!(GlyphFace::Runic.render('Z'), 'ᛉ');
        assert_eq!(GlyphFace::Runic.render('@'), '@');
        assert_eq!(GlyphFace::Runic.render('a'), 'a');
        assert_eq!(GlyphFace::Plain.render('A'), 'A');
    }

    #[test]
    fn test_prompt_reveals_letter_during_flash() {
        let mut session = QuizSession::new(
            Alphabet::grouped(Cipher::identity(), &mut ScriptedSource::default()),
            ScriptedSource::new([0]),
            AdvancePolicy::Delayed(DEFAULT_FLASH),
        );
        // identity groups: Group 1 = A B C D, first draw -> A
        assert_eq!(GlyphFace::Runic.prompt_char(&session), 'ᚨ');
        let target = session.target();
        session.guess(target, Instant::now());
        assert_eq!(GlyphFace::Runic.prompt_char(&session), 'A');
    }

    #[test]
    fn test_face_parse() {
        assert_eq!("Runic".parse::<GlyphFace>(), Ok(GlyphFace::Runic));
        assert_eq!("plain".parse::<GlyphFace>(), Ok(GlyphFace::Plain));
        assert!("gothic".parse::<GlyphFace>().is_err());
    }
}
