use std::collections::BTreeMap;

use thiserror::Error;

use crate::alphabet::letter::Letter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("cipher key '{0}' is not a single letter A-Z")]
    UnknownLetter(String),
    #[error("glyph for {letter} must be exactly one character, got {glyph:?}")]
    BadGlyph { letter: Letter, glyph: String },
    #[error("glyph '{glyph}' is assigned to both {first} and {second}")]
    DuplicateGlyph {
        glyph: char,
        first: Letter,
        second: Letter,
    },
}

/// Letter to glyph substitution table. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cipher {
    glyphs: [char; Letter::COUNT],
}

impl Default for Cipher {
    fn default() -> Self {
        Self::identity()
    }
}

impl Cipher {
    pub fn identity() -> Self {
        let mut glyphs = ['A'; Letter::COUNT];
        for letter in Letter::all() {
            glyphs[letter.index()] = letter.as_char();
        }
        Self { glyphs }
    }

    /// Identity cipher with some letters remapped, e.g. from the `[cipher]`
    /// table of the config file. Glyphs must stay unique across the alphabet.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, CipherError> {
        let mut cipher = Self::identity();

        for (key, glyph) in overrides {
            let mut key_chars = key.chars();
            let letter = match (key_chars.next(), key_chars.next()) {
                (Some(ch), None) => {
                    Letter::from_char(ch).map_err(|_| CipherError::UnknownLetter(key.clone()))?
                }
                _ => return Err(CipherError::UnknownLetter(key.clone())),
            };

            let mut glyph_chars = glyph.chars();
            match (glyph_chars.next(), glyph_chars.next()) {
                (Some(ch), None) => cipher.glyphs[letter.index()] = ch,
                _ => {
                    return Err(CipherError::BadGlyph {
                        letter,
                        glyph: glyph.clone(),
                    });
                }
            }
        }

        cipher.check_unique()?;
        Ok(cipher)
    }

    fn check_unique(&self) -> Result<(), CipherError> {
        let mut seen: BTreeMap<char, Letter> = BTreeMap::new();
        for letter in Letter::all() {
            let glyph = self.glyph(letter);
            if let Some(&first) = seen.get(&glyph) {
                return Err(CipherError::DuplicateGlyph {
                    glyph,
                    first,
                    second: letter,
                });
            }
            seen.insert(glyph, letter);
        }
        Ok(())
    }

    pub fn glyph(&self, letter: Letter) -> char {
        self.glyphs[letter.index()]
    }
}
