use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::alphabet::cipher::Cipher;
use crate::alphabet::letter::Letter;
use crate::engine::random::{self, RandomSource};

/// Group sizes of the grouped variant, in slice order over the shuffled alphabet.
pub const GROUP_SIZES: [usize; 6] = [4, 4, 4, 4, 4, 6];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Whole alphabet in play, answers in A-Z order, immediate advance.
    Simple,
    /// Six random groups, shuffled answers, flash before advancing.
    #[default]
    Grouped,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown variant '{0}' (expected 'simple' or 'grouped')")]
pub struct ParseVariantError(pub String);

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Simple => "simple",
            Variant::Grouped => "grouped",
        }
    }

    pub fn shuffles_answers(self) -> bool {
        matches!(self, Variant::Grouped)
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Variant::Simple),
            "grouped" => Ok(Variant::Grouped),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    #[error("group {0} is empty")]
    EmptyGroup(usize),
    #[error("letter {0} appears in more than one group")]
    Duplicate(Letter),
    #[error("letter {0} is not in any group")]
    Missing(Letter),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub letters: Vec<Letter>,
}

impl Group {
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }
}

/// The cipher plus its partition into practice groups. Built once at startup
/// and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Alphabet {
    variant: Variant,
    cipher: Cipher,
    groups: Vec<Group>,
}

impl Alphabet {
    pub fn new<R: RandomSource + ?Sized>(variant: Variant, cipher: Cipher, rng: &mut R) -> Self {
        match variant {
            Variant::Simple => Self::simple(cipher),
            Variant::Grouped => Self::grouped(cipher, rng),
        }
    }

    pub fn simple(cipher: Cipher) -> Self {
        Self {
            variant: Variant::Simple,
            cipher,
            groups: vec![Group {
                label: "All letters".to_string(),
                letters: Letter::all().collect(),
            }],
        }
    }

    pub fn grouped<R: RandomSource + ?Sized>(cipher: Cipher, rng: &mut R) -> Self {
        let all: Vec<Letter> = Letter::all().collect();
        let shuffled = random::shuffle(&all, rng);

        let mut groups = Vec::with_capacity(GROUP_SIZES.len());
        let mut offset = 0;
        for (i, size) in GROUP_SIZES.iter().enumerate() {
            groups.push(Group {
                label: format!("Group {}", i + 1),
                letters: shuffled[offset..offset + size].to_vec(),
            });
            offset += size;
        }

        Self {
            variant: Variant::Grouped,
            cipher,
            groups,
        }
    }

    /// Grouped alphabet from an explicit partition. Every letter must appear
    /// in exactly one non-empty group.
    pub fn with_groups(cipher: Cipher, groups: Vec<Vec<Letter>>) -> Result<Self, PartitionError> {
        let mut seen = [false; Letter::COUNT];
        for (i, letters) in groups.iter().enumerate() {
            if letters.is_empty() {
                return Err(PartitionError::EmptyGroup(i));
            }
            for &letter in letters {
                if std::mem::replace(&mut seen[letter.index()], true) {
                    return Err(PartitionError::Duplicate(letter));
                }
            }
        }
        if let Some(missing) = Letter::all().find(|l| !seen[l.index()]) {
            return Err(PartitionError::Missing(missing));
        }

        let groups = groups
            .into_iter()
            .enumerate()
            .map(|(i, letters)| Group {
                label: format!("Group {}", i + 1),
                letters,
            })
            .collect();

        Ok(Self {
            variant: Variant::Grouped,
            cipher,
            groups,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
