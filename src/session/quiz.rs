use std::time::{Duration, Instant};

use thiserror::Error;

use crate::alphabet::{Alphabet, Letter, Variant};
use crate::engine::random::{self, RandomSource};
use crate::engine::timer::Deferred;
use crate::session::tally::Tally;

pub const DEFAULT_FLASH: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvancePolicy {
    /// Pick the next target as soon as the guess is correct.
    Immediate,
    /// Show the success flash, then advance once the delay elapses.
    Delayed(Duration),
}

impl AdvancePolicy {
    pub fn for_variant(variant: Variant, flash: Duration) -> Self {
        match variant {
            Variant::Simple => AdvancePolicy::Immediate,
            Variant::Grouped => AdvancePolicy::Delayed(flash),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    TryAgain,
}

impl Feedback {
    pub fn text(self) -> &'static str {
        match self {
            Feedback::None => "",
            Feedback::Correct => "✅ Correct!",
            Feedback::TryAgain => "❌ Try again!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    CorrectFlash,
}

/// Highlight of the most recently chosen answer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Correct,
    Wrong,
}

/// How the prompt glyph is drawn: the ancients face while waiting for a
/// guess, the plain letter during the success flash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Ancients,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// Guess arrived during the flash or named a letter that is not an answer.
    Ignored,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no group at index {index} (have {count})")]
    NoSuchGroup { index: usize, count: usize },
    #[error("the simple variant has no groups to choose from")]
    NoGroupChoice,
}

/// Owns all mutable quiz state. Every transition goes through `guess`,
/// `select_group`, `toggle_legend` or `poll`.
pub struct QuizSession<R: RandomSource> {
    alphabet: Alphabet,
    rng: R,
    advance: AdvancePolicy,
    active_group: usize,
    target: Letter,
    answer_order: Vec<Letter>,
    feedback: Feedback,
    selected: Option<Letter>,
    correct_flash: bool,
    legend_visible: bool,
    pending_advance: Deferred,
    tally: Tally,
}

impl<R: RandomSource> QuizSession<R> {
    pub fn new(alphabet: Alphabet, mut rng: R, advance: AdvancePolicy) -> Self {
        let letters = alphabet.groups()[0].letters.clone();
        let target = draw_target(&letters, &mut rng);

        tracing::info!(
            variant = %alphabet.variant(),
            groups = alphabet.group_count(),
            "quiz session started"
        );

        Self {
            alphabet,
            rng,
            advance,
            active_group: 0,
            target,
            answer_order: letters,
            feedback: Feedback::None,
            selected: None,
            correct_flash: false,
            legend_visible: false,
            pending_advance: Deferred::default(),
            tally: Tally::default(),
        }
    }

    pub fn guess(&mut self, letter: Letter, now: Instant) -> GuessOutcome {
        if self.pending_advance.is_pending() {
            tracing::debug!(%letter, "guess ignored during flash");
            return GuessOutcome::Ignored;
        }
        if !self.alphabet.groups()[self.active_group].contains(letter) {
            return GuessOutcome::Ignored;
        }

        if letter == self.target {
            self.tally.record(true);
            self.feedback = Feedback::Correct;
            match self.advance {
                AdvancePolicy::Immediate => {
                    self.next_target();
                    self.selected = None;
                    self.correct_flash = false;
                }
                AdvancePolicy::Delayed(delay) => {
                    self.selected = Some(letter);
                    self.correct_flash = true;
                    self.pending_advance.schedule(now, delay);
                }
            }
            tracing::debug!(%letter, "correct guess");
            GuessOutcome::Correct
        } else {
            self.tally.record(false);
            self.feedback = Feedback::TryAgain;
            self.selected = Some(letter);
            tracing::debug!(%letter, expected = %self.target, "wrong guess");
            GuessOutcome::Wrong
        }
    }

    /// Runs the pending advance if its deadline has passed. Returns true
    /// when the target changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.pending_advance.fire_if_due(now) {
            return false;
        }
        self.next_target();
        self.clear_feedback();
        tracing::debug!(next = %self.target, "advanced after flash");
        true
    }

    pub fn select_group(&mut self, index: usize) -> Result<(), QuizError> {
        if self.alphabet.variant() == Variant::Simple {
            return Err(QuizError::NoGroupChoice);
        }
        let count = self.alphabet.group_count();
        if index >= count {
            return Err(QuizError::NoSuchGroup { index, count });
        }

        if self.pending_advance.cancel() {
            tracing::debug!("pending advance cancelled by group change");
        }
        self.active_group = index;
        let letters = self.alphabet.groups()[index].letters.clone();
        self.target = draw_target(&letters, &mut self.rng);
        self.answer_order = if self.alphabet.variant().shuffles_answers() {
            random::shuffle(&letters, &mut self.rng)
        } else {
            letters
        };
        self.clear_feedback();

        tracing::info!(group = index + 1, "group selected");
        Ok(())
    }

    pub fn next_group(&mut self) -> Result<(), QuizError> {
        let count = self.alphabet.group_count();
        self.select_group((self.active_group + 1) % count)
    }

    pub fn prev_group(&mut self) -> Result<(), QuizError> {
        let count = self.alphabet.group_count();
        self.select_group((self.active_group + count - 1) % count)
    }

    pub fn toggle_legend(&mut self) {
        self.legend_visible = !self.legend_visible;
    }

    pub fn set_legend_visible(&mut self, visible: bool) {
        self.legend_visible = visible;
    }

    fn next_target(&mut self) {
        let letters = &self.alphabet.groups()[self.active_group].letters;
        self.target = draw_target(letters, &mut self.rng);
        if self.alphabet.variant().shuffles_answers() {
            self.answer_order = random::shuffle(letters, &mut self.rng);
        }
    }

    fn clear_feedback(&mut self) {
        self.feedback = Feedback::None;
        self.selected = None;
        self.correct_flash = false;
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn active_group(&self) -> usize {
        self.active_group
    }

    pub fn active_letters(&self) -> &[Letter] {
        &self.alphabet.groups()[self.active_group].letters
    }

    pub fn target(&self) -> Letter {
        self.target
    }

    /// Cipher glyph of the current target.
    pub fn glyph(&self) -> char {
        self.alphabet.cipher().glyph(self.target)
    }

    pub fn answer_order(&self) -> &[Letter] {
        &self.answer_order
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn selected(&self) -> Option<Letter> {
        self.selected
    }

    pub fn is_correct_flash(&self) -> bool {
        self.correct_flash
    }

    pub fn legend_visible(&self) -> bool {
        self.legend_visible
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn phase(&self) -> Phase {
        if self.pending_advance.is_pending() {
            Phase::CorrectFlash
        } else {
            Phase::Idle
        }
    }

    pub fn pending_advance_due(&self) -> Option<Instant> {
        self.pending_advance.due()
    }

    pub fn highlight(&self, letter: Letter) -> Option<Highlight> {
        if self.selected != Some(letter) {
            return None;
        }
        Some(if self.correct_flash {
            Highlight::Correct
        } else {
            Highlight::Wrong
        })
    }

    pub fn prompt_face(&self) -> Face {
        if self.correct_flash {
            Face::Normal
        } else {
            Face::Ancients
        }
    }
}

fn draw_target<R: RandomSource + ?Sized>(letters: &[Letter], rng: &mut R) -> Letter {
    random::pick(letters, rng).unwrap_or(Letter::A)
}
