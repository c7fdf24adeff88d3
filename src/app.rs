use std::time::Instant;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::layout::Rect;

use ancients::alphabet::{Alphabet, Letter};
use ancients::session::quiz::{AdvancePolicy, GuessOutcome, QuizError, QuizSession};

use crate::config::Config;
use crate::ui::glyphs::GlyphFace;
use crate::ui::layout::{self, QuizLayout};
use crate::ui::theme::Theme;

pub struct App {
    pub session: QuizSession<SmallRng>,
    pub theme: &'static Theme,
    pub face: GlyphFace,
    /// Keyboard focus over the answer buttons, by position in answer order.
    pub focused: Option<usize>,
    pub should_quit: bool,
}

impl App {
    /// Builds the alphabet once and hands it to a fresh session. `seed`
    /// makes the grouping and every draw reproducible.
    pub fn new(config: Config, theme: &'static Theme, seed: Option<u64>) -> Result<Self> {
        let cipher = config
            .build_cipher()
            .context("invalid [cipher] table in config")?;
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let variant = config.variant();
        let alphabet = Alphabet::new(variant, cipher, &mut rng);
        let policy = AdvancePolicy::for_variant(variant, config.flash_delay());
        let mut session = QuizSession::new(alphabet, rng, policy);
        session.set_legend_visible(config.show_legend);

        let face = config.face.parse::<GlyphFace>().unwrap_or_else(|err: String| {
            tracing::warn!(%err, "falling back to runic face");
            GlyphFace::default()
        });

        Ok(Self {
            session,
            theme,
            face,
            focused: None,
            should_quit: false,
        })
    }

    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        let outcome = self.session.guess(letter, Instant::now());
        if outcome != GuessOutcome::Ignored {
            self.focused = self
                .session
                .answer_order()
                .iter()
                .position(|&l| l == letter);
        }
        outcome
    }

    pub fn guess_focused(&mut self) {
        let letter = self
            .focused
            .and_then(|i| self.session.answer_order().get(i).copied());
        if let Some(letter) = letter {
            self.guess(letter);
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.session.answer_order().len();
        self.focused = Some(match self.focused {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn focus_prev(&mut self) {
        let count = self.session.answer_order().len();
        self.focused = Some(match self.focused {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    pub fn select_group(&mut self, index: usize) {
        let result = self.session.select_group(index);
        self.after_group_change(result);
    }

    pub fn next_group(&mut self) {
        let result = self.session.next_group();
        self.after_group_change(result);
    }

    pub fn prev_group(&mut self) {
        let result = self.session.prev_group();
        self.after_group_change(result);
    }

    fn after_group_change(&mut self, result: Result<(), QuizError>) {
        match result {
            Ok(()) => self.focused = None,
            Err(err) => tracing::debug!(%err, "group selection ignored"),
        }
    }

    pub fn toggle_legend(&mut self) {
        self.session.toggle_legend();
    }

    /// Event-loop tick: fires the deferred advance once it is due.
    pub fn tick(&mut self, now: Instant) {
        if self.session.poll(now) {
            self.focused = None;
        }
    }

    pub fn shows_group_tabs(&self) -> bool {
        self.session.alphabet().group_count() > 1
    }

    pub fn group_labels(&self) -> Vec<String> {
        self.session
            .alphabet()
            .groups()
            .iter()
            .map(|g| g.label.clone())
            .collect()
    }

    pub fn layout(&self, area: Rect) -> QuizLayout {
        QuizLayout::new(
            area,
            self.shows_group_tabs(),
            self.session.legend_visible(),
            self.session.answer_order().len(),
        )
    }

    /// Left click at (`column`, `row`) on a screen of size `area`.
    pub fn click(&mut self, area: Rect, column: u16, row: u16) {
        let quiz_layout = self.layout(area);

        let buttons = layout::button_rects(quiz_layout.buttons, self.session.answer_order().len());
        if let Some(i) = layout::hit_test(&buttons, column, row) {
            let letter = self.session.answer_order()[i];
            self.guess(letter);
            return;
        }

        if let Some(tabs_area) = quiz_layout.tabs {
            let tabs = layout::tab_rects(tabs_area, &self.group_labels());
            if let Some(i) = layout::hit_test(&tabs, column, row) {
                self.select_group(i);
            }
        }
    }

    /// Legend entries for the active group, drawn with the ancients face.
    pub fn legend_entries(&self) -> Vec<(char, Letter)> {
        let cipher = self.session.alphabet().cipher();
        self.session
            .active_letters()
            .iter()
            .map(|&l| (self.face.render(cipher.glyph(l)), l))
            .collect()
    }
}
