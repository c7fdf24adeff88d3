/// In-session answer counters. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub attempts: u32,
    pub correct: u32,
    pub streak: u32,
    pub best_streak: u32,
}

impl Tally {
    pub fn record(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    pub fn incorrect(&self) -> u32 {
        self.attempts - self.correct
    }

    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 100.0;
        }
        (self.correct as f64 / self.attempts as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_starts_at_100() {
        assert_eq!(Tally::default().accuracy(), 100.0);
    }

    #[test]
    fn test_wrong_guess_resets_streak_but_keeps_best() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(true);
        tally.record(false);
        tally.record(true);

        assert_eq!(tally.attempts, 4);
        assert_eq!(tally.correct, 3);
        assert_eq!(tally.incorrect(), 1);
        assert_eq!(tally.streak, 1);
        assert_eq!(tally.best_streak, 2);
        assert!((tally.accuracy() - 75.0).abs() < 1e-9);
    }
}
