use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::SmallRng;

/// Source of uniform indices. Target selection and shuffling only ever draw
/// through this trait, so tests can script the exact sequence.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass `upper == 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl RandomSource for SmallRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Replays a fixed list of draws (each reduced modulo `upper`). Once the
/// script runs out every draw returns `upper - 1`, which makes `shuffle`
/// the identity and `pick` the last element.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        match self.script.pop_front() {
            Some(v) => v % upper.max(1),
            None => upper.saturating_sub(1),
        }
    }
}

/// Fisher-Yates shuffle into a new vector.
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }
    out
}

/// Uniformly chosen element, `None` for an empty slice.
pub fn pick<T: Copy, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    Some(items[rng.next_index(items.len())])
}
