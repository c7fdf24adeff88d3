use std::time::Instant;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use ancients::alphabet::{Alphabet, Cipher, Letter};
use ancients::engine::random::shuffle;
use ancients::session::quiz::{AdvancePolicy, DEFAULT_FLASH, QuizSession};

fn bench_shuffle(c: &mut Criterion) {
    let letters: Vec<Letter> = Letter::all().collect();
    let mut rng = SmallRng::seed_from_u64(1);

    c.bench_function("shuffle (26 letters)", |b| {
        b.iter(|| shuffle(black_box(&letters), &mut rng))
    });
}

fn bench_grouping(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(2);

    c.bench_function("Alphabet::grouped", |b| {
        b.iter(|| Alphabet::grouped(Cipher::identity(), &mut rng))
    });
}

fn bench_correct_cycle(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(3);
    let alphabet = Alphabet::grouped(Cipher::identity(), &mut rng);
    let mut session = QuizSession::new(alphabet, rng, AdvancePolicy::Delayed(DEFAULT_FLASH));

    c.bench_function("correct guess + advance", |b| {
        b.iter(|| {
            let now = Instant::now();
            let target = session.target();
            session.guess(black_box(target), now);
            session.poll(now + DEFAULT_FLASH)
        })
    });
}

criterion_group!(benches, bench_shuffle, bench_grouping, bench_correct_cycle);
criterion_main!(benches);
