//! Shared drawing and formatting helpers used by every problem family.
//!
//! ## Random source
//!
//! Problem families never touch an ambient RNG. They draw from a
//! [`UniformSource`], a single `[0, 1)` stream. Any `rand::RngCore` is a source,
//! so seeded `StdRng` gives reproducible sessions, and tests can replay an
//! exact sequence of unit values to pin down a specific problem.
//!
//! Integers are mapped with `min + floor(u * (max - min + 1))`, so each draw
//! consumes exactly one unit value. Changing the draw order of a family changes
//! every seeded problem after it.

use rand::{Rng, RngCore};

use crate::challenge_engine::models::{ChallengeType, Difficulty, Problem};

/// A stream of uniform values in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Draw an integer in `min..=max`.
pub fn rand_int<S: UniformSource + ?Sized>(src: &mut S, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max, "empty range {min}..={max}");
    let span = f64::from(max - min + 1);
    let offset = (src.next_unit() * span).floor() as u32;
    (min + offset).min(max)
}

/// Pick one element uniformly; `items` must be non-empty.
pub fn pick<S: UniformSource + ?Sized, T: Copy>(src: &mut S, items: &[T]) -> T {
    let idx = (src.next_unit() * items.len() as f64).floor() as usize;
    items[idx.min(items.len() - 1)]
}

/// Round to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render an answer without a trailing `.0` for whole numbers.
pub fn format_answer(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Assemble the final [`Problem`]; the last call in every family generator.
pub fn problem(
    challenge_type: ChallengeType, difficulty: Difficulty,
    display_text: String, correct_answer: f64, operands: Vec<u32>,
) -> Problem {
    Problem { display_text, correct_answer, challenge_type, difficulty, operands }
}

/// Replays a fixed sequence of unit values, cycling when exhausted.
#[cfg(test)]
pub(crate) struct FixedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl FixedSource {
    pub(crate) fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "FixedSource needs at least one value");
        FixedSource { values: values.to_vec(), cursor: 0 }
    }
}

#[cfg(test)]
impl UniformSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
