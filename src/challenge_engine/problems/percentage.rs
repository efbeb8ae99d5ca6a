//! "p% of n" drills.
//!
//! Easy sticks to friendly percentages of round tens. Intermediate and advanced
//! draw any whole percent, so answers carry up to two decimal places; the
//! stored answer is rounded to hundredths and the session's answer tolerance
//! absorbs the rest.

use crate::challenge_engine::{
    helpers::{pick, problem, rand_int, round2, UniformSource},
    models::{ChallengeType, Difficulty, Problem},
};

const FRIENDLY_PERCENTS: [u32; 5] = [10, 20, 25, 50, 75];

pub fn generate<S: UniformSource + ?Sized>(src: &mut S, difficulty: Difficulty) -> Problem {
    let (percent, number) = match difficulty {
        Difficulty::Easy => {
            let percent = pick(src, &FRIENDLY_PERCENTS);
            (percent, 10 * rand_int(src, 1, 10))
        }
        Difficulty::Intermediate => (rand_int(src, 1, 99), rand_int(src, 10, 200)),
        Difficulty::Advanced     => (rand_int(src, 1, 150), rand_int(src, 100, 1000)),
    };
    let answer = round2(f64::from(percent) / 100.0 * f64::from(number));
    problem(
        ChallengeType::Percentage, difficulty,
        format!("{percent}% of {number}"), answer, vec![percent, number],
    )
}
