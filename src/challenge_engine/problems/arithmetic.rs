//! The four basic operations.
//!
//! | Op       | Easy                | Intermediate          | Advanced               |
//! |----------|---------------------|-----------------------|------------------------|
//! | add      | a,b in 1..=10       | a,b in 10..=100       | a,b in 100..=1000      |
//! | subtract | a 5..=20, b 1..a    | a 50..=100, b 10..=a-10 | a 100..=1000, b 50..=a-50 |
//! | multiply | a,b in 1..=10       | a,b in 2..=20         | a,b in 10..=50         |
//! | divide   | b 1..=10, k 1..=10  | b 2..=20, k 5..=20    | b 5..=50, k 10..=50    |
//!
//! Subtraction never goes negative. Division draws divisor and quotient and
//! shows their product as the dividend, so it always divides exactly.

use crate::challenge_engine::{
    helpers::{problem, rand_int, UniformSource},
    models::{ChallengeType, Difficulty, Problem},
};

pub fn add<S: UniformSource + ?Sized>(src: &mut S, difficulty: Difficulty) -> Problem {
    let (lo, hi) = match difficulty {
        Difficulty::Easy         => (1, 10),
        Difficulty::Intermediate => (10, 100),
        Difficulty::Advanced     => (100, 1000),
    };
    let a = rand_int(src, lo, hi);
    let b = rand_int(src, lo, hi);
    problem(
        ChallengeType::Add, difficulty,
        format!("{a} + {b}"), f64::from(a + b), vec![a, b],
    )
}

pub fn subtract<S: UniformSource + ?Sized>(src: &mut S, difficulty: Difficulty) -> Problem {
    // (a range, minimum b, gap kept between b and a)
    let ((a_lo, a_hi), b_lo, gap) = match difficulty {
        Difficulty::Easy         => ((5, 20), 1, 1),
        Difficulty::Intermediate => ((50, 100), 10, 10),
        Difficulty::Advanced     => ((100, 1000), 50, 50),
    };
    let a = rand_int(src, a_lo, a_hi);
    let b = rand_int(src, b_lo, a - gap);
    problem(
        ChallengeType::Subtract, difficulty,
        format!("{a} - {b}"), f64::from(a - b), vec![a, b],
    )
}

pub fn multiply<S: UniformSource + ?Sized>(src: &mut S, difficulty: Difficulty) -> Problem {
    let (lo, hi) = match difficulty {
        Difficulty::Easy         => (1, 10),
        Difficulty::Intermediate => (2, 20),
        Difficulty::Advanced     => (10, 50),
    };
    let a = rand_int(src, lo, hi);
    let b = rand_int(src, lo, hi);
    problem(
        ChallengeType::Multiply, difficulty,
        format!("{a} × {b}"), f64::from(a * b), vec![a, b],
    )
}

pub fn divide<S: UniformSource + ?Sized>(src: &mut S, difficulty: Difficulty) -> Problem {
    let ((b_lo, b_hi), (k_lo, k_hi)) = match difficulty {
        Difficulty::Easy         => ((1, 10), (1, 10)),
        Difficulty::Intermediate => ((2, 20), (5, 20)),
        Difficulty::Advanced     => ((5, 50), (10, 50)),
    };
    let divisor = rand_int(src, b_lo, b_hi);
    let quotient = rand_int(src, k_lo, k_hi);
    let dividend = divisor * quotient;
    problem(
        ChallengeType::Divide, difficulty,
        format!("{dividend} ÷ {divisor}"), f64::from(quotient), vec![divisor, quotient],
    )
}
