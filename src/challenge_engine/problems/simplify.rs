//! Order-of-operations drills.
//!
//! - Easy: `a + b × c`, multiplication binds first.
//! - Intermediate: `(a + b) × c`, brackets first.
//! - Advanced: `(a × b) ÷ b + c`, the product and division cancel, leaving `a + c`.

use crate::challenge_engine::{
    helpers::{problem, rand_int, UniformSource},
    models::{ChallengeType, Difficulty, Problem},
};

pub fn generate<S: UniformSource + ?Sized>(src: &mut S, difficulty: Difficulty) -> Problem {
    let (text, answer, operands) = match difficulty {
        Difficulty::Easy => {
            let a = rand_int(src, 1, 10);
            let b = rand_int(src, 1, 10);
            let c = rand_int(src, 1, 10);
            (format!("{a} + {b} × {c}"), a + b * c, vec![a, b, c])
        }
        Difficulty::Intermediate => {
            let a = rand_int(src, 1, 20);
            let b = rand_int(src, 1, 20);
            let c = rand_int(src, 1, 10);
            (format!("({a} + {b}) × {c}"), (a + b) * c, vec![a, b, c])
        }
        Difficulty::Advanced => {
            let a = rand_int(src, 10, 50);
            let b = rand_int(src, 2, 10);
            let c = rand_int(src, 2, 10);
            (format!("({a} × {b}) ÷ {b} + {c}"), a + c, vec![a, b, c])
        }
    };
    problem(ChallengeType::Simplify, difficulty, text, f64::from(answer), operands)
}
