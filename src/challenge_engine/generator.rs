use crate::challenge_engine::{
    helpers::{pick, UniformSource},
    models::{ChallengeType, Difficulty, Problem},
    problems,
};

/// Core dispatch: routes to the problem family for `challenge_type`.
pub fn generate<S: UniformSource + ?Sized>(
    challenge_type: ChallengeType,
    difficulty: Difficulty,
    src: &mut S,
) -> Problem {
    match challenge_type {
        ChallengeType::Add        => problems::arithmetic::add(src, difficulty),
        ChallengeType::Subtract   => problems::arithmetic::subtract(src, difficulty),
        ChallengeType::Multiply   => problems::arithmetic::multiply(src, difficulty),
        ChallengeType::Divide     => problems::arithmetic::divide(src, difficulty),
        ChallengeType::Simplify   => problems::simplify::generate(src, difficulty),
        ChallengeType::Percentage => problems::percentage::generate(src, difficulty),
    }
}

/// Draw a type uniformly from `types`, then generate a problem of that type.
///
/// `types` must be non-empty; [`ChallengeSet`](crate::ChallengeSet) guarantees it.
pub fn generate_from<S: UniformSource + ?Sized>(
    types: &[ChallengeType],
    difficulty: Difficulty,
    src: &mut S,
) -> Problem {
    let challenge_type = pick(src, types);
    generate(challenge_type, difficulty, src)
}
