//! # math_challenge
//!
//! Procedural arithmetic drills and a timed game session, with no I/O.
//!
//! The engine has two halves:
//!
//! - a **problem generator** that turns a challenge type (add, subtract,
//!   multiply, divide, simplify, percentage) and a difficulty tier into one
//!   problem with display text and an exact answer, and
//! - a **session controller** that runs one game under a termination rule
//!   (`one-minute` countdown, `bitter-end` sudden death, or a 20-question
//!   `speed-challenge`), keeps score and drives the clock.
//!
//! ## How it works
//!
//! 1. Build a [`SessionConfig`] (or call [`create_session`]) with a mode, the
//!    selected challenge types and a difficulty.
//! 2. Call [`Session::start`]; the first problem is generated and the clock
//!    starts.
//! 3. Call [`Session::tick`] once per second from a host timer and
//!    [`Session::submit_answer`] for each typed answer. Each question draws its
//!    type uniformly from the selection.
//! 4. Render from [`Session::snapshot`] (or [`view::to_view_json`]) until the
//!    phase is [`Phase::Ended`], then show [`Session::summary`].
//!
//! ## Deterministic play
//!
//! Pass `rng_seed: Some(u64)` to replay the exact same problem sequence, or
//! hand [`Session::with_source`] any [`UniformSource`].
//!
//! ## Quick start
//!
//! ```rust
//! use math_challenge::{ChallengeType, Difficulty, Mode, Phase, Session, SessionConfig};
//!
//! let config = SessionConfig::new(Mode::BitterEnd, [ChallengeType::Add])
//!     .with_difficulty(Difficulty::Easy)
//!     .with_seed(42);
//! let mut session = Session::from_config(config).unwrap();
//! session.start();
//! println!("Q: {}", session.current_problem_text().unwrap());
//!
//! session.submit_answer("999");
//! assert_eq!(session.phase(), Phase::Ended);
//! assert_eq!(session.end_message(), Some("Game Over!"));
//! ```

pub mod challenge_engine;

// Convenience re-exports so callers can use `math_challenge::Session`
// directly without reaching into `challenge_engine::`.
pub use challenge_engine::{
    create_session, generate, generate_from, judge_answer, view, AnswerOutcome, ChallengeSet,
    ChallengeType, ConfigError, Difficulty, Mode, Phase, Problem, Session, SessionConfig,
    SessionSnapshot, SessionSummary, UniformSource,
};

#[cfg(test)]
mod tests;
