//! Core challenge engine: problem generation and the timed session controller.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: challenge types, tiers, modes, problems, snapshots |
//! | `helpers`   | Uniform random seam, integer drawing, problem assembly |
//! | `problems`  | Per-family generators (arithmetic, simplify, percentage) |
//! | `generator` | `generate()` dispatch plus uniform type selection |
//! | `config`    | Host settings (`SessionConfig`) and validated type selection |
//! | `session`   | `Session` phase machine: start, tick, submit, end |
//! | `view`      | JSON projection of session state for the game screen |
//! | `error`     | `ConfigError` |

pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod problems;
pub mod session;
pub mod view;

// Re-export the public API surface so callers can use
// `challenge_engine::generate` without reaching into sub-modules.
pub use config::{ChallengeSet, SessionConfig};
pub use error::ConfigError;
pub use generator::{generate, generate_from};
pub use helpers::UniformSource;
pub use models::{
    AnswerOutcome, ChallengeType, Difficulty, Mode, Phase, Problem, SessionSnapshot,
    SessionSummary,
};
pub use session::{create_session, judge_answer, Session};
