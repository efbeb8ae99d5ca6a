use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::challenge_engine::error::ConfigError;

// ---------------------------------------------------------------------------
// Problem categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeType {
    Add,
    Subtract,
    Multiply,
    Divide,
    Simplify,
    Percentage,
}

impl ChallengeType {
    pub const ALL: [ChallengeType; 6] = [
        ChallengeType::Add,
        ChallengeType::Subtract,
        ChallengeType::Multiply,
        ChallengeType::Divide,
        ChallengeType::Simplify,
        ChallengeType::Percentage,
    ];

    /// Wire name, as accepted by `FromStr` and serde.
    pub fn code(self) -> &'static str {
        match self {
            ChallengeType::Add        => "add",
            ChallengeType::Subtract   => "subtract",
            ChallengeType::Multiply   => "multiply",
            ChallengeType::Divide     => "divide",
            ChallengeType::Simplify   => "simplify",
            ChallengeType::Percentage => "percentage",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChallengeType::Add        => "Addition",
            ChallengeType::Subtract   => "Subtraction",
            ChallengeType::Multiply   => "Multiplication",
            ChallengeType::Divide     => "Division",
            ChallengeType::Simplify   => "Simplification",
            ChallengeType::Percentage => "Percentages",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ChallengeType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChallengeType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| ConfigError::UnknownChallengeType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    Easy,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn code(self) -> &'static str {
        match self {
            Difficulty::Easy         => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced     => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy         => write!(f, "Easy"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced     => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Session modes
// ---------------------------------------------------------------------------

/// Termination rule for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Answer as many as possible before a 60 second countdown runs out.
    OneMinute,
    /// Sudden death: the first wrong answer ends the session.
    BitterEnd,
    /// Exactly twenty questions, timed with a count-up clock.
    SpeedChallenge,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::OneMinute, Mode::BitterEnd, Mode::SpeedChallenge];

    pub fn code(self) -> &'static str {
        match self {
            Mode::OneMinute      => "one-minute",
            Mode::BitterEnd      => "bitter-end",
            Mode::SpeedChallenge => "speed-challenge",
        }
    }

    /// True when the clock counts down to zero instead of up from zero.
    pub fn counts_down(self) -> bool {
        matches!(self, Mode::OneMinute)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::OneMinute      => "One Minute",
            Mode::BitterEnd      => "Bitter End",
            Mode::SpeedChallenge => "Speed Challenge",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.code() == s)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Generated problems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub display_text: String,
    /// Exact result; percentage answers are rounded to two decimals.
    pub correct_answer: f64,
    pub challenge_type: ChallengeType,
    pub difficulty: Difficulty,
    /// Raw drawn values in draw order (e.g. `[divisor, quotient]` for division).
    pub operands: Vec<u32>,
}

impl Problem {
    pub fn operands(&self) -> &[u32] {
        &self.operands
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text)
    }
}

// ---------------------------------------------------------------------------
// Session state types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Ready,
    Running,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Ready   => write!(f, "ready"),
            Phase::Running => write!(f, "running"),
            Phase::Ended   => write!(f, "ended"),
        }
    }
}

/// Result of a single `submit_answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnswerOutcome {
    /// Empty input, or the session was not running. State is unchanged.
    Ignored,
    Correct,
    Incorrect { expected: f64 },
}

/// Read-only view of a session, suitable for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub phase: Phase,
    pub score: u32,
    pub incorrect_count: u32,
    pub question_index: u32,
    /// Remaining seconds for count-down modes, elapsed seconds otherwise.
    pub seconds_shown: u32,
    pub current_problem_text: Option<String>,
    pub last_answer_correct: Option<bool>,
    pub end_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub score: u32,
    pub incorrect_count: u32,
    pub questions_answered: u32,
    pub elapsed_seconds: u32,
    /// Share of answered questions judged correct, 0.0 when nothing was answered.
    pub accuracy_percent: f64,
    pub end_message: String,
}
