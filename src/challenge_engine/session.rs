//! Session controller: phase machine, scoring and clock for one game.
//!
//! ```text
//! Ready --start()--> Running --end(msg)--> Ended
//! ```
//!
//! `Ended` is terminal; play again by creating a new session. Every command is
//! tolerant of being called in the wrong phase (a double-clicked button, a
//! timer tick racing the final answer) and simply does nothing.
//!
//! The controller never reads a clock itself. The host calls [`Session::tick`]
//! once per second while running and must serialize ticks with answer
//! submissions.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, trace};

use crate::challenge_engine::{
    config::{ChallengeSet, SessionConfig},
    error::ConfigError,
    generator::generate_from,
    helpers::UniformSource,
    models::{
        AnswerOutcome, ChallengeType, Difficulty, Mode, Phase, Problem, SessionSnapshot,
        SessionSummary,
    },
};

/// Countdown length for [`Mode::OneMinute`].
pub const ONE_MINUTE_SECONDS: u32 = 60;
/// Number of questions in a [`Mode::SpeedChallenge`] run.
pub const SPEED_CHALLENGE_QUESTIONS: u32 = 20;
/// Answers strictly closer than this to the exact value are accepted.
pub const ANSWER_TOLERANCE: f64 = 0.01;

pub const TIMES_UP: &str = "Time's up!";
pub const GAME_OVER: &str = "Game Over!";
pub const CHALLENGE_COMPLETE: &str = "Challenge Complete!";

/// Judge a raw answer against the exact value.
///
/// Input is trimmed and parsed as `f64`; anything unparseable is wrong. The
/// distance is snapped to nanounits first, so typing a value exactly one
/// hundredth away is rejected regardless of binary rounding noise.
pub fn judge_answer(raw: &str, expected: f64) -> bool {
    match raw.trim().parse::<f64>() {
        Ok(parsed) => {
            let distance = ((parsed - expected).abs() * 1e9).round() / 1e9;
            distance < ANSWER_TOLERANCE
        }
        Err(_) => false,
    }
}

/// Create an entropy-seeded session. Fails only on an empty type selection.
pub fn create_session(
    mode: Mode,
    types: &[ChallengeType],
    difficulty: Difficulty,
) -> Result<Session, ConfigError> {
    Session::from_config(SessionConfig::new(mode, types.iter().copied()).with_difficulty(difficulty))
}

#[derive(Debug)]
pub struct Session<S = StdRng> {
    mode: Mode,
    difficulty: Difficulty,
    types: ChallengeSet,
    src: S,
    phase: Phase,
    score: u32,
    incorrect_count: u32,
    question_index: u32,
    seconds: u32,
    current_problem: Option<Problem>,
    last_answer_correct: Option<bool>,
    end_message: Option<String>,
}

impl Session<StdRng> {
    /// Build a session from host settings, seeding from `rng_seed` or entropy.
    pub fn from_config(config: SessionConfig) -> Result<Self, ConfigError> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Session::with_source(config, rng)
    }
}

impl<S: UniformSource> Session<S> {
    /// Build a session drawing every problem from `src`. `rng_seed` is ignored.
    pub fn with_source(config: SessionConfig, src: S) -> Result<Self, ConfigError> {
        let types = config.validate()?;
        Ok(Session {
            mode: config.mode,
            difficulty: config.difficulty,
            types,
            src,
            phase: Phase::Ready,
            score: 0,
            incorrect_count: 0,
            question_index: 0,
            seconds: 0,
            current_problem: None,
            last_answer_correct: None,
            end_message: None,
        })
    }

    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            trace!(phase = %self.phase, "start ignored");
            return;
        }
        self.score = 0;
        self.incorrect_count = 0;
        self.question_index = 1;
        self.last_answer_correct = None;
        self.end_message = None;
        self.seconds = if self.mode.counts_down() { ONE_MINUTE_SECONDS } else { 0 };
        self.next_problem();
        self.phase = Phase::Running;
        debug!(mode = %self.mode, difficulty = %self.difficulty, "session started");
    }

    /// Advance the clock by one second. No effect unless running.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        if self.mode.counts_down() {
            self.seconds = self.seconds.saturating_sub(1);
            trace!(remaining = self.seconds, "tick");
            if self.seconds == 0 {
                self.end(TIMES_UP);
            }
        } else {
            self.seconds += 1;
            trace!(elapsed = self.seconds, "tick");
        }
    }

    pub fn submit_answer(&mut self, raw: &str) -> AnswerOutcome {
        if raw.trim().is_empty() || self.phase != Phase::Running {
            return AnswerOutcome::Ignored;
        }
        let Some(expected) = self.current_problem.as_ref().map(|p| p.correct_answer) else {
            return AnswerOutcome::Ignored;
        };

        let correct = judge_answer(raw, expected);
        self.last_answer_correct = Some(correct);
        trace!(question = self.question_index, input = raw, correct, "answer judged");

        let outcome = if correct {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            self.incorrect_count += 1;
            AnswerOutcome::Incorrect { expected }
        };

        if !correct && self.mode == Mode::BitterEnd {
            self.end(GAME_OVER);
        } else if self.mode == Mode::SpeedChallenge && self.question_index + 1 > SPEED_CHALLENGE_QUESTIONS {
            // checked before advancing: question 20 is the last one served
            self.end(CHALLENGE_COMPLETE);
        } else {
            self.question_index += 1;
            self.next_problem();
        }
        outcome
    }

    /// Stop the session with `message`. No effect unless running.
    pub fn end(&mut self, message: impl Into<String>) {
        if self.phase != Phase::Running {
            return;
        }
        let message = message.into();
        debug!(
            score = self.score,
            incorrect = self.incorrect_count,
            question = self.question_index,
            message = %message,
            "session ended"
        );
        self.current_problem = None;
        self.end_message = Some(message);
        self.phase = Phase::Ended;
    }

    fn next_problem(&mut self) {
        self.current_problem = Some(generate_from(self.types.as_slice(), self.difficulty, &mut self.src));
    }

    // -----------------------------------------------------------------------
    // Read-only state
    // -----------------------------------------------------------------------

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn challenge_types(&self) -> &[ChallengeType] {
        self.types.as_slice()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn question_index(&self) -> u32 {
        self.question_index
    }

    /// Remaining seconds in one-minute mode, elapsed seconds otherwise.
    pub fn seconds_shown(&self) -> u32 {
        self.seconds
    }

    pub fn elapsed_seconds(&self) -> u32 {
        if self.mode.counts_down() && self.phase != Phase::Ready {
            ONE_MINUTE_SECONDS - self.seconds
        } else {
            self.seconds
        }
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.current_problem.as_ref()
    }

    pub fn current_problem_text(&self) -> Option<&str> {
        self.current_problem.as_ref().map(|p| p.display_text.as_str())
    }

    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_answer_correct
    }

    pub fn end_message(&self) -> Option<&str> {
        self.end_message.as_deref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            difficulty: self.difficulty,
            phase: self.phase,
            score: self.score,
            incorrect_count: self.incorrect_count,
            question_index: self.question_index,
            seconds_shown: self.seconds,
            current_problem_text: self.current_problem_text().map(str::to_string),
            last_answer_correct: self.last_answer_correct,
            end_message: self.end_message.clone(),
        }
    }

    /// Final tally; `None` until the session has ended.
    pub fn summary(&self) -> Option<SessionSummary> {
        let end_message = self.end_message.clone()?;
        let answered = self.score + self.incorrect_count;
        let accuracy_percent = if answered == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(answered) * 100.0
        };
        Some(SessionSummary {
            mode: self.mode,
            difficulty: self.difficulty,
            score: self.score,
            incorrect_count: self.incorrect_count,
            questions_answered: answered,
            elapsed_seconds: self.elapsed_seconds(),
            accuracy_percent,
            end_message,
        })
    }
}
