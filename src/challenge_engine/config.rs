//! Session settings as chosen by the host's settings screen.

use serde::{Deserialize, Serialize};

use crate::challenge_engine::{
    error::ConfigError,
    models::{ChallengeType, Difficulty, Mode},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: Mode,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub challenge_types: Vec<ChallengeType>,
    /// Fixed seed for reproducible sessions; `None` seeds from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    /// Minimal constructor. Defaults: `Easy`, entropy seed.
    pub fn new(mode: Mode, challenge_types: impl IntoIterator<Item = ChallengeType>) -> Self {
        SessionConfig {
            mode,
            difficulty: Difficulty::default(),
            challenge_types: challenge_types.into_iter().collect(),
            rng_seed: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Decode settings sent by the host, e.g.
    /// `{"mode":"bitter-end","difficulty":"easy","challenge_types":["add"]}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the selection is usable and return it as a [`ChallengeSet`].
    pub fn validate(&self) -> Result<ChallengeSet, ConfigError> {
        ChallengeSet::new(self.challenge_types.iter().copied())
    }
}

/// Non-empty, duplicate-free selection of challenge types, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSet(Vec<ChallengeType>);

impl ChallengeSet {
    pub fn new(types: impl IntoIterator<Item = ChallengeType>) -> Result<Self, ConfigError> {
        let mut selected: Vec<ChallengeType> = Vec::new();
        for t in types {
            if !selected.contains(&t) {
                selected.push(t);
            }
        }
        if selected.is_empty() {
            return Err(ConfigError::NoChallengeTypes);
        }
        Ok(ChallengeSet(selected))
    }

    pub fn as_slice(&self) -> &[ChallengeType] {
        &self.0
    }
}
