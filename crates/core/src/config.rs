use crate::{ChipColor, SCORES_TO_WIN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const INITIAL_HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    pub players: Vec<ChipColor>,
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
    #[serde(default = "default_scores_to_win")]
    pub scores_to_win: usize,
}

fn default_hand_size() -> usize {
    INITIAL_HAND_SIZE
}

fn default_scores_to_win() -> usize {
    SCORES_TO_WIN
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected {}..={} players, got {}", MIN_PLAYERS, MAX_PLAYERS, .0)]
    PlayerCount(usize),
    #[error("color {0} is seated twice")]
    DuplicateColor(ChipColor),
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("scores to win must be at least 1")]
    NoWinThreshold,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            players: vec![ChipColor::Red, ChipColor::Blue],
            hand_size: INITIAL_HAND_SIZE,
            scores_to_win: SCORES_TO_WIN,
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len()) {
            return Err(ConfigError::PlayerCount(self.players.len()));
        }
        let mut seen = HashSet::new();
        for color in &self.players {
            if !seen.insert(*color) {
                return Err(ConfigError::DuplicateColor(*color));
            }
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.scores_to_win == 0 {
            return Err(ConfigError::NoWinThreshold);
        }
        Ok(())
    }

    pub fn seat_of(&self, color: ChipColor) -> Option<usize> {
        self.players.iter().position(|player| *player == color)
    }
}
