//! Match records and outcome resolution

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Outcome of a match on the wire, relative to the first-listed team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Parse the case-sensitive wire token.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "win" => Ok(Outcome::Win),
            "draw" => Ok(Outcome::Draw),
            "loss" => Ok(Outcome::Loss),
            _ => Err(TallyError::InvalidOutcome {
                token: token.to_string(),
            }),
        }
    }

    /// The token this outcome is written as.
    pub fn as_token(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Loss => "loss",
        }
    }
}

/// Which seat of a pairing a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// A team's personal result in one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Resolve a raw outcome token for the team sitting on `side`.
    ///
    /// Records reaching aggregation have already been validated by the
    /// parser, but unknown tokens are still rejected here rather than
    /// trusted.
    pub fn from_token(token: &str, side: Side) -> Result<Self> {
        if token == "draw" {
            return Ok(GameResult::Draw);
        }
        match (token, side) {
            ("win", Side::First) | ("loss", Side::Second) => Ok(GameResult::Win),
            ("loss", Side::First) | ("win", Side::Second) => Ok(GameResult::Loss),
            _ => Err(TallyError::InvalidOutcome {
                token: token.to_string(),
            }),
        }
    }

    /// The same result seen from the other seat.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// One parsed input line: two teams and the outcome for the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub first: String,
    pub second: String,
    pub outcome: Outcome,
}
