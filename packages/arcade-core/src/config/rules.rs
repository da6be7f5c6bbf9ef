//! Whist rule configuration.
//!
//! Extracts typed fields from an optional JSON document, falling back to
//! the standard two-player rules for anything missing or malformed.
//!
//! # Example JSON Config
//!
//! ```json
//! {
//!   "hand_size": 13,
//!   "trick_baseline": 6,
//!   "match_target": 6,
//!   "shuffle": ["scramble", "riffle", "riffle", "cut"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::ShuffleKind;
use crate::errors::GameError;

const DECK_SIZE: u8 = 52;

/// Ordered list of shuffles applied to a fresh deck before dealing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShufflePlan(pub Vec<ShuffleKind>);

impl Default for ShufflePlan {
    fn default() -> Self {
        Self(vec![
            ShuffleKind::Scramble,
            ShuffleKind::Riffle,
            ShuffleKind::Riffle,
            ShuffleKind::Cut,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhistRules {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: u8,
    /// Duel tricks a player must exceed before scoring.
    pub trick_baseline: u8,
    /// Cumulative points that win the match.
    pub match_target: u32,
    pub shuffle: ShufflePlan,
}

impl Default for WhistRules {
    fn default() -> Self {
        Self {
            hand_size: 13,
            trick_baseline: 6,
            match_target: 6,
            shuffle: ShufflePlan::default(),
        }
    }
}

impl WhistRules {
    /// Build rules from an optional JSON value; malformed input yields defaults.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Reject setups the engine cannot play: both hands plus at least two
    /// stock cards (trump indicator and one prize pair) must fit the deck,
    /// and a Duel must be able to beat the trick baseline.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.hand_size == 0 {
            return Err(GameError::config("hand_size must be at least 1"));
        }
        if u16::from(self.hand_size) * 2 + 2 > u16::from(DECK_SIZE) {
            return Err(GameError::config(format!(
                "hand_size {} leaves no stock in a {DECK_SIZE}-card deck",
                self.hand_size
            )));
        }
        if self.trick_baseline >= self.hand_size {
            return Err(GameError::config(format!(
                "trick_baseline {} must be below hand_size {}",
                self.trick_baseline, self.hand_size
            )));
        }
        if self.match_target == 0 {
            return Err(GameError::config("match_target must be at least 1"));
        }
        Ok(())
    }
}
