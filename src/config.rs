//! Engine configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, Result};
use crate::eval::EvalWeights;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wall-clock budget per AI move in milliseconds (default: 250).
    pub time_budget_ms: u64,

    /// Deepest iterative deepening iteration (default: 60).
    /// Clamped to 1..=60 by the searcher.
    pub max_depth: i8,

    /// Transposition table slots (default: 2^18).
    pub tt_entries: usize,

    /// Probe and store the transposition table (default: true).
    /// Disabling it changes speed, never the chosen move at a fixed depth.
    pub use_transposition_table: bool,

    /// Evaluation weights.
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: 250,
            max_depth: 60,
            tt_entries: 1 << 18,
            use_transposition_table: true,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on malformed JSON or a failed [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| OthelloError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` describing the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.tt_entries == 0 {
            return Err(OthelloError::InvalidConfig(
                "tt_entries must be at least 1".to_string(),
            ));
        }
        self.weights.validate()
    }

    /// Create a new config with a custom time budget.
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    /// Create a new config with a custom depth cap.
    pub fn with_max_depth(mut self, depth: i8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with a custom table size.
    pub fn with_tt_entries(mut self, entries: usize) -> Self {
        self.tt_entries = entries;
        self
    }

    /// Enable or disable the transposition table.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.use_transposition_table = enabled;
        self
    }

    /// Create a new config with custom evaluation weights.
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}
