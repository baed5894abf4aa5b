//! Game configuration passed explicitly to boards, placement and the AI.

use alloc::vec::Vec;

use crate::ship::ShipKind;

/// Default grid edge length.
pub const BOARD_SIZE: usize = 10;
/// Default number of placement attempts per ship before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;
/// Default chance that a miss ends a multi-hit pursuit.
pub const RESET_PROBABILITY: f64 = 0.3;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// How the targeting AI decides that a pursued ship is finished.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ResetPolicy {
    /// After two or more hits, each miss returns to hunting with probability `p`.
    Probabilistic { p: f64 },
    /// Return to hunting only when the orchestrator reports a sunk ship.
    OnSunk,
}

impl Default for ResetPolicy {
    fn default() -> Self {
        ResetPolicy::Probabilistic {
            p: RESET_PROBABILITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub board_size: usize,
    /// Ships placed on each board, in placement order, longest first.
    pub fleet: Vec<ShipKind>,
    pub placement_attempts: usize,
    pub reset_policy: ResetPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            fleet: ShipKind::ALL.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            reset_policy: ResetPolicy::default(),
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(&'static str),
}

/// Errors that can occur when loading configuration from disk.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

impl GameConfig {
    /// Number of cells the fleet occupies.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().map(|k| k.length()).sum()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > 26 {
            return Err(ConfigError::Validation("board_size must be in 1..=26"));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::Validation("fleet must not be empty"));
        }
        if self.fleet.windows(2).any(|w| w[0].length() < w[1].length()) {
            return Err(ConfigError::Validation(
                "fleet must be listed longest ship first",
            ));
        }
        if self.fleet.iter().any(|k| k.length() > self.board_size) {
            return Err(ConfigError::Validation("every ship must fit on the board"));
        }
        if self.fleet_cells() > self.board_size * self.board_size {
            return Err(ConfigError::Validation("fleet is larger than the board"));
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::Validation("placement_attempts must be > 0"));
        }
        if let ResetPolicy::Probabilistic { p } = self.reset_policy {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Validation(
                    "reset_policy.p must be in [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl GameConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &std::path::Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
