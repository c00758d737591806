//! Tunable weights for log curation.
//!
//! Defaults are the tuned values; a TOML file only needs to name the values it
//! overrides:
//!
//! ```toml
//! dedupe_enabled = true
//!
//! [glue]
//! limit = 4
//!
//! [stakes.penalties]
//! repeat_owner = 60.0
//! owner_in_relationship = 15.0
//! relationship_participant_reused = 80.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CurationError, Result};

/// Configuration for the whole curation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurationConfig {
    pub glue: GlueConfig,
    pub stakes: StakesConfig,

    /// Collapse structurally identical records before selection.
    pub dedupe_enabled: bool,
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            glue: GlueConfig::default(),
            stakes: StakesConfig::default(),
            dedupe_enabled: true,
        }
    }
}

impl CurationConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CurationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded curation config");
        Ok(config)
    }

    /// Reject weights that would make scores meaningless.
    pub fn validate(&self) -> Result<()> {
        check_weight("glue.expiry_plus_one_bonus", self.glue.expiry_plus_one_bonus)?;
        check_weight("stakes.recency_multiplier", self.stakes.recency_multiplier)?;
        self.glue.kind_bonus.validate("glue.kind_bonus")?;
        self.stakes.kind_bonus.validate("stakes.kind_bonus")?;
        self.glue.penalties.validate("glue.penalties")?;
        self.stakes.penalties.validate("stakes.penalties")?;
        Ok(())
    }
}

/// Weights for the glue bucket (near-expiry, recency-heavy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlueConfig {
    /// Maximum number of glue logs returned.
    pub limit: usize,

    /// Bonus for logs expiring exactly one month from now.
    pub expiry_plus_one_bonus: f64,

    pub kind_bonus: KindBonus,
    pub penalties: BreadthPenalties,
}

impl Default for GlueConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            expiry_plus_one_bonus: 10.0,
            kind_bonus: KindBonus {
                relationship: 6.0,
                character: 3.0,
                estate: 0.0,
            },
            penalties: BreadthPenalties {
                repeat_owner: 80.0,
                owner_in_relationship: 25.0,
                relationship_participant_reused: 120.0,
            },
        }
    }
}

/// Weights for the stakes bucket (long-horizon, importance-heavy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StakesConfig {
    /// Maximum number of stakes logs returned.
    pub limit: usize,

    /// Fraction of the recency key added to break ties between equally
    /// durable logs.
    pub recency_multiplier: f64,

    pub kind_bonus: KindBonus,

    /// Softer than glue so a heavy hitter can repeat.
    pub penalties: BreadthPenalties,
}

impl Default for StakesConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            recency_multiplier: 0.05,
            kind_bonus: KindBonus {
                relationship: 40.0,
                character: 15.0,
                estate: 0.0,
            },
            penalties: BreadthPenalties {
                repeat_owner: 50.0,
                owner_in_relationship: 15.0,
                relationship_participant_reused: 80.0,
            },
        }
    }
}

/// Flat bonus per log kind. Overriding tables must name all three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindBonus {
    pub relationship: f64,
    pub character: f64,
    pub estate: f64,
}

impl KindBonus {
    fn validate(&self, section: &str) -> Result<()> {
        check_weight(&format!("{section}.relationship"), self.relationship)?;
        check_weight(&format!("{section}.character"), self.character)?;
        check_weight(&format!("{section}.estate"), self.estate)
    }
}

/// Deductions applied when a candidate would repeat characters already
/// represented in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreadthPenalties {
    /// Character log whose owner already owns a selected character log.
    pub repeat_owner: f64,

    /// Character log whose owner already appears in a selected relationship log.
    pub owner_in_relationship: f64,

    /// Relationship log sharing a participant with a selected relationship log.
    pub relationship_participant_reused: f64,
}

impl BreadthPenalties {
    fn validate(&self, section: &str) -> Result<()> {
        check_weight(&format!("{section}.repeat_owner"), self.repeat_owner)?;
        check_weight(
            &format!("{section}.owner_in_relationship"),
            self.owner_in_relationship,
        )?;
        check_weight(
            &format!("{section}.relationship_participant_reused"),
            self.relationship_participant_reused,
        )
    }
}

fn check_weight(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CurationError::InvalidConfig(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )))
    }
}
