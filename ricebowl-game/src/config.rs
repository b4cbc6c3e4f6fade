use crate::bowls::BOWLS_PER_DAY;
use crate::calendar::MIN_YEAR;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const STATIC_CONFIG: &str = include_str!("../assets/battle.json");

/// Placeholder names shown when a player leaves the name field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultNames {
    pub me: String,
    pub opponent: String,
}

impl Default for DefaultNames {
    fn default() -> Self {
        Self {
            me: String::from("나"),
            opponent: String::from("상대방"),
        }
    }
}

/// Tunables for the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    #[serde(default = "BattleConfig::default_bowls_per_day")]
    pub bowls_per_day: u64,
    #[serde(default = "BattleConfig::default_min_year")]
    pub min_year: i32,
    #[serde(default)]
    pub default_names: DefaultNames,
}

/// Errors raised when battle configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bowls_per_day must be at least 1 (got {0})")]
    ZeroRate(u64),
    #[error("min_year must be between 1 and 9999 (got {0})")]
    MinYearRange(i32),
    #[error("default name for {0} must not be blank")]
    BlankDefaultName(&'static str),
    #[error("battle config is not valid JSON: {0}")]
    Parse(String),
}

impl BattleConfig {
    const fn default_bowls_per_day() -> u64 {
        BOWLS_PER_DAY
    }

    const fn default_min_year() -> i32 {
        MIN_YEAR
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON, or the first violated invariant.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the bundled configuration, falling back to defaults if it is unusable.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(STATIC_CONFIG).unwrap_or_else(|err| {
            log::warn!("falling back to default battle config: {err}");
            Self::default()
        })
    }

    /// Check invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bowls_per_day == 0 {
            return Err(ConfigError::ZeroRate(self.bowls_per_day));
        }
        if !(1..=9999).contains(&self.min_year) {
            return Err(ConfigError::MinYearRange(self.min_year));
        }
        if self.default_names.me.trim().is_empty() {
            return Err(ConfigError::BlankDefaultName("me"));
        }
        if self.default_names.opponent.trim().is_empty() {
            return Err(ConfigError::BlankDefaultName("opponent"));
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            bowls_per_day: Self::default_bowls_per_day(),
            min_year: Self::default_min_year(),
            default_names: DefaultNames::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_config_matches_defaults() {
        assert_eq!(BattleConfig::load_from_static(), BattleConfig::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = BattleConfig::from_json("{}").unwrap();
        assert_eq!(cfg.bowls_per_day, 3);
        assert_eq!(cfg.min_year, 1900);
        assert_eq!(cfg.default_names.opponent, "상대방");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            BattleConfig::from_json(r#"{"bowls_per_day":0}"#),
            Err(ConfigError::ZeroRate(0))
        );
        assert_eq!(
            BattleConfig::from_json(r#"{"min_year":0}"#),
            Err(ConfigError::MinYearRange(0))
        );
        assert_eq!(
            BattleConfig::from_json(r#"{"default_names":{"me":" ","opponent":"x"}}"#),
            Err(ConfigError::BlankDefaultName("me"))
        );
        assert!(matches!(
            BattleConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = BattleConfig {
            bowls_per_day: 2,
            min_year: 1950,
            default_names: DefaultNames {
                me: String::from("me"),
                opponent: String::from("them"),
            },
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(BattleConfig::from_json(&json).unwrap(), cfg);
    }
}
