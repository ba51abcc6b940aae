//! Configuration snapshot
//!
//! `LimitsConfig` is a small `Copy` value. The caller captures it once per
//! cycle (or once at startup) and hands it to the selector inside
//! [`crate::CycleState`]; nothing in this crate holds configuration between
//! cycles.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::ProfileChoice;
use crate::{LimitsError, LimitsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub acceleration_profile: ProfileChoice,
    pub deceleration_profile: ProfileChoice,
    /// Let the vehicle's eco/sport drive mode pick the acceleration curve.
    pub follow_gear_acceleration: bool,
    /// Let the vehicle's eco/sport drive mode pick the deceleration bound.
    pub follow_gear_deceleration: bool,
    /// Use the Sport+ table wherever Sport would otherwise apply through the
    /// gear ladder, and as the fallback for the standard profile.
    pub sport_plus: bool,
    /// Human-like ramp-in of the acceleration ceiling.
    pub human_acceleration: bool,
    /// Clamp the ceiling to the ISO 15622 limit.
    pub iso_ceiling: bool,
}

impl LimitsConfig {
    /// Parse a snapshot from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::Parse`] on malformed JSON, unknown fields or
    /// unknown profile names.
    pub fn from_json_str(text: &str) -> LimitsResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| LimitsError::Parse(e.to_string()))?;
        debug!(?config, "loaded limits config from JSON");
        Ok(config)
    }

    /// Parse a snapshot from YAML. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::Parse`] on malformed YAML, unknown fields or
    /// unknown profile names.
    pub fn from_yaml_str(text: &str) -> LimitsResult<Self> {
        let config: Self =
            serde_yaml::from_str(text).map_err(|e| LimitsError::Parse(e.to_string()))?;
        debug!(?config, "loaded limits config from YAML");
        Ok(config)
    }

    /// Serialize the snapshot to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::Parse`] if serialization fails.
    pub fn to_json_string(&self) -> LimitsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LimitsError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let config = LimitsConfig::default();
        assert_eq!(config.acceleration_profile, ProfileChoice::Standard);
        assert_eq!(config.deceleration_profile, ProfileChoice::Standard);
        assert!(!config.follow_gear_acceleration);
        assert!(!config.follow_gear_deceleration);
        assert!(!config.sport_plus);
        assert!(!config.human_acceleration);
        assert!(!config.iso_ceiling);
    }

    #[test]
    fn test_from_json_partial() -> LimitsResult<()> {
        let config = LimitsConfig::from_json_str(
            r#"{"acceleration_profile": "sport", "human_acceleration": true}"#,
        )?;
        assert_eq!(config.acceleration_profile, ProfileChoice::Sport);
        assert_eq!(config.deceleration_profile, ProfileChoice::Standard);
        assert!(config.human_acceleration);
        assert!(!config.sport_plus);
        Ok(())
    }

    #[test]
    fn test_from_yaml() -> LimitsResult<()> {
        let yaml = "\
acceleration_profile: eco
deceleration_profile: sport
follow_gear_acceleration: true
sport_plus: true
";
        let config = LimitsConfig::from_yaml_str(yaml)?;
        assert_eq!(config.acceleration_profile, ProfileChoice::Eco);
        assert_eq!(config.deceleration_profile, ProfileChoice::Sport);
        assert!(config.follow_gear_acceleration);
        assert!(!config.follow_gear_deceleration);
        assert!(config.sport_plus);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_field() {
        let result = LimitsConfig::from_json_str(r#"{"acceleration_profle": "eco"}"#);
        assert!(matches!(result, Err(LimitsError::Parse(_))));
    }

    #[test]
    fn test_rejects_unknown_profile() {
        let result = LimitsConfig::from_yaml_str("acceleration_profile: ludicrous\n");
        assert!(matches!(result, Err(LimitsError::Parse(_))));
    }

    #[test]
    fn test_json_roundtrip() -> LimitsResult<()> {
        let config = LimitsConfig {
            acceleration_profile: ProfileChoice::Sport,
            deceleration_profile: ProfileChoice::Eco,
            follow_gear_deceleration: true,
            iso_ceiling: true,
            ..LimitsConfig::default()
        };
        let json = config.to_json_string()?;
        assert_eq!(LimitsConfig::from_json_str(&json)?, config);
        Ok(())
    }
}
