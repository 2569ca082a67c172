//! Configuration system
//!
//! Tunable constants for the resolution engine live in [`ResolveConfig`]
//! rather than as baked-in literals, so a game can load them alongside its
//! other settings. The [`Config`] trait provides file loading and saving in
//! TOML or RON.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Tunables for the resolution engine
///
/// `teleport_threshold` classifies a ramp resolution: a vertical snap whose
/// magnitude exceeds it is reported as teleporting, so callers can tell a
/// legitimate snap-to-slope from a physically implausible jump. Incremental
/// sliding moves one unit per step, so the default of 1 flags anything
/// larger than a single step.
///
/// `max_snap_height` is the acceptance policy most callers apply on top:
/// reject upward teleports taller than this fraction of the moving shape's
/// height (see [`CollisionResult::is_plausible_snap`]). It is a caller
/// policy, not an engine invariant, which is why it lives here instead of
/// inside the resolver.
///
/// [`CollisionResult::is_plausible_snap`]: crate::resolve::CollisionResult::is_plausible_snap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Vertical snap magnitude above which a ramp resolution counts as a
    /// teleport, in world units
    pub teleport_threshold: i32,

    /// Largest acceptable upward snap, as a fraction of the mover's height
    pub max_snap_height: f32,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            teleport_threshold: 1,
            max_snap_height: 0.5,
        }
    }
}

impl Config for ResolveConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolveConfig::default();
        assert_eq!(config.teleport_threshold, 1);
        assert!((config.max_snap_height - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ResolveConfig {
            teleport_threshold: 3,
            max_snap_height: 0.25,
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ResolveConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: ResolveConfig = toml::from_str("teleport_threshold = 2\n").unwrap();
        assert_eq!(parsed.teleport_threshold, 2);
        assert!((parsed.max_snap_height - 0.5).abs() < f32::EPSILON);
    }
}
