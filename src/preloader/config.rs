use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::Millis;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("timeout ({timeout_ms}ms) is shorter than the minimum duration ({min_duration_ms}ms)")]
    TimeoutBeforeMinimum {
        timeout_ms: Millis,
        min_duration_ms: Millis,
    },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Timing options recognized by the preloader. Field names match the page
/// options (`minDurationMs`, `timeoutMs`, ...) when read from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreloaderConfig {
    #[serde(deserialize_with = "clamped_ms")]
    pub min_duration_ms: Millis,
    #[serde(deserialize_with = "clamped_ms")]
    pub timeout_ms: Millis,
    #[serde(deserialize_with = "clamped_ms")]
    pub extra_hold_ms: Millis,
    #[serde(deserialize_with = "clamped_ms")]
    pub exit_ms: Millis,
    pub wait_fonts: bool,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: 3000,
            timeout_ms: 10_000,
            extra_hold_ms: 800,
            exit_ms: 360,
            wait_fonts: true,
        }
    }
}

impl PreloaderConfig {
    pub fn with_min_duration(mut self, ms: Millis) -> Self {
        self.min_duration_ms = ms;
        self
    }

    pub fn with_timeout(mut self, ms: Millis) -> Self {
        self.timeout_ms = ms;
        self
    }

    pub fn with_extra_hold(mut self, ms: Millis) -> Self {
        self.extra_hold_ms = ms;
        self
    }

    pub fn with_exit(mut self, ms: Millis) -> Self {
        self.exit_ms = ms;
        self
    }

    pub fn with_wait_fonts(mut self, wait_fonts: bool) -> Self {
        self.wait_fonts = wait_fonts;
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.timeout_ms < self.min_duration_ms {
            return Err(ConfigError::TimeoutBeforeMinimum {
                timeout_ms: self.timeout_ms,
                min_duration_ms: self.min_duration_ms,
            });
        }
        Ok(self)
    }
}

// negative or fractional durations coming from JSON are clamped and rounded
fn clamped_ms<'de, D>(deserializer: D) -> Result<Millis, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() || raw <= 0.0 {
        Ok(0)
    } else {
        Ok(raw.round() as Millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PreloaderConfig::default();
        assert_eq!(config.min_duration_ms, 3000);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.extra_hold_ms, 800);
        assert_eq!(config.exit_ms, 360);
        assert!(config.wait_fonts);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn test_from_json() {
        let config: PreloaderConfig =
            serde_json::from_str(r#"{ "minDurationMs": 700, "timeoutMs": 10000, "waitFonts": false }"#)
                .expect("config should parse");
        assert_eq!(config.min_duration_ms, 700);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.extra_hold_ms, 800);
        assert!(!config.wait_fonts);

        let config: PreloaderConfig =
            serde_json::from_str(r#"{ "extraHoldMs": -50, "exitMs": 359.6 }"#).expect("config should parse");
        assert_eq!(config.extra_hold_ms, 0);
        assert_eq!(config.exit_ms, 360);
    }

    #[test]
    fn test_validate() {
        let config = PreloaderConfig::default().with_timeout(1000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TimeoutBeforeMinimum {
                timeout_ms: 1000,
                min_duration_ms: 3000
            })
        );
        assert_eq!(
            PreloaderConfig::default().with_min_duration(0).with_timeout(0).validate(),
            Err(ConfigError::ZeroTimeout)
        );
    }
}
