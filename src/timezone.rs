//! Timezone handling for the reporting window
//!
//! The window is computed as calendar dates in one fixed reference zone,
//! configured at startup and never changed mid-run.

use crate::error::{CostwatchError, Result};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

/// Configuration for the reference timezone
#[derive(Debug, Clone, Copy)]
pub struct TimezoneConfig {
    /// The timezone used for window date arithmetic
    pub tz: Tz,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            tz: detect_local_timezone(),
        }
    }
}

impl TimezoneConfig {
    /// Build from CLI arguments; `--utc` wins over `--timezone`
    pub fn from_cli(timezone_str: Option<&str>, use_utc: bool) -> Result<Self> {
        if use_utc {
            return Ok(Self { tz: Tz::UTC });
        }

        match timezone_str {
            Some(tz_str) => {
                let tz = Tz::from_str(tz_str).map_err(|_| {
                    CostwatchError::InvalidTimezone(format!(
                        "'{tz_str}'. Use format like 'America/New_York', 'Asia/Tokyo', or 'UTC'"
                    ))
                })?;
                Ok(Self { tz })
            }
            None => Ok(Self::default()),
        }
    }

    /// Display name for the configured timezone
    pub fn name(&self) -> &str {
        self.tz.name()
    }
}

/// Detect the system's local timezone, falling back to UTC
fn detect_local_timezone() -> Tz {
    if let Ok(tz_str) = std::env::var("TZ") {
        if let Ok(tz) = Tz::from_str(&tz_str) {
            debug!("Using timezone from TZ environment variable: {}", tz_str);
            return tz;
        }
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => Tz::from_str(&tz_str).unwrap_or_else(|_| {
            debug!("Could not parse system timezone '{}', using UTC", tz_str);
            Tz::UTC
        }),
        Err(e) => {
            debug!("Could not detect local timezone: {:?}, using UTC", e);
            Tz::UTC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_flag() {
        let config = TimezoneConfig::from_cli(None, true).unwrap();
        assert_eq!(config.tz, Tz::UTC);
        assert_eq!(config.name(), "UTC");
    }

    #[test]
    fn test_explicit_timezone() {
        let config = TimezoneConfig::from_cli(Some("Asia/Tokyo"), false).unwrap();
        assert_eq!(config.name(), "Asia/Tokyo");
    }

    #[test]
    fn test_utc_wins_over_explicit() {
        let config = TimezoneConfig::from_cli(Some("Asia/Tokyo"), true).unwrap();
        assert_eq!(config.tz, Tz::UTC);
    }

    #[test]
    fn test_invalid_timezone() {
        let result = TimezoneConfig::from_cli(Some("Nowhere/Special"), false);
        assert!(matches!(result, Err(CostwatchError::InvalidTimezone(_))));
    }
}
