use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_SESSION_KEY: &str = "deviceInfo";

/// Width thresholds (inclusive upper bounds, in CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScreenThresholds {
    pub small_mobile_max: u32,
    pub mobile_max: u32,
    pub tablet_max: u32,
}

impl Default for ScreenThresholds {
    fn default() -> Self {
        Self {
            small_mobile_max: 480,
            mobile_max: 768,
            tablet_max: 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub thresholds: ScreenThresholds,
    pub resize_quiet_period_ms: u64,
    /// Key the serialized snapshot is mirrored under in session storage.
    pub session_key: String,
    /// Substrings that mark an Android User-Agent as a tablet.
    pub tablet_keywords: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            thresholds: ScreenThresholds::default(),
            resize_quiet_period_ms: 250,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            tablet_keywords: [
                "tablet", "nexus 7", "nexus 10", "xoom", "kindle", "playbook", "silk", "gt-p",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl DetectionConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn resize_quiet_period(&self) -> Duration {
        Duration::from_millis(self.resize_quiet_period_ms)
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !(t.small_mobile_max <= t.mobile_max && t.mobile_max < t.tablet_max) {
            return Err(Error::Config(format!(
                "thresholds must satisfy small_mobile_max <= mobile_max < tablet_max, got {}/{}/{}",
                t.small_mobile_max, t.mobile_max, t.tablet_max
            )));
        }
        if self.session_key.is_empty() {
            return Err(Error::Config("session_key must not be empty".into()));
        }
        if self.tablet_keywords.iter().any(|k| k.is_empty()) {
            return Err(Error::Config("tablet_keywords must not contain empty entries".into()));
        }
        Ok(())
    }
}
