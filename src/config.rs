use anyhow::{Context, Result};
use serde::Deserialize;

use crate::series::types::{Condition, FALLBACK_CONDITION, FALLBACK_ICON};
use crate::series::DEFAULT_HOURS;

/// Pipeline settings, optionally read from a JSON file.
///
/// Every key may be omitted:
/// ```json
/// {
///   "hours": 24,
///   "fallback_icon": "01d",
///   "fallback_condition": "Clear"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Length of the hourly series.
    pub hours: usize,
    /// Icon id substituted when a sample carries no condition.
    pub fallback_icon: String,
    /// Condition label substituted when a sample carries no condition.
    pub fallback_condition: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hours: DEFAULT_HOURS,
            fallback_icon: FALLBACK_ICON.to_string(),
            fallback_condition: FALLBACK_CONDITION.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings in {}", path))?;
        Ok(settings)
    }

    /// Loads settings from `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Condition applied to samples without one.
    pub fn fallback(&self) -> Condition {
        Condition::new(&self.fallback_icon, &self.fallback_condition)
    }
}
