use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{GlobeError, Result};
use crate::utils::validation::{validate_positive_number, Validate};

pub const DEFAULT_CAP: usize = 12;
pub const DEFAULT_MAX_WITH_MODEL: usize = 2;

/// Size limits for the daily selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    pub cap: usize,
    pub max_with_model: usize,
}

impl SelectionPolicy {
    pub fn new(cap: usize, max_with_model: usize) -> Self {
        Self {
            cap,
            max_with_model,
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CAP, DEFAULT_MAX_WITH_MODEL)
    }
}

impl Validate for SelectionPolicy {
    fn validate(&self) -> Result<()> {
        validate_positive_number("selection.cap", self.cap, 1)?;
        // a zero sub-cap would let a day go by without any 3D model on the globe
        validate_positive_number("selection.max_with_model", self.max_with_model, 1)
    }
}

/// Which calendar decides what "today" is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClock {
    /// The host's local calendar day, the same day a visitor's browser sees.
    #[default]
    Local,
    Utc,
}

impl DayClock {
    pub fn today(self) -> NaiveDate {
        match self {
            DayClock::Local => Local::now().date_naive(),
            DayClock::Utc => Utc::now().date_naive(),
        }
    }
}

impl FromStr for DayClock {
    type Err = GlobeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(DayClock::Local),
            "utc" => Ok(DayClock::Utc),
            other => Err(GlobeError::InvalidConfigValueError {
                field: "clock".to_string(),
                value: other.to_string(),
                reason: "Expected 'local' or 'utc'".to_string(),
            }),
        }
    }
}

impl fmt::Display for DayClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayClock::Local => write!(f, "local"),
            DayClock::Utc => write!(f, "utc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = SelectionPolicy::default();
        assert_eq!(policy.cap, 12);
        assert_eq!(policy.max_with_model, 2);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        assert!(SelectionPolicy::new(0, 2).validate().is_err());
        assert!(SelectionPolicy::new(12, 0).validate().is_err());
    }

    #[test]
    fn test_clock_parsing() {
        assert_eq!("UTC".parse::<DayClock>().unwrap(), DayClock::Utc);
        assert_eq!("local".parse::<DayClock>().unwrap(), DayClock::Local);
        assert!("mars".parse::<DayClock>().is_err());
    }
}
