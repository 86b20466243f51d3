use serde::{Deserialize, Serialize};
use swipefit_domain::SWIPE_THRESHOLD;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Minimal gesture distance that changes the page.
    pub swipe_threshold: f64,
    /// Number of log entries kept in memory.
    pub log_capacity: usize,
}

impl Settings {
    /// Missing fields are set to their default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings = serde_json::from_str::<Settings>(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns an error if the settings cannot be represented as JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns an error if a value is out of range.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(Error::Invalid(format!(
                "swipe threshold must be a non-negative number ({})",
                self.swipe_threshold
            )));
        }
        if self.log_capacity == 0 {
            return Err(Error::Invalid(
                "log capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            log_capacity: 100,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}
