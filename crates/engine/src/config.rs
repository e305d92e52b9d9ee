//! Configuration for a synthesis run.

use smy_classify::TrackedChannels;
use smy_series::Channel;

use crate::error::EngineError;

/// First year of the model irradiance record.
pub const DEFAULT_MODEL_IRRADIANCE_SINCE: i32 = 2018;

/// Configuration for standard-year synthesis.
///
/// # Example
///
/// ```
/// use smy_engine::SynthesisConfig;
///
/// let config = SynthesisConfig::new(2011, 2020).with_use_estimated_irradiance(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.analysed_years(), 2018..=2020);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisConfig {
    start_year: i32,
    end_year: i32,
    use_estimated_irradiance: bool,
    model_irradiance_since: i32,
}

impl SynthesisConfig {
    /// Creates a configuration for candidate years `start_year..=end_year`.
    ///
    /// Defaults: `use_estimated_irradiance = true`,
    /// `model_irradiance_since = 2018`.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            use_estimated_irradiance: true,
            model_irradiance_since: DEFAULT_MODEL_IRRADIANCE_SINCE,
        }
    }

    /// Selects the estimated (`true`) or model (`false`) irradiance basis.
    pub fn with_use_estimated_irradiance(mut self, estimated: bool) -> Self {
        self.use_estimated_irradiance = estimated;
        self
    }

    /// Sets the first year with model irradiance.
    pub fn with_model_irradiance_since(mut self, year: i32) -> Self {
        self.model_irradiance_since = year;
        self
    }

    // --- Accessors ---

    /// Returns the requested first candidate year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the requested last candidate year.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns true if the estimated irradiance basis is used.
    pub fn use_estimated_irradiance(&self) -> bool {
        self.use_estimated_irradiance
    }

    /// Returns the first year with model irradiance.
    pub fn model_irradiance_since(&self) -> i32 {
        self.model_irradiance_since
    }

    /// Candidate years actually classified.
    ///
    /// On the model basis the range starts no earlier than
    /// `model_irradiance_since`.
    pub fn analysed_years(&self) -> std::ops::RangeInclusive<i32> {
        let start = if self.use_estimated_irradiance {
            self.start_year
        } else {
            self.start_year.max(self.model_irradiance_since)
        };
        start..=self.end_year
    }

    /// Channel bindings of the tracked parameters.
    pub fn tracked_channels(&self) -> TrackedChannels {
        TrackedChannels::with_irradiance(self.irradiance_channel())
    }

    /// Global irradiance channel carried through as canonical.
    pub fn irradiance_channel(&self) -> Channel {
        if self.use_estimated_irradiance {
            Channel::DswrfEst
        } else {
            Channel::DswrfMsm
        }
    }

    /// Irradiance channels of the basis not in use, dropped from the output.
    pub fn unused_irradiance_channels(&self) -> [Channel; 4] {
        if self.use_estimated_irradiance {
            Channel::model_irradiance()
        } else {
            Channel::estimated_irradiance()
        }
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.start_year > self.end_year {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "start_year ({}) must be <= end_year ({})",
                    self.start_year, self.end_year
                ),
            });
        }
        let analysed = self.analysed_years();
        if analysed.is_empty() {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "model irradiance starts in {}, after end_year ({})",
                    self.model_irradiance_since, self.end_year
                ),
            });
        }
        Ok(())
    }
}
