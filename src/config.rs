//! Configuration structures for the visual performance calculator.
//!
//! The model itself has no tunable coefficients; configuration controls how
//! the calculator treats inputs that fall outside the formulas' domains and
//! which observer ages it considers realistic.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use visual_performance::CalculatorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = CalculatorConfig::from_json_file(Path::new("rvp.json"))?;
//!
//! // Or use defaults
//! let config = CalculatorConfig::default();
//! # Ok::<(), visual_performance::CalculationError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`DomainPolicy`]: reject out-of-domain inputs or propagate NaN/∞
//! - [`ObserverLimits`]: realistic observer age range

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::observer;
use crate::error::{CalculationError, Result};

/// How the calculator handles inputs outside a formula's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Fail fast with a [`CalculationError`] naming the offending quantity
    #[default]
    Reject,

    /// Evaluate the raw formulas and let NaN or infinity flow into the result
    Propagate,
}

/// Complete calculator configuration.
///
/// Can be serialized to/from JSON for reproducible studies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Out-of-domain input handling
    #[serde(default)]
    pub domain_policy: DomainPolicy,

    /// Observer age range checks
    #[serde(default)]
    pub observer: ObserverLimits,
}

/// Observer age range the model's source data covers.
///
/// Ages outside the range are logged as warnings, or rejected when
/// `enforce` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverLimits {
    /// Youngest realistic observer (years)
    pub min_age: f64,

    /// Oldest realistic observer (years)
    pub max_age: f64,

    /// Reject ages outside the range instead of warning
    #[serde(default)]
    pub enforce: bool,
}

impl Default for ObserverLimits {
    fn default() -> Self {
        Self {
            min_age: observer::MIN_AGE,
            max_age: observer::MAX_AGE,
            enforce: false,
        }
    }
}

impl ObserverLimits {
    /// Check whether `age_of_observer` lies within the realistic range
    pub fn contains(&self, age_of_observer: f64) -> bool {
        (self.min_age..=self.max_age).contains(&age_of_observer)
    }
}

impl CalculatorConfig {
    /// Configuration matching the legacy calculator: no domain checks,
    /// NaN and infinity propagate into the result
    pub fn legacy_propagate() -> Self {
        Self {
            domain_policy: DomainPolicy::Propagate,
            ..Self::default()
        }
    }

    /// Validate parameter consistency
    pub fn validate(&self) -> Result<()> {
        let limits = &self.observer;
        if !(limits.min_age.is_finite() && limits.min_age > 0.0) {
            return Err(CalculationError::invalid_parameter(
                "observer.min_age",
                limits.min_age,
            ));
        }
        if !limits.max_age.is_finite() || limits.max_age <= limits.min_age {
            return Err(CalculationError::invalid_parameter(
                "observer.max_age",
                limits.max_age,
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
