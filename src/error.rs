//! Error types for the visual_performance library

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for visual_performance operations
pub type Result<T> = std::result::Result<T, CalculationError>;

/// Named physical quantity flowing through the RVP model.
///
/// Used by [`CalculationError`] to identify which input or intermediate left
/// the model's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    AgeOfObserver,
    BackgroundLuminance,
    TargetSize,
    LuminanceContrast,
    PupilRadius,
    RetinalIlluminance,
    ThresholdContrast,
    HalfSaturationConstant,
    MaximumResponse,
    Performance,
    ReactionTime,
    VisibilityLevel,
    RelativeVisualPerformance,
    /// `luminance_contrast - threshold_contrast`, the base of the 0.97 power
    ContrastExcess,
}

impl Quantity {
    /// Snake-case name of the quantity
    pub fn name(self) -> &'static str {
        match self {
            Quantity::AgeOfObserver => "age_of_observer",
            Quantity::BackgroundLuminance => "background_luminance",
            Quantity::TargetSize => "target_size",
            Quantity::LuminanceContrast => "luminance_contrast",
            Quantity::PupilRadius => "pupil_radius",
            Quantity::RetinalIlluminance => "retinal_illuminance",
            Quantity::ThresholdContrast => "threshold_contrast",
            Quantity::HalfSaturationConstant => "half_saturation_constant",
            Quantity::MaximumResponse => "maximum_response",
            Quantity::Performance => "performance",
            Quantity::ReactionTime => "reaction_time",
            Quantity::VisibilityLevel => "visibility_level",
            Quantity::RelativeVisualPerformance => "relative_visual_performance",
            Quantity::ContrastExcess => "luminance_contrast - threshold_contrast",
        }
    }

    /// Physical unit, empty for dimensionless quantities
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::AgeOfObserver => "years",
            Quantity::BackgroundLuminance => "cd/m²",
            Quantity::TargetSize => "µsr",
            Quantity::PupilRadius => "mm",
            Quantity::RetinalIlluminance => "Td",
            Quantity::ReactionTime => "ms",
            _ => "",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error types for RVP model evaluation
#[derive(Error, Debug)]
pub enum CalculationError {
    /// A stage input lies outside the domain its formula is defined on
    #[error("{quantity} = {value} is outside the model domain (requires {requirement})")]
    OutOfDomainInput {
        quantity: Quantity,
        value: f64,
        requirement: &'static str,
    },

    /// A stage would divide by a zero-valued quantity
    #[error("Division by zero: {quantity} is zero")]
    DivisionByZero { quantity: Quantity },

    /// A negative base would be raised to a non-integer power
    #[error("Undefined fractional power: {quantity} = {value} is negative")]
    UndefinedFractionalPower { quantity: Quantity, value: f64 },

    /// Invalid calculator parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Reading or writing a configuration or batch file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration or batch JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalculationError {
    /// Create an out-of-domain error for `quantity`
    pub fn out_of_domain(quantity: Quantity, value: f64, requirement: &'static str) -> Self {
        Self::OutOfDomainInput {
            quantity,
            value,
            requirement,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error comes from the model's mathematical domain
    /// rather than from configuration or I/O
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            CalculationError::OutOfDomainInput { .. }
                | CalculationError::DivisionByZero { .. }
                | CalculationError::UndefinedFractionalPower { .. }
        )
    }

    /// Quantity that caused a domain error, if any
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            CalculationError::OutOfDomainInput { quantity, .. }
            | CalculationError::DivisionByZero { quantity }
            | CalculationError::UndefinedFractionalPower { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            CalculationError::OutOfDomainInput { quantity, .. } => match quantity {
                Quantity::BackgroundLuminance => {
                    "Background luminance must be greater than zero.".to_string()
                }
                Quantity::AgeOfObserver => {
                    "Observer age is outside the range the model supports.".to_string()
                }
                Quantity::TargetSize => "Target size must be greater than zero.".to_string(),
                Quantity::LuminanceContrast => {
                    "Luminance contrast must be greater than zero.".to_string()
                }
                Quantity::RetinalIlluminance => {
                    "The scene is too dark for the model to predict performance.".to_string()
                }
                other => format!("The computed {} is outside the model domain.", other),
            },
            CalculationError::UndefinedFractionalPower { .. } => {
                "The target contrast is below the detection threshold; the target is not visible."
                    .to_string()
            }
            CalculationError::DivisionByZero { quantity } => match quantity {
                Quantity::Performance => {
                    "The target contrast equals the detection threshold; reaction time is unbounded."
                        .to_string()
                }
                other => format!("The computed {} is zero.", other),
            },
            CalculationError::InvalidParameter { parameter, .. } => {
                format!("Please check the value entered for {}.", parameter)
            }
            _ => "Visual performance calculation failed. Please check the inputs.".to_string(),
        }
    }
}

/// Require `value` to be finite and strictly positive
pub(crate) fn ensure_positive(
    quantity: Quantity,
    value: f64,
    requirement: &'static str,
) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalculationError::out_of_domain(quantity, value, requirement))
    }
}

/// Require `value` to be finite
pub(crate) fn ensure_finite(quantity: Quantity, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::out_of_domain(quantity, value, "a finite value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_display_and_units() {
        assert_eq!(Quantity::BackgroundLuminance.to_string(), "background_luminance");
        assert_eq!(Quantity::RetinalIlluminance.unit(), "Td");
        assert_eq!(Quantity::VisibilityLevel.unit(), "");
    }

    #[test]
    fn test_domain_error_classification() {
        let err = CalculationError::out_of_domain(Quantity::TargetSize, -1.0, "target_size > 0");
        assert!(err.is_domain_error());
        assert_eq!(err.quantity(), Some(Quantity::TargetSize));

        let err = CalculationError::invalid_parameter("observer.min_age", 90.0);
        assert!(!err.is_domain_error());
        assert_eq!(err.quantity(), None);
    }

    #[test]
    fn test_error_messages_name_quantity() {
        let err = CalculationError::DivisionByZero {
            quantity: Quantity::Performance,
        };
        assert_eq!(err.to_string(), "Division by zero: performance is zero");

        let err = CalculationError::UndefinedFractionalPower {
            quantity: Quantity::ContrastExcess,
            value: -0.25,
        };
        assert!(err.to_string().contains("luminance_contrast - threshold_contrast"));
        assert!(err.user_message().contains("not visible"));
    }

    #[test]
    fn test_ensure_positive_rejects_nan_and_infinity() {
        assert_eq!(ensure_positive(Quantity::TargetSize, 2.0, "target_size > 0").unwrap(), 2.0);
        assert!(ensure_positive(Quantity::TargetSize, 0.0, "target_size > 0").is_err());
        assert!(ensure_positive(Quantity::TargetSize, f64::NAN, "target_size > 0").is_err());
        assert!(ensure_positive(Quantity::TargetSize, f64::INFINITY, "target_size > 0").is_err());
        assert!(ensure_finite(Quantity::MaximumResponse, -0.5).is_ok());
    }
}
