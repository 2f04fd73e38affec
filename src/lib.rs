//! # Visual Performance
//!
//! A Rust crate implementing the Relative Visual Performance (RVP) model for
//! predicting how quickly and accurately an observer detects a visual target
//! under given lighting.
//!
//! From the observer's age, the target's size and contrast, and the background
//! luminance, the model derives:
//! - Pupil radius and age-corrected retinal illuminance
//! - Contrast-detection threshold and visibility level
//! - Saturating visual response, reaction time and the final RVP score
//!
//! ## Example
//!
//! ```rust
//! use visual_performance::full_calculation;
//!
//! // 40-year-old, 0.5 contrast, 100 µsr target, 100 cd/m² background
//! let result = full_calculation(40.0, 0.5, 100.0, 100.0)?;
//! println!("RVP: {:.3}, reaction time: {:.0} ms", result.relative_visual_performance, result.reaction_time);
//! # Ok::<(), visual_performance::CalculationError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod calculator;
pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod optics;
pub mod response;

pub use calculator::VisualPerformanceCalculator;
pub use config::{CalculatorConfig, DomainPolicy, ObserverLimits};
pub use error::{CalculationError, Quantity, Result};
pub use optics::{pupil_radius, retinal_illuminance, target_solid_angular_size};
pub use response::{
    half_saturation_constant, maximum_response, performance, reaction_time,
    relative_visual_performance, threshold_contrast, visibility_level,
};

/// The four primary inputs of the RVP model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConditions {
    /// Observer age (years)
    pub age_of_observer: f64,
    /// Magnitude of the target's Weber contrast against the background
    pub luminance_contrast: f64,
    /// Target solid angle (µsr)
    pub target_size: f64,
    /// Adapting background luminance (cd/m²)
    pub background_luminance: f64,
}

impl TaskConditions {
    pub fn new(
        age_of_observer: f64,
        luminance_contrast: f64,
        target_size: f64,
        background_luminance: f64,
    ) -> Self {
        Self {
            age_of_observer,
            luminance_contrast,
            target_size,
            background_luminance,
        }
    }
}

/// Every intermediate and final quantity of one RVP evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RvpResult {
    /// Pupil radius (mm)
    pub pupil_radius: f64,
    /// Age-corrected retinal illuminance (Td)
    pub retinal_illuminance: f64,
    /// Target luminance contrast, echoed from the input
    pub target_luminance_contrast: f64,
    /// Target solid angle (sr)
    pub target_solid_angular_size: f64,
    /// Contrast-detection threshold
    pub threshold_contrast: f64,
    /// Half-saturation constant (K)
    pub half_saturation_constant: f64,
    /// Maximum response (Rmax)
    pub maximum_response: f64,
    /// Visual response (R)
    pub performance: f64,
    /// Reaction time (ms)
    pub reaction_time: f64,
    /// Target contrast as a multiple of threshold
    pub visibility_level: f64,
    /// Relative visual performance score
    pub relative_visual_performance: f64,
}

impl RvpResult {
    /// Check that no NaN or infinity reached the result
    pub fn is_finite(&self) -> bool {
        [
            self.pupil_radius,
            self.retinal_illuminance,
            self.target_luminance_contrast,
            self.target_solid_angular_size,
            self.threshold_contrast,
            self.half_saturation_constant,
            self.maximum_response,
            self.performance,
            self.reaction_time,
            self.visibility_level,
            self.relative_visual_performance,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Evaluate the full RVP model with the default (reject) policy
///
/// This is the main entry point for front ends. It runs every stage in
/// dependency order and returns all intermediate quantities.
///
/// # Arguments
///
/// * `age_of_observer` - Observer age in years
/// * `luminance_contrast` - Target Weber contrast magnitude
/// * `target_size` - Target solid angle in µsr
/// * `background_luminance` - Background luminance in cd/m²
///
/// # Errors
///
/// Returns `CalculationError` if:
/// - An input is outside its formula's domain (`OutOfDomainInput`)
/// - The target contrast is below threshold (`UndefinedFractionalPower`)
/// - The target contrast equals threshold exactly (`DivisionByZero`)
pub fn full_calculation(
    age_of_observer: f64,
    luminance_contrast: f64,
    target_size: f64,
    background_luminance: f64,
) -> Result<RvpResult> {
    VisualPerformanceCalculator::new().calculate(&TaskConditions::new(
        age_of_observer,
        luminance_contrast,
        target_size,
        background_luminance,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rvp_result_serialization() {
        let result = full_calculation(40.0, 0.5, 100.0, 100.0).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"relativeVisualPerformance\""));
        assert!(json.contains("\"targetSolidAngularSize\""));

        let deserialized: RvpResult = serde_json::from_str(&json).unwrap();
        assert!((deserialized.reaction_time - result.reaction_time).abs() < 1e-9);
        assert!(
            (deserialized.relative_visual_performance - result.relative_visual_performance).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_task_conditions_from_json() {
        let conditions: TaskConditions = serde_json::from_str(
            r#"{"ageOfObserver": 30, "luminanceContrast": 0.4, "targetSize": 50, "backgroundLuminance": 200}"#,
        )
        .unwrap();
        assert_eq!(conditions, TaskConditions::new(30.0, 0.4, 50.0, 200.0));
    }

    #[test]
    fn test_is_finite() {
        let mut result = full_calculation(40.0, 0.5, 100.0, 100.0).unwrap();
        assert!(result.is_finite());
        result.reaction_time = f64::INFINITY;
        assert!(!result.is_finite());
    }
}
