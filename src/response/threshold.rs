//! Contrast-detection threshold and visibility level
//!
//! The threshold is a Blackwell-style response surface, quadratic in
//! log(tanh(size)) and log(log(illuminance)), scaled by an age correction
//! that is separate from the transmittance loss in the retina stage.

use std::f64::consts::PI;

use crate::constants::{threshold, REFERENCE_AGE};
use crate::error::{ensure_finite, ensure_positive, CalculationError, Quantity, Result};
use crate::math::log;
use crate::optics::target_solid_angular_size;

/// Threshold elevation relative to a 20-year-old observer
pub fn age_threshold_factor(age_of_observer: f64) -> f64 {
    1.0 + threshold::AGE_SLOPE * (age_of_observer - REFERENCE_AGE)
}

/// Luminance contrast at which the target is just detectable
///
/// # Arguments
///
/// * `age_of_observer` - Observer age in years
/// * `target_size` - Target solid angle in µsr
/// * `retinal_illuminance` - Age-corrected retinal illuminance in Td
///
/// # Errors
///
/// Returns `OutOfDomainInput` if age or target size is non-positive, or if
/// `retinal_illuminance <= π/10`, where the inner log(10·E/π) is no longer
/// positive.
pub fn threshold_contrast(
    age_of_observer: f64,
    target_size: f64,
    retinal_illuminance: f64,
) -> Result<f64> {
    ensure_positive(Quantity::AgeOfObserver, age_of_observer, "age_of_observer > 0")?;
    ensure_positive(Quantity::TargetSize, target_size, "target_size > 0")?;
    if !(retinal_illuminance.is_finite() && retinal_illuminance > threshold::MIN_RETINAL_ILLUMINANCE)
    {
        return Err(CalculationError::out_of_domain(
            Quantity::RetinalIlluminance,
            retinal_illuminance,
            "retinal_illuminance > π/10",
        ));
    }

    let contrast = threshold_contrast_unchecked(age_of_observer, target_size, retinal_illuminance);
    ensure_positive(Quantity::ThresholdContrast, contrast, "threshold_contrast > 0")
}

/// Threshold contrast without domain checks
pub fn threshold_contrast_unchecked(
    age_of_observer: f64,
    target_size: f64,
    retinal_illuminance: f64,
) -> f64 {
    let solid_angle = target_solid_angular_size(target_size);
    let p1 = log((threshold::SIZE_SCALE * solid_angle).tanh(), None);
    let p2 = log(log(10.0 * retinal_illuminance / PI, None), None);
    let p3 = age_threshold_factor(age_of_observer);

    p3 * 10f64.powf(
        threshold::INTERCEPT
            + threshold::SIZE * p1
            + threshold::ILLUMINANCE * p2
            + threshold::SIZE_SQ * p1 * p1
            + threshold::ILLUMINANCE_SQ * p2 * p2
            + threshold::CROSS * p1 * p2,
    )
}

/// Visibility level: target contrast as a multiple of threshold contrast
///
/// # Errors
///
/// Returns `DivisionByZero` when `threshold_contrast` is zero and
/// `OutOfDomainInput` for non-positive or non-finite contrasts.
pub fn visibility_level(luminance_contrast: f64, threshold_contrast: f64) -> Result<f64> {
    ensure_positive(
        Quantity::LuminanceContrast,
        luminance_contrast,
        "luminance_contrast > 0",
    )?;
    if threshold_contrast == 0.0 {
        return Err(CalculationError::DivisionByZero {
            quantity: Quantity::ThresholdContrast,
        });
    }
    ensure_positive(
        Quantity::ThresholdContrast,
        threshold_contrast,
        "threshold_contrast > 0",
    )?;

    ensure_finite(
        Quantity::VisibilityLevel,
        visibility_level_unchecked(luminance_contrast, threshold_contrast),
    )
}

/// Visibility level without domain checks
pub fn visibility_level_unchecked(luminance_contrast: f64, threshold_contrast: f64) -> f64 {
    luminance_contrast / threshold_contrast
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_threshold() {
        // 40-year-old, 100 µsr target, 100 cd/m² background
        let contrast = threshold_contrast(40.0, 100.0, 620.9109804727368).unwrap();
        assert_relative_eq!(contrast, 0.00048643907801139137, max_relative = 1e-9);
    }

    #[test]
    fn test_threshold_rises_with_age() {
        let young = threshold_contrast(20.0, 100.0, 500.0).unwrap();
        let old = threshold_contrast(60.0, 100.0, 500.0).unwrap();
        assert!(old > young);
        assert_relative_eq!(old / young, age_threshold_factor(60.0), max_relative = 1e-12);
    }

    #[test]
    fn test_threshold_falls_with_illuminance() {
        let dim = threshold_contrast(30.0, 100.0, 5.0).unwrap();
        let bright = threshold_contrast(30.0, 100.0, 5000.0).unwrap();
        assert!(bright < dim);
    }

    #[test]
    fn test_rejects_dark_retina() {
        let floor = threshold::MIN_RETINAL_ILLUMINANCE;
        for illuminance in [floor, 0.1, 0.0, -3.0] {
            let err = threshold_contrast(30.0, 100.0, illuminance).unwrap_err();
            assert_eq!(err.quantity(), Some(Quantity::RetinalIlluminance));
        }
        assert!(threshold_contrast(30.0, 100.0, floor * 1.01).is_ok());
    }

    #[test]
    fn test_unchecked_propagates_nan() {
        assert!(threshold_contrast_unchecked(30.0, 100.0, 0.1).is_nan());
    }

    #[test]
    fn test_visibility_level() {
        assert_relative_eq!(visibility_level(0.5, 0.01).unwrap(), 50.0, max_relative = 1e-12);
    }

    #[test]
    fn test_visibility_level_zero_threshold() {
        match visibility_level(0.5, 0.0) {
            Err(CalculationError::DivisionByZero { quantity }) => {
                assert_eq!(quantity, Quantity::ThresholdContrast)
            }
            other => panic!("Expected DivisionByZero, got: {:?}", other),
        }
        assert!(visibility_level_unchecked(0.5, 0.0).is_infinite());
    }
}
