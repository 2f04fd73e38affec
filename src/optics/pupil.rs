//! Pupil radius as a function of adapting luminance
//!
//! Pupillary constriction is modelled as a tanh of log10 luminance,
//! saturating at full dilation in the dark and full constriction in bright light.

use crate::constants::pupil;
use crate::error::{ensure_positive, Quantity, Result};
use crate::math::log;

/// Pupil radius (mm) for a background luminance (cd/m²)
///
/// # Errors
///
/// Returns `OutOfDomainInput` if `background_luminance` is not a finite
/// positive number.
pub fn pupil_radius(background_luminance: f64) -> Result<f64> {
    ensure_positive(
        Quantity::BackgroundLuminance,
        background_luminance,
        "background_luminance > 0",
    )?;
    Ok(pupil_radius_unchecked(background_luminance))
}

/// Pupil radius without domain checks; `background_luminance <= 0` yields NaN
pub fn pupil_radius_unchecked(background_luminance: f64) -> f64 {
    pupil::MID_RADIUS_MM
        - pupil::SWING_MM * (pupil::LOG_LUMINANCE_SLOPE * log(background_luminance, Some(10.0))).tanh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculationError;
    use approx::assert_relative_eq;

    #[test]
    fn test_office_luminance() {
        // 2.3859 - 1.2204 * tanh(0.6)
        let radius = pupil_radius(100.0).unwrap();
        assert_relative_eq!(radius, 1.7304847084355977, max_relative = 1e-12);
    }

    #[test]
    fn test_unit_luminance_is_midpoint() {
        assert_eq!(pupil_radius(1.0).unwrap(), pupil::MID_RADIUS_MM);
    }

    #[test]
    fn test_dark_limit_approached_not_exceeded() {
        let mut previous = 0.0;
        for exponent in (2..=30).step_by(2) {
            let radius = pupil_radius(10f64.powi(-exponent)).unwrap();
            assert!(radius <= pupil::MAX_RADIUS_MM);
            assert!(radius >= previous);
            previous = radius;
        }
        assert!(pupil::MAX_RADIUS_MM - previous < 1e-6);
    }

    #[test]
    fn test_bright_limit() {
        let radius = pupil_radius(1e20).unwrap();
        assert!(radius >= pupil::MIN_RADIUS_MM);
        assert!(radius - pupil::MIN_RADIUS_MM < 1e-3);
    }

    #[test]
    fn test_rejects_non_positive_luminance() {
        for luminance in [0.0, -5.0, f64::NAN] {
            match pupil_radius(luminance) {
                Err(CalculationError::OutOfDomainInput { quantity, .. }) => {
                    assert_eq!(quantity, Quantity::BackgroundLuminance)
                }
                other => panic!("Expected OutOfDomainInput, got: {:?}", other),
            }
        }
    }

    #[test]
    fn test_unchecked_propagates() {
        assert!(pupil_radius_unchecked(-1.0).is_nan());
        // log10(0) = -inf, tanh(-inf) = -1
        assert_eq!(pupil_radius_unchecked(0.0), pupil::MAX_RADIUS_MM);
    }
}
