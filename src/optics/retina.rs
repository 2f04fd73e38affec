//! Age-corrected retinal illuminance
//!
//! Standard troland conversion (luminance × π r²) scaled by a linear loss of
//! ocular transmittance with age, neutral at the reference age of 20.

use std::f64::consts::PI;

use crate::constants::{retina, REFERENCE_AGE};
use crate::error::{ensure_positive, CalculationError, Quantity, Result};

/// Ocular transmittance relative to a 20-year-old observer
pub fn age_transmittance_factor(age_of_observer: f64) -> f64 {
    1.0 - retina::TRANSMITTANCE_LOSS_PER_YEAR * (age_of_observer - REFERENCE_AGE)
}

/// Retinal illuminance (Td) for an observer of `age_of_observer` years
///
/// # Arguments
///
/// * `age_of_observer` - Observer age in years
/// * `pupil_radius` - Pupil radius in mm
/// * `background_luminance` - Adapting luminance in cd/m²
///
/// # Errors
///
/// Returns `OutOfDomainInput` if any argument is non-positive or non-finite,
/// or if the observer is old enough that the transmittance factor is no
/// longer positive (age ≥ 20 + 1/0.017 ≈ 78.8 years).
pub fn retinal_illuminance(
    age_of_observer: f64,
    pupil_radius: f64,
    background_luminance: f64,
) -> Result<f64> {
    ensure_positive(Quantity::AgeOfObserver, age_of_observer, "age_of_observer > 0")?;
    ensure_positive(Quantity::PupilRadius, pupil_radius, "pupil_radius > 0")?;
    ensure_positive(
        Quantity::BackgroundLuminance,
        background_luminance,
        "background_luminance > 0",
    )?;

    if age_transmittance_factor(age_of_observer) <= 0.0 {
        return Err(CalculationError::out_of_domain(
            Quantity::AgeOfObserver,
            age_of_observer,
            "age_of_observer < 20 + 1/0.017 (positive ocular transmittance)",
        ));
    }

    Ok(retinal_illuminance_unchecked(
        age_of_observer,
        pupil_radius,
        background_luminance,
    ))
}

/// Retinal illuminance without domain checks
pub fn retinal_illuminance_unchecked(
    age_of_observer: f64,
    pupil_radius: f64,
    background_luminance: f64,
) -> f64 {
    background_luminance * PI * pupil_radius.powi(2) * age_transmittance_factor(age_of_observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_age_is_plain_troland() {
        let td = retinal_illuminance(20.0, 2.0, 50.0).unwrap();
        assert_relative_eq!(td, 50.0 * PI * 4.0, max_relative = 1e-15);
    }

    #[test]
    fn test_transmittance_falls_with_age() {
        assert_eq!(age_transmittance_factor(20.0), 1.0);
        assert_relative_eq!(age_transmittance_factor(40.0), 0.66, epsilon = 1e-12);
        assert!(age_transmittance_factor(16.0) > 1.0);

        let young = retinal_illuminance(25.0, 2.0, 100.0).unwrap();
        let old = retinal_illuminance(65.0, 2.0, 100.0).unwrap();
        assert!(old < young);
    }

    #[test]
    fn test_rejects_extreme_age() {
        let err = retinal_illuminance(80.0, 2.0, 100.0).unwrap_err();
        assert_eq!(err.quantity(), Some(Quantity::AgeOfObserver));

        let err = retinal_illuminance(0.0, 2.0, 100.0).unwrap_err();
        assert_eq!(err.quantity(), Some(Quantity::AgeOfObserver));
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        let err = retinal_illuminance(30.0, 0.0, 100.0).unwrap_err();
        assert_eq!(err.quantity(), Some(Quantity::PupilRadius));

        let err = retinal_illuminance(30.0, 2.0, -1.0).unwrap_err();
        assert_eq!(err.quantity(), Some(Quantity::BackgroundLuminance));
    }

    #[test]
    fn test_unchecked_allows_negative_transmittance() {
        assert!(retinal_illuminance_unchecked(90.0, 2.0, 100.0) < 0.0);
    }
}
