//! Response, reaction time and relative visual performance
//!
//! Response follows a Naka-Rushton saturation of the contrast excess above
//! threshold. Reaction time is its reciprocal, and RVP maps reaction time
//! linearly onto a unitless score.

use crate::constants::{response, rvp};
use crate::error::{ensure_finite, ensure_positive, CalculationError, Quantity, Result};

/// Visual response (R) to a target of `luminance_contrast`
///
/// # Arguments
///
/// * `luminance_contrast` - Target Weber contrast magnitude
/// * `maximum_response` - Rmax
/// * `threshold_contrast` - Contrast detection threshold
/// * `half_saturation_constant` - K
///
/// # Errors
///
/// Returns `UndefinedFractionalPower` when the target contrast is below
/// threshold, since the 0.97 power of a negative number has no real value.
pub fn performance(
    luminance_contrast: f64,
    maximum_response: f64,
    threshold_contrast: f64,
    half_saturation_constant: f64,
) -> Result<f64> {
    ensure_positive(
        Quantity::LuminanceContrast,
        luminance_contrast,
        "luminance_contrast > 0",
    )?;
    ensure_finite(Quantity::MaximumResponse, maximum_response)?;
    ensure_positive(
        Quantity::ThresholdContrast,
        threshold_contrast,
        "threshold_contrast > 0",
    )?;
    ensure_positive(
        Quantity::HalfSaturationConstant,
        half_saturation_constant,
        "half_saturation_constant > 0",
    )?;

    let excess = luminance_contrast - threshold_contrast;
    if excess < 0.0 {
        return Err(CalculationError::UndefinedFractionalPower {
            quantity: Quantity::ContrastExcess,
            value: excess,
        });
    }

    Ok(performance_unchecked(
        luminance_contrast,
        maximum_response,
        threshold_contrast,
        half_saturation_constant,
    ))
}

/// Visual response without domain checks; sub-threshold contrast yields NaN
pub fn performance_unchecked(
    luminance_contrast: f64,
    maximum_response: f64,
    threshold_contrast: f64,
    half_saturation_constant: f64,
) -> f64 {
    let excess = (luminance_contrast - threshold_contrast).powf(response::EXPONENT);
    maximum_response * (excess / (excess + half_saturation_constant.powf(response::EXPONENT)))
}

/// Reaction time (ms), the reciprocal of the response
///
/// # Errors
///
/// Returns `DivisionByZero` for zero performance and `OutOfDomainInput` for
/// negative or non-finite performance.
pub fn reaction_time(performance: f64) -> Result<f64> {
    if performance == 0.0 {
        return Err(CalculationError::DivisionByZero {
            quantity: Quantity::Performance,
        });
    }
    ensure_positive(Quantity::Performance, performance, "performance > 0")?;
    ensure_finite(Quantity::ReactionTime, reaction_time_unchecked(performance))
}

/// Reaction time without domain checks
pub fn reaction_time_unchecked(performance: f64) -> f64 {
    1.0 / performance
}

/// Relative visual performance for a reaction time in ms
pub fn relative_visual_performance(reaction_time: f64) -> Result<f64> {
    ensure_positive(Quantity::ReactionTime, reaction_time, "reaction_time > 0")?;
    Ok(relative_visual_performance_unchecked(reaction_time))
}

/// Relative visual performance without domain checks
pub fn relative_visual_performance_unchecked(reaction_time: f64) -> f64 {
    rvp::INTERCEPT - reaction_time / rvp::REACTION_TIME_SCALE_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reaction_time_is_reciprocal() {
        assert_eq!(reaction_time(0.002).unwrap(), 500.0);
        assert_eq!(reaction_time(0.004).unwrap(), 250.0);
    }

    #[test]
    fn test_rvp_at_500_ms() {
        let score = relative_visual_performance(500.0).unwrap();
        assert_relative_eq!(score, 1.419771 - 500.0 / 778.564411, max_relative = 1e-15);
        assert_relative_eq!(score, 0.77756, epsilon = 1e-5);
    }

    #[test]
    fn test_rvp_decreases_with_reaction_time() {
        let fast = relative_visual_performance(300.0).unwrap();
        let slow = relative_visual_performance(600.0).unwrap();
        assert!(fast > slow);
    }

    #[test]
    fn test_performance_saturates_at_rmax() {
        let rmax = 0.004;
        let weak = performance(0.05, rmax, 0.001, 0.03).unwrap();
        let strong = performance(0.95, rmax, 0.001, 0.03).unwrap();
        assert!(weak < strong);
        assert!(strong < rmax);
    }

    #[test]
    fn test_performance_half_response_at_k() {
        // Contrast excess equal to K gives exactly half of Rmax
        let r = performance(0.031, 0.004, 0.001, 0.03).unwrap();
        assert_relative_eq!(r, 0.002, max_relative = 1e-9);
    }

    #[test]
    fn test_sub_threshold_contrast() {
        match performance(0.0005, 0.004, 0.001, 0.03) {
            Err(CalculationError::UndefinedFractionalPower { quantity, value }) => {
                assert_eq!(quantity, Quantity::ContrastExcess);
                assert!(value < 0.0);
            }
            other => panic!("Expected UndefinedFractionalPower, got: {:?}", other),
        }
        assert!(performance_unchecked(0.0005, 0.004, 0.001, 0.03).is_nan());
    }

    #[test]
    fn test_at_threshold_gives_zero_performance() {
        let r = performance(0.001, 0.004, 0.001, 0.03).unwrap();
        assert_eq!(r, 0.0);

        match reaction_time(r) {
            Err(CalculationError::DivisionByZero { quantity }) => {
                assert_eq!(quantity, Quantity::Performance)
            }
            other => panic!("Expected DivisionByZero, got: {:?}", other),
        }
        assert_eq!(reaction_time_unchecked(r), f64::INFINITY);
    }

    #[test]
    fn test_rejects_negative_performance() {
        let err = reaction_time(-0.001).unwrap_err();
        assert!(matches!(err, CalculationError::OutOfDomainInput { .. }));
    }
}
