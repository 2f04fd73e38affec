//! Saturation parameters of the visual response: K and Rmax
//!
//! Neither stage is age-corrected; only retinal illuminance and the
//! detection threshold carry an age term.

use std::f64::consts::PI;

use crate::constants::{half_saturation, max_response};
use crate::error::{ensure_finite, ensure_positive, Quantity, Result};
use crate::math::log;
use crate::optics::target_solid_angular_size;

/// Half-saturation constant (K) of the response function
///
/// # Arguments
///
/// * `target_size` - Target solid angle in µsr
/// * `retinal_illuminance` - Age-corrected retinal illuminance in Td
pub fn half_saturation_constant(target_size: f64, retinal_illuminance: f64) -> Result<f64> {
    ensure_positive(Quantity::TargetSize, target_size, "target_size > 0")?;
    ensure_positive(
        Quantity::RetinalIlluminance,
        retinal_illuminance,
        "retinal_illuminance > 0",
    )?;

    ensure_positive(
        Quantity::HalfSaturationConstant,
        half_saturation_constant_unchecked(target_size, retinal_illuminance),
        "half_saturation_constant > 0",
    )
}

/// Half-saturation constant without domain checks
pub fn half_saturation_constant_unchecked(target_size: f64, retinal_illuminance: f64) -> f64 {
    let solid_angle = target_solid_angular_size(target_size);
    let p1 = log((half_saturation::SIZE_SCALE * solid_angle).tanh(), None);
    let p2 = log(
        (half_saturation::ILLUMINANCE_SCALE * retinal_illuminance / PI).tanh(),
        None,
    );

    10f64.powf(
        half_saturation::INTERCEPT
            + half_saturation::SIZE * p1
            + half_saturation::ILLUMINANCE * p2
            + half_saturation::SIZE_SQ * p1 * p1
            + half_saturation::ILLUMINANCE_SQ * p2 * p2
            + half_saturation::CROSS * p1 * p2,
    )
}

/// Maximum response (Rmax), linear in ln(retinal illuminance)
pub fn maximum_response(retinal_illuminance: f64) -> Result<f64> {
    ensure_positive(
        Quantity::RetinalIlluminance,
        retinal_illuminance,
        "retinal_illuminance > 0",
    )?;
    ensure_finite(
        Quantity::MaximumResponse,
        maximum_response_unchecked(retinal_illuminance),
    )
}

/// Maximum response without domain checks
pub fn maximum_response_unchecked(retinal_illuminance: f64) -> f64 {
    max_response::LOG_SLOPE * log(retinal_illuminance, None) + max_response::OFFSET
}
