//! Ocular optics stages
//!
//! Converts the adapting background luminance into the light actually
//! reaching the retina: pupil size, then age-corrected retinal illuminance.

pub mod pupil;
pub mod retina;

pub use pupil::{pupil_radius, pupil_radius_unchecked};
pub use retina::{retinal_illuminance, retinal_illuminance_unchecked};

use crate::constants::MICROSTERADIAN;

/// Convert target size from microsteradians to steradians
pub fn target_solid_angular_size(target_size: f64) -> f64 {
    MICROSTERADIAN * target_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_angle_conversion() {
        assert_eq!(target_solid_angular_size(100.0), 0.000001 * 100.0);
        assert_eq!(target_solid_angular_size(0.0), 0.0);
    }
}
