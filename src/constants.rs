//! Fitted model coefficients and reference values for the RVP model
//!
//! This module contains compile-time constants for every stage of the
//! Relative Visual Performance model (Rea & Ouellette), grouped by stage.

/// Conversion from microsteradians to steradians
pub const MICROSTERADIAN: f64 = 0.000001;

/// Observer age at which both age corrections are neutral (years)
pub const REFERENCE_AGE: f64 = 20.0;

/// Pupil size as a function of adapting luminance
pub mod pupil {
    /// Midpoint pupil radius (mm)
    pub const MID_RADIUS_MM: f64 = 2.3859;

    /// Half the dilation range (mm)
    pub const SWING_MM: f64 = 1.2204;

    /// Slope applied to log10 luminance inside tanh
    pub const LOG_LUMINANCE_SLOPE: f64 = 0.3;

    /// Fully dilated radius, the limit as luminance approaches zero
    pub const MAX_RADIUS_MM: f64 = MID_RADIUS_MM + SWING_MM;

    /// Fully constricted radius, the limit as luminance grows without bound
    pub const MIN_RADIUS_MM: f64 = MID_RADIUS_MM - SWING_MM;
}

/// Troland conversion with ocular transmittance loss
pub mod retina {
    /// Fractional transmittance loss per year beyond the reference age
    pub const TRANSMITTANCE_LOSS_PER_YEAR: f64 = 0.017;
}

/// Contrast-detection threshold response surface
pub mod threshold {
    /// Scale applied to solid angle (sr) inside tanh
    pub const SIZE_SCALE: f64 = 20000.0;

    /// Threshold increase per year beyond the reference age
    pub const AGE_SLOPE: f64 = 0.113 / 45.0;

    /// Retinal illuminance (Td) at or below which the inner log is non-positive
    pub const MIN_RETINAL_ILLUMINANCE: f64 = std::f64::consts::PI / 10.0;

    pub const INTERCEPT: f64 = -1.36415;
    pub const SIZE: f64 = -0.178589;
    pub const ILLUMINANCE: f64 = -0.81285;
    pub const SIZE_SQ: f64 = 0.225998;
    pub const ILLUMINANCE_SQ: f64 = -0.077169;
    pub const CROSS: f64 = 0.169252;
}

/// Half-saturation constant (K) response surface
pub mod half_saturation {
    /// Scale applied to solid angle (sr) inside tanh
    pub const SIZE_SCALE: f64 = 5000.0;

    /// Scale applied to retinal illuminance / π inside tanh
    pub const ILLUMINANCE_SCALE: f64 = 0.04;

    pub const INTERCEPT: f64 = -1.763006;
    pub const SIZE: f64 = -0.175369;
    pub const ILLUMINANCE: f64 = -0.030967;
    pub const SIZE_SQ: f64 = 0.112027;
    pub const ILLUMINANCE_SQ: f64 = 0.170583;
    pub const CROSS: f64 = 0.062194;
}

/// Maximum neural response (Rmax)
pub mod max_response {
    pub const LOG_SLOPE: f64 = 0.000196;
    pub const OFFSET: f64 = 0.0027;
}

/// Naka-Rushton saturation
pub mod response {
    /// Exponent applied to contrast excess and K
    pub const EXPONENT: f64 = 0.97;
}

/// Linear mapping from reaction time to RVP
pub mod rvp {
    pub const INTERCEPT: f64 = 1.419771;

    /// Reaction time (ms) per unit of RVP
    pub const REACTION_TIME_SCALE_MS: f64 = 778.564411;
}

/// Realistic observer population covered by the model's source data
pub mod observer {
    /// Youngest observer age (years)
    pub const MIN_AGE: f64 = 16.0;

    /// Oldest observer age (years)
    pub const MAX_AGE: f64 = 80.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pupil_limits() {
        assert!((pupil::MAX_RADIUS_MM - 3.6063).abs() < 1e-12);
        assert!((pupil::MIN_RADIUS_MM - 1.1655).abs() < 1e-12);
        assert!(pupil::MIN_RADIUS_MM > 0.0);
    }

    #[test]
    fn test_observer_range() {
        assert!(observer::MIN_AGE < REFERENCE_AGE);
        assert!(observer::MIN_AGE < observer::MAX_AGE);
    }

    #[test]
    fn test_threshold_illuminance_floor() {
        // ln(10·E/π) crosses zero exactly at the floor
        let inner = 10.0 * threshold::MIN_RETINAL_ILLUMINANCE / std::f64::consts::PI;
        assert!((inner - 1.0).abs() < 1e-15);
    }
}
