//! Psychophysical response stages
//!
//! This module turns retinal illuminance, target size and contrast into
//! detection threshold, response saturation, reaction time and the final
//! relative visual performance score.

pub mod performance;
pub mod saturation;
pub mod threshold;

pub use performance::{
    performance, performance_unchecked, reaction_time, reaction_time_unchecked,
    relative_visual_performance, relative_visual_performance_unchecked,
};
pub use saturation::{
    half_saturation_constant, half_saturation_constant_unchecked, maximum_response,
    maximum_response_unchecked,
};
pub use threshold::{
    threshold_contrast, threshold_contrast_unchecked, visibility_level,
    visibility_level_unchecked,
};
