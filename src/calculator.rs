//! Pipeline orchestration
//!
//! Runs the optics and response stages in dependency order and collects
//! every intermediate into an [`RvpResult`]. The configured [`DomainPolicy`]
//! selects between the checked stage functions and the raw formulas.

use tracing::{debug, trace, warn};

use crate::config::{CalculatorConfig, DomainPolicy};
use crate::error::{CalculationError, Result};
use crate::optics;
use crate::response;
use crate::{RvpResult, TaskConditions};

/// Visual performance calculator holding a validated configuration
#[derive(Debug, Clone, Default)]
pub struct VisualPerformanceCalculator {
    config: CalculatorConfig,
}

impl VisualPerformanceCalculator {
    /// Create a calculator with the default configuration (reject policy)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is inconsistent.
    pub fn with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate the full RVP model for one set of task conditions
    ///
    /// Under [`DomainPolicy::Reject`] the first stage whose preconditions
    /// fail aborts the evaluation. Under [`DomainPolicy::Propagate`] this
    /// only fails when observer limits are enforced.
    pub fn calculate(&self, conditions: &TaskConditions) -> Result<RvpResult> {
        self.check_observer_age(conditions.age_of_observer)?;

        let result = match self.config.domain_policy {
            DomainPolicy::Reject => evaluate_checked(conditions)?,
            DomainPolicy::Propagate => {
                let result = evaluate_unchecked(conditions);
                if !result.is_finite() {
                    warn!(?conditions, "non-finite quantities propagated into result");
                }
                result
            }
        };

        debug!(
            age_of_observer = conditions.age_of_observer,
            luminance_contrast = conditions.luminance_contrast,
            target_size = conditions.target_size,
            background_luminance = conditions.background_luminance,
            rvp = result.relative_visual_performance,
            "evaluated relative visual performance"
        );
        Ok(result)
    }

    /// Evaluate many task conditions independently, preserving order
    pub fn calculate_batch(&self, batch: &[TaskConditions]) -> Vec<Result<RvpResult>> {
        debug!(count = batch.len(), "evaluating batch");
        batch.iter().map(|conditions| self.calculate(conditions)).collect()
    }

    fn check_observer_age(&self, age_of_observer: f64) -> Result<()> {
        let limits = &self.config.observer;
        if limits.contains(age_of_observer) {
            return Ok(());
        }
        if limits.enforce {
            return Err(CalculationError::invalid_parameter(
                "age_of_observer",
                age_of_observer,
            ));
        }
        warn!(
            age_of_observer,
            min_age = limits.min_age,
            max_age = limits.max_age,
            "observer age outside the model's realistic range"
        );
        Ok(())
    }
}

fn evaluate_checked(conditions: &TaskConditions) -> Result<RvpResult> {
    let TaskConditions {
        age_of_observer,
        luminance_contrast,
        target_size,
        background_luminance,
    } = *conditions;

    let pupil_radius = optics::pupil_radius(background_luminance)?;
    let retinal_illuminance =
        optics::retinal_illuminance(age_of_observer, pupil_radius, background_luminance)?;
    let threshold_contrast =
        response::threshold_contrast(age_of_observer, target_size, retinal_illuminance)?;
    let half_saturation_constant =
        response::half_saturation_constant(target_size, retinal_illuminance)?;
    let maximum_response = response::maximum_response(retinal_illuminance)?;
    trace!(
        pupil_radius,
        retinal_illuminance,
        threshold_contrast,
        half_saturation_constant,
        maximum_response,
        "response parameters"
    );

    let performance = response::performance(
        luminance_contrast,
        maximum_response,
        threshold_contrast,
        half_saturation_constant,
    )?;
    let reaction_time = response::reaction_time(performance)?;
    let visibility_level = response::visibility_level(luminance_contrast, threshold_contrast)?;
    let relative_visual_performance = response::relative_visual_performance(reaction_time)?;

    Ok(RvpResult {
        pupil_radius,
        retinal_illuminance,
        target_luminance_contrast: luminance_contrast,
        target_solid_angular_size: optics::target_solid_angular_size(target_size),
        threshold_contrast,
        half_saturation_constant,
        maximum_response,
        performance,
        reaction_time,
        visibility_level,
        relative_visual_performance,
    })
}

fn evaluate_unchecked(conditions: &TaskConditions) -> RvpResult {
    let TaskConditions {
        age_of_observer,
        luminance_contrast,
        target_size,
        background_luminance,
    } = *conditions;

    let pupil_radius = optics::pupil_radius_unchecked(background_luminance);
    let retinal_illuminance =
        optics::retinal_illuminance_unchecked(age_of_observer, pupil_radius, background_luminance);
    let threshold_contrast =
        response::threshold_contrast_unchecked(age_of_observer, target_size, retinal_illuminance);
    let half_saturation_constant =
        response::half_saturation_constant_unchecked(target_size, retinal_illuminance);
    let maximum_response = response::maximum_response_unchecked(retinal_illuminance);
    let performance = response::performance_unchecked(
        luminance_contrast,
        maximum_response,
        threshold_contrast,
        half_saturation_constant,
    );
    let reaction_time = response::reaction_time_unchecked(performance);

    RvpResult {
        pupil_radius,
        retinal_illuminance,
        target_luminance_contrast: luminance_contrast,
        target_solid_angular_size: optics::target_solid_angular_size(target_size),
        threshold_contrast,
        half_saturation_constant,
        maximum_response,
        performance,
        reaction_time,
        visibility_level: response::visibility_level_unchecked(
            luminance_contrast,
            threshold_contrast,
        ),
        relative_visual_performance: response::relative_visual_performance_unchecked(
            reaction_time,
        ),
    }
}
