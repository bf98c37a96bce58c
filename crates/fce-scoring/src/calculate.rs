use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::factors::{Difficulty, DistanceCategory, WeightCategory};
use crate::standards::get_mtm_standard;

/// Standard time returned for a task ID that is not in the table.
pub const FALLBACK_STANDARD_TIME: f64 = 30.0;

/// Trial conditions entered by the evaluator. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MtmCalculationParams {
    /// Pounds.
    pub weight: Option<f64>,
    /// Feet.
    pub distance: Option<f64>,
    pub reps: Option<f64>,
    pub difficulty: Option<Difficulty>,
}

/// Adjusted standard time, in seconds, for one trial of `task_id`.
///
/// Weight, distance and reps only adjust the time when the task declares
/// the matching factor. Difficulty adjusts it whenever it is supplied.
/// Inputs are not range-checked. An unknown task yields
/// [`FALLBACK_STANDARD_TIME`].
pub fn calculate_standard_time(task_id: &str, params: &MtmCalculationParams) -> f64 {
    let Some(standard) = get_mtm_standard(task_id) else {
        warn!(
            task_id,
            fallback = FALLBACK_STANDARD_TIME,
            "unknown MTM task, using fallback standard time"
        );
        return FALLBACK_STANDARD_TIME;
    };

    let factors = &standard.factors;
    let mut time = standard.base_standard_time;

    if let Some(weight) = params.weight
        && factors.weight
    {
        time *= WeightCategory::from_pounds(weight).multiplier();
    }

    if let Some(distance) = params.distance
        && factors.distance
    {
        time *= DistanceCategory::from_feet(distance).multiplier();
    }

    if let Some(difficulty) = params.difficulty {
        time *= difficulty.multiplier();
    }

    if let Some(reps) = params.reps
        && let Some(reference_reps) = factors.reps
    {
        time *= reps / reference_reps;
    }

    round1(time)
}

/// Percent of industrial standard: how `actual_time` compares to
/// `standard_time`, where 100 means exactly on standard and higher is faster.
///
/// Returns 0 when `actual_time` is zero, negative or NaN.
pub fn calculate_percent_is(actual_time: f64, standard_time: f64) -> f64 {
    if actual_time.is_nan() || actual_time <= 0.0 {
        return 0.0;
    }
    round1(standard_time / actual_time * 100.0)
}

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
