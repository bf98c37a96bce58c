use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

/// Which trial parameters adjust a task's standard time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MtmFactors {
    pub weight: bool,
    pub distance: bool,
    /// Reference repetition count the base time was measured over.
    pub reps: Option<f64>,
    pub difficulty: bool,
}

/// Predetermined time standard for one occupational task.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MtmStandard {
    pub task_id: String,
    pub task_name: String,
    /// Seconds under reference conditions.
    pub base_standard_time: f64,
    pub unit: String,
    pub factors: MtmFactors,
    pub description: String,
}

static STANDARDS: LazyLock<BTreeMap<&'static str, MtmStandard>> = LazyLock::new(|| {
    let load = MtmFactors {
        weight: true,
        distance: false,
        reps: None,
        difficulty: true,
    };
    let load_over_distance = MtmFactors {
        distance: true,
        ..load
    };
    let travel = MtmFactors {
        weight: false,
        distance: true,
        reps: None,
        difficulty: true,
    };
    let repeated = |reps: f64| MtmFactors {
        weight: false,
        distance: false,
        reps: Some(reps),
        difficulty: true,
    };

    [
        standard(
            "lifting",
            "Lifting",
            10.0,
            "seconds per lift",
            load,
            "Floor-to-waist lift of a loaded crate",
        ),
        standard(
            "carrying",
            "Carrying",
            15.0,
            "seconds per carry",
            load_over_distance,
            "Two-handed carry of a loaded crate over a measured course",
        ),
        standard(
            "pushing",
            "Pushing",
            12.0,
            "seconds per push",
            load_over_distance,
            "Pushing a weighted sled over a measured course",
        ),
        standard(
            "pulling",
            "Pulling",
            12.0,
            "seconds per pull",
            load_over_distance,
            "Pulling a weighted sled over a measured course",
        ),
        standard(
            "walking",
            "Walking",
            20.0,
            "seconds per course",
            travel,
            "Level-surface walk at a self-selected pace",
        ),
        standard(
            "balance",
            "Balance",
            30.0,
            "seconds per course",
            travel,
            "Heel-to-toe walk along a narrow beam",
        ),
        standard(
            "climbing",
            "Climbing",
            25.0,
            "seconds per course",
            travel,
            "Stair or ladder ascent and descent",
        ),
        standard(
            "reaching",
            "Reaching",
            8.0,
            "seconds per set",
            repeated(10.0),
            "Overhead and forward reach to shoulder-height targets",
        ),
        standard(
            "handling",
            "Handling",
            10.0,
            "seconds per set",
            repeated(10.0),
            "Gross grasp and placement of blocks",
        ),
        standard(
            "fingering",
            "Fingering",
            12.0,
            "seconds per set",
            repeated(10.0),
            "Fine manipulation of pegs, nuts and bolts",
        ),
        standard(
            "stooping",
            "Stooping",
            15.0,
            "seconds per set",
            repeated(5.0),
            "Bend at the waist to touch a floor-level target",
        ),
        standard(
            "kneeling",
            "Kneeling",
            18.0,
            "seconds per set",
            repeated(5.0),
            "Lower to one or both knees and return to standing",
        ),
        standard(
            "crouching",
            "Crouching",
            16.0,
            "seconds per set",
            repeated(5.0),
            "Full squat and return to standing",
        ),
    ]
    .into_iter()
    .collect()
});

fn standard(
    task_id: &'static str,
    task_name: &str,
    base_standard_time: f64,
    unit: &str,
    factors: MtmFactors,
    description: &str,
) -> (&'static str, MtmStandard) {
    (
        task_id,
        MtmStandard {
            task_id: task_id.to_string(),
            task_name: task_name.to_string(),
            base_standard_time,
            unit: unit.to_string(),
            factors,
            description: description.to_string(),
        },
    )
}

/// Look up a task standard by ID.
pub fn get_mtm_standard(task_id: &str) -> Option<&'static MtmStandard> {
    STANDARDS.get(task_id)
}

/// Return every task standard, ordered by task ID.
pub fn get_mtm_standards() -> Vec<&'static MtmStandard> {
    STANDARDS.values().collect()
}

/// Like [`get_mtm_standard`], for callers that treat an unknown task as an error.
pub fn require_mtm_standard(task_id: &str) -> Result<&'static MtmStandard, ScoringError> {
    get_mtm_standard(task_id).ok_or_else(|| ScoringError::UnknownTask(task_id.to_string()))
}
