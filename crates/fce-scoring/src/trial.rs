//! Scoring of a single timed MTM trial.
//!
//! Combines the standard-time adjustment with the %IS comparison, deriving
//! %IS only once both the observed time and the standard time are positive.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculate::{calculate_percent_is, calculate_standard_time, MtmCalculationParams};
use crate::standards::get_mtm_standard;

/// One observed performance of an MTM task.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MtmTrial {
    pub task_id: String,
    #[serde(default)]
    pub params: MtmCalculationParams,
    /// Observed seconds, if the trial has been timed yet.
    #[serde(default)]
    pub actual_time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MtmTrialScore {
    pub task_id: String,
    /// `None` when the task is not in the standards table.
    pub task_name: Option<String>,
    pub standard_time: f64,
    pub actual_time: Option<f64>,
    pub percent_is: Option<f64>,
    /// True when `standard_time` is the fallback for an unknown task.
    pub used_fallback: bool,
}

pub fn score_trial(trial: &MtmTrial) -> MtmTrialScore {
    let standard = get_mtm_standard(&trial.task_id);
    let standard_time = calculate_standard_time(&trial.task_id, &trial.params);

    let percent_is = trial
        .actual_time
        .filter(|actual| *actual > 0.0 && standard_time > 0.0)
        .map(|actual| calculate_percent_is(actual, standard_time));

    MtmTrialScore {
        task_id: trial.task_id.clone(),
        task_name: standard.map(|s| s.task_name.clone()),
        standard_time,
        actual_time: trial.actual_time,
        percent_is,
        used_fallback: standard.is_none(),
    }
}

impl MtmTrialScore {
    /// Format the score as a Markdown block for report text.
    pub fn to_structured_input(&self) -> String {
        let name = self.task_name.as_deref().unwrap_or(&self.task_id);
        let mut output = format!("### {name}\n");
        output.push_str(&format!("- Standard time: {:.1} s\n", self.standard_time));
        if let Some(actual) = self.actual_time {
            output.push_str(&format!("- Actual time: {actual:.1} s\n"));
        }
        if let Some(percent) = self.percent_is {
            output.push_str(&format!("- %IS: {percent:.1}%\n"));
        }
        output
    }
}
