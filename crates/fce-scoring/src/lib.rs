//! fce-scoring
//!
//! Methods-Time Measurement scoring for Functional Capacity Evaluations.
//! Pure computation over a static table of task standards: adjusted
//! standard times and percent of industrial standard (%IS). No I/O.

pub mod calculate;
pub mod error;
pub mod factors;
pub mod standards;
pub mod trial;

pub use calculate::{
    calculate_percent_is, calculate_standard_time, round1, MtmCalculationParams,
    FALLBACK_STANDARD_TIME,
};
pub use factors::{
    distance_category, weight_category, Difficulty, DistanceCategory, WeightCategory,
};
pub use standards::{
    get_mtm_standard, get_mtm_standards, require_mtm_standard, MtmFactors, MtmStandard,
};
pub use trial::{score_trial, MtmTrial, MtmTrialScore};
