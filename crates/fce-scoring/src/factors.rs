use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

/// Load band for a lifted, carried, pushed or pulled object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightCategory {
    /// Under 10 lb.
    Light,
    /// 10–30 lb.
    Medium,
    /// 31–50 lb.
    Heavy,
    /// Over 50 lb.
    VeryHeavy,
}

impl WeightCategory {
    /// Classify a load in pounds. Each band's upper bound is inclusive.
    pub fn from_pounds(weight: f64) -> Self {
        if weight < 10.0 {
            Self::Light
        } else if weight <= 30.0 {
            Self::Medium
        } else if weight <= 50.0 {
            Self::Heavy
        } else {
            Self::VeryHeavy
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Light => 0.85,
            Self::Medium => 1.0,
            Self::Heavy => 1.3,
            Self::VeryHeavy => 1.6,
        }
    }
}

/// Travel band for a task performed over a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DistanceCategory {
    /// Under 20 ft.
    Short,
    /// 20–50 ft.
    Medium,
    /// 51–100 ft.
    Long,
    /// Over 100 ft.
    VeryLong,
}

impl DistanceCategory {
    /// Classify a distance in feet. Each band's upper bound is inclusive.
    pub fn from_feet(distance: f64) -> Self {
        if distance < 20.0 {
            Self::Short
        } else if distance <= 50.0 {
            Self::Medium
        } else if distance <= 100.0 {
            Self::Long
        } else {
            Self::VeryLong
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Short => 0.8,
            Self::Medium => 1.0,
            Self::Long => 1.2,
            Self::VeryLong => 1.4,
        }
    }
}

/// Evaluator-rated difficulty of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 0.8,
            Self::Medium => 1.0,
            Self::Hard => 1.3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ScoringError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Shorthand for `WeightCategory::from_pounds`.
pub fn weight_category(weight: f64) -> WeightCategory {
    WeightCategory::from_pounds(weight)
}

/// Shorthand for `DistanceCategory::from_feet`.
pub fn distance_category(distance: f64) -> DistanceCategory {
    DistanceCategory::from_feet(distance)
}
