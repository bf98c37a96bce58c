use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use fce_scoring::{
    calculate_percent_is, calculate_standard_time, score_trial, MtmCalculationParams, MtmTrial,
    MtmTrialScore,
};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct StandardTimeRequest {
    task_id: String,
    #[serde(default)]
    params: MtmCalculationParams,
}

#[derive(Serialize)]
pub struct StandardTimeResponse {
    task_id: String,
    standard_time: f64,
}

#[derive(Deserialize)]
pub struct PercentIsRequest {
    actual_time: f64,
    standard_time: f64,
}

#[derive(Serialize)]
pub struct PercentIsResponse {
    percent_is: f64,
}

pub async fn standard_time(
    payload: Result<Json<StandardTimeRequest>, JsonRejection>,
) -> Result<Json<StandardTimeResponse>, ApiError> {
    let Json(req) = payload?;
    let standard_time = calculate_standard_time(&req.task_id, &req.params);
    Ok(Json(StandardTimeResponse {
        task_id: req.task_id,
        standard_time,
    }))
}

pub async fn percent_is(
    payload: Result<Json<PercentIsRequest>, JsonRejection>,
) -> Result<Json<PercentIsResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(PercentIsResponse {
        percent_is: calculate_percent_is(req.actual_time, req.standard_time),
    }))
}

pub async fn trial(
    payload: Result<Json<MtmTrial>, JsonRejection>,
) -> Result<Json<MtmTrialScore>, ApiError> {
    let Json(trial) = payload?;
    let score = score_trial(&trial);
    if score.used_fallback {
        tracing::info!(task_id = %score.task_id, "scored trial against fallback standard time");
    }
    Ok(Json(score))
}
