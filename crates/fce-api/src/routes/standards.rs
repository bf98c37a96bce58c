use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use fce_scoring::{get_mtm_standards, require_mtm_standard, MtmStandard};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct StandardSummary {
    task_id: String,
    task_name: String,
}

pub async fn list_standards() -> Json<Vec<StandardSummary>> {
    let standards = get_mtm_standards()
        .into_iter()
        .map(|s| StandardSummary {
            task_id: s.task_id.clone(),
            task_name: s.task_name.clone(),
        })
        .collect();
    Json(standards)
}

pub async fn get_standard_detail(
    Path(task_id): Path<String>,
) -> Result<Json<MtmStandard>, ApiError> {
    let standard = require_mtm_standard(&task_id)?;
    Ok(Json(standard.clone()))
}
