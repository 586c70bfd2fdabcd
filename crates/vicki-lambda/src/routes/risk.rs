use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use vicki_risk::scoring::CoefficientTable;
use vicki_risk::{RiskForm, RiskInput, RiskResult, coefficient_table, compute_risk};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct RiskResponse {
    result: RiskResult,
    headline: String,
}

impl From<RiskResult> for RiskResponse {
    fn from(result: RiskResult) -> Self {
        Self {
            headline: result.headline(),
            result,
        }
    }
}

pub async fn compute(
    payload: Result<Json<RiskInput>, JsonRejection>,
) -> Result<Json<RiskResponse>, ApiError> {
    let Json(input) = payload?;
    let result = compute_risk(&input)?;
    tracing::debug!(
        percentage = result.percentage,
        category = result.category.label(),
        "risk computed"
    );
    Ok(Json(result.into()))
}

pub async fn compute_form(
    payload: Result<Json<RiskForm>, JsonRejection>,
) -> Result<Json<RiskResponse>, ApiError> {
    let Json(form) = payload?;
    let result = form.compute()?;
    tracing::debug!(
        percentage = result.percentage,
        category = result.category.label(),
        "risk computed from form"
    );
    Ok(Json(result.into()))
}

pub async fn coefficients() -> Json<CoefficientTable> {
    Json(coefficient_table())
}
