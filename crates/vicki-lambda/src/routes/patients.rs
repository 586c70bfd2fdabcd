use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use vicki_core::models::patient::Patient;
use vicki_core::roster::{RosterQuery, SortField, SortOrder, SortState};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

impl ListParams {
    fn to_query(&self) -> Result<RosterQuery, ApiError> {
        if self.sort.is_none() && self.order.is_some() {
            return Err(ApiError::BadRequest("order requires sort".to_string()));
        }
        let order = self
            .order
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        let sort = self
            .sort
            .as_deref()
            .map(|field| field.parse::<SortField>().map(|f| SortState::new(f, order)))
            .transpose()?;

        Ok(RosterQuery {
            search: self.search.clone(),
            sort,
        })
    }
}

pub async fn list_patients(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let query = params.to_query()?;
    let patients: Vec<Patient> = state.roster.query(&query).into_iter().cloned().collect();
    Ok(Json(patients))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    let patient = state
        .roster
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("patient not found: {id}")))?;
    Ok(Json(patient.clone()))
}
