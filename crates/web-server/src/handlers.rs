use crate::{error::AppError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use core_types::{EmissionType, NewEmissionType};
use std::sync::Arc;

/// # GET /api/v1/emission_types/ids/:id
///
/// Retrieves an emission type record given its unique identifier. A missing
/// record is an empty success (`null` body), not an error; a non-numeric id
/// is rejected before the repository is consulted.
pub async fn retrieve_emission_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<EmissionType>>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::InvalidId(format!("Emission Type id must be numeric, got '{}'", id)))?;

    let record = state
        .repo
        .select_by_id(id)
        .await
        .map_err(|e| AppError::store("Emission Type record retrieval failed", e))?;
    Ok(Json(record))
}

/// # GET /api/v1/emission_types/all
///
/// Retrieves all emission type records, in the order the repository
/// returns them.
pub async fn retrieve_emission_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmissionType>>, AppError> {
    let records = state
        .repo
        .select_all()
        .await
        .map_err(|e| AppError::store("Emission Types records retrieval failed", e))?;
    Ok(Json(records))
}

/// # POST /api/v1/emission_types/all
///
/// Creates every emission type in the posted batch as one statement and
/// responds 201 Created with the new records, each carrying its assigned
/// `id` and `version = 1`. A body that does not parse is rejected before
/// the repository is consulted.
pub async fn create_emission_types(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<NewEmissionType>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<EmissionType>>), AppError> {
    let Json(new_records) = payload.map_err(|e| AppError::InvalidPayload(e.body_text()))?;
    let created = state
        .repo
        .insert_all(&new_records)
        .await
        .map_err(|e| AppError::store("Emission Types records creation failed", e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// # PUT /api/v1/emission_types
///
/// Updates the record matching the posted record's `id` and responds with
/// the number of rows affected (0 when the id matched nothing, 1 otherwise).
/// A body that does not parse is rejected before the repository is consulted.
pub async fn update_emission_type(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmissionType>, JsonRejection>,
) -> Result<Json<u64>, AppError> {
    let Json(record) = payload.map_err(|e| AppError::InvalidPayload(e.body_text()))?;
    let affected = state
        .repo
        .update(&record)
        .await
        .map_err(|e| AppError::store("Emission Type record update failed", e))?;
    Ok(Json(affected))
}
