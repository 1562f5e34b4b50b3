//! Person CRUD handlers.
//!
//! Each handler parses its input, delegates to exactly one repository
//! operation, and serializes the outcome as JSON. Input parsing failures are
//! rejected with 400 before any storage call.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use rolodex_core::person::{CreatePerson, Person, UpdatePerson};

use crate::{handlers::AppError, state::AppState};

/// Query parameters identifying a person row.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: i64,
}

fn invalid_id(err: QueryRejection) -> AppError {
    tracing::warn!(error = %err, "rejected request with invalid person id");
    AppError::BadRequest("Invalid person id".to_string())
}

fn invalid_json(err: JsonRejection) -> AppError {
    tracing::warn!(error = %err, "rejected request with invalid JSON body");
    AppError::BadRequest("Invalid JSON data".to_string())
}

/// List all persons (GET /list-persons).
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let persons = state.person_repo.list().await?;
    Ok(Json(persons))
}

/// Get a single person by id (GET /get-person?id=<int>).
pub async fn get_person(
    State(state): State<AppState>,
    query: Result<Query<IdParams>, QueryRejection>,
) -> Result<Json<Person>, AppError> {
    let Query(IdParams { id }) = query.map_err(invalid_id)?;

    let person = state.person_repo.get(id).await?.ok_or(AppError::NotFound {
        entity_type: "Person",
        id,
    })?;

    Ok(Json(person))
}

/// Create a new person (POST /create-person).
///
/// The body carries name/email/mobile; the id is assigned by the storage
/// engine.
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<CreatePerson>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = body.map_err(invalid_json)?;

    let person = payload.into_person();
    let id = state.person_repo.insert(&person).await?;
    tracing::info!(person_id = id, name = %person.name, "created person");

    Ok(Json(json!({ "message": "Person created successfully" })))
}

/// Update an existing person (POST /update-person?id=<int>).
///
/// The query-string id is the single source of truth for which row is
/// updated; an id inside the body is ignored.
pub async fn update_person(
    State(state): State<AppState>,
    query: Result<Query<IdParams>, QueryRejection>,
    body: Result<Json<UpdatePerson>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(IdParams { id }) = query.map_err(invalid_id)?;
    let Json(payload) = body.map_err(invalid_json)?;

    let person = payload.into_person();
    state.person_repo.update(id, &person).await?;
    tracing::info!(person_id = id, "updated person");

    Ok(Json(json!({ "message": "Person updated successfully" })))
}

/// Delete a person by id (POST /delete-person?id=<int>).
///
/// Deleting an id that does not exist still succeeds.
pub async fn delete_person(
    State(state): State<AppState>,
    query: Result<Query<IdParams>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(IdParams { id }) = query.map_err(invalid_id)?;

    state.person_repo.delete(id).await?;
    tracing::info!(person_id = id, "deleted person");

    Ok(Json(json!({ "message": "Person deleted successfully" })))
}
