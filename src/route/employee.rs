use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use crate::{
    models::employee::{EmployeeCreate, EmployeeQueryParams, EmployeeUpdate},
    routemount::route::AppState,
    utils::errorhandler::AppError,
};

pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let employee = state.stores.create_employee(payload).map_err(|e| {
        warn!("Failed to create employee: {}", e);
        AppError::from(e)
    })?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": employee
        })),
    ))
}

pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let employee = state.stores.get_employee(employee_id)?;
    Ok(Json(json!({
        "success": true,
        "data": employee
    })))
}

pub async fn get_employees(
    State(state): State<AppState>,
    Query(params): Query<EmployeeQueryParams>,
) -> Result<Json<Value>, AppError> {
    let employees = state.stores.list_employees(params);
    Ok(Json(json!({
        "success": true,
        "data": employees
    })))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(update): Json<EmployeeUpdate>,
) -> Result<Json<Value>, AppError> {
    let employee = state
        .stores
        .update_employee(employee_id, update)
        .map_err(|e| {
            warn!("Failed to update employee {}: {}", employee_id, e);
            AppError::from(e)
        })?;
    Ok(Json(json!({
        "success": true,
        "data": employee
    })))
}

pub async fn replace_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(payload): Json<EmployeeCreate>,
) -> Result<Json<Value>, AppError> {
    let employee = state
        .stores
        .replace_employee(employee_id, payload)
        .map_err(|e| {
            warn!("Failed to replace employee {}: {}", employee_id, e);
            AppError::from(e)
        })?;
    Ok(Json(json!({
        "success": true,
        "data": employee
    })))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.stores.delete_employee(employee_id).map_err(|e| {
        warn!("Failed to delete employee {}: {}", employee_id, e);
        AppError::from(e)
    })?;
    Ok(StatusCode::NO_CONTENT)
}
