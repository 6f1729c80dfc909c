use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use crate::{
    models::company::{CompanyCreate, CompanyQueryParams, CompanyUpdate},
    routemount::route::AppState,
    utils::errorhandler::AppError,
};

pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CompanyCreate>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let company = state.stores.create_company(payload).map_err(|e| {
        warn!("Failed to create company: {}", e);
        AppError::from(e)
    })?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": company
        })),
    ))
}

pub async fn get_company_by_id(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let company = state.stores.get_company(company_id)?;
    Ok(Json(json!({
        "success": true,
        "data": company
    })))
}

pub async fn get_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanyQueryParams>,
) -> Result<Json<Value>, AppError> {
    let companies = state.stores.list_companies(params);
    Ok(Json(json!({
        "success": true,
        "data": companies
    })))
}

pub async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(update): Json<CompanyUpdate>,
) -> Result<Json<Value>, AppError> {
    let company = state.stores.update_company(company_id, update).map_err(|e| {
        warn!("Failed to update company {}: {}", company_id, e);
        AppError::from(e)
    })?;
    Ok(Json(json!({
        "success": true,
        "data": company
    })))
}

pub async fn replace_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(payload): Json<CompanyCreate>,
) -> Result<Json<Value>, AppError> {
    let company = state
        .stores
        .replace_company(company_id, payload)
        .map_err(|e| {
            warn!("Failed to replace company {}: {}", company_id, e);
            AppError::from(e)
        })?;
    Ok(Json(json!({
        "success": true,
        "data": company
    })))
}

pub async fn delete_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.stores.delete_company(company_id).map_err(|e| {
        warn!("Failed to delete company {}: {}", company_id, e);
        AppError::from(e)
    })?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::store::Stores;

    use super::*;

    fn test_state() -> AppState {
        AppState {
            stores: Arc::new(Stores::new()),
            host_ip: "127.0.0.1".into(),
        }
    }

    fn acme() -> CompanyCreate {
        CompanyCreate {
            name: "Acme Corp".into(),
            website: Some("https://acme.com".into()),
            industry: None,
            founded: None,
            size: None,
        }
    }

    #[tokio::test]
    async fn create_returns_201_with_envelope() {
        let state = test_state();
        let (status, Json(body)) = create_company(State(state), Json(acme())).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Acme Corp");
        assert!(body["data"]["id"].is_string());
    }

    #[tokio::test]
    async fn get_unknown_company_maps_to_not_found() {
        let state = test_state();
        let err = get_company_by_id(State(state), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn replace_ignores_payload_id_and_server_fields() {
        let state = test_state();
        let created = state.stores.create_company(acme()).unwrap();
        // A wire payload smuggling in a foreign id and server-owned fields;
        // only the declared create fields survive deserialization.
        let payload: CompanyCreate = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "name": "Globex Inc.",
            "created_at": "1999-01-01T00:00:00Z",
            "companies": []
        }))
        .unwrap();
        let Json(body) = replace_company(State(state), Path(created.id), Json(payload))
            .await
            .unwrap();
        let replaced: crate::models::company::CompanyRead =
            serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.name, "Globex Inc.");
        assert_eq!(replaced.created_at, created.created_at);
    }

    #[tokio::test]
    async fn delete_returns_204() {
        let state = test_state();
        let (_, Json(body)) = create_company(State(state.clone()), Json(acme()))
            .await
            .unwrap();
        let id: Uuid = body["data"]["id"].as_str().unwrap().parse().unwrap();
        let status = delete_company(State(state), Path(id)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
