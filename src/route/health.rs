use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use time::OffsetDateTime;

use crate::{
    models::health::{Health, HealthQueryParams},
    routemount::route::AppState,
};

fn make_health(host_ip: &str, echo: Option<String>, path_echo: Option<String>) -> Health {
    Health {
        status: 200,
        status_message: "OK".to_string(),
        timestamp: OffsetDateTime::now_utc(),
        ip_address: host_ip.to_string(),
        echo,
        path_echo,
    }
}

pub async fn get_health(
    State(state): State<AppState>,
    Query(params): Query<HealthQueryParams>,
) -> Json<Health> {
    Json(make_health(&state.host_ip, params.echo, None))
}

pub async fn get_health_with_path(
    State(state): State<AppState>,
    Path(path_echo): Path<String>,
    Query(params): Query<HealthQueryParams>,
) -> Json<Health> {
    Json(make_health(&state.host_ip, params.echo, Some(path_echo)))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Employee/Company API."
    }))
}
