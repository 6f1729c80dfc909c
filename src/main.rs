mod models;
mod route;
mod routemount;
mod store;
mod utils;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::routemount::route::{create_router, AppState};
use crate::store::Stores;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_address = std::env::var("SERVER_ADDRESS").unwrap_or("127.0.0.1:8000".to_string());
    let host_ip = server_address
        .rsplit_once(':')
        .map(|(host, _)| host.to_string())
        .unwrap_or_else(|| server_address.clone());

    let state = AppState {
        stores: Arc::new(Stores::new()),
        host_ip,
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_address)
        .await
        .expect("failed to bind server address");
    tracing::info!("server running on {}", server_address);
    axum::serve(listener, app).await.expect("server error");
}
