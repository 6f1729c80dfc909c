use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Liveness/echo diagnostic payload. Pure function of the wall clock and
/// the configured bind address; never touches the stores.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: u16,
    pub status_message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub ip_address: String,
    pub echo: Option<String>,
    pub path_echo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthQueryParams {
    pub echo: Option<String>,
}
