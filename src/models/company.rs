use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use url::Url;
use uuid::Uuid;

use crate::store::error::StoreError;

/// Payload to create a new company. Any `id` or timestamps supplied by the
/// caller are ignored; those fields are always server-generated.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyCreate {
    pub name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub founded: Option<Date>,
    pub size: Option<String>,
}

impl CompanyCreate {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("company name must not be empty"));
        }
        if let Some(website) = &self.website {
            validate_website(website)?;
        }
        Ok(())
    }
}

/// Partial update; supply only the fields to change. For the clearable
/// optionals an explicit null resets the stored value, while an absent
/// field leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub industry: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub founded: Option<Option<Date>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub size: Option<Option<String>>,
}

impl CompanyUpdate {
    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(StoreError::validation("company name must not be empty"));
            }
        }
        if let Some(Some(website)) = &self.website {
            validate_website(website)?;
        }
        Ok(())
    }
}

/// Server representation of a company returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRead {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub founded: Option<Date>,
    pub size: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyQueryParams {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
}

pub(crate) fn validate_website(raw: &str) -> Result<(), StoreError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|_| StoreError::validation(format!("invalid website URL: {raw}")))
}
