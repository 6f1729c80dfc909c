use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::models::company::CompanyRead;
use crate::store::error::StoreError;

// Business identifier: 2-3 uppercase letters followed by 3-5 digits (e.g. AD123).
static EMPLOYEE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,3}[0-9]{3,5}$").expect("employee id pattern"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// Payload to create a new employee.
///
/// Callers link companies through `company_ids`; the embedded `companies`
/// snapshots on the read side are always derived from the company store at
/// write time and can never be supplied directly.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreate {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<Date>,
    pub department: String,
    pub team: String,
    pub yearsofexp: i64,
    pub company_ids: Vec<Uuid>,
}

impl EmployeeCreate {
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_employee_id(&self.employee_id)?;
        validate_email(&self.email)?;
        Ok(())
    }
}

/// Partial update; supply only the fields to change. A present `company_ids`
/// replaces the linked-company list wholesale after re-resolution. An
/// explicit null `birth_date` clears the stored date; an absent field
/// leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub birth_date: Option<Option<Date>>,
    pub department: Option<String>,
    pub team: Option<String>,
    pub yearsofexp: Option<i64>,
    pub company_ids: Option<Vec<Uuid>>,
}

impl EmployeeUpdate {
    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(employee_id) = &self.employee_id {
            validate_employee_id(employee_id)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// Server representation of an employee returned to clients. The `companies`
/// entries are snapshots taken at link time; later edits to the source
/// company are not reflected here, only its deletion is propagated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRead {
    pub id: Uuid,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<Date>,
    pub department: String,
    pub team: String,
    pub yearsofexp: i64,
    pub companies: Vec<CompanyRead>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeQueryParams {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub team: Option<String>,
    pub min_years_of_exp: Option<i64>,
    pub company_name: Option<String>,
}

fn validate_employee_id(raw: &str) -> Result<(), StoreError> {
    if EMPLOYEE_ID_RE.is_match(raw) {
        Ok(())
    } else {
        Err(StoreError::validation(format!(
            "invalid employee_id {raw:?}: expected 2-3 uppercase letters followed by 3-5 digits"
        )))
    }
}

fn validate_email(raw: &str) -> Result<(), StoreError> {
    if EMAIL_RE.is_match(raw) {
        Ok(())
    } else {
        Err(StoreError::validation(format!("invalid email address: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_pattern() {
        assert!(validate_employee_id("AD123").is_ok());
        assert!(validate_employee_id("JDS45678").is_ok());
        assert!(validate_employee_id("A123").is_err());
        assert!(validate_employee_id("ad123").is_err());
        assert!(validate_employee_id("ABCD123").is_err());
        assert!(validate_employee_id("AD123456").is_err());
    }

    #[test]
    fn update_distinguishes_explicit_null_from_absent_field() {
        let absent: EmployeeUpdate = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.birth_date, None);

        let cleared: EmployeeUpdate =
            serde_json::from_value(serde_json::json!({"birth_date": null})).unwrap();
        assert_eq!(cleared.birth_date, Some(None));
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("two@at@signs.com").is_err());
    }
}
