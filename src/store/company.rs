use uuid::Uuid;

use crate::models::company::{CompanyCreate, CompanyQueryParams, CompanyRead, CompanyUpdate};

use super::error::StoreError;
use super::filter::Conjunction;
use super::{fresh_id, now, Stores};

impl Stores {
    pub fn create_company(&self, payload: CompanyCreate) -> Result<CompanyRead, StoreError> {
        payload.validate()?;
        let mut companies = self.companies.write();
        let id = fresh_id();
        if companies.contains_key(&id) {
            return Err(StoreError::conflict("Company with this ID already exists"));
        }
        let ts = now();
        let company = CompanyRead {
            id,
            name: payload.name,
            website: payload.website,
            industry: payload.industry,
            founded: payload.founded,
            size: payload.size,
            created_at: ts,
            updated_at: ts,
        };
        companies.insert(id, company.clone());
        Ok(company)
    }

    pub fn get_company(&self, id: Uuid) -> Result<CompanyRead, StoreError> {
        self.companies
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Company not found"))
    }

    pub fn list_companies(&self, params: CompanyQueryParams) -> Vec<CompanyRead> {
        let conj = Conjunction::new()
            .eq(params.name, |c: &CompanyRead| &c.name)
            .when(
                params
                    .industry
                    .map(|v| move |c: &CompanyRead| c.industry.as_deref() == Some(v.as_str())),
            )
            .when(
                params
                    .size
                    .map(|v| move |c: &CompanyRead| c.size.as_deref() == Some(v.as_str())),
            );
        conj.filter(self.companies.read().values())
    }

    pub fn update_company(
        &self,
        id: Uuid,
        update: CompanyUpdate,
    ) -> Result<CompanyRead, StoreError> {
        update.validate()?;
        let mut companies = self.companies.write();
        let stored = companies
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Company not found"))?;
        if let Some(name) = update.name {
            stored.name = name;
        }
        if let Some(website) = update.website {
            stored.website = website;
        }
        if let Some(industry) = update.industry {
            stored.industry = industry;
        }
        if let Some(founded) = update.founded {
            stored.founded = founded;
        }
        if let Some(size) = update.size {
            stored.size = size;
        }
        stored.updated_at = now();
        Ok(stored.clone())
    }

    pub fn replace_company(
        &self,
        id: Uuid,
        payload: CompanyCreate,
    ) -> Result<CompanyRead, StoreError> {
        payload.validate()?;
        let mut companies = self.companies.write();
        let stored = companies
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Company not found"))?;
        // The target id and the original creation timestamp survive a
        // replace; everything else comes from the payload.
        let company = CompanyRead {
            id,
            name: payload.name,
            website: payload.website,
            industry: payload.industry,
            founded: payload.founded,
            size: payload.size,
            created_at: stored.created_at,
            updated_at: now(),
        };
        *stored = company.clone();
        Ok(company)
    }

    /// Deletes a company and synchronously prunes its snapshot from every
    /// referencing employee. Both removals become visible together: the
    /// company lock is held for the whole cascade.
    pub fn delete_company(&self, id: Uuid) -> Result<(), StoreError> {
        let mut companies = self.companies.write();
        if !companies.contains_key(&id) {
            return Err(StoreError::not_found("Company not found"));
        }
        self.prune_company_links(id);
        companies.shift_remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn acme() -> CompanyCreate {
        CompanyCreate {
            name: "Acme Corp".into(),
            website: Some("https://acme.com".into()),
            industry: Some("Banking".into()),
            founded: Some(date!(1999 - 04 - 01)),
            size: Some("51-200 employees".into()),
        }
    }

    #[test]
    fn create_then_get_roundtrip() {
        let stores = Stores::new();
        let created = stores.create_company(acme()).unwrap();
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(stores.get_company(created.id).unwrap(), created);
    }

    #[test]
    fn create_issues_distinct_ids() {
        let stores = Stores::new();
        let a = stores.create_company(acme()).unwrap();
        let b = stores.create_company(acme()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn create_rejects_empty_name() {
        let stores = Stores::new();
        let err = stores
            .create_company(CompanyCreate {
                name: "  ".into(),
                website: None,
                industry: None,
                founded: None,
                size: None,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(stores.list_companies(CompanyQueryParams::default()).is_empty());
    }

    #[test]
    fn create_rejects_malformed_website() {
        let stores = Stores::new();
        let err = stores
            .create_company(CompanyCreate {
                website: Some("not a url".into()),
                ..acme()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let stores = Stores::new();
        assert!(matches!(
            stores.get_company(Uuid::new_v4()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn list_preserves_insertion_order_and_filters() {
        let stores = Stores::new();
        let a = stores.create_company(acme()).unwrap();
        let b = stores
            .create_company(CompanyCreate {
                name: "Globex Inc.".into(),
                website: None,
                industry: Some("Manufacturing".into()),
                founded: None,
                size: None,
            })
            .unwrap();

        let all = stores.list_companies(CompanyQueryParams::default());
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![a.id, b.id]);

        let banking = stores.list_companies(CompanyQueryParams {
            industry: Some("Banking".into()),
            ..Default::default()
        });
        assert_eq!(banking.len(), 1);
        assert_eq!(banking[0].id, a.id);

        let none = stores.list_companies(CompanyQueryParams {
            name: Some("Acme Corp".into()),
            industry: Some("Manufacturing".into()),
            ..Default::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn empty_partial_update_only_refreshes_timestamp() {
        let stores = Stores::new();
        let created = stores.create_company(acme()).unwrap();
        let updated = stores
            .update_company(created.id, CompanyUpdate::default())
            .unwrap();
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.website, created.website);
        assert_eq!(updated.industry, created.industry);
        assert_eq!(updated.founded, created.founded);
        assert_eq!(updated.size, created.size);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn partial_update_merges_present_fields_only() {
        let stores = Stores::new();
        let created = stores.create_company(acme()).unwrap();
        let updated = stores
            .update_company(
                created.id,
                CompanyUpdate {
                    industry: Some(Some("Fintech".into())),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.industry.as_deref(), Some("Fintech"));
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.website, created.website);
    }

    #[test]
    fn partial_update_with_explicit_null_clears_optional_fields() {
        let stores = Stores::new();
        let created = stores.create_company(acme()).unwrap();
        let update: CompanyUpdate =
            serde_json::from_value(serde_json::json!({"website": null, "industry": null}))
                .unwrap();
        let updated = stores.update_company(created.id, update).unwrap();
        assert_eq!(updated.website, None);
        assert_eq!(updated.industry, None);
        // Absent fields stay put.
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.founded, created.founded);
        assert_eq!(updated.size, created.size);
    }

    #[test]
    fn replace_overwrites_all_fields_but_keeps_id_and_created_at() {
        let stores = Stores::new();
        let created = stores.create_company(acme()).unwrap();
        let replaced = stores
            .replace_company(
                created.id,
                CompanyCreate {
                    name: "Globex Inc.".into(),
                    website: None,
                    industry: None,
                    founded: None,
                    size: Some("500+ employees".into()),
                },
            )
            .unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.created_at, created.created_at);
        assert_eq!(replaced.name, "Globex Inc.");
        assert_eq!(replaced.website, None);
        assert_eq!(replaced.industry, None);
    }

    #[test]
    fn delete_removes_the_record() {
        let stores = Stores::new();
        let created = stores.create_company(acme()).unwrap();
        stores.delete_company(created.id).unwrap();
        assert!(matches!(
            stores.get_company(created.id),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            stores.delete_company(created.id),
            Err(StoreError::NotFound(_))
        ));
    }
}
