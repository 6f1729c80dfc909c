use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::company::CompanyRead;
use crate::models::employee::{EmployeeCreate, EmployeeQueryParams, EmployeeRead, EmployeeUpdate};

use super::error::StoreError;
use super::filter::Conjunction;
use super::{fresh_id, now, Stores};

impl Stores {
    /// Resolves `company_ids` into snapshot copies of the current company
    /// records. Fails on the first id with no live company, before any
    /// employee state has been touched.
    fn resolve_companies(
        companies: &IndexMap<Uuid, CompanyRead>,
        ids: &[Uuid],
    ) -> Result<Vec<CompanyRead>, StoreError> {
        ids.iter()
            .map(|cid| {
                companies
                    .get(cid)
                    .cloned()
                    .ok_or_else(|| StoreError::not_found(format!("Company {cid} not found")))
            })
            .collect()
    }

    pub fn create_employee(&self, payload: EmployeeCreate) -> Result<EmployeeRead, StoreError> {
        payload.validate()?;
        // Company lock before employee lock, held together so the resolved
        // snapshots cannot go stale against a concurrent company delete.
        let companies = self.companies.read();
        let linked = Self::resolve_companies(&companies, &payload.company_ids)?;
        let mut employees = self.employees.write();
        let id = fresh_id();
        if employees.contains_key(&id) {
            return Err(StoreError::conflict("Employee with this ID already exists"));
        }
        let ts = now();
        let employee = EmployeeRead {
            id,
            employee_id: payload.employee_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            birth_date: payload.birth_date,
            department: payload.department,
            team: payload.team,
            yearsofexp: payload.yearsofexp,
            companies: linked,
            created_at: ts,
            updated_at: ts,
        };
        employees.insert(id, employee.clone());
        Ok(employee)
    }

    pub fn get_employee(&self, id: Uuid) -> Result<EmployeeRead, StoreError> {
        self.employees
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Employee not found"))
    }

    pub fn list_employees(&self, params: EmployeeQueryParams) -> Vec<EmployeeRead> {
        let conj = Conjunction::new()
            .eq(params.employee_id, |e: &EmployeeRead| &e.employee_id)
            .eq(params.first_name, |e: &EmployeeRead| &e.first_name)
            .eq(params.last_name, |e: &EmployeeRead| &e.last_name)
            .eq(params.email, |e: &EmployeeRead| &e.email)
            .eq(params.phone, |e: &EmployeeRead| &e.phone)
            .eq(params.department, |e: &EmployeeRead| &e.department)
            .eq(params.team, |e: &EmployeeRead| &e.team)
            .at_least(params.min_years_of_exp, |e: &EmployeeRead| e.yearsofexp)
            .when(params.company_name.map(|name| {
                move |e: &EmployeeRead| e.companies.iter().any(|c| c.name == name)
            }));
        conj.filter(self.employees.read().values())
    }

    pub fn update_employee(
        &self,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> Result<EmployeeRead, StoreError> {
        update.validate()?;
        let companies = self.companies.read();
        let mut employees = self.employees.write();
        let stored = employees
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Employee not found"))?;
        // Re-resolve before merging anything so a bad id leaves the record
        // untouched.
        let linked = match &update.company_ids {
            Some(ids) => Some(Self::resolve_companies(&companies, ids)?),
            None => None,
        };
        if let Some(linked) = linked {
            stored.companies = linked;
        }
        if let Some(employee_id) = update.employee_id {
            stored.employee_id = employee_id;
        }
        if let Some(first_name) = update.first_name {
            stored.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            stored.last_name = last_name;
        }
        if let Some(email) = update.email {
            stored.email = email;
        }
        if let Some(phone) = update.phone {
            stored.phone = phone;
        }
        if let Some(birth_date) = update.birth_date {
            stored.birth_date = birth_date;
        }
        if let Some(department) = update.department {
            stored.department = department;
        }
        if let Some(team) = update.team {
            stored.team = team;
        }
        if let Some(yearsofexp) = update.yearsofexp {
            stored.yearsofexp = yearsofexp;
        }
        stored.updated_at = now();
        Ok(stored.clone())
    }

    pub fn replace_employee(
        &self,
        id: Uuid,
        payload: EmployeeCreate,
    ) -> Result<EmployeeRead, StoreError> {
        payload.validate()?;
        let companies = self.companies.read();
        let mut employees = self.employees.write();
        let stored = employees
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Employee not found"))?;
        let linked = Self::resolve_companies(&companies, &payload.company_ids)?;
        // The target id and the original creation timestamp survive a
        // replace; everything else comes from the payload.
        let employee = EmployeeRead {
            id,
            employee_id: payload.employee_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            birth_date: payload.birth_date,
            department: payload.department,
            team: payload.team,
            yearsofexp: payload.yearsofexp,
            companies: linked,
            created_at: stored.created_at,
            updated_at: now(),
        };
        *stored = employee.clone();
        Ok(employee)
    }

    pub fn delete_employee(&self, id: Uuid) -> Result<(), StoreError> {
        let mut employees = self.employees.write();
        if employees.shift_remove(&id).is_none() {
            return Err(StoreError::not_found("Employee not found"));
        }
        Ok(())
    }

    /// Removes the deleted company's snapshot from every employee holding
    /// one. Called by the company delete with the company write lock held.
    pub(crate) fn prune_company_links(&self, company_id: Uuid) {
        let mut employees = self.employees.write();
        for employee in employees.values_mut() {
            let before = employee.companies.len();
            employee.companies.retain(|c| c.id != company_id);
            if employee.companies.len() != before {
                employee.updated_at = now();
            }
        }
    }
}
