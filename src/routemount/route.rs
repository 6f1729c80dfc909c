use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::route::{
    company::{
        create_company, delete_company, get_companies, get_company_by_id, replace_company,
        update_company,
    },
    employee::{
        create_employee, delete_employee, get_employee_by_id, get_employees, replace_employee,
        update_employee,
    },
    health::{get_health, get_health_with_path, root},
};
use crate::store::Stores;

#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<Stores>,
    pub host_ip: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        //health
        .route("/health", get(get_health))
        .route("/health/{path_echo}", get(get_health_with_path))
        //companies
        .route("/companies", post(create_company))          //create company
        .route("/companies", get(get_companies))            //list companies by filter
        .route("/companies/{id}", get(get_company_by_id))   //get company by id
        .route("/companies/{id}", patch(update_company))    //partial update
        .route("/companies/{id}", put(replace_company))     //full replace, path id wins
        .route("/companies/{id}", delete(delete_company))   //delete company (cascades into employees)
        //employees
        .route("/employees", post(create_employee))         //create employee, resolves company_ids
        .route("/employees", get(get_employees))            //list employees by filter
        .route("/employees/{id}", get(get_employee_by_id))  //get employee by id
        .route("/employees/{id}", patch(update_employee))   //partial update
        .route("/employees/{id}", put(replace_employee))    //full replace, path id wins
        .route("/employees/{id}", delete(delete_employee))  //delete employee, no cascade
        .with_state(state)
}
