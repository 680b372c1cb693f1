use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::employee::{Employee, EmployeeInput};
use service::pagination::Pagination;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number; enables paging when present
    pub page: Option<u32>,
    /// Page size, clamped to 1..=100; enables paging when present
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get, path = "/api/employees", tag = "employees",
    params(ListQuery),
    responses(
        (status = 200, description = "All employees, or one page ordered by id", body = [crate::openapi::EmployeeDoc]),
        (status = 400, description = "Malformed Input", body = crate::openapi::ErrorBody),
        (status = 503, description = "Store Unavailable", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, JsonApiError> {
    let Query(q) = query?;
    let page = Pagination::from_query(q.page, q.per_page);
    let list = state.employees.list(page).await?;
    info!(count = list.len(), paged = page.is_some(), "list employees");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Malformed Input", body = crate::openapi::ErrorBody),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 503, description = "Store Unavailable", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Employee>, JsonApiError> {
    let Path(id) = path?;
    let employee = state.employees.get(&id).await?;
    Ok(Json(employee))
}

#[utoipa::path(
    post, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::EmployeePayloadDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Malformed Input", body = crate::openapi::ErrorBody),
        (status = 503, description = "Store Unavailable", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.employees.create(input).await?;
    info!(id = %created.id, "created employee");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee id; overrides any id in the body")),
    request_body = crate::openapi::EmployeePayloadDoc,
    responses(
        (status = 200, description = "Saved (created if the id was new)", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Malformed Input", body = crate::openapi::ErrorBody),
        (status = 503, description = "Store Unavailable", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, JsonApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let saved = state.employees.update(&id, input).await?;
    info!(id = %saved.id, "updated employee");
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/api/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 400, description = "Malformed Input", body = crate::openapi::ErrorBody),
        (status = 503, description = "Store Unavailable", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    state.employees.delete(&id).await?;
    info!(id = %id, "deleted employee");
    Ok(StatusCode::OK)
}
