//! One async handler per route. Handlers take the per-collection lock, then
//! run the service round trip on the blocking pool so file I/O never stalls
//! the async runtime; the lock is held until the round trip finishes.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{error::ApiError, extract::PortalJson, AppState};
use crate::{
    core::errors::{PortalError, Result},
    domain::{Movement, MovementLog, Profile, Purchase, PurchaseBook},
};

async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| PortalError::Storage(err.to_string()))?
}

pub(crate) async fn healthz() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PurchaseFilter {
    status: Option<String>,
}

pub(crate) async fn list_purchases(
    State(state): State<AppState>,
    Query(filter): Query<PurchaseFilter>,
) -> Result<Json<PurchaseBook>, ApiError> {
    let service = state.purchases.clone().lock_owned().await;
    let purchases = run_blocking(move || service.list(filter.status.as_deref())).await?;
    Ok(Json(PurchaseBook { purchases }))
}

pub(crate) async fn get_purchase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Purchase>, ApiError> {
    let service = state.purchases.clone().lock_owned().await;
    let purchase = run_blocking(move || service.get(&id)).await?;
    Ok(Json(purchase))
}

pub(crate) async fn create_purchase(
    State(state): State<AppState>,
    PortalJson(purchase): PortalJson<Purchase>,
) -> Result<Response, ApiError> {
    let service = state.purchases.clone().lock_owned().await;
    let created = run_blocking(move || service.create(purchase)).await?;
    info!(id = %created.id, "purchase created");
    let location = format!("/purchases/{}", created.id);
    let mut response = (StatusCode::CREATED, Json(created)).into_response();
    // Ids are free-form; one that cannot form a header value drops Location
    // rather than failing a create that already persisted.
    if let Ok(value) = HeaderValue::from_str(&location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    Ok(response)
}

pub(crate) async fn update_purchase(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PortalJson(purchase): PortalJson<Purchase>,
) -> Result<StatusCode, ApiError> {
    let service = state.purchases.clone().lock_owned().await;
    let logged_id = id.clone();
    run_blocking(move || service.update(&id, purchase)).await?;
    info!(id = %logged_id, "purchase updated");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let service = state.purchases.clone().lock_owned().await;
    let logged_id = id.clone();
    run_blocking(move || service.delete(&id)).await?;
    info!(id = %logged_id, "purchase deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn list_movements(
    State(state): State<AppState>,
) -> Result<Json<MovementLog>, ApiError> {
    let service = state.movements.clone().lock_owned().await;
    let movements = run_blocking(move || service.list()).await?;
    Ok(Json(MovementLog { movements }))
}

pub(crate) async fn get_movement(
    State(state): State<AppState>,
    Path(index): Path<i64>,
) -> Result<Json<Movement>, ApiError> {
    let service = state.movements.clone().lock_owned().await;
    let movement = run_blocking(move || service.get(index)).await?;
    Ok(Json(movement))
}

pub(crate) async fn create_movement(
    State(state): State<AppState>,
    PortalJson(movement): PortalJson<Movement>,
) -> Result<impl IntoResponse, ApiError> {
    let service = state.movements.clone().lock_owned().await;
    let (created, index) = run_blocking(move || service.create(movement)).await?;
    info!(index, "movement appended");
    let location = format!("/movements/{index}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub(crate) async fn update_movement(
    State(state): State<AppState>,
    Path(index): Path<i64>,
    PortalJson(movement): PortalJson<Movement>,
) -> Result<StatusCode, ApiError> {
    let service = state.movements.clone().lock_owned().await;
    run_blocking(move || service.update(index, movement)).await?;
    info!(index, "movement updated");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn delete_movement(
    State(state): State<AppState>,
    Path(index): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let service = state.movements.clone().lock_owned().await;
    run_blocking(move || service.delete(index)).await?;
    info!(index, "movement removed");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    let service = state.profile.clone().lock_owned().await;
    let profile = run_blocking(move || service.get()).await?;
    Ok(Json(profile))
}

pub(crate) async fn create_profile(
    State(state): State<AppState>,
    PortalJson(profile): PortalJson<Profile>,
) -> Result<impl IntoResponse, ApiError> {
    let service = state.profile.clone().lock_owned().await;
    let created = run_blocking(move || service.create(profile)).await?;
    info!("profile created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/profile".to_string())],
        Json(created),
    ))
}

pub(crate) async fn upsert_profile(
    State(state): State<AppState>,
    PortalJson(profile): PortalJson<Profile>,
) -> Result<StatusCode, ApiError> {
    let service = state.profile.clone().lock_owned().await;
    run_blocking(move || service.upsert(profile)).await?;
    info!("profile written");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn delete_profile(
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let service = state.profile.clone().lock_owned().await;
    run_blocking(move || service.delete()).await?;
    info!("profile removed");
    Ok(StatusCode::NO_CONTENT)
}
