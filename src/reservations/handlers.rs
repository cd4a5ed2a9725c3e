use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

use super::dto::ReservationPayload;
use super::repo::{self, Reservation};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/reservations", get(list_reservations))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", post(create_reservation))
        .route(
            "/reservations/:id",
            put(update_reservation).delete(delete_reservation),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<ReservationPayload>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let reservation = repo::create(&state.db, &payload).await?;
    info!(reservation_id = %reservation.id, "reservation created");
    Ok((StatusCode::CREATED, Json(reservation)))
}

#[instrument(skip(state))]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let reservations = repo::list(&state.db).await?;
    Ok(Json(reservations))
}

#[instrument(skip(state, payload))]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReservationPayload>,
) -> Result<Json<Reservation>, ApiError> {
    let reservation = repo::update(&state.db, id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Reservation"))?;
    Ok(Json(reservation))
}

#[instrument(skip(state))]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = repo::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Reservation"));
    }
    info!(reservation_id = %id, "reservation deleted");
    Ok(Json(
        serde_json::json!({ "message": "Reservation deleted" }),
    ))
}
