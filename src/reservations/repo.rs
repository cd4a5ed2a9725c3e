use sqlx::PgPool;
use uuid::Uuid;

use super::dto::ReservationPayload;
pub use super::repo_types::Reservation;

pub async fn create(db: &PgPool, payload: &ReservationPayload) -> Result<Reservation, sqlx::Error> {
    sqlx::query_as::<_, Reservation>(
        r#"
        INSERT INTO reservations (last_name, first_name, artist_name, event_name, photo_url, is_validated)
        VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE))
        RETURNING id, last_name, first_name, artist_name, event_name, photo_url, is_validated, created_at
        "#,
    )
    .bind(&payload.last_name)
    .bind(&payload.first_name)
    .bind(&payload.artist_name)
    .bind(&payload.event_name)
    .bind(&payload.photo_url)
    .bind(payload.is_validated)
    .fetch_one(db)
    .await
}

pub async fn list(db: &PgPool) -> Result<Vec<Reservation>, sqlx::Error> {
    sqlx::query_as::<_, Reservation>(
        r#"
        SELECT id, last_name, first_name, artist_name, event_name, photo_url, is_validated, created_at
        FROM reservations
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(db)
    .await
}

/// Partial update; absent payload fields leave the column untouched.
/// Returns None when no reservation has this id.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    payload: &ReservationPayload,
) -> Result<Option<Reservation>, sqlx::Error> {
    sqlx::query_as::<_, Reservation>(
        r#"
        UPDATE reservations
        SET last_name = COALESCE($2, last_name),
            first_name = COALESCE($3, first_name),
            artist_name = COALESCE($4, artist_name),
            event_name = COALESCE($5, event_name),
            photo_url = COALESCE($6, photo_url),
            is_validated = COALESCE($7, is_validated)
        WHERE id = $1
        RETURNING id, last_name, first_name, artist_name, event_name, photo_url, is_validated, created_at
        "#,
    )
    .bind(id)
    .bind(&payload.last_name)
    .bind(&payload.first_name)
    .bind(&payload.artist_name)
    .bind(&payload.event_name)
    .bind(&payload.photo_url)
    .bind(payload.is_validated)
    .fetch_optional(db)
    .await
}

/// Returns false when no reservation has this id.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() == 1)
}
