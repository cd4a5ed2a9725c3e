use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Reservation record. This service does not interpret the fields; they are
/// stored and returned as given.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub artist_name: Option<String>,
    pub event_name: Option<String>,
    pub photo_url: Option<String>, // URL only, the image lives elsewhere
    pub is_validated: bool,
    pub created_at: OffsetDateTime,
}
