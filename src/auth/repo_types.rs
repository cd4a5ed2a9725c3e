use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
///
/// `reset_code` and `reset_code_expires` are set together while a password
/// reset is pending and cleared together when the code is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                    // unique user ID
    pub identifier: String,          // login handle, unique
    pub email: Option<String>,       // reset notification destination
    #[serde(skip_serializing)]
    pub password_hash: String,       // Argon2 hash, not exposed in JSON
    #[serde(skip_serializing)]
    pub reset_code: Option<String>,  // pending 6-digit reset code
    #[serde(skip_serializing)]
    pub reset_code_expires: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}
