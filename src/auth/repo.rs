pub use crate::auth::repo_types::User;
use crate::error::ApiError;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

impl User {
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, identifier, email, password_hash, reset_code, reset_code_expires, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by login identifier.
    pub async fn find_by_identifier(
        db: &PgPool,
        identifier: &str,
    ) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, identifier, email, password_hash, reset_code, reset_code_expires, created_at
            FROM users
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by registered email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, identifier, email, password_hash, reset_code, reset_code_expires, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with a hashed password. Uniqueness of the identifier
    /// is enforced by the database constraint, so concurrent signups with the
    /// same identifier cannot both succeed.
    pub async fn create(
        db: &PgPool,
        identifier: &str,
        email: Option<&str>,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        let res = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (identifier, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, identifier, email, password_hash, reset_code, reset_code_expires, created_at
            "#,
        )
        .bind(identifier)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await;

        res.map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                ApiError::DuplicateIdentifier
            }
            _ => ApiError::Store(e),
        })
    }

    /// Store a fresh reset code, overwriting any pending one. A second reset
    /// request restarts the window and invalidates the prior code.
    pub async fn store_reset_code(
        db: &PgPool,
        user_id: Uuid,
        code: &str,
        expires: OffsetDateTime,
    ) -> Result<(), ApiError> {
        sqlx::query("UPDATE users SET reset_code = $2, reset_code_expires = $3 WHERE id = $1")
            .bind(user_id)
            .bind(code)
            .bind(expires)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Atomically consume a live reset code: the password is replaced and both
    /// reset fields cleared in one statement, so a consumed code cannot be
    /// replayed and an expired one never matches. Returns false when no row
    /// matched; the caller cannot tell which condition failed.
    pub async fn consume_reset_code(
        db: &PgPool,
        email: &str,
        code: &str,
        new_password_hash: &str,
    ) -> Result<bool, ApiError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $3, reset_code = NULL, reset_code_expires = NULL
            WHERE email = $1 AND reset_code = $2 AND reset_code_expires > now()
            "#,
        )
        .bind(email)
        .bind(code)
        .bind(new_password_hash)
        .execute(db)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
