use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{
            LoginRequest, MessageResponse, PublicUser, ResetConfirmRequest, ResetRequest,
            SignupRequest, TokenResponse,
        },
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo::User,
        reset,
    },
    error::ApiError,
    state::AppState,
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/reset-password", post(request_password_reset))
        .route("/reset-password-confirm", post(confirm_password_reset))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    payload.identifier = payload.identifier.trim().to_string();

    if payload.identifier.is_empty() {
        return Err(ApiError::Validation("Identifier is required".into()));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }
    let email = match payload.email.as_deref() {
        Some(raw) => {
            let normalized = raw.trim().to_lowercase();
            if !is_valid_email(&normalized) {
                warn!("invalid email");
                return Err(ApiError::Validation("Invalid email".into()));
            }
            Some(normalized)
        }
        None => None,
    };

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.identifier, email.as_deref(), &hash).await?;

    info!(user_id = %user.id, identifier = %user.identifier, "user created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload.identifier = payload.identifier.trim().to_string();

    if payload.identifier.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Identifier and password are required".into(),
        ));
    }

    // Unknown identifier and wrong password are deliberately the same error.
    let user = User::find_by_identifier(&state.db, &payload.identifier)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let ok = verify_password(&payload.password, &user.password_hash)?;
    if !ok {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state, payload))]
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(mut payload): Json<ResetRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        return Err(ApiError::Validation("Invalid email".into()));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    let code = reset::generate_code();
    let expires = reset::expiry(
        OffsetDateTime::now_utc(),
        state.config.reset_code_ttl_minutes,
    );
    User::store_reset_code(&state.db, user.id, &code, expires).await?;

    // The code is persisted before dispatch and stays persisted on delivery
    // failure, so a retried request can still be confirmed with it.
    let body = format!(
        "Your password reset code is: {code}\n\n\
         This code expires in {} minutes.\n\n\
         If you did not request a reset, you can ignore this message.\n",
        state.config.reset_code_ttl_minutes
    );
    if let Err(e) = state
        .notifier
        .send(&payload.email, "Password reset code", &body)
        .await
    {
        warn!(error = %e, user_id = %user.id, "reset code delivery failed");
        return Err(ApiError::DeliveryFailed);
    }

    info!(user_id = %user.id, "reset code issued");
    Ok(Json(MessageResponse {
        message: "A reset code has been sent by email".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(mut payload): Json<ResetConfirmRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    // A code that cannot match gets the same answer as one that does not
    // match, keeping wrong/expired/unknown indistinguishable.
    if payload.code.len() != 6 || !payload.code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::InvalidOrExpiredCode);
    }
    if payload.new_password.len() < 8 {
        return Err(ApiError::Validation("Password too short".into()));
    }

    let hash = hash_password(&payload.new_password)?;
    let consumed =
        User::consume_reset_code(&state.db, &payload.email, &payload.code, &hash).await?;
    if !consumed {
        return Err(ApiError::InvalidOrExpiredCode);
    }

    info!("password reset confirmed");
    Ok(Json(MessageResponse {
        message: "Password reset successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(PublicUser {
        id: user.id,
        identifier: user.identifier,
        email: user.email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_regex_accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("user.name@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[tokio::test]
    async fn signup_rejects_blank_identifier() {
        let state = AppState::fake();
        let err = signup(
            State(state),
            Json(SignupRequest {
                identifier: "   ".into(),
                password: "long-enough".into(),
                email: None,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn signup_rejects_short_password() {
        let state = AppState::fake();
        let err = signup(
            State(state),
            Json(SignupRequest {
                identifier: "alice".into(),
                password: "p1".into(),
                email: None,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn signup_rejects_malformed_email() {
        let state = AppState::fake();
        let err = signup(
            State(state),
            Json(SignupRequest {
                identifier: "alice".into(),
                password: "long-enough".into(),
                email: Some("nope".into()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn login_rejects_missing_fields() {
        let state = AppState::fake();
        let err = login(
            State(state),
            Json(LoginRequest {
                identifier: "".into(),
                password: "whatever".into(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn reset_request_rejects_malformed_email() {
        let state = AppState::fake();
        let err = request_password_reset(
            State(state),
            Json(ResetRequest {
                email: "not-an-email".into(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn confirm_rejects_malformed_code_as_invalid_code() {
        let state = AppState::fake();
        let err = confirm_password_reset(
            State(state),
            Json(ResetConfirmRequest {
                email: "a@x.com".into(),
                code: "12345".into(),
                new_password: "fresh-password".into(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidOrExpiredCode));
    }

    #[tokio::test]
    async fn confirm_rejects_short_new_password() {
        let state = AppState::fake();
        let err = confirm_password_reset(
            State(state),
            Json(ResetConfirmRequest {
                email: "a@x.com".into(),
                code: "123456".into(),
                new_password: "short".into(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
