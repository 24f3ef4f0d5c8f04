//! Delegated account routes: thin proxies over the external auth/tenant
//! service. Failures come back as `{ data, error }` pairs for inline
//! form display; they never touch the content document.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::auth::{AuthExchange, Session};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/signup", post(sign_up))
        .route("/v1/auth/signin", post(sign_in))
        .route("/v1/auth/signout", post(sign_out))
        .route("/v1/auth/profile", get(profile))
        .route("/v1/auth/business", post(create_business))
        .route("/v1/auth/repair", post(repair_profile))
}

#[derive(Debug, Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct BusinessRequest {
    name: String,
    logo: Option<String>,
}

fn require(field: &'static str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        Err(ApiError::BadRequest(format!("{field} is required")))
    } else {
        Ok(())
    }
}

async fn sign_up(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<AuthExchange>> {
    require("email", &credentials.email)?;
    require("password", &credentials.password)?;
    Ok(Json(
        state
            .auth()
            .sign_up(&credentials.email, &credentials.password)
            .await?,
    ))
}

async fn sign_in(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<AuthExchange>> {
    require("email", &credentials.email)?;
    require("password", &credentials.password)?;
    Ok(Json(
        state
            .auth()
            .sign_in(&credentials.email, &credentials.password)
            .await?,
    ))
}

async fn sign_out(
    session: Session,
    State(state): State<AppState>,
) -> ApiResult<Json<AuthExchange>> {
    Ok(Json(state.auth().sign_out(&session.token).await?))
}

async fn profile(
    session: Session,
    State(state): State<AppState>,
) -> ApiResult<Json<AuthExchange>> {
    Ok(Json(state.auth().profile(&session.token).await?))
}

async fn create_business(
    session: Session,
    State(state): State<AppState>,
    Json(request): Json<BusinessRequest>,
) -> ApiResult<Json<AuthExchange>> {
    require("name", &request.name)?;
    Ok(Json(
        state
            .auth()
            .create_business(&session.token, &request.name, request.logo.as_deref())
            .await?,
    ))
}

async fn repair_profile(
    session: Session,
    State(state): State<AppState>,
) -> ApiResult<Json<AuthExchange>> {
    Ok(Json(state.auth().repair_profile(&session.token).await?))
}
