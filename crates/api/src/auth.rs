//! The delegated auth boundary.
//!
//! Accounts, sessions, and business/tenant rows live in an external
//! service; this module verifies the session tokens it issues (shared
//! HS256 secret) and proxies the account operations, passing its
//! `{ data, error }` pairs through untouched.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// External user id.
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
}

/// Verified session, extracted from the bearer token. Mutation routes
/// require this; a missing or bad token is the API analogue of the
/// admin login redirect.
#[derive(Debug, Clone)]
pub struct Session {
    pub claims: SessionClaims,
    pub token: String,
}

pub fn verify_session(token: &str, secret: &[u8]) -> Result<SessionClaims, ApiError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::debug!(%err, "session token rejected");
        ApiError::Unauthorized
    })
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized)?;
        let claims =
            verify_session(bearer.token(), state.config().session_secret.as_bytes())?;
        Ok(Session {
            claims,
            token: bearer.token().to_string(),
        })
    }
}

/// The `{ data, error }` pair every auth operation resolves to, exactly
/// as the upstream service shapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthExchange {
    pub data: Option<Value>,
    pub error: Option<Value>,
}

impl AuthExchange {
    fn from_response(status: reqwest::StatusCode, body: Value) -> Self {
        if status.is_success() {
            AuthExchange {
                data: Some(body),
                error: None,
            }
        } else {
            AuthExchange {
                data: None,
                error: Some(body),
            }
        }
    }
}

#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl AuthClient {
    pub fn new(base_url: Option<String>, timeout: std::time::Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(AuthClient { base_url, http })
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> ApiResult<AuthExchange> {
        self.post("signup", json!({ "email": email, "password": password }), None)
            .await
    }

    /// Sign in, then check the profile and repair a missing business
    /// association before handing the session back.
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<AuthExchange> {
        let exchange = self
            .post("token", json!({ "email": email, "password": password }), None)
            .await?;

        if let Some(token) = exchange
            .data
            .as_ref()
            .and_then(|data| data.get("accessToken"))
            .and_then(Value::as_str)
        {
            let profile = self.profile(token).await?;
            let missing_business = match &profile.data {
                Some(profile) => profile
                    .get("businessId")
                    .map_or(true, Value::is_null),
                None => true,
            };
            if missing_business {
                tracing::info!("profile has no business association, attempting repair");
                if let Err(err) = self.repair_profile(token).await {
                    tracing::warn!(%err, "profile repair failed");
                }
            }
        }

        Ok(exchange)
    }

    pub async fn sign_out(&self, token: &str) -> ApiResult<AuthExchange> {
        self.post("logout", json!({}), Some(token)).await
    }

    /// Current profile including the associated business record.
    pub async fn profile(&self, token: &str) -> ApiResult<AuthExchange> {
        self.get("profile", Some(token)).await
    }

    pub async fn create_business(
        &self,
        token: &str,
        name: &str,
        logo: Option<&str>,
    ) -> ApiResult<AuthExchange> {
        self.post(
            "businesses",
            json!({ "name": name, "logo": logo }),
            Some(token),
        )
        .await
    }

    pub async fn repair_profile(&self, token: &str) -> ApiResult<AuthExchange> {
        self.post("profile/repair", json!({}), Some(token)).await
    }

    fn base(&self) -> ApiResult<&str> {
        self.base_url
            .as_deref()
            .ok_or_else(|| ApiError::Upstream("auth service is not configured".into()))
    }

    async fn post(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> ApiResult<AuthExchange> {
        let url = format!("{}/{path}", self.base()?.trim_end_matches('/'));
        let mut request = self.http.post(url).json(&body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        Self::exchange(request).await
    }

    async fn get(&self, path: &str, bearer: Option<&str>) -> ApiResult<AuthExchange> {
        let url = format!("{}/{path}", self.base()?.trim_end_matches('/'));
        let mut request = self.http.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        Self::exchange(request).await
    }

    async fn exchange(request: reqwest::RequestBuilder) -> ApiResult<AuthExchange> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Upstream(err.to_string()))?;
        let status = response.status();
        let body = response.json().await.unwrap_or(Value::Null);
        Ok(AuthExchange::from_response(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-secret";

    fn token_for(claims: &SessionClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_claims() {
        let claims = SessionClaims {
            sub: "user-1".into(),
            email: Some("op@dvanity.com".into()),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        let verified = verify_session(&token_for(&claims), SECRET).unwrap();
        assert_eq!(verified.sub, "user-1");
        assert_eq!(verified.email.as_deref(), Some("op@dvanity.com"));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let claims = SessionClaims {
            sub: "user-1".into(),
            email: None,
            exp: (chrono::Utc::now().timestamp() - 3600) as usize,
        };
        assert!(matches!(
            verify_session(&token_for(&claims), SECRET),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let claims = SessionClaims {
            sub: "user-1".into(),
            email: None,
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        assert!(matches!(
            verify_session(&token_for(&claims), b"other-secret"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn exchange_shapes_follow_status() {
        let ok = AuthExchange::from_response(reqwest::StatusCode::OK, json!({"id": 1}));
        assert!(ok.data.is_some() && ok.error.is_none());

        let err = AuthExchange::from_response(
            reqwest::StatusCode::BAD_REQUEST,
            json!({"message": "email taken"}),
        );
        assert!(err.data.is_none());
        assert_eq!(err.error.unwrap()["message"], "email taken");
    }
}
