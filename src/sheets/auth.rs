//! Service account → access token
//!
//! Signs an RS256 JWT assertion with the service account key and trades it
//! for a bearer token at the key's token URI.

use super::credentials::ServiceAccountKey;
use crate::error::{Result, ViewError};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Read-only access to spreadsheets and to Drive for the name lookup
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/spreadsheets.readonly",
    "https://www.googleapis.com/auth/drive.readonly",
];

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(key: &ServiceAccountKey, issued_at: i64) -> Self {
        Self {
            iss: key.client_email.clone(),
            scope: SCOPES.join(" "),
            aud: key.token_uri.clone(),
            iat: issued_at,
            exp: issued_at + TOKEN_LIFETIME_SECS,
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenError {
    error: String,
    #[serde(default)]
    error_description: String,
}

pub fn sign_assertion(key: &ServiceAccountKey, claims: &Claims) -> Result<String> {
    let mut header = Header::new(Algorithm::RS256);
    if !key.private_key_id.is_empty() {
        header.kid = Some(key.private_key_id.clone());
    }

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| ViewError::Authentication(format!("invalid private key: {}", e)))?;

    jsonwebtoken::encode(&header, claims, &encoding_key)
        .map_err(|e| ViewError::Authentication(format!("cannot sign assertion: {}", e)))
}

/// Token endpoint error body → readable message
fn token_error_message(body: &str) -> String {
    match serde_json::from_str::<TokenError>(body) {
        Ok(err) if err.error_description.is_empty() => err.error,
        Ok(err) => format!("{}: {}", err.error, err.error_description),
        Err(_) => body.to_string(),
    }
}

pub async fn fetch_access_token(http: &reqwest::Client, key: &ServiceAccountKey) -> Result<String> {
    let claims = Claims::new(key, chrono::Utc::now().timestamp());
    let assertion = sign_assertion(key, &claims)?;

    debug!(client_email = %key.client_email, "requesting access token");

    let response = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = token_error_message(&body);
        // invalid_grant, invalid_client and friends all come back as 4xx
        return Err(if status.is_client_error() {
            ViewError::Authentication(message)
        } else {
            ViewError::Api {
                status: status.as_u16(),
                message,
            }
        });
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}
