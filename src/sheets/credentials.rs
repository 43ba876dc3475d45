//! Service account key
//!
//! The JSON key file Google issues for a service account. Only the fields
//! needed for the token exchange are kept.

use crate::error::{Result, ViewError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Clone, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub private_key_id: String,

    #[serde(default)]
    pub private_key: String,

    #[serde(default)]
    pub client_email: String,

    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self> {
        let key: ServiceAccountKey = serde_json::from_str(json)
            .map_err(|e| ViewError::Authentication(format!("invalid service account JSON: {}", e)))?;
        key.validate()?;
        Ok(key)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ViewError::Config(format!("cannot read credentials {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Environment value: inline JSON when it looks like an object, a path otherwise
    pub fn from_env_value(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.starts_with('{') {
            Self::from_json(trimmed)
        } else {
            Self::from_file(Path::new(trimmed))
        }
    }

    fn validate(&self) -> Result<()> {
        if self.client_email.trim().is_empty() {
            return Err(ViewError::Authentication("client_email is missing".into()));
        }
        if self.private_key.trim().is_empty() {
            return Err(ViewError::Authentication("private_key is missing".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
