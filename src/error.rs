use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("No service account credentials configured. Set PUSLESPILL_CREDENTIALS or run `puslespill config --set-credentials PATH`")]
    MissingCredentials,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Prompt failed: {0}")]
    Interactive(String),

    #[error(transparent)]
    Common(#[from] puslespill_common::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ViewError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            // Body arrived but was not what the API documents
            ViewError::Api {
                status: err.status().map_or(0, |s| s.as_u16()),
                message: err.to_string(),
            }
        } else {
            ViewError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;

impl axum::response::IntoResponse for ViewError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = match self {
            ViewError::NotFound(_) => StatusCode::NOT_FOUND,
            ViewError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            ViewError::Authentication(_) | ViewError::Api { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
