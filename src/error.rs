//! Error types for NakVaksin

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed session cookie '{cookie}': {source}")]
    MalformedSession {
        cookie: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file not found. Run 'nakvaksin init' first.")]
    ConfigNotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        // Details stay in the log; the visitor gets a generic page
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(
                "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">\
                 <title>500: Internal Server Error</title></head>\
                 <body><h1>500</h1><p>Internal Server Error.</p></body></html>",
            ),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
