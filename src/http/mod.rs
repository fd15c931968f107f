use reqwest::Client;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

/// Turns the outcome of a sent request into its body text, mapping non-2xx
/// statuses to [`Error::GenericResponseError`]
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            log::debug!("request failed with status {}: {}", status, text);
            return Err(Error::GenericResponseError {
                message: error_message(status, &text),
            });
        }

        Ok(text)
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

fn error_message(status: reqwest::StatusCode, text: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(text) {
        Ok(response) => response.message,
        Err(_) if text.trim().is_empty() => status.to_string(),
        Err(_) => text.to_owned(),
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    GenericResponseError { message: String },
    #[error("Failed to send request: {cause}")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text: {cause}")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize request: {cause}")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to parse response: {cause}")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
