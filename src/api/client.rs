// src/api/client.rs
use crate::api::models::{ApiErrorBody, NewProperty, PropertyCreated};
use crate::api::ApiError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Client for the remote property API.
#[derive(Clone)]
pub struct PropertyApi {
    base_url: String,
    client: Client,
}

impl PropertyApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Submit a new property listing.
    ///
    /// One POST, one response, two outcomes. No retry: a failed attempt is
    /// terminal and the caller decides what to show the user.
    pub fn create_property(
        &self,
        property: &NewProperty,
        token: Option<&str>,
    ) -> Result<PropertyCreated, ApiError> {
        let url = format!("{}/api/properties", self.base_url);

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(property);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Decide success or rejection from the raw status and body.
///
/// Any 2xx counts as created, not just 200: the upstream is free to answer
/// 201 or an empty 204. On rejection the server's `message` field is
/// surfaced when the body parses, otherwise a snippet of the body itself.
pub(crate) fn interpret_response(status: u16, body: &str) -> Result<PropertyCreated, ApiError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body).unwrap_or_default());
    }

    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => format!("request failed with status {status}"),
        Err(_) => body.chars().take(200).collect(),
    };

    Err(ApiError::Rejected { status, message })
}
