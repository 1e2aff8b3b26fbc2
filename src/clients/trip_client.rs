use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::trip::{CreateTrip, CreateTripBody, CreatedTrip, TripDetails, TripEnvelope, TripOwner};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

#[derive(Debug, Error)]
pub enum TripApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP client for the trips backend.
pub struct TripClient {
    http: reqwest::Client,
    base_url: String,
    owner: TripOwner,
}

impl TripClient {
    pub fn new(base_url: impl Into<String>, owner: TripOwner) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            owner,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<TripDetails, TripApiError> {
        debug!("Fetching trip");
        let response = self
            .http
            .get(format!("{}/trips/{}", self.base_url, id))
            .send()
            .await?;
        let envelope: TripEnvelope = read_json(response).await?;
        Ok(envelope.trip)
    }

    #[instrument(skip(self, trip), fields(destination = %trip.destination))]
    pub async fn create(&self, trip: &CreateTrip) -> Result<CreatedTrip, TripApiError> {
        let body = CreateTripBody {
            trip,
            owner_name: &self.owner.name,
            owner_email: &self.owner.email,
        };
        debug!(guests = trip.emails_to_invite.len(), "Creating trip");
        let response = self
            .http
            .post(format!("{}/trips", self.base_url))
            .json(&body)
            .send()
            .await?;
        let created: CreatedTrip = read_json(response).await?;
        debug!(trip_id = %created.trip_id, "Trip created");
        Ok(created)
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TripApiError> {
    let status = response.status();
    let text = response.text().await?; // read the body once

    if !status.is_success() {
        return Err(TripApiError::Server {
            status: status.as_u16(),
            message: error_message(status, &text),
        });
    }

    Ok(serde_json::from_str(&text)?)
}

fn error_message(status: StatusCode, body: &str) -> String {
    let from_body = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));
    match from_body {
        Some(message) => message,
        None if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> TripOwner {
        TripOwner {
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = TripClient::new("http://localhost:3333/", owner());
        assert_eq!(client.base_url(), "http://localhost:3333");
    }

    #[test]
    fn error_message_prefers_body_message() {
        let msg = error_message(StatusCode::BAD_REQUEST, r#"{"message":"Invalid trip start date."}"#);
        assert_eq!(msg, "Invalid trip start date.");
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down\n"), "upstream down");
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }
}
