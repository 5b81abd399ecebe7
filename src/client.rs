use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::Credentials;
use crate::error::TicketingError;
use crate::models::request::{AddCommentRequest, SubmitTicketRequest, UpdateTicketRequest};
use crate::models::search::SearchFilters;
use crate::models::ticket::{Datatype, TicketStatus};
use crate::response::parse_response;

/// Fixed host and version prefix of the Raide API.
pub const DEFAULT_BASE_URL: &str = "http://api.raide.io/1.0";

const USER_AGENT: &str = concat!("raide-client/", env!("CARGO_PKG_VERSION"), " (Rust)");

/// Async client for the Raide ticketing API.
///
/// Holds the immutable credentials (rendered once into the `Authentication`
/// header) and a shared connection pool. Cloning is cheap, and clones may be
/// used concurrently; no state is mutated after construction.
#[derive(Debug, Clone)]
pub struct TicketingClient {
    client: Client,
    base_url: String,
    auth_header: String,
}

impl TicketingClient {
    /// Client against the production endpoint, with the transport's default
    /// timeout behavior.
    pub fn new(credentials: Credentials) -> Result<Self, TicketingError> {
        Self::with_config(credentials, DEFAULT_BASE_URL, None)
    }

    /// Client against a non-default host (staging, self-hosted, tests).
    pub fn with_base_url(
        credentials: Credentials,
        base_url: &str,
    ) -> Result<Self, TicketingError> {
        Self::with_config(credentials, base_url, None)
    }

    /// Fully configured client. `timeout` of `None` leaves the transport's
    /// own default in place.
    pub fn with_config(
        credentials: Credentials,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, TicketingError> {
        let base = Url::parse(base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            auth_header: credentials.header_value(),
        })
    }

    /// Add a comment to a ticket.
    ///
    /// The service exposes no external-id route for comments; the flag is
    /// accepted for parity with the other addressed operations but does not
    /// change the path.
    pub async fn comment(
        &self,
        id: impl fmt::Display,
        text: impl Into<String>,
        is_external_id: bool,
    ) -> Result<Value, TicketingError> {
        let _ = is_external_id;
        let url = format!("{}/comment/{}", self.base_url, id);
        let body = AddCommentRequest {
            comment: text.into(),
        };

        debug!("POST {}", url);
        self.execute(self.client.post(&url).json(&body)).await
    }

    /// Delete a ticket by its numeric id, or by external id when
    /// `is_external_id` is set.
    pub async fn delete(
        &self,
        id: impl fmt::Display,
        is_external_id: bool,
    ) -> Result<Value, TicketingError> {
        let url = if is_external_id {
            format!("{}/delete/external/{}", self.base_url, id)
        } else {
            format!("{}/delete/{}", self.base_url, id)
        };

        debug!("DELETE {}", url);
        self.execute(self.client.delete(&url)).await
    }

    /// Retrieve a ticket in the requested representation.
    pub async fn get(
        &self,
        id: impl fmt::Display,
        datatype: Datatype,
        is_external_id: bool,
    ) -> Result<Value, TicketingError> {
        let url = if is_external_id {
            format!("{}/get/external/{}/{}", self.base_url, id, datatype)
        } else {
            format!("{}/get/{}/{}", self.base_url, id, datatype)
        };

        debug!("GET {}", url);
        self.execute(self.client.get(&url)).await
    }

    /// Search existing tickets. Only the allow-listed filter names in
    /// [`SearchFilters`] are transmitted.
    pub async fn search(&self, filters: &SearchFilters) -> Result<Value, TicketingError> {
        let url = format!("{}/search", self.base_url);

        debug!("GET {}", url);
        self.execute(self.client.get(&url).query(filters.as_params()))
            .await
    }

    /// Submit a new ticket.
    pub async fn submit(&self, ticket: &SubmitTicketRequest) -> Result<Value, TicketingError> {
        let url = format!("{}/submit", self.base_url);

        debug!("POST {}", url);
        self.execute(self.client.post(&url).json(ticket)).await
    }

    /// Update the status of a ticket.
    ///
    /// The update route addresses every ticket through `/update/{id}`; as
    /// with [`comment`](Self::comment), the external-id flag is accepted but
    /// has no route of its own.
    pub async fn update(
        &self,
        id: impl fmt::Display,
        status: TicketStatus,
        is_external_id: bool,
    ) -> Result<Value, TicketingError> {
        let _ = is_external_id;
        let url = format!("{}/update/{}", self.base_url, id);
        let body = UpdateTicketRequest { status };

        debug!("PUT {}", url);
        self.execute(self.client.put(&url).json(&body)).await
    }

    /// Attach the authentication header, perform the round-trip, and hand
    /// the raw status/body pair to the envelope parser. Transport failures
    /// propagate unchanged.
    async fn execute(&self, request: RequestBuilder) -> Result<Value, TicketingError> {
        let response = request
            .header("Authentication", &self.auth_header)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}
