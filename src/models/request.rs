use serde::Serialize;
use serde_json::Value;

use super::requester::Requester;
use super::ticket::TicketStatus;

/// JSON body for `POST /submit`.
///
/// `summary` is the caller's base64-encoded report payload and is passed
/// through opaquely.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitTicketRequest {
    pub summary: String,
    pub subject: String,
    pub description: String,
    pub external_id: String,
    pub requester: Requester,
    /// Request-environment context from the calling process, forwarded
    /// verbatim. `null` when the caller has none.
    pub server: Value,
}

impl SubmitTicketRequest {
    pub fn new(
        summary: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
        requester: impl Into<Requester>,
    ) -> Self {
        Self {
            summary: summary.into(),
            subject: subject.into(),
            description: description.into(),
            external_id: String::new(),
            requester: requester.into(),
            server: Value::Null,
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn with_server(mut self, server: Value) -> Self {
        self.server = server;
        self
    }
}

/// JSON body for `PUT /update/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateTicketRequest {
    pub status: TicketStatus,
}

/// JSON body for `POST /comment/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct AddCommentRequest {
    pub comment: String,
}
