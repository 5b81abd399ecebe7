use serde::{Deserialize, Serialize};

/// Who a submitted ticket is filed for.
///
/// The service accepts either a bare e-mail string or a contact object and
/// disambiguates by shape; the client performs no validation of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requester {
    Email(String),
    Contact { id: u64, email: String, name: String },
}

impl From<&str> for Requester {
    fn from(email: &str) -> Self {
        Requester::Email(email.to_string())
    }
}

impl From<String> for Requester {
    fn from(email: String) -> Self {
        Requester::Email(email)
    }
}
