use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::TicketingError;

/// Raide account credentials.
///
/// Immutable once constructed. `Default` yields the unauthenticated
/// zero/empty form, which the service answers with 401 until real
/// credentials are supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub account_id: u64,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_password: String,
}

impl Credentials {
    pub fn new(
        account_id: u64,
        api_key: impl Into<String>,
        api_password: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            api_key: api_key.into(),
            api_password: api_password.into(),
        }
    }

    /// Load credentials from a YAML file with `account_id`, `api_key` and
    /// `api_password` keys.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TicketingError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Value of the `Authentication` header attached to every request.
    pub(crate) fn header_value(&self) -> String {
        format!(
            "id={};key={};password={}",
            self.account_id, self.api_key, self.api_password
        )
    }
}
