use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// Ticket lifecycle state, numbered as the service numbers it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum TicketStatus {
    #[default]
    Pending = 1,
    Open = 2,
    Solved = 3,
}

/// Representation requested from the `get` endpoint, rendered as the final
/// path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Datatype {
    #[default]
    Json,
    Text,
}

impl Datatype {
    pub fn as_str(self) -> &'static str {
        match self {
            Datatype::Json => "json",
            Datatype::Text => "text",
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_its_number() {
        assert_eq!(serde_json::to_string(&TicketStatus::Pending).unwrap(), "1");
        assert_eq!(serde_json::to_string(&TicketStatus::Open).unwrap(), "2");
        assert_eq!(serde_json::to_string(&TicketStatus::Solved).unwrap(), "3");
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(TicketStatus::default(), TicketStatus::Pending);
    }

    #[test]
    fn datatype_renders_lowercase() {
        assert_eq!(Datatype::Json.to_string(), "json");
        assert_eq!(Datatype::Text.to_string(), "text");
    }
}
