//! Async client for the Raide ticketing HTTP API.
//!
//! [`TicketingClient`] exposes one method per remote operation (submit, get,
//! update, delete, comment, search). Every request carries an
//! `Authentication` header derived from the [`Credentials`] given at
//! construction, and every response goes through the same envelope parser,
//! so all operations share identical failure semantics.
//!
//! ```no_run
//! use raide_client::{Credentials, Datatype, TicketingClient};
//!
//! # async fn run() -> Result<(), raide_client::TicketingError> {
//! let client = TicketingClient::new(Credentials::new(42, "key", "password"))?;
//! let ticket = client.get(1337, Datatype::Json, false).await?;
//! println!("{ticket}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
mod response;

pub use client::TicketingClient;
pub use config::Credentials;
pub use error::TicketingError;
pub use models::request::SubmitTicketRequest;
pub use models::requester::Requester;
pub use models::search::SearchFilters;
pub use models::ticket::{Datatype, TicketStatus};
