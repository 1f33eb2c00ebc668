//! HTTP client for the Diggernaut scraping platform API.
//!
//! Provides authenticated CRUD over the resource hierarchy:
//! - Projects, and the diggers they own
//! - Diggers, and the sessions they have run
//! - Session metadata and scraped data
//!
//! ```no_run
//! use dn_api::Client;
//! use dn_core::{Credential, ProjectChanges};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credential = Credential::new("my-api-key")?;
//! let client = Client::new()?;
//!
//! let project = client.create_project(
//!     &credential,
//!     ProjectChanges::new().name("Demo").description("x"),
//! )?;
//! for digger in client.diggers(&project)? {
//!     for session in client.sessions(&digger)? {
//!         let loaded = client.session_data(&session)?;
//!         println!("{}", loaded.data());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http;
mod resource;
mod transport;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{ApiError, Result, TransportError};
pub use http::{DEFAULT_TIMEOUT, HttpTransport};
pub use resource::ResourceClient;
pub use transport::{Method, Request, Response, Transport};
