//! Resource model for the Diggernaut API client.
//!
//! This crate contains the pieces that do not touch the network:
//! - Credential: the API key carried by every entity
//! - Entities: projects, diggers and sessions with read-only server state
//! - Binding: propagation of parent context into fetched children
//! - Timestamp codec: tolerant decoding of the API's date formats

pub mod binding;
mod credential;
mod digger;
mod fields;
pub mod paths;
mod project;
mod resource;
mod session;
pub mod timestamp;
mod wire;

pub use binding::{Bind, Binding, bind, bind_all};
pub use credential::{Credential, CredentialError};
pub use digger::{Digger, DiggerChanges};
pub use fields::Fields;
pub use project::{Project, ProjectChanges};
pub use resource::{Replace, Resource};
pub use session::Session;
pub use timestamp::TimestampError;
