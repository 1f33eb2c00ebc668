//! Sessions: individual runs of a digger.
//!
//! Sessions are produced by the scraping platform; the client only reads
//! them. Scraped data is fetched separately and attached with
//! [`Session::with_data`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::binding::{Bind, Binding};
use crate::credential::Credential;
use crate::resource::Resource;
use crate::timestamp;
use crate::wire::{nullable, optional_id};

/// A digger run as last seen on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SessionPayload")]
pub struct Session {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    digger: Option<u64>,
    #[serde(serialize_with = "timestamp::serialize")]
    started_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "timestamp::serialize")]
    finished_at: Option<DateTime<Utc>>,
    state: String,
    runtime: u64,
    bandwidth: u64,
    requests: u64,
    errors: u64,
    #[serde(skip_serializing_if = "Value::is_null")]
    data: Value,
    #[serde(skip)]
    credential: Option<Credential>,
}

/// Wire shape of a session. The parent may arrive as `digger`, `digger_id`
/// or both.
#[derive(Deserialize)]
struct SessionPayload {
    #[serde(default, deserialize_with = "nullable")]
    id: u64,
    #[serde(default, deserialize_with = "optional_id")]
    digger: Option<u64>,
    #[serde(default, deserialize_with = "optional_id")]
    digger_id: Option<u64>,
    #[serde(default, with = "timestamp")]
    started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp")]
    finished_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    state: String,
    #[serde(default, deserialize_with = "nullable")]
    runtime: u64,
    #[serde(default, deserialize_with = "nullable")]
    bandwidth: u64,
    #[serde(default, deserialize_with = "nullable")]
    requests: u64,
    #[serde(default, deserialize_with = "nullable")]
    errors: u64,
    #[serde(default)]
    data: Value,
}

impl From<SessionPayload> for Session {
    fn from(payload: SessionPayload) -> Self {
        Self {
            id: payload.id,
            digger: payload.digger.or(payload.digger_id),
            started_at: payload.started_at,
            finished_at: payload.finished_at,
            state: payload.state,
            runtime: payload.runtime,
            bandwidth: payload.bandwidth,
            requests: payload.requests,
            errors: payload.errors,
            data: payload.data,
            credential: None,
        }
    }
}

impl Session {
    /// Handle to a session whose ids were reported by an earlier response.
    pub fn reference(credential: Credential, digger: u64, id: u64) -> Self {
        Self {
            id,
            digger: Some(digger),
            credential: Some(credential),
            ..Self::default()
        }
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Owning digger, when known.
    pub const fn digger(&self) -> Option<u64> {
        self.digger
    }

    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// `None` while the run is still in progress.
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub const fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Elapsed runtime in seconds.
    pub const fn runtime(&self) -> u64 {
        self.runtime
    }

    pub const fn bandwidth(&self) -> u64 {
        self.bandwidth
    }

    pub const fn requests(&self) -> u64 {
        self.requests
    }

    pub const fn errors(&self) -> u64 {
        self.errors
    }

    /// Scraped payload; `Value::Null` until fetched.
    pub const fn data(&self) -> &Value {
        &self.data
    }

    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Returns a snapshot carrying freshly fetched scraped data.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

impl Bind for Session {
    fn bind(&mut self, binding: &Binding) {
        self.credential = Some(binding.credential().clone());
        if self.digger.is_none() {
            self.digger = binding.digger();
        }
    }
}

impl Resource for Session {
    const KIND: &'static str = "session";

    fn id(&self) -> u64 {
        self.id
    }

    fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}
