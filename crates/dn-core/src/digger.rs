//! Diggers: scraper definitions that belong to a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::binding::{Bind, Binding};
use crate::credential::Credential;
use crate::fields::Fields;
use crate::resource::{Replace, Resource};
use crate::timestamp;
use crate::wire::{lenient_text, nullable, optional_id};

/// A digger as last seen on the server.
///
/// `status`, `bandwidth`, `calls`, `requests` and `last_session` are
/// maintained by the server and have no setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digger {
    #[serde(default, deserialize_with = "nullable")]
    id: u64,
    #[serde(
        default,
        deserialize_with = "optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    project: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    url: String,
    #[serde(default, deserialize_with = "nullable")]
    config: String,
    #[serde(default, deserialize_with = "nullable")]
    status: String,
    #[serde(default, with = "timestamp")]
    schedule_from: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp")]
    schedule_to: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_text")]
    bandwidth: String,
    #[serde(default, deserialize_with = "nullable")]
    calls: u64,
    #[serde(default, deserialize_with = "nullable")]
    requests: u64,
    #[serde(default, deserialize_with = "optional_id")]
    last_session: Option<u64>,
    #[serde(skip)]
    credential: Option<Credential>,
}

impl Digger {
    /// Handle to a digger whose id was reported by an earlier response.
    pub fn reference(credential: Credential, id: u64) -> Self {
        Self {
            id,
            credential: Some(credential),
            ..Self::default()
        }
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Owning project, when known.
    pub const fn project(&self) -> Option<u64> {
        self.project
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub const fn schedule_from(&self) -> Option<DateTime<Utc>> {
        self.schedule_from
    }

    pub const fn schedule_to(&self) -> Option<DateTime<Utc>> {
        self.schedule_to
    }

    pub fn bandwidth(&self) -> &str {
        &self.bandwidth
    }

    pub const fn calls(&self) -> u64 {
        self.calls
    }

    pub const fn requests(&self) -> u64 {
        self.requests
    }

    pub const fn last_session(&self) -> Option<u64> {
        self.last_session
    }

    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_config(&mut self, config: impl Into<String>) {
        self.config = config.into();
    }

    /// Sets the scheduling window; `None` clears a bound.
    pub fn set_schedule(&mut self, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) {
        self.schedule_from = from;
        self.schedule_to = to;
    }
}

impl Bind for Digger {
    fn bind(&mut self, binding: &Binding) {
        self.credential = Some(binding.credential().clone());
        if self.project.is_none() {
            self.project = binding.project();
        }
    }
}

impl Resource for Digger {
    const KIND: &'static str = "digger";

    fn id(&self) -> u64 {
        self.id
    }

    fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

impl Replace for Digger {
    fn replace_fields(&self) -> Fields {
        let mut fields = Fields::new()
            .with("name", self.name.as_str())
            .with("url", self.url.as_str())
            .with("config", self.config.as_str())
            .with("schedule_from", encode_time(self.schedule_from))
            .with("schedule_to", encode_time(self.schedule_to));
        if let Some(project) = self.project {
            fields.insert("project", project);
        }
        fields
    }
}

fn encode_time(value: Option<DateTime<Utc>>) -> Value {
    value.map_or(Value::Null, |dt| Value::String(timestamp::format(&dt)))
}

/// The writable subset of a digger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiggerChanges {
    name: Option<String>,
    url: Option<String>,
    config: Option<String>,
    schedule_from: Option<DateTime<Utc>>,
    schedule_to: Option<DateTime<Utc>>,
}

impl DiggerChanges {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    #[must_use]
    pub fn schedule_from(mut self, from: DateTime<Utc>) -> Self {
        self.schedule_from = Some(from);
        self
    }

    #[must_use]
    pub fn schedule_to(mut self, to: DateTime<Utc>) -> Self {
        self.schedule_to = Some(to);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.config.is_none()
            && self.schedule_from.is_none()
            && self.schedule_to.is_none()
    }

    /// Applies the changes to a local snapshot ahead of a full replace.
    pub fn apply(&self, digger: &mut Digger) {
        if let Some(name) = &self.name {
            digger.set_name(name.clone());
        }
        if let Some(url) = &self.url {
            digger.set_url(url.clone());
        }
        if let Some(config) = &self.config {
            digger.set_config(config.clone());
        }
        let from = self.schedule_from.or(digger.schedule_from());
        let to = self.schedule_to.or(digger.schedule_to());
        digger.set_schedule(from, to);
    }
}

impl From<DiggerChanges> for Fields {
    fn from(changes: DiggerChanges) -> Self {
        let mut fields = Self::new();
        if let Some(name) = changes.name {
            fields.insert("name", name);
        }
        if let Some(url) = changes.url {
            fields.insert("url", url);
        }
        if let Some(config) = changes.config {
            fields.insert("config", config);
        }
        if let Some(from) = changes.schedule_from {
            fields.insert("schedule_from", timestamp::format(&from));
        }
        if let Some(to) = changes.schedule_to {
            fields.insert("schedule_to", timestamp::format(&to));
        }
        fields
    }
}
