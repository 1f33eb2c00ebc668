//! Typed operations over the project → digger → session hierarchy.

use std::fmt;

use dn_core::{Binding, Credential, Digger, Fields, Project, Resource, Session, paths};

use crate::error::{ApiError, Result, TransportError};
use crate::http::HttpTransport;
use crate::resource::ResourceClient;
use crate::transport::Transport;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.diggernaut.com/api/v1";

/// Diggernaut API client.
///
/// The client holds no credential. Top-level calls take one explicitly;
/// calls on an entity use the credential that was bound to it when it was
/// fetched. Update and refresh calls return new snapshots and never modify
/// the value they were given.
///
/// # Thread Safety
///
/// `Client<T>` is `Sync` whenever the transport is; it keeps no mutable state.
pub struct Client<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client<HttpTransport> {
    /// Creates a client against the production API with default timeouts.
    pub fn new() -> std::result::Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new()?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at another API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn resources(&self, binding: Binding) -> ResourceClient<'_, T> {
        ResourceClient::new(&self.transport, &self.base_url, binding)
    }

    // Projects

    pub fn projects(&self, credential: &Credential) -> Result<Vec<Project>> {
        self.resources(Binding::new(credential.clone()))
            .list(paths::PROJECTS)
    }

    pub fn create_project(
        &self,
        credential: &Credential,
        fields: impl Into<Fields>,
    ) -> Result<Project> {
        self.resources(Binding::new(credential.clone()))
            .create(paths::PROJECTS, &fields.into())
    }

    pub fn project(&self, credential: &Credential, id: u64) -> Result<Project> {
        self.resources(Binding::new(credential.clone()))
            .get(&paths::project(id))
    }

    pub fn refresh_project(&self, project: &Project) -> Result<Project> {
        self.resources(bound(project)?)
            .get(&paths::project(project.id()))
    }

    /// Sends every writable field of `project` (PUT).
    pub fn replace_project(&self, project: &Project) -> Result<Project> {
        self.resources(bound(project)?)
            .replace(&paths::project(project.id()), project)
    }

    /// Sends only `fields` (PATCH).
    pub fn merge_project(&self, project: &Project, fields: impl Into<Fields>) -> Result<Project> {
        self.resources(bound(project)?)
            .merge(&paths::project(project.id()), &fields.into())
    }

    /// Deletes the project. The handle is stale afterwards.
    pub fn delete_project(&self, project: &Project) -> Result<()> {
        self.resources(bound(project)?)
            .remove(&paths::project(project.id()))
    }

    // Diggers

    pub fn diggers(&self, project: &Project) -> Result<Vec<Digger>> {
        self.resources(bound(project)?.with_project(project.id()))
            .list(&paths::project_diggers(project.id()))
    }

    /// Creates a digger under `project`; the `project` field is always set
    /// to the parent's id.
    pub fn create_digger(&self, project: &Project, fields: impl Into<Fields>) -> Result<Digger> {
        let mut fields = fields.into();
        fields.insert("project", project.id());
        self.resources(bound(project)?.with_project(project.id()))
            .create(paths::DIGGERS, &fields)
    }

    pub fn digger(&self, credential: &Credential, id: u64) -> Result<Digger> {
        self.resources(Binding::new(credential.clone()))
            .get(&paths::digger(id))
    }

    pub fn refresh_digger(&self, digger: &Digger) -> Result<Digger> {
        self.resources(digger_binding(digger)?)
            .get(&paths::digger(digger.id()))
    }

    /// Sends every writable field of `digger` (PUT).
    pub fn replace_digger(&self, digger: &Digger) -> Result<Digger> {
        self.resources(digger_binding(digger)?)
            .replace(&paths::digger(digger.id()), digger)
    }

    /// Sends only `fields` (PATCH).
    pub fn merge_digger(&self, digger: &Digger, fields: impl Into<Fields>) -> Result<Digger> {
        self.resources(digger_binding(digger)?)
            .merge(&paths::digger(digger.id()), &fields.into())
    }

    /// Deletes the digger. Refresh the parent's digger list afterwards.
    pub fn delete_digger(&self, digger: &Digger) -> Result<()> {
        self.resources(digger_binding(digger)?)
            .remove(&paths::digger(digger.id()))
    }

    // Sessions

    pub fn sessions(&self, digger: &Digger) -> Result<Vec<Session>> {
        self.resources(bound(digger)?.with_digger(digger.id()))
            .list(&paths::digger_sessions(digger.id()))
    }

    pub fn session(&self, digger: &Digger, id: u64) -> Result<Session> {
        self.resources(bound(digger)?.with_digger(digger.id()))
            .get(&paths::session(digger.id(), id))
    }

    pub fn refresh_session(&self, session: &Session) -> Result<Session> {
        let digger = session_digger(session)?;
        self.resources(bound(session)?.with_digger(digger))
            .get(&paths::session(digger, session.id()))
    }

    /// Fetches the scraped payload and returns a snapshot carrying it.
    pub fn session_data(&self, session: &Session) -> Result<Session> {
        let digger = session_digger(session)?;
        let data = self
            .resources(bound(session)?)
            .fetch_value(&paths::session_data(digger, session.id()))?;
        Ok(session.clone().with_data(data))
    }
}

/// Binding carrying the entity's own credential.
fn bound<E: Resource>(entity: &E) -> Result<Binding> {
    entity
        .credential()
        .cloned()
        .map(Binding::new)
        .ok_or(ApiError::Unbound {
            entity: E::KIND,
            id: entity.id(),
        })
}

fn digger_binding(digger: &Digger) -> Result<Binding> {
    let binding = bound(digger)?;
    Ok(match digger.project() {
        Some(project) => binding.with_project(project),
        None => binding,
    })
}

fn session_digger(session: &Session) -> Result<u64> {
    session.digger().ok_or(ApiError::Unlinked {
        entity: Session::KIND,
        id: session.id(),
        parent: Digger::KIND,
    })
}
