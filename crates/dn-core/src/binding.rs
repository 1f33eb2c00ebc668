//! Propagation of parent context into fetched entities.
//!
//! The wire format does not carry the API key and only sometimes carries the
//! parent id. After every fetch the client runs a [`Binding`] over the decoded
//! entities so each one can authenticate its own follow-up calls.

use crate::credential::Credential;

/// Context copied into entities after they are decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    credential: Credential,
    project: Option<u64>,
    digger: Option<u64>,
}

impl Binding {
    /// Top-level context: only the credential.
    pub const fn new(credential: Credential) -> Self {
        Self {
            credential,
            project: None,
            digger: None,
        }
    }

    /// Context for children of a project.
    #[must_use]
    pub fn with_project(mut self, project: u64) -> Self {
        self.project = Some(project);
        self
    }

    /// Context for children of a digger.
    #[must_use]
    pub fn with_digger(mut self, digger: u64) -> Self {
        self.digger = Some(digger);
        self
    }

    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    pub const fn project(&self) -> Option<u64> {
        self.project
    }

    pub const fn digger(&self) -> Option<u64> {
        self.digger
    }
}

/// Entities that accept parent context after decoding.
///
/// Implementations always overwrite the credential and only fill parent ids
/// the payload left empty.
pub trait Bind {
    fn bind(&mut self, binding: &Binding);
}

/// Binds a single entity, returning it.
#[must_use]
pub fn bind<E: Bind>(mut entity: E, binding: &Binding) -> E {
    entity.bind(binding);
    entity
}

/// Binds every entity in a list, preserving order.
#[must_use]
pub fn bind_all<E: Bind>(mut entities: Vec<E>, binding: &Binding) -> Vec<E> {
    for entity in &mut entities {
        entity.bind(binding);
    }
    entities
}
