//! Projects: the root of the resource hierarchy.

use serde::{Deserialize, Serialize};

use crate::binding::{Bind, Binding};
use crate::credential::Credential;
use crate::fields::Fields;
use crate::resource::{Replace, Resource};
use crate::wire::nullable;

/// A project as last seen on the server.
///
/// Diggers are not embedded; fetch them through the client when needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "nullable")]
    id: u64,
    #[serde(default, deserialize_with = "nullable")]
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    description: String,
    #[serde(skip)]
    credential: Option<Credential>,
}

impl Project {
    /// Handle to a project whose id was reported by an earlier response.
    pub const fn reference(credential: Credential, id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            credential: Some(credential),
        }
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl Bind for Project {
    fn bind(&mut self, binding: &Binding) {
        self.credential = Some(binding.credential().clone());
    }
}

impl Resource for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> u64 {
        self.id
    }

    fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

impl Replace for Project {
    fn replace_fields(&self) -> Fields {
        Fields::new()
            .with("name", self.name.as_str())
            .with("description", self.description.as_str())
    }
}

/// The writable subset of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    name: Option<String>,
    description: Option<String>,
}

impl ProjectChanges {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Applies the changes to a local snapshot ahead of a full replace.
    pub fn apply(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.set_name(name.clone());
        }
        if let Some(description) = &self.description {
            project.set_description(description.clone());
        }
    }
}

impl From<ProjectChanges> for Fields {
    fn from(changes: ProjectChanges) -> Self {
        let mut fields = Self::new();
        if let Some(name) = changes.name {
            fields.insert("name", name);
        }
        if let Some(description) = changes.description {
            fields.insert("description", description);
        }
        fields
    }
}
