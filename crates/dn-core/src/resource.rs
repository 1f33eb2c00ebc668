//! The shape shared by every synchronized entity.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::binding::Bind;
use crate::credential::Credential;
use crate::fields::Fields;

/// A typed remote resource.
pub trait Resource: Bind + DeserializeOwned + Serialize {
    /// Lower-case entity name used in errors and logs.
    const KIND: &'static str;

    /// Server-assigned identity; zero until the server has assigned one.
    fn id(&self) -> u64;

    /// Credential bound by the last fetch, if any.
    fn credential(&self) -> Option<&Credential>;
}

/// A resource that can be written back whole (PUT).
pub trait Replace: Resource {
    /// Every writable field, including cleared ones. Server-maintained
    /// fields are never included.
    fn replace_fields(&self) -> Fields;
}
