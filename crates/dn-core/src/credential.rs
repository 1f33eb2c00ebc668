//! API key credential.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Credential validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The provided API key was unusable.
    #[error("invalid API key: {reason}")]
    InvalidApiKey { reason: &'static str },
}

/// An API key used to authorize every request.
///
/// # Thread Safety
///
/// Cloning is cheap: clones share one immutable key. Entities fetched with a
/// credential keep a clone of it so they can authenticate follow-up calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    key: Arc<str>,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Creates a credential from an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or whitespace-only.
    pub fn new(key: impl Into<String>) -> Result<Self, CredentialError> {
        let key = key.into();

        if key.is_empty() {
            return Err(CredentialError::InvalidApiKey {
                reason: "API key cannot be empty",
            });
        }
        if key.trim().is_empty() {
            return Err(CredentialError::InvalidApiKey {
                reason: "API key cannot be whitespace-only",
            });
        }

        Ok(Self {
            key: Arc::from(key.trim()),
        })
    }

    /// Returns the raw key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.key)
    }
}
