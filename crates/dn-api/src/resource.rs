//! Generic CRUD executor.
//!
//! Every verb follows the same sequence: build the request with auth headers,
//! send it, drain the body, compare the status against the one verb-specific
//! success code, and only then decode. Decoded entities are passed through the
//! [`Binding`] before they are returned.

use dn_core::{Binding, Fields, Replace, Resource, bind, bind_all, paths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::transport::{Method, Request, Transport};

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;
const STATUS_NO_CONTENT: u16 = 204;

/// Executes requests for one credential and parent context.
pub struct ResourceClient<'a, T: ?Sized> {
    transport: &'a T,
    base_url: &'a str,
    binding: Binding,
}

impl<'a, T: Transport + ?Sized> ResourceClient<'a, T> {
    pub const fn new(transport: &'a T, base_url: &'a str, binding: Binding) -> Self {
        Self {
            transport,
            base_url,
            binding,
        }
    }

    pub const fn binding(&self) -> &Binding {
        &self.binding
    }

    /// GET a collection. An empty array, `null` or empty body is an empty list.
    pub fn list<E: Resource>(&self, path: &str) -> Result<Vec<E>> {
        let body = self.execute(Method::GET, path, None, STATUS_OK)?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Option<Vec<E>> = decode(E::KIND, &body)?;
        Ok(bind_all(items.unwrap_or_default(), &self.binding))
    }

    /// POST a field map, expecting 201 and the created entity.
    pub fn create<E: Resource>(&self, path: &str, fields: &Fields) -> Result<E> {
        let body = self.execute(Method::POST, path, Some(encode(fields)?), STATUS_CREATED)?;
        self.decode_entity(&body)
    }

    /// GET a single entity; the result replaces every field.
    pub fn get<E: Resource>(&self, path: &str) -> Result<E> {
        let body = self.execute(Method::GET, path, None, STATUS_OK)?;
        self.decode_entity(&body)
    }

    /// PUT every writable field of the entity.
    pub fn replace<E: Replace>(&self, path: &str, entity: &E) -> Result<E> {
        let fields = entity.replace_fields();
        let body = self.execute(Method::PUT, path, Some(encode(&fields)?), STATUS_OK)?;
        self.decode_entity(&body)
    }

    /// PATCH only the given fields.
    pub fn merge<E: Resource>(&self, path: &str, fields: &Fields) -> Result<E> {
        let body = self.execute(Method::PATCH, path, Some(encode(fields)?), STATUS_OK)?;
        self.decode_entity(&body)
    }

    /// DELETE, expecting 204. Any body is ignored.
    pub fn remove(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None, STATUS_NO_CONTENT)?;
        Ok(())
    }

    /// GET untyped JSON.
    pub fn fetch_value(&self, path: &str) -> Result<Value> {
        let body = self.execute(Method::GET, path, None, STATUS_OK)?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        decode("data", &body)
    }

    fn decode_entity<E: Resource>(&self, body: &str) -> Result<E> {
        let entity: E = decode(E::KIND, body)?;
        Ok(bind(entity, &self.binding))
    }

    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        expected: u16,
    ) -> Result<String> {
        let url = paths::join(self.base_url, path);
        let mut request = Request::new(method.clone(), url)
            .header("Authorization", self.binding.credential().authorization())
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        tracing::debug!(%method, path, "sending request");
        let response = self.transport.send(request)?;
        let status = response.status();
        let body = response.into_body();
        tracing::debug!(%method, path, status, body_len = body.len(), "received response");

        if status != expected {
            tracing::warn!(%method, path, status, expected, "unexpected response status");
            return Err(ApiError::Api { status, body });
        }
        Ok(body)
    }
}

fn encode<S: Serialize + ?Sized>(value: &S) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(ApiError::Encode)
}

fn decode<D: DeserializeOwned>(entity: &'static str, body: &str) -> Result<D> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { entity, source })
}
