//! `reqwest`-backed transport.

use std::fmt;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::error::TransportError;
use crate::transport::{Request, Response, Transport};

/// Default request timeout for API calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP transport.
///
/// Wraps an async `reqwest::Client` and an owned current-thread runtime, so
/// each [`Transport::send`] blocks until the full response body has been read.
/// Do not call it from inside another tokio runtime.
///
/// # Thread Safety
///
/// The transport is `Send + Sync`; concurrent callers share the connection
/// pool.
pub struct HttpTransport {
    http: reqwest::Client,
    runtime: Runtime,
    timeout: Duration,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Creates a transport with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(TransportError::Runtime)?;

        let http = {
            let _guard = runtime.enter();
            reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(TransportError::ClientBuild)?
        };

        Ok(Self {
            http,
            runtime,
            timeout,
        })
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.runtime.block_on(async {
            let mut builder = self
                .http
                .request(request.method().clone(), request.url());
            for (name, value) in request.headers() {
                builder = builder.header(*name, value.as_str());
            }
            if let Some(body) = request.body_bytes() {
                builder = builder.body(body.to_vec());
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, TransportError>(Response::new(status, body))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::transport::Method;

    #[test]
    fn timeout_is_configurable() {
        let transport = HttpTransport::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(transport.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn debug_is_terse() {
        let transport = HttpTransport::new().unwrap();
        assert!(format!("{transport:?}").starts_with("HttpTransport"));
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let transport = HttpTransport::with_timeout(Duration::from_secs(2)).unwrap();
        let result = transport.send(Request::new(Method::GET, "http://127.0.0.1:9/projects/"));
        assert!(matches!(result, Err(TransportError::Http(_))));
    }
}
