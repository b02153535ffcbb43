// crates/citygeo-core/src/remote/transport.rs
use crate::error::Result;
use async_trait::async_trait;

/// One outbound autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest<'a> {
    /// Query text exactly as the caller typed it.
    pub query: &'a str,
    pub limit: usize,
    pub lang: &'a str,
}

/// The network seam of the Remote Resolver.
///
/// Implementations return the raw response body on a 2xx answer and an error
/// for everything else: [`crate::GeoError::Status`] for other status codes,
/// [`crate::GeoError::Timeout`] when the configured deadline passes, and
/// [`crate::GeoError::Transport`] for connection-level failures.
#[async_trait]
pub trait GeocodeTransport: Send + Sync {
    async fn fetch(&self, request: GeocodeRequest<'_>) -> Result<String>;
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::{GeocodeRequest, GeocodeTransport};
    use crate::error::{GeoError, Result};
    use crate::remote::RemoteConfig;
    use async_trait::async_trait;
    use std::time::Duration;

    /// `reqwest`-backed transport: `GET {base_url}?q=..&limit=..&lang=..`.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::Client,
        base_url: String,
        timeout: Duration,
    }

    impl HttpTransport {
        pub fn new(config: &RemoteConfig) -> Result<Self> {
            let client = reqwest::Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent.as_str())
                .build()
                .map_err(|e| GeoError::Transport(e.to_string()))?;

            Ok(Self {
                client,
                base_url: config.base_url.clone(),
                timeout: config.timeout,
            })
        }

        fn map_err(&self, e: reqwest::Error) -> GeoError {
            if e.is_timeout() {
                GeoError::Timeout(self.timeout)
            } else if let Some(status) = e.status() {
                GeoError::Status(status.as_u16())
            } else {
                GeoError::Transport(e.to_string())
            }
        }
    }

    #[async_trait]
    impl GeocodeTransport for HttpTransport {
        async fn fetch(&self, request: GeocodeRequest<'_>) -> Result<String> {
            let limit = request.limit.to_string();
            let response = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("q", request.query),
                    ("limit", limit.as_str()),
                    ("lang", request.lang),
                ])
                .send()
                .await
                .map_err(|e| self.map_err(e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(GeoError::Status(status.as_u16()));
            }

            response.text().await.map_err(|e| self.map_err(e))
        }
    }
}
