//! Request gateway - the single seam between the editor and the service

use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use super::endpoint::Endpoint;
use super::error::ServiceError;

/// Moves one JSON request to the service and back.
///
/// Implemented by [`HttpTransport`] in production and by in-memory fakes in
/// tests. The returned future must be `Send` so calls can run as spawned
/// tasks.
pub trait Transport: Send + Sync + 'static {
    fn post(
        &self,
        path: &'static str,
        body: Value,
    ) -> impl Future<Output = Result<Value, ServiceError>> + Send;
}

/// Typed, normalizing wrapper around a [`Transport`]
///
/// Serializes the payload, posts it and decodes the endpoint's response
/// shape. No retries; timeouts are whatever the transport enforces.
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn call<E: Endpoint>(
        &self,
        request: &E::Request,
    ) -> Result<E::Response, ServiceError> {
        let body = serde_json::to_value(request).map_err(|e| ServiceError::Encode {
            endpoint: E::PATH,
            cause: e.to_string(),
        })?;

        tracing::debug!(endpoint = E::PATH, "gateway request");
        let response = self.transport.post(E::PATH, body).await?;

        serde_json::from_value(response).map_err(|e| ServiceError::Decode {
            endpoint: E::PATH,
            cause: e.to_string(),
        })
    }
}

/// HTTP transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    /// Build a transport for `base_url`, optionally bounding every request
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let base = Url::parse(base_url).map_err(|e| ServiceError::InvalidUrl {
            url: base_url.to_string(),
            cause: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ServiceError::Transport {
            endpoint: "<client>",
            cause: e.to_string(),
        })?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl Transport for HttpTransport {
    async fn post(&self, path: &'static str, body: Value) -> Result<Value, ServiceError> {
        let url = self.base.join(path).map_err(|e| ServiceError::InvalidUrl {
            url: format!("{}{}", self.base, path),
            cause: e.to_string(),
        })?;

        let transport_err = |e: reqwest::Error| ServiceError::Transport {
            endpoint: path,
            cause: e.to_string(),
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                endpoint: path,
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| ServiceError::Decode {
            endpoint: path,
            cause: e.to_string(),
        })
    }
}

/// Resolve a resource locator returned by the service against its base URL
///
/// The service hands out site-relative paths such as `/static/audio/x.mp3`;
/// absolute URLs pass through unchanged.
pub fn resolve_locator(base_url: &str, locator: &str) -> Result<Url, ServiceError> {
    let invalid = |cause: String| ServiceError::InvalidUrl {
        url: locator.to_string(),
        cause,
    };
    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    base.join(locator).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_locator() {
        let url = resolve_locator("http://127.0.0.1:5000", "/static/audio/abc.mp3").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/static/audio/abc.mp3");
    }

    #[test]
    fn test_resolve_absolute_locator_passes_through() {
        let url = resolve_locator("http://127.0.0.1:5000", "https://cdn.example/a.mp3").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example/a.mp3");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpTransport::new("not a url", None),
            Err(ServiceError::InvalidUrl { .. })
        ));
    }
}
