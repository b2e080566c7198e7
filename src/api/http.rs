//! Reqwest-backed employee source.
//!
//! This adapter owns transport details only: URL construction, the request
//! timeout, HTTP status mapping and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::Instrument;
use url::Url;

use super::error::ApiError;
use super::source::{EmployeeSource, EmployeesPage, PageRequest};
use crate::domain::Employee;

/// Default base URL of the public directory API.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Default client-side request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Employee source that issues `GET` requests against the directory API.
#[derive(Debug, Clone)]
pub struct HttpEmployeeSource {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeSource {
    /// Builds a source with a reqwest client using the given timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unknown`] when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wraps a caller-built client, for custom proxies, TLS or middleware.
    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url: normalize_base(base_url),
        }
    }

    /// Parses `base_url` and builds a source with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unknown`] for an unparsable URL or client build failure.
    pub fn from_base(base_url: &str) -> Result<Self, ApiError> {
        let url = Url::parse(base_url)
            .map_err(|e| ApiError::Unknown(format!("invalid base URL {base_url:?}: {e}")))?;
        Self::new(url, DEFAULT_TIMEOUT)
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let span = tracing::debug_span!("api_get", url = %url);
        async move {
            tracing::debug!(method = "GET", "api request");

            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(map_transport_error)?;

            let status = response.status();
            tracing::debug!(status = status.as_u16(), "api response");

            let body = response.bytes().await.map_err(map_transport_error)?;
            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), "api request rejected");
                return Err(map_status_error(status));
            }

            decode(body.as_ref())
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn get_employees(&self, page: PageRequest) -> Result<EmployeesPage, ApiError> {
        let url = list_url(&self.base_url, page)?;
        let page: EmployeesPage = self.get_json(url).await?;
        tracing::debug!(count = page.users.len(), total = page.total, "employees page received");
        Ok(page)
    }

    async fn search_employees(&self, query: &str, limit: u32) -> Result<EmployeesPage, ApiError> {
        let url = search_url(&self.base_url, query, limit)?;
        self.get_json(url).await
    }

    async fn get_employee(&self, id: u64) -> Result<Employee, ApiError> {
        let url = employee_url(&self.base_url, id)?;
        self.get_json(url).await
    }
}

/// Ensures the base path ends in `/` so relative joins append instead of replace.
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn join(base: &Url, path: &str) -> Result<Url, ApiError> {
    base.join(path)
        .map_err(|e| ApiError::Unknown(format!("invalid request path {path:?}: {e}")))
}

fn list_url(base: &Url, page: PageRequest) -> Result<Url, ApiError> {
    let mut url = join(base, "users")?;
    url.query_pairs_mut()
        .append_pair("limit", &page.limit.to_string())
        .append_pair("skip", &page.skip.to_string());
    Ok(url)
}

fn search_url(base: &Url, query: &str, limit: u32) -> Result<Url, ApiError> {
    let mut url = join(base, "users/search")?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("limit", &limit.to_string());
    Ok(url)
}

fn employee_url(base: &Url, id: u64) -> Result<Url, ApiError> {
    join(base, &format!("users/{id}"))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout(error.to_string())
    } else if let Some(status) = error.status() {
        ApiError::Http {
            status: status.as_u16(),
        }
    } else if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else if error.is_connect() || error.is_request() || error.is_body() {
        ApiError::Network(error.to_string())
    } else {
        ApiError::Unknown(error.to_string())
    }
}

/// Any non-2xx response is an HTTP error, including 408 and 504. Only a
/// client-side timeout with no response maps to [`ApiError::Timeout`].
fn map_status_error(status: StatusCode) -> ApiError {
    ApiError::Http {
        status: status.as_u16(),
    }
}
