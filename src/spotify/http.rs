use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::CatalogError,
    types::{AccessToken, ApiErrorResponse},
};

pub const API_VERSION: &str = "/v1";

/// Builds the single HTTP client shared by the credentials flow and all
/// resource calls.
pub fn build_http_client(timeout: Duration) -> Result<Client, CatalogError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CatalogError::transport(format!("cannot build HTTP client - {e}")))
}

/// Read-only client for the versioned catalog endpoints.
///
/// Every call takes the bearer token explicitly; the client never
/// authenticates or retries by itself. Responses are classified as follows:
///
/// - connection or request building failures become `Transport`
/// - statuses in `200..300` are decoded into the target type, a body that does
///   not decode becomes `Decode`
/// - anything else becomes `Status` with the HTTP status as code and the
///   server message when the body carries one
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
}

impl SpotifyClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Issues `GET {base_url}/v1{path}` with the bearer token and query pairs.
    ///
    /// `resource` names the endpoint family in fallback error messages.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}{}", self.base_url, API_VERSION, path);
        debug!(%url, ?query, "sending catalog request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.as_str())
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::transport(e.to_string()))?;

        decode_response(response, resource).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T, CatalogError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::transport(format!("error reading response body - {e}")))?;
    debug!(%status, bytes = body.len(), "received catalog response");

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .ok()
            .and_then(ApiErrorResponse::message)
            .unwrap_or_else(|| format!("error in {resource} API"));
        return Err(CatalogError::status(status.as_u16(), message));
    }

    serde_json::from_str(&body)
        .map_err(|e| CatalogError::decode(format!("error parsing {resource} response - {e}")))
}
