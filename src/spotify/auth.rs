use std::future::Future;

use reqwest::{Client, StatusCode, header};
use tracing::debug;

use crate::{
    error::CatalogError,
    types::{Authentication, ClientCredentials, TokenErrorResponse, TokenResponse},
};

const TOKEN_PATH: &str = "/api/token";

/// Source of fresh access tokens.
///
/// Implementations perform one complete authentication round trip per call and
/// never touch any cached state; storing the returned token is the caller's
/// job (see [`crate::management::AuthManager`]).
pub trait Authenticator {
    /// Obtains a new token, classifying any failure as a [`CatalogError`].
    fn authenticate(&self) -> impl Future<Output = Result<Authentication, CatalogError>>;
}

/// OAuth 2.0 client credentials grant against the Spotify accounts service.
///
/// The application authenticates as itself using its client id and secret,
/// which yields an app-only bearer token suitable for public catalog data.
/// The flow is stateless apart from its configured credentials.
///
/// # Example
///
/// ```
/// let flow = ClientCredentialsFlow::new(
///     http,
///     "https://accounts.spotify.com",
///     ClientCredentials::new("id", "secret"),
/// );
/// let auth = flow.authenticate().await?;
/// println!("token expires in {}s", auth.expires_in);
/// ```
#[derive(Debug, Clone)]
pub struct ClientCredentialsFlow {
    http: Client,
    accounts_url: String,
    credentials: ClientCredentials,
}

impl ClientCredentialsFlow {
    pub fn new(http: Client, accounts_url: impl Into<String>, credentials: ClientCredentials) -> Self {
        Self {
            http,
            accounts_url: accounts_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.accounts_url, TOKEN_PATH)
    }

    /// Performs the client credentials grant.
    ///
    /// Sends `POST {accounts_url}/api/token` with a form-urlencoded body of
    /// `grant_type=client_credentials` and HTTP Basic authorization built from
    /// the client id and secret.
    ///
    /// # Returns
    ///
    /// - `Ok(Authentication)` - a non-empty access token with its type and lifetime
    /// - `Err(CatalogError::Transport)` - the request could not be built or sent
    /// - `Err(CatalogError::Status)` - the accounts service answered with anything
    ///   but 200; `error` and `error_description` from the body become message
    ///   and details when present
    /// - `Err(CatalogError::Decode)` - a 200 answer whose body is malformed or
    ///   carries an empty `access_token`
    ///
    /// # Side Effects
    ///
    /// None besides the network call. Nothing is cached here.
    pub async fn request_token(&self) -> Result<Authentication, CatalogError> {
        let url = self.token_url();
        debug!(%url, "requesting client credentials token");

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, self.credentials.authorization_header())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                CatalogError::transport(e.to_string()).context("error connecting to authorization client")
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CatalogError::transport(e.to_string()).context("error reading authorization response")
        })?;
        debug!(%status, "received authorization response");

        if status != StatusCode::OK {
            return Err(authentication_failure(status, &body));
        }

        parse_token_body(&body)
    }
}

impl Authenticator for ClientCredentialsFlow {
    async fn authenticate(&self) -> Result<Authentication, CatalogError> {
        self.request_token().await
    }
}

fn authentication_failure(status: StatusCode, body: &str) -> CatalogError {
    match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(err) if !err.error.is_empty() => CatalogError::Status {
            code: status.as_u16(),
            message: err.error,
            details: Some(err.error_description).filter(|d| !d.is_empty()),
        },
        _ => CatalogError::Status {
            code: status.as_u16(),
            message: format!("authentication failed with HTTP status {status}"),
            details: Some("no details were provided".to_string()),
        },
    }
}

fn parse_token_body(body: &str) -> Result<Authentication, CatalogError> {
    let token: TokenResponse = serde_json::from_str(body)
        .map_err(|e| CatalogError::decode(format!("error obtaining auth response - {e}")))?;

    if token.access_token.is_empty() {
        return Err(CatalogError::decode(
            "error obtaining auth response - access token is empty",
        ));
    }

    Ok(token.into())
}
