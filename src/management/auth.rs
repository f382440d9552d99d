use std::future::Future;

use tracing::{debug, warn};

use crate::{
    error::CatalogError,
    spotify::Authenticator,
    types::{AccessToken, Authentication},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
    Reauthenticating,
    /// The last refresh failed and the previous token is still held. A later
    /// call that succeeds with that token moves back to `Authenticated`.
    Failed,
}

/// Owns the single current token and runs calls that need it.
///
/// The token is only ever replaced as a whole after a successful
/// authentication. A failed authentication leaves the previous token in place.
pub struct AuthManager<A> {
    authenticator: A,
    authentication: Option<Authentication>,
    status: AuthStatus,
}

impl<A: Authenticator> AuthManager<A> {
    pub fn new(authenticator: A) -> Self {
        AuthManager {
            authenticator,
            authentication: None,
            status: AuthStatus::Unauthenticated,
        }
    }

    pub fn with_authentication(authenticator: A, authentication: Authentication) -> Self {
        AuthManager {
            authenticator,
            authentication: Some(authentication),
            status: AuthStatus::Authenticated,
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn current(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.authentication.as_ref().map(|a| &a.access_token)
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Runs one authentication round trip regardless of the token held.
    pub async fn authenticate(&mut self) -> Result<AccessToken, CatalogError> {
        let refreshing = self.authentication.is_some();
        if refreshing {
            self.status = AuthStatus::Reauthenticating;
        }

        match self.authenticator.authenticate().await {
            Ok(authentication) => {
                debug!(
                    token_type = %authentication.token_type,
                    expires_at = %authentication.expires_at(),
                    "authenticated"
                );
                let token = authentication.access_token.clone();
                self.authentication = Some(authentication);
                self.status = AuthStatus::Authenticated;
                Ok(token)
            }
            Err(err) => {
                warn!(error = %err, refreshing, "authentication failed");
                if refreshing {
                    self.status = AuthStatus::Failed;
                }
                Err(err)
            }
        }
    }

    async fn ensure_authenticated(&mut self) -> Result<AccessToken, CatalogError> {
        if let Some(token) = self.access_token().cloned() {
            return Ok(token);
        }
        self.authenticate().await
    }

    /// Runs `operation` with a valid token, re-authenticating once on 401/403.
    ///
    /// 1. With no token held, authenticates first; a failure is returned
    ///    without running `operation`.
    /// 2. Runs `operation` with the current token.
    /// 3. If it fails with a 401 or 403 status, forces one re-authentication
    ///    and runs `operation` exactly once more, returning whatever that
    ///    second attempt yields. A failed re-authentication returns the
    ///    authentication error instead of the 401/403.
    /// 4. Every other error is returned as is, without retrying.
    ///
    /// A successful `operation` marks the held token as `Authenticated` again.
    pub async fn execute_with_auth_retry<T, F, Fut>(&mut self, mut operation: F) -> Result<T, CatalogError>
    where
        F: FnMut(AccessToken) -> Fut,
        Fut: Future<Output = Result<T, CatalogError>>,
    {
        let token = self.ensure_authenticated().await?;

        let err = match operation(token).await {
            Ok(value) => {
                self.status = AuthStatus::Authenticated;
                return Ok(value);
            }
            Err(err) => err,
        };

        if !err.is_auth_failure() {
            debug!(error = %err, "operation failed, not retrying");
            return Err(err);
        }

        warn!(error = %err, "operation rejected the token, re-authenticating once");
        let token = self.authenticate().await?;
        operation(token).await
    }
}
