//! Catalog service.
//!
//! [`Catalog`] is the facade the CLI talks to. Each operation validates the
//! caller input first (market name, pagination bounds, ID lists) so that bad
//! input never reaches the network, then runs the resource call through
//! [`AuthManager::execute_with_auth_retry`].
//!
//! A `Catalog` owns its [`AuthManager`], which makes it the only holder of the
//! current token. Operations take `&mut self` because a rejected token may be
//! replaced while the call is in flight.

mod albums;
mod artists;
mod tracks;

use crate::{
    management::AuthManager,
    spotify::{Authenticator, ClientCredentialsFlow, SpotifyClient},
};

pub struct Catalog<A = ClientCredentialsFlow> {
    auth: AuthManager<A>,
    client: SpotifyClient,
}

impl<A: Authenticator> Catalog<A> {
    pub fn new(auth: AuthManager<A>, client: SpotifyClient) -> Self {
        Catalog { auth, client }
    }

    pub fn auth(&self) -> &AuthManager<A> {
        &self.auth
    }
}
