use crate::{
    error::CatalogError,
    market::market_from_country_name,
    spotify::Authenticator,
    types::{AlbumGroup, Artist, Paginated, SimplifiedAlbum, Track},
    utils::{self, MAX_ARTIST_IDS},
};

use super::Catalog;

impl<A: Authenticator> Catalog<A> {
    /// Retrieves a single artist.
    ///
    /// # Arguments
    ///
    /// * `artist_id` - Spotify ID of the artist (base62)
    ///
    /// # Errors
    ///
    /// `Validation` for a malformed ID, before any request is sent. Otherwise
    /// whatever [`crate::management::AuthManager::execute_with_auth_retry`]
    /// returns for `GET /v1/artists/{id}`.
    pub async fn get_artist(&mut self, artist_id: &str) -> Result<Artist, CatalogError> {
        utils::validate_id("artist", artist_id)?;

        let client = &self.client;
        self.auth
            .execute_with_auth_retry(|token| async move { client.get_artist(&token, artist_id).await })
            .await
    }

    /// Retrieves up to 50 artists in one request.
    ///
    /// # Arguments
    ///
    /// * `artist_ids` - 1 to 50 Spotify artist IDs
    ///
    /// # Returns
    ///
    /// The artists found, in request order. IDs unknown to Spotify are left out.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty list, more than 50 IDs or a malformed ID.
    pub async fn get_artists<S: AsRef<str>>(&mut self, artist_ids: &[S]) -> Result<Vec<Artist>, CatalogError> {
        let ids = utils::join_ids("artist", artist_ids, MAX_ARTIST_IDS)?;

        let client = &self.client;
        let ids = ids.as_str();
        self.auth
            .execute_with_auth_retry(|token| async move { client.get_artists(&token, ids).await })
            .await
    }

    /// Lists an artist's albums, optionally filtered by album group and market.
    ///
    /// # Arguments
    ///
    /// * `country_market_name` - Country name such as "Brazil"; `None` means no market filter
    /// * `groups` - Album groups to include; empty lets the API decide
    /// * `limit` - Page size, 0 to 50
    /// * `offset` - Index of the first item, 0 or above
    /// * `artist_id` - Spotify ID of the artist
    ///
    /// # Errors
    ///
    /// `Validation` for an unknown country, out of range paging values or a
    /// malformed ID, all checked before authenticating.
    pub async fn get_artist_albums(
        &mut self,
        country_market_name: Option<&str>,
        groups: &[AlbumGroup],
        limit: Option<i64>,
        offset: Option<i64>,
        artist_id: &str,
    ) -> Result<Paginated<SimplifiedAlbum>, CatalogError> {
        utils::validate_id("artist", artist_id)?;
        let market = market_from_country_name(country_market_name)
            .map_err(|e| e.context("error getting artist albums"))?;
        let page = utils::validate_pagination(limit, offset)
            .map_err(|e| e.context(format!("error creating artist albums request for artist ID - {artist_id}")))?;

        let client = &self.client;
        let market = market.as_ref();
        self.auth
            .execute_with_auth_retry(|token| async move {
                client
                    .get_artist_albums(&token, groups, market, page, artist_id)
                    .await
            })
            .await
    }

    /// Retrieves an artist's top tracks.
    ///
    /// # Arguments
    ///
    /// * `country_market_name` - Country whose charts are used, e.g. "Brazil"
    /// * `artist_id` - Spotify ID of the artist
    pub async fn get_artist_top_tracks(
        &mut self,
        country_market_name: Option<&str>,
        artist_id: &str,
    ) -> Result<Vec<Track>, CatalogError> {
        utils::validate_id("artist", artist_id)?;
        let market = market_from_country_name(country_market_name)
            .map_err(|e| e.context("error getting artist top-tracks"))?;

        let client = &self.client;
        let market = market.as_ref();
        self.auth
            .execute_with_auth_retry(|token| async move {
                client.get_artist_top_tracks(&token, market, artist_id).await
            })
            .await
    }
}
