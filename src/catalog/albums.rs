use crate::{
    error::CatalogError,
    market::market_from_country_name,
    spotify::Authenticator,
    types::{Album, NewReleases, Paginated, SimplifiedTrack},
    utils::{self, MAX_ALBUM_IDS},
};

use super::Catalog;

impl<A: Authenticator> Catalog<A> {
    /// Retrieves a single album with its first page of tracks.
    ///
    /// # Arguments
    ///
    /// * `country_market_name` - Optional country name restricting availability
    /// * `album_id` - Spotify ID of the album
    ///
    /// # Errors
    ///
    /// `Validation` for an unknown country or a malformed ID, before any request.
    pub async fn get_album(&mut self, country_market_name: Option<&str>, album_id: &str) -> Result<Album, CatalogError> {
        utils::validate_id("album", album_id)?;
        let market = market_from_country_name(country_market_name).map_err(|e| e.context("error getting album"))?;

        let client = &self.client;
        let market = market.as_ref();
        self.auth
            .execute_with_auth_retry(|token| async move { client.get_album(&token, market, album_id).await })
            .await
    }

    /// Retrieves up to 20 albums in one request.
    ///
    /// # Arguments
    ///
    /// * `country_market_name` - Optional country name restricting availability
    /// * `album_ids` - 1 to 20 Spotify album IDs
    ///
    /// # Returns
    ///
    /// The albums found, in request order. IDs unknown to Spotify are left out.
    pub async fn get_albums<S: AsRef<str>>(
        &mut self,
        country_market_name: Option<&str>,
        album_ids: &[S],
    ) -> Result<Vec<Album>, CatalogError> {
        let ids = utils::join_ids("album", album_ids, MAX_ALBUM_IDS)?;
        let market = market_from_country_name(country_market_name).map_err(|e| e.context("error getting albums"))?;

        let client = &self.client;
        let market = market.as_ref();
        let ids = ids.as_str();
        self.auth
            .execute_with_auth_retry(|token| async move { client.get_albums(&token, market, ids).await })
            .await
    }

    /// Lists a page of an album's tracks.
    ///
    /// # Arguments
    ///
    /// * `country_market_name` - Optional country name restricting availability
    /// * `limit` - Page size, 0 to 50
    /// * `offset` - Index of the first track, 0 or above
    /// * `album_id` - Spotify ID of the album
    ///
    /// # Errors
    ///
    /// `Validation` for out of range paging values, an unknown country or a
    /// malformed ID. Nothing is sent in that case, not even a token request.
    pub async fn get_album_tracks(
        &mut self,
        country_market_name: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
        album_id: &str,
    ) -> Result<Paginated<SimplifiedTrack>, CatalogError> {
        utils::validate_id("album", album_id)?;
        let market =
            market_from_country_name(country_market_name).map_err(|e| e.context("error getting album tracks"))?;
        let page = utils::validate_pagination(limit, offset)
            .map_err(|e| e.context(format!("error creating album tracks request for album ID - {album_id}")))?;

        let client = &self.client;
        let market = market.as_ref();
        self.auth
            .execute_with_auth_retry(|token| async move {
                client.get_album_tracks(&token, market, page, album_id).await
            })
            .await
    }

    /// Lists a page of new album releases.
    pub async fn get_new_releases(&mut self, limit: Option<i64>, offset: Option<i64>) -> Result<NewReleases, CatalogError> {
        let page = utils::validate_pagination(limit, offset)
            .map_err(|e| e.context("error creating new releases request"))?;

        let client = &self.client;
        self.auth
            .execute_with_auth_retry(|token| async move { client.get_new_releases(&token, page).await })
            .await
    }
}
