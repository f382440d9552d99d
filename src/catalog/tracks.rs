use crate::{
    error::CatalogError,
    market::market_from_country_name,
    spotify::Authenticator,
    types::Track,
    utils::{self, MAX_TRACK_IDS},
};

use super::Catalog;

impl<A: Authenticator> Catalog<A> {
    /// Retrieves a single track.
    ///
    /// # Arguments
    ///
    /// * `country_market_name` - Optional country name; tracks unavailable there are relinked by the API
    /// * `track_id` - Spotify ID of the track
    pub async fn get_track(&mut self, country_market_name: Option<&str>, track_id: &str) -> Result<Track, CatalogError> {
        utils::validate_id("track", track_id)?;
        let market = market_from_country_name(country_market_name).map_err(|e| e.context("error getting track"))?;

        let client = &self.client;
        let market = market.as_ref();
        self.auth
            .execute_with_auth_retry(|token| async move { client.get_track(&token, market, track_id).await })
            .await
    }

    /// Retrieves up to 50 tracks in one request.
    ///
    /// # Arguments
    ///
    /// * `country_market_name` - Optional country name restricting availability
    /// * `track_ids` - 1 to 50 Spotify track IDs
    ///
    /// # Errors
    ///
    /// `Validation` for an empty list, more than 50 IDs, a malformed ID or an
    /// unknown country.
    pub async fn get_tracks<S: AsRef<str>>(
        &mut self,
        country_market_name: Option<&str>,
        track_ids: &[S],
    ) -> Result<Vec<Track>, CatalogError> {
        let ids = utils::join_ids("track", track_ids, MAX_TRACK_IDS)?;
        let market = market_from_country_name(country_market_name).map_err(|e| e.context("error getting tracks"))?;

        let client = &self.client;
        let market = market.as_ref();
        let ids = ids.as_str();
        self.auth
            .execute_with_auth_retry(|token| async move { client.get_tracks(&token, market, ids).await })
            .await
    }
}
