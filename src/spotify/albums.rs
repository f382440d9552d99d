use crate::{
    error::CatalogError,
    market::Market,
    types::{AccessToken, Album, MultipleAlbums, NewReleases, Paginated, SimplifiedTrack},
    utils::PageRequest,
};

use super::SpotifyClient;

const ALBUMS_PATH: &str = "/albums";
const NEW_RELEASES_PATH: &str = "/browse/new-releases";

fn market_query(market: Option<&Market>) -> Vec<(&'static str, String)> {
    market
        .map(|m| vec![("market", m.to_string())])
        .unwrap_or_default()
}

impl SpotifyClient {
    /// Retrieves a single album including its first page of tracks.
    ///
    /// # Arguments
    ///
    /// * `token` - Bearer token for the request
    /// * `market` - Optional market restriction; tracks unavailable there are
    ///   relinked or flagged by the API
    /// * `album_id` - Spotify ID of the album
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/albums/{id}`
    pub async fn get_album(
        &self,
        token: &AccessToken,
        market: Option<&Market>,
        album_id: &str,
    ) -> Result<Album, CatalogError> {
        self.get(token, &format!("{ALBUMS_PATH}/{album_id}"), &market_query(market), "albums")
            .await
            .map_err(|e| e.context(format!("error executing album request for album ID - {album_id}")))
    }

    /// Retrieves several albums in one request.
    ///
    /// `ids` is the already validated, comma-joined list of album IDs (at
    /// most 20). Unknown IDs come back as `null` and are dropped.
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/albums?ids={ids}`
    pub async fn get_albums(
        &self,
        token: &AccessToken,
        market: Option<&Market>,
        ids: &str,
    ) -> Result<Vec<Album>, CatalogError> {
        let mut query = vec![("ids", ids.to_string())];
        query.extend(market_query(market));

        let res: MultipleAlbums = self
            .get(token, ALBUMS_PATH, &query, "albums")
            .await
            .map_err(|e| e.context(format!("error executing album request for albums IDs - {ids}")))?;

        Ok(res.albums.into_iter().flatten().collect())
    }

    /// Retrieves a page of an album's tracks.
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/albums/{id}/tracks`
    pub async fn get_album_tracks(
        &self,
        token: &AccessToken,
        market: Option<&Market>,
        page: PageRequest,
        album_id: &str,
    ) -> Result<Paginated<SimplifiedTrack>, CatalogError> {
        let mut query = market_query(market);
        query.extend(page.query_pairs());

        self.get(token, &format!("{ALBUMS_PATH}/{album_id}/tracks"), &query, "albums")
            .await
            .map_err(|e| e.context(format!("error executing album tracks request for album ID - {album_id}")))
    }

    /// Retrieves a page of new album releases featured on Spotify.
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/browse/new-releases`
    pub async fn get_new_releases(&self, token: &AccessToken, page: PageRequest) -> Result<NewReleases, CatalogError> {
        self.get(token, NEW_RELEASES_PATH, &page.query_pairs(), "albums")
            .await
            .map_err(|e| e.context("error executing new releases request"))
    }
}
