use crate::{
    error::CatalogError,
    market::Market,
    types::{AccessToken, AlbumGroup, Artist, MultipleArtists, MultipleTracks, Paginated, SimplifiedAlbum, Track},
    utils::PageRequest,
};

use super::SpotifyClient;

const ARTISTS_PATH: &str = "/artists";

impl SpotifyClient {
    /// Retrieves catalog information for a single artist.
    ///
    /// # Arguments
    ///
    /// * `token` - Bearer token for the request
    /// * `artist_id` - Spotify ID of the artist
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/artists/{id}`
    pub async fn get_artist(&self, token: &AccessToken, artist_id: &str) -> Result<Artist, CatalogError> {
        self.get(token, &format!("{ARTISTS_PATH}/{artist_id}"), &[], "artists")
            .await
            .map_err(|e| e.context(format!("error executing artist request for artist ID - {artist_id}")))
    }

    /// Retrieves several artists in one request.
    ///
    /// `ids` is the already validated, comma-joined list of artist IDs.
    /// Unknown IDs come back as `null` from the API and are dropped.
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/artists?ids={ids}`
    pub async fn get_artists(&self, token: &AccessToken, ids: &str) -> Result<Vec<Artist>, CatalogError> {
        let query = [("ids", ids.to_string())];
        let res: MultipleArtists = self
            .get(token, ARTISTS_PATH, &query, "artists")
            .await
            .map_err(|e| e.context(format!("error executing artist request for artists IDs - {ids}")))?;

        Ok(res.artists.into_iter().flatten().collect())
    }

    /// Retrieves a page of an artist's albums.
    ///
    /// # Arguments
    ///
    /// * `token` - Bearer token for the request
    /// * `groups` - Album groups to include; an empty slice lets the API use its default
    /// * `market` - Optional market restriction
    /// * `page` - Validated `limit` and `offset`
    /// * `artist_id` - Spotify ID of the artist
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/artists/{id}/albums`
    pub async fn get_artist_albums(
        &self,
        token: &AccessToken,
        groups: &[AlbumGroup],
        market: Option<&Market>,
        page: PageRequest,
        artist_id: &str,
    ) -> Result<Paginated<SimplifiedAlbum>, CatalogError> {
        let mut query = Vec::new();
        if !groups.is_empty() {
            let include_groups = groups
                .iter()
                .map(AlbumGroup::as_str)
                .collect::<Vec<_>>()
                .join(",");
            query.push(("include_groups", include_groups));
        }
        if let Some(market) = market {
            query.push(("market", market.to_string()));
        }
        query.extend(page.query_pairs());

        self.get(token, &format!("{ARTISTS_PATH}/{artist_id}/albums"), &query, "artists")
            .await
            .map_err(|e| e.context(format!("error executing artist albums request for artist ID - {artist_id}")))
    }

    /// Retrieves an artist's top tracks, optionally restricted to a market.
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/artists/{id}/top-tracks`
    pub async fn get_artist_top_tracks(
        &self,
        token: &AccessToken,
        market: Option<&Market>,
        artist_id: &str,
    ) -> Result<Vec<Track>, CatalogError> {
        let mut query = Vec::new();
        if let Some(market) = market {
            query.push(("market", market.to_string()));
        }

        let res: MultipleTracks = self
            .get(token, &format!("{ARTISTS_PATH}/{artist_id}/top-tracks"), &query, "artists")
            .await
            .map_err(|e| e.context(format!("error executing artist top-tracks request for artist ID - {artist_id}")))?;

        Ok(res.tracks.into_iter().flatten().collect())
    }
}
