use crate::{
    error::CatalogError,
    market::Market,
    types::{AccessToken, MultipleTracks, Track},
};

use super::SpotifyClient;

const TRACKS_PATH: &str = "/tracks";

impl SpotifyClient {
    /// Retrieves a single track.
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/tracks/{id}`
    pub async fn get_track(
        &self,
        token: &AccessToken,
        market: Option<&Market>,
        track_id: &str,
    ) -> Result<Track, CatalogError> {
        let query: Vec<(&str, String)> = market.map(|m| ("market", m.to_string())).into_iter().collect();

        self.get(token, &format!("{TRACKS_PATH}/{track_id}"), &query, "tracks")
            .await
            .map_err(|e| e.context(format!("error executing track request for track ID - {track_id}")))
    }

    /// Retrieves several tracks in one request; `null` entries are dropped.
    ///
    /// # API Endpoint
    ///
    /// `GET /v1/tracks?ids={ids}`
    pub async fn get_tracks(
        &self,
        token: &AccessToken,
        market: Option<&Market>,
        ids: &str,
    ) -> Result<Vec<Track>, CatalogError> {
        let mut query = vec![("ids", ids.to_string())];
        if let Some(market) = market {
            query.push(("market", market.to_string()));
        }

        let res: MultipleTracks = self
            .get(token, TRACKS_PATH, &query, "tracks")
            .await
            .map_err(|e| e.context(format!("error executing track request for tracks IDs - {ids}")))?;

        Ok(res.tracks.into_iter().flatten().collect())
    }
}
