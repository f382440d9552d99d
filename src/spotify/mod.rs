//! # Spotify Integration Module
//!
//! HTTP plumbing for the Spotify Web API: the OAuth 2.0 client credentials
//! grant and the read-only catalog endpoints for artists, albums and tracks.
//!
//! ## Architecture
//!
//! ```text
//! Catalog service (validation, retry policy)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials grant)
//!     ├── HTTP executor (bearer auth, status classification, JSON decoding)
//!     └── Resources (artists, albums, tracks)
//!          ↓
//! reqwest
//! ```
//!
//! ## Error Classification
//!
//! Nothing in this module retries. Every failure is classified into a
//! [`crate::error::CatalogError`] and handed back; a 401 or 403 answer always
//! surfaces as `Status { code: 401 | 403, .. }` so the caller can decide to
//! re-authenticate.
//!
//! ## API Coverage
//!
//! ### Authentication
//! - `POST /api/token` - client credentials grant on the accounts service
//!
//! ### Artists
//! - `GET /v1/artists/{id}` and `GET /v1/artists?ids=...`
//! - `GET /v1/artists/{id}/albums`
//! - `GET /v1/artists/{id}/top-tracks`
//!
//! ### Albums
//! - `GET /v1/albums/{id}` and `GET /v1/albums?ids=...`
//! - `GET /v1/albums/{id}/tracks`
//! - `GET /v1/browse/new-releases`
//!
//! ### Tracks
//! - `GET /v1/tracks/{id}` and `GET /v1/tracks?ids=...`

pub mod albums;
pub mod artists;
pub mod auth;
pub mod http;
pub mod tracks;

pub use auth::{Authenticator, ClientCredentialsFlow};
pub use http::{SpotifyClient, build_http_client};
