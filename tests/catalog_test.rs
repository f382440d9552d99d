use std::time::Duration;

use catalogcli::catalog::Catalog;
use catalogcli::error::CatalogError;
use catalogcli::management::{AuthManager, AuthStatus};
use catalogcli::spotify::{ClientCredentialsFlow, SpotifyClient, build_http_client};
use catalogcli::types::{AlbumGroup, ClientCredentials};
use serde_json::{Value, json};
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Catalog wired against a single mock server serving both the accounts and the API side
fn catalog(server: &MockServer) -> Catalog {
    let http = build_http_client(Duration::from_secs(5)).unwrap();
    let flow = ClientCredentialsFlow::new(http.clone(), server.uri(), ClientCredentials::new("id", "secret"));
    Catalog::new(AuthManager::new(flow), SpotifyClient::new(http, server.uri()))
}

async fn mount_token(server: &MockServer, token: &str, times: u64) {
    let mock = Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(times);
    let mock = if times > 0 { mock.up_to_n_times(times) } else { mock };
    mock.mount(server).await;
}

fn artist(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "genres": ["rock"], "popularity": 70, "followers": { "total": 12 } })
}

fn page(items: Vec<Value>) -> Value {
    json!({ "href": null, "items": items, "limit": 20, "offset": 0, "next": null, "previous": null, "total": 1 })
}

fn track(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Song",
        "duration_ms": 200000,
        "album": { "id": "al1", "name": "Record", "album_type": "album" },
        "artists": [{ "id": "ar1", "name": "Band" }]
    })
}

#[tokio::test]
async fn test_get_artist() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/artists/7nzSoJISlVJsn7O0yTeMOB"))
        .and(bearer_token("t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(artist("7nzSoJISlVJsn7O0yTeMOB", "Ghost")))
        .expect(1)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let artist = catalog.get_artist("7nzSoJISlVJsn7O0yTeMOB").await.unwrap();

    assert_eq!(artist.name, "Ghost");
    assert_eq!(artist.followers.total, 12);
    assert_eq!(catalog.auth().status(), AuthStatus::Authenticated);
}

#[tokio::test]
async fn test_rejected_token_triggers_one_reauthentication() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    mount_token(&server, "t2", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/artists/a1"))
        .and(bearer_token("t1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "status": 403, "message": "Token rejected" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/artists/a1"))
        .and(bearer_token("t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(artist("a1", "Band")))
        .expect(1)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let artist = catalog.get_artist("a1").await.unwrap();

    assert_eq!(artist.id, "a1");
    assert_eq!(catalog.auth().access_token().map(|t| t.as_str()), Some("t2"));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/tracks/x"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let err = catalog.get_track(None, "x").await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("error in tracks API"));
}

#[tokio::test]
async fn test_error_message_from_nested_body() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/albums/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "status": 404, "message": "Non existing id" }
        })))
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let err = catalog.get_album(None, "missing").await.unwrap_err();

    match err {
        CatalogError::Status { code, message, .. } => {
            assert_eq!(code, 404);
            assert!(message.ends_with("Non existing id"));
            assert!(message.contains("album ID - missing"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_out_of_range_limit_never_reaches_the_network() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 0).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);

    let err = catalog
        .get_album_tracks(None, Some(100), None, "1QJmLRcuIMMjZ49elafR3K")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));

    let err = catalog
        .get_artist_albums(None, &[], None, Some(-1), "0k17h0D3J5VfsdmQ1iZtE9")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));

    let err = catalog.get_new_releases(Some(51), None).await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));

    assert_eq!(catalog.auth().status(), AuthStatus::Unauthenticated);
}

#[tokio::test]
async fn test_invalid_ids_and_country_never_reach_the_network() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 0).await;

    let mut catalog = catalog(&server);
    let none: [&str; 0] = [];

    assert!(matches!(catalog.get_artists(&none).await, Err(CatalogError::Validation { .. })));
    assert!(matches!(catalog.get_artist("").await, Err(CatalogError::Validation { .. })));

    let too_many: Vec<String> = (0..21).map(|i| format!("album{i}")).collect();
    assert!(matches!(
        catalog.get_albums(None, &too_many).await,
        Err(CatalogError::Validation { .. })
    ));

    let err = catalog.get_track(Some("Atlantis"), "t").await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
    assert!(err.to_string().contains("Atlantis"));
}

#[tokio::test]
async fn test_artist_albums_query() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/artists/0k17h0D3J5VfsdmQ1iZtE9/albums"))
        .and(query_param("include_groups", "single,compilation"))
        .and(query_param("market", "BR"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![json!({
            "id": "al1",
            "name": "Record",
            "album_type": "single",
            "album_group": "single"
        })])))
        .expect(1)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let albums = catalog
        .get_artist_albums(
            Some("Brazil"),
            &[AlbumGroup::Single, AlbumGroup::Compilation],
            Some(10),
            Some(5),
            "0k17h0D3J5VfsdmQ1iZtE9",
        )
        .await
        .unwrap();

    assert_eq!(albums.items.len(), 1);
    assert_eq!(albums.items[0].album_group.as_deref(), Some("single"));
}

#[tokio::test]
async fn test_batch_drops_unknown_ids() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/tracks"))
        .and(query_param("ids", "2C6h8jV6NzbS9o3JNQ6j7p,unknown"))
        .and(query_param("market", "BR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track("2C6h8jV6NzbS9o3JNQ6j7p"), null]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let tracks = catalog
        .get_tracks(Some("brazil"), &["2C6h8jV6NzbS9o3JNQ6j7p", "unknown"])
        .await
        .unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].summary.id.as_deref(), Some("2C6h8jV6NzbS9o3JNQ6j7p"));
    assert_eq!(tracks[0].album.name, "Record");
}

#[tokio::test]
async fn test_new_releases() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/browse/new-releases"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "albums": page(vec![json!({ "id": "n1", "name": "Fresh" })])
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let releases = catalog.get_new_releases(Some(5), None).await.unwrap();

    assert_eq!(releases.albums.items[0].name, "Fresh");
}

#[tokio::test]
async fn test_token_is_reused_across_calls() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/artists/a1/top-tracks"))
        .and(bearer_token("t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": [track("x1")] })))
        .expect(2)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    catalog.get_artist_top_tracks(None, "a1").await.unwrap();
    let tracks = catalog.get_artist_top_tracks(None, "a1").await.unwrap();

    assert_eq!(tracks[0].summary.name, "Song");
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/albums/a1/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\": 3}"))
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);
    let err = catalog.get_album_tracks(None, None, None, "a1").await.unwrap_err();

    assert!(matches!(err, CatalogError::Decode { .. }));
}

#[tokio::test]
async fn test_ids_with_path_or_query_characters_never_reach_the_network() {
    let server = MockServer::start().await;
    mount_token(&server, "t1", 0).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(artist("al1", "Record")))
        .expect(0)
        .mount(&server)
        .await;

    let mut catalog = catalog(&server);

    let err = catalog.get_artist("../albums/1QJmLRcuIMMjZ49elafR3K").await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));

    let err = catalog.get_track(Some("Brazil"), "x?market=JP").await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));

    let err = catalog
        .get_album_tracks(None, None, None, "1QJmLRcuIMMjZ49elafR3K/../x")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));

    let err = catalog.get_artists(&["4DFhHyjvGYa9wxdHUjtDkc", "a&ids=b"]).await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));

    assert_eq!(catalog.auth().status(), AuthStatus::Unauthenticated);
}
