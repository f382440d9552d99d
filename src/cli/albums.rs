use crate::{catalog::Catalog, spotify::Authenticator};

use super::{SAMPLE_MARKET, announce, report};

pub async fn run<A: Authenticator>(catalog: &mut Catalog<A>) {
    get_album(catalog, None, "1QJmLRcuIMMjZ49elafR3K").await;
    get_album(catalog, Some(SAMPLE_MARKET), "4R3tXoorBpHji6Jdms8a4Q").await;

    get_multiple_albums(catalog, None, &["4jvurVXLanQyP1rPZjbSln", "0lw68yx3MhKflWFqCsGkIs"]).await;
    get_multiple_albums(
        catalog,
        Some(SAMPLE_MARKET),
        &["6JLTZPPzQDKjv6zkenbZnc", "4M7bISEIiCfNN8EuLu8wc6"],
    )
    .await;

    get_album_tracks(catalog, None, None, "1QJmLRcuIMMjZ49elafR3K").await;
    get_album_tracks(catalog, Some(SAMPLE_MARKET), Some(10), "4R3tXoorBpHji6Jdms8a4Q").await;
    // out of range on purpose, rejected before any request is sent
    get_album_tracks(catalog, None, Some(100), "1QJmLRcuIMMjZ49elafR3K").await;

    get_new_releases(catalog).await;
}

fn for_market(subject: &str, market: Option<&str>) -> String {
    match market {
        Some(m) => format!("{subject} for {m}'s market"),
        None => subject.to_string(),
    }
}

async fn get_album<A: Authenticator>(catalog: &mut Catalog<A>, market: Option<&str>, album_id: &str) {
    let subject = for_market("an album", market);
    let pb = announce(&subject);
    let result = catalog.get_album(market, album_id).await;
    pb.finish_and_clear();
    report(&subject, result);
}

async fn get_multiple_albums<A: Authenticator>(catalog: &mut Catalog<A>, market: Option<&str>, album_ids: &[&str]) {
    let subject = for_market("multiple albums", market);
    let pb = announce(&subject);
    let result = catalog.get_albums(market, album_ids).await;
    pb.finish_and_clear();
    report(&subject, result);
}

async fn get_album_tracks<A: Authenticator>(
    catalog: &mut Catalog<A>,
    market: Option<&str>,
    limit: Option<i64>,
    album_id: &str,
) {
    let subject = for_market("album tracks", market);
    let pb = announce(&subject);
    let result = catalog.get_album_tracks(market, limit, None, album_id).await;
    pb.finish_and_clear();
    report(&subject, result);
}

async fn get_new_releases<A: Authenticator>(catalog: &mut Catalog<A>) {
    let pb = announce("new releases");
    let result = catalog.get_new_releases(Some(5), None).await;
    pb.finish_and_clear();
    report("new releases", result);
}
