use crate::{catalog::Catalog, spotify::Authenticator};

use super::{SAMPLE_MARKET, announce, report};

pub async fn run<A: Authenticator>(catalog: &mut Catalog<A>) {
    get_track(catalog, None, "3O5JIwSON3KBaoyMUsjLjn").await;
    get_track(catalog, Some(SAMPLE_MARKET), "4h6G18XTQMtNpwYIXnrZI6").await;

    get_multiple_tracks(catalog, None, &["2C6h8jV6NzbS9o3JNQ6j7p", "3GylBJWB3nHyFjgEm62pMD"]).await;
    get_multiple_tracks(
        catalog,
        Some(SAMPLE_MARKET),
        &["4VQu1ooCteGDynSZYUgvT4", "3Zjdqz7eOox8XU0zTCPL4P"],
    )
    .await;
}

async fn get_track<A: Authenticator>(catalog: &mut Catalog<A>, market: Option<&str>, track_id: &str) {
    let subject = match market {
        Some(m) => format!("a track for {m}'s market"),
        None => "a track".to_string(),
    };
    let pb = announce(&subject);
    let result = catalog.get_track(market, track_id).await;
    pb.finish_and_clear();
    report(&subject, result);
}

async fn get_multiple_tracks<A: Authenticator>(catalog: &mut Catalog<A>, market: Option<&str>, track_ids: &[&str]) {
    let subject = match market {
        Some(m) => format!("multiple tracks for {m}'s market"),
        None => "multiple tracks".to_string(),
    };
    let pb = announce(&subject);
    let result = catalog.get_tracks(market, track_ids).await;
    pb.finish_and_clear();
    report(&subject, result);
}
