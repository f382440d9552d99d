use crate::{catalog::Catalog, spotify::Authenticator, types::AlbumGroup};

use super::{SAMPLE_MARKET, announce, report};

pub async fn run<A: Authenticator>(catalog: &mut Catalog<A>) {
    get_artist(catalog, "7nzSoJISlVJsn7O0yTeMOB").await;
    get_multiple_artists(catalog, &["4DFhHyjvGYa9wxdHUjtDkc", "4lgrzShsg2FLA89UM2fdO5"]).await;

    get_artist_albums(catalog, "0k17h0D3J5VfsdmQ1iZtE9", &[]).await;
    get_artist_albums(catalog, "0k17h0D3J5VfsdmQ1iZtE9", &[AlbumGroup::Album]).await;
    get_artist_albums(
        catalog,
        "0k17h0D3J5VfsdmQ1iZtE9",
        &[AlbumGroup::Single, AlbumGroup::Compilation],
    )
    .await;
    get_artist_albums(catalog, "0k17h0D3J5VfsdmQ1iZtE9", &[AlbumGroup::AppearsOn]).await;

    get_artist_top_tracks(catalog, "0k17h0D3J5VfsdmQ1iZtE9").await;
}

async fn get_artist<A: Authenticator>(catalog: &mut Catalog<A>, artist_id: &str) {
    let pb = announce("an artist");
    let result = catalog.get_artist(artist_id).await;
    pb.finish_and_clear();
    report("artist", result);
}

async fn get_multiple_artists<A: Authenticator>(catalog: &mut Catalog<A>, artist_ids: &[&str]) {
    let pb = announce("multiple artists");
    let result = catalog.get_artists(artist_ids).await;
    pb.finish_and_clear();
    report("multiple artists", result);
}

async fn get_artist_albums<A: Authenticator>(catalog: &mut Catalog<A>, artist_id: &str, groups: &[AlbumGroup]) {
    let subject = if groups.is_empty() {
        "all artist's album types".to_string()
    } else {
        let names = groups.iter().map(|g| group_label(*g)).collect::<Vec<_>>();
        format!("artist's {}", names.join(" and "))
    };

    let pb = announce(&subject);
    let result = catalog
        .get_artist_albums(None, groups, None, None, artist_id)
        .await;
    pb.finish_and_clear();
    report(&subject, result);
}

async fn get_artist_top_tracks<A: Authenticator>(catalog: &mut Catalog<A>, artist_id: &str) {
    let subject = format!("artist's top tracks for {SAMPLE_MARKET}'s market");
    let pb = announce(&subject);
    let result = catalog
        .get_artist_top_tracks(Some(SAMPLE_MARKET), artist_id)
        .await;
    pb.finish_and_clear();
    report(&subject, result);
}

fn group_label(group: AlbumGroup) -> &'static str {
    match group {
        AlbumGroup::Album => "albums",
        AlbumGroup::Single => "singles",
        AlbumGroup::AppearsOn => "appearances",
        AlbumGroup::Compilation => "compilations",
    }
}
