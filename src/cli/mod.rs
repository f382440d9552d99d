//! # CLI Module
//!
//! User-facing layer of the catalog CLI. It runs a fixed sequence of catalog
//! calls and reports each outcome on standard output:
//!
//! ```text
//! [✔] Artist obtained!
//! ╰┈➤{ ...pretty printed JSON... }
//!
//! [✖] Getting album tracks failed
//! ╰┈➤validation error: limit 100 is invalid - must be between 0 and 50
//! ```
//!
//! A failed call never aborts the run; the next call simply follows.
//!
//! ## Command Groups
//!
//! - [`artists`] - single and batch artists, artist albums, top tracks
//! - [`albums`] - single and batch albums, album tracks, new releases
//! - [`tracks`] - single and batch tracks

pub mod albums;
pub mod artists;
pub mod tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{catalog::Catalog, detail, error::CatalogError, failure, info, spotify::Authenticator, success};

/// Market used by the market-restricted demonstration calls.
pub const SAMPLE_MARKET: &str = "Brazil";

/// Runs every demonstration call in order.
pub async fn run_sample_calls<A: Authenticator>(catalog: &mut Catalog<A>) {
    artists::run(catalog).await;
    albums::run(catalog).await;
    tracks::run(catalog).await;
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Prints the outcome of one call.
///
/// `subject` is what was requested, e.g. "artist" or "album tracks for Brazil's market".
pub fn report<T: Serialize>(subject: &str, result: Result<T, CatalogError>) {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(body) => {
                success!("Getting {} succeeded! :)", subject);
                detail!("{}", body);
            }
            Err(e) => {
                failure!("Getting {} failed :(", subject);
                detail!("{}", e);
            }
        },
        Err(e) => {
            failure!("Getting {} failed :(", subject);
            detail!("{}", e);
        }
    }
}

pub(crate) fn announce(subject: &str) -> ProgressBar {
    info!("Trying to get {}...", subject);
    spinner(&format!("Fetching {subject}..."))
}
