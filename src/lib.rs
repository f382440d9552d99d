//! Spotify Catalog CLI Library
//!
//! This library provides a small client for the read-only catalog part of the
//! Spotify Web API. It authenticates the application itself through the OAuth
//! client credentials grant and then queries artists, albums and tracks,
//! re-authenticating once whenever the API rejects the current token.
//!
//! # Modules
//!
//! - `catalog` - Catalog service facade with input validation
//! - `cli` - Demonstration calls and result reporting
//! - `config` - Embedded configuration, config files and environment overrides
//! - `error` - Classified error types
//! - `management` - Token ownership and the authenticate-and-retry executor
//! - `market` - Country name to market code lookup
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Pagination and ID validation helpers
//!
//! # Example
//!
//! ```
//! use catalogcli::{catalog::Catalog, config, management::AuthManager, spotify};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = config::load(None).await?;
//!     let http = spotify::build_http_client(cfg.timeout)?;
//!     let flow = spotify::ClientCredentialsFlow::new(http.clone(), &cfg.accounts_url, cfg.credentials.clone());
//!     let mut catalog = Catalog::new(AuthManager::new(flow), spotify::SpotifyClient::new(http, &cfg.base_url));
//!     let artist = catalog.get_artist("7nzSoJISlVJsn7O0yTeMOB").await?;
//!     println!("{}", artist.name);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod market;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading configs...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Artist obtained!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✔".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a failure message with a red cross and keeps going.
///
/// Used for a single failed call when the rest of the run should continue.
/// For unrecoverable problems use [`error!`] instead.
///
/// # Example
///
/// ```
/// failure!("Getting artist failed");
/// ```
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✖".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints the payload line that follows a success or failure line.
///
/// # Example
///
/// ```
/// detail!("{}", json);
/// ```
#[macro_export]
macro_rules! detail {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("{}{}\n", "╰┈➤".dimmed(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately with exit code 1
/// after printing the error message. It should only be used for fatal
/// errors where recovery is not possible, such as a broken configuration.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Environment file could not be loaded: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
