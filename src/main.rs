use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use catalogcli::{
    catalog::Catalog,
    cli, config, error,
    management::AuthManager,
    spotify::{ClientCredentialsFlow, SpotifyClient, build_http_client},
    info, success, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Settings file replacing the embedded configuration (YAML, or JSON by extension)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Without a subcommand the catalog demonstration calls are run
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env() {
        warning!("Environment file could not be loaded: {}", e);
    }

    info!("Loading configs...");
    let cfg = match config::load(cli.config.as_deref()).await {
        Ok(cfg) => cfg,
        Err(e) => error!("Failed to load configuration: {}", e),
    };
    success!("Configs loaded!");

    let http = match build_http_client(cfg.timeout) {
        Ok(http) => http,
        Err(e) => error!("Failed to create HTTP client: {}", e),
    };

    info!("Authenticating...");
    let flow = ClientCredentialsFlow::new(http.clone(), cfg.accounts_url.as_str(), cfg.credentials.clone());
    let mut auth = AuthManager::new(flow);
    if let Err(e) = auth.authenticate().await {
        error!("Authentication failed: {}", e);
    }
    success!("Authenticated!");

    let mut catalog = Catalog::new(auth, SpotifyClient::new(http, cfg.base_url.as_str()));
    cli::run_sample_calls(&mut catalog).await;
}
