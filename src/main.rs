//! route-matcher
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http server ──▶ PathMatcher::new(method, path)
//!                                         │
//!                                         ▼
//!                                   routing::Router
//!                                   (priority order,
//!                                    first match wins)
//!                                         │
//!     Client Response                     ▼
//!     ◀───────────── 200 {route} / 404 {error}
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use route_matcher::config::{load_config, RouteMatcherConfig};
use route_matcher::observability::init_logging;
use route_matcher::{HttpServer, PathMatcher, Router};

#[derive(Parser)]
#[command(name = "route-matcher")]
#[command(about = "Match request paths against `_`-wildcard patterns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve routing decisions over HTTP
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Find the route a request would take
    Match {
        #[arg(short, long)]
        config: PathBuf,
        method: String,
        path: String,
    },
    /// Check one request against one pattern
    Check {
        method: String,
        path: String,
        pattern: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => RouteMatcherConfig::default(),
            };
            init_logging(&config.observability.log_level);

            tracing::info!(
                bind_address = %config.listener.bind_address,
                routes = config.routes.len(),
                "Configuration loaded"
            );

            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            HttpServer::new(config).run(listener).await?;

            tracing::info!("Shutdown complete");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Match { config, method, path } => {
            let config = load_config(&config)?;
            init_logging(&config.observability.log_level);

            match run_match(&config, &method, &path) {
                Ok(route) => {
                    println!("{route}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(message) => {
                    eprintln!("{message}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Check { method, path, pattern } => {
            print!("{}", run_check(&method, &path, &pattern));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Name of the route the request takes, or the no-match message.
fn run_match(config: &RouteMatcherConfig, method: &str, path: &str) -> Result<String, String> {
    let router = Router::from_config(config.routes.clone());
    let req = PathMatcher::new(method, path);
    router
        .match_request(&req)
        .map(|route| route.name().to_string())
        .ok_or_else(|| "no matching route".to_string())
}

/// One line per predicate.
fn run_check(method: &str, path: &str, pattern: &str) -> String {
    let req = PathMatcher::new(method, path);
    format!(
        "is_path:      {}\nis_get_path:  {}\nis_put_path:  {}\nis_post_path: {}\n",
        req.is_path(pattern),
        req.is_get_path(pattern),
        req.is_put_path(pattern),
        req.is_post_path(pattern),
    )
}
