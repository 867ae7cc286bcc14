//! telegram-proxy: HTTP backend for the Telegram Bot API
//!
//! A thin REST surface in front of the Bot API:
//! - Token validation and bot identity (getMe)
//! - Bot command listing (getMyCommands)
//! - Message sending (sendMessage)
//! - Generic method passthrough

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

use telegram_proxy::{config::AppConfig, run_server};

#[derive(Parser)]
#[command(name = "telegram-proxy")]
#[command(version = "0.1.0")]
#[command(about = "HTTP backend for the Telegram Bot API")]
#[command(long_about = "
telegram-proxy exposes a small REST surface that translates JSON requests
into Telegram Bot API calls:
  POST /api/telegram/validate  - check a bot token (getMe)
  POST /api/telegram/commands  - list bot commands (getMyCommands)
  POST /api/telegram/send      - send a message (sendMessage)
  POST /api/telegram/call      - call any Bot API method

Example usage:
  telegram-proxy run
  telegram-proxy run --config config.yaml --port 8080
")]
struct Cli {
    /// Path to config file (optional; defaults apply when absent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the proxy server
    Run {
        /// Override listen port (takes precedence over PORT env var)
        #[arg(short, long)]
        port: Option<u16>,
        /// Override the Bot API base URL
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Validate configuration file
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level_filter = if let Some(level) = cli.log_level {
        level.to_string()
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            .to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&level_filter))
        .init();

    match cli.command {
        Commands::Run { port, api_base } => {
            run_proxy(cli.config, port, api_base).await?;
        }
        Commands::CheckConfig => {
            check_config(cli.config.as_deref());
        }
    }

    Ok(())
}

/// Run the proxy server
async fn run_proxy(
    config_path: Option<PathBuf>,
    port_override: Option<u16>,
    api_base_override: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_or_exit(config_path.as_deref());

    // Apply CLI overrides
    if let Some(port) = port_override {
        config.server.port = port;
    }
    if let Some(api_base) = api_base_override {
        config.telegram.api_base = api_base;
    }

    run_server(config).await?;

    Ok(())
}

/// Validate configuration and print a summary
fn check_config(config_path: Option<&Path>) {
    match AppConfig::load(config_path) {
        Ok(config) => {
            println!("✓ Configuration is valid\n");
            println!("Server:");
            println!("  Listen: {}:{}", config.server.host, config.server.port);
            println!("\nTelegram:");
            println!("  API base: {}", config.telegram.base_url());
            println!("  Timeout: {}s", config.telegram.timeout_seconds);
        }
        Err(e) => {
            eprintln!("✗ Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load configuration or exit with error
fn load_config_or_exit(config_path: Option<&Path>) -> AppConfig {
    match AppConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            eprintln!("\nThe server runs with built-in defaults when no config file exists.");
            eprintln!("To customize, copy config.yaml.default to config.yaml and edit it.");
            std::process::exit(1);
        }
    }
}
