use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use slipscan_gateway::{start_server, AppState};
use slipscan_ocr::SampledDecodeExtractor;

#[derive(Parser)]
#[command(name = "slipscan")]
#[command(about = "Betting slip scanner: image in, risk report out")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the slipscan HTTP server
    Serve {
        /// Address to bind the HTTP server to
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// Port to bind the HTTP server to
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, port } => {
            let addr: SocketAddr = format!("{bind}:{port}").parse()?;
            let state = AppState::new(Arc::new(SampledDecodeExtractor::new()));
            info!(%addr, "starting slipscan");
            start_server(addr, state).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_subcommand_accepts_bind_and_port() {
        let cli = Cli::try_parse_from(["slipscan", "serve", "--bind", "127.0.0.1", "--port", "9000"])
            .unwrap();
        let Commands::Serve { bind, port } = cli.command;
        assert_eq!(bind, "127.0.0.1");
        assert_eq!(port, 9000);
    }

    #[test]
    fn serve_defaults_to_all_interfaces_on_8080() {
        let cli = Cli::try_parse_from(["slipscan", "serve"]).unwrap();
        let Commands::Serve { bind, port } = cli.command;
        assert_eq!(bind, "0.0.0.0");
        assert_eq!(port, 8080);
    }

    #[test]
    fn bare_flags_without_subcommand_are_rejected() {
        assert!(Cli::try_parse_from(["slipscan", "--port", "9000"]).is_err());
    }
}
