use anyhow::Result;
use clap::Parser;
use creos_ai::app::App;
use creos_ai::models::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "creos-ai")]
#[command(about = "Serve the Creos AI idea and image generation API")]
struct CliArgs {
    /// Address to listen on, overriding BIND_ADDR.
    #[arg(long, value_name = "ADDR", value_parser = parse_bind_arg)]
    bind: Option<SocketAddr>,
}

fn parse_bind_arg(input: &str) -> std::result::Result<SocketAddr, String> {
    input
        .parse::<SocketAddr>()
        .map_err(|_| format!("Invalid address '{}'. Expected format: HOST:PORT", input))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creos_ai=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting creos-ai");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let addr = args.bind.unwrap_or(config.bind_addr);

    let app = Arc::new(App::from_config(&config));

    if let Err(e) = creos_ai::server::serve(app, addr).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_bind_arg;

    #[test]
    fn test_parse_bind_arg_valid() {
        let parsed = parse_bind_arg("127.0.0.1:9000").unwrap();
        assert_eq!(parsed.port(), 9000);
    }

    #[test]
    fn test_parse_bind_arg_invalid() {
        let err = parse_bind_arg("localhost").unwrap_err();
        assert!(err.contains("HOST:PORT"));
    }
}
