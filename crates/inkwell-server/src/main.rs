//! Inkwell Server CLI
//!
//! Starts the HTTP server for baseline ingestion and policy lookups.

use inkwell_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using local defaults");
        eprintln!("Usage: inkwell-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::local()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Inkwell Server - Baseline Ingestion and Policy Lookup");
    println!();
    println!("USAGE:");
    println!("    inkwell-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8080)");
    println!("    - max_upload_bytes: Upload limit in bytes (default: 10 MiB)");
    println!("    - policy_file: TOML file replacing the builtin policies");
    println!("    - [extractor]: paragraph_separator, keep_empty_paragraphs");
    println!();
}
