//! Inkwell CLI - Extract text, compute baselines, and inspect policies.

use anyhow::Context;
use clap::Parser;
use inkwell_baseline::BaselinePipeline;
use inkwell_cli::commands;
use inkwell_cli::{Cli, Command, Formatter};
use inkwell_extractor::DocumentExtractor;
use inkwell_policy::PolicyStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    match run(cli, &formatter) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", formatter.error(&format!("Error: {:#}", e)));
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, formatter: &Formatter) -> anyhow::Result<String> {
    let output = match &cli.command {
        Command::Extract(args) => commands::execute_extract(args, &DocumentExtractor::default(), formatter)
            .with_context(|| format!("Failed to extract {}", args.file.display()))?,
        Command::Baseline(args) => {
            let pipeline = BaselinePipeline::with_extractor(DocumentExtractor::default());
            commands::execute_baseline(args, &pipeline, formatter)
                .with_context(|| format!("Failed to compute baseline for {}", args.file.display()))?
        }
        Command::Policy(args) => {
            let store = match &cli.policies {
                Some(path) => {
                    let store = PolicyStore::from_file(path)
                        .with_context(|| format!("Failed to load policies from {}", path.display()))?;
                    inkwell_policy::install(store)?
                }
                None => inkwell_policy::global(),
            };
            commands::execute_policy(args, store, formatter)?
        }
    };

    Ok(output)
}
