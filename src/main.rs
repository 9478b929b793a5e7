//! sel2pw - Selenium/Java → Playwright converter CLI.
//!
//! - `convert`: convert one file, print the result, store the artifact
//! - `serve`: run the HTTP shim
//! - `check-llm`: list models reachable on the Ollama backend

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use sel2pw_core::http::HttpServer;
use sel2pw_core::service::{ConversionMode, ConversionService};
use sel2pw_core::validation::validate_source;
use sel2pw_core::{Config, Dialect, Error};

#[derive(Parser)]
#[command(name = "sel2pw")]
#[command(about = "Convert Selenium/Java tests into Playwright TypeScript/JavaScript")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true, env = "SEL2PW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Java source file
    Convert {
        /// Input file
        file: PathBuf,

        /// Output dialect: ts or js
        #[arg(short, long, default_value = "ts", value_parser = parse_dialect)]
        dialect: Dialect,

        /// Strategy: regex or llm
        #[arg(short, long, default_value = "regex", value_parser = parse_mode)]
        mode: ConversionMode,

        /// Override the artifact root directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print only; do not write an artifact
        #[arg(long)]
        no_save: bool,
    },

    /// Run the HTTP server
    Serve {
        /// Listen address (overrides configuration)
        #[arg(long)]
        addr: Option<SocketAddr>,
    },

    /// Check connectivity to the Ollama backend
    CheckLlm,
}

fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse().map_err(|e: Error| e.client_message())
}

fn parse_mode(s: &str) -> Result<ConversionMode, String> {
    s.parse().map_err(|e: Error| e.client_message())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_env_overrides()?;

    sel2pw_core::observability::init_tracing_with(&config.observability);

    match cli.command {
        Command::Convert {
            file,
            dialect,
            mode,
            out_dir,
            no_save,
        } => {
            if let Some(dir) = out_dir {
                config.storage.output_dir = dir;
            }
            if !file.is_file() {
                return Err(Error::not_found(format!("input file {}", file.display())).into());
            }
            let raw = tokio::fs::read_to_string(&file).await?;
            let source = validate_source(Some(raw.as_str()))?;
            let service = ConversionService::from_config(&config);

            let output = service.translate(source, dialect, mode).await;
            println!("{}", output.code);

            if !no_save {
                let path = service
                    .store()
                    .save(&output.code, dialect, output.strategy.artifact_prefix())
                    .await?;
                eprintln!("saved {} ({})", path.display(), output.strategy);
            }
        }
        Command::Serve { addr } => {
            let addr = match addr {
                Some(addr) => addr,
                None => config.server.listen_addr.parse()?,
            };
            let service = Arc::new(ConversionService::from_config(&config));
            let server = Arc::new(HttpServer::new(service, addr));

            let signal_server = server.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    signal_server.shutdown();
                }
            });

            tracing::info!("sel2pw HTTP server starting on {}", addr);
            server.serve().await?;
        }
        Command::CheckLlm => {
            let service = ConversionService::from_config(&config);
            let status = service.llm_status().await;
            if status.available {
                println!("Connected: {}", config.llm.base_url);
                for model in status.models {
                    println!("  {}", model);
                }
            } else {
                println!("Not reachable: {}", config.llm.base_url);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
