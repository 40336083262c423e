//! # hopdns
//!
//! Authoritative zone servers, a caching delegation-walking resolver and a
//! one-shot client, all speaking a plain-text protocol over UDP.

mod bootstrap;
mod client;
mod di;
mod server;

use clap::{Parser, Subcommand};
use hopdns_domain::CliOverrides;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "hopdns")]
#[command(version)]
#[command(about = "Caching resolver that walks NS delegation chains")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve a static zone file
    Authority {
        /// UDP port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Zone file with `domain,target,KIND` lines
        #[arg(short = 'z', long)]
        zone_file: Option<PathBuf>,
    },

    /// Run the caching resolver
    Resolver {
        /// UDP port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Root authority, `address[:port]`
        #[arg(short = 'r', long)]
        root: Option<String>,

        /// Cache TTL in seconds
        #[arg(short = 't', long)]
        ttl: Option<u64>,

        /// Maximum NS redirects per query
        #[arg(long)]
        max_hops: Option<usize>,

        /// Per-authority reply timeout in milliseconds
        #[arg(long)]
        hop_timeout_ms: Option<u64>,
    },

    /// Send one query and print the answer
    Query {
        /// Domain to resolve; read from stdin when omitted
        domain: Option<String>,

        /// Resolver address
        #[arg(short = 's', long, default_value = "127.0.0.1:5353")]
        server: String,

        /// How long to wait for the reply
        #[arg(long, default_value = "3000")]
        timeout_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ..CliOverrides::default()
    };

    match cli.command {
        Command::Query {
            domain,
            server,
            timeout_ms,
        } => {
            // The client keeps stdout clean; logs stay off unless asked for.
            if overrides.log_level.is_none() {
                overrides.log_level = Some("warn".to_string());
            }
            let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
            bootstrap::init_logging(&config);

            let domain = client::read_domain(domain)?;
            let reply =
                client::query(&server, &domain, Duration::from_millis(timeout_ms)).await?;
            println!("{}", client::render(&reply));
        }
        Command::Authority {
            port,
            bind,
            zone_file,
        } => {
            overrides.port = port;
            overrides.bind_address = bind;
            overrides.zone_file = zone_file;
            let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
            bootstrap::init_logging(&config);

            let shutdown = CancellationToken::new();
            server::cancel_on_ctrl_c(shutdown.clone());
            server::start_authority(&config, shutdown).await?;
        }
        Command::Resolver {
            port,
            bind,
            root,
            ttl,
            max_hops,
            hop_timeout_ms,
        } => {
            overrides.port = port;
            overrides.bind_address = bind;
            overrides.root_authority = root;
            overrides.cache_ttl = ttl;
            overrides.max_hops = max_hops;
            overrides.hop_timeout_ms = hop_timeout_ms;
            let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
            bootstrap::init_logging(&config);

            let shutdown = CancellationToken::new();
            server::cancel_on_ctrl_c(shutdown.clone());
            server::start_resolver(&config, shutdown).await?;
        }
    }

    Ok(())
}
