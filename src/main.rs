use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crewdesk::config::Config;
use crewdesk::shell;
use crewdesk::store::Store;

#[derive(Parser)]
#[command(name = "crew")]
#[command(about = "Role-gated project and task tracking for small teams")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Initialize tracing on stderr so stdout stays clean for the prompt loop.
fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    init_tracing(&config.log_filter);
    tracing::info!(admin = %config.admin_name, "starting crewdesk");

    let mut store = Store::new(config.admin_name);
    shell::run(&mut store)
}
