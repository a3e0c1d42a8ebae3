mod commands;
mod demo;
mod error;
mod menu;
mod models;
mod store;


use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use store::Store;

#[derive(Parser)]
#[command(name = "coffee-pos", version, about = "Coffee Shop Inventory and Sales Management")]
struct Cli {
    /// Seed sample data and print a demo run instead of the interactive menu
    #[arg(long)]
    demo: bool,

    /// Directory holding products.json, customers.json and orders.json
    #[arg(long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let mut store = Store::open(&cli.data_dir)
        .with_context(|| format!("failed to open store in {}", cli.data_dir.display()))?;

    if cli.demo {
        let output_path = store.data_dir().join("demo_output.txt");
        let summary = demo::run_demo(&mut store, Some(&output_path))?;
        println!("{summary}");
    } else {
        menu::run_menu(&mut store)?;
    }

    Ok(())
}

/// Configure logging once for the whole application. Logs go to stderr so
/// the menu and demo output on stdout stay clean.
///
/// ```text
/// RUST_LOG=debug coffee-pos    # show store load/save details
/// ```
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
