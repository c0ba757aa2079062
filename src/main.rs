use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rides_rules::Variant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gen-rules")]
#[command(about = "Print Firestore security rules for the rides and scores collections")]
struct Args {
    /// Rule policy to print
    #[arg(default_value_t = Variant::default())]
    variant: Variant,

    /// List the available variants and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut out = io::stdout().lock();

    if args.list {
        for variant in Variant::ALL {
            writeln!(out, "{:<14} {}", variant.name(), variant.description())
                .context("failed to write variant list")?;
        }
        return Ok(());
    }

    rides_rules::emit(args.variant, &mut out)
        .with_context(|| format!("failed to write '{}' rules", args.variant))?;
    Ok(())
}
