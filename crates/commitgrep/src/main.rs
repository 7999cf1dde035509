//! commitgrep: report the commits that introduced or removed a token
//!
//! Clones a repository, runs a pickaxe search per token, writes an HTML
//! report and optionally emails it.

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use commitgrep::{Config, Pipeline};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout only carries the closing summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    debug!(repo = %config.repo, tokens = ?config.tokens, "Starting commitgrep");

    let outcome = Pipeline::new(&config)
        .run()
        .with_context(|| format!("commitgrep failed for {}", config.repo))?;

    println!("{}", outcome.summary());
    Ok(())
}
