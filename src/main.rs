use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use embedcheck::config::EmbedConfig;
use embedcheck::embedder::{DEFAULT_SAMPLE_TEXT, Embedder};
use embedcheck::provider::FastembedProvider;

/// Load a sentence-embedding model on the CPU, embed one query, print the
/// vector.
#[derive(Debug, Parser)]
#[command(name = "embedcheck", version, about)]
struct Cli {
    /// Model identifier to load (overrides EMBEDCHECK_MODEL).
    #[arg(long)]
    model: Option<String>,

    /// Text to embed.
    #[arg(default_value = DEFAULT_SAMPLE_TEXT)]
    text: String,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the embedding vector.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("embedcheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = EmbedConfig::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }

    let mut embedder = Embedder::new(&FastembedProvider, &config)?;
    embedder.print_query(&cli.text)?;
    Ok(())
}
