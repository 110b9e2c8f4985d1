use std::io::{self, Write};
use std::time::Instant;

use tracing::debug;

use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::provider::{Device, EmbeddingProvider, ModelHandle};

/// Sample text embedded when the caller does not supply one.
pub const DEFAULT_SAMPLE_TEXT: &str = "hello world";

/// Wraps a loaded sentence-embedding model and prints query embeddings.
///
/// Construction loads the model; after that the wrapper is stateless and
/// meant for one logical caller at a time.
pub struct Embedder {
    handle: Box<dyn ModelHandle>,
}

impl Embedder {
    /// Load `config.model` on the CPU through `provider`. Fails exactly when
    /// the provider does; no validation, retry, or recovery on top.
    pub fn new(
        provider: &dyn EmbeddingProvider,
        config: &EmbedConfig,
    ) -> Result<Self, EmbedError> {
        let handle = provider.load(&config.model, Device::Cpu, config.hf_token.as_deref())?;
        Ok(Self { handle })
    }

    /// Embed `text` and print the vector to stdout, one line.
    pub fn print_query(&mut self, text: &str) -> Result<(), EmbedError> {
        self.write_query(text, &mut io::stdout().lock())
    }

    /// Embed `text` and write the vector to `out` exactly as the provider
    /// returned it.
    pub fn write_query(&mut self, text: &str, out: &mut dyn Write) -> Result<(), EmbedError> {
        let start = Instant::now();
        let vector = self.handle.embed_query(text)?;
        debug!(
            dims = vector.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "embedded query"
        );
        writeln!(out, "{vector:?}").map_err(EmbedError::inference)
    }
}
