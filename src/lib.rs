//! Smoke-test utility for sentence-embedding models.
//!
//! Loads a named model on the CPU through a swappable
//! [`EmbeddingProvider`] and prints the embedding of a sample query to
//! stdout. One load, one query, nothing cached or stored.

pub mod config;
pub mod embedder;
pub mod error;
pub mod provider;

pub use config::EmbedConfig;
pub use embedder::{DEFAULT_SAMPLE_TEXT, Embedder};
pub use error::EmbedError;
pub use provider::{Device, EmbeddingProvider, FastembedProvider, ModelHandle};
