use std::fmt;
use std::time::Instant;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::{debug, info};

use crate::error::EmbedError;

/// Execution device for model inference. Only CPU inference is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Device {
    #[default]
    Cpu,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
        }
    }
}

/// Loads embedding models by identifier. The concrete provider sits behind
/// this trait so tests can run against a stub instead of the model hub.
pub trait EmbeddingProvider {
    /// Load `model` for inference on `device`. `auth` is the hub credential,
    /// passed explicitly; providers that serve public models ignore it.
    fn load(
        &self,
        model: &str,
        device: Device,
        auth: Option<&str>,
    ) -> Result<Box<dyn ModelHandle>, EmbedError>;
}

/// A loaded model. `embed_query` takes `&mut self`: the underlying inference
/// session is not safe for shared access.
pub trait ModelHandle: fmt::Debug {
    fn embed_query(&mut self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// fastembed-backed provider, ONNX Runtime with CPU execution.
pub struct FastembedProvider;

/// Model identifiers fastembed can serve, with their dimensions.
fn fastembed_model(identifier: &str) -> Option<(EmbeddingModel, usize)> {
    match identifier {
        "BAAI/bge-small-en-v1.5" => Some((EmbeddingModel::BGESmallENV15, 384)),
        "BAAI/bge-base-en-v1.5" => Some((EmbeddingModel::BGEBaseENV15, 768)),
        "sentence-transformers/all-MiniLM-L6-v2" => Some((EmbeddingModel::AllMiniLML6V2, 384)),
        "nomic-ai/nomic-embed-text-v1.5" => Some((EmbeddingModel::NomicEmbedTextV15, 768)),
        _ => None,
    }
}

impl EmbeddingProvider for FastembedProvider {
    fn load(
        &self,
        model: &str,
        device: Device,
        auth: Option<&str>,
    ) -> Result<Box<dyn ModelHandle>, EmbedError> {
        let (model_type, dims) = fastembed_model(model).ok_or_else(|| {
            EmbedError::init(
                model,
                format!(
                    "unknown model '{model}', known: BAAI/bge-small-en-v1.5, \
                     BAAI/bge-base-en-v1.5, sentence-transformers/all-MiniLM-L6-v2, \
                     nomic-ai/nomic-embed-text-v1.5"
                ),
            )
        })?;

        if let Some(token) = auth {
            // fastembed resolves hub credentials through the environment, so
            // the token has to land there before the first download request.
            if std::env::var_os("HF_TOKEN").is_none() {
                unsafe {
                    std::env::set_var("HF_TOKEN", token);
                }
            }
        }

        info!(%model, %device, "loading embedding model");
        let start = Instant::now();
        // No execution providers configured: ONNX Runtime stays on CPU.
        let opts = InitOptions::new(model_type).with_show_download_progress(false);
        let session = TextEmbedding::try_new(opts).map_err(|e| EmbedError::init(model, e))?;
        debug!(
            dims,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "model ready"
        );

        Ok(Box::new(FastembedHandle { session }))
    }
}

struct FastembedHandle {
    session: TextEmbedding,
}

impl fmt::Debug for FastembedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastembedHandle").finish_non_exhaustive()
    }
}

impl ModelHandle for FastembedHandle {
    fn embed_query(&mut self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let embeddings = self
            .session
            .embed(vec![text], None)
            .map_err(EmbedError::inference)?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| EmbedError::inference("no embedding returned"))
    }
}
