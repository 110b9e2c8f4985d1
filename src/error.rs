use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The two failure categories the wrapper surfaces. Everything underneath is
/// the provider's error, carried in `source` untouched.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The model could not be loaded: identifier outside the provider's
    /// catalog, download or auth failure, runtime initialization failure.
    #[error("failed to load embedding model '{model}'")]
    Init {
        model: String,
        #[source]
        source: BoxError,
    },

    /// A loaded model failed to embed the query text.
    #[error("failed to embed query")]
    Inference {
        #[source]
        source: BoxError,
    },
}

impl EmbedError {
    pub fn init(model: &str, source: impl Into<BoxError>) -> Self {
        Self::Init {
            model: model.to_string(),
            source: source.into(),
        }
    }

    pub fn inference(source: impl Into<BoxError>) -> Self {
        Self::Inference {
            source: source.into(),
        }
    }
}
