use std::env;

/// Environment variable that overrides the default model identifier.
pub const MODEL_ENV: &str = "EMBEDCHECK_MODEL";

/// Optional Hugging Face hub credential, conventionally supplied via `.env`.
pub const HF_TOKEN_ENV: &str = "HUGGINGFACEHUB_API_TOKEN";

/// BAAI's small English sentence encoder, 384 dims.
pub const DEFAULT_MODEL: &str = "BAAI/bge-small-en-v1.5";

#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Model identifier the provider is asked to load.
    pub model: String,
    /// Hub credential handed to the provider binding. `None` is fine for
    /// public models; auth failures surface from the provider itself.
    pub hf_token: Option<String>,
}

impl EmbedConfig {
    /// Read configuration from the process environment, loading `.env` first
    /// if one is present. A missing or blank token is not an error.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let model = env::var(MODEL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let hf_token = env::var(HF_TOKEN_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self { model, hf_token }
    }

    /// Fixed-model config with no credential.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            hf_token: None,
        }
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self::with_model(DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    // from_env reads process-wide state, so these tests serialize.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(())).lock().expect("lock env")
    }

    fn set(key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    fn unset(key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn defaults_when_env_is_unset() {
        let _guard = env_lock();
        unset(MODEL_ENV);
        unset(HF_TOKEN_ENV);

        let config = EmbedConfig::from_env();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.hf_token.is_none());
    }

    #[test]
    fn model_env_overrides_default() {
        let _guard = env_lock();
        set(MODEL_ENV, "sentence-transformers/all-MiniLM-L6-v2");
        unset(HF_TOKEN_ENV);

        let config = EmbedConfig::from_env();
        assert_eq!(config.model, "sentence-transformers/all-MiniLM-L6-v2");
        unset(MODEL_ENV);
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        let _guard = env_lock();
        unset(MODEL_ENV);
        set(HF_TOKEN_ENV, "   ");

        let config = EmbedConfig::from_env();
        assert!(config.hf_token.is_none());
        unset(HF_TOKEN_ENV);
    }

    #[test]
    fn token_is_picked_up_when_present() {
        let _guard = env_lock();
        unset(MODEL_ENV);
        set(HF_TOKEN_ENV, "hf_test_token");

        let config = EmbedConfig::from_env();
        assert_eq!(config.hf_token.as_deref(), Some("hf_test_token"));
        unset(HF_TOKEN_ENV);
    }
}
