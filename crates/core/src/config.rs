//! Server configuration assembled from environment variables.

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CHAT_MAX_TOKENS, DEFAULT_CHAT_TEMPERATURE, DEFAULT_IMAGE_CONTAINER,
    DEFAULT_LLM_MAX_RETRIES, DEFAULT_PUBLIC_BASE_URL, FIREWORKS_BASE_URL, FIREWORKS_DEFAULT_MODEL,
    HUGGING_FACE_BASE_URL, HUGGING_FACE_DEFAULT_MODEL,
};
use crate::env_config::{env_non_empty, env_parse_with_default};
use crate::persona::DEFAULT_PERSONA;
use crate::{CoreError, Result};

/// Hosted inference provider behind the chat endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceProvider {
    Fireworks,
    HuggingFace,
}

impl InferenceProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fireworks => "fireworks",
            Self::HuggingFace => "huggingface",
        }
    }

    #[must_use]
    pub const fn token_var(self) -> &'static str {
        match self {
            Self::Fireworks => "FIREWORKS_API_TOKEN",
            Self::HuggingFace => "HF_TOKEN",
        }
    }

    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Fireworks => FIREWORKS_BASE_URL,
            Self::HuggingFace => HUGGING_FACE_BASE_URL,
        }
    }

    #[must_use]
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Fireworks => FIREWORKS_DEFAULT_MODEL,
            Self::HuggingFace => HUGGING_FACE_DEFAULT_MODEL,
        }
    }
}

/// Connection and sampling settings for the chat upstream.
#[derive(Clone)]
pub struct InferenceConfig {
    pub provider: InferenceProvider,
    pub token: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub max_retries: usize,
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("provider", &self.provider)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl InferenceConfig {
    /// Defaults for `provider` with the given token.
    #[must_use]
    pub fn for_provider(provider: InferenceProvider, token: Option<String>) -> Self {
        Self {
            provider,
            token,
            base_url: provider.default_base_url().to_owned(),
            model: provider.default_model().to_owned(),
            max_tokens: DEFAULT_CHAT_MAX_TOKENS,
            temperature: DEFAULT_CHAT_TEMPERATURE,
            max_retries: DEFAULT_LLM_MAX_RETRIES,
        }
    }

    /// Picks the provider from whichever token is present.
    ///
    /// `FIREWORKS_API_TOKEN` wins; `HF_TOKEN` is only consulted when it is absent.
    /// With neither set the config still names Fireworks, without a token.
    #[must_use]
    pub fn from_env() -> Self {
        let (provider, token) = match env_non_empty(InferenceProvider::Fireworks.token_var()) {
            Some(token) => (InferenceProvider::Fireworks, Some(token)),
            None => match env_non_empty(InferenceProvider::HuggingFace.token_var()) {
                Some(token) => (InferenceProvider::HuggingFace, Some(token)),
                None => (InferenceProvider::Fireworks, None),
            },
        };
        let defaults = Self::for_provider(provider, token);
        Self {
            base_url: env_non_empty("GALLERY_LLM_BASE_URL").unwrap_or(defaults.base_url),
            model: env_non_empty("GALLERY_CHAT_MODEL").unwrap_or(defaults.model),
            max_tokens: env_parse_with_default("GALLERY_CHAT_MAX_TOKENS", defaults.max_tokens),
            temperature: env_parse_with_default("GALLERY_CHAT_TEMPERATURE", defaults.temperature),
            max_retries: env_parse_with_default("GALLERY_LLM_MAX_RETRIES", defaults.max_retries),
            ..defaults
        }
    }
}

/// Everything the HTTP server needs to wire its services.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Root directory of the filesystem blob store; `None` keeps blobs in memory.
    pub storage_dir: Option<PathBuf>,
    /// Prefix for public image URLs, without trailing slash.
    pub public_base_url: String,
    pub image_container: String,
    pub inference: InferenceConfig,
    pub persona: String,
    /// Directory served as the static site, if any.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_owned(),
            image_container: DEFAULT_IMAGE_CONTAINER.to_owned(),
            inference: InferenceConfig::for_provider(InferenceProvider::Fireworks, None),
            persona: DEFAULT_PERSONA.to_owned(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from `GALLERY_*` and token environment variables.
    ///
    /// # Errors
    /// Returns an error if `GALLERY_PERSONA_FILE` is set but cannot be read or is empty.
    pub fn from_env() -> Result<Self> {
        let persona = match env_non_empty("GALLERY_PERSONA_FILE") {
            Some(path) => load_persona(&PathBuf::from(path))?,
            None => DEFAULT_PERSONA.to_owned(),
        };
        let storage_dir = env_non_empty("GALLERY_STORAGE_DIR").map(PathBuf::from).or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("caramel-gallery").join("blobs"))
        });
        let public_base_url = env_non_empty("GALLERY_PUBLIC_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            storage_dir,
            public_base_url,
            image_container: env_non_empty("GALLERY_IMAGE_CONTAINER")
                .unwrap_or_else(|| DEFAULT_IMAGE_CONTAINER.to_owned()),
            inference: InferenceConfig::from_env(),
            persona,
            static_dir: env_non_empty("GALLERY_STATIC_DIR").map(PathBuf::from),
        })
    }
}

fn load_persona(path: &std::path::Path) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::Config(format!("persona file {} is empty", path.display())));
    }
    Ok(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_debug_masks_token() {
        let config = InferenceConfig::for_provider(
            InferenceProvider::Fireworks,
            Some("fw-secret-token".to_owned()),
        );
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("fw-secret-token"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_provider_defaults() {
        let hf = InferenceConfig::for_provider(InferenceProvider::HuggingFace, None);
        assert_eq!(hf.base_url, HUGGING_FACE_BASE_URL);
        assert_eq!(hf.provider.token_var(), "HF_TOKEN");
        assert_eq!(hf.max_tokens, DEFAULT_CHAT_MAX_TOKENS);
    }

    #[test]
    fn test_load_persona_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.txt");
        std::fs::write(&path, "  \n").unwrap();
        assert!(matches!(load_persona(&path), Err(CoreError::Config(_))));
        std::fs::write(&path, "You are a corgi.\n").unwrap();
        assert_eq!(load_persona(&path).unwrap(), "You are a corgi.");
    }
}
