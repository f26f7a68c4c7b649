//! Shared constants for the Caramel gallery.

/// Container holding the gallery photos.
pub const DEFAULT_IMAGE_CONTAINER: &str = "dog-photos";

/// Container holding the visitor counter document.
pub const VISITOR_CONTAINER: &str = "visitor-data";

/// Blob name of the visitor counter document.
pub const VISITOR_BLOB: &str = "visitor-count.json";

/// Message returned alongside a successful visitor count update.
pub const VISITOR_UPDATED_MESSAGE: &str = "Visitor count updated successfully";

/// Error string returned when the visitor count could not be updated.
pub const VISITOR_UPDATE_FAILED: &str = "Failed to update visitor count";

/// Error string returned for a chat request without a usable message.
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Fireworks inference API base URL (OpenAI-compatible).
pub const FIREWORKS_BASE_URL: &str = "https://api.fireworks.ai/inference";

/// Default Fireworks chat model.
pub const FIREWORKS_DEFAULT_MODEL: &str = "accounts/fireworks/models/llama-v3p1-8b-instruct";

/// Hugging Face inference router base URL (OpenAI-compatible).
pub const HUGGING_FACE_BASE_URL: &str = "https://router.huggingface.co";

/// Default Hugging Face chat model.
pub const HUGGING_FACE_DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";

/// Upper bound on generated tokens per chat reply.
pub const DEFAULT_CHAT_MAX_TOKENS: u32 = 50;

/// Sampling temperature for chat replies.
pub const DEFAULT_CHAT_TEMPERATURE: f32 = 0.7;

/// Replies shorter than this (in characters) are replaced by a fallback.
pub const MIN_REPLY_CHARS: usize = 5;

/// Retries for transient inference failures before falling back.
pub const DEFAULT_LLM_MAX_RETRIES: usize = 0;

/// Default listen port; matches the local Functions host the front end expects.
pub const DEFAULT_PORT: u16 = 7071;

/// Default public base URL for blobs served by this process.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:7071/media";
