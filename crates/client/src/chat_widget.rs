use std::path::PathBuf;

use caramel_core::ChatReply;
use caramel_core::persona::SLEEPY_REPLIES;
use rand::seq::IndexedRandom;

use crate::local_state::{CachedReply, LocalState};
use crate::{ClientError, GalleryApi};

pub const CHAT_CACHE_CAPACITY: usize = 50;

/// Cache key: trimmed, lower-cased message.
#[must_use]
pub fn cache_key(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Client side of the chat bubble.
///
/// Answers repeated questions from the local cache without touching the
/// network. Only real answers are cached; canned failure replies are not.
#[derive(Debug)]
pub struct ChatWidget {
    api: GalleryApi,
    state: LocalState,
    state_path: Option<PathBuf>,
}

impl ChatWidget {
    /// Widget whose state lives only in memory.
    #[must_use]
    pub fn new(api: GalleryApi, state: LocalState) -> Self {
        Self { api, state, state_path: None }
    }

    /// Loads state from `path` and writes it back after every change.
    ///
    /// # Errors
    /// Returns an error if an existing state file cannot be read.
    pub fn persistent(api: GalleryApi, path: PathBuf) -> Result<Self, ClientError> {
        let state = LocalState::load(&path)?;
        Ok(Self { api, state, state_path: Some(path) })
    }

    #[must_use]
    pub fn state(&self) -> &LocalState {
        &self.state
    }

    pub fn session_id(&mut self) -> String {
        self.state.session_id().to_owned()
    }

    /// Sends `message`, or answers it from the cache.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidInput`] for a blank message, the server's
    /// status for a rejected request, or a persistence error.
    pub async fn send(&mut self, message: &str) -> Result<ChatReply, ClientError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ClientError::InvalidInput("message is blank".to_owned()));
        }
        let key = cache_key(message);
        if let Some(hit) = self.state.chat_cache.iter().find(|entry| entry.key == key) {
            tracing::debug!(%key, "chat cache hit");
            return Ok(ChatReply { reply: hit.reply.clone(), cached: Some(true), error: None });
        }

        let session_id = self.session_id();
        let reply = match self.api.chat(message, &session_id).await {
            Ok(reply) => reply,
            Err(ClientError::Http(e)) => {
                tracing::warn!(error = %e, "chat request failed, answering locally");
                return Ok(ChatReply::failed(local_sleepy_reply().to_owned()));
            },
            Err(e) => return Err(e),
        };

        if !reply.is_error() {
            self.remember(key, reply.reply.clone());
        }
        self.persist()?;
        Ok(reply)
    }

    fn remember(&mut self, key: String, reply: String) {
        let cache = &mut self.state.chat_cache;
        cache.retain(|entry| entry.key != key);
        cache.push_back(CachedReply { key, reply });
        while cache.len() > CHAT_CACHE_CAPACITY {
            cache.pop_front();
        }
    }

    fn persist(&self) -> Result<(), ClientError> {
        match &self.state_path {
            Some(path) => self.state.save(path),
            None => Ok(()),
        }
    }
}

fn local_sleepy_reply() -> &'static str {
    SLEEPY_REPLIES.choose(&mut rand::rng()).copied().unwrap_or("Zzz...")
}
