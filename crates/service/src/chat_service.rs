use std::sync::Arc;

use caramel_core::constants::{MESSAGE_REQUIRED, MIN_REPLY_CHARS};
use caramel_core::persona::ReplyPool;
use caramel_core::{ChatReply, ChatRequestBody, ChatStatus, InferenceConfig, InferenceProvider};
use caramel_llm::{ChatRequest, LlmClient, LlmError};
use rand::seq::IndexedRandom;

use crate::ServiceError;

/// Why a chat request was answered from a canned pool instead of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatFailure {
    MissingToken,
    Unreachable,
    MalformedResponse,
    Upstream,
}

impl ChatFailure {
    const fn pool(self) -> ReplyPool {
        match self {
            Self::MissingToken => ReplyPool::Sleepy,
            Self::Unreachable => ReplyPool::MissedCall,
            Self::MalformedResponse => ReplyPool::Dreaming,
            Self::Upstream => ReplyPool::Distracted,
        }
    }

    fn from_llm_error(err: &LlmError) -> Self {
        if err.is_transport_failure() {
            Self::Unreachable
        } else if err.is_parse_failure() {
            Self::MalformedResponse
        } else {
            Self::Upstream
        }
    }
}

/// Reply plus the failure that produced it, if any.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub reply: ChatReply,
    pub failure: Option<ChatFailure>,
}

/// Persona chat backed by a hosted chat-completions endpoint.
///
/// Failures never surface as errors: each kind maps to a themed canned reply
/// with `error: true`. Only a blank message is rejected.
pub struct ChatService {
    llm: Option<Arc<LlmClient>>,
    provider: InferenceProvider,
    model: String,
    persona: String,
    max_tokens: u32,
    temperature: f32,
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("llm", &self.llm)
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl ChatService {
    /// Builds the service. Without a token no client is created and every
    /// message gets a sleepy reply.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &InferenceConfig, persona: String) -> Result<Self, ServiceError> {
        let llm = match &config.token {
            Some(token) => Some(Arc::new(
                LlmClient::new(token.clone(), config.base_url.clone())?
                    .with_max_retries(config.max_retries),
            )),
            None => {
                tracing::warn!(
                    provider = config.provider.as_str(),
                    "no inference token configured, chat will answer with canned replies"
                );
                None
            },
        };
        Ok(Self {
            llm,
            provider: config.provider,
            model: config.model.clone(),
            persona,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    #[must_use]
    pub const fn token_present(&self) -> bool {
        self.llm.is_some()
    }

    #[must_use]
    pub const fn provider_name(&self) -> &'static str {
        self.provider.as_str()
    }

    #[must_use]
    pub fn status(&self) -> ChatStatus {
        ChatStatus {
            ok: true,
            token_present: self.token_present(),
            provider: self.provider_name().to_owned(),
        }
    }

    /// Answers one chat message in the persona's voice.
    ///
    /// # Errors
    /// Returns [`ServiceError::InvalidInput`] if the message is blank.
    pub async fn respond(&self, body: &ChatRequestBody) -> Result<ChatOutcome, ServiceError> {
        let Some(message) = body.trimmed_message() else {
            return Err(ServiceError::InvalidInput(MESSAGE_REQUIRED.to_owned()));
        };
        tracing::info!(
            session_id = body.session_id.as_deref().unwrap_or("-"),
            chars = message.chars().count(),
            "chat message received"
        );

        let Some(llm) = &self.llm else {
            return Ok(Self::failure(ChatFailure::MissingToken));
        };

        let request = ChatRequest::with_system(&self.model, &self.persona, message)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature);

        match llm.chat_completion(&request).await {
            Ok(text) => {
                let text = text.trim();
                if text.chars().count() < MIN_REPLY_CHARS {
                    tracing::debug!("model reply too short, using fallback");
                    return Ok(ChatOutcome {
                        reply: ChatReply::answered(pick(ReplyPool::Fallback).to_owned()),
                        failure: None,
                    });
                }
                Ok(ChatOutcome { reply: ChatReply::answered(text.to_owned()), failure: None })
            },
            Err(e) => {
                let failure = ChatFailure::from_llm_error(&e);
                tracing::warn!(error = %e, ?failure, "chat completion failed");
                Ok(Self::failure(failure))
            },
        }
    }

    fn failure(failure: ChatFailure) -> ChatOutcome {
        ChatOutcome {
            reply: ChatReply::failed(pick(failure.pool()).to_owned()),
            failure: Some(failure),
        }
    }
}

fn pick(pool: ReplyPool) -> &'static str {
    pool.replies().choose(&mut rand::rng()).copied().unwrap_or("Woof!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use caramel_core::persona::{
        DEFAULT_PERSONA, DISTRACTED_REPLIES, DREAMING_REPLIES, FALLBACK_REPLIES,
        MISSED_CALL_REPLIES, SLEEPY_REPLIES,
    };
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(base_url: &str, token: Option<&str>) -> ChatService {
        let mut config =
            InferenceConfig::for_provider(InferenceProvider::Fireworks, token.map(str::to_owned));
        config.base_url = base_url.to_owned();
        config.max_retries = 0;
        ChatService::from_config(&config, DEFAULT_PERSONA.to_owned()).unwrap()
    }

    fn message(text: &str) -> ChatRequestBody {
        ChatRequestBody { message: text.to_owned(), session_id: Some("session-1".to_owned()) }
    }

    fn completion(content: &str) -> serde_json::Value {
        serde_json::json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let service = service_for("http://127.0.0.1:1", Some("token"));
        let err = service.respond(&message("   ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(ref msg) if msg == MESSAGE_REQUIRED));
    }

    #[tokio::test]
    async fn test_missing_token_is_sleepy() {
        let service = service_for("http://127.0.0.1:1", None);
        assert!(!service.token_present());
        let outcome = service.respond(&message("hi")).await.unwrap();
        assert_eq!(outcome.failure, Some(ChatFailure::MissingToken));
        assert!(outcome.reply.is_error());
        assert!(SLEEPY_REPLIES.contains(&outcome.reply.reply.as_str()));
    }

    #[tokio::test]
    async fn test_success_is_trimmed_and_sends_persona() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "max_tokens": 50,
                "messages": [
                    {"role": "system", "content": DEFAULT_PERSONA},
                    {"role": "user", "content": "Do you like squirrels?"},
                ],
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion("  Woof, chasing them!  ")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server.uri(), Some("fw-token"));
        let outcome = service.respond(&message("  Do you like squirrels? ")).await.unwrap();
        assert_eq!(outcome.failure, None);
        assert_eq!(outcome.reply, ChatReply::answered("Woof, chasing them!".to_owned()));
    }

    #[tokio::test]
    async fn test_short_reply_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(" ok ")))
            .mount(&server)
            .await;

        let outcome =
            service_for(&server.uri(), Some("fw-token")).respond(&message("hi")).await.unwrap();
        assert!(!outcome.reply.is_error());
        assert_eq!(outcome.reply.cached, Some(false));
        assert!(FALLBACK_REPLIES.contains(&outcome.reply.reply.as_str()));
    }

    #[tokio::test]
    async fn test_upstream_status_is_distracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let outcome =
            service_for(&server.uri(), Some("fw-token")).respond(&message("hi")).await.unwrap();
        assert_eq!(outcome.failure, Some(ChatFailure::Upstream));
        assert!(DISTRACTED_REPLIES.contains(&outcome.reply.reply.as_str()));
    }

    #[tokio::test]
    async fn test_invalid_json_is_dreaming() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let outcome =
            service_for(&server.uri(), Some("fw-token")).respond(&message("hi")).await.unwrap();
        assert_eq!(outcome.failure, Some(ChatFailure::MalformedResponse));
        assert!(DREAMING_REPLIES.contains(&outcome.reply.reply.as_str()));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_missed_call() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = service_for(&format!("http://{addr}"), Some("fw-token"))
            .respond(&message("hi"))
            .await
            .unwrap();
        assert_eq!(outcome.failure, Some(ChatFailure::Unreachable));
        assert!(outcome.reply.is_error());
        assert!(MISSED_CALL_REPLIES.contains(&outcome.reply.reply.as_str()));
    }

    #[test]
    fn test_status_reports_provider() {
        let service = service_for("http://127.0.0.1:1", Some("fw-token"));
        let status = service.status();
        assert!(status.ok);
        assert!(status.token_present);
        assert_eq!(status.provider, "fireworks");
        assert!(!format!("{service:?}").contains("fw-token"));
    }
}
