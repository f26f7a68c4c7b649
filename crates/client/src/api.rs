use std::time::Duration;

use caramel_core::constants::DEFAULT_PORT;
use caramel_core::{ChatReply, VisitorCountResponse};
use serde::Serialize;

use crate::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Picks the API origin the way the hosted page does: an explicit URL wins,
/// local hosts talk to the local server, anything else to `https://{host}`.
#[must_use]
pub fn resolve_base_url(explicit: Option<&str>, host: &str) -> String {
    if let Some(url) = explicit.map(str::trim).filter(|url| !url.is_empty()) {
        return url.trim_end_matches('/').to_owned();
    }
    if host == "localhost" || host == "127.0.0.1" {
        format!("http://localhost:{DEFAULT_PORT}")
    } else {
        format!("https://{host}")
    }
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    message: &'a str,
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

/// Thin typed client for the three gallery endpoints.
#[derive(Debug, Clone)]
pub struct GalleryApi {
    client: reqwest::Client,
    base_url: String,
}

impl GalleryApi {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn list_images_url(&self) -> String {
        format!("{}/api/list-images", self.base_url)
    }

    /// Public URLs of every gallery image.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status or a body
    /// that is not a JSON string array.
    pub async fn list_images(&self) -> Result<Vec<String>, ClientError> {
        let url = self.list_images_url();
        tracing::debug!(%url, "fetching image list");
        let response = self.client.get(&url).send().await?;
        let urls: Vec<String> = parse(response).await?;
        tracing::info!(count = urls.len(), "loaded image list");
        Ok(urls)
    }

    /// Registers a visit and returns the updated count.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status.
    pub async fn visitor_count(&self) -> Result<u64, ClientError> {
        let response =
            self.client.get(format!("{}/api/visitor-count", self.base_url)).send().await?;
        let body: VisitorCountResponse = parse(response).await?;
        Ok(body.count)
    }

    /// Sends one chat message.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-success status; a 400
    /// carries the server's `{"error": ...}` body.
    pub async fn chat(&self, message: &str, session_id: &str) -> Result<ChatReply, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatPayload { message, session_id })
            .send()
            .await?;
        parse(response).await
    }
}

async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { code: status.as_u16(), body });
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
