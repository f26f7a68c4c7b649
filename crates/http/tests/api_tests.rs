use std::sync::Arc;

use async_trait::async_trait;
use caramel_core::persona::{DISTRACTED_REPLIES, FALLBACK_REPLIES, SLEEPY_REPLIES};
use caramel_core::{InferenceConfig, InferenceProvider, ServerConfig};
use caramel_http::{AppState, create_router};
use caramel_storage::{BlobStore, MemoryBlobStore, StorageError};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> ServerConfig {
    ServerConfig {
        public_base_url: "https://photos.example.net".to_owned(),
        ..ServerConfig::default()
    }
}

async fn spawn_app(config: &ServerConfig, store: Arc<dyn BlobStore>) -> String {
    let state = AppState::new(config, store).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_router(Arc::new(state));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_default() -> String {
    spawn_app(&test_config(), Arc::new(MemoryBlobStore::new())).await
}

struct BrokenStore;

fn broken() -> StorageError {
    StorageError::Io {
        path: "/blobs".to_owned(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
}

#[async_trait]
impl BlobStore for BrokenStore {
    async fn create_container_if_missing(&self, _container: &str) -> Result<(), StorageError> {
        Err(broken())
    }

    async fn container_exists(&self, _container: &str) -> Result<bool, StorageError> {
        Err(broken())
    }

    async fn list_blobs(&self, _container: &str) -> Result<Vec<String>, StorageError> {
        Err(broken())
    }

    async fn get(&self, _container: &str, _name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(broken())
    }

    async fn put(&self, _container: &str, _name: &str, _bytes: Vec<u8>) -> Result<(), StorageError> {
        Err(broken())
    }
}

#[tokio::test]
async fn test_health_and_version() {
    let base = spawn_default().await;
    let health = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(health.status(), 200);
    assert_eq!(health.text().await.unwrap(), "ok");

    let version: Value =
        reqwest::get(format!("{base}/api/version")).await.unwrap().json().await.unwrap();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_list_images_returns_public_urls() {
    let store = MemoryBlobStore::with_blobs("dog-photos", [
        ("IMG_4208.jpg", vec![1]),
        ("IMG_0329.jpg", vec![2]),
    ]);
    let base = spawn_app(&test_config(), Arc::new(store)).await;

    let response = reqwest::get(format!("{base}/api/list-images")).await.unwrap();
    assert_eq!(response.status(), 200);
    let urls: Vec<String> = response.json().await.unwrap();
    assert_eq!(urls, vec![
        "https://photos.example.net/dog-photos/IMG_0329.jpg",
        "https://photos.example.net/dog-photos/IMG_4208.jpg",
    ]);
}

#[tokio::test]
async fn test_list_images_missing_container_is_empty() {
    let base = spawn_default().await;
    let response = reqwest::get(format!("{base}/api/list-images")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_list_images_storage_failure_is_500() {
    let base = spawn_app(&test_config(), Arc::new(BrokenStore)).await;
    let response = reqwest::get(format!("{base}/api/list-images")).await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "internal server error"}));
}

#[tokio::test]
async fn test_visitor_count_increments_for_get_and_post() {
    let base = spawn_default().await;
    let client = reqwest::Client::new();

    let first: Value =
        client.get(format!("{base}/api/visitor-count")).send().await.unwrap().json().await.unwrap();
    assert_eq!(first, json!({"count": 1, "message": "Visitor count updated successfully"}));

    let second: Value = client
        .post(format!("{base}/api/visitor-count"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["count"], 2);
}

#[tokio::test]
async fn test_visitor_count_failure_body() {
    let base = spawn_app(&test_config(), Arc::new(BrokenStore)).await;
    let response = reqwest::get(format!("{base}/api/visitor-count")).await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to update visitor count", "count": "Error"}));
}

#[tokio::test]
async fn test_chat_rejects_blank_and_non_json_bodies() {
    let base = spawn_default().await;
    let client = reqwest::Client::new();

    for body in [r#"{"message":"   "}"#, "{}", "not json at all"] {
        let response = client
            .post(format!("{base}/api/chat"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "body {body:?}");
        let json: Value = response.json().await.unwrap();
        assert_eq!(json, json!({"error": "Message is required"}));
    }
}

#[tokio::test]
async fn test_chat_without_token_is_sleepy() {
    let base = spawn_default().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "hello Caramel", "sessionId": "abc"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], true);
    let reply = body["reply"].as_str().unwrap();
    assert!(SLEEPY_REPLIES.contains(&reply));
}

#[tokio::test]
async fn test_chat_proxies_to_provider() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": " I guard the food bowl! "}}]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let mut inference =
        InferenceConfig::for_provider(InferenceProvider::Fireworks, Some("fw-token".to_owned()));
    inference.base_url = upstream.uri();
    inference.max_retries = 0;
    let config = ServerConfig { inference, ..test_config() };
    let base = spawn_app(&config, Arc::new(MemoryBlobStore::new())).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "what do you do?"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"reply": "I guard the food bowl!", "cached": false}));
}

#[tokio::test]
async fn test_chat_makes_one_upstream_request_by_default() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&upstream)
        .await;

    let mut inference =
        InferenceConfig::for_provider(InferenceProvider::Fireworks, Some("fw-token".to_owned()));
    inference.base_url = upstream.uri();
    let config = ServerConfig { inference, ..test_config() };
    let base = spawn_app(&config, Arc::new(MemoryBlobStore::new())).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "hi"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["error"], true);
    assert!(DISTRACTED_REPLIES.contains(&body["reply"].as_str().unwrap()));
    upstream.verify().await;
}

#[tokio::test]
async fn test_chat_empty_choices_is_flagged_distracted() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&upstream)
        .await;

    let mut inference =
        InferenceConfig::for_provider(InferenceProvider::Fireworks, Some("fw-token".to_owned()));
    inference.base_url = upstream.uri();
    let config = ServerConfig { inference, ..test_config() };
    let base = spawn_app(&config, Arc::new(MemoryBlobStore::new())).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "hi"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["error"], true);
    assert!(DISTRACTED_REPLIES.contains(&body["reply"].as_str().unwrap()));
}

#[tokio::test]
async fn test_chat_empty_model_reply_falls_back() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": ""}}]
        })))
        .mount(&upstream)
        .await;

    let mut inference =
        InferenceConfig::for_provider(InferenceProvider::HuggingFace, Some("hf-token".to_owned()));
    inference.base_url = upstream.uri();
    inference.max_retries = 0;
    let config = ServerConfig { inference, ..test_config() };
    let base = spawn_app(&config, Arc::new(MemoryBlobStore::new())).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "hi"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["cached"], false);
    assert!(FALLBACK_REPLIES.contains(&body["reply"].as_str().unwrap()));
}

#[tokio::test]
async fn test_chat_status_hides_token() {
    let base = spawn_default().await;
    let response = reqwest::get(format!("{base}/api/chat")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"ok": true, "tokenPresent": false, "provider": "fireworks"}));
}

#[tokio::test]
async fn test_preflight_is_answered_with_cors_headers() {
    let base = spawn_default().await;
    let client = reqwest::Client::new();

    for route in ["/api/list-images", "/api/visitor-count", "/api/chat"] {
        let response = client
            .request(reqwest::Method::OPTIONS, format!("{base}{route}"))
            .header("Origin", "https://caramel.example.org")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "route {route}");
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        let methods = headers["access-control-allow-methods"].to_str().unwrap();
        for expected in ["GET", "POST", "OPTIONS"] {
            assert!(methods.contains(expected), "{methods}");
        }
        let allowed = headers["access-control-allow-headers"].to_str().unwrap();
        assert!(allowed.eq_ignore_ascii_case("content-type"), "{allowed}");
    }
}

#[tokio::test]
async fn test_simple_requests_carry_allow_origin() {
    let base = spawn_default().await;
    let response = reqwest::Client::new()
        .get(format!("{base}/api/list-images"))
        .header("Origin", "https://caramel.example.org")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_media_serves_gallery_blobs_only() {
    let store = MemoryBlobStore::with_blobs("dog-photos", [("IMG_0329.jpg", vec![0xFF, 0xD8])]);
    let base = spawn_app(&test_config(), Arc::new(store)).await;

    let response = reqwest::get(format!("{base}/media/dog-photos/IMG_0329.jpg")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/jpeg");
    assert_eq!(response.bytes().await.unwrap().as_ref(), &[0xFF, 0xD8]);

    let missing = reqwest::get(format!("{base}/media/dog-photos/IMG_9999.jpg")).await.unwrap();
    assert_eq!(missing.status(), 404);

    let other = reqwest::get(format!("{base}/media/visitor-data/visitor-count.json")).await.unwrap();
    assert_eq!(other.status(), 404);
}

#[tokio::test]
async fn test_static_site_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Caramel</h1>").unwrap();
    let config = ServerConfig { static_dir: Some(dir.path().to_path_buf()), ..test_config() };
    let base = spawn_app(&config, Arc::new(MemoryBlobStore::new())).await;

    let page = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(page.status(), 200);
    assert_eq!(page.text().await.unwrap(), "<h1>Caramel</h1>");

    let api = reqwest::get(format!("{base}/api/list-images")).await.unwrap();
    assert_eq!(api.status(), 200);
}
