use super::mocks::{MockClientFactory, MockLlmClient};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use medrelay::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            auth_token: None,
        },
        llm: LlmConfig {
            base_url: String::new(),
            api_key: Some("config-api-key".to_string()),
            model: "gpt-4o".to_string(),
        },
    }
}

/// Create a test configuration without any configured API key
pub fn create_test_config_without_key() -> Config {
    let mut config = create_test_config();
    config.llm.api_key = None;
    config
}

/// Build the application router backed by a mock LLM client
pub fn create_test_app(
    config: Config,
    client: MockLlmClient,
) -> (Router, Arc<MockLlmClient>, Arc<MockClientFactory>) {
    let factory = Arc::new(MockClientFactory::new(client));
    let client_handle = factory.client_handle();

    let state = AppState {
        config: Arc::new(config),
        clients: factory.clone(),
    };

    (server::router(state), client_handle, factory)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
