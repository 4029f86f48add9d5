use async_trait::async_trait;
use medrelay::{
    Error, Result,
    llm::{
        ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ClientFactory,
        LlmClient,
    },
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory that records every resolved key and hands back one shared mock.
pub struct MockClientFactory {
    client: Arc<MockLlmClient>,
    keys: Arc<Mutex<Vec<String>>>,
}

impl MockClientFactory {
    pub fn new(client: MockLlmClient) -> Self {
        Self {
            client: Arc::new(client),
            keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn client_handle(&self) -> Arc<MockLlmClient> {
        self.client.clone()
    }

    pub fn resolved_keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl ClientFactory for MockClientFactory {
    fn client(&self, api_key: &str) -> Arc<dyn LlmClient> {
        self.keys.lock().unwrap().push(api_key.to_string());
        self.client.clone()
    }
}

// Helper functions for creating test data

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: Some("Stop".to_string()),
        }],
        usage: None,
    }
}

pub fn create_empty_chat_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![],
        usage: None,
    }
}
