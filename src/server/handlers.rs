use super::types::{GenerateRequest, GenerateResponse, SummaryRequest, SummaryResponse};
use crate::{
    Result,
    config::Config,
    llm::{ChatCompletionRequest, ClientFactory, resolve_api_key},
    prompt,
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u16 = 150;
const SUMMARY_TEMPERATURE: f32 = 0.3;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub clients: Arc<dyn ClientFactory>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let request_id = Uuid::new_v4();
    info!("Received generate request: {}", request_id);

    match generate_inner(&state, request).await {
        Ok(content) => {
            info!("Successfully processed generate request: {}", request_id);
            Json(GenerateResponse::ok(content))
        }
        Err(e) => {
            error!("Failed to process generate request {}: {}", request_id, e);
            Json(GenerateResponse::error(&e))
        }
    }
}

async fn generate_inner(state: &AppState, request: GenerateRequest) -> Result<String> {
    let api_key = resolve_api_key(
        request.api_key.as_deref(),
        state.config.llm.api_key.as_deref(),
    )?;

    let messages = request.normalized_messages()?;
    debug!("Message count: {}", messages.len());

    let client = state.clients.client(&api_key);
    let response = client
        .create_chat_completion(ChatCompletionRequest {
            messages,
            temperature: Some(request.temperature.unwrap_or(DEFAULT_TEMPERATURE)),
            max_tokens: Some(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)),
        })
        .await?;

    response
        .first_choice_text()
        .map(str::to_string)
        .ok_or_else(|| crate::Error::llm("Failed to generate AI response"))
}

pub async fn medical_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Json<SummaryResponse> {
    let request_id = Uuid::new_v4();
    info!("Received medical summary request: {}", request_id);

    match medical_summary_inner(&state, request).await {
        Ok(summary) => {
            info!(
                "Successfully processed medical summary request: {}",
                request_id
            );
            Json(SummaryResponse::ok(summary))
        }
        Err(e) => {
            error!(
                "Failed to process medical summary request {}: {}",
                request_id, e
            );
            Json(SummaryResponse::error(&e))
        }
    }
}

async fn medical_summary_inner(state: &AppState, request: SummaryRequest) -> Result<String> {
    let api_key = resolve_api_key(
        request.api_key.as_deref(),
        state.config.llm.api_key.as_deref(),
    )?;

    let chat_messages = request.parsed_messages()?;
    if request.patient_data.is_some() {
        debug!("Summary request carries patient data");
    }

    let system_message = prompt::medical_summary_system_message(
        request.category.as_deref().unwrap_or_default(),
        request.provider_type.as_deref().unwrap_or_default(),
    );

    let mut messages = Vec::with_capacity(chat_messages.len() + 1);
    messages.push(system_message);
    messages.extend(chat_messages);

    let client = state.clients.client(&api_key);
    let response = client
        .create_chat_completion(ChatCompletionRequest {
            messages,
            temperature: Some(SUMMARY_TEMPERATURE),
            max_tokens: None,
        })
        .await?;

    response
        .first_choice_text()
        .map(str::to_string)
        .ok_or_else(|| crate::Error::llm("Failed to generate medical summary"))
}
