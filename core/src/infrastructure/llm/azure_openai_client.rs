use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{AzureOpenAIConfig, entities::app_errors::CoreError},
    reaction::{ports::LLMClient, value_objects::CompletionRequest},
};

#[derive(Debug, Clone)]
pub struct AzureOpenAIClient {
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl AzureOpenAIClient {
    pub fn new(config: &AzureOpenAIConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CoreError::ExternalServiceError(format!("failed to build http client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            deployment: config.deployment.clone(),
            api_version: config.api_version.clone(),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint, self.deployment
        )
    }

    async fn call_chat_completions(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", &self.api_version)])
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Azure OpenAI request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Azure OpenAI error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Azure OpenAI response: {}", e);
            CoreError::InvalidLlmResponse(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| CoreError::InvalidLlmResponse("No response from LLM".to_string()))
    }
}

impl From<CompletionRequest> for ChatCompletionRequest {
    fn from(request: CompletionRequest) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_response.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }
}

impl LLMClient for AzureOpenAIClient {
    fn is_configured(&self) -> bool {
        true
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        self.call_chat_completions(request.into()).await
    }
}
