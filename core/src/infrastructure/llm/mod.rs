use crate::domain::{
    common::entities::app_errors::CoreError,
    reaction::{ports::LLMClient, value_objects::CompletionRequest},
};

pub mod azure_openai_client;

use azure_openai_client::AzureOpenAIClient;

#[derive(Debug, Clone)]
pub enum LlmBackend {
    AzureOpenAI(AzureOpenAIClient),
    /// No credentials configured; every request degrades to the fallback bundle.
    Unavailable,
}

impl LLMClient for LlmBackend {
    fn is_configured(&self) -> bool {
        matches!(self, LlmBackend::AzureOpenAI(_))
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        match self {
            LlmBackend::AzureOpenAI(client) => client.complete(request).await,
            LlmBackend::Unavailable => Err(CoreError::LlmUnavailable),
        }
    }
}
