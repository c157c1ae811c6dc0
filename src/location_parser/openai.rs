use crate::location_parser::{ChatCompletionService, ChatMessage};
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Debug)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct OpenAIMessage {
    content: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Serialize, Deserialize, Debug)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

impl From<OpenAIResponse> for Result<String> {
    fn from(value: OpenAIResponse) -> Self {
        value
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenAI returned no choices"))?
            .message
            .content
            .ok_or_else(|| anyhow!("OpenAI returned an empty message"))
    }
}

#[derive(Clone, Debug)]
pub struct OpenAI {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl OpenAI {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl ChatCompletionService for OpenAI {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("OPENAI_API_KEY is not set"))?;

        debug!("Requesting chat completion from {}", self.model);
        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&OpenAIRequest {
                model: &self.model,
                messages,
                temperature: self.temperature,
            })
            .send()
            .await?
            .error_for_status()?;

        res.json::<OpenAIResponse>().await?.into()
    }
}
