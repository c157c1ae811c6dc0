use crate::location_parser::parse::parse_suggestions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "あなたは旅行プランナーです。\
指定された地域から日帰りで回れる人気の観光地を3つ提案してください。\
観光地の名前だけを「1. 名前」の形式で1行に1つずつ返し、それ以外の説明は含めないでください。";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Asks the model for sights in `region` and parses its reply.
pub struct LocationParser<'a, T>
where
    T: ChatCompletionService,
{
    pub provider: &'a T,
    pub region: String,
}

impl<T> LocationParser<'_, T>
where
    T: ChatCompletionService,
{
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!("地域: {}", self.region)),
        ]
    }

    /// Never fails: a provider error is logged and yields no suggestions.
    pub async fn parse_locations(&self) -> Vec<String> {
        match self.provider.complete(&self.messages()).await {
            Ok(raw) => {
                let suggestions = parse_suggestions(&raw);
                debug!(
                    "Model suggested {:?} for region '{}'",
                    suggestions, self.region
                );
                suggestions
            }
            Err(e) => {
                warn!("Chat completion failed for region '{}': {:#}", self.region, e);
                vec![]
            }
        }
    }
}
