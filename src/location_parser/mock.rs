use crate::location_parser::core::{ChatCompletionService, ChatMessage};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockChatCompletion {
    reply: Result<String, String>,
    prompts: Arc<RwLock<Vec<Vec<ChatMessage>>>>,
}

impl MockChatCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            prompts: Arc::default(),
        }
    }

    pub async fn prompts(&self) -> Vec<Vec<ChatMessage>> {
        self.prompts.read().await.clone()
    }
}

#[async_trait::async_trait]
impl ChatCompletionService for MockChatCompletion {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.prompts.write().await.push(messages.to_vec());
        self.reply.clone().map_err(|reason| anyhow!(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chat_completion() {
        let provider = MockChatCompletion::replying("Tokyo Tower");
        let reply = provider
            .complete(&[ChatMessage::user("東京")])
            .await
            .unwrap();

        assert_eq!(reply, "Tokyo Tower");
        assert_eq!(provider.prompts().await, vec![vec![ChatMessage::user("東京")]]);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let provider = MockChatCompletion::failing("timeout");
        let err = provider.complete(&[]).await.unwrap_err();

        assert_eq!(err.to_string(), "timeout");
        assert_eq!(provider.prompts().await.len(), 1);
    }
}
