//! Scripted model client for offline runs and tests. Replies are consumed
//! FIFO across both text and vision calls; prompts are recorded so tests can
//! assert on what was actually sent.

use super::ModelClient;
use crate::errors::ProviderError;
use crate::model::{FaceImage, ModelReply};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeClient {
    replies: Mutex<VecDeque<String>>,
    seen: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Every call fails with the given transport message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Prompts seen so far, in call order.
    pub fn seen_prompts(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    fn next_reply(&self, prompt: &str) -> Result<ModelReply, ProviderError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        if let Some(message) = &self.fail_with {
            return Err(ProviderError::Transport(message.clone()));
        }
        let text = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ProviderError::Transport("no scripted reply left".to_string()))?;
        Ok(ModelReply {
            text,
            provider: self.provider_name(),
            model: "fake".to_string(),
        })
    }
}

#[async_trait]
impl ModelClient for FakeClient {
    async fn complete(
        &self,
        _system: Option<&str>,
        prompt: &str,
    ) -> Result<ModelReply, ProviderError> {
        self.next_reply(prompt)
    }

    async fn complete_vision(
        &self,
        _system: Option<&str>,
        _image: &FaceImage,
        prompt: &str,
    ) -> Result<ModelReply, ProviderError> {
        self.next_reply(prompt)
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_drain_in_order_then_fail() {
        let client = FakeClient::with_replies(["one", "two"]);
        assert_eq!(client.complete(None, "a").await.unwrap().text, "one");
        assert_eq!(client.complete(None, "b").await.unwrap().text, "two");
        assert!(client.complete(None, "c").await.is_err());
        assert_eq!(client.seen_prompts(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn failing_client_always_errors() {
        let client = FakeClient::failing("wires cut");
        let err = client.complete(None, "x").await.unwrap_err();
        assert!(err.to_string().contains("wires cut"));
    }
}
