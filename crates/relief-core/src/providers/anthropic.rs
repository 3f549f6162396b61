//! Live client for an Anthropic-messages-shaped endpoint.

use super::ModelClient;
use crate::config::CourtConfig;
use crate::errors::ProviderError;
use crate::model::{FaceImage, ModelReply};
use crate::vision::sniff_media_type;
use async_trait::async_trait;
use serde_json::json;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

pub struct AnthropicClient {
    model: String,
    api_base: String,
    api_key: String,
    client: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(config: &CourtConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.call_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            model: config.model_id.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        }
    }

    async fn invoke(
        &self,
        system: Option<&str>,
        content: serde_json::Value,
    ) -> Result<ModelReply, ProviderError> {
        let url = format!("{}/v1/messages", self.api_base);

        let mut body = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": content }],
        });
        if let Some(system) = system.filter(|s| !s.is_empty()) {
            body["system"] = json!(system);
        }

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ProviderError::MalformedReply(e.to_string()))?;
        let text = reply
            .pointer("/content/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ProviderError::MalformedReply("reply missing content text".to_string())
            })?
            .to_string();

        Ok(ModelReply {
            text,
            provider: self.provider_name(),
            model: self.model.clone(),
        })
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<ModelReply, ProviderError> {
        self.invoke(system, json!(prompt)).await
    }

    async fn complete_vision(
        &self,
        system: Option<&str>,
        image: &FaceImage,
        prompt: &str,
    ) -> Result<ModelReply, ProviderError> {
        let content = json!([
            {
                "type": "image",
                "source": {
                    "type": "base64",
                    "media_type": sniff_media_type(&image.base64),
                    "data": image.base64,
                }
            },
            { "type": "text", "text": prompt }
        ]);
        self.invoke(system, content).await
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
