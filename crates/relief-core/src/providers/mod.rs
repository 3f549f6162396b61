//! Model-service clients. One trait, two implementations: the live
//! Anthropic-messages client and a scripted fake for offline runs and tests.

pub mod anthropic;
pub mod fake;

use crate::errors::ProviderError;
use crate::model::{FaceImage, ModelReply};
use async_trait::async_trait;

/// A request/response capability against an external model service.
///
/// Implementations are process-wide, stateless, and shared across concurrent
/// requests. Each call is a single attempt; retry policy is deliberately the
/// caller's non-problem (a failed call degrades the verdict, nothing more).
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Text-only completion with an optional persona instruction.
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<ModelReply, ProviderError>;

    /// Completion over an image plus a rubric prompt, for vision-capable
    /// models.
    async fn complete_vision(
        &self,
        system: Option<&str>,
        image: &FaceImage,
        prompt: &str,
    ) -> Result<ModelReply, ProviderError>;

    fn provider_name(&self) -> &'static str;
}
