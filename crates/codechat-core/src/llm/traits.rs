use crate::error::ChatError;
use serde::Deserialize;

/// A completed model reply.
#[derive(Debug, Clone)]
pub struct LlmReply {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// The LLM client trait. One blocking call per turn; any timeout or retry
/// policy lives behind the implementation.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single prompt and wait for the full reply.
    async fn invoke(&self, prompt: &str) -> Result<LlmReply, ChatError>;
}
