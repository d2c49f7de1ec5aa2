pub mod assistant;
pub mod config;
pub mod error;
pub mod intent;
pub mod llm;
pub mod prompt;
pub mod session;
pub mod store;

// Re-export key types
pub use assistant::{Assistant, Turn};
pub use config::Settings;
pub use error::ChatError;
pub use intent::{Intent, IntentClassifier, KeywordClassifier};
pub use llm::{GroqClient, LlmClient, LlmReply, Usage};
pub use prompt::build_prompt;
pub use session::{ChatView, Conversation, Message, Role, SessionState};
pub use store::{AnalysisRecord, AnalysisStore, JsonlAnalysisStore};
