use crate::error::ChatError;
use crate::intent::{Intent, IntentClassifier, KeywordClassifier};
use crate::llm::LlmClient;
use crate::prompt::build_prompt;
use crate::session::{Role, SessionState};
use crate::store::AnalysisStore;

/// Outcome of one user turn.
#[derive(Debug)]
pub struct Turn {
    pub intent: Intent,
    /// The assistant reply, or the transport error to show in its place.
    pub reply: Result<String, ChatError>,
    /// Whether the exchange was written to the analysis store.
    pub persisted: bool,
}

/// Drives one turn at a time: classify, build the prompt, call the model,
/// mutate the session, log code-related exchanges.
pub struct Assistant {
    llm: Box<dyn LlmClient>,
    store: Box<dyn AnalysisStore>,
    classifier: Box<dyn IntentClassifier>,
}

impl Assistant {
    pub fn new(llm: Box<dyn LlmClient>, store: Box<dyn AnalysisStore>) -> Self {
        Self {
            llm,
            store,
            classifier: Box::new(KeywordClassifier::new()),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Process one user input.
    ///
    /// The user message is recorded before the model call, so it survives a
    /// transport failure. The analysis-store write happens after the reply is
    /// recorded and its failure never rolls the reply back.
    pub async fn handle_input(&self, session: &mut SessionState, input: &str) -> Turn {
        session.append_message(Role::User, input);

        let intent = self.classifier.classify(input);
        let prompt = build_prompt(intent, input);
        tracing::debug!(?intent, "dispatching prompt");

        let reply = match self.llm.invoke(&prompt).await {
            Ok(reply) => reply.content,
            Err(e) => {
                return Turn {
                    intent,
                    reply: Err(e),
                    persisted: false,
                };
            }
        };

        session.append_message(Role::Assistant, reply.clone());

        let mut persisted = false;
        if intent.is_code_related() {
            match self.store.create_record(input, &reply) {
                Ok(()) => persisted = true,
                Err(e) => tracing::warn!("failed to record analysis: {e}"),
            }
        }

        Turn {
            intent,
            reply: Ok(reply),
            persisted,
        }
    }
}
