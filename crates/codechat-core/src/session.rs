use chrono::Local;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "New Conversation";
pub const UNTITLED_TITLE: &str = "Untitled Conversation";

/// Number of words taken from the first user message for the derived title.
const TITLE_WORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One chat transcript. The title is always derived from the messages and is
/// recomputed on every append; it is never set directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    fn new() -> Self {
        Self {
            id: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
        }
    }
}

/// Derive a display title from a message list: the first five
/// whitespace-separated words of the first user message, joined by single
/// spaces. No user message yields "New Conversation"; a user message with no
/// words yields "Untitled Conversation".
pub fn title_for(messages: &[Message]) -> String {
    match messages.iter().find(|m| m.role == Role::User) {
        None => DEFAULT_TITLE.to_string(),
        Some(first_user) => {
            let words: Vec<&str> = first_user
                .content
                .split_whitespace()
                .take(TITLE_WORDS)
                .collect();
            if words.is_empty() {
                UNTITLED_TITLE.to_string()
            } else {
                words.join(" ")
            }
        }
    }
}

/// All conversations for one process run, plus which one is active.
///
/// Owned by the caller and passed by `&mut` into every operation;
/// constructing it is the init-once step. Invariants: the set is never
/// empty, and `current` always points at a member.
#[derive(Debug, Clone)]
pub struct SessionState {
    conversations: Vec<Conversation>,
    current: usize,
}

impl SessionState {
    /// One empty conversation, selected.
    pub fn new() -> Self {
        Self {
            conversations: vec![Conversation::new()],
            current: 0,
        }
    }

    pub fn current(&self) -> &Conversation {
        &self.conversations[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Append to the active conversation and refresh its derived title.
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        let conversation = &mut self.conversations[self.current];
        conversation.messages.push(Message {
            role,
            content: content.into(),
        });
        conversation.title = title_for(&conversation.messages);
    }

    /// Start a fresh conversation and make it active. Conversations are never
    /// removed within a run.
    pub fn new_conversation(&mut self) {
        self.conversations.push(Conversation::new());
        self.current = self.conversations.len() - 1;
    }

    /// Switch to the first conversation (insertion order) whose derived title
    /// equals `title`. Titles are not unique, so the first match wins. An
    /// unknown title, or the title of the already-active conversation, leaves
    /// the selection unchanged.
    pub fn select(&mut self, title: &str) {
        if self.current().title == title {
            return;
        }
        if let Some(index) = self
            .conversations
            .iter()
            .position(|c| c.title == title)
        {
            self.current = index;
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot handed to the view layer after each turn: the active transcript
/// plus the selectable conversation list. The conversation id is exposed for
/// display only; selection is keyed by title.
#[derive(Debug, Clone, Serialize)]
pub struct ChatView {
    pub messages: Vec<Message>,
    pub titles: Vec<String>,
    pub selected: usize,
    pub conversation_id: String,
}

impl ChatView {
    pub fn of(session: &SessionState) -> Self {
        Self {
            messages: session.current().messages.clone(),
            titles: session
                .conversations()
                .iter()
                .map(|c| c.title.clone())
                .collect(),
            selected: session.current_index(),
            conversation_id: session.current().id.clone(),
        }
    }
}
