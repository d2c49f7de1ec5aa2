/// Result of processing a slash command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Quit the application.
    Quit,
    /// Start a fresh conversation.
    NewConversation,
    /// List conversation titles.
    ListConversations,
    /// Switch to the conversation with this title.
    SwitchConversation(String),
    /// Not a command - treat as regular input.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/new" => CommandResult::NewConversation,
        "/conversations" | "/list" => CommandResult::ListConversations,
        "/switch" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /switch <conversation-title>".into())
            } else {
                CommandResult::SwitchConversation(arg.to_string())
            }
        }
        "/version" => {
            CommandResult::Message(format!("codechat v{}", env!("CARGO_PKG_VERSION")))
        }

        // Unknown command
        _ => {
            if input.starts_with('/') {
                CommandResult::Message(format!("Unknown command: {cmd}. Type /help for commands."))
            } else {
                CommandResult::NotACommand
            }
        }
    }
}

fn show_help() -> CommandResult {
    let help_text = "\
codechat commands

  CONVERSATIONS
    /new                      Start a fresh conversation
    /conversations, /list     List conversations (current is marked)
    /switch <title>           Switch to a conversation by title

  OTHER
    /help, /h                 Show this help message
    /version                  Show version information
    /exit, /quit, /q          Quit the application

Anything else is sent to the assistant: paste code for analysis, describe
an idea to convert into code, or just chat.";

    CommandResult::Message(help_text.into())
}
