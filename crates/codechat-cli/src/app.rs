use anyhow::Result;
use codechat_core::{Assistant, ChatView, Role, SessionState, Settings};
use std::io::{self, BufRead, Write};

use crate::commands::{self, CommandResult};

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(settings: &Settings, prompt: &str) -> Result<()> {
    let assistant = build_assistant(settings)?;
    let mut session = SessionState::new();

    let turn = assistant.handle_input(&mut session, prompt).await;
    match turn.reply {
        Ok(reply) => println!("{reply}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}

fn build_assistant(settings: &Settings) -> Result<Assistant> {
    let llm = settings.build_llm_client()?;
    let store = settings.build_analysis_store()?;
    Ok(Assistant::new(llm, store))
}

// ── Interactive REPL ────────────────────────────────────────────────────

pub async fn run_repl(settings: Settings) -> Result<()> {
    let assistant = build_assistant(&settings)?;
    let mut session = SessionState::new();

    println!("codechat");
    println!("Enter code for analysis, describe an idea to convert into code, or just chat.");
    println!("Type /help for commands.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match commands::handle_command(input) {
            CommandResult::Quit => break,
            CommandResult::Message(msg) => {
                println!("{msg}\n");
            }
            CommandResult::NewConversation => {
                session.new_conversation();
                println!("Started a new conversation.\n");
            }
            CommandResult::ListConversations => {
                render_conversation_list(&session);
            }
            CommandResult::SwitchConversation(title) => {
                session.select(&title);
                render_transcript(&session);
            }
            CommandResult::NotACommand => {
                let turn = assistant.handle_input(&mut session, input).await;
                match turn.reply {
                    Ok(reply) => println!("\n{reply}\n"),
                    // Inline notice in place of a reply; the loop continues.
                    Err(e) => eprintln!("\nError: {e}\n"),
                }
            }
        }
    }

    Ok(())
}

fn render_conversation_list(session: &SessionState) {
    let view = ChatView::of(session);
    println!("Conversations:");
    for (index, title) in view.titles.iter().enumerate() {
        let marker = if index == view.selected { "*" } else { " " };
        println!("  {marker} {title}");
    }
    println!();
}

fn render_transcript(session: &SessionState) {
    let view = ChatView::of(session);
    println!("── {} ──", session.current().title);
    for message in &view.messages {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        println!("[{who}] {}", message.content);
    }
    println!();
}
