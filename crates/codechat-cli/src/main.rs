use anyhow::Result;
use clap::Parser;

mod app;
mod commands;

#[derive(Parser)]
#[command(name = "codechat")]
#[command(about = "codechat - code assistant and chat")]
#[command(version)]
struct Cli {
    /// Run a single prompt and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// LLM model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut settings = codechat_core::Settings::load();

    if let Some(ref model) = cli.model {
        settings.llm.model = model.clone();
    }
    if let Some(ref url) = cli.base_url {
        settings.llm.base_url = Some(url.clone());
    }

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, &prompt).await?;
    } else {
        app::run_repl(settings).await?;
    }

    Ok(())
}
