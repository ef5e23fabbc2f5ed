use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use aula_core::config::{RelayConfig, api_keys};
use aula_core::llm::{ChatRequest, ExtractedReply, create_provider, extract_text, select_provider};
use aula_core::prompts::{Tier, compose};

#[derive(Parser, Debug)]
#[command(
    name = "aula",
    version,
    about = "Grade-adapted voice-tutor relay over Gemini/OpenAI backends"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP relay server (the default)
    Serve {
        /// Listen port; overrides the PORT environment variable
        #[arg(long)]
        port: Option<u16>,
    },

    /// Single question; prints the normalized reply and exits
    Ask {
        prompt: Vec<String>,

        /// Instructional tier: general, class3, class7, or class10
        #[arg(long, default_value = "general")]
        tier: String,

        /// Subject focus; "general" adds no subject clause
        #[arg(long)]
        subject: Option<String>,

        /// Force "gemini" or "openai" instead of the configured preference
        #[arg(long)]
        provider: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    api_keys::load_dotenv();

    let args = Cli::parse();
    let mut config = RelayConfig::from_env();

    match args.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            info!(
                version = env!("CARGO_PKG_VERSION"),
                port = config.port,
                "launching relay server"
            );
            aula_core::server::run(config).await
        }
        Commands::Ask {
            prompt,
            tier,
            subject,
            provider,
        } => {
            let question = prompt.join(" ");
            let question = question.trim();
            if question.is_empty() {
                bail!("nothing to ask: supply a question");
            }

            let provider = match provider.as_deref() {
                Some(name) => create_provider(name, &config)?,
                None => select_provider(&config)?,
            };

            let composed = compose(question, Tier::parse(&tier), subject.as_deref());
            info!(
                provider = provider.name(),
                model = provider.model(),
                prompt_len = composed.prompt.len(),
                "sending question upstream"
            );
            let request = ChatRequest::new(composed.prompt, composed.params);
            let envelope = provider.generate(&request).await?;

            match extract_text(&envelope) {
                Some(ExtractedReply::Matched(reply)) => {
                    println!("{reply}");
                    Ok(())
                }
                Some(ExtractedReply::Unrecognized(raw)) => {
                    bail!("no recognized shape in provider response: {raw}")
                }
                None => bail!("provider returned no output"),
            }
        }
    }
}
