use anyhow::Result;
use clap::Parser;
use gemini_chat::app::{App, AppOptions};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gemini-chat")]
#[command(about = "Chat with a Gemini model from the terminal")]
struct CliArgs {
    /// Model id; overrides GEMINI_MODEL.
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature between 0.0 and 2.0.
    #[arg(long, value_parser = parse_temperature)]
    temperature: Option<f32>,

    /// System instruction sent with every turn.
    #[arg(long)]
    system: Option<String>,

    /// Print replies as they arrive.
    #[arg(long)]
    stream: bool,
}

fn parse_temperature(input: &str) -> std::result::Result<f32, String> {
    let value: f32 = input
        .parse()
        .map_err(|_| format!("Invalid temperature '{}'", input))?;
    if (0.0..=2.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Temperature {} out of range 0.0..=2.0", value))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_chat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    let options = AppOptions {
        model: args.model,
        temperature: args.temperature,
        system: args.system,
        stream: args.stream,
    };

    match App::new(options) {
        Ok(mut app) => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            match app.run(stdin, &mut stdout).await {
                Ok(_) => {
                    info!("Chat ended");
                    Ok(())
                }
                Err(e) => {
                    error!("Chat failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
