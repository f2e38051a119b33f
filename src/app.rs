//! Interactive chat loop driven by line-oriented input.

use crate::ai::gemini::types::{Content, GenerateContentConfig, GenerateContentResponse};
use crate::ai::{GeminiClient, GeminiHttpClient, GenerationService};
use crate::chat::ChatSession;
use crate::models::Config;
use crate::Result;
use futures::StreamExt;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

const PROMPT: &str = "> ";

/// Options taken from the command line. Anything left `None` falls back to
/// [`Config`] or the model's own defaults.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub system: Option<String>,
    pub stream: bool,
}

/// Holds one chat session and relays lines between it and a terminal.
pub struct App {
    session: ChatSession,
    stream: bool,
}

impl App {
    pub fn new(options: AppOptions) -> Result<Self> {
        let config = Config::from_env()?;
        Self::from_config(&config, options)
    }

    pub fn from_config(config: &Config, options: AppOptions) -> Result<Self> {
        let http = GeminiHttpClient::new(config.api_key.clone(), config.timeout)
            .with_base_url(config.base_url.clone());
        let client: Arc<dyn GenerationService> = Arc::new(GeminiClient::from_http(http));

        let model = options.model.unwrap_or_else(|| config.model.clone());
        let generation = GenerateContentConfig {
            system_instruction: options.system.map(Content::instruction),
            temperature: options.temperature,
            ..Default::default()
        };

        info!("Chat model: {} (streaming: {})", model, options.stream);
        let session = ChatSession::new(client, model, generation, Vec::new())?;
        Ok(Self::with_session(session, options.stream))
    }

    /// Wraps an existing session, e.g. one backed by a mock client.
    pub fn with_session(session: ChatSession, stream: bool) -> Self {
        Self { session, stream }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Reads lines until EOF or `/quit`. A failed turn is reported on
    /// `output` and the loop carries on; only I/O errors end it early.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();

            match line {
                "" => continue,
                "/quit" => break,
                "/history" => self.print_history(output).await?,
                text => {
                    if let Err(e) = self.turn(text, output).await {
                        warn!("Turn failed: {}", e);
                        output.write_all(format!("error: {}\n", e).as_bytes()).await?;
                    }
                }
            }
        }

        output.flush().await?;
        Ok(())
    }

    async fn turn<W>(&mut self, text: &str, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if self.stream {
            let mut fragments = self.session.send_message_stream(text)?;
            while let Some(fragment) = fragments.next().await {
                match fragment {
                    Ok(fragment) => {
                        if let Some(chunk) = fragment.text() {
                            output.write_all(chunk.as_bytes()).await?;
                        }
                    }
                    Err(e) => {
                        warn!("Stream fragment failed: {}", e);
                        output.write_all(format!("\nerror: {}\n", e).as_bytes()).await?;
                    }
                }
                output.flush().await?;
            }
            output.write_all(b"\n").await?;
        } else {
            let response = self.session.send_message(text).await?;
            output.write_all(render(&response).as_bytes()).await?;
        }
        Ok(())
    }

    async fn print_history<W>(&self, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let comprehensive = self.session.comprehensive_history().len();
        let line = match self.session.curated_history() {
            Ok(curated) => format!(
                "history: {} entries, {} curated\n",
                comprehensive,
                curated.len()
            ),
            Err(e) => format!("history: {} entries, curated view unavailable: {}\n", comprehensive, e),
        };
        output.write_all(line.as_bytes()).await?;
        Ok(())
    }
}

fn render(response: &GenerateContentResponse) -> String {
    match response.text() {
        Some(text) if !text.is_empty() => format!("{}\n", text),
        _ => format!(
            "(empty reply, finish reason: {})\n",
            response.finish_reason().unwrap_or("none")
        ),
    }
}
