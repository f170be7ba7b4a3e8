//! Terminal chat interface for the askme RAG assistant.
//!
//! Reads questions line by line, answers each one through the retrieval +
//! generation engine, and prints the reply with its sources. One turn is
//! in flight at a time; the prompt blocks until the answer arrives.

use std::io::{BufRead, Write};
use std::sync::Arc;

use askme_chat::{ChatEngine, Session};
use askme_model::OllamaClient;
use askme_rag::{OllamaEmbeddingProvider, Retriever};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Directory holding the pre-built vector index.
const DEFAULT_INDEX_DIR: &str = "index";

/// Default generation model served by Ollama.
const DEFAULT_MODEL: &str = "llama3.2";

/// Runtime configuration, environment-only.
struct Config {
    index_dir: String,
    ollama_url: String,
    model: String,
    embed_model: Option<String>,
}

impl Config {
    fn from_env() -> Self {
        Self {
            index_dir: std::env::var("ASKME_INDEX_DIR")
                .unwrap_or_else(|_| DEFAULT_INDEX_DIR.to_string()),
            ollama_url: std::env::var("ASKME_OLLAMA_URL")
                .unwrap_or_else(|_| askme_model::ollama::DEFAULT_OLLAMA_URL.to_string()),
            model: std::env::var("ASKME_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            embed_model: std::env::var("ASKME_EMBED_MODEL").ok(),
        }
    }
}

fn build_engine(config: &Config) -> anyhow::Result<ChatEngine> {
    let mut embedder = OllamaEmbeddingProvider::new(&config.ollama_url);
    if let Some(model) = &config.embed_model {
        embedder = embedder.with_model(model);
    }

    let retriever = Retriever::for_index_dir(Arc::new(embedder), config.index_dir.as_str());
    let llm = OllamaClient::new(&config.ollama_url, &config.model);

    Ok(ChatEngine::builder().retriever(retriever).llm(Arc::new(llm)).build()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();
    debug!(index_dir = %config.index_dir, model = %config.model, "starting");

    let engine = build_engine(&config)?;
    let mut session = Session::new();

    println!("askme — ask about your documents (model: {})", config.model);
    println!("Press Ctrl-D or type 'exit' to quit.\n");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        // A failed turn leaves the question in history with no reply.
        match engine.respond(&mut session, input).await {
            Ok(response) => {
                println!("\naskme> {}\n", response.text);
                println!("sources: {:?}\n", response.sources);
            }
            Err(e) => {
                eprintln!("\nerror: {e}\n");
            }
        }
    }

    println!("\nbye ({} entries this session)", session.len());
    Ok(())
}
