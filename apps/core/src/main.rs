// Tumbuh Guided Answers - CLI chat entry point.
// Thin presentation loop over the tumbuh-core engine.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep, Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tumbuh_core::config::AppConfig;
use tumbuh_core::i18n::Locale;
use tumbuh_core::session::ChatSession;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    info!(locale = %config.locale, "starting chat session");

    let mut session = ChatSession::new(config.locale);

    println!("Tumbuh - ask me anything about growing up.");
    println!("Commands: /lang <en|ar|ms>, /save <file>, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "/quit" || line == "/exit" {
            break;
        }
        if let Some(code) = line.strip_prefix("/lang ") {
            match Locale::from_code(code) {
                Some(locale) => {
                    session.set_locale(locale);
                    println!("language set to {}", locale.code());
                }
                None => println!("unknown language '{}' (expected en, ar or ms)", code.trim()),
            }
            continue;
        }
        if let Some(path) = line.strip_prefix("/save ") {
            let path = path.trim();
            match session.save_transcript(Path::new(path)) {
                Ok(()) => println!("transcript saved to {}", path),
                Err(e) => eprintln!("could not save transcript: {}", e),
            }
            continue;
        }

        match session.submit(line) {
            Ok(reply) => {
                sleep(Duration::from_millis(config.thinking_delay_ms)).await;
                println!("tumbuh> {}", reply.content);
                for tip in &reply.tips {
                    println!("   * {}", tip);
                }
                for link in &reply.resources {
                    println!("   > {} ({})", link.label, link.href);
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    println!("take care!");
    Ok(())
}
