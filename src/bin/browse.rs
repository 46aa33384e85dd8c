//! Vocalog Browse - 终端目录浏览器
//!
//! 经由 relay 发现语言与口音，按筛选列出共享音色。

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use vocalog::application::views::{
    breadcrumb_text, CatalogView, VoiceGrid, EMPTY_HINT, EMPTY_TITLE,
};
use vocalog::application::{CatalogBrowser, SearchDebouncer};
use vocalog::config::{init_tracing, load_config, load_config_from_path};
use vocalog::infrastructure::adapters::{MediaElementPlayer, RelayCatalogClient};
use vocalog::infrastructure::InMemoryCatalogCache;

const INIT_ALERT: &str = "Error loading voices. Please check the API key.";

/// Vocalog Browse - ElevenLabs shared voice catalog
#[derive(Parser, Debug)]
#[command(name = "vocalog-browse")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Relay endpoint, overrides catalog.relay_url
    #[arg(short = 'r', long = "relay", value_name = "URL")]
    relay: Option<String>,

    /// Language code to browse (e.g. en)
    #[arg(short = 'l', long = "language")]
    language: Option<String>,

    /// Accent code within the language (e.g. en-GB)
    #[arg(short = 'a', long = "accent", requires = "language")]
    accent: Option<String>,

    /// Filter the language list by name
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Start the preview of a listed voice
    #[arg(short = 'p', long = "play", value_name = "VOICE_ID", requires = "language")]
    play: Option<String>,

    /// Print the view as JSON
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config_from_path(Some(path.as_path())),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    if let Some(relay) = &cli.relay {
        config.catalog.relay_url = relay.clone();
    }

    init_tracing(&config.log);

    let catalog = Arc::new(RelayCatalogClient::new(config.catalog.client())?);
    let cache = InMemoryCatalogCache::new().arc();
    let player = Arc::new(MediaElementPlayer::new());
    let mut browser = CatalogBrowser::new(catalog, cache, player, config.catalog.browser());

    if let Err(e) = browser.init().await {
        tracing::error!(error = %e, relay = %config.catalog.relay_url, "Language discovery failed");
        eprintln!("{}", INIT_ALERT);
        return Err(e.into());
    }

    let mut view = browser.render();

    if let Some(search) = cli.search {
        let debouncer = SearchDebouncer::new(config.catalog.search_debounce());
        if let Some(term) = debouncer.submit(search).await {
            view = browser.set_search(term);
        }
    }

    if let Some(language) = &cli.language {
        view = browser.select_language(language).await?;
    }

    if let Some(accent) = &cli.accent {
        view = browser.select_accent(accent).await?;
    }

    if let Some(voice_id) = &cli.play {
        view = browser.play(voice_id)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }

    Ok(())
}

fn print_view(view: &CatalogView) {
    println!("Languages:");
    for item in &view.languages {
        let marker = if item.selected { "*" } else { " " };
        println!(" {} {} {} ({})", marker, item.flag, item.name, item.code);
    }

    if view.accents.visible {
        println!();
        println!("Accents:");
        for item in &view.accents.items {
            let marker = if item.selected { "*" } else { " " };
            println!(" {} {} {} ({})", marker, item.flag, item.name, item.code);
        }
    }

    println!();
    if !view.breadcrumb.is_empty() {
        println!("{}", breadcrumb_text(&view.breadcrumb));
    }
    println!("{}", view.title);
    println!("{}", view.subtitle);

    match &view.grid {
        VoiceGrid::NoSelection | VoiceGrid::Loading => {}
        VoiceGrid::Empty => {
            println!();
            println!("{}", EMPTY_TITLE);
            println!("{}", EMPTY_HINT);
        }
        VoiceGrid::Error(message) => {
            println!();
            println!("Error: {}", message);
        }
        VoiceGrid::Cards(cards) => {
            println!();
            for card in cards {
                println!(
                    "[{}] {} ({})  {}",
                    card.initial,
                    card.name,
                    card.id,
                    card.tags.join(", ")
                );
                let state = if card.control.enabled { "" } else { " (disabled)" };
                println!("    {} {}{}", card.control.icon, card.control.label, state);
            }
        }
    }
}
