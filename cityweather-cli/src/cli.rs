use anyhow::Context;
use cityweather_core::{Config, provider};
use clap::{Parser, Subcommand};
use std::io;

use crate::menu::Menu;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Interactive city weather menu")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => run_menu().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key =
        inquire::Text::new("OpenWeather API key:").prompt().context("Failed to read API key")?;

    anyhow::ensure!(!api_key.trim().is_empty(), "API key must not be empty");

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn run_menu() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), provider);
    menu.run().await
}
