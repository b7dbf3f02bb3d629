//! Snake BnB CLI Application
//!
//! Interactive console front end for the Snake BnB booking system. Hosts
//! register cages and availability windows; guests register snakes and book
//! cages for date ranges.

mod args;
mod command;
mod prompt;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use session::Session;
use snakebnb_core::BnbBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, mode } = Args::parse();

    let bnb = BnbBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize booking store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Snake BnB started");

    Session::new(bnb, renderer, mode.into()).run().await
}
