//! Reserva CLI Application
//!
//! Command-line interface for the reserva venue booking tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use reserva_core::BookingDeskBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        tickets_dir,
        no_color,
        command,
    } = Args::parse();

    let desk = BookingDeskBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize booking desk")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Reserva started");

    let cli = Cli::new(desk, renderer, tickets_dir);

    match command {
        Some(Reserve(args)) => cli.reserve(args).await,
        Some(Weekly(args)) => cli.weekly(args).await,
        Some(Cancel(args)) => cli.cancel(args).await,
        Some(Show(args)) => cli.show(args).await,
        Some(List) => cli.list().await,
        Some(Search(args)) => cli.search(args).await,
        Some(Day(args)) => cli.day(args).await,
        Some(Check(args)) => cli.check(args).await,
        None => cli.list().await,
    }
}
