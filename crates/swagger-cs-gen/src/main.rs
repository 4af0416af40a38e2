#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::{CommandFactory, Parser};

use crate::ui::{Cli, Colors};

mod generator;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let Some(config) = ui::commands::GenerateConfig::from_cli(cli) else {
    eprintln!("No input file found");
    Cli::command().print_help()?;
    return Ok(());
  };

  let colors = Colors::detect();
  ui::commands::generate_code(config, &colors).await?;

  Ok(())
}
