use std::path::PathBuf;

use clap::Parser;

use super::Colors;

#[derive(Parser, Debug)]
#[command(name = "swagger-cs-gen")]
#[command(author, version, about = "Swagger to C# client code generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  /// Path to the Swagger JSON document; only the first path is used
  #[arg(value_name = "INPUT")]
  pub inputs: Vec<PathBuf>,

  /// Path where the generated C# code will be written (standard output when omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,
}

impl Cli {
  /// The schema document to read; later positional paths are ignored.
  pub fn input(&self) -> Option<&PathBuf> {
    self.inputs.first()
  }
}
