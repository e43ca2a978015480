//! Command line arguments

use clap::Parser;
use type_checks::ColorFormat;

use crate::checker::Check;

/// Classify values the way the runtime's type checks see them
#[derive(Debug, Parser)]
#[command(name = "typecheck", version)]
pub struct Cli {
    /// Values to classify
    pub values: Vec<String>,

    /// Parse each value as JSON instead of taking it as a string
    #[arg(short, long)]
    pub json: bool,

    /// Do not treat numeric text as numbers
    #[arg(short, long)]
    pub strict: bool,

    /// Limit color checks to these formats (hex, rgb, rgba, hsl, hsla)
    #[arg(short = 'F', long = "format", value_name = "FORMAT")]
    pub formats: Vec<ColorFormat>,

    /// Answer a single check; the exit status is 0 when every value passes
    #[arg(short, long, value_name = "CHECK")]
    pub only: Option<Check>,

    /// Start an interactive session
    #[arg(short, long)]
    pub repl: bool,
}
