//! rect-clip - clip segments and a polygon against a rectangular window
//!
//! Usage:
//!   rect-clip clip <input> [-f text|json|svg] [-o <file>] [--style <yaml>]
//!   rect-clip check <input>
//!
//! Use `-` as input to read from stdin. Set `RUST_LOG=debug` for details.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cli;

use cli::common::OutputFormat;
use cli::{cmd_check, cmd_clip};

#[derive(Parser)]
#[command(name = "rect-clip", version, about = "Cohen-Sutherland and Sutherland-Hodgman clipping")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Clip the input's segments and polygon against its window
    Clip {
        /// Input file in the segment/window/polygon text format (- for stdin)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (- for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML style file for SVG output
        #[arg(long)]
        style: Option<PathBuf>,
    },
    /// Validate the input and summarize it without clipping
    Check {
        /// Input file (- for stdin)
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Clip { input, format, output, style } => {
            cmd_clip(&input, format, output.as_deref(), style.as_deref())
        }
        Command::Check { input } => cmd_check(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
