//! # Prolite CLI
//!
//! Command-line interface for building LED sign configuration streams.
//!
//! The stream goes to stdout (or `--output`); pipe it into whatever talks
//! to the sign. Logs go to stderr and are controlled by `RUST_LOG`.
//!
//! ## Usage
//!
//! ```bash
//! # Build a sign definition file
//! prolite build sign.json > /dev/ttyUSB0
//!
//! # Keep what is on the sign and force page B on screen
//! prolite build --no-reset --show-page 1 sign.json
//!
//! # List and emit demos
//! prolite demo
//! prolite demo simple
//!
//! # Try the text codec
//! prolite escape 'Hi <PA>there'
//! prolite normalize 'Crème brûlée'
//!
//! # Preview a built-in graphic
//! prolite graphic 0
//! ```

use clap::{Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

use prolite::{
    ProliteError, banks::graphics::default_graphic, demo, json_api::SignDefinition,
    models::Pixel, protocol::text,
};

/// Prolite - LED sign configuration utility
#[derive(Parser, Debug)]
#[command(name = "prolite")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the configuration stream for a sign definition file
    Build {
        /// JSON sign definition
        file: PathBuf,

        /// Do not wipe the sign first (overrides the file)
        #[arg(long)]
        no_reset: bool,

        /// Page to force on screen, 0-25 (overrides the file)
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        show_page: Option<i32>,

        /// Write the stream to a file instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Emit a demo configuration (omit the name to list them)
    Demo {
        name: Option<String>,

        /// Page to force on screen, 0-25
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        show_page: Option<i32>,

        /// Write the stream to a file instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Strip control tags from text
    Escape { text: String },

    /// Fold text to the sign's character set
    Normalize { text: String },

    /// Print a built-in graphic as a 7-row grid
    Graphic {
        #[arg(allow_negative_numbers = true)]
        index: i32,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ProliteError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            file,
            no_reset,
            show_page,
            output,
        } => {
            let json = std::fs::read_to_string(&file)?;
            let mut sign = SignDefinition::from_json(&json)?;
            if no_reset {
                sign.reset = false;
            }
            if show_page.is_some() {
                sign.show_page = show_page;
            }

            info!("building {}", file.display());
            write_stream(&sign.configuration()?, output.as_deref())?;
        }

        Commands::Demo {
            name,
            show_page,
            output,
        } => {
            let Some(name) = name else {
                println!("Available demos:");
                for name in demo::list_demos() {
                    println!("  {}", name);
                }
                return Ok(());
            };

            let display = demo::by_name(&name).ok_or_else(|| {
                ProliteError::Document(format!(
                    "Unknown demo '{}'. Run without a name to see available demos.",
                    name
                ))
            })??;
            write_stream(&display.configuration(true, show_page)?, output.as_deref())?;
        }

        Commands::Escape { text } => println!("{}", text::escape(&text)),

        Commands::Normalize { text } => println!("{}", text::normalize(&text)),

        Commands::Graphic { index } => {
            for row in default_graphic(index)?.rows() {
                let row: String = row
                    .chars()
                    .map(|symbol| match Pixel::from_symbol(symbol) {
                        Some(Pixel::Black) | None => '.',
                        Some(_) => symbol,
                    })
                    .collect();
                println!("{}", row);
            }
        }
    }

    Ok(())
}

/// Write a configuration stream byte for byte, CRLF line endings included.
fn write_stream(stream: &str, output: Option<&Path>) -> Result<(), ProliteError> {
    match output {
        Some(path) => {
            std::fs::write(path, stream)?;
            info!("wrote {} bytes to {}", stream.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(stream.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
