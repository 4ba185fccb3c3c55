//! # textsplit CLI (`tsplit`)
//!
//! Splits long text into chunks no longer than a character limit, cutting
//! at paragraph, line, sentence, or word boundaries, and writes the chunks
//! out in order.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `tsplit split [TEXT]` | Print the chunks (plain, JSON, or JSON lines) |
//! | `tsplit export [TEXT] --out-dir DIR` | Write numbered chunk files and a manifest |
//! | `tsplit stats [TEXT]` | Summarize chunk sizes |
//! | `tsplit presets` | List the built-in separator lists |
//!
//! Text is taken from the argument, `--file`, or stdin, in that order.
//!
//! ## Examples
//!
//! ```bash
//! # Split for a 4096-char API limit
//! tsplit split --file chapter.txt
//!
//! # Small chunks, custom separators, trimmed
//! tsplit split "apple,banana;cherry" -m 12 -s , -s ';' --trim
//!
//! # Export for a downstream batch job
//! cat book.txt | tsplit export --out-dir chunks/ --config ./config/tsplit.toml
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use textsplit::config::{self, OutputFormat, Overrides};
use textsplit::input::InputSource;
use textsplit::progress::ProgressMode;
use textsplit::textsplit_core::Preset;
use textsplit::{commands, logging};

/// Split long text into size-bounded chunks at natural boundaries.
#[derive(Parser)]
#[command(
    name = "tsplit",
    about = "Split long text into size-bounded chunks at natural boundaries",
    version,
    long_about = "Splits text into chunks no longer than --max-chars, preferring paragraph \
    breaks, then line breaks, then sentence ends, then spaces. A word longer than the limit \
    is kept whole rather than cut. Chunks are written in order for a per-chunk consumer."
)]
struct Cli {
    /// Path to a configuration file (TOML).
    ///
    /// Optional. Command-line flags override values from the file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Progress on stderr. Defaults to `human` on a terminal, `off` otherwise.
    #[arg(long, global = true, value_enum)]
    progress: Option<ProgressMode>,

    #[command(subcommand)]
    command: Commands,
}

/// Where the text comes from.
#[derive(Args)]
struct InputArgs {
    /// Text to split. Read from stdin when neither TEXT nor --file is given.
    text: Option<String>,

    /// Read the text from this file.
    #[arg(long, short = 'f', conflicts_with = "text")]
    file: Option<PathBuf>,
}

/// Splitter settings shared by every command.
#[derive(Args)]
struct SplitterArgs {
    /// Maximum chunk length in characters.
    #[arg(long, short = 'm')]
    max_chars: Option<usize>,

    /// Separator to split on, coarsest first. Repeat for more.
    /// Escapes `\n`, `\t`, `\r`, `\\` are understood.
    #[arg(long = "separator", short = 's')]
    separators: Vec<String>,

    /// Built-in separator list: `prose` or `punctuation`.
    #[arg(long, conflicts_with = "separators")]
    preset: Option<Preset>,

    /// Strip whitespace around each chunk and drop blank chunks.
    #[arg(long, conflicts_with = "no_trim")]
    trim: bool,

    /// Keep chunks exactly as cut, even if the config file sets `trim`.
    #[arg(long)]
    no_trim: bool,
}

impl SplitterArgs {
    fn overrides(&self, format: Option<OutputFormat>) -> Overrides {
        Overrides {
            max_chars: self.max_chars,
            preset: self.preset,
            separators: self.separators.clone(),
            trim: match (self.trim, self.no_trim) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            format,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Split text and print the chunks.
    Split {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        splitter: SplitterArgs,

        /// Output format.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Verify round-trip and size-or-atomicity before printing.
        #[arg(long)]
        check: bool,
    },

    /// Split text into numbered files plus a manifest.json.
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        splitter: SplitterArgs,

        /// Directory to write the chunk files to. Created if missing.
        #[arg(long, short = 'o')]
        out_dir: PathBuf,

        /// Overwrite a previous export in the same directory.
        #[arg(long)]
        force: bool,
    },

    /// Show chunk size statistics.
    Stats {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        splitter: SplitterArgs,

        /// Print the statistics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the built-in separator presets.
    Presets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let progress = cli
        .progress
        .unwrap_or_else(ProgressMode::default_for_tty)
        .reporter();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Split {
            input,
            splitter,
            format,
            check,
        } => {
            let (cfg, splitter) = config::resolve(config_path, &splitter.overrides(format))?;
            let source = InputSource::from_args(input.text, input.file)?;
            commands::run_split(&cfg, &splitter, &source, check, progress.as_ref())?;
        }
        Commands::Export {
            input,
            splitter,
            out_dir,
            force,
        } => {
            let (_, splitter) = config::resolve(config_path, &splitter.overrides(None))?;
            let source = InputSource::from_args(input.text, input.file)?;
            commands::run_export(&splitter, &source, &out_dir, force, progress.as_ref())?;
        }
        Commands::Stats {
            input,
            splitter,
            json,
        } => {
            let (_, splitter) = config::resolve(config_path, &splitter.overrides(None))?;
            let source = InputSource::from_args(input.text, input.file)?;
            commands::run_stats(&splitter, &source, json, progress.as_ref())?;
        }
        Commands::Presets => {
            commands::list_presets()?;
        }
    }

    Ok(())
}
