//! Command line argument parsing for the Tmesis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::OptionOverrides;

/// Tmesis - a tokenizer for classical Latin and Greek
#[derive(Parser, Debug, Clone)]
#[command(name = "tmesis")]
#[command(about = "A tokenizer for classical Latin and Greek text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TmesisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TmesisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text given as an argument, read from a file or from stdin
    Tokenize(TokenizeArgs),
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize (reads stdin line by line when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Tokenize each line of this file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Stem dictionary (JSON) used to disambiguate -ne and -ve
    #[arg(short, long, value_name = "PATH", env = "TMESIS_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Options file (JSON); flags below override it
    #[arg(long, value_name = "PATH")]
    pub options: Option<PathBuf>,

    /// Leave split-off enclitics after their host
    #[arg(long)]
    pub no_shifting: bool,

    /// Don't merge idioms such as "quam diu"
    #[arg(long)]
    pub no_merging: bool,

    /// Don't split enclitics, elisions and kraseis
    #[arg(long)]
    pub no_splitting: bool,

    /// Don't assign token ids
    #[arg(long)]
    pub no_indexing: bool,

    /// Keep markup tags intact
    #[arg(long)]
    pub xml: bool,

    /// Prefix of split-off enclitics
    #[arg(long, value_name = "GLYPH")]
    pub marker: Option<String>,

    /// Tokenize input lines in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl TokenizeArgs {
    /// The option overrides expressed by the flags. Flags that were not given
    /// leave the corresponding option alone.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            shifting: self.no_shifting.then_some(false),
            merging: self.no_merging.then_some(false),
            splitting: self.no_splitting.then_some(false),
            indexing: self.no_indexing.then_some(false),
            xml: self.xml.then_some(true),
            enclitics_marker: self.marker.clone(),
            krasis_marker: None,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
