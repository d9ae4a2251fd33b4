//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, TmesisArgs};
use crate::error::Result;

/// Tokens of one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizedLine {
    pub line: usize,
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizationResult {
    pub lines: Vec<TokenizedLine>,
    pub total_tokens: usize,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result(message: &str, result: &TokenizationResult, args: &TmesisArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human(message: &str, result: &TokenizationResult, args: &TmesisArgs) -> Result<()> {
    // quiet mode prints the bare token texts, one line per input line
    if args.verbosity() == 0 {
        for line in &result.lines {
            println!("{}", join_texts(&line.tokens));
        }
        return Ok(());
    }

    for line in &result.lines {
        if result.lines.len() > 1 {
            println!("Line {}: {}", line.line, line.text);
            println!("─────────────");
        }
        for token in &line.tokens {
            println!("{}", format_token(token));
        }
        println!();
    }

    if args.verbosity() > 1 {
        println!("{message}");
        println!(
            "Tokens: {} in {} line(s), {} ms",
            result.total_tokens,
            result.lines.len(),
            result.duration_ms
        );
    }

    Ok(())
}

/// Output in JSON format.
fn output_json(result: &TokenizationResult, args: &TmesisArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// One token as `id  text  kind`, with `-` for a missing id.
fn format_token(token: &Token) -> String {
    let id = token
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{id:>4}  {:<20} {}", token.text, token.kind)
}

fn join_texts(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
