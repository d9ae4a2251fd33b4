//! Command implementations for the Tmesis CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::analysis::analyzer::classical::ClassicalAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{OptionOverrides, TokenizerOptions};
use crate::error::Result;
use crate::lexicon::{NoopLookup, StemDictionary, StemLookup};

/// Execute a CLI command.
pub fn execute_command(args: TmesisArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args.clone(), &args),
    }
}

/// Tokenize the requested input.
fn tokenize(args: TokenizeArgs, cli_args: &TmesisArgs) -> Result<()> {
    let analyzer = build_analyzer(&args)?;
    let overrides = args.overrides();
    let inputs = read_inputs(&args)?;

    info!("tokenizing {} lines", inputs.len());
    let start_time = Instant::now();

    let lines = tokenize_lines(&analyzer, &inputs, &overrides, args.parallel)?;
    let total_tokens = lines.iter().map(|line| line.tokens.len()).sum();

    output_result(
        "Tokenization finished",
        &TokenizationResult {
            lines,
            total_tokens,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

fn build_analyzer(args: &TokenizeArgs) -> Result<ClassicalAnalyzer> {
    let lookup: Arc<dyn StemLookup> = match &args.dictionary {
        Some(path) => Arc::new(StemDictionary::load_from_file(path)?),
        None => {
            warn!("no stem dictionary given, -ne and -ve splits are not disambiguated");
            Arc::new(NoopLookup)
        }
    };

    let options = match &args.options {
        Some(path) => {
            debug!("loading options from {}", path.display());
            TokenizerOptions::from_json_file(path)?
        }
        None => TokenizerOptions::default(),
    };

    ClassicalAnalyzer::with_options(lookup, options)
}

/// The text argument, the lines of `--file`, or the lines of stdin.
fn read_inputs(args: &TokenizeArgs) -> Result<Vec<String>> {
    if let Some(text) = &args.text {
        return Ok(vec![text.clone()]);
    }

    let lines = match &args.file {
        Some(path) => BufReader::new(File::open(path)?)
            .lines()
            .collect::<io::Result<Vec<_>>>()?,
        None => io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?,
    };

    Ok(lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect())
}

/// Tokenize every input line, sharing one analyzer.
pub fn tokenize_lines(
    analyzer: &ClassicalAnalyzer,
    inputs: &[String],
    overrides: &OptionOverrides,
    parallel: bool,
) -> Result<Vec<TokenizedLine>> {
    let tokenize_line = |(index, text): (usize, &String)| {
        analyzer
            .tokenize_with(text, overrides)
            .map(|tokens| TokenizedLine {
                line: index + 1,
                text: text.clone(),
                tokens,
            })
    };

    if parallel {
        inputs.par_iter().enumerate().map(tokenize_line).collect()
    } else {
        inputs.iter().enumerate().map(tokenize_line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_matches_sequential() {
        let analyzer = ClassicalAnalyzer::new(Arc::new(NoopLookup));
        let inputs: Vec<String> = [
            "Arma virumque cano.",
            "in eoque",
            "M. Cicero pecūniam gaudĭămquĕ incolīs dabit.",
            "quam diu",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let overrides = OptionOverrides::default();

        let sequential = tokenize_lines(&analyzer, &inputs, &overrides, false).unwrap();
        let parallel = tokenize_lines(&analyzer, &inputs, &overrides, true).unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential[1].line, 2);
        assert_eq!(sequential[3].tokens[0].text, "quamdiu");
    }

    #[test]
    fn test_read_inputs_from_text() {
        let args = TokenizeArgs {
            text: Some("arma".to_string()),
            file: None,
            dictionary: None,
            options: None,
            no_shifting: false,
            no_merging: false,
            no_splitting: false,
            no_indexing: false,
            xml: false,
            marker: None,
            parallel: false,
        };
        assert_eq!(read_inputs(&args).unwrap(), vec!["arma"]);
    }
}
