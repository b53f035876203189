// src/main.rs
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use tokenstats::document::{load_document, save_report};
use tokenstats::logging;
use tokenstats::{format_report, Analyzer, AnalyzerConfig, TokenStatsError, DEFAULT_OUTPUT_PATH};

/// Count paragraphs, sentences, tokens and types in an English text file.
#[derive(Parser, Debug)]
#[command(name = "tokenstats", version, about, long_about = None)]
struct Args {
    /// Text file to analyze
    input: PathBuf,

    /// Where to write the report
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Run the analysis passes one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Do not echo the report to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), TokenStatsError> {
    let text = load_document(&args.input)?;

    let config = AnalyzerConfig {
        parallel: !args.sequential,
        ..AnalyzerConfig::default()
    };
    let start = Instant::now();
    let report = Analyzer::new(config).analyze(&text);
    info!(
        "{} tokens, {} types in {:?}",
        report.token_count(),
        report.type_count(),
        start.elapsed()
    );

    let output = format_report(&report);
    if !args.quiet {
        println!("{}", output);
    }
    save_report(&args.output, &output)
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::initialize(logging::level_from_verbosity(args.verbose));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let mut message = e.to_string();
            let mut source = e.source();
            while let Some(cause) = source {
                message.push_str(&format!(": {}", cause));
                source = cause.source();
            }
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}
