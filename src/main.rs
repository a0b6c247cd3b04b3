//! multiselect CLI
//!
//! Pick items from a list with an interactive checkbox prompt and print
//! the result to stdout.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use multiselect::prompt::run::run;
use multiselect::types::{Choice, PromptConfig, PromptError};

#[derive(Parser)]
#[command(name = "multiselect")]
#[command(about = "Pick items from a list with an interactive checkbox prompt")]
#[command(version)]
struct Cli {
    /// Prompt text shown in the header
    #[arg(short, long)]
    question: String,

    /// Help text shown until confirmation
    #[arg(long)]
    annotation: Option<String>,

    /// Glyph marking the current row
    #[arg(long)]
    pointer: Option<String>,

    /// Viewport cap in rows, header included (default: terminal height)
    #[arg(long)]
    max_height: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Items to choose from
    #[arg(required = true)]
    items: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_prompt(cli) {
        Ok(Some(())) => ExitCode::SUCCESS,
        // Cancelled: no output, failure status, so scripts can branch
        Ok(None) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_prompt(cli: Cli) -> Result<Option<()>, PromptError> {
    let mut config = PromptConfig::new(cli.question);
    if let Some(annotation) = cli.annotation {
        config.annotation = annotation;
    }
    if let Some(pointer) = cli.pointer {
        config.pointer = pointer;
    }
    config.max_height = cli.max_height;

    let choices: Vec<Choice<String>> = cli
        .items
        .iter()
        .map(|item| Choice::new(item.clone(), item.clone()))
        .collect();

    let Some(picked) = run(config, choices)? else {
        return Ok(None);
    };

    match cli.format {
        OutputFormatArg::Human => {
            for choice in &picked {
                println!("{}", choice.name.trim());
            }
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string(&picked).map_err(io::Error::other)?;
            println!("{}", json);
        }
    }
    Ok(Some(()))
}
