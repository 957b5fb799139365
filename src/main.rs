use clap::Parser;
use colored::*;
use std::path::PathBuf;

use rulint::config::Config;
use rulint::exit_codes;
use rulint::linter::Linter;
use rulint::linters::PyflakesLinter;
use rulint::output::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to lint
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Output format: text, concise, json
    #[arg(short, long, default_value = "text")]
    output: String,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,

    /// Show detailed output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(0) => exit_codes::exit::success(),
        Ok(_) => exit_codes::exit::findings(),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_codes::exit::tool_error()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<usize> {
    let format = OutputFormat::parse(&cli.output).map_err(anyhow::Error::msg)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };

    let linters: Vec<Box<dyn Linter>> =
        vec![Box::new(PyflakesLinter::new(config.tool("pyflakes")))];

    let messages = rulint::lint_paths(&cli.paths, &linters)?;

    let rendered = format.create_formatter().format_messages(&messages);
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    if !cli.quiet && format != OutputFormat::Json {
        if messages.is_empty() {
            println!("{}", "No issues found".green());
        } else {
            println!(
                "Found {} issue(s) in {} file(s)",
                messages.len(),
                cli.paths.len()
            );
        }
    }

    Ok(messages.len())
}
