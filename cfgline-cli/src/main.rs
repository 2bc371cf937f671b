use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cfgline_core::{logging, CoreConfig};
use cfgline_grammar::{
    load, load_from, skip_blank_lines, FileSource, Grammar, LineSource, Simplifier, StdinSource,
    Symbol,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;

mod error;
mod output;

use error::CliError;

#[derive(Parser)]
#[command(name = "cfgline")]
#[command(about = "CfgLine - context-free grammar simplifier", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "CFGLINE_CONFIG")]
    config: Option<PathBuf>,
    /// Log filter (overrides the configured level; RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a grammar, simplify it and print the result
    Simplify(SimplifyArgs),
    /// Validate every line of a grammar without simplifying it
    Check(InputArgs),
    /// Load a grammar and print it in canonical form
    Print(InputArgs),
    /// Show version information
    Version,
}

#[derive(Args)]
struct InputArgs {
    /// Grammar file, one production per line; `-` reads stdin
    #[arg(default_value = "data.txt")]
    file: String,
    /// Ignore blank lines instead of rejecting them
    #[arg(long)]
    skip_blank: bool,
}

#[derive(Args)]
struct SimplifyArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Start symbol (a single uppercase letter)
    #[arg(long, value_parser = parse_start_symbol)]
    start: Option<char>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Also print what each pass removed
    #[arg(long)]
    report: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_start_symbol(raw: &str) -> Result<char, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) if symbol.is_ascii_uppercase() => Ok(symbol),
        _ => Err(format!("'{}' is not a single uppercase letter", raw)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", output::format_error(&err));
            err.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Version = cli.command {
        println!("CfgLine v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = CoreConfig::load(cli.config.as_deref())?;
    logging::init_tracing(Some(cli.log_level.as_deref().unwrap_or(&config.log_level)))?;
    debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Simplify(args) => simplify(&args, &config, &mut out),
        Commands::Check(args) => {
            let grammar = read_grammar(&args, &config)?;
            output::write_check_summary(&mut out, &args.file, &grammar)?;
            Ok(())
        }
        Commands::Print(args) => {
            let grammar = read_grammar(&args, &config)?;
            output::write_grammar(&mut out, &grammar)?;
            Ok(())
        }
        Commands::Version => Ok(()),
    }
}

fn read_grammar(args: &InputArgs, config: &CoreConfig) -> Result<Grammar, CliError> {
    let source: Box<dyn LineSource> = if args.file == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(&args.file))
    };

    if !(args.skip_blank || config.skip_blank_lines) {
        return Ok(load_from(source.as_ref())?);
    }

    let lines = source.read_lines()?;
    Ok(load(skip_blank_lines(lines))?)
}

fn simplify(args: &SimplifyArgs, config: &CoreConfig, out: &mut impl Write) -> Result<(), CliError> {
    let grammar = read_grammar(&args.input, config)?;
    let simplifier = match args.start {
        Some(start) => Simplifier::new(Symbol::new(start)),
        None => Simplifier::from_config(config),
    };
    let (simplified, report) = simplifier.simplify_with_report(&grammar);

    match args.format {
        Format::Text => {
            output::write_grammar(out, &simplified)?;
            if args.report {
                output::write_report(&mut io::stderr().lock(), &report)?;
            }
        }
        Format::Json => {
            output::write_json(out, &simplified, args.report.then_some(&report))?;
        }
    }

    Ok(())
}
