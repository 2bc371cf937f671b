use std::io::{self, Write};

use cfgline_grammar::{printer, Grammar, GrammarError, SimplificationReport};
use colored::*;
use serde::Serialize;

use crate::error::CliError;

#[derive(Serialize)]
struct JsonOutput<'a> {
    grammar: &'a Grammar,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a SimplificationReport>,
}

pub fn write_grammar(out: &mut impl Write, grammar: &Grammar) -> io::Result<()> {
    for line in printer::render_lines(grammar) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn write_json(
    out: &mut impl Write,
    grammar: &Grammar,
    report: Option<&SimplificationReport>,
) -> Result<(), CliError> {
    let payload = JsonOutput { grammar, report };
    serde_json::to_writer_pretty(&mut *out, &payload)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report(out: &mut impl Write, report: &SimplificationReport) -> io::Result<()> {
    writeln!(out, "{}", "Simplification report".cyan().bold())?;
    for line in report.to_string().lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

pub fn write_check_summary(out: &mut impl Write, source: &str, grammar: &Grammar) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "✔ Valid grammar:".green().bold(),
        source.bold()
    )?;
    writeln!(out, "  Nonterminals: {}", grammar.len())?;
    writeln!(out, "  Productions: {}", grammar.production_count())
}

pub fn format_error(err: &CliError) -> String {
    match err {
        CliError::Grammar(GrammarError::InvalidLine(line)) => format!(
            "{} {}",
            "✖ Invalid line in grammar:".red().bold(),
            line
        ),
        CliError::Grammar(GrammarError::SourceUnavailable { source_name, source }) => format!(
            "{} {} ({})",
            "✖ Grammar source not found:".red().bold(),
            source_name,
            source
        ),
        other => format!("{} {}", "✖".red().bold(), other),
    }
}
