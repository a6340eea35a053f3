//! oxide-split CLI
//!
//! Command-line tool that splits SQL into tokens.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_split_core::{sql_from_bytes, DqlStatement, LexError, Lexer, StatementKind};

/// Split SQL text into tokens.
#[derive(Parser)]
#[command(name = "oxide-split")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File holding the SQL (reads stdin when absent or `-`).
    #[arg(conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// SQL text to split instead of reading a file.
    #[arg(short, long)]
    sql: Option<String>,

    /// Output format.
    #[arg(short, long, env = "OXIDE_SPLIT_FORMAT", value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the raw split, before tokens are merged.
    #[arg(long)]
    raw: bool,

    /// Also report the statement classification.
    #[arg(short, long)]
    classify: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One quoted token per line.
    Text,
    /// A JSON document.
    Json,
}

#[derive(Debug, Serialize)]
struct Classification {
    kind: StatementKind,
    is_select: bool,
    is_query: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    tokens: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statement: Option<Classification>,
}

fn read_input(cli: &Cli) -> anyhow::Result<Vec<u8>> {
    if let Some(sql) = &cli.sql {
        return Ok(sql.clone().into_bytes());
    }

    match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_report(out: &mut impl Write, report: &Report<'_>, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        Format::Text => {
            for token in &report.tokens {
                writeln!(out, "{token:?}")?;
            }
            if let Some(statement) = &report.statement {
                writeln!(out, "{:-<40}", "")?;
                writeln!(out, "kind:      {:?}", statement.kind)?;
                writeln!(out, "is_select: {}", statement.is_select)?;
                writeln!(out, "is_query:  {}", statement.is_query)?;
            }
        }
    }
    Ok(())
}

fn exit_code(err: &LexError) -> ExitCode {
    ExitCode::from(u8::try_from(err.code()).unwrap_or(1))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = read_input(&cli)?;
    debug!(bytes = input.len(), raw = cli.raw, "input read");

    let lexer = Lexer::new();
    debug!(
        splitters = lexer.table().entries().len(),
        max_token_length = lexer.max_token_length(),
        "lexer ready"
    );
    let sql = match sql_from_bytes(&input) {
        Ok(sql) => sql,
        Err(err) => {
            error!(code = err.code(), "{err}");
            return Ok(exit_code(&err));
        }
    };

    let tokens = if cli.raw {
        lexer.split_raw(sql)
    } else {
        lexer.split(sql)
    };
    let statement = cli.classify.then(|| {
        let statement = DqlStatement::with_lexer(sql, lexer);
        Classification {
            kind: statement.kind(),
            is_select: statement.is_select(),
            is_query: statement.is_query(),
        }
    });

    let report = Report { tokens, statement };
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report, cli.format)?;

    Ok(ExitCode::SUCCESS)
}
