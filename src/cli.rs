//! Integer-sorting command line collaborator
//!
//! Reads a delimited list of integers from a file or standard input,
//! hands it to the sort entry points, and writes the sorted result to
//! standard output. Everything in this module is CLI plumbing; the
//! sorting core takes no dependency on it (nor on the logging it
//! emits).

use std::fs::File;
use std::io::{self, Read, Write};

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use crate::config::{Direction, SortConfig};

/// Sort a list of integers from FILE and write the result to standard
/// output
#[derive(Parser, Debug)]
#[command(name = "bsort", version, about)]
pub struct Args {
    /// Input file; `-` reads standard input
    #[arg(default_value = "-", value_name = "FILE")]
    pub file: String,

    /// Reverse sort direction
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Suppress the usage hint printed after an input error
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Token separator used when reading input (default: any run of
    /// whitespace)
    #[arg(long, value_name = "SEP")]
    pub in_delimiter: Option<String>,

    /// Separator written between output values
    #[arg(long, value_name = "SEP", default_value = " ")]
    pub out_delimiter: String,
}

impl Args {
    /// Direction of the requested sort
    pub fn direction(&self) -> Direction {
        if self.reverse {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Errors surfaced by the CLI pipeline
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    #[error("not an integer: {token:?}")]
    Parse { token: String },

    #[error("input contains no integers")]
    EmptyInput,
}

/// Parse every token of `input` as an `i64`.
///
/// Tokens are separated by `delimiter` when given, otherwise by runs
/// of whitespace. Empty tokens (around a trailing delimiter, say) are
/// skipped; anything else that does not parse is an error.
pub fn parse_integers(input: &str, delimiter: Option<&str>) -> Result<Vec<i64>, CliError> {
    let tokens: Vec<&str> = match delimiter {
        Some(sep) => input.split(sep).collect(),
        None => input.split_whitespace().collect(),
    };

    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| CliError::Parse { token: token.to_string() })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(values)
}

/// Read the whole input source named by `file` (`-` means standard
/// input).
pub fn read_source(file: &str) -> Result<String, CliError> {
    let mut input = String::new();
    if file == "-" {
        io::stdin().read_to_string(&mut input)?;
    } else {
        File::open(file)?.read_to_string(&mut input)?;
    }
    Ok(input)
}

/// Write `values` to `out` separated by `delimiter`, with a trailing
/// newline.
pub fn write_integers<W: Write>(out: &mut W, values: &[i64], delimiter: &str) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_all(delimiter.as_bytes())?;
        }
        write!(out, "{value}")?;
    }
    writeln!(out)
}

/// Full pipeline: read, parse, sort, print.
pub fn run(args: &Args) -> Result<(), CliError> {
    let input = read_source(&args.file)?;
    let mut values = parse_integers(&input, args.in_delimiter.as_deref())?;
    debug!(count = values.len(), reverse = args.reverse, "sorting");

    let config = SortConfig::default().with_direction(args.direction());
    crate::sort_by_config(&mut values, i64::cmp, &config);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_integers(&mut out, &values, &args.out_delimiter)?;
    out.flush()?;
    Ok(())
}
