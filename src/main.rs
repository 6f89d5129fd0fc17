use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use remex::{Pattern, parse, search_anywhere};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to search for
    pattern: String,

    /// File to search (stdin if omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Prefix each matching line with its line number
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Print only the matched parts, one per line
    #[arg(short = 'o', long)]
    only_matching: bool,

    /// Select lines that do not match
    #[arg(short = 'v', long)]
    invert_match: bool,

    /// Print only a count of matching lines
    #[arg(short = 'c', long)]
    count: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let pattern = parse(&args.pattern)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    let input = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut matched_lines = 0usize;
    for (idx, line) in input.lines().enumerate() {
        let hit = search_anywhere(&pattern, line);
        if hit.is_some() == args.invert_match {
            continue;
        }
        matched_lines += 1;
        if args.count {
            continue;
        }
        if args.only_matching && !args.invert_match {
            print_matches(&pattern, line);
        } else if args.line_number {
            println!("{}:{}", idx + 1, line);
        } else {
            println!("{}", line);
        }
    }

    if args.count {
        println!("{matched_lines}");
    }
    // grep convention: exit 1 when nothing was selected.
    Ok(if matched_lines > 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Print every non-overlapping match in `line`, advancing one character past
/// an empty match so patterns like `a*` cannot stall.
fn print_matches(pattern: &Pattern, line: &str) {
    let mut offset = 0usize;
    while offset <= line.len() {
        let Some(m) = search_anywhere(pattern, &line[offset..]) else {
            break;
        };
        println!("{}", m.text);
        offset += m.start + m.text.len();
        if m.text.is_empty() {
            match line[offset..].chars().next() {
                Some(ch) => offset += ch.len_utf8(),
                None => break,
            }
        }
    }
}
