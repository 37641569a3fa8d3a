// klogscan: scan C source trees for kernel logging calls.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use klogscan::scan::{ScanContext, ScanOptions};
use klogscan::scanner::funcs::FuncTable;
use klogscan::walk;

/// Scan C sources for kernel logging calls and print each one with
/// adjacent string literals folded into a single message.
#[derive(Parser, Debug)]
#[command(name = "klogscan", version, about)]
struct Args {
    /// Strip C escape sequences from string literals
    #[arg(short = 'e', long)]
    escape_strip: bool,

    /// Recursively scan directories
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Files or directories to scan; reads standard input when omitted
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let table = FuncTable::build().context("building the function-name table")?;
    let options = ScanOptions {
        escape_strip: args.escape_strip,
        recursive: args.recursive,
    };
    let mut ctx = ScanContext::new(&table, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.paths.is_empty() {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("reading standard input")?;
        let source = String::from_utf8_lossy(&bytes);
        ctx.scan_source(Path::new("<stdin>"), &source, &mut out)?;
        ctx.counters.files += 1;
    } else {
        for path in &args.paths {
            walk::scan_tree(&mut ctx, path, &mut out)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} files scanned", ctx.counters.files)?;
    writeln!(out, "{} lines scanned", ctx.counters.lines)?;
    writeln!(out, "{} statements found", ctx.counters.finds)?;

    Ok(())
}
