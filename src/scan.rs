//! Per-file scan driver: wires the lexer, the function-name table and
//! the statement reconstructor together and carries the run's counters.
//!
//! There is no global state: the immutable [`FuncTable`] is shared by
//! reference into every scan and the counters live in a [`ScanContext`]
//! value owned by the caller.

use std::io::{self, Write};
use std::path::Path;

use crate::scanner::funcs::FuncTable;
use crate::scanner::lexer::Lexer;
use crate::scanner::statement::{reconstruct, Outcome};
use crate::scanner::token::{Token, TokenKind};

/// Behavior switches owned by the CLI layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Strip C escape sequences inside string/char literals.
    pub escape_strip: bool,
    /// Descend into subdirectories.
    pub recursive: bool,
}

/// Run-wide accumulators, reported once at process exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Source files scanned.
    pub files: u64,
    /// Newlines seen by the lexer across all files.
    pub lines: u64,
    /// Logging statements found and emitted.
    pub finds: u64,
}

/// State for one scanning run.
pub struct ScanContext<'t> {
    table: &'t FuncTable,
    options: ScanOptions,
    pub counters: Counters,
}

impl<'t> ScanContext<'t> {
    pub fn new(table: &'t FuncTable, options: ScanOptions) -> Self {
        Self {
            table,
            options,
            counters: Counters::default(),
        }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Scan one source file's text, printing findings to `out`.
    ///
    /// A file that produces at least one finding gets a `Source:` header
    /// before the first one and a single blank line after the last; a
    /// file with no findings produces no output at all. End of input
    /// mid-statement ends the file cleanly, keeping the lines already
    /// counted.
    pub fn scan_source<W: Write>(
        &mut self,
        path: &Path,
        source: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let mut lexer = Lexer::new(source, self.options.escape_strip);
        let mut token = Token::new();
        let mut header_emitted = false;

        while lexer.next_token(&mut token, true) {
            if token.kind != TokenKind::Identifier || !self.table.recognizes(&token.text) {
                continue;
            }
            match reconstruct(&mut lexer, &mut token, path, &mut header_emitted, out)? {
                Outcome::Emitted => self.counters.finds += 1,
                Outcome::Skipped => {}
                Outcome::EndOfInput => break,
            }
        }

        self.counters.lines += lexer.lines();
        if header_emitted {
            writeln!(out)?;
        }
        Ok(())
    }
}
