//! Statement reconstruction: re-serialize a recognized logging call into
//! one printable line with adjacent string literals folded together.
//!
//! Recognition (the cheap hash gate in the scan loop) is split from
//! reconstruction so that ordinary tokens cost one hash and compare, not
//! a speculative parse. Only once an identifier matches the function
//! table does this module consume through the balanced call expression
//! up to the terminating `;`.

use std::io::{self, Write};
use std::path::Path;

use super::lexer::Lexer;
use super::token::{Token, TokenKind};

/// How a reconstruction attempt ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A complete call with at least one string literal was printed.
    Emitted,
    /// Nothing printed: a false match, or a call without string
    /// arguments.
    Skipped,
    /// Input ran out mid-statement; the file's scan is over.
    EndOfInput,
}

/// Consume tokens from a recognized function name through the
/// terminating `;`, rebuilding the call as one line.
///
/// `token` holds the recognized identifier on entry and is reused for
/// every token read here. If the identifier is not followed by `(` it
/// was not a call; tokens are skipped through the next `;` to
/// resynchronize and nothing is emitted. A `Source:` header goes out
/// before the first finding of each file; `header_emitted` tracks that.
pub fn reconstruct<W: Write>(
    lexer: &mut Lexer<'_>,
    token: &mut Token,
    path: &Path,
    header_emitted: &mut bool,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut line = token.text.clone();

    if !lexer.next_token(token, true) {
        return Ok(Outcome::EndOfInput);
    }
    if token.kind != TokenKind::ParenOpen {
        loop {
            if !lexer.next_token(token, true) {
                return Ok(Outcome::EndOfInput);
            }
            if token.kind == TokenKind::Terminal {
                return Ok(Outcome::Skipped);
            }
        }
    }
    line.push_str(&token.text);

    // `in_string_run` is true between the opening quote of a contiguous
    // literal run and the token that closes it; `message` accumulates the
    // run's unquoted text, already folded into `line` literal by literal.
    let mut in_string_run = false;
    let mut emit = false;
    let mut message = String::new();

    loop {
        if !lexer.next_token(token, true) {
            return Ok(Outcome::EndOfInput);
        }

        if token.kind == TokenKind::Terminal {
            if !emit {
                return Ok(Outcome::Skipped);
            }
            if in_string_run {
                line.push('"');
            }
            line.push_str(&token.text);
            if !*header_emitted {
                writeln!(out, "Source: {}", path.display())?;
                *header_emitted = true;
            }
            writeln!(out, "{line}")?;
            return Ok(Outcome::Emitted);
        }

        if token.kind == TokenKind::LiteralString {
            token.strip_quotes();
            message.push_str(&token.text);
            if !in_string_run {
                line.push('"');
            }
            in_string_run = true;
            emit = true;
        } else {
            if in_string_run {
                line.push('"');
            }
            in_string_run = false;
            message.clear();
        }

        line.push_str(&token.text);
        if token.kind == TokenKind::Comma {
            line.push(' ');
        }
    }
}
