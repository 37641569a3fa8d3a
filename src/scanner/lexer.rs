//! Tokenizer for the C subset the scanner needs.
//!
//! One token is gathered per [`Lexer::next_token`] call. Comments are
//! discarded transparently, whitespace is either skipped or surfaced as a
//! token depending on the caller, and every lookahead decision goes
//! through the pushback stream so the lexer never loses synchronization
//! with the source. This is not a C parser: only enough of the grammar is
//! tokenized to find call expressions bounded by a `;`.
//!
//! Kernel sources have no floating-point literals, so number parsing
//! covers decimal, octal and hex integers only.

use super::stream::CharStream;
use super::token::{Token, TokenKind};

/// Result of attempting to read a comment after a leading `/`.
enum CommentScan {
    /// A `//` or `/* */` comment was consumed and discarded.
    Found,
    /// The `/` does not open a comment; the lookahead was pushed back.
    NotComment,
    /// Input ran out inside the comment. Ends the file's scan.
    EndOfInput,
}

pub struct Lexer<'a> {
    stream: CharStream<'a>,
    escape_strip: bool,
    lines: u64,
}

impl<'a> Lexer<'a> {
    /// `escape_strip` selects the literal-parsing policy: when set, known
    /// alphabetic escapes inside string/char literals are replaced by a
    /// space and a lone `\` is plain whitespace.
    pub fn new(source: &'a str, escape_strip: bool) -> Self {
        Self {
            stream: CharStream::new(source),
            escape_strip,
            lines: 0,
        }
    }

    /// Newlines seen by the main dispatch loop so far. Newlines consumed
    /// inside comments and literals are not counted.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Gather the next token into `token`, clearing it first. Returns
    /// `false` at end of input; an unterminated comment also ends the
    /// file's token stream. Bytes that match no rule are skipped.
    pub fn next_token(&mut self, token: &mut Token, skip_whitespace: bool) -> bool {
        token.clear();
        loop {
            let Some(ch) = self.stream.read() else {
                return false;
            };
            match ch {
                '/' => match self.skip_comment() {
                    CommentScan::EndOfInput => return false,
                    CommentScan::Found => continue,
                    CommentScan::NotComment => {
                        token.push(ch);
                        return true;
                    }
                },
                '#' => {
                    token.push(ch);
                    token.kind = TokenKind::Cpp;
                    return true;
                }
                '\n' | ' ' | '\t' | '\r' | '\\' => {
                    if ch == '\n' {
                        self.lines += 1;
                    }
                    if skip_whitespace {
                        continue;
                    }
                    token.push(ch);
                    if self.escape_strip {
                        token.kind = TokenKind::WhiteSpace;
                        return true;
                    }
                    // Line-continuation tolerance: pair the character
                    // with the next one so a `\` never splits a token.
                    let Some(next) = self.stream.read() else {
                        return false;
                    };
                    token.push(next);
                    return true;
                }
                '(' => {
                    token.push(ch);
                    token.kind = TokenKind::ParenOpen;
                    return true;
                }
                ')' => {
                    token.push(ch);
                    token.kind = TokenKind::ParenClose;
                    return true;
                }
                '[' => {
                    token.push(ch);
                    token.kind = TokenKind::BracketOpen;
                    return true;
                }
                ']' => {
                    token.push(ch);
                    token.kind = TokenKind::BracketClose;
                    return true;
                }
                '<' => {
                    token.push(ch);
                    token.kind = TokenKind::LessThan;
                    return true;
                }
                '>' => {
                    token.push(ch);
                    token.kind = TokenKind::GreaterThan;
                    return true;
                }
                ',' => {
                    token.push(ch);
                    token.kind = TokenKind::Comma;
                    return true;
                }
                ';' => {
                    token.push(ch);
                    token.kind = TokenKind::Terminal;
                    return true;
                }
                '{' | '}' | ':' | '~' | '?' | '*' | '%' | '!' | '.' => {
                    token.push(ch);
                    return true;
                }
                '0'..='9' => return self.number(token, ch),
                'a'..='z' | 'A'..='Z' => return self.identifier(token, ch),
                '"' => return self.literal(token, '"', TokenKind::LiteralString),
                '\'' => return self.literal(token, '\'', TokenKind::LiteralChar),
                '+' | '=' | '|' | '&' => return self.doubling_op(token, ch),
                '-' => return self.minus(token, ch),
                _ => continue,
            }
        }
    }

    fn skip_comment(&mut self) -> CommentScan {
        let Some(next) = self.stream.read() else {
            return CommentScan::EndOfInput;
        };

        if next == '/' {
            // To end of line. The terminating newline is consumed here
            // and never reaches the line counter.
            loop {
                match self.stream.read() {
                    None => return CommentScan::EndOfInput,
                    Some('\n') => return CommentScan::Found,
                    Some(_) => {}
                }
            }
        }

        if next == '*' {
            loop {
                match self.stream.read() {
                    None => return CommentScan::EndOfInput,
                    Some('*') => match self.stream.read() {
                        None => return CommentScan::EndOfInput,
                        Some('/') => return CommentScan::Found,
                        Some(other) => self.stream.unread(other),
                    },
                    Some(_) => {}
                }
            }
        }

        self.stream.unread(next);
        CommentScan::NotComment
    }

    /// Integer literals. A leading `0` needs lookahead to pick the base:
    /// a continuing digit means octal (`8` is accepted there too,
    /// preserving the original scanner's permissive range), `0x`/`0X`
    /// plus a hex digit means hexadecimal, anything else means the `0`
    /// was a complete decimal literal.
    fn number(&mut self, token: &mut Token, first: char) -> bool {
        token.kind = TokenKind::Number;
        let mut ch = first;
        let mut hex = false;
        let mut oct = false;

        if first == '0' {
            token.push(first);

            let Some(next1) = self.stream.read() else {
                return true;
            };
            if ('0'..='8').contains(&next1) {
                ch = next1;
                oct = true;
            } else if next1 == 'x' || next1 == 'X' {
                let Some(next2) = self.stream.read() else {
                    self.stream.unread(next1);
                    return true;
                };
                if next2.is_ascii_hexdigit() {
                    token.push(next1);
                    ch = next2;
                    hex = true;
                } else {
                    self.stream.unread(next2);
                    self.stream.unread(next1);
                    return true;
                }
            } else {
                self.stream.unread(next1);
                return true;
            }
        }

        token.push(ch);
        loop {
            let Some(ch) = self.stream.read() else {
                return true;
            };
            let continues = if hex {
                ch.is_ascii_hexdigit()
            } else if oct {
                ('0'..='8').contains(&ch)
            } else {
                ch.is_ascii_digit()
            };
            if continues {
                token.push(ch);
            } else {
                self.stream.unread(ch);
                return true;
            }
        }
    }

    /// Identifiers start with an ASCII letter and continue over
    /// alphanumerics and `_`. A leading underscore is not an identifier
    /// start in this scanner.
    fn identifier(&mut self, token: &mut Token, first: char) -> bool {
        token.push(first);
        token.kind = TokenKind::Identifier;
        loop {
            let Some(ch) = self.stream.read() else {
                return true;
            };
            if ch.is_ascii_alphanumeric() || ch == '_' {
                token.push(ch);
            } else {
                self.stream.unread(ch);
                return true;
            }
        }
    }

    /// String and char literals, delimiters included in the token text.
    /// End of input before the closing delimiter ends the token without
    /// error; the statement layer discards malformed results.
    fn literal(&mut self, token: &mut Token, delim: char, kind: TokenKind) -> bool {
        token.kind = kind;
        token.push(delim);

        loop {
            let Some(ch) = self.stream.read() else {
                return true;
            };

            if ch == '\\' {
                if self.escape_strip {
                    let Some(esc) = self.stream.read() else {
                        return true;
                    };
                    match esc {
                        '?' => token.push(esc),
                        'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' => {
                            // Replace the escape with a space unless the
                            // closing delimiter comes next. Peeked only:
                            // the delimiter must still be consumed by
                            // the outer loop.
                            match self.stream.read() {
                                Some(next) => {
                                    self.stream.unread(next);
                                    if next != delim {
                                        token.push(' ');
                                    }
                                }
                                None => token.push(' '),
                            }
                        }
                        _ => {
                            token.push('\\');
                            token.push(esc);
                        }
                    }
                    continue;
                }

                token.push(ch);
                let Some(esc) = self.stream.read() else {
                    return true;
                };
                token.push(esc);
                continue;
            }

            token.push(ch);
            if ch == delim {
                return true;
            }
        }
    }

    /// `+ = | &`: the character, or its doubled form (`++`, `==`, ...).
    fn doubling_op(&mut self, token: &mut Token, op: char) -> bool {
        token.push(op);
        let Some(ch) = self.stream.read() else {
            return true;
        };
        if ch == op {
            token.push(op);
            return true;
        }
        self.stream.unread(ch);
        true
    }

    /// `-`, `--` or `->`.
    fn minus(&mut self, token: &mut Token, op: char) -> bool {
        token.push(op);
        let Some(ch) = self.stream.read() else {
            return true;
        };
        if ch == op {
            token.push(ch);
            return true;
        }
        if ch == '>' {
            token.push(ch);
            token.kind = TokenKind::Arrow;
            return true;
        }
        self.stream.unread(ch);
        true
    }
}
