//! The lexer's output unit: a reusable text buffer plus a classification.

/// Classification of a gathered token.
///
/// `Unknown` covers the generic single-character tokens (`{ } : ~ ? * %
/// ! .`, a bare `/`), numbers of either base keep [`TokenKind::Number`],
/// and the doubling operators (`++`, `==`, ...) stay `Unknown` as well;
/// the statement reconstructor only dispatches on the kinds it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind {
    #[default]
    Unknown,
    /// Integer literal: decimal, octal or hex.
    Number,
    /// `"string"`, delimiters included until [`Token::strip_quotes`].
    LiteralString,
    /// `'c'`, delimiters included until [`Token::strip_quotes`].
    LiteralChar,
    Identifier,
    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    /// `#`, a preprocessor line leader.
    Cpp,
    WhiteSpace,
    LessThan,
    GreaterThan,
    Comma,
    /// `->`
    Arrow,
    /// `;`, the statement terminator.
    Terminal,
}

/// A single token: the gathered text and the kind the lexer assigned.
///
/// One `Token` value is reused across calls to
/// [`Lexer::next_token`](super::lexer::Lexer::next_token); the lexer
/// clears it on entry, so the buffer's allocation is amortized over the
/// whole file.
#[derive(Debug, Default)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(1024),
            kind: TokenKind::Unknown,
        }
    }

    /// Reset for reuse, keeping the allocation.
    pub fn clear(&mut self) {
        self.text.clear();
        self.kind = TokenKind::Unknown;
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Drop the delimiting quotes of a literal token in place. An
    /// unterminated literal loses its last content character instead;
    /// statement-level logic tolerates the malformed result.
    pub fn strip_quotes(&mut self) {
        self.text.pop();
        if !self.text.is_empty() {
            self.text.remove(0);
        }
    }
}
