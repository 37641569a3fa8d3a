//! Pushback character stream feeding the lexer.
//!
//! Several token rules need one or two characters of lookahead before the
//! lexer can commit to a token type, so the stream lets callers push
//! characters back to be re-read later. Pushback is unbounded and
//! stack-ordered: characters come back in reverse order of pushing,
//! indistinguishable from never having been read.

/// Character source with unbounded, stack-ordered pushback.
pub struct CharStream<'a> {
    chars: std::str::Chars<'a>,
    pushback: Vec<char>,
}

impl<'a> CharStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            pushback: Vec::new(),
        }
    }

    /// Next character, or `None` once the source is exhausted and no
    /// pushback is pending. Pushed-back characters are returned first,
    /// most recently pushed first, even after end of input has already
    /// been observed.
    pub fn read(&mut self) -> Option<char> {
        if let Some(ch) = self.pushback.pop() {
            return Some(ch);
        }
        self.chars.next()
    }

    /// Push `ch` back so the next [`read`](Self::read) returns it.
    pub fn unread(&mut self, ch: char) {
        self.pushback.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_order() {
        let mut stream = CharStream::new("abc");
        assert_eq!(stream.read(), Some('a'));
        assert_eq!(stream.read(), Some('b'));
        assert_eq!(stream.read(), Some('c'));
        assert_eq!(stream.read(), None);
    }

    #[test]
    fn pushback_is_lifo() {
        let mut stream = CharStream::new("z");
        stream.unread('b');
        stream.unread('a');
        assert_eq!(stream.read(), Some('a'));
        assert_eq!(stream.read(), Some('b'));
        assert_eq!(stream.read(), Some('z'));
        assert_eq!(stream.read(), None);
    }

    #[test]
    fn pushback_honored_after_end_of_input() {
        let mut stream = CharStream::new("");
        assert_eq!(stream.read(), None);
        stream.unread('x');
        assert_eq!(stream.read(), Some('x'));
        assert_eq!(stream.read(), None);
    }

    #[test]
    fn reread_matches_original() {
        let mut stream = CharStream::new("ab");
        let a = stream.read().unwrap();
        let b = stream.read().unwrap();
        stream.unread(b);
        stream.unread(a);
        assert_eq!(stream.read(), Some('a'));
        assert_eq!(stream.read(), Some('b'));
    }
}
