//! Token model and the cursor view the property parsers consume.
//!
//! Lexing is not this crate's job: a producer (the CSS lexer) hands each
//! declaration's value to [`crate::parse::parse_declaration`] as a slice of
//! [`Token`]s. Tokens carry two interned handles: the raw text and a
//! lowercase canonicalization, so keyword matching is handle identity
//! everywhere. Numeric tokens carry digits (and for dimensions the unit
//! suffix) in their text; percentage tokens carry digits only.
//!
//! Token handles are borrowed by the parser; their references belong to the
//! producer of the token sequence.

use crate::intern::{Interner, StringHandle};

/// Token discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    /// Quoted string; the text excludes the quotes.
    String,
    /// `#`-prefixed hash; the text excludes the `#`.
    Hash,
    Number,
    /// The text holds the digits only, without the `%`.
    Percentage,
    /// The text holds digits followed by the unit suffix, e.g. `100px`.
    Dimension,
    /// `url(...)`; the text holds the unquoted URI.
    Uri,
    /// Function invocation; the text holds the name, the `(` is implied.
    Function,
    /// A delimiter character.
    Char(char),
    Whitespace,
}

/// One CSS token.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    /// The original text, interned.
    pub data: StringHandle,
    /// Lowercase canonicalization of `data`, interned.
    pub lower: StringHandle,
}

impl Token {
    /// Build a token, interning both the raw and lowercased text.
    pub fn new(interner: &Interner, kind: TokenKind, text: &str) -> crate::error::Result<Token> {
        let data = interner.intern(text)?;
        let lower = if text.bytes().any(|b| b.is_ascii_uppercase()) {
            interner.intern(&text.to_ascii_lowercase())?
        } else {
            interner.add_ref(data);
            data
        };
        Ok(Token { kind, data, lower })
    }

    pub fn is_char(&self, c: char) -> bool {
        matches!(self.kind, TokenKind::Char(k) if k == c)
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Read-only cursor over a token slice.
///
/// The stream is `Copy`, so a parser can probe ahead on a scratch copy (the
/// sizing pass of the comma-list parsers) and replay on the original.
#[derive(Debug, Clone, Copy)]
pub struct TokenStream<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> TokenStream<'t> {
        TokenStream { tokens, pos: 0 }
    }

    /// Current cursor position, suitable for a later [`TokenStream::seek`].
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The next token without advancing.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Skip any run of whitespace tokens.
    pub fn consume_whitespace(&mut self) {
        while matches!(self.peek(), Some(t) if t.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// True once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_canonicalization_shares_handles() {
        let interner = Interner::new();
        let mixed = Token::new(&interner, TokenKind::Ident, "INHERIT").unwrap();
        let plain = Token::new(&interner, TokenKind::Ident, "inherit").unwrap();
        assert_ne!(mixed.data, plain.data);
        assert_eq!(mixed.lower, plain.lower);
    }

    #[test]
    fn cursor_basics() {
        let interner = Interner::new();
        let tokens = [
            Token::new(&interner, TokenKind::Ident, "auto").unwrap(),
            Token::new(&interner, TokenKind::Whitespace, " ").unwrap(),
            Token::new(&interner, TokenKind::Char('!'), "!").unwrap(),
        ];
        let mut ts = TokenStream::new(&tokens);
        assert_eq!(ts.next().map(|t| t.kind), Some(TokenKind::Ident));
        ts.consume_whitespace();
        assert!(ts.peek().is_some_and(|t| t.is_char('!')));
        let mark = ts.pos();
        ts.next();
        assert!(ts.is_exhausted());
        ts.seek(mark);
        assert!(!ts.is_exhausted());
    }
}
