//! Declaration-value tokenizer for tests, examples and diagnostics.
//!
//! Real deployments feed the parsers from a CSS lexer, which is outside this
//! crate. This module covers just enough of the token grammar to write
//! declaration values in tests: idents, strings, `url(...)`, functions,
//! hashes, numbers with optional unit or `%` suffixes, and single delimiter
//! characters. It is not a conforming CSS tokenizer (no escapes, no
//! comments, no unicode-range).

use crate::error::Result;
use crate::intern::Interner;
use crate::tokens::{Token, TokenKind};

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Tokenize one declaration value.
pub fn tokenize(interner: &Interner, input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|&(_, c)| c.is_whitespace()) {
                chars.next();
            }
            tokens.push(Token::new(interner, TokenKind::Whitespace, " ")?);
            continue;
        }

        if c == '"' || c == '\'' {
            chars.next();
            let text_start = start + c.len_utf8();
            let mut end = text_start;
            for (i, ch) in chars.by_ref() {
                end = i;
                if ch == c {
                    break;
                }
            }
            tokens.push(Token::new(interner, TokenKind::String, &input[text_start..end])?);
            continue;
        }

        if c == '#' {
            chars.next();
            let text_start = start + 1;
            let mut end = text_start;
            while let Some(&(i, ch)) = chars.peek() {
                if !ch.is_ascii_alphanumeric() {
                    break;
                }
                end = i + ch.len_utf8();
                chars.next();
            }
            tokens.push(Token::new(interner, TokenKind::Hash, &input[text_start..end])?);
            continue;
        }

        let numeric_start = c.is_ascii_digit()
            || c == '.'
            || ((c == '-' || c == '+') && {
                let mut ahead = chars.clone();
                ahead.next();
                ahead.peek().is_some_and(|&(_, n)| n.is_ascii_digit() || n == '.')
            });

        if numeric_start {
            let mut end = start;
            while let Some(&(i, ch)) = chars.peek() {
                if !(ch.is_ascii_digit() || ch == '.' || (i == start && (ch == '-' || ch == '+'))) {
                    break;
                }
                end = i + ch.len_utf8();
                chars.next();
            }
            let number = &input[start..end];

            if chars.peek().is_some_and(|&(_, ch)| ch == '%') {
                chars.next();
                tokens.push(Token::new(interner, TokenKind::Percentage, number)?);
            } else if chars.peek().is_some_and(|&(_, ch)| ch.is_ascii_alphabetic()) {
                let mut unit_end = end;
                while let Some(&(i, ch)) = chars.peek() {
                    if !ch.is_ascii_alphabetic() {
                        break;
                    }
                    unit_end = i + ch.len_utf8();
                    chars.next();
                }
                tokens.push(Token::new(
                    interner,
                    TokenKind::Dimension,
                    &input[start..unit_end],
                )?);
            } else {
                tokens.push(Token::new(interner, TokenKind::Number, number)?);
            }
            continue;
        }

        if c.is_ascii_alphabetic() || c == '-' || c == '_' {
            let mut end = start;
            while let Some(&(i, ch)) = chars.peek() {
                if !is_ident_char(ch) {
                    break;
                }
                end = i + ch.len_utf8();
                chars.next();
            }
            let name = &input[start..end];

            if chars.peek().is_some_and(|&(_, ch)| ch == '(') {
                chars.next();
                if name.eq_ignore_ascii_case("url") {
                    // Take everything to the closing parenthesis as the URI,
                    // stripping whitespace and optional quotes.
                    let mut uri_end = end + 1;
                    let uri_start = uri_end;
                    for (i, ch) in chars.by_ref() {
                        uri_end = i;
                        if ch == ')' {
                            break;
                        }
                    }
                    let uri = input[uri_start..uri_end]
                        .trim()
                        .trim_matches(|q| q == '"' || q == '\'');
                    tokens.push(Token::new(interner, TokenKind::Uri, uri)?);
                } else {
                    tokens.push(Token::new(interner, TokenKind::Function, name)?);
                }
            } else {
                tokens.push(Token::new(interner, TokenKind::Ident, name)?);
            }
            continue;
        }

        chars.next();
        let mut buf = [0u8; 4];
        tokens.push(Token::new(
            interner,
            TokenKind::Char(c),
            c.encode_utf8(&mut buf),
        )?);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_a_declaration_value() {
        let interner = Interner::new();
        let tokens = tokenize(&interner, r#"url(a), "Foo" 100px 50% !important"#).unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Uri,
                TokenKind::Char(','),
                TokenKind::Whitespace,
                TokenKind::String,
                TokenKind::Whitespace,
                TokenKind::Dimension,
                TokenKind::Whitespace,
                TokenKind::Percentage,
                TokenKind::Whitespace,
                TokenKind::Char('!'),
                TokenKind::Ident,
            ]
        );
        assert_eq!(&*interner.resolve(tokens[0].data), "a");
        assert_eq!(&*interner.resolve(tokens[3].data), "Foo");
        assert_eq!(&*interner.resolve(tokens[5].data), "100px");
        assert_eq!(&*interner.resolve(tokens[7].data), "50");
    }

    #[test]
    fn tokenizes_functions_and_negative_numbers() {
        let interner = Interner::new();
        let tokens = tokenize(&interner, "rect(-1px, auto)").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Function);
        assert_eq!(&*interner.resolve(tokens[0].data), "rect");
        assert_eq!(tokens[1].kind, TokenKind::Dimension);
        assert_eq!(&*interner.resolve(tokens[1].data), "-1px");
        assert!(tokens[2].is_char(','));
    }
}
