//! Comma-separated IDENT-or-STRING lists (font-family, voice-family).
//!
//! The grammar is `[ IDENT+ | STRING ] [ ',' [ IDENT+ | STRING ] ]*`, where a
//! run of unquoted IDENTs separated only by whitespace forms one name joined
//! by single spaces. Items are collected and sized first, then encoded into
//! an exactly-sized buffer: the first item's value rides in the OPV, each
//! further item contributes a value word, and name payloads follow their
//! word as interned handles.

use smallvec::SmallVec;

use crate::bytecode::{HANDLE_SIZE, Style, WORD_SIZE};
use crate::error::{Error, Result};
use crate::intern::StringHandle;
use crate::parse::ParseContext;
use crate::tokens::{Token, TokenKind, TokenStream};

pub(crate) struct NameListConfig {
    pub string_value: u16,
    pub ident_list_value: u16,
    pub end_value: u16,
    /// Reserved generic names and their bytecode values.
    pub generics: &'static [(&'static str, u16)],
}

pub(crate) enum NamePayload {
    /// A token's own handle; the buffer takes an additional reference.
    Borrowed(StringHandle),
    /// A freshly interned joined name; the buffer takes over its reference.
    Owned(StringHandle),
}

pub(crate) struct NameListItem {
    pub value: u16,
    pub name: Option<NamePayload>,
}

impl NameListConfig {
    fn classify(&self, ctx: &ParseContext<'_>, token: &Token) -> u16 {
        for &(word, value) in self.generics {
            if token.lower == ctx.word(word) {
                return value;
            }
        }
        self.ident_list_value
    }
}

/// Drop any owned references held by a partially collected list.
pub(crate) fn release_name_list(ctx: &ParseContext<'_>, items: &[NameListItem]) {
    for item in items {
        if let Some(NamePayload::Owned(handle)) = item.name {
            ctx.interner.release(handle);
        }
    }
}

/// Collect the list items starting from the already-consumed `first` token.
pub(crate) fn parse_name_list(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    first: &Token,
    cfg: &NameListConfig,
) -> Result<SmallVec<[NameListItem; 4]>> {
    let mut items: SmallVec<[NameListItem; 4]> = SmallVec::new();
    let mut token = *first;

    loop {
        let item = match token.kind {
            TokenKind::String => NameListItem {
                value: cfg.string_value,
                name: Some(NamePayload::Borrowed(token.data)),
            },
            TokenKind::Ident => {
                let value = cfg.classify(ctx, &token);
                if value != cfg.ident_list_value {
                    NameListItem { value, name: None }
                } else {
                    match collect_ident_run(ctx, ts, &token) {
                        Ok(name) => NameListItem {
                            value,
                            name: Some(name),
                        },
                        Err(e) => {
                            release_name_list(ctx, &items);
                            return Err(e);
                        }
                    }
                }
            }
            _ => {
                release_name_list(ctx, &items);
                return Err(Error::Invalid);
            }
        };
        items.push(item);

        ts.consume_whitespace();
        match ts.peek() {
            Some(t) if t.is_char(',') => {
                ts.next();
                ts.consume_whitespace();
                match ts.next() {
                    Some(t) if matches!(t.kind, TokenKind::Ident | TokenKind::String) => {
                        token = *t;
                    }
                    _ => {
                        release_name_list(ctx, &items);
                        return Err(Error::Invalid);
                    }
                }
            }
            _ => break,
        }
    }

    Ok(items)
}

/// Join a run of IDENT tokens into one name.
///
/// A lone ident borrows the token's handle; two or more intern a new string
/// joined by single spaces, whose reference the caller owns.
fn collect_ident_run(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    first: &Token,
) -> Result<NamePayload> {
    let mut extra: SmallVec<[StringHandle; 4]> = SmallVec::new();
    loop {
        let mark = ts.pos();
        ts.consume_whitespace();
        match ts.peek() {
            Some(t) if t.kind == TokenKind::Ident => {
                extra.push(t.data);
                ts.next();
            }
            _ => {
                ts.seek(mark);
                break;
            }
        }
    }

    if extra.is_empty() {
        return Ok(NamePayload::Borrowed(first.data));
    }

    let mut joined = ctx.interner.resolve(first.data).to_string();
    for handle in &extra {
        joined.push(' ');
        joined.push_str(&ctx.interner.resolve(*handle));
    }
    Ok(NamePayload::Owned(ctx.interner.intern(&joined)?))
}

/// Octets the encoded items occupy after the OPV.
pub(crate) fn name_list_size(items: &[NameListItem]) -> usize {
    let mut size = WORD_SIZE; // terminator
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            size += WORD_SIZE;
        }
        if item.name.is_some() {
            size += HANDLE_SIZE;
        }
    }
    size
}

/// Encode the items after an already-written OPV.
pub(crate) fn emit_name_list(
    ctx: &ParseContext<'_>,
    style: &mut Style,
    items: SmallVec<[NameListItem; 4]>,
    cfg: &NameListConfig,
) {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            style.push_word(u32::from(item.value));
        }
        match item.name {
            Some(NamePayload::Borrowed(handle)) => style.push_string(ctx.interner, handle),
            Some(NamePayload::Owned(handle)) => style.push_string_owned(handle),
            None => {}
        }
    }
    style.push_word(u32::from(cfg.end_value));
}
