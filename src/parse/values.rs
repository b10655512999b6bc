//! Shared value parsers: numeric literals with units, colour specifiers,
//! integers.

use crate::bytecode::UnitMask;
use crate::error::{Error, Result};
use crate::fixed::{Fixed, parse_number};
use crate::parse::ParseContext;
use crate::tokens::{TokenKind, TokenStream};
use crate::values::Color;

fn unit_from_suffix(suffix: &str) -> Option<UnitMask> {
    Some(match suffix {
        "px" => UnitMask::PX,
        "ex" => UnitMask::EX,
        "em" => UnitMask::EM,
        "in" => UnitMask::IN,
        "cm" => UnitMask::CM,
        "mm" => UnitMask::MM,
        "pt" => UnitMask::PT,
        "pc" => UnitMask::PC,
        "deg" => UnitMask::DEG,
        "grad" => UnitMask::GRAD,
        "rad" => UnitMask::RAD,
        "ms" => UnitMask::MS,
        "s" => UnitMask::S,
        "hz" => UnitMask::HZ,
        "khz" => UnitMask::KHZ,
        _ => return None,
    })
}

/// Parse a numeric literal plus dimension/percentage suffix.
///
/// A bare number takes `default_unit`; a percentage takes [`UnitMask::PCT`];
/// a dimension's suffix must name a known unit. Per-property unit rejection
/// is the caller's job.
pub(crate) fn parse_unit_specifier(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    default_unit: UnitMask,
) -> Result<(Fixed, UnitMask)> {
    ts.consume_whitespace();
    let token = ts.peek().ok_or(Error::Invalid)?;

    let result = match token.kind {
        TokenKind::Dimension => {
            let text = ctx.interner.resolve(token.lower);
            let (value, consumed) = parse_number(&text, false);
            if consumed == 0 || consumed >= text.len() {
                return Err(Error::Invalid);
            }
            let unit = unit_from_suffix(&text[consumed..]).ok_or(Error::Invalid)?;
            (value, unit)
        }
        TokenKind::Number => {
            let text = ctx.interner.resolve(token.lower);
            let (value, consumed) = parse_number(&text, false);
            if consumed != text.len() || consumed == 0 {
                return Err(Error::Invalid);
            }
            (value, default_unit)
        }
        TokenKind::Percentage => {
            let text = ctx.interner.resolve(token.lower);
            let (value, consumed) = parse_number(&text, false);
            if consumed != text.len() || consumed == 0 {
                return Err(Error::Invalid);
            }
            (value, UnitMask::PCT)
        }
        _ => return Err(Error::Invalid),
    };

    ts.next();
    Ok(result)
}

/// Parse a NUMBER token in full.
pub(crate) fn parse_number_token(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    int_only: bool,
) -> Result<Fixed> {
    ts.consume_whitespace();
    let token = ts.peek().ok_or(Error::Invalid)?;
    if token.kind != TokenKind::Number {
        return Err(Error::Invalid);
    }
    let text = ctx.interner.resolve(token.lower);
    let (value, consumed) = parse_number(&text, int_only);
    if consumed != text.len() || consumed == 0 {
        return Err(Error::Invalid);
    }
    ts.next();
    Ok(value)
}

fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let b = hex.as_bytes();
    match b.len() {
        3 => {
            let r = hex_nibble(b[0])?;
            let g = hex_nibble(b[1])?;
            let bl = hex_nibble(b[2])?;
            Some(Color::rgb(r * 0x11, g * 0x11, bl * 0x11))
        }
        6 => {
            let r = hex_nibble(b[0])? << 4 | hex_nibble(b[1])?;
            let g = hex_nibble(b[2])? << 4 | hex_nibble(b[3])?;
            let bl = hex_nibble(b[4])? << 4 | hex_nibble(b[5])?;
            Some(Color::rgb(r, g, bl))
        }
        _ => None,
    }
}

/// One rgb() component: an integer 0..255 or a percentage.
fn parse_color_component(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<u8> {
    ts.consume_whitespace();
    let token = ts.next().ok_or(Error::Invalid)?;
    let text = ctx.interner.resolve(token.lower);
    match token.kind {
        TokenKind::Number => {
            let (value, consumed) = parse_number(&text, true);
            if consumed != text.len() || consumed == 0 {
                return Err(Error::Invalid);
            }
            Ok(value.to_int().clamp(0, 255) as u8)
        }
        TokenKind::Percentage => {
            let (value, consumed) = parse_number(&text, false);
            if consumed != text.len() || consumed == 0 {
                return Err(Error::Invalid);
            }
            let scaled = (i64::from(value.raw()) * 255 / 100) >> Fixed::FRAC_BITS;
            Ok(scaled.clamp(0, 255) as u8)
        }
        _ => Err(Error::Invalid),
    }
}

/// Parse a colour specifier: a named colour, `#rgb`/`#rrggbb`, or
/// `rgb(r, g, b)`.
pub(crate) fn parse_color_specifier(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Color> {
    ts.consume_whitespace();
    let token = ts.next().ok_or(Error::Invalid)?;
    match token.kind {
        TokenKind::Ident => ctx.keywords.color(token.lower).ok_or(Error::Invalid),
        TokenKind::Hash => {
            let text = ctx.interner.resolve(token.lower);
            parse_hex_color(&text).ok_or(Error::Invalid)
        }
        TokenKind::Function if token.lower == ctx.word("rgb") => {
            let r = parse_color_component(ctx, ts)?;
            ts.consume_whitespace();
            if !ts.next().is_some_and(|t| t.is_char(',')) {
                return Err(Error::Invalid);
            }
            let g = parse_color_component(ctx, ts)?;
            ts.consume_whitespace();
            if !ts.next().is_some_and(|t| t.is_char(',')) {
                return Err(Error::Invalid);
            }
            let b = parse_color_component(ctx, ts)?;
            ts.consume_whitespace();
            if !ts.next().is_some_and(|t| t.is_char(')')) {
                return Err(Error::Invalid);
            }
            Ok(Color::rgb(r, g, b))
        }
        _ => Err(Error::Invalid),
    }
}
