//! The per-property grammars.
//!
//! Every parser consumes one declaration value (plus an optional
//! `!important`) and emits a single bytecode entry. Grammars that share a
//! shape go through a common engine; the rest are written out longhand.
//! Keyword matching is identity against the pre-interned table, using each
//! token's lowercase handle.

use smallvec::SmallVec;

use crate::bytecode::{
    FIXED_SIZE, HANDLE_SIZE, OPV_SIZE, Opv, PropFlags, PropertyId, Style, UNIT_SIZE, UnitMask,
    WORD_SIZE,
};
use crate::error::{Error, Result};
use crate::fixed::Fixed;
use crate::intern::StringHandle;
use crate::parse::lists::{
    NameListConfig, emit_name_list, name_list_size, parse_name_list, release_name_list,
};
use crate::parse::values::{
    parse_color_specifier, parse_number_token, parse_unit_specifier,
};
use crate::parse::{ParseContext, parse_important};
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::values::*;

// ============================================================================
// Shared engines
// ============================================================================

fn lookup_keyword(ctx: &ParseContext<'_>, token: &Token, table: &[(&str, u16)]) -> Option<u16> {
    for &(word, value) in table {
        if token.lower == ctx.word(word) {
            return Some(value);
        }
    }
    None
}

fn opv_only(prop: PropertyId, flags: PropFlags, value: u16) -> Result<Style> {
    let mut style = Style::with_capacity(OPV_SIZE)?;
    style.push_opv(Opv::new(prop, flags, value));
    Ok(style)
}

fn opv_length(
    prop: PropertyId,
    flags: PropFlags,
    value: u16,
    payload: Option<(Fixed, UnitMask)>,
) -> Result<Style> {
    let size = OPV_SIZE + if payload.is_some() { FIXED_SIZE + UNIT_SIZE } else { 0 };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(prop, flags, value));
    if let Some((length, unit)) = payload {
        style.push_fixed(length);
        style.push_unit(unit);
    }
    Ok(style)
}

/// One IDENT from a fixed set, or `inherit`.
fn parse_keyword(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
    table: &[(&str, u16)],
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.next().ok_or(Error::Invalid)?;
    if token.kind != TokenKind::Ident {
        return Err(Error::Invalid);
    }

    let mut flags = parse_important(ctx, ts)?;
    let mut value = 0;
    if token.lower == ctx.word("inherit") {
        flags |= PropFlags::INHERIT;
    } else {
        value = lookup_keyword(ctx, &token, table).ok_or(Error::Invalid)?;
    }

    opv_only(prop, flags, value)
}

fn length_units(u: UnitMask) -> bool {
    !(u.is_angle() || u.is_time() || u.is_frequency() || u.is_percent())
}

fn length_pct_units(u: UnitMask) -> bool {
    !(u.is_angle() || u.is_time() || u.is_frequency())
}

fn time_pct_units(u: UnitMask) -> bool {
    u.is_time() || u.is_percent()
}

struct LengthRule {
    /// Keyword alternative (`auto`, `normal`, `none`), encoded as
    /// [`LENGTH_KEYWORD`].
    keyword: Option<&'static str>,
    negative_ok: bool,
    accept: fn(UnitMask) -> bool,
    default_unit: UnitMask,
}

const LENGTH_AUTO_NEG: LengthRule = LengthRule {
    keyword: Some("auto"),
    negative_ok: true,
    accept: length_pct_units,
    default_unit: UnitMask::PX,
};

const LENGTH_AUTO_NONNEG: LengthRule = LengthRule {
    keyword: Some("auto"),
    negative_ok: false,
    accept: length_pct_units,
    default_unit: UnitMask::PX,
};

const LENGTH_NONE_NONNEG: LengthRule = LengthRule {
    keyword: Some("none"),
    negative_ok: false,
    accept: length_pct_units,
    default_unit: UnitMask::PX,
};

const LENGTH_NONNEG: LengthRule = LengthRule {
    keyword: None,
    negative_ok: false,
    accept: length_pct_units,
    default_unit: UnitMask::PX,
};

const LENGTH_INDENT: LengthRule = LengthRule {
    keyword: None,
    negative_ok: true,
    accept: length_pct_units,
    default_unit: UnitMask::PX,
};

const LENGTH_SPACING: LengthRule = LengthRule {
    keyword: Some("normal"),
    negative_ok: true,
    accept: length_units,
    default_unit: UnitMask::PX,
};

const LENGTH_PAUSE: LengthRule = LengthRule {
    keyword: None,
    negative_ok: false,
    accept: time_pct_units,
    default_unit: UnitMask::MS,
};

/// A length/percentage or one keyword, per `rule`.
fn parse_length_like(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
    rule: &LengthRule,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = LENGTH_KEYWORD;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident
        && rule.keyword.is_some_and(|kw| token.lower == ctx.word(kw))
    {
        ts.next();
    } else {
        let (length, unit) = parse_unit_specifier(ctx, ts, rule.default_unit)?;
        if !(rule.accept)(unit) {
            return Err(Error::Invalid);
        }
        if !rule.negative_ok && length.is_negative() {
            return Err(Error::Invalid);
        }
        value = LENGTH_SET;
        payload = Some((length, unit));
    }

    flags |= parse_important(ctx, ts)?;
    opv_length(prop, flags, value, payload)
}

/// thin | medium | thick | non-negative length.
fn parse_border_width_like(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = BORDER_WIDTH_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("thin") {
        ts.next();
        value = BORDER_WIDTH_THIN;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("medium") {
        ts.next();
        value = BORDER_WIDTH_MEDIUM;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("thick") {
        ts.next();
        value = BORDER_WIDTH_THICK;
    } else {
        let (length, unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
        if !length_units(unit) || length.is_negative() {
            return Err(Error::Invalid);
        }
        payload = Some((length, unit));
    }

    flags |= parse_important(ctx, ts)?;
    opv_length(prop, flags, value, payload)
}

/// A colour specifier or `inherit`, with optional extra keywords.
fn parse_color_like(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
    transparent_ok: bool,
    invert_ok: bool,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = COLOR_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if transparent_ok
        && token.kind == TokenKind::Ident
        && token.lower == ctx.word("transparent")
    {
        ts.next();
        value = COLOR_TRANSPARENT;
    } else if invert_ok && token.kind == TokenKind::Ident && token.lower == ctx.word("invert") {
        ts.next();
        value = OUTLINE_COLOR_INVERT;
    } else {
        payload = Some(parse_color_specifier(ctx, ts)?);
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE + if payload.is_some() { 4 } else { 0 };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(prop, flags, value));
    if let Some(color) = payload {
        style.push_color(color.0);
    }
    Ok(style)
}

/// A URI, `none`, or `inherit`.
fn parse_uri_like(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = URI_NONE;
    let mut uri = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("none") {
        ts.next();
    } else if token.kind == TokenKind::Uri {
        ts.next();
        value = URI_SET;
        uri = Some(token.data);
    } else {
        return Err(Error::Invalid);
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE + if uri.is_some() { HANDLE_SIZE } else { 0 };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(prop, flags, value));
    if let Some(handle) = uri {
        style.push_string(ctx.interner, handle);
    }
    Ok(style)
}

/// A bare number or `inherit`.
fn parse_number_like(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
    int_only: bool,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = 0;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else {
        payload = Some(parse_number_token(ctx, ts, int_only)?);
        value = NUMBER_SET;
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE + if payload.is_some() { FIXED_SIZE } else { 0 };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(prop, flags, value));
    if let Some(number) = payload {
        style.push_fixed(number);
    }
    Ok(style)
}

// ============================================================================
// Keyword-shaped properties
// ============================================================================

macro_rules! keyword_parsers {
    ($($name:ident => ($prop:ident, $table:ident)),* $(,)?) => {
        $(
            pub(crate) fn $name(
                ctx: &ParseContext<'_>,
                ts: &mut TokenStream<'_>,
            ) -> Result<Style> {
                parse_keyword(ctx, ts, PropertyId::$prop, $table)
            }
        )*
    };
}

keyword_parsers! {
    parse_background_attachment => (BackgroundAttachment, BACKGROUND_ATTACHMENT_KEYWORDS),
    parse_background_repeat => (BackgroundRepeat, BACKGROUND_REPEAT_KEYWORDS),
    parse_border_collapse => (BorderCollapse, BORDER_COLLAPSE_KEYWORDS),
    parse_border_bottom_style => (BorderBottomStyle, BORDER_STYLE_KEYWORDS),
    parse_border_left_style => (BorderLeftStyle, BORDER_STYLE_KEYWORDS),
    parse_border_right_style => (BorderRightStyle, BORDER_STYLE_KEYWORDS),
    parse_border_top_style => (BorderTopStyle, BORDER_STYLE_KEYWORDS),
    parse_caption_side => (CaptionSide, CAPTION_SIDE_KEYWORDS),
    parse_clear => (Clear, CLEAR_KEYWORDS),
    parse_direction => (Direction, DIRECTION_KEYWORDS),
    parse_display => (Display, DISPLAY_KEYWORDS),
    parse_empty_cells => (EmptyCells, EMPTY_CELLS_KEYWORDS),
    parse_float => (Float, FLOAT_KEYWORDS),
    parse_font_style => (FontStyle, FONT_STYLE_KEYWORDS),
    parse_font_variant => (FontVariant, FONT_VARIANT_KEYWORDS),
    parse_list_style_position => (ListStylePosition, LIST_STYLE_POSITION_KEYWORDS),
    parse_list_style_type => (ListStyleType, LIST_STYLE_TYPE_KEYWORDS),
    parse_outline_style => (OutlineStyle, OUTLINE_STYLE_KEYWORDS),
    parse_overflow => (Overflow, OVERFLOW_KEYWORDS),
    parse_page_break_after => (PageBreakAfter, PAGE_BREAK_KEYWORDS),
    parse_page_break_before => (PageBreakBefore, PAGE_BREAK_KEYWORDS),
    parse_page_break_inside => (PageBreakInside, PAGE_BREAK_INSIDE_KEYWORDS),
    parse_position => (Position, POSITION_KEYWORDS),
    parse_speak => (Speak, SPEAK_KEYWORDS),
    parse_speak_header => (SpeakHeader, SPEAK_HEADER_KEYWORDS),
    parse_speak_numeral => (SpeakNumeral, SPEAK_NUMERAL_KEYWORDS),
    parse_speak_punctuation => (SpeakPunctuation, SPEAK_PUNCTUATION_KEYWORDS),
    parse_table_layout => (TableLayout, TABLE_LAYOUT_KEYWORDS),
    parse_text_align => (TextAlign, TEXT_ALIGN_KEYWORDS),
    parse_text_transform => (TextTransform, TEXT_TRANSFORM_KEYWORDS),
    parse_unicode_bidi => (UnicodeBidi, UNICODE_BIDI_KEYWORDS),
    parse_visibility => (Visibility, VISIBILITY_KEYWORDS),
    parse_white_space => (WhiteSpace, WHITE_SPACE_KEYWORDS),
}

// ============================================================================
// Length-shaped properties
// ============================================================================

macro_rules! length_parsers {
    ($($name:ident => ($prop:ident, $rule:ident)),* $(,)?) => {
        $(
            pub(crate) fn $name(
                ctx: &ParseContext<'_>,
                ts: &mut TokenStream<'_>,
            ) -> Result<Style> {
                parse_length_like(ctx, ts, PropertyId::$prop, &$rule)
            }
        )*
    };
}

length_parsers! {
    parse_width => (Width, LENGTH_AUTO_NONNEG),
    parse_height => (Height, LENGTH_AUTO_NONNEG),
    parse_min_width => (MinWidth, LENGTH_NONNEG),
    parse_min_height => (MinHeight, LENGTH_NONNEG),
    parse_max_width => (MaxWidth, LENGTH_NONE_NONNEG),
    parse_max_height => (MaxHeight, LENGTH_NONE_NONNEG),
    parse_margin_top => (MarginTop, LENGTH_AUTO_NEG),
    parse_margin_right => (MarginRight, LENGTH_AUTO_NEG),
    parse_margin_bottom => (MarginBottom, LENGTH_AUTO_NEG),
    parse_margin_left => (MarginLeft, LENGTH_AUTO_NEG),
    parse_top => (Top, LENGTH_AUTO_NEG),
    parse_right => (Right, LENGTH_AUTO_NEG),
    parse_bottom => (Bottom, LENGTH_AUTO_NEG),
    parse_left => (Left, LENGTH_AUTO_NEG),
    parse_padding_top => (PaddingTop, LENGTH_NONNEG),
    parse_padding_right => (PaddingRight, LENGTH_NONNEG),
    parse_padding_bottom => (PaddingBottom, LENGTH_NONNEG),
    parse_padding_left => (PaddingLeft, LENGTH_NONNEG),
    parse_text_indent => (TextIndent, LENGTH_INDENT),
    parse_letter_spacing => (LetterSpacing, LENGTH_SPACING),
    parse_word_spacing => (WordSpacing, LENGTH_SPACING),
    parse_pause_after => (PauseAfter, LENGTH_PAUSE),
    parse_pause_before => (PauseBefore, LENGTH_PAUSE),
}

macro_rules! border_width_parsers {
    ($($name:ident => $prop:ident),* $(,)?) => {
        $(
            pub(crate) fn $name(
                ctx: &ParseContext<'_>,
                ts: &mut TokenStream<'_>,
            ) -> Result<Style> {
                parse_border_width_like(ctx, ts, PropertyId::$prop)
            }
        )*
    };
}

border_width_parsers! {
    parse_border_top_width => BorderTopWidth,
    parse_border_right_width => BorderRightWidth,
    parse_border_bottom_width => BorderBottomWidth,
    parse_border_left_width => BorderLeftWidth,
    parse_outline_width => OutlineWidth,
}

// ============================================================================
// Colour, URI and number properties
// ============================================================================

macro_rules! color_parsers {
    ($($name:ident => ($prop:ident, $transparent:expr, $invert:expr)),* $(,)?) => {
        $(
            pub(crate) fn $name(
                ctx: &ParseContext<'_>,
                ts: &mut TokenStream<'_>,
            ) -> Result<Style> {
                parse_color_like(ctx, ts, PropertyId::$prop, $transparent, $invert)
            }
        )*
    };
}

color_parsers! {
    parse_color => (Color, false, false),
    parse_background_color => (BackgroundColor, true, false),
    parse_border_top_color => (BorderTopColor, true, false),
    parse_border_right_color => (BorderRightColor, true, false),
    parse_border_bottom_color => (BorderBottomColor, true, false),
    parse_border_left_color => (BorderLeftColor, true, false),
    parse_outline_color => (OutlineColor, false, true),
}

macro_rules! uri_parsers {
    ($($name:ident => $prop:ident),* $(,)?) => {
        $(
            pub(crate) fn $name(
                ctx: &ParseContext<'_>,
                ts: &mut TokenStream<'_>,
            ) -> Result<Style> {
                parse_uri_like(ctx, ts, PropertyId::$prop)
            }
        )*
    };
}

uri_parsers! {
    parse_background_image => BackgroundImage,
    parse_list_style_image => ListStyleImage,
    parse_cue_after => CueAfter,
    parse_cue_before => CueBefore,
}

macro_rules! number_parsers {
    ($($name:ident => ($prop:ident, $int_only:expr)),* $(,)?) => {
        $(
            pub(crate) fn $name(
                ctx: &ParseContext<'_>,
                ts: &mut TokenStream<'_>,
            ) -> Result<Style> {
                parse_number_like(ctx, ts, PropertyId::$prop, $int_only)
            }
        )*
    };
}

number_parsers! {
    parse_orphans => (Orphans, true),
    parse_widows => (Widows, true),
    parse_pitch_range => (PitchRange, false),
    parse_richness => (Richness, false),
    parse_stress => (Stress, false),
}

// ============================================================================
// Bespoke grammars
// ============================================================================

pub(crate) fn parse_z_index(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = Z_INDEX_AUTO;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("auto") {
        ts.next();
    } else {
        payload = Some(parse_number_token(ctx, ts, true)?);
        value = Z_INDEX_SET;
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE + if payload.is_some() { FIXED_SIZE } else { 0 };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::ZIndex, flags, value));
    if let Some(number) = payload {
        style.push_fixed(number);
    }
    Ok(style)
}

pub(crate) fn parse_line_height(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = LINE_HEIGHT_NORMAL;
    let mut number = None;
    let mut dimension = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("normal") {
        ts.next();
    } else if token.kind == TokenKind::Number {
        let n = parse_number_token(ctx, ts, false)?;
        if n.is_negative() {
            return Err(Error::Invalid);
        }
        value = LINE_HEIGHT_NUMBER;
        number = Some(n);
    } else {
        let (length, unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
        if !length_pct_units(unit) || length.is_negative() {
            return Err(Error::Invalid);
        }
        value = LINE_HEIGHT_DIMENSION;
        dimension = Some((length, unit));
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE
        + if number.is_some() {
            FIXED_SIZE
        } else if dimension.is_some() {
            FIXED_SIZE + UNIT_SIZE
        } else {
            0
        };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::LineHeight, flags, value));
    if let Some(n) = number {
        style.push_fixed(n);
    }
    if let Some((length, unit)) = dimension {
        style.push_fixed(length);
        style.push_unit(unit);
    }
    Ok(style)
}

static VERTICAL_ALIGN_KEYWORDS: &[(&str, u16)] = &[
    ("baseline", VERTICAL_ALIGN_BASELINE),
    ("sub", VERTICAL_ALIGN_SUB),
    ("super", VERTICAL_ALIGN_SUPER),
    ("top", VERTICAL_ALIGN_TOP),
    ("text-top", VERTICAL_ALIGN_TEXT_TOP),
    ("middle", VERTICAL_ALIGN_MIDDLE),
    ("bottom", VERTICAL_ALIGN_BOTTOM),
    ("text-bottom", VERTICAL_ALIGN_TEXT_BOTTOM),
];

pub(crate) fn parse_vertical_align(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = VERTICAL_ALIGN_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident
        && let Some(v) = lookup_keyword(ctx, &token, VERTICAL_ALIGN_KEYWORDS)
    {
        ts.next();
        value = v;
    } else {
        let (length, unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
        if !length_pct_units(unit) {
            return Err(Error::Invalid);
        }
        payload = Some((length, unit));
    }

    flags |= parse_important(ctx, ts)?;
    opv_length(PropertyId::VerticalAlign, flags, value, payload)
}

static FONT_SIZE_KEYWORDS: &[(&str, u16)] = &[
    ("xx-small", FONT_SIZE_XX_SMALL),
    ("x-small", FONT_SIZE_X_SMALL),
    ("small", FONT_SIZE_SMALL),
    ("medium", FONT_SIZE_MEDIUM),
    ("large", FONT_SIZE_LARGE),
    ("x-large", FONT_SIZE_X_LARGE),
    ("xx-large", FONT_SIZE_XX_LARGE),
    ("larger", FONT_SIZE_LARGER),
    ("smaller", FONT_SIZE_SMALLER),
];

pub(crate) fn parse_font_size(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = FONT_SIZE_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident
        && let Some(v) = lookup_keyword(ctx, &token, FONT_SIZE_KEYWORDS)
    {
        ts.next();
        value = v;
    } else {
        let (length, unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
        if !length_pct_units(unit) || length.is_negative() {
            return Err(Error::Invalid);
        }
        payload = Some((length, unit));
    }

    flags |= parse_important(ctx, ts)?;
    opv_length(PropertyId::FontSize, flags, value, payload)
}

pub(crate) fn parse_font_weight(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.next().ok_or(Error::Invalid)?;
    let mut flags = parse_important(ctx, ts)?;

    let value = match token.kind {
        TokenKind::Ident if token.lower == ctx.word("inherit") => {
            flags |= PropFlags::INHERIT;
            0
        }
        TokenKind::Ident if token.lower == ctx.word("normal") => FONT_WEIGHT_NORMAL,
        TokenKind::Ident if token.lower == ctx.word("bold") => FONT_WEIGHT_BOLD,
        TokenKind::Ident if token.lower == ctx.word("bolder") => FONT_WEIGHT_BOLDER,
        TokenKind::Ident if token.lower == ctx.word("lighter") => FONT_WEIGHT_LIGHTER,
        TokenKind::Number => {
            let text = ctx.interner.resolve(token.lower);
            let (number, consumed) = crate::fixed::parse_number(&text, true);
            if consumed != text.len() || consumed == 0 {
                return Err(Error::Invalid);
            }
            match number.to_int() {
                100 => FONT_WEIGHT_100,
                200 => FONT_WEIGHT_200,
                300 => FONT_WEIGHT_300,
                400 => FONT_WEIGHT_400,
                500 => FONT_WEIGHT_500,
                600 => FONT_WEIGHT_600,
                700 => FONT_WEIGHT_700,
                800 => FONT_WEIGHT_800,
                900 => FONT_WEIGHT_900,
                _ => return Err(Error::Invalid),
            }
        }
        _ => return Err(Error::Invalid),
    };

    opv_only(PropertyId::FontWeight, flags, value)
}

pub(crate) fn parse_text_decoration(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.next().ok_or(Error::Invalid)?;
    if token.kind != TokenKind::Ident {
        return Err(Error::Invalid);
    }

    let mut flags = PropFlags::empty();
    let mut value = TEXT_DECORATION_NONE;

    if token.lower == ctx.word("inherit") {
        flags |= PropFlags::INHERIT;
    } else if token.lower == ctx.word("none") {
        // nothing to add
    } else {
        let mut current = token;
        loop {
            let bit = if current.lower == ctx.word("underline") {
                TEXT_DECORATION_UNDERLINE
            } else if current.lower == ctx.word("overline") {
                TEXT_DECORATION_OVERLINE
            } else if current.lower == ctx.word("line-through") {
                TEXT_DECORATION_LINE_THROUGH
            } else if current.lower == ctx.word("blink") {
                TEXT_DECORATION_BLINK
            } else {
                return Err(Error::Invalid);
            };
            if value & bit != 0 {
                return Err(Error::Invalid);
            }
            value |= bit;

            ts.consume_whitespace();
            match ts.peek() {
                Some(t) if t.kind == TokenKind::Ident => {
                    current = *t;
                    ts.next();
                }
                _ => break,
            }
        }
    }

    flags |= parse_important(ctx, ts)?;
    opv_only(PropertyId::TextDecoration, flags, value)
}

pub(crate) fn parse_clip(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.next().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = CLIP_AUTO;
    let mut lengths: SmallVec<[(Fixed, UnitMask); 4]> = SmallVec::new();

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("auto") {
        // CLIP_AUTO
    } else if token.kind == TokenKind::Function && token.lower == ctx.word("rect") {
        value = CLIP_SHAPE_RECT;

        for side in 0..4 {
            ts.consume_whitespace();
            let operand = *ts.peek().ok_or(Error::Invalid)?;

            if operand.kind == TokenKind::Ident {
                // The per-side auto slots are bits 3..6 of the value.
                if operand.lower != ctx.word("auto") {
                    return Err(Error::Invalid);
                }
                value |= 1 << (side + 3);
                ts.next();
            } else {
                let (length, unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
                if !length_units(unit) {
                    return Err(Error::Invalid);
                }
                lengths.push((length, unit));
            }

            ts.consume_whitespace();
            if side < 3 && ts.peek().is_some_and(|t| t.is_char(',')) {
                ts.next();
            }
        }

        ts.consume_whitespace();
        if !ts.next().is_some_and(|t| t.is_char(')')) {
            return Err(Error::Invalid);
        }
    } else {
        return Err(Error::Invalid);
    }

    flags |= parse_important(ctx, ts)?;

    let mut size = OPV_SIZE;
    if !flags.contains(PropFlags::INHERIT) && (value & CLIP_SHAPE_MASK) == CLIP_SHAPE_RECT {
        size += lengths.len() * (FIXED_SIZE + UNIT_SIZE);
    }
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::Clip, flags, value));
    if !flags.contains(PropFlags::INHERIT) && (value & CLIP_SHAPE_MASK) == CLIP_SHAPE_RECT {
        for (length, unit) in lengths {
            style.push_fixed(length);
            style.push_unit(unit);
        }
    }
    Ok(style)
}

/// The shared list-end predicate: after a cursor value only `!important`
/// (or nothing) may follow.
fn cursor_list_end_ok(ts: &TokenStream<'_>) -> bool {
    match ts.peek() {
        None => true,
        Some(t) => t.is_char('!'),
    }
}

pub(crate) fn parse_cursor(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let first = *ts.peek().ok_or(Error::Invalid)?;

    if first.kind == TokenKind::Ident && first.lower == ctx.word("inherit") {
        ts.next();
        let flags = parse_important(ctx, ts)? | PropFlags::INHERIT;
        return opv_only(PropertyId::Cursor, flags, 0);
    }

    let mut uris: SmallVec<[StringHandle; 4]> = SmallVec::new();
    let mut token = *ts.next().ok_or(Error::Invalid)?;
    if !matches!(token.kind, TokenKind::Ident | TokenKind::Uri) {
        return Err(Error::Invalid);
    }

    while token.kind == TokenKind::Uri {
        uris.push(token.data);

        ts.consume_whitespace();
        if !ts.next().is_some_and(|t| t.is_char(',')) {
            return Err(Error::Invalid);
        }
        ts.consume_whitespace();

        token = *ts.next().ok_or(Error::Invalid)?;
        if !matches!(token.kind, TokenKind::Ident | TokenKind::Uri) {
            return Err(Error::Invalid);
        }
    }

    let keyword = lookup_keyword(ctx, &token, CURSOR_KEYWORDS).ok_or(Error::Invalid)?;

    ts.consume_whitespace();
    if !cursor_list_end_ok(ts) {
        return Err(Error::Invalid);
    }
    let flags = parse_important(ctx, ts)?;

    let value = if uris.is_empty() { keyword } else { CURSOR_URI };
    let mut size = OPV_SIZE;
    if !uris.is_empty() {
        size += HANDLE_SIZE + (uris.len() - 1) * (WORD_SIZE + HANDLE_SIZE) + WORD_SIZE;
    }

    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::Cursor, flags, value));
    for (i, uri) in uris.iter().enumerate() {
        if i > 0 {
            style.push_word(u32::from(CURSOR_URI));
        }
        style.push_string(ctx.interner, *uri);
    }
    if !uris.is_empty() {
        style.push_word(u32::from(keyword));
    }
    Ok(style)
}

static FONT_FAMILY_CFG: NameListConfig = NameListConfig {
    string_value: FONT_FAMILY_STRING,
    ident_list_value: FONT_FAMILY_IDENT_LIST,
    end_value: FONT_FAMILY_END,
    generics: &[
        ("serif", FONT_FAMILY_SERIF),
        ("sans-serif", FONT_FAMILY_SANS_SERIF),
        ("cursive", FONT_FAMILY_CURSIVE),
        ("fantasy", FONT_FAMILY_FANTASY),
        ("monospace", FONT_FAMILY_MONOSPACE),
    ],
};

static VOICE_FAMILY_CFG: NameListConfig = NameListConfig {
    string_value: VOICE_FAMILY_STRING,
    ident_list_value: VOICE_FAMILY_IDENT_LIST,
    end_value: VOICE_FAMILY_END,
    generics: &[
        ("male", VOICE_FAMILY_MALE),
        ("female", VOICE_FAMILY_FEMALE),
        ("child", VOICE_FAMILY_CHILD),
    ],
};

fn parse_family_list(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
    cfg: &NameListConfig,
) -> Result<Style> {
    ts.consume_whitespace();
    let first = *ts.peek().ok_or(Error::Invalid)?;

    if first.kind == TokenKind::Ident && first.lower == ctx.word("inherit") {
        ts.next();
        let flags = parse_important(ctx, ts)? | PropFlags::INHERIT;
        return opv_only(prop, flags, 0);
    }

    let token = *ts.next().ok_or(Error::Invalid)?;
    if !matches!(token.kind, TokenKind::Ident | TokenKind::String) {
        return Err(Error::Invalid);
    }

    let items = parse_name_list(ctx, ts, &token, cfg)?;

    let flags = match parse_important(ctx, ts) {
        Ok(flags) => flags,
        Err(e) => {
            release_name_list(ctx, &items);
            return Err(e);
        }
    };

    let first_value = items[0].value;
    let size = OPV_SIZE + name_list_size(&items);
    let mut style = match Style::with_capacity(size) {
        Ok(style) => style,
        Err(e) => {
            release_name_list(ctx, &items);
            return Err(e);
        }
    };
    style.push_opv(Opv::new(prop, flags, first_value));
    emit_name_list(ctx, &mut style, items, cfg);
    Ok(style)
}

pub(crate) fn parse_font_family(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    parse_family_list(ctx, ts, PropertyId::FontFamily, &FONT_FAMILY_CFG)
}

pub(crate) fn parse_voice_family(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    parse_family_list(ctx, ts, PropertyId::VoiceFamily, &VOICE_FAMILY_CFG)
}

/// One encoded content item: its value word and any handle payloads.
struct ContentItemEnc {
    word: u16,
    handles: SmallVec<[StringHandle; 2]>,
}

fn parse_content_function(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    token: &Token,
) -> Result<ContentItemEnc> {
    let mut handles: SmallVec<[StringHandle; 2]> = SmallVec::new();

    let word = if token.lower == ctx.word("attr") {
        ts.consume_whitespace();
        let name = *ts.next().ok_or(Error::Invalid)?;
        if name.kind != TokenKind::Ident {
            return Err(Error::Invalid);
        }
        handles.push(name.data);
        CONTENT_ATTR
    } else if token.lower == ctx.word("counter") {
        ts.consume_whitespace();
        let name = *ts.next().ok_or(Error::Invalid)?;
        if name.kind != TokenKind::Ident {
            return Err(Error::Invalid);
        }
        handles.push(name.data);

        let style = parse_counter_style(ctx, ts)?;
        CONTENT_COUNTER | (style << CONTENT_COUNTER_STYLE_SHIFT)
    } else if token.lower == ctx.word("counters") {
        ts.consume_whitespace();
        let name = *ts.next().ok_or(Error::Invalid)?;
        if name.kind != TokenKind::Ident {
            return Err(Error::Invalid);
        }
        handles.push(name.data);

        ts.consume_whitespace();
        if !ts.next().is_some_and(|t| t.is_char(',')) {
            return Err(Error::Invalid);
        }
        ts.consume_whitespace();
        let sep = *ts.next().ok_or(Error::Invalid)?;
        if sep.kind != TokenKind::String {
            return Err(Error::Invalid);
        }
        handles.push(sep.data);

        let style = parse_counter_style(ctx, ts)?;
        CONTENT_COUNTERS | (style << CONTENT_COUNTER_STYLE_SHIFT)
    } else {
        return Err(Error::Invalid);
    };

    ts.consume_whitespace();
    if !ts.next().is_some_and(|t| t.is_char(')')) {
        return Err(Error::Invalid);
    }

    Ok(ContentItemEnc { word, handles })
}

/// Optional `, <list-style-type>` inside counter()/counters(); defaults to
/// decimal.
fn parse_counter_style(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<u16> {
    ts.consume_whitespace();
    if !ts.peek().is_some_and(|t| t.is_char(',')) {
        return Ok(0x3); // decimal
    }
    ts.next();
    ts.consume_whitespace();
    let style = *ts.next().ok_or(Error::Invalid)?;
    if style.kind != TokenKind::Ident {
        return Err(Error::Invalid);
    }
    lookup_keyword(ctx, &style, LIST_STYLE_TYPE_KEYWORDS).ok_or(Error::Invalid)
}

pub(crate) fn parse_content(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let first = *ts.peek().ok_or(Error::Invalid)?;

    if first.kind == TokenKind::Ident {
        let single = if first.lower == ctx.word("inherit") {
            Some((PropFlags::INHERIT, 0))
        } else if first.lower == ctx.word("normal") {
            Some((PropFlags::empty(), CONTENT_NORMAL))
        } else if first.lower == ctx.word("none") {
            Some((PropFlags::empty(), CONTENT_NONE))
        } else {
            None
        };
        if let Some((extra, value)) = single {
            ts.next();
            let flags = parse_important(ctx, ts)? | extra;
            return opv_only(PropertyId::Content, flags, value);
        }
    }

    let mut items: SmallVec<[ContentItemEnc; 4]> = SmallVec::new();
    loop {
        ts.consume_whitespace();
        match ts.peek() {
            None => break,
            Some(t) if t.is_char('!') => break,
            _ => {}
        }
        let token = *ts.next().ok_or(Error::Invalid)?;

        let item = match token.kind {
            TokenKind::String => ContentItemEnc {
                word: CONTENT_STRING,
                handles: SmallVec::from_slice(&[token.data]),
            },
            TokenKind::Uri => ContentItemEnc {
                word: CONTENT_URI,
                handles: SmallVec::from_slice(&[token.data]),
            },
            TokenKind::Ident => {
                let word = if token.lower == ctx.word("open-quote") {
                    CONTENT_OPEN_QUOTE
                } else if token.lower == ctx.word("close-quote") {
                    CONTENT_CLOSE_QUOTE
                } else if token.lower == ctx.word("no-open-quote") {
                    CONTENT_NO_OPEN_QUOTE
                } else if token.lower == ctx.word("no-close-quote") {
                    CONTENT_NO_CLOSE_QUOTE
                } else {
                    return Err(Error::Invalid);
                };
                ContentItemEnc {
                    word,
                    handles: SmallVec::new(),
                }
            }
            TokenKind::Function => parse_content_function(ctx, ts, &token)?,
            _ => return Err(Error::Invalid),
        };
        items.push(item);
    }

    if items.is_empty() {
        return Err(Error::Invalid);
    }

    let flags = parse_important(ctx, ts)?;

    let mut size = OPV_SIZE + WORD_SIZE; // header + terminator
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            size += WORD_SIZE;
        }
        size += item.handles.len() * HANDLE_SIZE;
    }

    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::Content, flags, items[0].word));
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            style.push_word(u32::from(item.word));
        }
        for handle in &item.handles {
            style.push_string(ctx.interner, *handle);
        }
    }
    style.push_word(u32::from(CONTENT_NONE));
    Ok(style)
}

fn parse_counter_list(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
    prop: PropertyId,
    default_value: i32,
) -> Result<Style> {
    ts.consume_whitespace();
    let first = *ts.peek().ok_or(Error::Invalid)?;
    if first.kind != TokenKind::Ident {
        return Err(Error::Invalid);
    }

    if first.lower == ctx.word("inherit") {
        ts.next();
        let flags = parse_important(ctx, ts)? | PropFlags::INHERIT;
        return opv_only(prop, flags, 0);
    }
    if first.lower == ctx.word("none") {
        ts.next();
        let flags = parse_important(ctx, ts)?;
        return opv_only(prop, flags, COUNTER_NONE);
    }

    let mut counters: SmallVec<[(StringHandle, Fixed); 4]> = SmallVec::new();
    loop {
        let name = *ts.next().ok_or(Error::Invalid)?;
        if name.kind != TokenKind::Ident {
            return Err(Error::Invalid);
        }

        let mut value = Fixed::from_int(default_value);
        let mark = ts.pos();
        ts.consume_whitespace();
        if ts.peek().is_some_and(|t| t.kind == TokenKind::Number) {
            value = parse_number_token(ctx, ts, true)?;
        } else {
            ts.seek(mark);
        }
        counters.push((name.data, value));

        ts.consume_whitespace();
        match ts.peek() {
            Some(t) if t.kind == TokenKind::Ident => {}
            _ => break,
        }
    }

    let flags = parse_important(ctx, ts)?;

    let size = OPV_SIZE + counters.len() * (HANDLE_SIZE + FIXED_SIZE + WORD_SIZE);
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(prop, flags, COUNTER_NAMED));
    let last = counters.len() - 1;
    for (i, (name, value)) in counters.iter().enumerate() {
        style.push_string(ctx.interner, *name);
        style.push_fixed(*value);
        let next = if i == last { COUNTER_NONE } else { COUNTER_NAMED };
        style.push_word(u32::from(next));
    }
    Ok(style)
}

pub(crate) fn parse_counter_increment(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    parse_counter_list(ctx, ts, PropertyId::CounterIncrement, 1)
}

pub(crate) fn parse_counter_reset(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    parse_counter_list(ctx, ts, PropertyId::CounterReset, 0)
}

pub(crate) fn parse_quotes(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let first = *ts.peek().ok_or(Error::Invalid)?;

    if first.kind == TokenKind::Ident && first.lower == ctx.word("inherit") {
        ts.next();
        let flags = parse_important(ctx, ts)? | PropFlags::INHERIT;
        return opv_only(PropertyId::Quotes, flags, 0);
    }
    if first.kind == TokenKind::Ident && first.lower == ctx.word("none") {
        ts.next();
        let flags = parse_important(ctx, ts)?;
        return opv_only(PropertyId::Quotes, flags, QUOTES_NONE);
    }

    let mut pairs: SmallVec<[(StringHandle, StringHandle); 2]> = SmallVec::new();
    loop {
        ts.consume_whitespace();
        match ts.peek() {
            None => break,
            Some(t) if t.is_char('!') => break,
            _ => {}
        }

        let open = *ts.next().ok_or(Error::Invalid)?;
        if open.kind != TokenKind::String {
            return Err(Error::Invalid);
        }
        ts.consume_whitespace();
        let close = *ts.next().ok_or(Error::Invalid)?;
        if close.kind != TokenKind::String {
            return Err(Error::Invalid);
        }
        pairs.push((open.data, close.data));
    }

    if pairs.is_empty() {
        return Err(Error::Invalid);
    }

    let flags = parse_important(ctx, ts)?;

    let size = OPV_SIZE
        + pairs.len() * 2 * HANDLE_SIZE
        + (pairs.len() - 1) * WORD_SIZE
        + WORD_SIZE;
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::Quotes, flags, QUOTES_STRING));
    for (i, (open, close)) in pairs.iter().enumerate() {
        if i > 0 {
            style.push_word(u32::from(QUOTES_STRING));
        }
        style.push_string(ctx.interner, *open);
        style.push_string(ctx.interner, *close);
    }
    style.push_word(u32::from(QUOTES_NONE));
    Ok(style)
}

pub(crate) fn parse_border_spacing(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        let flags = parse_important(ctx, ts)? | PropFlags::INHERIT;
        return opv_only(PropertyId::BorderSpacing, flags, 0);
    }

    let (horz, horz_unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
    if !length_units(horz_unit) || horz.is_negative() {
        return Err(Error::Invalid);
    }

    let mark = ts.pos();
    ts.consume_whitespace();
    let (vert, vert_unit) = match ts.peek() {
        Some(t) if matches!(t.kind, TokenKind::Number | TokenKind::Dimension) => {
            let (vert, vert_unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
            if !length_units(vert_unit) || vert.is_negative() {
                return Err(Error::Invalid);
            }
            (vert, vert_unit)
        }
        _ => {
            ts.seek(mark);
            (horz, horz_unit)
        }
    };

    let flags = parse_important(ctx, ts)?;

    let mut style = Style::with_capacity(OPV_SIZE + 2 * (FIXED_SIZE + UNIT_SIZE))?;
    style.push_opv(Opv::new(PropertyId::BorderSpacing, flags, LENGTH_SET));
    style.push_fixed(horz);
    style.push_unit(horz_unit);
    style.push_fixed(vert);
    style.push_unit(vert_unit);
    Ok(style)
}

/// One background-position component.
#[derive(Clone, Copy)]
enum PositionComponent {
    Horizontal(u16),
    Vertical(u16),
    Center,
    Length(Fixed, UnitMask),
}

fn parse_position_component(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<PositionComponent> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    if token.kind == TokenKind::Ident {
        let comp = if token.lower == ctx.word("left") {
            PositionComponent::Horizontal(BACKGROUND_POSITION_MIN)
        } else if token.lower == ctx.word("right") {
            PositionComponent::Horizontal(BACKGROUND_POSITION_MAX)
        } else if token.lower == ctx.word("top") {
            PositionComponent::Vertical(BACKGROUND_POSITION_MIN)
        } else if token.lower == ctx.word("bottom") {
            PositionComponent::Vertical(BACKGROUND_POSITION_MAX)
        } else if token.lower == ctx.word("center") {
            PositionComponent::Center
        } else {
            return Err(Error::Invalid);
        };
        ts.next();
        return Ok(comp);
    }

    let (length, unit) = parse_unit_specifier(ctx, ts, UnitMask::PX)?;
    if !length_pct_units(unit) {
        return Err(Error::Invalid);
    }
    Ok(PositionComponent::Length(length, unit))
}

pub(crate) fn parse_background_position(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        let flags = parse_important(ctx, ts)? | PropFlags::INHERIT;
        return opv_only(PropertyId::BackgroundPosition, flags, 0);
    }

    let mut first = parse_position_component(ctx, ts)?;

    let mark = ts.pos();
    ts.consume_whitespace();
    let mut second = match ts.peek() {
        Some(t)
            if matches!(
                t.kind,
                TokenKind::Ident
                    | TokenKind::Number
                    | TokenKind::Dimension
                    | TokenKind::Percentage
            ) =>
        {
            match parse_position_component(ctx, ts) {
                Ok(comp) => Some(comp),
                Err(_) => {
                    ts.seek(mark);
                    None
                }
            }
        }
        _ => {
            ts.seek(mark);
            None
        }
    };

    // Keyword pairs may come in either order; a vertical keyword first is
    // only valid when the other component can take the horizontal role.
    if matches!(first, PositionComponent::Vertical(_)) {
        if let Some(s @ (PositionComponent::Horizontal(_) | PositionComponent::Center)) = second {
            second = Some(first);
            first = s;
        }
    }

    let (horz_value, horz_payload) = match first {
        PositionComponent::Horizontal(v) => (v, None),
        PositionComponent::Center => (BACKGROUND_POSITION_CENTER, None),
        PositionComponent::Length(l, u) => (BACKGROUND_POSITION_SET, Some((l, u))),
        PositionComponent::Vertical(v) => {
            // A lone vertical keyword centers the horizontal axis.
            if second.is_some() {
                return Err(Error::Invalid);
            }
            second = Some(PositionComponent::Vertical(v));
            (BACKGROUND_POSITION_CENTER, None)
        }
    };

    let (vert_value, vert_payload) = match second {
        None | Some(PositionComponent::Center) => (BACKGROUND_POSITION_CENTER, None),
        Some(PositionComponent::Vertical(v)) => (v, None),
        Some(PositionComponent::Length(l, u)) => (BACKGROUND_POSITION_SET, Some((l, u))),
        Some(PositionComponent::Horizontal(_)) => return Err(Error::Invalid),
    };

    let flags = parse_important(ctx, ts)?;

    let value = (horz_value << BACKGROUND_POSITION_HORZ_SHIFT) | vert_value;
    let payload_count = horz_payload.iter().len() + vert_payload.iter().len();
    let mut style =
        Style::with_capacity(OPV_SIZE + payload_count * (FIXED_SIZE + UNIT_SIZE))?;
    style.push_opv(Opv::new(PropertyId::BackgroundPosition, flags, value));
    for (length, unit) in horz_payload.into_iter().chain(vert_payload) {
        style.push_fixed(length);
        style.push_unit(unit);
    }
    Ok(style)
}

pub(crate) fn parse_play_during(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.next().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = PLAY_DURING_URI;
    let mut uri = None;

    match token.kind {
        TokenKind::Ident if token.lower == ctx.word("inherit") => flags |= PropFlags::INHERIT,
        TokenKind::Ident if token.lower == ctx.word("auto") => value = PLAY_DURING_AUTO,
        TokenKind::Ident if token.lower == ctx.word("none") => value = PLAY_DURING_NONE,
        TokenKind::Uri => {
            uri = Some(token.data);
            loop {
                let mark = ts.pos();
                ts.consume_whitespace();
                match ts.peek() {
                    Some(t) if t.kind == TokenKind::Ident && t.lower == ctx.word("mix") => {
                        if value & PLAY_DURING_MIX != 0 {
                            return Err(Error::Invalid);
                        }
                        value |= PLAY_DURING_MIX;
                        ts.next();
                    }
                    Some(t) if t.kind == TokenKind::Ident && t.lower == ctx.word("repeat") => {
                        if value & PLAY_DURING_REPEAT != 0 {
                            return Err(Error::Invalid);
                        }
                        value |= PLAY_DURING_REPEAT;
                        ts.next();
                    }
                    _ => {
                        ts.seek(mark);
                        break;
                    }
                }
            }
        }
        _ => return Err(Error::Invalid),
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE + if uri.is_some() { HANDLE_SIZE } else { 0 };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::PlayDuring, flags, value));
    if let Some(handle) = uri {
        style.push_string(ctx.interner, handle);
    }
    Ok(style)
}

pub(crate) fn parse_azimuth(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = AZIMUTH_ANGLE_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("leftwards") {
        ts.next();
        value = AZIMUTH_LEFTWARDS;
    } else if token.kind == TokenKind::Ident && token.lower == ctx.word("rightwards") {
        ts.next();
        value = AZIMUTH_RIGHTWARDS;
    } else if token.kind == TokenKind::Ident {
        let mut direction = None;
        let mut behind = false;

        if token.lower == ctx.word("behind") {
            behind = true;
            ts.next();
        } else if let Some(v) = lookup_keyword(ctx, &token, AZIMUTH_DIRECTION_KEYWORDS) {
            direction = Some(v);
            ts.next();
        } else {
            return Err(Error::Invalid);
        }

        // The other half of the pair, in either order.
        let mark = ts.pos();
        ts.consume_whitespace();
        match ts.peek() {
            Some(t) if t.kind == TokenKind::Ident && !behind && t.lower == ctx.word("behind") => {
                behind = true;
                ts.next();
            }
            Some(t)
                if t.kind == TokenKind::Ident
                    && direction.is_none()
                    && lookup_keyword(ctx, t, AZIMUTH_DIRECTION_KEYWORDS).is_some() =>
            {
                direction = lookup_keyword(ctx, t, AZIMUTH_DIRECTION_KEYWORDS);
                ts.next();
            }
            _ => ts.seek(mark),
        }

        // `behind` alone means centered behind.
        value = direction.unwrap_or(AZIMUTH_CENTER);
        if behind {
            value |= AZIMUTH_BEHIND;
        }
    } else {
        let (angle, unit) = parse_unit_specifier(ctx, ts, UnitMask::DEG)?;
        if !unit.is_angle() {
            return Err(Error::Invalid);
        }
        payload = Some((angle, unit));
    }

    flags |= parse_important(ctx, ts)?;
    opv_length(PropertyId::Azimuth, flags, value, payload)
}

static ELEVATION_KEYWORDS: &[(&str, u16)] = &[
    ("below", ELEVATION_BELOW),
    ("level", ELEVATION_LEVEL),
    ("above", ELEVATION_ABOVE),
    ("higher", ELEVATION_HIGHER),
    ("lower", ELEVATION_LOWER),
];

pub(crate) fn parse_elevation(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = ELEVATION_ANGLE_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident
        && let Some(v) = lookup_keyword(ctx, &token, ELEVATION_KEYWORDS)
    {
        ts.next();
        value = v;
    } else {
        let (angle, unit) = parse_unit_specifier(ctx, ts, UnitMask::DEG)?;
        if !unit.is_angle() {
            return Err(Error::Invalid);
        }
        payload = Some((angle, unit));
    }

    flags |= parse_important(ctx, ts)?;
    opv_length(PropertyId::Elevation, flags, value, payload)
}

static PITCH_KEYWORDS: &[(&str, u16)] = &[
    ("x-low", PITCH_X_LOW),
    ("low", PITCH_LOW),
    ("medium", PITCH_MEDIUM),
    ("high", PITCH_HIGH),
    ("x-high", PITCH_X_HIGH),
];

pub(crate) fn parse_pitch(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = PITCH_FREQUENCY_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident
        && let Some(v) = lookup_keyword(ctx, &token, PITCH_KEYWORDS)
    {
        ts.next();
        value = v;
    } else {
        let (freq, unit) = parse_unit_specifier(ctx, ts, UnitMask::HZ)?;
        if !unit.is_frequency() || freq.is_negative() {
            return Err(Error::Invalid);
        }
        payload = Some((freq, unit));
    }

    flags |= parse_important(ctx, ts)?;
    opv_length(PropertyId::Pitch, flags, value, payload)
}

static SPEECH_RATE_KEYWORDS: &[(&str, u16)] = &[
    ("x-slow", SPEECH_RATE_X_SLOW),
    ("slow", SPEECH_RATE_SLOW),
    ("medium", SPEECH_RATE_MEDIUM),
    ("fast", SPEECH_RATE_FAST),
    ("x-fast", SPEECH_RATE_X_FAST),
    ("faster", SPEECH_RATE_FASTER),
    ("slower", SPEECH_RATE_SLOWER),
];

pub(crate) fn parse_speech_rate(
    ctx: &ParseContext<'_>,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = SPEECH_RATE_SET;
    let mut payload = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident
        && let Some(v) = lookup_keyword(ctx, &token, SPEECH_RATE_KEYWORDS)
    {
        ts.next();
        value = v;
    } else {
        let rate = parse_number_token(ctx, ts, false)?;
        if rate.is_negative() {
            return Err(Error::Invalid);
        }
        payload = Some(rate);
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE + if payload.is_some() { FIXED_SIZE } else { 0 };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::SpeechRate, flags, value));
    if let Some(rate) = payload {
        style.push_fixed(rate);
    }
    Ok(style)
}

static VOLUME_KEYWORDS: &[(&str, u16)] = &[
    ("silent", VOLUME_SILENT),
    ("x-soft", VOLUME_X_SOFT),
    ("soft", VOLUME_SOFT),
    ("medium", VOLUME_MEDIUM),
    ("loud", VOLUME_LOUD),
    ("x-loud", VOLUME_X_LOUD),
];

pub(crate) fn parse_volume(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<Style> {
    ts.consume_whitespace();
    let token = *ts.peek().ok_or(Error::Invalid)?;

    let mut flags = PropFlags::empty();
    let mut value = VOLUME_NUMBER;
    let mut number = None;
    let mut dimension = None;

    if token.kind == TokenKind::Ident && token.lower == ctx.word("inherit") {
        ts.next();
        flags |= PropFlags::INHERIT;
    } else if token.kind == TokenKind::Ident
        && let Some(v) = lookup_keyword(ctx, &token, VOLUME_KEYWORDS)
    {
        ts.next();
        value = v;
    } else if token.kind == TokenKind::Number {
        let n = parse_number_token(ctx, ts, false)?;
        if n.is_negative() {
            return Err(Error::Invalid);
        }
        number = Some(n);
    } else if token.kind == TokenKind::Percentage {
        let (pct, unit) = parse_unit_specifier(ctx, ts, UnitMask::PCT)?;
        if pct.is_negative() {
            return Err(Error::Invalid);
        }
        value = VOLUME_DIMENSION;
        dimension = Some((pct, unit));
    } else {
        return Err(Error::Invalid);
    }

    flags |= parse_important(ctx, ts)?;

    let size = OPV_SIZE
        + if number.is_some() {
            FIXED_SIZE
        } else if dimension.is_some() {
            FIXED_SIZE + UNIT_SIZE
        } else {
            0
        };
    let mut style = Style::with_capacity(size)?;
    style.push_opv(Opv::new(PropertyId::Volume, flags, value));
    if let Some(n) = number {
        style.push_fixed(n);
    }
    if let Some((pct, unit)) = dimension {
        style.push_fixed(pct);
        style.push_unit(unit);
    }
    Ok(style)
}
