//! Declaration parsing.
//!
//! One parser per longhand property, each translating a restricted token
//! sequence into a bytecode entry in a freshly allocated [`Style`] buffer.
//! Dispatch is a flat table indexed by property id; the property ordering is
//! part of the stable ABI.

mod lists;
pub(crate) mod properties;
pub(crate) mod values;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::bytecode::{PropFlags, PropertyId, Style};
use crate::error::{Error, Result};
use crate::intern::{Interner, StringHandle};
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::values::{self as v, Color};

/// Words the parsers need beyond the keyword-enum tables.
static EXTRA_WORDS: &[&str] = &[
    "inherit",
    "important",
    "auto",
    "none",
    "normal",
    "rect",
    "rgb",
    "serif",
    "sans-serif",
    "cursive",
    "fantasy",
    "monospace",
    "male",
    "female",
    "child",
    "thin",
    "medium",
    "thick",
    "transparent",
    "invert",
    "underline",
    "overline",
    "line-through",
    "blink",
    "counter",
    "counters",
    "attr",
    "open-quote",
    "close-quote",
    "no-open-quote",
    "no-close-quote",
    "left",
    "right",
    "top",
    "bottom",
    "center",
    "mix",
    "repeat",
    "leftwards",
    "rightwards",
    "behind",
    "below",
    "level",
    "above",
    "higher",
    "lower",
    "x-low",
    "low",
    "high",
    "x-high",
    "x-slow",
    "slow",
    "fast",
    "x-fast",
    "faster",
    "slower",
    "silent",
    "x-soft",
    "soft",
    "loud",
    "x-loud",
    "bold",
    "bolder",
    "lighter",
    "xx-small",
    "x-small",
    "small",
    "large",
    "x-large",
    "xx-large",
    "larger",
    "smaller",
    "baseline",
    "sub",
    "super",
    "text-top",
    "text-bottom",
    "middle",
];

/// CSS 2.1 named colours.
static NAMED_COLORS: &[(&str, Color)] = &[
    ("aqua", Color::rgb(0x00, 0xff, 0xff)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xff)),
    ("fuchsia", Color::rgb(0xff, 0x00, 0xff)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("lime", Color::rgb(0x00, 0xff, 0x00)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("orange", Color::rgb(0xff, 0xa5, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("red", Color::rgb(0xff, 0x00, 0x00)),
    ("silver", Color::rgb(0xc0, 0xc0, 0xc0)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("yellow", Color::rgb(0xff, 0xff, 0x00)),
];

/// Pre-interned well-known words.
///
/// Keyword matching throughout the parsers is handle identity against this
/// table: tokens arrive with a lowercase canonicalization, so one integer
/// compare decides a match.
pub struct KeywordTable {
    words: HashMap<&'static str, StringHandle>,
    colors: HashMap<StringHandle, Color>,
}

impl KeywordTable {
    fn new(interner: &Interner) -> Result<KeywordTable> {
        let mut table = KeywordTable {
            words: HashMap::new(),
            colors: HashMap::new(),
        };

        let enum_tables: &[&[(&str, u16)]] = &[
            v::BACKGROUND_ATTACHMENT_KEYWORDS,
            v::BACKGROUND_REPEAT_KEYWORDS,
            v::BORDER_COLLAPSE_KEYWORDS,
            v::BORDER_STYLE_KEYWORDS,
            v::OUTLINE_STYLE_KEYWORDS,
            v::CAPTION_SIDE_KEYWORDS,
            v::CLEAR_KEYWORDS,
            v::DIRECTION_KEYWORDS,
            v::DISPLAY_KEYWORDS,
            v::EMPTY_CELLS_KEYWORDS,
            v::FLOAT_KEYWORDS,
            v::FONT_STYLE_KEYWORDS,
            v::FONT_VARIANT_KEYWORDS,
            v::LIST_STYLE_POSITION_KEYWORDS,
            v::LIST_STYLE_TYPE_KEYWORDS,
            v::OVERFLOW_KEYWORDS,
            v::PAGE_BREAK_KEYWORDS,
            v::PAGE_BREAK_INSIDE_KEYWORDS,
            v::POSITION_KEYWORDS,
            v::SPEAK_KEYWORDS,
            v::SPEAK_HEADER_KEYWORDS,
            v::SPEAK_NUMERAL_KEYWORDS,
            v::SPEAK_PUNCTUATION_KEYWORDS,
            v::TABLE_LAYOUT_KEYWORDS,
            v::TEXT_ALIGN_KEYWORDS,
            v::TEXT_TRANSFORM_KEYWORDS,
            v::UNICODE_BIDI_KEYWORDS,
            v::VISIBILITY_KEYWORDS,
            v::WHITE_SPACE_KEYWORDS,
            v::CURSOR_KEYWORDS,
            v::AZIMUTH_DIRECTION_KEYWORDS,
        ];

        for list in enum_tables {
            for &(word, _) in *list {
                table.add(interner, word)?;
            }
        }
        for &word in EXTRA_WORDS {
            table.add(interner, word)?;
        }
        for &(name, color) in NAMED_COLORS {
            let handle = table.add(interner, name)?;
            table
                .colors
                .try_reserve(1)
                .map_err(|_| Error::NoMemory)?;
            table.colors.insert(handle, color);
        }

        Ok(table)
    }

    fn add(&mut self, interner: &Interner, word: &'static str) -> Result<StringHandle> {
        if let Some(&handle) = self.words.get(word) {
            return Ok(handle);
        }
        let handle = interner.intern(word)?;
        self.words.try_reserve(1).map_err(|_| Error::NoMemory)?;
        self.words.insert(word, handle);
        Ok(handle)
    }

    /// Handle of a well-known word. Unknown words yield a handle that never
    /// matches, so a missed table entry fails closed.
    pub fn word(&self, word: &str) -> StringHandle {
        self.words
            .get(word)
            .copied()
            .unwrap_or(StringHandle::INVALID)
    }

    /// Look up a named colour by its lowercase handle.
    pub fn color(&self, lower: StringHandle) -> Option<Color> {
        self.colors.get(&lower).copied()
    }
}

/// Per-stylesheet parsing context.
pub struct ParseContext<'i> {
    pub interner: &'i Interner,
    pub keywords: KeywordTable,
}

impl<'i> ParseContext<'i> {
    pub fn new(interner: &'i Interner) -> Result<ParseContext<'i>> {
        Ok(ParseContext {
            keywords: KeywordTable::new(interner)?,
            interner,
        })
    }

    pub(crate) fn word(&self, word: &str) -> StringHandle {
        self.keywords.word(word)
    }
}

/// Property parser signature. Parsers consume exactly the tokens of one
/// declaration value and return the compiled style buffer.
pub type PropertyParser =
    for<'a, 'b, 'c, 'd> fn(&'a ParseContext<'b>, &'c mut TokenStream<'d>) -> Result<Style>;

/// Dispatch table, indexed by property id.
static PARSERS: [PropertyParser; PropertyId::COUNT] = [
    properties::parse_azimuth,
    properties::parse_background_attachment,
    properties::parse_background_color,
    properties::parse_background_image,
    properties::parse_background_position,
    properties::parse_background_repeat,
    properties::parse_border_bottom_color,
    properties::parse_border_bottom_style,
    properties::parse_border_bottom_width,
    properties::parse_border_collapse,
    properties::parse_border_left_color,
    properties::parse_border_left_style,
    properties::parse_border_left_width,
    properties::parse_border_right_color,
    properties::parse_border_right_style,
    properties::parse_border_right_width,
    properties::parse_border_spacing,
    properties::parse_border_top_color,
    properties::parse_border_top_style,
    properties::parse_border_top_width,
    properties::parse_bottom,
    properties::parse_caption_side,
    properties::parse_clear,
    properties::parse_clip,
    properties::parse_color,
    properties::parse_content,
    properties::parse_counter_increment,
    properties::parse_counter_reset,
    properties::parse_cue_after,
    properties::parse_cue_before,
    properties::parse_cursor,
    properties::parse_direction,
    properties::parse_display,
    properties::parse_elevation,
    properties::parse_empty_cells,
    properties::parse_float,
    properties::parse_font_family,
    properties::parse_font_size,
    properties::parse_font_style,
    properties::parse_font_variant,
    properties::parse_font_weight,
    properties::parse_height,
    properties::parse_left,
    properties::parse_letter_spacing,
    properties::parse_line_height,
    properties::parse_list_style_image,
    properties::parse_list_style_position,
    properties::parse_list_style_type,
    properties::parse_margin_bottom,
    properties::parse_margin_left,
    properties::parse_margin_right,
    properties::parse_margin_top,
    properties::parse_max_height,
    properties::parse_max_width,
    properties::parse_min_height,
    properties::parse_min_width,
    properties::parse_orphans,
    properties::parse_outline_color,
    properties::parse_outline_style,
    properties::parse_outline_width,
    properties::parse_overflow,
    properties::parse_padding_bottom,
    properties::parse_padding_left,
    properties::parse_padding_right,
    properties::parse_padding_top,
    properties::parse_page_break_after,
    properties::parse_page_break_before,
    properties::parse_page_break_inside,
    properties::parse_pause_after,
    properties::parse_pause_before,
    properties::parse_pitch_range,
    properties::parse_pitch,
    properties::parse_play_during,
    properties::parse_position,
    properties::parse_quotes,
    properties::parse_richness,
    properties::parse_right,
    properties::parse_speak_header,
    properties::parse_speak_numeral,
    properties::parse_speak_punctuation,
    properties::parse_speak,
    properties::parse_speech_rate,
    properties::parse_stress,
    properties::parse_table_layout,
    properties::parse_text_align,
    properties::parse_text_decoration,
    properties::parse_text_indent,
    properties::parse_text_transform,
    properties::parse_top,
    properties::parse_unicode_bidi,
    properties::parse_vertical_align,
    properties::parse_visibility,
    properties::parse_voice_family,
    properties::parse_volume,
    properties::parse_white_space,
    properties::parse_widows,
    properties::parse_width,
    properties::parse_word_spacing,
    properties::parse_z_index,
];

/// Parse one property value from the stream.
///
/// On success the cursor has advanced past exactly the consumed tokens; on
/// any failure it is restored to its entry position and no style is produced.
pub fn parse_property(
    ctx: &ParseContext<'_>,
    prop: PropertyId,
    ts: &mut TokenStream<'_>,
) -> Result<Style> {
    let entry = ts.pos();
    match PARSERS[prop as usize](ctx, ts) {
        Ok(style) => {
            log::trace!("parsed {prop:?}: {} bytecode octets", style.len());
            Ok(style)
        }
        Err(e) => {
            log::debug!("dropped {prop:?} declaration: {e}");
            ts.seek(entry);
            Err(e)
        }
    }
}

/// Parse a complete declaration value: the whole token slice must be
/// consumed, trailing whitespace aside.
pub fn parse_declaration(
    ctx: &ParseContext<'_>,
    prop: PropertyId,
    tokens: &[Token],
) -> Result<Style> {
    let mut ts = TokenStream::new(tokens);
    ts.consume_whitespace();
    let style = parse_property(ctx, prop, &mut ts)?;
    ts.consume_whitespace();
    if !ts.is_exhausted() {
        crate::cascade::destroy_style(style, ctx.interner)?;
        return Err(Error::Invalid);
    }
    Ok(style)
}

/// Consume an optional `!important` suffix.
///
/// Returns the importance flag to merge into the OPV. Anything other than a
/// well-formed `! important` after the `!` is a hard parse failure.
pub(crate) fn parse_important(ctx: &ParseContext<'_>, ts: &mut TokenStream<'_>) -> Result<PropFlags> {
    ts.consume_whitespace();
    let mark = ts.pos();
    match ts.next() {
        Some(t) if t.is_char('!') => {
            ts.consume_whitespace();
            match ts.next() {
                Some(t) if t.kind == TokenKind::Ident && t.lower == ctx.word("important") => {
                    Ok(PropFlags::IMPORTANT)
                }
                _ => Err(Error::Invalid),
            }
        }
        Some(_) => {
            ts.seek(mark);
            Ok(PropFlags::empty())
        }
        None => Ok(PropFlags::empty()),
    }
}
