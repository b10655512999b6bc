//! Property value vocabulary.
//!
//! This module is the single source of truth for the property-local value
//! constants stored in OPV value fields and list value words, the
//! keyword-to-value tables the parsers match against, and the typed computed
//! values the cascade writes. Parser and cascade both import from here, so a
//! value written on one side is always decoded with the same meaning on the
//! other.

use bitflags::bitflags;

use crate::bytecode::CssUnit;
use crate::fixed::Fixed;
use crate::intern::{Interner, StringHandle};

/// Define a keyword-valued computed enum together with its parser table.
///
/// In the manner of lightningcss-style `enum_property!` macros: one
/// declaration yields the computed enum (with an `Inherit` variant), the
/// keyword table used by the parser, and the bytecode decoder used by the
/// cascade.
macro_rules! enum_value {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $table:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $css:literal = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            /// Value is taken from the parent element.
            #[default]
            Inherit,
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        /// Keyword-to-bytecode table.
        pub static $table: &[(&str, u16)] = &[$(($css, $value)),*];

        impl $name {
            /// Decode a bytecode value field.
            pub fn from_value(value: u16) -> Option<Self> {
                match value {
                    $(v if v == $value => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

// ============================================================================
// Shared value-field constants
// ============================================================================

/// Length-or-keyword properties: the keyword slot (`auto`, `normal`, `none`,
/// or absent) is 0; a fixed-point length plus unit mask follows when SET.
pub const LENGTH_KEYWORD: u16 = 0x0;
pub const LENGTH_SET: u16 = 0x1;

/// Colour-valued properties.
pub const COLOR_TRANSPARENT: u16 = 0x0;
pub const COLOR_SET: u16 = 0x1;
pub const OUTLINE_COLOR_INVERT: u16 = 0x2;

/// URI-or-`none` properties.
pub const URI_NONE: u16 = 0x0;
pub const URI_SET: u16 = 0x1;

/// Bare-number properties (orphans, widows, pitch-range, richness, stress).
pub const NUMBER_SET: u16 = 0x1;

/// z-index.
pub const Z_INDEX_AUTO: u16 = 0x0;
pub const Z_INDEX_SET: u16 = 0x1;

/// Border and outline widths.
pub const BORDER_WIDTH_THIN: u16 = 0x0;
pub const BORDER_WIDTH_MEDIUM: u16 = 0x1;
pub const BORDER_WIDTH_THICK: u16 = 0x2;
pub const BORDER_WIDTH_SET: u16 = 0x3;

// clip: `auto` or a rect() shape. The per-side auto slots live in bits 3..6
// of the value; lengths for non-auto sides follow in source order.
pub const CLIP_AUTO: u16 = 0x0;
pub const CLIP_SHAPE_RECT: u16 = 0x1;
pub const CLIP_SHAPE_MASK: u16 = 0x7;
pub const CLIP_RECT_TOP_AUTO: u16 = 1 << 3;
pub const CLIP_RECT_RIGHT_AUTO: u16 = 1 << 4;
pub const CLIP_RECT_BOTTOM_AUTO: u16 = 1 << 5;
pub const CLIP_RECT_LEFT_AUTO: u16 = 1 << 6;

// vertical-align
pub const VERTICAL_ALIGN_SET: u16 = 0x0;
pub const VERTICAL_ALIGN_BASELINE: u16 = 0x1;
pub const VERTICAL_ALIGN_SUB: u16 = 0x2;
pub const VERTICAL_ALIGN_SUPER: u16 = 0x3;
pub const VERTICAL_ALIGN_TOP: u16 = 0x4;
pub const VERTICAL_ALIGN_TEXT_TOP: u16 = 0x5;
pub const VERTICAL_ALIGN_MIDDLE: u16 = 0x6;
pub const VERTICAL_ALIGN_BOTTOM: u16 = 0x7;
pub const VERTICAL_ALIGN_TEXT_BOTTOM: u16 = 0x8;

// line-height
pub const LINE_HEIGHT_NORMAL: u16 = 0x0;
pub const LINE_HEIGHT_NUMBER: u16 = 0x1;
pub const LINE_HEIGHT_DIMENSION: u16 = 0x2;

// font-size
pub const FONT_SIZE_SET: u16 = 0x0;
pub const FONT_SIZE_XX_SMALL: u16 = 0x1;
pub const FONT_SIZE_X_SMALL: u16 = 0x2;
pub const FONT_SIZE_SMALL: u16 = 0x3;
pub const FONT_SIZE_MEDIUM: u16 = 0x4;
pub const FONT_SIZE_LARGE: u16 = 0x5;
pub const FONT_SIZE_X_LARGE: u16 = 0x6;
pub const FONT_SIZE_XX_LARGE: u16 = 0x7;
pub const FONT_SIZE_LARGER: u16 = 0x8;
pub const FONT_SIZE_SMALLER: u16 = 0x9;

// font-weight
pub const FONT_WEIGHT_NORMAL: u16 = 0x0;
pub const FONT_WEIGHT_BOLD: u16 = 0x1;
pub const FONT_WEIGHT_BOLDER: u16 = 0x2;
pub const FONT_WEIGHT_LIGHTER: u16 = 0x3;
pub const FONT_WEIGHT_100: u16 = 0x4;
pub const FONT_WEIGHT_200: u16 = 0x5;
pub const FONT_WEIGHT_300: u16 = 0x6;
pub const FONT_WEIGHT_400: u16 = 0x7;
pub const FONT_WEIGHT_500: u16 = 0x8;
pub const FONT_WEIGHT_600: u16 = 0x9;
pub const FONT_WEIGHT_700: u16 = 0xa;
pub const FONT_WEIGHT_800: u16 = 0xb;
pub const FONT_WEIGHT_900: u16 = 0xc;

// text-decoration: a flag set; duplicates are rejected at parse time.
pub const TEXT_DECORATION_NONE: u16 = 0x0;
pub const TEXT_DECORATION_UNDERLINE: u16 = 1 << 0;
pub const TEXT_DECORATION_OVERLINE: u16 = 1 << 1;
pub const TEXT_DECORATION_LINE_THROUGH: u16 = 1 << 2;
pub const TEXT_DECORATION_BLINK: u16 = 1 << 3;

// font-family list items. FONT_FAMILY_END terminates the list.
pub const FONT_FAMILY_END: u16 = 0x0;
pub const FONT_FAMILY_STRING: u16 = 0x1;
pub const FONT_FAMILY_IDENT_LIST: u16 = 0x2;
pub const FONT_FAMILY_SERIF: u16 = 0x3;
pub const FONT_FAMILY_SANS_SERIF: u16 = 0x4;
pub const FONT_FAMILY_CURSIVE: u16 = 0x5;
pub const FONT_FAMILY_FANTASY: u16 = 0x6;
pub const FONT_FAMILY_MONOSPACE: u16 = 0x7;

// voice-family list items. VOICE_FAMILY_END terminates the list.
pub const VOICE_FAMILY_END: u16 = 0x0;
pub const VOICE_FAMILY_STRING: u16 = 0x1;
pub const VOICE_FAMILY_IDENT_LIST: u16 = 0x2;
pub const VOICE_FAMILY_MALE: u16 = 0x3;
pub const VOICE_FAMILY_FEMALE: u16 = 0x4;
pub const VOICE_FAMILY_CHILD: u16 = 0x5;

// cursor: zero or more URIs, then a terminating keyword.
pub const CURSOR_URI: u16 = 0x0;

/// Cursor keyword table; values continue after [`CURSOR_URI`].
pub static CURSOR_KEYWORDS: &[(&str, u16)] = &[
    ("auto", 0x1),
    ("crosshair", 0x2),
    ("default", 0x3),
    ("pointer", 0x4),
    ("move", 0x5),
    ("e-resize", 0x6),
    ("ne-resize", 0x7),
    ("nw-resize", 0x8),
    ("n-resize", 0x9),
    ("se-resize", 0xa),
    ("sw-resize", 0xb),
    ("s-resize", 0xc),
    ("w-resize", 0xd),
    ("text", 0xe),
    ("wait", 0xf),
    ("help", 0x10),
    ("progress", 0x11),
];

// content: item kind in the low byte of each value word; for counter items
// the list style rides in the high bits. CONTENT_NONE terminates the list.
pub const CONTENT_NORMAL: u16 = 0x0;
pub const CONTENT_NONE: u16 = 0x1;
pub const CONTENT_STRING: u16 = 0x2;
pub const CONTENT_URI: u16 = 0x3;
pub const CONTENT_ATTR: u16 = 0x4;
pub const CONTENT_COUNTER: u16 = 0x5;
pub const CONTENT_COUNTERS: u16 = 0x6;
pub const CONTENT_OPEN_QUOTE: u16 = 0x7;
pub const CONTENT_CLOSE_QUOTE: u16 = 0x8;
pub const CONTENT_NO_OPEN_QUOTE: u16 = 0x9;
pub const CONTENT_NO_CLOSE_QUOTE: u16 = 0xa;
pub const CONTENT_KIND_MASK: u16 = 0xff;
pub const CONTENT_COUNTER_STYLE_SHIFT: u16 = 8;

// counter-increment / counter-reset: items are handle + fixed pairs chained
// by COUNTER_NAMED words; COUNTER_NONE terminates the list.
pub const COUNTER_NONE: u16 = 0x0;
pub const COUNTER_NAMED: u16 = 0x1;

// quotes: open/close handle pairs chained by QUOTES_STRING words;
// QUOTES_NONE terminates the list.
pub const QUOTES_NONE: u16 = 0x0;
pub const QUOTES_STRING: u16 = 0x1;

// background-position: horizontal nibble in bits 4..7, vertical in bits 0..3.
// SET slots contribute a length + unit each, horizontal first.
pub const BACKGROUND_POSITION_SET: u16 = 0x0;
pub const BACKGROUND_POSITION_CENTER: u16 = 0x1;
/// left (horizontal) or top (vertical)
pub const BACKGROUND_POSITION_MIN: u16 = 0x2;
/// right (horizontal) or bottom (vertical)
pub const BACKGROUND_POSITION_MAX: u16 = 0x3;
pub const BACKGROUND_POSITION_HORZ_SHIFT: u16 = 4;
pub const BACKGROUND_POSITION_AXIS_MASK: u16 = 0xf;

// play-during
pub const PLAY_DURING_URI: u16 = 0x0;
pub const PLAY_DURING_AUTO: u16 = 0x1;
pub const PLAY_DURING_NONE: u16 = 0x2;
pub const PLAY_DURING_TYPE_MASK: u16 = 0x3;
pub const PLAY_DURING_MIX: u16 = 1 << 2;
pub const PLAY_DURING_REPEAT: u16 = 1 << 3;

// azimuth: an angle, a lateral keyword, or a direction keyword optionally
// combined with `behind` (bit 6).
pub const AZIMUTH_ANGLE_SET: u16 = 0x0;
pub const AZIMUTH_LEFTWARDS: u16 = 0x1;
pub const AZIMUTH_RIGHTWARDS: u16 = 0x2;
pub const AZIMUTH_LEFT_SIDE: u16 = 0x3;
pub const AZIMUTH_FAR_LEFT: u16 = 0x4;
pub const AZIMUTH_LEFT: u16 = 0x5;
pub const AZIMUTH_CENTER_LEFT: u16 = 0x6;
pub const AZIMUTH_CENTER: u16 = 0x7;
pub const AZIMUTH_CENTER_RIGHT: u16 = 0x8;
pub const AZIMUTH_RIGHT: u16 = 0x9;
pub const AZIMUTH_FAR_RIGHT: u16 = 0xa;
pub const AZIMUTH_RIGHT_SIDE: u16 = 0xb;
pub const AZIMUTH_BEHIND: u16 = 1 << 6;
pub const AZIMUTH_DIRECTION_MASK: u16 = 0x3f;

/// Azimuth direction keyword table (the `behind`-combinable subset).
pub static AZIMUTH_DIRECTION_KEYWORDS: &[(&str, u16)] = &[
    ("left-side", AZIMUTH_LEFT_SIDE),
    ("far-left", AZIMUTH_FAR_LEFT),
    ("left", AZIMUTH_LEFT),
    ("center-left", AZIMUTH_CENTER_LEFT),
    ("center", AZIMUTH_CENTER),
    ("center-right", AZIMUTH_CENTER_RIGHT),
    ("right", AZIMUTH_RIGHT),
    ("far-right", AZIMUTH_FAR_RIGHT),
    ("right-side", AZIMUTH_RIGHT_SIDE),
];

// elevation
pub const ELEVATION_ANGLE_SET: u16 = 0x0;
pub const ELEVATION_BELOW: u16 = 0x1;
pub const ELEVATION_LEVEL: u16 = 0x2;
pub const ELEVATION_ABOVE: u16 = 0x3;
pub const ELEVATION_HIGHER: u16 = 0x4;
pub const ELEVATION_LOWER: u16 = 0x5;

// pitch
pub const PITCH_FREQUENCY_SET: u16 = 0x0;
pub const PITCH_X_LOW: u16 = 0x1;
pub const PITCH_LOW: u16 = 0x2;
pub const PITCH_MEDIUM: u16 = 0x3;
pub const PITCH_HIGH: u16 = 0x4;
pub const PITCH_X_HIGH: u16 = 0x5;

// speech-rate
pub const SPEECH_RATE_SET: u16 = 0x0;
pub const SPEECH_RATE_X_SLOW: u16 = 0x1;
pub const SPEECH_RATE_SLOW: u16 = 0x2;
pub const SPEECH_RATE_MEDIUM: u16 = 0x3;
pub const SPEECH_RATE_FAST: u16 = 0x4;
pub const SPEECH_RATE_X_FAST: u16 = 0x5;
pub const SPEECH_RATE_FASTER: u16 = 0x6;
pub const SPEECH_RATE_SLOWER: u16 = 0x7;

// volume
pub const VOLUME_NUMBER: u16 = 0x0;
pub const VOLUME_DIMENSION: u16 = 0x1;
pub const VOLUME_SILENT: u16 = 0x2;
pub const VOLUME_X_SOFT: u16 = 0x3;
pub const VOLUME_SOFT: u16 = 0x4;
pub const VOLUME_MEDIUM: u16 = 0x5;
pub const VOLUME_LOUD: u16 = 0x6;
pub const VOLUME_X_LOUD: u16 = 0x7;

// ============================================================================
// Keyword-valued computed enums
// ============================================================================

enum_value! {
    pub enum BackgroundAttachment : BACKGROUND_ATTACHMENT_KEYWORDS {
        Fixed => "fixed" = 0x0,
        Scroll => "scroll" = 0x1,
    }
}

enum_value! {
    pub enum BackgroundRepeat : BACKGROUND_REPEAT_KEYWORDS {
        NoRepeat => "no-repeat" = 0x0,
        RepeatX => "repeat-x" = 0x1,
        RepeatY => "repeat-y" = 0x2,
        Repeat => "repeat" = 0x3,
    }
}

enum_value! {
    pub enum BorderCollapse : BORDER_COLLAPSE_KEYWORDS {
        Collapse => "collapse" = 0x0,
        Separate => "separate" = 0x1,
    }
}

enum_value! {
    /// Border line styles; outline-style shares this type (its grammar just
    /// excludes `hidden`).
    pub enum BorderStyle : BORDER_STYLE_KEYWORDS {
        None => "none" = 0x0,
        Hidden => "hidden" = 0x1,
        Dotted => "dotted" = 0x2,
        Dashed => "dashed" = 0x3,
        Solid => "solid" = 0x4,
        Double => "double" = 0x5,
        Groove => "groove" = 0x6,
        Ridge => "ridge" = 0x7,
        Inset => "inset" = 0x8,
        Outset => "outset" = 0x9,
    }
}

/// outline-style accepts every border style except `hidden`.
pub static OUTLINE_STYLE_KEYWORDS: &[(&str, u16)] = &[
    ("none", 0x0),
    ("dotted", 0x2),
    ("dashed", 0x3),
    ("solid", 0x4),
    ("double", 0x5),
    ("groove", 0x6),
    ("ridge", 0x7),
    ("inset", 0x8),
    ("outset", 0x9),
];

enum_value! {
    pub enum CaptionSide : CAPTION_SIDE_KEYWORDS {
        Top => "top" = 0x0,
        Bottom => "bottom" = 0x1,
    }
}

enum_value! {
    pub enum Clear : CLEAR_KEYWORDS {
        None => "none" = 0x0,
        Left => "left" = 0x1,
        Right => "right" = 0x2,
        Both => "both" = 0x3,
    }
}

enum_value! {
    pub enum Direction : DIRECTION_KEYWORDS {
        Ltr => "ltr" = 0x0,
        Rtl => "rtl" = 0x1,
    }
}

enum_value! {
    pub enum Display : DISPLAY_KEYWORDS {
        Inline => "inline" = 0x0,
        Block => "block" = 0x1,
        ListItem => "list-item" = 0x2,
        RunIn => "run-in" = 0x3,
        InlineBlock => "inline-block" = 0x4,
        Table => "table" = 0x5,
        InlineTable => "inline-table" = 0x6,
        TableRowGroup => "table-row-group" = 0x7,
        TableHeaderGroup => "table-header-group" = 0x8,
        TableFooterGroup => "table-footer-group" = 0x9,
        TableRow => "table-row" = 0xa,
        TableColumnGroup => "table-column-group" = 0xb,
        TableColumn => "table-column" = 0xc,
        TableCell => "table-cell" = 0xd,
        TableCaption => "table-caption" = 0xe,
        None => "none" = 0xf,
    }
}

enum_value! {
    pub enum EmptyCells : EMPTY_CELLS_KEYWORDS {
        Show => "show" = 0x0,
        Hide => "hide" = 0x1,
    }
}

enum_value! {
    pub enum Float : FLOAT_KEYWORDS {
        None => "none" = 0x0,
        Left => "left" = 0x1,
        Right => "right" = 0x2,
    }
}

enum_value! {
    pub enum FontStyle : FONT_STYLE_KEYWORDS {
        Normal => "normal" = 0x0,
        Italic => "italic" = 0x1,
        Oblique => "oblique" = 0x2,
    }
}

enum_value! {
    pub enum FontVariant : FONT_VARIANT_KEYWORDS {
        Normal => "normal" = 0x0,
        SmallCaps => "small-caps" = 0x1,
    }
}

enum_value! {
    pub enum ListStylePosition : LIST_STYLE_POSITION_KEYWORDS {
        Inside => "inside" = 0x0,
        Outside => "outside" = 0x1,
    }
}

enum_value! {
    /// Marker styles; also names counter rendering styles inside `content`.
    pub enum ListStyleType : LIST_STYLE_TYPE_KEYWORDS {
        Disc => "disc" = 0x0,
        Circle => "circle" = 0x1,
        Square => "square" = 0x2,
        Decimal => "decimal" = 0x3,
        DecimalLeadingZero => "decimal-leading-zero" = 0x4,
        LowerRoman => "lower-roman" = 0x5,
        UpperRoman => "upper-roman" = 0x6,
        LowerGreek => "lower-greek" = 0x7,
        LowerLatin => "lower-latin" = 0x8,
        UpperLatin => "upper-latin" = 0x9,
        LowerAlpha => "lower-alpha" = 0xa,
        UpperAlpha => "upper-alpha" = 0xb,
        Armenian => "armenian" = 0xc,
        Georgian => "georgian" = 0xd,
        None => "none" = 0xe,
    }
}

enum_value! {
    pub enum Overflow : OVERFLOW_KEYWORDS {
        Visible => "visible" = 0x0,
        Hidden => "hidden" = 0x1,
        Scroll => "scroll" = 0x2,
        Auto => "auto" = 0x3,
    }
}

enum_value! {
    /// page-break-after and page-break-before; page-break-inside uses the
    /// `auto`/`avoid` subset.
    pub enum PageBreak : PAGE_BREAK_KEYWORDS {
        Auto => "auto" = 0x0,
        Always => "always" = 0x1,
        Avoid => "avoid" = 0x2,
        Left => "left" = 0x3,
        Right => "right" = 0x4,
    }
}

pub static PAGE_BREAK_INSIDE_KEYWORDS: &[(&str, u16)] = &[("auto", 0x0), ("avoid", 0x2)];

enum_value! {
    pub enum Position : POSITION_KEYWORDS {
        Static => "static" = 0x0,
        Relative => "relative" = 0x1,
        Absolute => "absolute" = 0x2,
        Fixed => "fixed" = 0x3,
    }
}

enum_value! {
    pub enum Speak : SPEAK_KEYWORDS {
        Normal => "normal" = 0x0,
        None => "none" = 0x1,
        SpellOut => "spell-out" = 0x2,
    }
}

enum_value! {
    pub enum SpeakHeader : SPEAK_HEADER_KEYWORDS {
        Once => "once" = 0x0,
        Always => "always" = 0x1,
    }
}

enum_value! {
    pub enum SpeakNumeral : SPEAK_NUMERAL_KEYWORDS {
        Digits => "digits" = 0x0,
        Continuous => "continuous" = 0x1,
    }
}

enum_value! {
    pub enum SpeakPunctuation : SPEAK_PUNCTUATION_KEYWORDS {
        Code => "code" = 0x0,
        None => "none" = 0x1,
    }
}

enum_value! {
    pub enum TableLayout : TABLE_LAYOUT_KEYWORDS {
        Auto => "auto" = 0x0,
        Fixed => "fixed" = 0x1,
    }
}

enum_value! {
    pub enum TextAlign : TEXT_ALIGN_KEYWORDS {
        Left => "left" = 0x0,
        Right => "right" = 0x1,
        Center => "center" = 0x2,
        Justify => "justify" = 0x3,
    }
}

enum_value! {
    pub enum TextTransform : TEXT_TRANSFORM_KEYWORDS {
        Capitalize => "capitalize" = 0x0,
        Uppercase => "uppercase" = 0x1,
        Lowercase => "lowercase" = 0x2,
        None => "none" = 0x3,
    }
}

enum_value! {
    pub enum UnicodeBidi : UNICODE_BIDI_KEYWORDS {
        Normal => "normal" = 0x0,
        Embed => "embed" = 0x1,
        BidiOverride => "bidi-override" = 0x2,
    }
}

enum_value! {
    pub enum Visibility : VISIBILITY_KEYWORDS {
        Visible => "visible" = 0x0,
        Hidden => "hidden" = 0x1,
        Collapse => "collapse" = 0x2,
    }
}

enum_value! {
    pub enum WhiteSpace : WHITE_SPACE_KEYWORDS {
        Normal => "normal" = 0x0,
        Pre => "pre" = 0x1,
        Nowrap => "nowrap" = 0x2,
        PreWrap => "pre-wrap" = 0x3,
        PreLine => "pre-line" = 0x4,
    }
}

// ============================================================================
// Non-keyword computed value types
// ============================================================================

/// RGBA colour, one octet per channel, alpha in the low octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x0000_00ff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::rgba(r, g, b, 0xff)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

/// Computed value of the colour-valued properties. `Transparent` is only
/// produced for backgrounds and borders, `Invert` only for outline-color,
/// and `CurrentColor` only as the border-color initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorValue {
    #[default]
    Inherit,
    Transparent,
    CurrentColor,
    Invert,
    Color(Color),
}

/// Computed value of the URI-or-`none` properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageValue {
    #[default]
    Inherit,
    None,
    Uri(StringHandle),
}

impl ImageValue {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let ImageValue::Uri(h) = self {
            interner.add_ref(*h);
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let ImageValue::Uri(h) = self {
            interner.release(*h);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthAuto {
    #[default]
    Inherit,
    Auto,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthNormal {
    #[default]
    Inherit,
    Normal,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthNone {
    #[default]
    Inherit,
    None,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthValue {
    #[default]
    Inherit,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderWidth {
    #[default]
    Inherit,
    Thin,
    Medium,
    Thick,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberValue {
    #[default]
    Inherit,
    Set(Fixed),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZIndex {
    #[default]
    Inherit,
    Auto,
    Set(Fixed),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineHeight {
    #[default]
    Inherit,
    Normal,
    Number(Fixed),
    Dimension(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Inherit,
    Baseline,
    Sub,
    Super,
    Top,
    TextTop,
    Middle,
    Bottom,
    TextBottom,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    #[default]
    Inherit,
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    Larger,
    Smaller,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Inherit,
    Normal,
    Bold,
    Bolder,
    Lighter,
    W100,
    W200,
    W300,
    W400,
    W500,
    W600,
    W700,
    W800,
    W900,
}

impl FontWeight {
    pub fn from_value(value: u16) -> Option<FontWeight> {
        match value {
            FONT_WEIGHT_NORMAL => Some(FontWeight::Normal),
            FONT_WEIGHT_BOLD => Some(FontWeight::Bold),
            FONT_WEIGHT_BOLDER => Some(FontWeight::Bolder),
            FONT_WEIGHT_LIGHTER => Some(FontWeight::Lighter),
            FONT_WEIGHT_100 => Some(FontWeight::W100),
            FONT_WEIGHT_200 => Some(FontWeight::W200),
            FONT_WEIGHT_300 => Some(FontWeight::W300),
            FONT_WEIGHT_400 => Some(FontWeight::W400),
            FONT_WEIGHT_500 => Some(FontWeight::W500),
            FONT_WEIGHT_600 => Some(FontWeight::W600),
            FONT_WEIGHT_700 => Some(FontWeight::W700),
            FONT_WEIGHT_800 => Some(FontWeight::W800),
            FONT_WEIGHT_900 => Some(FontWeight::W900),
            _ => None,
        }
    }
}

bitflags! {
    /// text-decoration line flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DecorationFlags: u16 {
        const UNDERLINE = TEXT_DECORATION_UNDERLINE;
        const OVERLINE = TEXT_DECORATION_OVERLINE;
        const LINE_THROUGH = TEXT_DECORATION_LINE_THROUGH;
        const BLINK = TEXT_DECORATION_BLINK;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoration {
    #[default]
    Inherit,
    None,
    Set(DecorationFlags),
}

impl TextDecoration {
    /// Decode a bytecode value field.
    pub fn from_value(value: u16) -> Option<TextDecoration> {
        if value == TEXT_DECORATION_NONE {
            return Some(TextDecoration::None);
        }
        DecorationFlags::from_bits(value).map(TextDecoration::Set)
    }
}

/// One side of a clip rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipSide {
    #[default]
    Auto,
    Set(Fixed, CssUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipRect {
    pub top: ClipSide,
    pub right: ClipSide,
    pub bottom: ClipSide,
    pub left: ClipSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clip {
    #[default]
    Inherit,
    Auto,
    Rect(ClipRect),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundPosition {
    #[default]
    Inherit,
    Set {
        horz: (Fixed, CssUnit),
        vert: (Fixed, CssUnit),
    },
}

/// Cursor keyword (the non-URI part of a cursor value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorKind {
    #[default]
    Auto,
    Crosshair,
    Default,
    Pointer,
    Move,
    EResize,
    NeResize,
    NwResize,
    NResize,
    SeResize,
    SwResize,
    SResize,
    WResize,
    Text,
    Wait,
    Help,
    Progress,
}

impl CursorKind {
    pub fn from_value(value: u16) -> Option<CursorKind> {
        use CursorKind::*;
        Some(match value {
            0x1 => Auto,
            0x2 => Crosshair,
            0x3 => Default,
            0x4 => Pointer,
            0x5 => Move,
            0x6 => EResize,
            0x7 => NeResize,
            0x8 => NwResize,
            0x9 => NResize,
            0xa => SeResize,
            0xb => SwResize,
            0xc => SResize,
            0xd => WResize,
            0xe => Text,
            0xf => Wait,
            0x10 => Help,
            0x11 => Progress,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Inherit,
    Set(Vec<StringHandle>, CursorKind),
}

impl Cursor {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let Cursor::Set(uris, _) = self {
            for h in uris {
                interner.add_ref(*h);
            }
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let Cursor::Set(uris, _) = self {
            for h in uris {
                interner.release(*h);
            }
        }
    }
}

/// One font family name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyName {
    Serif,
    SansSerif,
    Cursive,
    Fantasy,
    Monospace,
    Named(StringHandle),
}

/// Computed font-family. An empty list means the user agent default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Inherit,
    Set(Vec<FamilyName>),
}

impl FontFamily {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let FontFamily::Set(names) = self {
            for name in names {
                if let FamilyName::Named(h) = name {
                    interner.add_ref(*h);
                }
            }
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let FontFamily::Set(names) = self {
            for name in names {
                if let FamilyName::Named(h) = name {
                    interner.release(*h);
                }
            }
        }
    }
}

/// One voice name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceName {
    Male,
    Female,
    Child,
    Named(StringHandle),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VoiceFamily {
    #[default]
    Inherit,
    Set(Vec<VoiceName>),
}

impl VoiceFamily {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let VoiceFamily::Set(names) = self {
            for name in names {
                if let VoiceName::Named(h) = name {
                    interner.add_ref(*h);
                }
            }
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let VoiceFamily::Set(names) = self {
            for name in names {
                if let VoiceName::Named(h) = name {
                    interner.release(*h);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Quotes {
    #[default]
    Inherit,
    None,
    Set(Vec<(StringHandle, StringHandle)>),
}

impl Quotes {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let Quotes::Set(pairs) = self {
            for (open, close) in pairs {
                interner.add_ref(*open);
                interner.add_ref(*close);
            }
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let Quotes::Set(pairs) = self {
            for (open, close) in pairs {
                interner.release(*open);
                interner.release(*close);
            }
        }
    }
}

/// One generated-content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentItem {
    String(StringHandle),
    Uri(StringHandle),
    Attr(StringHandle),
    Counter {
        name: StringHandle,
        style: ListStyleType,
    },
    Counters {
        name: StringHandle,
        sep: StringHandle,
        style: ListStyleType,
    },
    OpenQuote,
    CloseQuote,
    NoOpenQuote,
    NoCloseQuote,
}

impl ContentItem {
    fn for_each_handle(&self, mut f: impl FnMut(StringHandle)) {
        match *self {
            ContentItem::String(h) | ContentItem::Uri(h) | ContentItem::Attr(h) => f(h),
            ContentItem::Counter { name, .. } => f(name),
            ContentItem::Counters { name, sep, .. } => {
                f(name);
                f(sep);
            }
            ContentItem::OpenQuote
            | ContentItem::CloseQuote
            | ContentItem::NoOpenQuote
            | ContentItem::NoCloseQuote => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Inherit,
    Normal,
    None,
    Set(Vec<ContentItem>),
}

impl Content {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let Content::Set(items) = self {
            for item in items {
                item.for_each_handle(|h| interner.add_ref(h));
            }
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let Content::Set(items) = self {
            for item in items {
                item.for_each_handle(|h| interner.release(h));
            }
        }
    }
}

/// Computed counter-increment / counter-reset: (name, value) pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CounterList {
    #[default]
    Inherit,
    None,
    Set(Vec<(StringHandle, Fixed)>),
}

impl CounterList {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let CounterList::Set(counters) = self {
            for (name, _) in counters {
                interner.add_ref(*name);
            }
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let CounterList::Set(counters) = self {
            for (name, _) in counters {
                interner.release(*name);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayDuring {
    #[default]
    Inherit,
    Auto,
    None,
    Uri {
        uri: StringHandle,
        mix: bool,
        repeat: bool,
    },
}

impl PlayDuring {
    pub(crate) fn add_refs(&self, interner: &Interner) {
        if let PlayDuring::Uri { uri, .. } = self {
            interner.add_ref(*uri);
        }
    }

    pub(crate) fn release(&self, interner: &Interner) {
        if let PlayDuring::Uri { uri, .. } = self {
            interner.release(*uri);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzimuthDirection {
    LeftSide,
    FarLeft,
    Left,
    CenterLeft,
    Center,
    CenterRight,
    Right,
    FarRight,
    RightSide,
}

impl AzimuthDirection {
    pub fn from_value(value: u16) -> Option<AzimuthDirection> {
        use AzimuthDirection::*;
        Some(match value {
            AZIMUTH_LEFT_SIDE => LeftSide,
            AZIMUTH_FAR_LEFT => FarLeft,
            AZIMUTH_LEFT => Left,
            AZIMUTH_CENTER_LEFT => CenterLeft,
            AZIMUTH_CENTER => Center,
            AZIMUTH_CENTER_RIGHT => CenterRight,
            AZIMUTH_RIGHT => Right,
            AZIMUTH_FAR_RIGHT => FarRight,
            AZIMUTH_RIGHT_SIDE => RightSide,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Azimuth {
    #[default]
    Inherit,
    Angle(Fixed, CssUnit),
    Position {
        direction: AzimuthDirection,
        behind: bool,
    },
    Leftwards,
    Rightwards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elevation {
    #[default]
    Inherit,
    Angle(Fixed, CssUnit),
    Below,
    Level,
    Above,
    Higher,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pitch {
    #[default]
    Inherit,
    Frequency(Fixed, CssUnit),
    XLow,
    Low,
    Medium,
    High,
    XHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechRate {
    #[default]
    Inherit,
    Set(Fixed),
    XSlow,
    Slow,
    Medium,
    Fast,
    XFast,
    Faster,
    Slower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Volume {
    #[default]
    Inherit,
    Number(Fixed),
    Dimension(Fixed, CssUnit),
    Silent,
    XSoft,
    Soft,
    Medium,
    Loud,
    XLoud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderSpacing {
    #[default]
    Inherit,
    Set(Fixed, CssUnit, Fixed, CssUnit),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_packing() {
        let c = Color::rgb(0xff, 0x00, 0x00);
        assert_eq!(c.0, 0xff00_00ff);
        assert_eq!(c.r(), 0xff);
        assert_eq!(c.a(), 0xff);
        assert_eq!(Color::rgba(0x12, 0x34, 0x56, 0x78).0, 0x1234_5678);
    }

    #[test]
    fn keyword_tables_round_trip() {
        for &(_, value) in DISPLAY_KEYWORDS {
            assert!(Display::from_value(value).is_some());
        }
        assert_eq!(Display::from_value(0xf), Some(Display::None));
        assert_eq!(Display::from_value(0x10), None);
    }

    #[test]
    fn outline_style_excludes_hidden() {
        assert!(OUTLINE_STYLE_KEYWORDS.iter().all(|&(kw, _)| kw != "hidden"));
        // The shared values still agree with the border-style table.
        for &(kw, value) in OUTLINE_STYLE_KEYWORDS {
            assert!(
                BORDER_STYLE_KEYWORDS
                    .iter()
                    .any(|&(k, v)| k == kw && v == value)
            );
        }
    }
}
