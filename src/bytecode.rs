//! The bytecode ABI shared by the parser and the cascade.
//!
//! Each declaration becomes one *entry* in a style buffer: a 32-bit OPV
//! header, then zero or more payload words whose shape is dictated by the
//! OPV's value field. Entries are concatenated with no padding, all words
//! little-endian:
//!
//! - OPV and list value words: 4 octets
//! - fixed-point numbers: 4 octets (22.10, see [`crate::fixed::Fixed`])
//! - unit masks: 4 octets
//! - colors: 4 octets, RGBA
//! - interned string handles: 8 octets (pointer width on supported targets)
//!
//! The accessors on [`Opv`] are the sole consumers of the physical bit
//! layout; nothing else may inspect raw OPV bits.

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::fixed::Fixed;
use crate::intern::{Interner, StringHandle};

/// Identifiers for every longhand property, in stable ABI order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum PropertyId {
    Azimuth = 0,
    BackgroundAttachment,
    BackgroundColor,
    BackgroundImage,
    BackgroundPosition,
    BackgroundRepeat,
    BorderBottomColor,
    BorderBottomStyle,
    BorderBottomWidth,
    BorderCollapse,
    BorderLeftColor,
    BorderLeftStyle,
    BorderLeftWidth,
    BorderRightColor,
    BorderRightStyle,
    BorderRightWidth,
    BorderSpacing,
    BorderTopColor,
    BorderTopStyle,
    BorderTopWidth,
    Bottom,
    CaptionSide,
    Clear,
    Clip,
    Color,
    Content,
    CounterIncrement,
    CounterReset,
    CueAfter,
    CueBefore,
    Cursor,
    Direction,
    Display,
    Elevation,
    EmptyCells,
    Float,
    FontFamily,
    FontSize,
    FontStyle,
    FontVariant,
    FontWeight,
    Height,
    Left,
    LetterSpacing,
    LineHeight,
    ListStyleImage,
    ListStylePosition,
    ListStyleType,
    MarginBottom,
    MarginLeft,
    MarginRight,
    MarginTop,
    MaxHeight,
    MaxWidth,
    MinHeight,
    MinWidth,
    Orphans,
    OutlineColor,
    OutlineStyle,
    OutlineWidth,
    Overflow,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PageBreakAfter,
    PageBreakBefore,
    PageBreakInside,
    PauseAfter,
    PauseBefore,
    PitchRange,
    Pitch,
    PlayDuring,
    Position,
    Quotes,
    Richness,
    Right,
    SpeakHeader,
    SpeakNumeral,
    SpeakPunctuation,
    Speak,
    SpeechRate,
    Stress,
    TableLayout,
    TextAlign,
    TextDecoration,
    TextIndent,
    TextTransform,
    Top,
    UnicodeBidi,
    VerticalAlign,
    Visibility,
    VoiceFamily,
    Volume,
    WhiteSpace,
    Widows,
    Width,
    WordSpacing,
    ZIndex,
}

impl PropertyId {
    /// Every property, in id order. Index equals discriminant.
    pub const ALL: [PropertyId; 99] = [
        PropertyId::Azimuth,
        PropertyId::BackgroundAttachment,
        PropertyId::BackgroundColor,
        PropertyId::BackgroundImage,
        PropertyId::BackgroundPosition,
        PropertyId::BackgroundRepeat,
        PropertyId::BorderBottomColor,
        PropertyId::BorderBottomStyle,
        PropertyId::BorderBottomWidth,
        PropertyId::BorderCollapse,
        PropertyId::BorderLeftColor,
        PropertyId::BorderLeftStyle,
        PropertyId::BorderLeftWidth,
        PropertyId::BorderRightColor,
        PropertyId::BorderRightStyle,
        PropertyId::BorderRightWidth,
        PropertyId::BorderSpacing,
        PropertyId::BorderTopColor,
        PropertyId::BorderTopStyle,
        PropertyId::BorderTopWidth,
        PropertyId::Bottom,
        PropertyId::CaptionSide,
        PropertyId::Clear,
        PropertyId::Clip,
        PropertyId::Color,
        PropertyId::Content,
        PropertyId::CounterIncrement,
        PropertyId::CounterReset,
        PropertyId::CueAfter,
        PropertyId::CueBefore,
        PropertyId::Cursor,
        PropertyId::Direction,
        PropertyId::Display,
        PropertyId::Elevation,
        PropertyId::EmptyCells,
        PropertyId::Float,
        PropertyId::FontFamily,
        PropertyId::FontSize,
        PropertyId::FontStyle,
        PropertyId::FontVariant,
        PropertyId::FontWeight,
        PropertyId::Height,
        PropertyId::Left,
        PropertyId::LetterSpacing,
        PropertyId::LineHeight,
        PropertyId::ListStyleImage,
        PropertyId::ListStylePosition,
        PropertyId::ListStyleType,
        PropertyId::MarginBottom,
        PropertyId::MarginLeft,
        PropertyId::MarginRight,
        PropertyId::MarginTop,
        PropertyId::MaxHeight,
        PropertyId::MaxWidth,
        PropertyId::MinHeight,
        PropertyId::MinWidth,
        PropertyId::Orphans,
        PropertyId::OutlineColor,
        PropertyId::OutlineStyle,
        PropertyId::OutlineWidth,
        PropertyId::Overflow,
        PropertyId::PaddingBottom,
        PropertyId::PaddingLeft,
        PropertyId::PaddingRight,
        PropertyId::PaddingTop,
        PropertyId::PageBreakAfter,
        PropertyId::PageBreakBefore,
        PropertyId::PageBreakInside,
        PropertyId::PauseAfter,
        PropertyId::PauseBefore,
        PropertyId::PitchRange,
        PropertyId::Pitch,
        PropertyId::PlayDuring,
        PropertyId::Position,
        PropertyId::Quotes,
        PropertyId::Richness,
        PropertyId::Right,
        PropertyId::SpeakHeader,
        PropertyId::SpeakNumeral,
        PropertyId::SpeakPunctuation,
        PropertyId::Speak,
        PropertyId::SpeechRate,
        PropertyId::Stress,
        PropertyId::TableLayout,
        PropertyId::TextAlign,
        PropertyId::TextDecoration,
        PropertyId::TextIndent,
        PropertyId::TextTransform,
        PropertyId::Top,
        PropertyId::UnicodeBidi,
        PropertyId::VerticalAlign,
        PropertyId::Visibility,
        PropertyId::VoiceFamily,
        PropertyId::Volume,
        PropertyId::WhiteSpace,
        PropertyId::Widows,
        PropertyId::Width,
        PropertyId::WordSpacing,
        PropertyId::ZIndex,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn from_u16(v: u16) -> Option<PropertyId> {
        Self::ALL.get(v as usize).copied()
    }

    /// Whether CSS defines this property as inherited by default.
    pub fn inherited(self) -> bool {
        use PropertyId::*;
        matches!(
            self,
            Azimuth
                | BorderCollapse
                | BorderSpacing
                | CaptionSide
                | Color
                | Cursor
                | Direction
                | Elevation
                | EmptyCells
                | FontFamily
                | FontSize
                | FontStyle
                | FontVariant
                | FontWeight
                | LetterSpacing
                | LineHeight
                | ListStyleImage
                | ListStylePosition
                | ListStyleType
                | Orphans
                | PageBreakInside
                | PitchRange
                | Pitch
                | Quotes
                | Richness
                | SpeakHeader
                | SpeakNumeral
                | SpeakPunctuation
                | Speak
                | SpeechRate
                | Stress
                | TextAlign
                | TextIndent
                | TextTransform
                | Visibility
                | VoiceFamily
                | Volume
                | WhiteSpace
                | Widows
                | WordSpacing
        )
    }
}

bitflags! {
    /// OPV flag byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PropFlags: u8 {
        /// The declaration was `inherit`; no payload follows the OPV.
        const INHERIT = 1 << 0;
        /// The declaration carried `!important`.
        const IMPORTANT = 1 << 1;
    }
}

/// Packed Opcode-Plus-Value header: property id in bits 0..9, flags in bits
/// 10..17, property-local value in bits 18..31.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opv(u32);

impl Opv {
    pub fn new(prop: PropertyId, flags: PropFlags, value: u16) -> Opv {
        Opv((prop as u32 & 0x3ff) | (u32::from(flags.bits()) << 10) | ((u32::from(value) & 0x3fff) << 18))
    }

    pub fn opcode(self) -> Option<PropertyId> {
        PropertyId::from_u16((self.0 & 0x3ff) as u16)
    }

    pub fn value(self) -> u16 {
        ((self.0 >> 18) & 0x3fff) as u16
    }

    pub fn flags(self) -> PropFlags {
        PropFlags::from_bits_truncate(((self.0 >> 10) & 0xff) as u8)
    }

    pub fn is_inherit(self) -> bool {
        self.flags().contains(PropFlags::INHERIT)
    }

    pub fn is_important(self) -> bool {
        self.flags().contains(PropFlags::IMPORTANT)
    }

    pub fn to_bits(self) -> u32 {
        self.0
    }

    pub fn from_bits(bits: u32) -> Opv {
        Opv(bits)
    }
}

/// Unit bitmask as stored in bytecode.
///
/// Length units occupy the low bits; `PCT`, angle, time and frequency units
/// carry a class bit so that whole classes can be rejected with one mask
/// test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitMask(u32);

impl UnitMask {
    pub const PX: UnitMask = UnitMask(0);
    pub const EX: UnitMask = UnitMask(1);
    pub const EM: UnitMask = UnitMask(2);
    pub const IN: UnitMask = UnitMask(3);
    pub const CM: UnitMask = UnitMask(4);
    pub const MM: UnitMask = UnitMask(5);
    pub const PT: UnitMask = UnitMask(6);
    pub const PC: UnitMask = UnitMask(7);

    pub const PCT: UnitMask = UnitMask(1 << 8);

    pub const DEG: UnitMask = UnitMask(1 << 9);
    pub const GRAD: UnitMask = UnitMask((1 << 9) | 1);
    pub const RAD: UnitMask = UnitMask((1 << 9) | 2);

    pub const MS: UnitMask = UnitMask(1 << 10);
    pub const S: UnitMask = UnitMask((1 << 10) | 1);

    pub const HZ: UnitMask = UnitMask(1 << 11);
    pub const KHZ: UnitMask = UnitMask((1 << 11) | 1);

    pub fn is_percent(self) -> bool {
        self.0 & (1 << 8) != 0
    }

    pub fn is_angle(self) -> bool {
        self.0 & (1 << 9) != 0
    }

    pub fn is_time(self) -> bool {
        self.0 & (1 << 10) != 0
    }

    pub fn is_frequency(self) -> bool {
        self.0 & (1 << 11) != 0
    }

    pub fn to_bits(self) -> u32 {
        self.0
    }

    pub fn from_bits(bits: u32) -> UnitMask {
        UnitMask(bits)
    }
}

/// Public unit enumeration used by computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CssUnit {
    #[default]
    Px = 0x0,
    Ex = 0x1,
    Em = 0x2,
    In = 0x3,
    Cm = 0x4,
    Mm = 0x5,
    Pt = 0x6,
    Pc = 0x7,
    Pct = 0x8,
    Deg = 0x9,
    Grad = 0xa,
    Rad = 0xb,
    Ms = 0xc,
    S = 0xd,
    Hz = 0xe,
    Khz = 0xf,
}

/// Translate a bytecode unit mask to the public enumeration.
///
/// Unrecognized inputs produce [`CssUnit::Px`].
pub fn to_css_unit(mask: UnitMask) -> CssUnit {
    match mask {
        UnitMask::PX => CssUnit::Px,
        UnitMask::EX => CssUnit::Ex,
        UnitMask::EM => CssUnit::Em,
        UnitMask::IN => CssUnit::In,
        UnitMask::CM => CssUnit::Cm,
        UnitMask::MM => CssUnit::Mm,
        UnitMask::PT => CssUnit::Pt,
        UnitMask::PC => CssUnit::Pc,
        UnitMask::PCT => CssUnit::Pct,
        UnitMask::DEG => CssUnit::Deg,
        UnitMask::GRAD => CssUnit::Grad,
        UnitMask::RAD => CssUnit::Rad,
        UnitMask::MS => CssUnit::Ms,
        UnitMask::S => CssUnit::S,
        UnitMask::HZ => CssUnit::Hz,
        UnitMask::KHZ => CssUnit::Khz,
        _ => CssUnit::Px,
    }
}

/// Octet sizes of the bytecode word kinds.
pub const OPV_SIZE: usize = 4;
pub const WORD_SIZE: usize = 4;
pub const FIXED_SIZE: usize = 4;
pub const UNIT_SIZE: usize = 4;
pub const COLOR_SIZE: usize = 4;
pub const HANDLE_SIZE: usize = 8;

/// One property's compiled style: an append-only bytecode buffer.
///
/// The buffer owns one interned-string reference per handle written into it;
/// [`crate::cascade::destroy_style`] walks the entries and releases them.
#[derive(Debug, Default)]
pub struct Style {
    bytecode: Vec<u8>,
}

impl Style {
    /// Allocate a buffer for exactly `bytes` octets of bytecode.
    pub(crate) fn with_capacity(bytes: usize) -> Result<Style> {
        let mut bytecode = Vec::new();
        bytecode
            .try_reserve_exact(bytes)
            .map_err(|_| Error::NoMemory)?;
        Ok(Style { bytecode })
    }

    pub(crate) fn push_opv(&mut self, opv: Opv) {
        self.bytecode.extend_from_slice(&opv.to_bits().to_le_bytes());
    }

    /// A raw list value word (list item kinds, sentinels).
    pub(crate) fn push_word(&mut self, word: u32) {
        self.bytecode.extend_from_slice(&word.to_le_bytes());
    }

    pub(crate) fn push_fixed(&mut self, value: Fixed) {
        self.bytecode.extend_from_slice(&value.raw().to_le_bytes());
    }

    pub(crate) fn push_unit(&mut self, unit: UnitMask) {
        self.bytecode.extend_from_slice(&unit.to_bits().to_le_bytes());
    }

    pub(crate) fn push_color(&mut self, color: u32) {
        self.bytecode.extend_from_slice(&color.to_le_bytes());
    }

    /// Write a string handle, taking one reference for the buffer.
    pub(crate) fn push_string(&mut self, interner: &Interner, handle: StringHandle) {
        interner.add_ref(handle);
        self.push_string_owned(handle);
    }

    /// Write a string handle whose reference the buffer takes over.
    pub(crate) fn push_string_owned(&mut self, handle: StringHandle) {
        self.bytecode
            .extend_from_slice(&u64::from(handle.to_bits()).to_le_bytes());
    }

    pub fn len(&self) -> usize {
        self.bytecode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytecode.is_empty()
    }

    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    pub fn reader(&self) -> StyleReader<'_> {
        StyleReader {
            bytes: &self.bytecode,
            pos: 0,
        }
    }
}

/// Cursor over a style buffer's bytecode.
#[derive(Debug, Clone)]
pub struct StyleReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> StyleReader<'a> {
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::Invalid)?;
        let slice = self.bytes.get(self.pos..end).ok_or(Error::Invalid)?;
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_opv(&mut self) -> Result<Opv> {
        Ok(Opv::from_bits(self.read_u32()?))
    }

    /// A raw list value word.
    pub fn read_word(&mut self) -> Result<u32> {
        self.read_u32()
    }

    pub fn read_fixed(&mut self) -> Result<Fixed> {
        let b = self.take(4)?;
        Ok(Fixed::from_raw(i32::from_le_bytes([b[0], b[1], b[2], b[3]])))
    }

    pub fn read_unit(&mut self) -> Result<UnitMask> {
        Ok(UnitMask::from_bits(self.read_u32()?))
    }

    pub fn read_color(&mut self) -> Result<u32> {
        self.read_u32()
    }

    pub fn read_string(&mut self) -> Result<StringHandle> {
        let b = self.take(8)?;
        let bits = u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
        u32::try_from(bits)
            .map(StringHandle::from_bits)
            .map_err(|_| Error::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opv_accessors_round_trip() {
        let opv = Opv::new(
            PropertyId::Width,
            PropFlags::IMPORTANT,
            crate::values::LENGTH_SET,
        );
        assert_eq!(opv.opcode(), Some(PropertyId::Width));
        assert_eq!(opv.value(), crate::values::LENGTH_SET);
        assert!(opv.is_important());
        assert!(!opv.is_inherit());
    }

    #[test]
    fn inherit_flag_is_independent() {
        let opv = Opv::new(PropertyId::Color, PropFlags::INHERIT, 0);
        assert!(opv.is_inherit());
        assert!(!opv.is_important());
    }

    #[test]
    fn unit_class_bits() {
        assert!(UnitMask::DEG.is_angle());
        assert!(UnitMask::GRAD.is_angle());
        assert!(UnitMask::S.is_time());
        assert!(UnitMask::KHZ.is_frequency());
        assert!(UnitMask::PCT.is_percent());
        assert!(!UnitMask::PX.is_angle());
        assert!(!UnitMask::EM.is_percent());
    }

    #[test]
    fn unit_translation() {
        assert_eq!(to_css_unit(UnitMask::PT), CssUnit::Pt);
        assert_eq!(to_css_unit(UnitMask::KHZ), CssUnit::Khz);
        assert_eq!(to_css_unit(UnitMask::from_bits(0xdead_0000)), CssUnit::Px);
    }

    #[test]
    fn buffer_round_trips_words() {
        let interner = Interner::new();
        let handle = interner.intern("url").unwrap();
        let mut style = Style::with_capacity(24).unwrap();
        style.push_opv(Opv::new(PropertyId::Height, PropFlags::empty(), 1));
        style.push_fixed(Fixed::from_int(100));
        style.push_unit(UnitMask::PX);
        style.push_string(&interner, handle);
        assert_eq!(style.len(), 20);
        assert_eq!(interner.ref_count(handle), 2);

        let mut r = style.reader();
        assert_eq!(r.read_opv().unwrap().opcode(), Some(PropertyId::Height));
        assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(100));
        assert_eq!(r.read_unit().unwrap(), UnitMask::PX);
        assert_eq!(r.read_string().unwrap(), handle);
        assert!(r.at_end());
        assert!(r.read_word().is_err());
    }

    #[test]
    fn property_ids_are_dense() {
        for (i, prop) in PropertyId::ALL.iter().enumerate() {
            assert_eq!(*prop as usize, i);
            assert_eq!(PropertyId::from_u16(i as u16), Some(*prop));
        }
        assert_eq!(PropertyId::from_u16(PropertyId::COUNT as u16), None);
    }
}
