//! Generic cascade routines, parameterized by the typed setter, plus the
//! generic destructors.
//!
//! A helper decodes one entry's payload (advancing the style cursor past it
//! whether or not the declaration wins), asks the cascade state whether the
//! entry outranks the recorded winner, and if so applies the setter. The
//! destructors walk the same payload shapes, releasing one interned
//! reference per embedded handle and returning the entry's total octet
//! length.

use crate::bytecode::{CssUnit, Opv, StyleReader, to_css_unit};
use crate::cascade::{CascadeState, ComputedStyle};
use crate::error::{Error, Result};
use crate::fixed::Fixed;
use crate::intern::{Interner, StringHandle};
use crate::values::*;

// ============================================================================
// Cascade helpers
// ============================================================================

/// Pure-enum properties: the value field is the whole payload.
pub(crate) fn cascade_keyword<T: Copy>(
    opv: Opv,
    state: &mut CascadeState<'_>,
    inherit: T,
    decode: fn(u16) -> Option<T>,
    set: impl FnOnce(&mut ComputedStyle, T),
) -> Result<()> {
    let value = if opv.is_inherit() {
        inherit
    } else {
        decode(opv.value()).ok_or(Error::Invalid)?
    };

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

/// Colour-valued properties (set / transparent / invert sentinels plus an
/// optional colour word).
pub(crate) fn cascade_color(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, ColorValue),
) -> Result<()> {
    let mut value = ColorValue::Inherit;
    if !opv.is_inherit() {
        value = match opv.value() {
            COLOR_TRANSPARENT => ColorValue::Transparent,
            OUTLINE_COLOR_INVERT => ColorValue::Invert,
            COLOR_SET => ColorValue::Color(Color(r.read_color()?)),
            _ => return Err(Error::Invalid),
        };
    }

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

/// URI-or-`none` properties.
pub(crate) fn cascade_uri_none(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, &Interner, ImageValue),
) -> Result<()> {
    let mut value = ImageValue::Inherit;
    if !opv.is_inherit() {
        value = match opv.value() {
            URI_NONE => ImageValue::None,
            URI_SET => ImageValue::Uri(r.read_string()?),
            _ => return Err(Error::Invalid),
        };
    }

    if state.outranks_existing(opv) {
        let interner = state.interner;
        set(&mut state.computed, interner, value);
    }
    Ok(())
}

fn read_length(r: &mut StyleReader<'_>) -> Result<(Fixed, CssUnit)> {
    let length = r.read_fixed()?;
    let unit = to_css_unit(r.read_unit()?);
    Ok((length, unit))
}

/// thin/medium/thick enum or set plus length and unit.
pub(crate) fn cascade_border_width(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, BorderWidth),
) -> Result<()> {
    let mut value = BorderWidth::Inherit;
    if !opv.is_inherit() {
        value = match opv.value() {
            BORDER_WIDTH_THIN => BorderWidth::Thin,
            BORDER_WIDTH_MEDIUM => BorderWidth::Medium,
            BORDER_WIDTH_THICK => BorderWidth::Thick,
            BORDER_WIDTH_SET => {
                let (length, unit) = read_length(r)?;
                BorderWidth::Set(length, unit)
            }
            _ => return Err(Error::Invalid),
        };
    }

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

pub(crate) fn cascade_length_auto(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, LengthAuto),
) -> Result<()> {
    let mut value = LengthAuto::Inherit;
    if !opv.is_inherit() {
        value = match opv.value() {
            LENGTH_KEYWORD => LengthAuto::Auto,
            LENGTH_SET => {
                let (length, unit) = read_length(r)?;
                LengthAuto::Set(length, unit)
            }
            _ => return Err(Error::Invalid),
        };
    }

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

pub(crate) fn cascade_length_normal(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, LengthNormal),
) -> Result<()> {
    let mut value = LengthNormal::Inherit;
    if !opv.is_inherit() {
        value = match opv.value() {
            LENGTH_KEYWORD => LengthNormal::Normal,
            LENGTH_SET => {
                let (length, unit) = read_length(r)?;
                LengthNormal::Set(length, unit)
            }
            _ => return Err(Error::Invalid),
        };
    }

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

pub(crate) fn cascade_length_none(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, LengthNone),
) -> Result<()> {
    let mut value = LengthNone::Inherit;
    if !opv.is_inherit() {
        value = match opv.value() {
            LENGTH_KEYWORD => LengthNone::None,
            LENGTH_SET => {
                let (length, unit) = read_length(r)?;
                LengthNone::Set(length, unit)
            }
            _ => return Err(Error::Invalid),
        };
    }

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

/// Length with no keyword alternative (min-*, paddings, text-indent, pauses).
pub(crate) fn cascade_length(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, LengthValue),
) -> Result<()> {
    let mut value = LengthValue::Inherit;
    if !opv.is_inherit() {
        if opv.value() != LENGTH_SET {
            return Err(Error::Invalid);
        }
        let (length, unit) = read_length(r)?;
        value = LengthValue::Set(length, unit);
    }

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

/// Bare fixed-point number.
pub(crate) fn cascade_number(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, NumberValue),
) -> Result<()> {
    let mut value = NumberValue::Inherit;
    if !opv.is_inherit() {
        if opv.value() != NUMBER_SET {
            return Err(Error::Invalid);
        }
        value = NumberValue::Set(r.read_fixed()?);
    }

    if state.outranks_existing(opv) {
        set(&mut state.computed, value);
    }
    Ok(())
}

/// counter-increment / counter-reset: a sentinel-terminated list of
/// (name, value) pairs, grown one entry at a time.
pub(crate) fn cascade_counter_list(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
    set: impl FnOnce(&mut ComputedStyle, &Interner, CounterList),
) -> Result<()> {
    let mut value = CounterList::Inherit;
    if !opv.is_inherit() {
        value = match opv.value() {
            COUNTER_NONE => CounterList::None,
            COUNTER_NAMED => {
                let mut counters: Vec<(StringHandle, Fixed)> = Vec::new();
                loop {
                    counters.try_reserve(1).map_err(|_| Error::NoMemory)?;
                    let name = r.read_string()?;
                    let val = r.read_fixed()?;
                    counters.push((name, val));

                    match r.read_word()? as u16 {
                        COUNTER_NONE => break,
                        COUNTER_NAMED => {}
                        _ => return Err(Error::Invalid),
                    }
                }
                CounterList::Set(counters)
            }
            _ => return Err(Error::Invalid),
        };
    }

    if state.outranks_existing(opv) {
        let interner = state.interner;
        set(&mut state.computed, interner, value);
    }
    Ok(())
}

fn content_item_from_word(r: &mut StyleReader<'_>, word: u16) -> Result<ContentItem> {
    let style = || {
        ListStyleType::from_value(word >> CONTENT_COUNTER_STYLE_SHIFT).ok_or(Error::Invalid)
    };
    Ok(match word & CONTENT_KIND_MASK {
        CONTENT_STRING => ContentItem::String(r.read_string()?),
        CONTENT_URI => ContentItem::Uri(r.read_string()?),
        CONTENT_ATTR => ContentItem::Attr(r.read_string()?),
        CONTENT_COUNTER => ContentItem::Counter {
            name: r.read_string()?,
            style: style()?,
        },
        CONTENT_COUNTERS => ContentItem::Counters {
            name: r.read_string()?,
            sep: r.read_string()?,
            style: style()?,
        },
        CONTENT_OPEN_QUOTE => ContentItem::OpenQuote,
        CONTENT_CLOSE_QUOTE => ContentItem::CloseQuote,
        CONTENT_NO_OPEN_QUOTE => ContentItem::NoOpenQuote,
        CONTENT_NO_CLOSE_QUOTE => ContentItem::NoCloseQuote,
        _ => return Err(Error::Invalid),
    })
}

/// content: a sentinel-terminated list of heterogeneous items.
pub(crate) fn cascade_content(
    opv: Opv,
    r: &mut StyleReader<'_>,
    state: &mut CascadeState<'_>,
) -> Result<()> {
    let mut value = Content::Inherit;
    if !opv.is_inherit() {
        let v = opv.value();
        value = if v == CONTENT_NORMAL {
            Content::Normal
        } else if v == CONTENT_NONE {
            Content::None
        } else {
            let mut items: Vec<ContentItem> = Vec::new();
            let mut word = v;
            loop {
                items.try_reserve(1).map_err(|_| Error::NoMemory)?;
                items.push(content_item_from_word(r, word)?);

                word = r.read_word()? as u16;
                if word == CONTENT_NONE {
                    break;
                }
            }
            Content::Set(items)
        };
    }

    if state.outranks_existing(opv) {
        let interner = state.interner;
        state.computed.set_content(interner, value);
    }
    Ok(())
}

// ============================================================================
// Generic destructors
// ============================================================================

use crate::bytecode::{COLOR_SIZE, FIXED_SIZE, HANDLE_SIZE, OPV_SIZE, UNIT_SIZE, WORD_SIZE};

/// An entry with no payload.
pub(crate) fn destroy_opv_only(r: &mut StyleReader<'_>) -> Result<usize> {
    r.read_opv()?;
    Ok(OPV_SIZE)
}

/// Colour payload when the value says one was written.
pub(crate) fn destroy_color(r: &mut StyleReader<'_>) -> Result<usize> {
    let opv = r.read_opv()?;
    if !opv.is_inherit() && opv.value() == COLOR_SET {
        r.read_color()?;
        return Ok(OPV_SIZE + COLOR_SIZE);
    }
    Ok(OPV_SIZE)
}

/// URI payload: release the embedded reference.
pub(crate) fn destroy_uri(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
    let opv = r.read_opv()?;
    if !opv.is_inherit() && opv.value() == URI_SET {
        interner.release(r.read_string()?);
        return Ok(OPV_SIZE + HANDLE_SIZE);
    }
    Ok(OPV_SIZE)
}

/// Length-plus-unit payload when `has_payload` says the value carries one.
pub(crate) fn destroy_length_if(
    r: &mut StyleReader<'_>,
    has_payload: impl FnOnce(u16) -> bool,
) -> Result<usize> {
    let opv = r.read_opv()?;
    if !opv.is_inherit() && has_payload(opv.value()) {
        r.read_fixed()?;
        r.read_unit()?;
        return Ok(OPV_SIZE + FIXED_SIZE + UNIT_SIZE);
    }
    Ok(OPV_SIZE)
}

/// Standard length destroy: payload present when value is [`LENGTH_SET`].
pub(crate) fn destroy_length(r: &mut StyleReader<'_>) -> Result<usize> {
    destroy_length_if(r, |v| v == LENGTH_SET)
}

/// Bare-number payload when `has_payload` says the value carries one.
pub(crate) fn destroy_number_if(
    r: &mut StyleReader<'_>,
    has_payload: impl FnOnce(u16) -> bool,
) -> Result<usize> {
    let opv = r.read_opv()?;
    if !opv.is_inherit() && has_payload(opv.value()) {
        r.read_fixed()?;
        return Ok(OPV_SIZE + FIXED_SIZE);
    }
    Ok(OPV_SIZE)
}

/// cursor: URI handles chained by value words up to the keyword terminator.
pub(crate) fn destroy_cursor(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
    let opv = r.read_opv()?;
    let mut consumed = OPV_SIZE;
    if !opv.is_inherit() {
        let mut v = opv.value();
        while v == CURSOR_URI {
            interner.release(r.read_string()?);
            consumed += HANDLE_SIZE;
            v = r.read_word()? as u16;
            consumed += WORD_SIZE;
        }
    }
    Ok(consumed)
}

/// font-family / voice-family: name handles chained by value words up to the
/// END terminator. Both encodings share item values, so one walk serves.
pub(crate) fn destroy_name_list(
    r: &mut StyleReader<'_>,
    interner: &Interner,
    string_value: u16,
    ident_list_value: u16,
    end_value: u16,
) -> Result<usize> {
    let opv = r.read_opv()?;
    let mut consumed = OPV_SIZE;
    if !opv.is_inherit() {
        let mut v = opv.value();
        loop {
            if v == string_value || v == ident_list_value {
                interner.release(r.read_string()?);
                consumed += HANDLE_SIZE;
            }
            v = r.read_word()? as u16;
            consumed += WORD_SIZE;
            if v == end_value {
                break;
            }
        }
    }
    Ok(consumed)
}

/// counter-increment / counter-reset entries.
pub(crate) fn destroy_counter_list(
    r: &mut StyleReader<'_>,
    interner: &Interner,
) -> Result<usize> {
    let opv = r.read_opv()?;
    let mut consumed = OPV_SIZE;
    if !opv.is_inherit() && opv.value() == COUNTER_NAMED {
        loop {
            interner.release(r.read_string()?);
            r.read_fixed()?;
            consumed += HANDLE_SIZE + FIXED_SIZE + WORD_SIZE;
            match r.read_word()? as u16 {
                COUNTER_NONE => break,
                COUNTER_NAMED => {}
                _ => return Err(Error::Invalid),
            }
        }
    }
    Ok(consumed)
}

/// content entries. Counters release name and separator exactly once each.
pub(crate) fn destroy_content(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
    let opv = r.read_opv()?;
    let mut consumed = OPV_SIZE;
    if opv.is_inherit() {
        return Ok(consumed);
    }
    let mut word = opv.value();
    if word == CONTENT_NORMAL || word == CONTENT_NONE {
        return Ok(consumed);
    }
    loop {
        let handles = match word & CONTENT_KIND_MASK {
            CONTENT_STRING | CONTENT_URI | CONTENT_ATTR | CONTENT_COUNTER => 1,
            CONTENT_COUNTERS => 2,
            CONTENT_OPEN_QUOTE | CONTENT_CLOSE_QUOTE | CONTENT_NO_OPEN_QUOTE
            | CONTENT_NO_CLOSE_QUOTE => 0,
            _ => return Err(Error::Invalid),
        };
        for _ in 0..handles {
            interner.release(r.read_string()?);
            consumed += HANDLE_SIZE;
        }

        word = r.read_word()? as u16;
        consumed += WORD_SIZE;
        if word == CONTENT_NONE {
            break;
        }
    }
    Ok(consumed)
}

/// quotes entries: open/close handle pairs up to the NONE terminator.
pub(crate) fn destroy_quotes(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
    let opv = r.read_opv()?;
    let mut consumed = OPV_SIZE;
    if !opv.is_inherit() && opv.value() == QUOTES_STRING {
        loop {
            interner.release(r.read_string()?);
            interner.release(r.read_string()?);
            consumed += 2 * HANDLE_SIZE + WORD_SIZE;
            match r.read_word()? as u16 {
                QUOTES_NONE => break,
                QUOTES_STRING => {}
                _ => return Err(Error::Invalid),
            }
        }
    }
    Ok(consumed)
}
