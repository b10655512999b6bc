//! Per-property cascade operations.
//!
//! Every property owns a quartet: `cascade` consumes its bytecode entry and
//! applies the winning value, `initial` writes the CSS-defined initial
//! value, `compose` resolves inheritance between a parent and child record,
//! and `destroy` walks one entry releasing its interned references. Each
//! property also exposes a `set_from_hint` accepting an already-typed value
//! from a caller-supplied presentational hint, bypassing the bytecode path.
//!
//! The regular shapes are generated; the interesting grammars are written
//! out below.

use crate::bytecode::{
    CssUnit, FIXED_SIZE, HANDLE_SIZE, OPV_SIZE, Opv, PropertyId, StyleReader, UNIT_SIZE,
};
use crate::cascade::{CascadeState, ComputedStyle, helpers};
use crate::error::{Error, Result};
use crate::fixed::Fixed;
use crate::intern::{Interner, StringHandle};
use crate::values::*;

/// One property's cascade operations, table-dispatched by property id.
pub(crate) struct PropOps {
    pub cascade: fn(Opv, &mut StyleReader<'_>, &mut CascadeState<'_>) -> Result<()>,
    pub initial: fn(&mut CascadeState<'_>) -> Result<()>,
    pub compose: fn(&ComputedStyle, &ComputedStyle, &mut ComputedStyle, &Interner) -> Result<()>,
    pub destroy: fn(&mut StyleReader<'_>, &Interner) -> Result<usize>,
}

pub(crate) fn ops(prop: PropertyId) -> &'static PropOps {
    &PROP_OPS[prop as usize]
}

// ============================================================================
// Generated shapes
// ============================================================================

macro_rules! keyword_ops {
    ($mod_name:ident, $field:ident, $Enum:ident, $initial:expr) => {
        pub mod $mod_name {
            use super::*;

            pub fn cascade(
                opv: Opv,
                _r: &mut StyleReader<'_>,
                state: &mut CascadeState<'_>,
            ) -> Result<()> {
                helpers::cascade_keyword(opv, state, $Enum::Inherit, $Enum::from_value, |c, v| {
                    c.$field = v
                })
            }

            pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
                state.computed.$field = $initial;
                Ok(())
            }

            pub fn set_from_hint(hint: $Enum, style: &mut ComputedStyle) -> Result<()> {
                style.$field = hint;
                Ok(())
            }

            pub fn compose(
                parent: &ComputedStyle,
                child: &ComputedStyle,
                result: &mut ComputedStyle,
                _interner: &Interner,
            ) -> Result<()> {
                result.$field = if child.$field == $Enum::Inherit {
                    parent.$field
                } else {
                    child.$field
                };
                Ok(())
            }

            pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
                helpers::destroy_opv_only(r)
            }
        }
    };
}

macro_rules! length_ops {
    ($mod_name:ident, $field:ident, $Enum:ident, $initial:expr, $helper:ident) => {
        pub mod $mod_name {
            use super::*;

            pub fn cascade(
                opv: Opv,
                r: &mut StyleReader<'_>,
                state: &mut CascadeState<'_>,
            ) -> Result<()> {
                helpers::$helper(opv, r, state, |c, v| c.$field = v)
            }

            pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
                state.computed.$field = $initial;
                Ok(())
            }

            pub fn set_from_hint(hint: $Enum, style: &mut ComputedStyle) -> Result<()> {
                style.$field = hint;
                Ok(())
            }

            pub fn compose(
                parent: &ComputedStyle,
                child: &ComputedStyle,
                result: &mut ComputedStyle,
                _interner: &Interner,
            ) -> Result<()> {
                result.$field = if child.$field == $Enum::Inherit {
                    parent.$field
                } else {
                    child.$field
                };
                Ok(())
            }

            pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
                helpers::destroy_length(r)
            }
        }
    };
}

macro_rules! border_width_ops {
    ($mod_name:ident, $field:ident) => {
        pub mod $mod_name {
            use super::*;

            pub fn cascade(
                opv: Opv,
                r: &mut StyleReader<'_>,
                state: &mut CascadeState<'_>,
            ) -> Result<()> {
                helpers::cascade_border_width(opv, r, state, |c, v| c.$field = v)
            }

            pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
                state.computed.$field = BorderWidth::Medium;
                Ok(())
            }

            pub fn set_from_hint(hint: BorderWidth, style: &mut ComputedStyle) -> Result<()> {
                style.$field = hint;
                Ok(())
            }

            pub fn compose(
                parent: &ComputedStyle,
                child: &ComputedStyle,
                result: &mut ComputedStyle,
                _interner: &Interner,
            ) -> Result<()> {
                result.$field = if child.$field == BorderWidth::Inherit {
                    parent.$field
                } else {
                    child.$field
                };
                Ok(())
            }

            pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
                helpers::destroy_length_if(r, |v| v == BORDER_WIDTH_SET)
            }
        }
    };
}

macro_rules! color_ops {
    ($mod_name:ident, $field:ident, $initial:expr) => {
        pub mod $mod_name {
            use super::*;

            pub fn cascade(
                opv: Opv,
                r: &mut StyleReader<'_>,
                state: &mut CascadeState<'_>,
            ) -> Result<()> {
                helpers::cascade_color(opv, r, state, |c, v| c.$field = v)
            }

            pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
                state.computed.$field = $initial;
                Ok(())
            }

            pub fn set_from_hint(hint: ColorValue, style: &mut ComputedStyle) -> Result<()> {
                style.$field = hint;
                Ok(())
            }

            pub fn compose(
                parent: &ComputedStyle,
                child: &ComputedStyle,
                result: &mut ComputedStyle,
                _interner: &Interner,
            ) -> Result<()> {
                result.$field = if child.$field == ColorValue::Inherit {
                    parent.$field
                } else {
                    child.$field
                };
                Ok(())
            }

            pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
                helpers::destroy_color(r)
            }
        }
    };
}

macro_rules! uri_ops {
    ($mod_name:ident, $field:ident, $setter:ident, $initial:expr) => {
        pub mod $mod_name {
            use super::*;

            pub fn cascade(
                opv: Opv,
                r: &mut StyleReader<'_>,
                state: &mut CascadeState<'_>,
            ) -> Result<()> {
                helpers::cascade_uri_none(opv, r, state, |c, i, v| c.$setter(i, v))
            }

            pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
                let interner = state.interner;
                state.computed.$setter(interner, $initial);
                Ok(())
            }

            pub fn set_from_hint(
                hint: ImageValue,
                style: &mut ComputedStyle,
                interner: &Interner,
            ) -> Result<()> {
                style.$setter(interner, hint);
                Ok(())
            }

            pub fn compose(
                parent: &ComputedStyle,
                child: &ComputedStyle,
                result: &mut ComputedStyle,
                interner: &Interner,
            ) -> Result<()> {
                let chosen = if child.$field == ImageValue::Inherit {
                    parent.$field
                } else {
                    child.$field
                };
                result.$setter(interner, chosen);
                Ok(())
            }

            pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
                helpers::destroy_uri(r, interner)
            }
        }
    };
}

macro_rules! number_ops {
    ($mod_name:ident, $field:ident, $initial:expr) => {
        pub mod $mod_name {
            use super::*;

            pub fn cascade(
                opv: Opv,
                r: &mut StyleReader<'_>,
                state: &mut CascadeState<'_>,
            ) -> Result<()> {
                helpers::cascade_number(opv, r, state, |c, v| c.$field = v)
            }

            pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
                state.computed.$field = $initial;
                Ok(())
            }

            pub fn set_from_hint(hint: NumberValue, style: &mut ComputedStyle) -> Result<()> {
                style.$field = hint;
                Ok(())
            }

            pub fn compose(
                parent: &ComputedStyle,
                child: &ComputedStyle,
                result: &mut ComputedStyle,
                _interner: &Interner,
            ) -> Result<()> {
                result.$field = if child.$field == NumberValue::Inherit {
                    parent.$field
                } else {
                    child.$field
                };
                Ok(())
            }

            pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
                helpers::destroy_number_if(r, |v| v == NUMBER_SET)
            }
        }
    };
}

/// Clone-on-compose for the list-valued properties.
macro_rules! list_compose {
    ($field:ident, $setter:ident, $Enum:ident) => {
        pub fn compose(
            parent: &ComputedStyle,
            child: &ComputedStyle,
            result: &mut ComputedStyle,
            interner: &Interner,
        ) -> Result<()> {
            let chosen = if child.$field == $Enum::Inherit {
                parent.$field.clone()
            } else {
                child.$field.clone()
            };
            result.$setter(interner, chosen);
            Ok(())
        }
    };
}

keyword_ops!(background_attachment, background_attachment, BackgroundAttachment, BackgroundAttachment::Scroll);
keyword_ops!(background_repeat, background_repeat, BackgroundRepeat, BackgroundRepeat::Repeat);
keyword_ops!(border_collapse, border_collapse, BorderCollapse, BorderCollapse::Separate);
keyword_ops!(border_top_style, border_top_style, BorderStyle, BorderStyle::None);
keyword_ops!(border_right_style, border_right_style, BorderStyle, BorderStyle::None);
keyword_ops!(border_bottom_style, border_bottom_style, BorderStyle, BorderStyle::None);
keyword_ops!(border_left_style, border_left_style, BorderStyle, BorderStyle::None);
keyword_ops!(caption_side, caption_side, CaptionSide, CaptionSide::Top);
keyword_ops!(clear, clear, Clear, Clear::None);
keyword_ops!(direction, direction, Direction, Direction::Ltr);
keyword_ops!(display, display, Display, Display::Inline);
keyword_ops!(empty_cells, empty_cells, EmptyCells, EmptyCells::Show);
keyword_ops!(float, float, Float, Float::None);
keyword_ops!(font_style, font_style, FontStyle, FontStyle::Normal);
keyword_ops!(font_variant, font_variant, FontVariant, FontVariant::Normal);
keyword_ops!(font_weight, font_weight, FontWeight, FontWeight::Normal);
keyword_ops!(list_style_position, list_style_position, ListStylePosition, ListStylePosition::Outside);
keyword_ops!(list_style_type, list_style_type, ListStyleType, ListStyleType::Disc);
keyword_ops!(outline_style, outline_style, BorderStyle, BorderStyle::None);
keyword_ops!(overflow, overflow, Overflow, Overflow::Visible);
keyword_ops!(page_break_after, page_break_after, PageBreak, PageBreak::Auto);
keyword_ops!(page_break_before, page_break_before, PageBreak, PageBreak::Auto);
keyword_ops!(page_break_inside, page_break_inside, PageBreak, PageBreak::Auto);
keyword_ops!(position, position, Position, Position::Static);
keyword_ops!(speak, speak, Speak, Speak::Normal);
keyword_ops!(speak_header, speak_header, SpeakHeader, SpeakHeader::Once);
keyword_ops!(speak_numeral, speak_numeral, SpeakNumeral, SpeakNumeral::Continuous);
keyword_ops!(speak_punctuation, speak_punctuation, SpeakPunctuation, SpeakPunctuation::None);
keyword_ops!(table_layout, table_layout, TableLayout, TableLayout::Auto);
keyword_ops!(text_align, text_align, TextAlign, TextAlign::Left);
keyword_ops!(text_decoration, text_decoration, TextDecoration, TextDecoration::None);
keyword_ops!(text_transform, text_transform, TextTransform, TextTransform::None);
keyword_ops!(unicode_bidi, unicode_bidi, UnicodeBidi, UnicodeBidi::Normal);
keyword_ops!(visibility, visibility, Visibility, Visibility::Visible);
keyword_ops!(white_space, white_space, WhiteSpace, WhiteSpace::Normal);

length_ops!(width, width, LengthAuto, LengthAuto::Auto, cascade_length_auto);
length_ops!(height, height, LengthAuto, LengthAuto::Auto, cascade_length_auto);
length_ops!(top, top, LengthAuto, LengthAuto::Auto, cascade_length_auto);
length_ops!(right, right, LengthAuto, LengthAuto::Auto, cascade_length_auto);
length_ops!(bottom, bottom, LengthAuto, LengthAuto::Auto, cascade_length_auto);
length_ops!(left, left, LengthAuto, LengthAuto::Auto, cascade_length_auto);
length_ops!(margin_top, margin_top, LengthAuto, LengthAuto::Set(Fixed::ZERO, CssUnit::Px), cascade_length_auto);
length_ops!(margin_right, margin_right, LengthAuto, LengthAuto::Set(Fixed::ZERO, CssUnit::Px), cascade_length_auto);
length_ops!(margin_bottom, margin_bottom, LengthAuto, LengthAuto::Set(Fixed::ZERO, CssUnit::Px), cascade_length_auto);
length_ops!(margin_left, margin_left, LengthAuto, LengthAuto::Set(Fixed::ZERO, CssUnit::Px), cascade_length_auto);
length_ops!(letter_spacing, letter_spacing, LengthNormal, LengthNormal::Normal, cascade_length_normal);
length_ops!(word_spacing, word_spacing, LengthNormal, LengthNormal::Normal, cascade_length_normal);
length_ops!(max_height, max_height, LengthNone, LengthNone::None, cascade_length_none);
length_ops!(max_width, max_width, LengthNone, LengthNone::None, cascade_length_none);
length_ops!(min_height, min_height, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Px), cascade_length);
length_ops!(min_width, min_width, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Px), cascade_length);
length_ops!(padding_top, padding_top, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Px), cascade_length);
length_ops!(padding_right, padding_right, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Px), cascade_length);
length_ops!(padding_bottom, padding_bottom, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Px), cascade_length);
length_ops!(padding_left, padding_left, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Px), cascade_length);
length_ops!(text_indent, text_indent, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Px), cascade_length);
length_ops!(pause_after, pause_after, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Ms), cascade_length);
length_ops!(pause_before, pause_before, LengthValue, LengthValue::Set(Fixed::ZERO, CssUnit::Ms), cascade_length);

border_width_ops!(border_top_width, border_top_width);
border_width_ops!(border_right_width, border_right_width);
border_width_ops!(border_bottom_width, border_bottom_width);
border_width_ops!(border_left_width, border_left_width);
border_width_ops!(outline_width, outline_width);

color_ops!(color, color, ColorValue::Color(Color::BLACK));
color_ops!(background_color, background_color, ColorValue::Transparent);
color_ops!(border_top_color, border_top_color, ColorValue::CurrentColor);
color_ops!(border_right_color, border_right_color, ColorValue::CurrentColor);
color_ops!(border_bottom_color, border_bottom_color, ColorValue::CurrentColor);
color_ops!(border_left_color, border_left_color, ColorValue::CurrentColor);
color_ops!(outline_color, outline_color, ColorValue::Invert);

uri_ops!(background_image, background_image, set_background_image, ImageValue::None);
uri_ops!(list_style_image, list_style_image, set_list_style_image, ImageValue::None);
uri_ops!(cue_after, cue_after, set_cue_after, ImageValue::None);
uri_ops!(cue_before, cue_before, set_cue_before, ImageValue::None);

number_ops!(orphans, orphans, NumberValue::Set(Fixed::from_int(2)));
number_ops!(widows, widows, NumberValue::Set(Fixed::from_int(2)));
number_ops!(pitch_range, pitch_range, NumberValue::Set(Fixed::from_int(50)));
number_ops!(richness, richness, NumberValue::Set(Fixed::from_int(50)));
number_ops!(stress, stress, NumberValue::Set(Fixed::from_int(50)));

// ============================================================================
// Bespoke properties
// ============================================================================

pub mod z_index {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = ZIndex::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                Z_INDEX_AUTO => ZIndex::Auto,
                Z_INDEX_SET => ZIndex::Set(r.read_fixed()?),
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.z_index = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.z_index = ZIndex::Auto;
        Ok(())
    }

    pub fn set_from_hint(hint: ZIndex, style: &mut ComputedStyle) -> Result<()> {
        style.z_index = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.z_index = if child.z_index == ZIndex::Inherit {
            parent.z_index
        } else {
            child.z_index
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        helpers::destroy_number_if(r, |v| v == Z_INDEX_SET)
    }
}

pub mod line_height {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = LineHeight::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                LINE_HEIGHT_NORMAL => LineHeight::Normal,
                LINE_HEIGHT_NUMBER => LineHeight::Number(r.read_fixed()?),
                LINE_HEIGHT_DIMENSION => {
                    let length = r.read_fixed()?;
                    let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                    LineHeight::Dimension(length, unit)
                }
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.line_height = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.line_height = LineHeight::Normal;
        Ok(())
    }

    pub fn set_from_hint(hint: LineHeight, style: &mut ComputedStyle) -> Result<()> {
        style.line_height = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.line_height = if child.line_height == LineHeight::Inherit {
            parent.line_height
        } else {
            child.line_height
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        let opv = r.read_opv()?;
        if opv.is_inherit() {
            return Ok(OPV_SIZE);
        }
        match opv.value() {
            LINE_HEIGHT_NUMBER => {
                r.read_fixed()?;
                Ok(OPV_SIZE + FIXED_SIZE)
            }
            LINE_HEIGHT_DIMENSION => {
                r.read_fixed()?;
                r.read_unit()?;
                Ok(OPV_SIZE + FIXED_SIZE + UNIT_SIZE)
            }
            _ => Ok(OPV_SIZE),
        }
    }
}

pub mod vertical_align {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = VerticalAlign::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                VERTICAL_ALIGN_SET => {
                    let length = r.read_fixed()?;
                    let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                    VerticalAlign::Set(length, unit)
                }
                VERTICAL_ALIGN_BASELINE => VerticalAlign::Baseline,
                VERTICAL_ALIGN_SUB => VerticalAlign::Sub,
                VERTICAL_ALIGN_SUPER => VerticalAlign::Super,
                VERTICAL_ALIGN_TOP => VerticalAlign::Top,
                VERTICAL_ALIGN_TEXT_TOP => VerticalAlign::TextTop,
                VERTICAL_ALIGN_MIDDLE => VerticalAlign::Middle,
                VERTICAL_ALIGN_BOTTOM => VerticalAlign::Bottom,
                VERTICAL_ALIGN_TEXT_BOTTOM => VerticalAlign::TextBottom,
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.vertical_align = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.vertical_align = VerticalAlign::Baseline;
        Ok(())
    }

    pub fn set_from_hint(hint: VerticalAlign, style: &mut ComputedStyle) -> Result<()> {
        style.vertical_align = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.vertical_align = if child.vertical_align == VerticalAlign::Inherit {
            parent.vertical_align
        } else {
            child.vertical_align
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        helpers::destroy_length_if(r, |v| v == VERTICAL_ALIGN_SET)
    }
}

pub mod font_size {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = FontSize::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                FONT_SIZE_SET => {
                    let length = r.read_fixed()?;
                    let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                    FontSize::Set(length, unit)
                }
                FONT_SIZE_XX_SMALL => FontSize::XxSmall,
                FONT_SIZE_X_SMALL => FontSize::XSmall,
                FONT_SIZE_SMALL => FontSize::Small,
                FONT_SIZE_MEDIUM => FontSize::Medium,
                FONT_SIZE_LARGE => FontSize::Large,
                FONT_SIZE_X_LARGE => FontSize::XLarge,
                FONT_SIZE_XX_LARGE => FontSize::XxLarge,
                FONT_SIZE_LARGER => FontSize::Larger,
                FONT_SIZE_SMALLER => FontSize::Smaller,
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.font_size = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.font_size = FontSize::Medium;
        Ok(())
    }

    pub fn set_from_hint(hint: FontSize, style: &mut ComputedStyle) -> Result<()> {
        style.font_size = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.font_size = if child.font_size == FontSize::Inherit {
            parent.font_size
        } else {
            child.font_size
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        helpers::destroy_length_if(r, |v| v == FONT_SIZE_SET)
    }
}

pub mod clip {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = Clip::Inherit;
        if !opv.is_inherit() {
            let v = opv.value();
            if v == CLIP_AUTO {
                value = Clip::Auto;
            } else if (v & CLIP_SHAPE_MASK) == CLIP_SHAPE_RECT {
                let mut rect = ClipRect::default();
                let sides: [(&mut ClipSide, u16); 4] = [
                    (&mut rect.top, CLIP_RECT_TOP_AUTO),
                    (&mut rect.right, CLIP_RECT_RIGHT_AUTO),
                    (&mut rect.bottom, CLIP_RECT_BOTTOM_AUTO),
                    (&mut rect.left, CLIP_RECT_LEFT_AUTO),
                ];
                for (side, auto_bit) in sides {
                    if v & auto_bit == 0 {
                        let length = r.read_fixed()?;
                        let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                        *side = ClipSide::Set(length, unit);
                    }
                }
                value = Clip::Rect(rect);
            } else {
                return Err(Error::Invalid);
            }
        }
        if state.outranks_existing(opv) {
            state.computed.clip = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.clip = Clip::Auto;
        Ok(())
    }

    pub fn set_from_hint(hint: Clip, style: &mut ComputedStyle) -> Result<()> {
        style.clip = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.clip = if child.clip == Clip::Inherit {
            parent.clip
        } else {
            child.clip
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        let opv = r.read_opv()?;
        let mut consumed = OPV_SIZE;
        let v = opv.value();
        if !opv.is_inherit() && (v & CLIP_SHAPE_MASK) == CLIP_SHAPE_RECT {
            for auto_bit in [
                CLIP_RECT_TOP_AUTO,
                CLIP_RECT_RIGHT_AUTO,
                CLIP_RECT_BOTTOM_AUTO,
                CLIP_RECT_LEFT_AUTO,
            ] {
                if v & auto_bit == 0 {
                    r.read_fixed()?;
                    r.read_unit()?;
                    consumed += FIXED_SIZE + UNIT_SIZE;
                }
            }
        }
        Ok(consumed)
    }
}

pub mod background_position {
    use super::*;

    fn axis(r: &mut StyleReader<'_>, v: u16) -> Result<(Fixed, CssUnit)> {
        Ok(match v {
            BACKGROUND_POSITION_SET => {
                let length = r.read_fixed()?;
                let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                (length, unit)
            }
            BACKGROUND_POSITION_CENTER => (Fixed::from_int(50), CssUnit::Pct),
            BACKGROUND_POSITION_MIN => (Fixed::ZERO, CssUnit::Pct),
            BACKGROUND_POSITION_MAX => (Fixed::from_int(100), CssUnit::Pct),
            _ => return Err(Error::Invalid),
        })
    }

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = BackgroundPosition::Inherit;
        if !opv.is_inherit() {
            let v = opv.value();
            let horz = axis(r, (v >> BACKGROUND_POSITION_HORZ_SHIFT) & BACKGROUND_POSITION_AXIS_MASK)?;
            let vert = axis(r, v & BACKGROUND_POSITION_AXIS_MASK)?;
            value = BackgroundPosition::Set { horz, vert };
        }
        if state.outranks_existing(opv) {
            state.computed.background_position = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.background_position = BackgroundPosition::Set {
            horz: (Fixed::ZERO, CssUnit::Pct),
            vert: (Fixed::ZERO, CssUnit::Pct),
        };
        Ok(())
    }

    pub fn set_from_hint(hint: BackgroundPosition, style: &mut ComputedStyle) -> Result<()> {
        style.background_position = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.background_position = if child.background_position == BackgroundPosition::Inherit {
            parent.background_position
        } else {
            child.background_position
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        let opv = r.read_opv()?;
        let mut consumed = OPV_SIZE;
        if !opv.is_inherit() {
            let v = opv.value();
            for axis in [
                (v >> BACKGROUND_POSITION_HORZ_SHIFT) & BACKGROUND_POSITION_AXIS_MASK,
                v & BACKGROUND_POSITION_AXIS_MASK,
            ] {
                if axis == BACKGROUND_POSITION_SET {
                    r.read_fixed()?;
                    r.read_unit()?;
                    consumed += FIXED_SIZE + UNIT_SIZE;
                }
            }
        }
        Ok(consumed)
    }
}

pub mod border_spacing {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = BorderSpacing::Inherit;
        if !opv.is_inherit() {
            if opv.value() != LENGTH_SET {
                return Err(Error::Invalid);
            }
            let horz = r.read_fixed()?;
            let horz_unit = crate::bytecode::to_css_unit(r.read_unit()?);
            let vert = r.read_fixed()?;
            let vert_unit = crate::bytecode::to_css_unit(r.read_unit()?);
            value = BorderSpacing::Set(horz, horz_unit, vert, vert_unit);
        }
        if state.outranks_existing(opv) {
            state.computed.border_spacing = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.border_spacing =
            BorderSpacing::Set(Fixed::ZERO, CssUnit::Px, Fixed::ZERO, CssUnit::Px);
        Ok(())
    }

    pub fn set_from_hint(hint: BorderSpacing, style: &mut ComputedStyle) -> Result<()> {
        style.border_spacing = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.border_spacing = if child.border_spacing == BorderSpacing::Inherit {
            parent.border_spacing
        } else {
            child.border_spacing
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        let opv = r.read_opv()?;
        if !opv.is_inherit() && opv.value() == LENGTH_SET {
            r.read_fixed()?;
            r.read_unit()?;
            r.read_fixed()?;
            r.read_unit()?;
            return Ok(OPV_SIZE + 2 * (FIXED_SIZE + UNIT_SIZE));
        }
        Ok(OPV_SIZE)
    }
}

pub mod cursor {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = Cursor::Inherit;
        if !opv.is_inherit() {
            let mut uris: Vec<StringHandle> = Vec::new();
            let mut v = opv.value();
            while v == CURSOR_URI {
                uris.try_reserve(1).map_err(|_| Error::NoMemory)?;
                uris.push(r.read_string()?);
                v = r.read_word()? as u16;
            }
            let kind = CursorKind::from_value(v).ok_or(Error::Invalid)?;
            value = Cursor::Set(uris, kind);
        }
        if state.outranks_existing(opv) {
            let interner = state.interner;
            state.computed.set_cursor(interner, value);
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state
            .computed
            .set_cursor(interner, Cursor::Set(Vec::new(), CursorKind::Auto));
        Ok(())
    }

    pub fn set_from_hint(
        hint: Cursor,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_cursor(interner, hint);
        Ok(())
    }

    list_compose!(cursor, set_cursor, Cursor);

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        helpers::destroy_cursor(r, interner)
    }
}

pub mod font_family {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = FontFamily::Inherit;
        if !opv.is_inherit() {
            let mut names: Vec<FamilyName> = Vec::new();
            let mut v = opv.value();
            loop {
                let name = match v {
                    FONT_FAMILY_STRING | FONT_FAMILY_IDENT_LIST => {
                        FamilyName::Named(r.read_string()?)
                    }
                    FONT_FAMILY_SERIF => FamilyName::Serif,
                    FONT_FAMILY_SANS_SERIF => FamilyName::SansSerif,
                    FONT_FAMILY_CURSIVE => FamilyName::Cursive,
                    FONT_FAMILY_FANTASY => FamilyName::Fantasy,
                    FONT_FAMILY_MONOSPACE => FamilyName::Monospace,
                    _ => return Err(Error::Invalid),
                };
                names.try_reserve(1).map_err(|_| Error::NoMemory)?;
                names.push(name);

                v = r.read_word()? as u16;
                if v == FONT_FAMILY_END {
                    break;
                }
            }
            value = FontFamily::Set(names);
        }
        if state.outranks_existing(opv) {
            let interner = state.interner;
            state.computed.set_font_family(interner, value);
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state
            .computed
            .set_font_family(interner, FontFamily::Set(Vec::new()));
        Ok(())
    }

    pub fn set_from_hint(
        hint: FontFamily,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_font_family(interner, hint);
        Ok(())
    }

    list_compose!(font_family, set_font_family, FontFamily);

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        helpers::destroy_name_list(
            r,
            interner,
            FONT_FAMILY_STRING,
            FONT_FAMILY_IDENT_LIST,
            FONT_FAMILY_END,
        )
    }
}

pub mod voice_family {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = VoiceFamily::Inherit;
        if !opv.is_inherit() {
            let mut names: Vec<VoiceName> = Vec::new();
            let mut v = opv.value();
            loop {
                let name = match v {
                    VOICE_FAMILY_STRING | VOICE_FAMILY_IDENT_LIST => {
                        VoiceName::Named(r.read_string()?)
                    }
                    VOICE_FAMILY_MALE => VoiceName::Male,
                    VOICE_FAMILY_FEMALE => VoiceName::Female,
                    VOICE_FAMILY_CHILD => VoiceName::Child,
                    _ => return Err(Error::Invalid),
                };
                names.try_reserve(1).map_err(|_| Error::NoMemory)?;
                names.push(name);

                v = r.read_word()? as u16;
                if v == VOICE_FAMILY_END {
                    break;
                }
            }
            value = VoiceFamily::Set(names);
        }
        if state.outranks_existing(opv) {
            let interner = state.interner;
            state.computed.set_voice_family(interner, value);
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state
            .computed
            .set_voice_family(interner, VoiceFamily::Set(Vec::new()));
        Ok(())
    }

    pub fn set_from_hint(
        hint: VoiceFamily,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_voice_family(interner, hint);
        Ok(())
    }

    list_compose!(voice_family, set_voice_family, VoiceFamily);

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        helpers::destroy_name_list(
            r,
            interner,
            VOICE_FAMILY_STRING,
            VOICE_FAMILY_IDENT_LIST,
            VOICE_FAMILY_END,
        )
    }
}

pub mod quotes {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = Quotes::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                QUOTES_NONE => Quotes::None,
                QUOTES_STRING => {
                    let mut pairs: Vec<(StringHandle, StringHandle)> = Vec::new();
                    loop {
                        pairs.try_reserve(1).map_err(|_| Error::NoMemory)?;
                        let open = r.read_string()?;
                        let close = r.read_string()?;
                        pairs.push((open, close));

                        match r.read_word()? as u16 {
                            QUOTES_NONE => break,
                            QUOTES_STRING => {}
                            _ => return Err(Error::Invalid),
                        }
                    }
                    Quotes::Set(pairs)
                }
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            let interner = state.interner;
            state.computed.set_quotes(interner, value);
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state.computed.set_quotes(interner, Quotes::None);
        Ok(())
    }

    pub fn set_from_hint(
        hint: Quotes,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_quotes(interner, hint);
        Ok(())
    }

    list_compose!(quotes, set_quotes, Quotes);

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        helpers::destroy_quotes(r, interner)
    }
}

pub mod content {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        helpers::cascade_content(opv, r, state)
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state.computed.set_content(interner, Content::Normal);
        Ok(())
    }

    pub fn set_from_hint(
        hint: Content,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_content(interner, hint);
        Ok(())
    }

    list_compose!(content, set_content, Content);

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        helpers::destroy_content(r, interner)
    }
}

pub mod counter_increment {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        helpers::cascade_counter_list(opv, r, state, |c, i, v| c.set_counter_increment(i, v))
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state
            .computed
            .set_counter_increment(interner, CounterList::None);
        Ok(())
    }

    pub fn set_from_hint(
        hint: CounterList,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_counter_increment(interner, hint);
        Ok(())
    }

    list_compose!(counter_increment, set_counter_increment, CounterList);

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        helpers::destroy_counter_list(r, interner)
    }
}

pub mod counter_reset {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        helpers::cascade_counter_list(opv, r, state, |c, i, v| c.set_counter_reset(i, v))
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state.computed.set_counter_reset(interner, CounterList::None);
        Ok(())
    }

    pub fn set_from_hint(
        hint: CounterList,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_counter_reset(interner, hint);
        Ok(())
    }

    list_compose!(counter_reset, set_counter_reset, CounterList);

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        helpers::destroy_counter_list(r, interner)
    }
}

pub mod play_during {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = PlayDuring::Inherit;
        if !opv.is_inherit() {
            let v = opv.value();
            value = match v & PLAY_DURING_TYPE_MASK {
                PLAY_DURING_AUTO => PlayDuring::Auto,
                PLAY_DURING_NONE => PlayDuring::None,
                PLAY_DURING_URI => PlayDuring::Uri {
                    uri: r.read_string()?,
                    mix: v & PLAY_DURING_MIX != 0,
                    repeat: v & PLAY_DURING_REPEAT != 0,
                },
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            let interner = state.interner;
            state.computed.set_play_during(interner, value);
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        let interner = state.interner;
        state.computed.set_play_during(interner, PlayDuring::Auto);
        Ok(())
    }

    pub fn set_from_hint(
        hint: PlayDuring,
        style: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        style.set_play_during(interner, hint);
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        interner: &Interner,
    ) -> Result<()> {
        let chosen = if child.play_during == PlayDuring::Inherit {
            parent.play_during
        } else {
            child.play_during
        };
        result.set_play_during(interner, chosen);
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, interner: &Interner) -> Result<usize> {
        let opv = r.read_opv()?;
        if !opv.is_inherit() && (opv.value() & PLAY_DURING_TYPE_MASK) == PLAY_DURING_URI {
            interner.release(r.read_string()?);
            return Ok(OPV_SIZE + HANDLE_SIZE);
        }
        Ok(OPV_SIZE)
    }
}

pub mod azimuth {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = Azimuth::Inherit;
        if !opv.is_inherit() {
            let v = opv.value();
            value = match v {
                AZIMUTH_ANGLE_SET => {
                    let angle = r.read_fixed()?;
                    let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                    Azimuth::Angle(angle, unit)
                }
                AZIMUTH_LEFTWARDS => Azimuth::Leftwards,
                AZIMUTH_RIGHTWARDS => Azimuth::Rightwards,
                _ => {
                    let direction = AzimuthDirection::from_value(v & AZIMUTH_DIRECTION_MASK)
                        .ok_or(Error::Invalid)?;
                    Azimuth::Position {
                        direction,
                        behind: v & AZIMUTH_BEHIND != 0,
                    }
                }
            };
        }
        if state.outranks_existing(opv) {
            state.computed.azimuth = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.azimuth = Azimuth::Position {
            direction: AzimuthDirection::Center,
            behind: false,
        };
        Ok(())
    }

    pub fn set_from_hint(hint: Azimuth, style: &mut ComputedStyle) -> Result<()> {
        style.azimuth = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.azimuth = if child.azimuth == Azimuth::Inherit {
            parent.azimuth
        } else {
            child.azimuth
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        helpers::destroy_length_if(r, |v| v == AZIMUTH_ANGLE_SET)
    }
}

pub mod elevation {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = Elevation::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                ELEVATION_ANGLE_SET => {
                    let angle = r.read_fixed()?;
                    let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                    Elevation::Angle(angle, unit)
                }
                ELEVATION_BELOW => Elevation::Below,
                ELEVATION_LEVEL => Elevation::Level,
                ELEVATION_ABOVE => Elevation::Above,
                ELEVATION_HIGHER => Elevation::Higher,
                ELEVATION_LOWER => Elevation::Lower,
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.elevation = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.elevation = Elevation::Level;
        Ok(())
    }

    pub fn set_from_hint(hint: Elevation, style: &mut ComputedStyle) -> Result<()> {
        style.elevation = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.elevation = if child.elevation == Elevation::Inherit {
            parent.elevation
        } else {
            child.elevation
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        helpers::destroy_length_if(r, |v| v == ELEVATION_ANGLE_SET)
    }
}

pub mod pitch {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = Pitch::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                PITCH_FREQUENCY_SET => {
                    let freq = r.read_fixed()?;
                    let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                    Pitch::Frequency(freq, unit)
                }
                PITCH_X_LOW => Pitch::XLow,
                PITCH_LOW => Pitch::Low,
                PITCH_MEDIUM => Pitch::Medium,
                PITCH_HIGH => Pitch::High,
                PITCH_X_HIGH => Pitch::XHigh,
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.pitch = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.pitch = Pitch::Medium;
        Ok(())
    }

    pub fn set_from_hint(hint: Pitch, style: &mut ComputedStyle) -> Result<()> {
        style.pitch = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.pitch = if child.pitch == Pitch::Inherit {
            parent.pitch
        } else {
            child.pitch
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        helpers::destroy_length_if(r, |v| v == PITCH_FREQUENCY_SET)
    }
}

pub mod speech_rate {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = SpeechRate::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                SPEECH_RATE_SET => SpeechRate::Set(r.read_fixed()?),
                SPEECH_RATE_X_SLOW => SpeechRate::XSlow,
                SPEECH_RATE_SLOW => SpeechRate::Slow,
                SPEECH_RATE_MEDIUM => SpeechRate::Medium,
                SPEECH_RATE_FAST => SpeechRate::Fast,
                SPEECH_RATE_X_FAST => SpeechRate::XFast,
                SPEECH_RATE_FASTER => SpeechRate::Faster,
                SPEECH_RATE_SLOWER => SpeechRate::Slower,
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.speech_rate = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.speech_rate = SpeechRate::Medium;
        Ok(())
    }

    pub fn set_from_hint(hint: SpeechRate, style: &mut ComputedStyle) -> Result<()> {
        style.speech_rate = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.speech_rate = if child.speech_rate == SpeechRate::Inherit {
            parent.speech_rate
        } else {
            child.speech_rate
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        helpers::destroy_number_if(r, |v| v == SPEECH_RATE_SET)
    }
}

pub mod volume {
    use super::*;

    pub fn cascade(opv: Opv, r: &mut StyleReader<'_>, state: &mut CascadeState<'_>) -> Result<()> {
        let mut value = Volume::Inherit;
        if !opv.is_inherit() {
            value = match opv.value() {
                VOLUME_NUMBER => Volume::Number(r.read_fixed()?),
                VOLUME_DIMENSION => {
                    let level = r.read_fixed()?;
                    let unit = crate::bytecode::to_css_unit(r.read_unit()?);
                    Volume::Dimension(level, unit)
                }
                VOLUME_SILENT => Volume::Silent,
                VOLUME_X_SOFT => Volume::XSoft,
                VOLUME_SOFT => Volume::Soft,
                VOLUME_MEDIUM => Volume::Medium,
                VOLUME_LOUD => Volume::Loud,
                VOLUME_X_LOUD => Volume::XLoud,
                _ => return Err(Error::Invalid),
            };
        }
        if state.outranks_existing(opv) {
            state.computed.volume = value;
        }
        Ok(())
    }

    pub fn initial(state: &mut CascadeState<'_>) -> Result<()> {
        state.computed.volume = Volume::Medium;
        Ok(())
    }

    pub fn set_from_hint(hint: Volume, style: &mut ComputedStyle) -> Result<()> {
        style.volume = hint;
        Ok(())
    }

    pub fn compose(
        parent: &ComputedStyle,
        child: &ComputedStyle,
        result: &mut ComputedStyle,
        _interner: &Interner,
    ) -> Result<()> {
        result.volume = if child.volume == Volume::Inherit {
            parent.volume
        } else {
            child.volume
        };
        Ok(())
    }

    pub fn destroy(r: &mut StyleReader<'_>, _interner: &Interner) -> Result<usize> {
        let opv = r.read_opv()?;
        if opv.is_inherit() {
            return Ok(OPV_SIZE);
        }
        match opv.value() {
            VOLUME_NUMBER => {
                r.read_fixed()?;
                Ok(OPV_SIZE + FIXED_SIZE)
            }
            VOLUME_DIMENSION => {
                r.read_fixed()?;
                r.read_unit()?;
                Ok(OPV_SIZE + FIXED_SIZE + UNIT_SIZE)
            }
            _ => Ok(OPV_SIZE),
        }
    }
}

// ============================================================================
// Dispatch table
// ============================================================================

macro_rules! ops_entry {
    ($m:ident) => {
        PropOps {
            cascade: $m::cascade,
            initial: $m::initial,
            compose: $m::compose,
            destroy: $m::destroy,
        }
    };
}

static PROP_OPS: [PropOps; PropertyId::COUNT] = [
    ops_entry!(azimuth),
    ops_entry!(background_attachment),
    ops_entry!(background_color),
    ops_entry!(background_image),
    ops_entry!(background_position),
    ops_entry!(background_repeat),
    ops_entry!(border_bottom_color),
    ops_entry!(border_bottom_style),
    ops_entry!(border_bottom_width),
    ops_entry!(border_collapse),
    ops_entry!(border_left_color),
    ops_entry!(border_left_style),
    ops_entry!(border_left_width),
    ops_entry!(border_right_color),
    ops_entry!(border_right_style),
    ops_entry!(border_right_width),
    ops_entry!(border_spacing),
    ops_entry!(border_top_color),
    ops_entry!(border_top_style),
    ops_entry!(border_top_width),
    ops_entry!(bottom),
    ops_entry!(caption_side),
    ops_entry!(clear),
    ops_entry!(clip),
    ops_entry!(color),
    ops_entry!(content),
    ops_entry!(counter_increment),
    ops_entry!(counter_reset),
    ops_entry!(cue_after),
    ops_entry!(cue_before),
    ops_entry!(cursor),
    ops_entry!(direction),
    ops_entry!(display),
    ops_entry!(elevation),
    ops_entry!(empty_cells),
    ops_entry!(float),
    ops_entry!(font_family),
    ops_entry!(font_size),
    ops_entry!(font_style),
    ops_entry!(font_variant),
    ops_entry!(font_weight),
    ops_entry!(height),
    ops_entry!(left),
    ops_entry!(letter_spacing),
    ops_entry!(line_height),
    ops_entry!(list_style_image),
    ops_entry!(list_style_position),
    ops_entry!(list_style_type),
    ops_entry!(margin_bottom),
    ops_entry!(margin_left),
    ops_entry!(margin_right),
    ops_entry!(margin_top),
    ops_entry!(max_height),
    ops_entry!(max_width),
    ops_entry!(min_height),
    ops_entry!(min_width),
    ops_entry!(orphans),
    ops_entry!(outline_color),
    ops_entry!(outline_style),
    ops_entry!(outline_width),
    ops_entry!(overflow),
    ops_entry!(padding_bottom),
    ops_entry!(padding_left),
    ops_entry!(padding_right),
    ops_entry!(padding_top),
    ops_entry!(page_break_after),
    ops_entry!(page_break_before),
    ops_entry!(page_break_inside),
    ops_entry!(pause_after),
    ops_entry!(pause_before),
    ops_entry!(pitch_range),
    ops_entry!(pitch),
    ops_entry!(play_during),
    ops_entry!(position),
    ops_entry!(quotes),
    ops_entry!(richness),
    ops_entry!(right),
    ops_entry!(speak_header),
    ops_entry!(speak_numeral),
    ops_entry!(speak_punctuation),
    ops_entry!(speak),
    ops_entry!(speech_rate),
    ops_entry!(stress),
    ops_entry!(table_layout),
    ops_entry!(text_align),
    ops_entry!(text_decoration),
    ops_entry!(text_indent),
    ops_entry!(text_transform),
    ops_entry!(top),
    ops_entry!(unicode_bidi),
    ops_entry!(vertical_align),
    ops_entry!(visibility),
    ops_entry!(voice_family),
    ops_entry!(volume),
    ops_entry!(white_space),
    ops_entry!(widows),
    ops_entry!(width),
    ops_entry!(word_spacing),
    ops_entry!(z_index),
];
