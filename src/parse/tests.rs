//! Parser tests: bytecode layout, cursor restoration, unit and negative
//! rejection, `!important` handling, list termination.

use crate::bytecode::{PropertyId, Style, UnitMask};
use crate::error::Error;
use crate::fixed::Fixed;
use crate::intern::Interner;
use crate::parse::{ParseContext, parse_declaration, parse_property};
use crate::testing::tokenize;
use crate::tokens::TokenStream;
use crate::values::*;

fn parse(
    ctx: &ParseContext<'_>,
    prop: PropertyId,
    css: &str,
) -> crate::error::Result<Style> {
    let tokens = tokenize(ctx.interner, css).unwrap();
    parse_declaration(ctx, prop, &tokens)
}

#[test]
fn keyword_property_emits_opv_only() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Display, "table-cell").unwrap();
    assert_eq!(style.len(), 4);

    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(opv.opcode(), Some(PropertyId::Display));
    assert_eq!(Display::from_value(opv.value()), Some(Display::TableCell));
    assert!(!opv.is_inherit());
    assert!(!opv.is_important());
}

#[test]
fn inherit_has_no_payload() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    for prop in [
        PropertyId::Width,
        PropertyId::Color,
        PropertyId::FontFamily,
        PropertyId::Content,
        PropertyId::Cursor,
        PropertyId::Clip,
    ] {
        let style = parse(&ctx, prop, "inherit").unwrap();
        assert_eq!(style.len(), 4, "{prop:?} inherit entry must be OPV only");
        let opv = style.reader().read_opv().unwrap();
        assert!(opv.is_inherit());
    }
}

#[test]
fn mixed_case_keywords_match_by_lowercase_handle() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Clear, "BOTH").unwrap();
    let opv = style.reader().read_opv().unwrap();
    assert_eq!(Clear::from_value(opv.value()), Some(Clear::Both));

    let style = parse(&ctx, PropertyId::Width, "INHERIT").unwrap();
    assert!(style.reader().read_opv().unwrap().is_inherit());
}

#[test]
fn width_set_layout() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Width, "100px").unwrap();
    assert_eq!(style.len(), 12);

    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(opv.opcode(), Some(PropertyId::Width));
    assert_eq!(opv.value(), LENGTH_SET);
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(100));
    assert_eq!(r.read_unit().unwrap(), UnitMask::PX);
    assert!(r.at_end());
}

#[test]
fn negative_lengths_rejected_where_css_forbids() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    for prop in [
        PropertyId::Width,
        PropertyId::Height,
        PropertyId::MinWidth,
        PropertyId::MinHeight,
        PropertyId::MaxWidth,
        PropertyId::MaxHeight,
        PropertyId::PaddingLeft,
        PropertyId::FontSize,
        PropertyId::BorderTopWidth,
    ] {
        assert_eq!(parse(&ctx, prop, "-1px").unwrap_err(), Error::Invalid);
    }

    // text-indent and margins allow negative lengths.
    assert!(parse(&ctx, PropertyId::TextIndent, "-1px").is_ok());
    assert!(parse(&ctx, PropertyId::MarginLeft, "-1px").is_ok());
}

#[test]
fn negative_line_height_number_rejected() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    assert_eq!(
        parse(&ctx, PropertyId::LineHeight, "-1.5").unwrap_err(),
        Error::Invalid
    );
    let style = parse(&ctx, PropertyId::LineHeight, "1.5").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), LINE_HEIGHT_NUMBER);
    assert_eq!(r.read_fixed().unwrap().raw(), (1 << 10) + 512);
    assert!(r.at_end());
}

#[test]
fn unit_classes_rejected_in_length_contexts() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    for unit in ["10deg", "10ms", "10khz"] {
        assert_eq!(parse(&ctx, PropertyId::Width, unit).unwrap_err(), Error::Invalid);
        assert_eq!(parse(&ctx, PropertyId::Clip, &format!("rect({unit}, auto, auto, auto)"))
            .unwrap_err(), Error::Invalid);
    }

    // Percentages are additionally rejected where only lengths are allowed.
    assert_eq!(
        parse(&ctx, PropertyId::LetterSpacing, "10%").unwrap_err(),
        Error::Invalid
    );
    assert_eq!(
        parse(&ctx, PropertyId::WordSpacing, "10%").unwrap_err(),
        Error::Invalid
    );
    assert_eq!(
        parse(&ctx, PropertyId::BorderLeftWidth, "10%").unwrap_err(),
        Error::Invalid
    );
    assert!(parse(&ctx, PropertyId::Width, "10%").is_ok());
}

#[test]
fn cursor_restored_on_failure() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    for (prop, css) in [
        (PropertyId::Width, "-1px"),
        (PropertyId::Display, "bogus"),
        (PropertyId::Clip, "rect(1px, 2px"),
        (PropertyId::FontFamily, "serif,"),
        (PropertyId::Cursor, "url(a) pointer"),
        (PropertyId::TextDecoration, "underline underline"),
        (PropertyId::Color, "#zz0000"),
    ] {
        let tokens = tokenize(&interner, css).unwrap();
        let mut ts = TokenStream::new(&tokens);
        ts.consume_whitespace();
        let entry = ts.pos();
        assert!(parse_property(&ctx, prop, &mut ts).is_err(), "{prop:?}: {css}");
        assert_eq!(ts.pos(), entry, "{prop:?}: cursor must be restored");
    }
}

#[test]
fn important_flag() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Color, "#ff0000 !important").unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert!(opv.is_important());
    assert_eq!(opv.value(), COLOR_SET);
    assert_eq!(r.read_color().unwrap(), 0xff00_00ff);
    assert!(r.at_end());

    // No whitespace around the bang.
    let style = parse(&ctx, PropertyId::Color, "red !important").unwrap();
    assert!(style.reader().read_opv().unwrap().is_important());

    // A malformed suffix is a hard failure.
    assert_eq!(
        parse(&ctx, PropertyId::Color, "red !importan").unwrap_err(),
        Error::Invalid
    );
    assert_eq!(parse(&ctx, PropertyId::Color, "red !").unwrap_err(), Error::Invalid);
}

#[test]
fn trailing_tokens_invalidate_the_declaration() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    assert_eq!(
        parse(&ctx, PropertyId::Width, "100px 50px").unwrap_err(),
        Error::Invalid
    );
    assert_eq!(
        parse(&ctx, PropertyId::Display, "block flow").unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn clip_rect_auto_slots() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Clip, "rect(auto, 10px, 20px, auto)").unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(
        opv.value(),
        CLIP_SHAPE_RECT | CLIP_RECT_TOP_AUTO | CLIP_RECT_LEFT_AUTO
    );
    // Operands 2 and 3 in source order.
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(10));
    assert_eq!(r.read_unit().unwrap(), UnitMask::PX);
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(20));
    assert_eq!(r.read_unit().unwrap(), UnitMask::PX);
    assert!(r.at_end());

    // Percentages are not valid rect operands.
    assert_eq!(
        parse(&ctx, PropertyId::Clip, "rect(10%, auto, auto, auto)").unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn cursor_uri_list_layout() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Cursor, "url(a), url(b), pointer").unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(opv.value(), CURSOR_URI);
    let a = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(a), "a");
    assert_eq!(r.read_word().unwrap() as u16, CURSOR_URI);
    let b = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(b), "b");
    // Terminating keyword OPV: pointer.
    assert_eq!(r.read_word().unwrap() as u16, 0x4);
    assert!(r.at_end());

    // The buffer owns one reference per URI occurrence.
    assert_eq!(interner.ref_count(a), 2);

    // A lone keyword collapses to a single OPV.
    let style = parse(&ctx, PropertyId::Cursor, "wait").unwrap();
    assert_eq!(style.len(), 4);

    // A URI without a terminating keyword is invalid.
    assert_eq!(parse(&ctx, PropertyId::Cursor, "url(a)").unwrap_err(), Error::Invalid);
    assert_eq!(
        parse(&ctx, PropertyId::Cursor, "url(a), url(b)").unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn font_family_list_layout() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::FontFamily, r#""Foo", Bar Baz, serif"#).unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(opv.value(), FONT_FAMILY_STRING);
    let foo = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(foo), "Foo");
    assert_eq!(r.read_word().unwrap() as u16, FONT_FAMILY_IDENT_LIST);
    let bar = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(bar), "Bar Baz");
    assert_eq!(r.read_word().unwrap() as u16, FONT_FAMILY_SERIF);
    assert_eq!(r.read_word().unwrap() as u16, FONT_FAMILY_END);
    assert!(r.at_end());

    // The joined name is owned by the buffer alone.
    assert_eq!(interner.ref_count(bar), 1);
}

#[test]
fn font_family_generic_is_caseless_via_lower_handle() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::FontFamily, "SERIF").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), FONT_FAMILY_SERIF);
    assert_eq!(r.read_word().unwrap() as u16, FONT_FAMILY_END);
    assert!(r.at_end());
}

#[test]
fn voice_family_generics() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::VoiceFamily, "paul, male").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), VOICE_FAMILY_IDENT_LIST);
    let paul = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(paul), "paul");
    assert_eq!(r.read_word().unwrap() as u16, VOICE_FAMILY_MALE);
    assert_eq!(r.read_word().unwrap() as u16, VOICE_FAMILY_END);
    assert!(r.at_end());
}

#[test]
fn text_decoration_flags_and_duplicates() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::TextDecoration, "underline overline").unwrap();
    let opv = style.reader().read_opv().unwrap();
    assert_eq!(
        opv.value(),
        TEXT_DECORATION_UNDERLINE | TEXT_DECORATION_OVERLINE
    );

    assert_eq!(
        parse(&ctx, PropertyId::TextDecoration, "underline overline underline").unwrap_err(),
        Error::Invalid
    );

    let style = parse(&ctx, PropertyId::TextDecoration, "none").unwrap();
    assert_eq!(style.reader().read_opv().unwrap().value(), TEXT_DECORATION_NONE);
}

#[test]
fn content_list_layout() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(
        &ctx,
        PropertyId::Content,
        r#"open-quote "a" counters(item, ".", lower-roman)"#,
    )
    .unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(opv.value(), CONTENT_OPEN_QUOTE);

    assert_eq!(r.read_word().unwrap() as u16, CONTENT_STRING);
    let a = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(a), "a");

    let word = r.read_word().unwrap() as u16;
    assert_eq!(word & CONTENT_KIND_MASK, CONTENT_COUNTERS);
    assert_eq!(
        ListStyleType::from_value(word >> CONTENT_COUNTER_STYLE_SHIFT),
        Some(ListStyleType::LowerRoman)
    );
    let name = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(name), "item");
    let sep = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(sep), ".");

    assert_eq!(r.read_word().unwrap() as u16, CONTENT_NONE);
    assert!(r.at_end());
}

#[test]
fn content_counter_defaults_to_decimal() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Content, "counter(section)").unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(opv.value() & CONTENT_KIND_MASK, CONTENT_COUNTER);
    assert_eq!(
        ListStyleType::from_value(opv.value() >> CONTENT_COUNTER_STYLE_SHIFT),
        Some(ListStyleType::Decimal)
    );
    r.read_string().unwrap();
    assert_eq!(r.read_word().unwrap() as u16, CONTENT_NONE);
    assert!(r.at_end());
}

#[test]
fn counter_increment_layout() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::CounterIncrement, "chapter 2 section").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), COUNTER_NAMED);

    let chapter = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(chapter), "chapter");
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(2));
    assert_eq!(r.read_word().unwrap() as u16, COUNTER_NAMED);

    let section = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(section), "section");
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(1));
    assert_eq!(r.read_word().unwrap() as u16, COUNTER_NONE);
    assert!(r.at_end());
}

#[test]
fn counter_reset_defaults_to_zero() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::CounterReset, "chapter").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), COUNTER_NAMED);
    r.read_string().unwrap();
    assert_eq!(r.read_fixed().unwrap(), Fixed::ZERO);
    assert_eq!(r.read_word().unwrap() as u16, COUNTER_NONE);
}

#[test]
fn quotes_pairs() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::Quotes, r#""<<" ">>" "<" ">""#).unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), QUOTES_STRING);
    r.read_string().unwrap();
    r.read_string().unwrap();
    assert_eq!(r.read_word().unwrap() as u16, QUOTES_STRING);
    r.read_string().unwrap();
    r.read_string().unwrap();
    assert_eq!(r.read_word().unwrap() as u16, QUOTES_NONE);
    assert!(r.at_end());

    // Quote marks come in pairs.
    assert_eq!(
        parse(&ctx, PropertyId::Quotes, r#""<<""#).unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn z_index_accepts_negative_integers() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::ZIndex, "-5").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), Z_INDEX_SET);
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(-5));

    assert_eq!(parse(&ctx, PropertyId::ZIndex, "1.5").unwrap_err(), Error::Invalid);
}

#[test]
fn background_position_normalizes_keywords() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    // A lone vertical keyword centers the horizontal axis.
    let style = parse(&ctx, PropertyId::BackgroundPosition, "top").unwrap();
    let opv = style.reader().read_opv().unwrap();
    assert_eq!(
        opv.value(),
        (BACKGROUND_POSITION_CENTER << BACKGROUND_POSITION_HORZ_SHIFT) | BACKGROUND_POSITION_MIN
    );

    // Keyword order is normalized to horizontal first.
    let style = parse(&ctx, PropertyId::BackgroundPosition, "bottom right").unwrap();
    let opv = style.reader().read_opv().unwrap();
    assert_eq!(
        opv.value(),
        (BACKGROUND_POSITION_MAX << BACKGROUND_POSITION_HORZ_SHIFT) | BACKGROUND_POSITION_MAX
    );

    // Lengths are positional: horizontal then vertical.
    let style = parse(&ctx, PropertyId::BackgroundPosition, "10px 20%").unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(
        opv.value(),
        (BACKGROUND_POSITION_SET << BACKGROUND_POSITION_HORZ_SHIFT) | BACKGROUND_POSITION_SET
    );
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(10));
    assert_eq!(r.read_unit().unwrap(), UnitMask::PX);
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(20));
    assert_eq!(r.read_unit().unwrap(), UnitMask::PCT);

    // Two keywords on the same axis are invalid.
    assert_eq!(
        parse(&ctx, PropertyId::BackgroundPosition, "left right").unwrap_err(),
        Error::Invalid
    );
    assert_eq!(
        parse(&ctx, PropertyId::BackgroundPosition, "top 10px").unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn aural_grammars() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    // azimuth: behind combines with a direction keyword in either order.
    let style = parse(&ctx, PropertyId::Azimuth, "behind far-right").unwrap();
    let opv = style.reader().read_opv().unwrap();
    assert_eq!(opv.value(), AZIMUTH_FAR_RIGHT | AZIMUTH_BEHIND);

    let style = parse(&ctx, PropertyId::Azimuth, "behind").unwrap();
    let opv = style.reader().read_opv().unwrap();
    assert_eq!(opv.value(), AZIMUTH_CENTER | AZIMUTH_BEHIND);

    let style = parse(&ctx, PropertyId::Azimuth, "30deg").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), AZIMUTH_ANGLE_SET);
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(30));
    assert_eq!(r.read_unit().unwrap(), UnitMask::DEG);

    // pitch wants a frequency.
    assert_eq!(parse(&ctx, PropertyId::Pitch, "10px").unwrap_err(), Error::Invalid);
    let style = parse(&ctx, PropertyId::Pitch, "120hz").unwrap();
    assert_eq!(style.reader().read_opv().unwrap().value(), PITCH_FREQUENCY_SET);

    // pause wants a time or percentage.
    assert_eq!(parse(&ctx, PropertyId::PauseAfter, "10px").unwrap_err(), Error::Invalid);
    assert!(parse(&ctx, PropertyId::PauseAfter, "200ms").is_ok());
    assert!(parse(&ctx, PropertyId::PauseAfter, "20%").is_ok());

    // play-during URI modifiers, each at most once.
    let style = parse(&ctx, PropertyId::PlayDuring, "url(bgm) mix repeat").unwrap();
    let mut r = style.reader();
    let opv = r.read_opv().unwrap();
    assert_eq!(opv.value() & PLAY_DURING_TYPE_MASK, PLAY_DURING_URI);
    assert_ne!(opv.value() & PLAY_DURING_MIX, 0);
    assert_ne!(opv.value() & PLAY_DURING_REPEAT, 0);
    r.read_string().unwrap();
    assert!(r.at_end());
    assert_eq!(
        parse(&ctx, PropertyId::PlayDuring, "url(bgm) mix mix").unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn border_spacing_one_or_two_lengths() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::BorderSpacing, "2px").unwrap();
    let mut r = style.reader();
    r.read_opv().unwrap();
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(2));
    assert_eq!(r.read_unit().unwrap(), UnitMask::PX);
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(2));
    assert_eq!(r.read_unit().unwrap(), UnitMask::PX);
    assert!(r.at_end());

    assert_eq!(
        parse(&ctx, PropertyId::BorderSpacing, "2px -1px").unwrap_err(),
        Error::Invalid
    );
    assert_eq!(
        parse(&ctx, PropertyId::BorderSpacing, "10%").unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn color_specifier_forms() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::BackgroundColor, "#abc").unwrap();
    let mut r = style.reader();
    r.read_opv().unwrap();
    assert_eq!(r.read_color().unwrap(), Color::rgb(0xaa, 0xbb, 0xcc).0);

    let style = parse(&ctx, PropertyId::Color, "rgb(255, 0, 10%)").unwrap();
    let mut r = style.reader();
    r.read_opv().unwrap();
    assert_eq!(r.read_color().unwrap(), Color::rgb(255, 0, 25).0);

    let style = parse(&ctx, PropertyId::BackgroundColor, "transparent").unwrap();
    assert_eq!(style.reader().read_opv().unwrap().value(), COLOR_TRANSPARENT);

    let style = parse(&ctx, PropertyId::OutlineColor, "invert").unwrap();
    assert_eq!(style.reader().read_opv().unwrap().value(), OUTLINE_COLOR_INVERT);

    // `transparent` is background/border only, `invert` is outline only.
    assert_eq!(parse(&ctx, PropertyId::Color, "transparent").unwrap_err(), Error::Invalid);
    assert_eq!(
        parse(&ctx, PropertyId::BackgroundColor, "invert").unwrap_err(),
        Error::Invalid
    );
}

#[test]
fn font_weight_numeric_values() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::FontWeight, "700").unwrap();
    assert_eq!(style.reader().read_opv().unwrap().value(), FONT_WEIGHT_700);

    assert_eq!(parse(&ctx, PropertyId::FontWeight, "750").unwrap_err(), Error::Invalid);
    assert_eq!(parse(&ctx, PropertyId::FontWeight, "70").unwrap_err(), Error::Invalid);
}

#[test]
fn vertical_align_keyword_or_length() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::VerticalAlign, "text-bottom").unwrap();
    assert_eq!(
        style.reader().read_opv().unwrap().value(),
        VERTICAL_ALIGN_TEXT_BOTTOM
    );

    // Negative offsets are legal here.
    let style = parse(&ctx, PropertyId::VerticalAlign, "-2px").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), VERTICAL_ALIGN_SET);
    assert_eq!(r.read_fixed().unwrap(), Fixed::from_int(-2));
}

#[test]
fn uri_properties() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let style = parse(&ctx, PropertyId::BackgroundImage, "url(bg.png)").unwrap();
    let mut r = style.reader();
    assert_eq!(r.read_opv().unwrap().value(), URI_SET);
    let uri = r.read_string().unwrap();
    assert_eq!(&*interner.resolve(uri), "bg.png");
    assert!(r.at_end());

    let style = parse(&ctx, PropertyId::ListStyleImage, "none").unwrap();
    assert_eq!(style.len(), 4);
    assert_eq!(style.reader().read_opv().unwrap().value(), URI_NONE);
}
