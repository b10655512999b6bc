//! Cascade tests: round-trips through the bytecode, precedence, inheritance
//! composition, destructors and reference counting.

use crate::bytecode::{CssUnit, PropertyId, Style};
use crate::cascade::{CascadeState, ComputedStyle, Origin, compose_styles, destroy_style};
use crate::fixed::Fixed;
use crate::intern::Interner;
use crate::parse::{ParseContext, parse_declaration};
use crate::testing::tokenize;
use crate::values::*;

fn parse(ctx: &ParseContext<'_>, prop: PropertyId, css: &str) -> Style {
    let tokens = tokenize(ctx.interner, css).unwrap();
    parse_declaration(ctx, prop, &tokens).unwrap()
}

/// Parse and cascade one author declaration into a fresh state.
fn cascade_one<'i>(ctx: &ParseContext<'i>, prop: PropertyId, css: &str) -> CascadeState<'i> {
    let style = parse(ctx, prop, css);
    let mut state = CascadeState::new(ctx.interner);
    state.cascade_style(&style, Origin::Author).unwrap();
    destroy_style(style, ctx.interner).unwrap();
    state
}

#[test]
fn width_round_trips() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let state = cascade_one(&ctx, PropertyId::Width, "100px");
    assert_eq!(
        state.computed.width,
        LengthAuto::Set(Fixed::from_int(100), CssUnit::Px)
    );

    let state = cascade_one(&ctx, PropertyId::Width, "auto");
    assert_eq!(state.computed.width, LengthAuto::Auto);
}

#[test]
fn color_round_trips() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let state = cascade_one(&ctx, PropertyId::Color, "#ff0000 !important");
    assert_eq!(
        state.computed.color,
        ColorValue::Color(Color::rgb(0xff, 0, 0))
    );
}

#[test]
fn keyword_round_trips() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let state = cascade_one(&ctx, PropertyId::Display, "table-row-group");
    assert_eq!(state.computed.display, Display::TableRowGroup);

    let state = cascade_one(&ctx, PropertyId::TextDecoration, "underline blink");
    assert_eq!(
        state.computed.text_decoration,
        TextDecoration::Set(DecorationFlags::UNDERLINE | DecorationFlags::BLINK)
    );
}

#[test]
fn clip_round_trips() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let state = cascade_one(&ctx, PropertyId::Clip, "rect(auto, 10px, 20px, auto)");
    assert_eq!(
        state.computed.clip,
        Clip::Rect(ClipRect {
            top: ClipSide::Auto,
            right: ClipSide::Set(Fixed::from_int(10), CssUnit::Px),
            bottom: ClipSide::Set(Fixed::from_int(20), CssUnit::Px),
            left: ClipSide::Auto,
        })
    );
}

#[test]
fn background_position_keywords_become_percentages() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let state = cascade_one(&ctx, PropertyId::BackgroundPosition, "right top");
    assert_eq!(
        state.computed.background_position,
        BackgroundPosition::Set {
            horz: (Fixed::from_int(100), CssUnit::Pct),
            vert: (Fixed::ZERO, CssUnit::Pct),
        }
    );
}

#[test]
fn font_family_round_trips() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let state = cascade_one(&ctx, PropertyId::FontFamily, r#""Foo", Bar Baz, serif"#);
    let FontFamily::Set(names) = &state.computed.font_family else {
        panic!("expected a family list");
    };
    assert_eq!(names.len(), 3);
    let FamilyName::Named(foo) = names[0] else {
        panic!("expected a named family");
    };
    assert_eq!(&*interner.resolve(foo), "Foo");
    let FamilyName::Named(bar) = names[1] else {
        panic!("expected a named family");
    };
    assert_eq!(&*interner.resolve(bar), "Bar Baz");
    assert_eq!(names[2], FamilyName::Serif);

    let mut state = state;
    state.computed.destroy(&interner);
}

#[test]
fn content_and_counters_round_trip() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let mut state = cascade_one(
        &ctx,
        PropertyId::Content,
        r#"counter(section, upper-roman) ". " open-quote"#,
    );
    let Content::Set(items) = &state.computed.content else {
        panic!("expected content items");
    };
    assert_eq!(items.len(), 3);
    assert!(matches!(
        items[0],
        ContentItem::Counter { style: ListStyleType::UpperRoman, .. }
    ));
    assert!(matches!(items[1], ContentItem::String(_)));
    assert_eq!(items[2], ContentItem::OpenQuote);
    state.computed.destroy(&interner);

    let mut state = cascade_one(&ctx, PropertyId::CounterIncrement, "chapter 2 section");
    let CounterList::Set(counters) = &state.computed.counter_increment else {
        panic!("expected counters");
    };
    assert_eq!(counters.len(), 2);
    assert_eq!(&*interner.resolve(counters[0].0), "chapter");
    assert_eq!(counters[0].1, Fixed::from_int(2));
    assert_eq!(counters[1].1, Fixed::from_int(1));
    state.computed.destroy(&interner);

    let state = cascade_one(&ctx, PropertyId::CounterIncrement, "none");
    assert_eq!(state.computed.counter_increment, CounterList::None);
}

#[test]
fn cursor_round_trips() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let mut state = cascade_one(&ctx, PropertyId::Cursor, "url(a), url(b), pointer");
    let Cursor::Set(uris, kind) = &state.computed.cursor else {
        panic!("expected a cursor list");
    };
    assert_eq!(uris.len(), 2);
    assert_eq!(*kind, CursorKind::Pointer);
    state.computed.destroy(&interner);
}

#[test]
fn important_outranks_later_normal() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let important = parse(&ctx, PropertyId::Width, "100px !important");
    let normal = parse(&ctx, PropertyId::Width, "50px");

    let mut state = CascadeState::new(&interner);
    state.cascade_style(&important, Origin::Author).unwrap();
    state.cascade_style(&normal, Origin::Author).unwrap();
    assert_eq!(
        state.computed.width,
        LengthAuto::Set(Fixed::from_int(100), CssUnit::Px)
    );

    destroy_style(important, &interner).unwrap();
    destroy_style(normal, &interner).unwrap();
}

#[test]
fn cascade_precedence_order() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    // user important beats author important; UA important beats both.
    let author = parse(&ctx, PropertyId::Display, "block !important");
    let user = parse(&ctx, PropertyId::Display, "inline-block !important");
    let ua = parse(&ctx, PropertyId::Display, "none !important");

    let mut state = CascadeState::new(&interner);
    state.cascade_style(&ua, Origin::UserAgent).unwrap();
    state.cascade_style(&user, Origin::User).unwrap();
    state.cascade_style(&author, Origin::Author).unwrap();
    assert_eq!(state.computed.display, Display::None);

    destroy_style(author, &interner).unwrap();
    destroy_style(user, &interner).unwrap();
    destroy_style(ua, &interner).unwrap();

    // For normal declarations, author wins over user and user agent.
    let author = parse(&ctx, PropertyId::Display, "block");
    let user = parse(&ctx, PropertyId::Display, "inline-block");
    let ua = parse(&ctx, PropertyId::Display, "none");

    let mut state = CascadeState::new(&interner);
    state.cascade_style(&author, Origin::Author).unwrap();
    state.cascade_style(&ua, Origin::UserAgent).unwrap();
    state.cascade_style(&user, Origin::User).unwrap();
    assert_eq!(state.computed.display, Display::Block);

    destroy_style(author, &interner).unwrap();
    destroy_style(user, &interner).unwrap();
    destroy_style(ua, &interner).unwrap();
}

#[test]
fn later_equal_declaration_wins() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let first = parse(&ctx, PropertyId::Width, "100px");
    let second = parse(&ctx, PropertyId::Width, "50px");

    let mut state = CascadeState::new(&interner);
    state.cascade_style(&first, Origin::Author).unwrap();
    state.cascade_style(&second, Origin::Author).unwrap();
    assert_eq!(
        state.computed.width,
        LengthAuto::Set(Fixed::from_int(50), CssUnit::Px)
    );

    destroy_style(first, &interner).unwrap();
    destroy_style(second, &interner).unwrap();
}

#[test]
fn losing_declaration_still_advances_the_cursor() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    // Two entries in one replay: an outranked width (payload must still be
    // consumed) followed by a display declaration that must decode cleanly.
    let important = parse(&ctx, PropertyId::Width, "100px !important");
    let later = parse(&ctx, PropertyId::Width, "50px");
    let display = parse(&ctx, PropertyId::Display, "block");

    let mut state = CascadeState::new(&interner);
    state.cascade_style(&important, Origin::Author).unwrap();
    state.cascade_style(&later, Origin::Author).unwrap();
    state.cascade_style(&display, Origin::Author).unwrap();

    assert_eq!(
        state.computed.width,
        LengthAuto::Set(Fixed::from_int(100), CssUnit::Px)
    );
    assert_eq!(state.computed.display, Display::Block);

    for style in [important, later, display] {
        destroy_style(style, &interner).unwrap();
    }
}

#[test]
fn finish_applies_initial_values_to_unset_properties() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let mut state = cascade_one(&ctx, PropertyId::Position, "absolute");
    state.finish().unwrap();

    assert_eq!(state.computed.position, Position::Absolute);
    assert_eq!(state.computed.display, Display::Inline);
    assert_eq!(state.computed.background_color, ColorValue::Transparent);
    assert_eq!(state.computed.border_top_width, BorderWidth::Medium);
    assert_eq!(
        state.computed.margin_left,
        LengthAuto::Set(Fixed::ZERO, CssUnit::Px)
    );
    // Inherited properties stay pending for composition.
    assert_eq!(state.computed.color, ColorValue::Inherit);
    assert_eq!(state.computed.font_family, FontFamily::Inherit);

    state.computed.destroy(&interner);
}

#[test]
fn explicit_inherit_survives_finish() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    // display is not an inherited property, but an explicit `inherit` must
    // stay pending rather than be replaced by the initial value.
    let mut state = cascade_one(&ctx, PropertyId::Display, "inherit");
    state.finish().unwrap();
    assert_eq!(state.computed.display, Display::Inherit);
}

#[test]
fn set_initial_values_covers_inherited_properties() {
    let interner = Interner::new();
    let mut state = CascadeState::new(&interner);
    state.set_initial_values().unwrap();

    assert_eq!(state.computed.color, ColorValue::Color(Color::BLACK));
    assert_eq!(state.computed.orphans, NumberValue::Set(Fixed::from_int(2)));
    assert_eq!(state.computed.font_size, FontSize::Medium);
    assert_eq!(state.computed.azimuth, Azimuth::Position {
        direction: AzimuthDirection::Center,
        behind: false,
    });
    assert_eq!(state.computed.cursor, Cursor::Set(Vec::new(), CursorKind::Auto));

    state.computed.destroy(&interner);
}

#[test]
fn compose_resolves_inheritance() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let mut parent = CascadeState::new(&interner);
    parent.set_initial_values().unwrap();
    let style = parse(&ctx, PropertyId::Width, "100px");
    parent.cascade_style(&style, Origin::Author).unwrap();
    destroy_style(style, &interner).unwrap();

    let child = cascade_one(&ctx, PropertyId::Width, "inherit");

    let mut result = ComputedStyle::new();
    compose_styles(&parent.computed, &child.computed, &mut result, &interner).unwrap();
    assert_eq!(
        result.width,
        LengthAuto::Set(Fixed::from_int(100), CssUnit::Px)
    );

    parent.computed.destroy(&interner);
    result.destroy(&interner);
}

#[test]
fn compose_deep_copies_lists() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let mut parent = cascade_one(&ctx, PropertyId::FontFamily, "Helvetica, sans-serif");
    let helvetica = interner.intern("Helvetica").unwrap();
    let baseline = interner.ref_count(helvetica);

    let mut child = CascadeState::new(&interner);
    let mut result = ComputedStyle::new();
    compose_styles(&parent.computed, &child.computed, &mut result, &interner).unwrap();

    // The result holds its own reference to every copied name.
    assert_eq!(result.font_family, parent.computed.font_family);
    assert_eq!(interner.ref_count(helvetica), baseline + 1);

    result.destroy(&interner);
    assert_eq!(interner.ref_count(helvetica), baseline);

    parent.computed.destroy(&interner);
    child.computed.destroy(&interner);
    interner.release(helvetica);
}

#[test]
fn destroy_consumes_exactly_the_entry() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    for (prop, css) in [
        (PropertyId::Display, "block"),
        (PropertyId::Width, "100px"),
        (PropertyId::Width, "inherit"),
        (PropertyId::Color, "#123456"),
        (PropertyId::BackgroundImage, "url(bg.png)"),
        (PropertyId::Clip, "rect(auto, 10px, 20px, auto)"),
        (PropertyId::Cursor, "url(a), url(b), pointer"),
        (PropertyId::FontFamily, r#""Foo", Bar Baz, serif"#),
        (PropertyId::Content, r#"open-quote counters(item, ".") "x""#),
        (PropertyId::CounterIncrement, "chapter 2 section"),
        (PropertyId::Quotes, r#""<<" ">>""#),
        (PropertyId::BorderSpacing, "2px 4px"),
        (PropertyId::BackgroundPosition, "10px top"),
        (PropertyId::LineHeight, "1.5"),
        (PropertyId::PlayDuring, "url(bgm) mix"),
        (PropertyId::ZIndex, "-5"),
    ] {
        let style = parse(&ctx, prop, css);
        let written = style.len();
        let mut reader = style.reader();
        let consumed = crate::cascade::destroy_entry(&mut reader, &interner).unwrap();
        assert_eq!(consumed, written, "{prop:?}: {css}");
        assert!(reader.at_end());
    }
}

#[test]
fn references_balance_across_the_pipeline() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let tokens = tokenize(&interner, r#""Foo", Bar Baz, serif"#).unwrap();
    let foo = interner.intern("Foo").unwrap();
    let baseline = interner.ref_count(foo);

    let style = parse_declaration(&ctx, PropertyId::FontFamily, &tokens).unwrap();
    assert_eq!(interner.ref_count(foo), baseline + 1);

    let mut state = CascadeState::new(&interner);
    state.cascade_style(&style, Origin::Author).unwrap();
    assert_eq!(interner.ref_count(foo), baseline + 2);

    destroy_style(style, &interner).unwrap();
    assert_eq!(interner.ref_count(foo), baseline + 1);

    state.computed.destroy(&interner);
    assert_eq!(interner.ref_count(foo), baseline);

    interner.release(foo);
}

#[test]
fn replacing_a_uri_releases_the_old_reference() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let first = parse(&ctx, PropertyId::BackgroundImage, "url(one.png)");
    let second = parse(&ctx, PropertyId::BackgroundImage, "url(two.png)");

    let one = interner.intern("one.png").unwrap();
    let baseline = interner.ref_count(one) - 1; // minus the buffer's reference

    let mut state = CascadeState::new(&interner);
    state.cascade_style(&first, Origin::Author).unwrap();
    state.cascade_style(&second, Origin::Author).unwrap();

    destroy_style(first, &interner).unwrap();
    destroy_style(second, &interner).unwrap();

    // The computed style holds only the replacement.
    assert_eq!(interner.ref_count(one), baseline);
    let ImageValue::Uri(two) = state.computed.background_image else {
        panic!("expected a uri");
    };
    assert_eq!(&*interner.resolve(two), "two.png");

    state.computed.destroy(&interner);
    interner.release(one);
}
