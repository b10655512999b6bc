//! End-to-end pipeline: tokenize a declaration value, parse it to bytecode,
//! replay the bytecode through the cascade, compose against a parent, and
//! tear everything down without leaking interned references.

use strata::values::*;
use strata::{
    CascadeState, ComputedStyle, CssUnit, Error, Fixed, Interner, Origin, ParseContext,
    PropertyId, Style, compose_styles, destroy_style, parse_declaration, testing::tokenize,
};

fn parse(ctx: &ParseContext<'_>, prop: PropertyId, css: &str) -> Style {
    let tokens = tokenize(ctx.interner, css).unwrap();
    parse_declaration(ctx, prop, &tokens).unwrap()
}

#[test]
fn an_element_worth_of_declarations() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let declarations: Vec<(PropertyId, &str)> = vec![
        (PropertyId::Display, "block"),
        (PropertyId::Position, "relative"),
        (PropertyId::Width, "50%"),
        (PropertyId::Height, "auto"),
        (PropertyId::MarginTop, "1.5em"),
        (PropertyId::PaddingLeft, "12px"),
        (PropertyId::Color, "navy"),
        (PropertyId::BackgroundColor, "#fafafa"),
        (PropertyId::BackgroundImage, "url(paper.png)"),
        (PropertyId::FontFamily, "Georgia, serif"),
        (PropertyId::FontSize, "12pt"),
        (PropertyId::LineHeight, "1.4"),
        (PropertyId::TextAlign, "justify"),
        (PropertyId::TextDecoration, "underline"),
        (PropertyId::CounterIncrement, "section"),
        (PropertyId::Content, r#"counter(section) ". ""#),
        (PropertyId::Cursor, "url(hand.cur), pointer"),
        (PropertyId::ZIndex, "10"),
    ];

    let mut state = CascadeState::new(&interner);
    let mut styles = Vec::new();
    for (prop, css) in &declarations {
        styles.push(parse(&ctx, *prop, css));
    }
    for style in &styles {
        state.cascade_style(style, Origin::Author).unwrap();
    }
    state.finish().unwrap();

    assert_eq!(state.computed.display, Display::Block);
    assert_eq!(state.computed.position, Position::Relative);
    assert_eq!(
        state.computed.width,
        LengthAuto::Set(Fixed::from_int(50), CssUnit::Pct)
    );
    assert_eq!(state.computed.height, LengthAuto::Auto);
    assert_eq!(state.computed.color, ColorValue::Color(Color::rgb(0, 0, 0x80)));
    assert_eq!(state.computed.line_height, LineHeight::Number(Fixed::from_raw(1433)));
    assert_eq!(state.computed.text_align, TextAlign::Justify);
    assert_eq!(
        state.computed.font_size,
        FontSize::Set(Fixed::from_int(12), CssUnit::Pt)
    );
    assert_eq!(state.computed.z_index, ZIndex::Set(Fixed::from_int(10)));

    // Defaults filled in by finish() for everything undeclared.
    assert_eq!(state.computed.float, Float::None);
    assert_eq!(state.computed.clip, Clip::Auto);
    // Inherited, undeclared: left pending for composition.
    assert_eq!(state.computed.letter_spacing, LengthNormal::Inherit);

    for style in styles {
        destroy_style(style, &interner).unwrap();
    }
    state.computed.destroy(&interner);
}

#[test]
fn invalid_declarations_are_dropped_silently() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    for (prop, css) in [
        (PropertyId::Width, "-1px"),
        (PropertyId::Width, "10s"),
        (PropertyId::Display, "grid"),
        (PropertyId::TextDecoration, "underline underline"),
        (PropertyId::FontWeight, "450"),
        (PropertyId::Color, "rgb(1, 2)"),
    ] {
        let tokens = tokenize(&interner, css).unwrap();
        assert_eq!(
            parse_declaration(&ctx, prop, &tokens).unwrap_err(),
            Error::Invalid,
            "{prop:?}: {css}"
        );
    }
}

#[test]
fn inheritance_flows_through_compose() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    // Parent: root element against the all-initial record.
    let mut root = CascadeState::new(&interner);
    root.set_initial_values().unwrap();
    for (prop, css) in [
        (PropertyId::Color, "maroon"),
        (PropertyId::FontFamily, "serif"),
        (PropertyId::LetterSpacing, "2px"),
        (PropertyId::Display, "block"),
    ] {
        let style = parse(&ctx, prop, css);
        root.cascade_style(&style, Origin::Author).unwrap();
        destroy_style(style, &interner).unwrap();
    }
    root.finish().unwrap();

    // Child declares nothing except an explicit inherit of a non-inherited
    // property.
    let mut child = CascadeState::new(&interner);
    let style = parse(&ctx, PropertyId::Display, "inherit");
    child.cascade_style(&style, Origin::Author).unwrap();
    destroy_style(style, &interner).unwrap();
    child.finish().unwrap();

    let mut computed = ComputedStyle::new();
    compose_styles(&root.computed, &child.computed, &mut computed, &interner).unwrap();

    // Inherited-by-default properties took the parent's values.
    assert_eq!(computed.color, ColorValue::Color(Color::rgb(0x80, 0, 0)));
    assert_eq!(
        computed.letter_spacing,
        LengthNormal::Set(Fixed::from_int(2), CssUnit::Px)
    );
    assert_eq!(computed.font_family, FontFamily::Set(vec![FamilyName::Serif]));
    // The explicit inherit resolved too.
    assert_eq!(computed.display, Display::Block);
    // Non-inherited, undeclared: the child's own initial value.
    assert_eq!(computed.background_color, ColorValue::Transparent);

    root.computed.destroy(&interner);
    child.computed.destroy(&interner);
    computed.destroy(&interner);
}

#[test]
fn no_references_leak_across_a_full_pass() {
    let interner = Interner::new();
    let ctx = ParseContext::new(&interner).unwrap();

    let tokens = tokenize(
        &interner,
        r#"url(one.png), url(two.png), crosshair"#,
    )
    .unwrap();
    let one = interner.intern("one.png").unwrap();
    let two = interner.intern("two.png").unwrap();
    let base_one = interner.ref_count(one);
    let base_two = interner.ref_count(two);

    let style = parse_declaration(&ctx, PropertyId::Cursor, &tokens).unwrap();
    let mut state = CascadeState::new(&interner);
    state.cascade_style(&style, Origin::Author).unwrap();

    destroy_style(style, &interner).unwrap();
    state.computed.destroy(&interner);

    assert_eq!(interner.ref_count(one), base_one);
    assert_eq!(interner.ref_count(two), base_two);

    interner.release(one);
    interner.release(two);
}
