//! Integration tests for combining built selectors.

use selkie_common::warning::was_warned;
use selkie_css::{
    Combinator, CombinedSelector, CssSelectorBuilder, SelectorNode, SelectorOrderError,
    Specificity,
};

#[test]
fn test_combine_next_sibling() -> Result<(), SelectorOrderError> {
    let b = CssSelectorBuilder;
    let combined = b.combine(
        b.element("div").id("main")?,
        '+',
        b.element("table").id("data")?,
    );
    assert_eq!(combined.stringify(), "div#main + table#data");
    assert_eq!(combined.combinator_kind(), Some(Combinator::NextSibling));
    Ok(())
}

#[test]
fn test_combine_nested() -> Result<(), SelectorOrderError> {
    let b = CssSelectorBuilder;
    let combined = b.combine(
        b.element("div")
            .id("main")?
            .class("container")?
            .class("draggable")?,
        '+',
        b.combine(
            b.element("table").id("data")?,
            '~',
            b.combine(
                b.element("tr").pseudo_class("nth-of-type(even)")?,
                ' ',
                b.element("td").pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    assert_eq!(
        combined.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    Ok(())
}

#[test]
fn test_combine_accepts_typed_combinator() {
    let b = CssSelectorBuilder;
    let combined = b.combine(b.element("ul"), Combinator::Child, b.element("li"));
    assert_eq!(combined.stringify(), "ul > li");
    assert_eq!(combined.combinator(), '>');
}

#[test]
fn test_combined_on_left() {
    let b = CssSelectorBuilder;
    let inner = b.combine(b.element("nav"), '>', b.element("ul"));
    let outer = b.combine(inner, '~', b.class("footer"));
    assert_eq!(outer.stringify(), "nav > ul ~ .footer");
    assert!(matches!(outer.left(), SelectorNode::Combined(_)));
    assert!(matches!(outer.right(), SelectorNode::Compound(_)));
}

#[test]
fn test_combined_stringify_is_repeatable() {
    let b = CssSelectorBuilder;
    let combined = b.combine(b.id("a"), '+', b.id("b"));
    assert_eq!(combined.stringify(), combined.stringify());
    assert_eq!(combined.to_string(), "#a + #b");
}

#[test]
fn test_combine_does_not_consume_builder_state() -> Result<(), SelectorOrderError> {
    let b = CssSelectorBuilder;
    let left = b.element("h1");
    let right = b.element("p").class("lead")?;
    let combined = b.combine(left.clone(), '+', right.clone());

    assert_eq!(combined.stringify(), "h1 + p.lead");
    assert_eq!(left.stringify(), "h1");
    assert_eq!(right.stringify(), "p.lead");
    Ok(())
}

#[test]
fn test_compounds_left_to_right() {
    let b = CssSelectorBuilder;
    let combined = b.combine(
        b.element("a"),
        ' ',
        b.combine(b.element("b"), '>', b.element("c")),
    );
    let rendered: Vec<String> = combined
        .compounds()
        .iter()
        .map(|compound| compound.stringify())
        .collect();
    assert_eq!(rendered, ["a", "b", "c"]);
}

#[test]
fn test_combined_specificity_sums_both_sides() -> Result<(), SelectorOrderError> {
    let b = CssSelectorBuilder;
    let combined = b.combine(
        b.element("div").id("main")?,
        '>',
        b.element("p").class("lead")?.pseudo_element("first-line")?,
    );
    assert_eq!(combined.specificity(), Specificity(1, 1, 3));
    Ok(())
}

#[test]
fn test_unknown_combinator_renders_verbatim_and_warns() {
    let combined = CombinedSelector::new(CssSelectorBuilder.element("a"), '|', CssSelectorBuilder.element("b"));
    assert_eq!(combined.stringify(), "a | b");
    assert_eq!(combined.combinator_kind(), None);
    assert!(was_warned(
        "Selector",
        "'|' is not a CSS combinator; rendering it verbatim"
    ));
}
