//! JSON serialization of selectors.

use selkie_css::{
    CombinedSelector, CompoundSelector, CssSelectorBuilder, Fragment, FragmentKind,
    SelectorOrderError,
};

#[test]
fn test_compound_serializes_as_fragment_list() -> Result<(), SelectorOrderError> {
    let selector = CssSelectorBuilder.element("a").pseudo_class("hover")?;
    let json = serde_json::to_string(&selector).unwrap();
    assert_eq!(
        json,
        r#"[{"kind":"element","value":"a"},{"kind":"pseudo-class","value":"hover"}]"#
    );
    Ok(())
}

#[test]
fn test_compound_json_round_trip() -> Result<(), SelectorOrderError> {
    let selector = CssSelectorBuilder
        .element("img")
        .attr(r#"src$=".png""#)?
        .pseudo_element("after")?;
    let json = serde_json::to_string(&selector).unwrap();
    let back: CompoundSelector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selector);
    assert_eq!(back.stringify(), r#"img[src$=".png"]::after"#);
    Ok(())
}

#[test]
fn test_deserialize_rejects_out_of_order_fragments() {
    let json = r#"[{"kind":"class","value":"a"},{"kind":"id","value":"b"}]"#;
    let err = serde_json::from_str::<CompoundSelector>(json).unwrap_err();
    assert!(err.to_string().contains("Selector parts should be arranged"));
}

#[test]
fn test_deserialize_rejects_duplicate_id() {
    let json = r#"[{"kind":"id","value":"a"},{"kind":"id","value":"b"}]"#;
    assert!(serde_json::from_str::<CompoundSelector>(json).is_err());
}

#[test]
fn test_combined_json_round_trip() {
    let b = CssSelectorBuilder;
    let combined = b.combine(
        b.element("ul"),
        '>',
        b.combine(b.element("li"), '+', b.class("active")),
    );
    let json = serde_json::to_string(&combined).unwrap();
    let back: CombinedSelector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, combined);
    assert_eq!(back.stringify(), "ul > li + .active");
}

#[test]
fn test_try_from_fragments() {
    let selector = CompoundSelector::try_from(vec![
        Fragment::new(FragmentKind::Id, "main"),
        Fragment::new(FragmentKind::Class, "wide"),
    ])
    .unwrap();
    assert_eq!(selector.stringify(), "#main.wide");

    let err = CompoundSelector::from_fragments([
        Fragment::new(FragmentKind::PseudoElement, "before"),
        Fragment::new(FragmentKind::PseudoElement, "after"),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), FragmentKind::PseudoElement);
}
