//! CSS selector building for Selkie.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element fragments
//!   - Fragment ordering checks (`element#id.class[attr]:pseudo::pseudo-element`)
//!   - Repeatable classes, attributes, and pseudo-classes
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, subsequent-sibling
//!   - Arbitrarily nested combinations
//!
//! - **Specificity** ([§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Yet Implemented
//!
//! - Parsing selector strings back into fragments
//! - Escaping of identifiers
//!
//! # Example
//!
//! ```
//! use selkie_css::CssSelectorBuilder;
//!
//! let builder = CssSelectorBuilder;
//! let selector = builder.id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok::<(), selkie_css::SelectorOrderError>(())
//! ```

/// CSS selector building per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{
    BuildState, Combinator, CombinedSelector, CompoundSelector, CssSelectorBuilder, Fragment,
    FragmentKind, SelectorNode, SelectorOrderError, Specificity,
};
