//! CSS selector building
//!
//! This module builds selector strings fragment by fragment per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), rejecting
//! fragments that would produce a compound selector out of the canonical
//! order:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\----------/
//!           may occur several times
//! ```

mod builder;
mod combinator;
mod compound;
mod error;
mod fragment;
mod specificity;
mod state;

pub use builder::CssSelectorBuilder;
pub use combinator::{Combinator, CombinedSelector, SelectorNode};
pub use compound::CompoundSelector;
pub use error::SelectorOrderError;
pub use fragment::{Fragment, FragmentKind};
pub use specificity::Specificity;
pub use state::BuildState;
