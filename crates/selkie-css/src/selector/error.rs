//! The fragment ordering error.

use thiserror::Error;

use super::fragment::FragmentKind;

/// A fragment was added where the compound selector does not allow it.
///
/// The display messages are fixed per rule; the fields identify which
/// fragment was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorOrderError {
    /// An element, id or pseudo-element was added a second time.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicateSingleton {
        /// The singleton kind that was repeated.
        kind: FragmentKind,
    },

    /// A fragment was added after a kind that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The kind that was rejected.
        kind: FragmentKind,
        /// The kind already at the end of the selector.
        after: FragmentKind,
    },
}

impl SelectorOrderError {
    /// The fragment kind whose addition was rejected.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::DuplicateSingleton { kind } | Self::OutOfOrder { kind, .. } => *kind,
        }
    }
}
