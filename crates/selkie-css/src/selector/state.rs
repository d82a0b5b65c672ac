//! The compound selector state machine.
//!
//! The state is the kind of the most recently added fragment. Transitions
//! only move forward through [`FragmentKind`]'s canonical order, or stay
//! put for repeatable kinds.

use serde::Serialize;
use strum::IntoEnumIterator;

use super::error::SelectorOrderError;
use super::fragment::FragmentKind;

/// Where a compound selector is in the canonical fragment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BuildState {
    /// Nothing added yet; every kind is legal.
    #[default]
    Empty,
    /// Last fragment was the element (type) selector.
    HasElement,
    /// Last fragment was the id.
    HasId,
    /// Last fragment was a class.
    HasClass,
    /// Last fragment was an attribute selector.
    HasAttr,
    /// Last fragment was a pseudo-class.
    HasPseudoClass,
    /// Last fragment was the pseudo-element; nothing may follow.
    HasPseudoElement,
}

impl BuildState {
    /// The state reached right after adding a fragment of `kind`.
    #[must_use]
    pub const fn after(kind: FragmentKind) -> Self {
        match kind {
            FragmentKind::Element => Self::HasElement,
            FragmentKind::Id => Self::HasId,
            FragmentKind::Class => Self::HasClass,
            FragmentKind::Attribute => Self::HasAttr,
            FragmentKind::PseudoClass => Self::HasPseudoClass,
            FragmentKind::PseudoElement => Self::HasPseudoElement,
        }
    }

    /// The kind of the most recently added fragment, if any.
    #[must_use]
    pub const fn last_kind(self) -> Option<FragmentKind> {
        match self {
            Self::Empty => None,
            Self::HasElement => Some(FragmentKind::Element),
            Self::HasId => Some(FragmentKind::Id),
            Self::HasClass => Some(FragmentKind::Class),
            Self::HasAttr => Some(FragmentKind::Attribute),
            Self::HasPseudoClass => Some(FragmentKind::PseudoClass),
            Self::HasPseudoElement => Some(FragmentKind::PseudoElement),
        }
    }

    /// Check whether a fragment of `kind` may be added in this state.
    ///
    /// A repeated singleton reports [`SelectorOrderError::DuplicateSingleton`]
    /// even when it would also be out of order.
    ///
    /// # Errors
    ///
    /// Returns the rule the addition would break.
    pub fn check(self, kind: FragmentKind) -> Result<(), SelectorOrderError> {
        let Some(last) = self.last_kind() else {
            return Ok(());
        };

        if kind == last && !kind.is_repeatable() {
            return Err(SelectorOrderError::DuplicateSingleton { kind });
        }
        if kind < last {
            return Err(SelectorOrderError::OutOfOrder { kind, after: last });
        }
        Ok(())
    }

    /// Move to the next state, or report why the transition is illegal.
    ///
    /// # Errors
    ///
    /// Same as [`BuildState::check`].
    pub fn advance(self, kind: FragmentKind) -> Result<Self, SelectorOrderError> {
        self.check(kind).map(|()| Self::after(kind))
    }

    /// Whether a fragment of `kind` may be added in this state.
    #[must_use]
    pub fn allows(self, kind: FragmentKind) -> bool {
        self.check(kind).is_ok()
    }

    /// Every kind that may be added next, in canonical order.
    #[must_use]
    pub fn legal_next_kinds(self) -> Vec<FragmentKind> {
        FragmentKind::iter().filter(|&kind| self.allows(kind)).collect()
    }
}
