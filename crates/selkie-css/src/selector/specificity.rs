//! Selector specificity.

use std::ops::{Add, AddAssign};

use serde::Serialize;

use super::fragment::FragmentKind;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// The contribution of a single fragment.
    #[must_use]
    pub const fn of_kind(kind: FragmentKind) -> Self {
        match kind {
            // "count the number of ID selectors in the selector (= A)"
            FragmentKind::Id => Self(1, 0, 0),
            // "count the number of class selectors, attributes selectors,
            // and pseudo-classes in the selector (= B)"
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                Self(0, 1, 0)
            }
            // "count the number of type selectors and pseudo-elements
            // in the selector (= C)"
            FragmentKind::Element | FragmentKind::PseudoElement => Self(0, 0, 1),
        }
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
