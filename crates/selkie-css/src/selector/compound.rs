//! Compound selectors built one fragment at a time.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::SelectorOrderError;
use super::fragment::{Fragment, FragmentKind};
use super::specificity::Specificity;
use super::state::BuildState;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Fragments are kept in canonical order: element, id, classes,
/// attributes, pseudo-classes, pseudo-element. Element, id and
/// pseudo-element occur at most once. Every constructor and mutator
/// enforces this, including deserialization.
///
/// The fragment-adding methods take `&self` and return a new selector, so
/// a rejected call leaves the original usable:
///
/// ```
/// use selkie_css::CssSelectorBuilder;
///
/// let link = CssSelectorBuilder.element("a");
/// assert!(link.element("b").is_err());
/// assert_eq!(link.attr("href")?.stringify(), "a[href]");
/// # Ok::<(), selkie_css::SelectorOrderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Fragment>", into = "Vec<Fragment>")]
pub struct CompoundSelector {
    fragments: Vec<Fragment>,
}

impl CompoundSelector {
    /// Create an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// A selector holding exactly one fragment; always legal.
    pub(super) fn single(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    /// Build a selector from fragments in order.
    ///
    /// # Errors
    ///
    /// Returns the first ordering violation found.
    pub fn from_fragments<I>(fragments: I) -> Result<Self, SelectorOrderError>
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut selector = Self::new();
        for fragment in fragments {
            selector.push(fragment)?;
        }
        Ok(selector)
    }

    /// The current position in the canonical fragment order.
    #[must_use]
    pub fn state(&self) -> BuildState {
        self.fragments
            .last()
            .map_or(BuildState::Empty, |fragment| BuildState::after(fragment.kind))
    }

    /// Append a fragment in place.
    ///
    /// On error the selector is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorOrderError`] if the fragment's kind is a repeated
    /// singleton or comes before the last fragment's kind.
    pub fn push(&mut self, fragment: Fragment) -> Result<(), SelectorOrderError> {
        let state = self.state();
        state.check(fragment.kind)?;

        #[cfg(feature = "builder-trace")]
        eprintln!(
            "[SELECTOR] {state:?} + {} {:?} -> {:?}",
            fragment.kind,
            fragment.value,
            BuildState::after(fragment.kind)
        );

        self.fragments.push(fragment);
        Ok(())
    }

    /// Return a copy of this selector with one more fragment.
    fn with(&self, kind: FragmentKind, value: String) -> Result<Self, SelectorOrderError> {
        self.state().check(kind)?;
        let mut next = self.clone();
        next.push(Fragment { kind, value })?;
        Ok(next)
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Add the element (type) selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Fails if any fragment was already added.
    pub fn element(&self, name: impl Into<String>) -> Result<Self, SelectorOrderError> {
        self.with(FragmentKind::Element, name.into())
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Add the id selector, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// Fails if an id, or anything after it in canonical order, was
    /// already added.
    pub fn id(&self, name: impl Into<String>) -> Result<Self, SelectorOrderError> {
        self.with(FragmentKind::Id, name.into())
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Add a class selector, rendered as `.name`. May repeat.
    ///
    /// # Errors
    ///
    /// Fails after an attribute, pseudo-class or pseudo-element.
    pub fn class(&self, name: impl Into<String>) -> Result<Self, SelectorOrderError> {
        self.with(FragmentKind::Class, name.into())
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Add an attribute selector, rendered as `[spec]`. `spec` is written
    /// verbatim, so `href$=".png"` becomes `[href$=".png"]`. May repeat.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attr(&self, spec: impl Into<String>) -> Result<Self, SelectorOrderError> {
        self.with(FragmentKind::Attribute, spec.into())
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Add a pseudo-class, rendered as `:name`. May repeat.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    pub fn pseudo_class(&self, name: impl Into<String>) -> Result<Self, SelectorOrderError> {
        self.with(FragmentKind::PseudoClass, name.into())
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Add the pseudo-element, rendered as `::name`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element was already added.
    pub fn pseudo_element(&self, name: impl Into<String>) -> Result<Self, SelectorOrderError> {
        self.with(FragmentKind::PseudoElement, name.into())
    }

    /// Whether a fragment of `kind` may be added next.
    #[must_use]
    pub fn allows(&self, kind: FragmentKind) -> bool {
        self.state().allows(kind)
    }

    /// Every kind that may be added next, in canonical order.
    #[must_use]
    pub fn legal_next_kinds(&self) -> Vec<FragmentKind> {
        self.state().legal_next_kinds()
    }

    /// The fragments in the order they were added.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Consume the selector, returning its fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.fragments
            .iter()
            .map(|fragment| Specificity::of_kind(fragment.kind))
            .fold(Specificity::default(), |total, s| total + s)
    }

    /// Render the selector, e.g. `a#nav.item[href]:hover::after`.
    ///
    /// Rendering never changes the selector; it may be called any number
    /// of times.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Fragment>> for CompoundSelector {
    type Error = SelectorOrderError;

    fn try_from(fragments: Vec<Fragment>) -> Result<Self, Self::Error> {
        Self::from_fragments(fragments)
    }
}

impl From<CompoundSelector> for Vec<Fragment> {
    fn from(selector: CompoundSelector) -> Self {
        selector.fragments
    }
}
