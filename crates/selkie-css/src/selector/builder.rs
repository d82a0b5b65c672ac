//! The selector builder facade.

use super::combinator::{CombinedSelector, SelectorNode};
use super::compound::CompoundSelector;
use super::fragment::{Fragment, FragmentKind};

/// Entry points for building selectors.
///
/// The builder holds no state. Every entry point starts a fresh
/// [`CompoundSelector`], so interleaved builds never share fragments.
///
/// Any fragment kind may start a selector, which is why the entry points
/// cannot fail; ordering is enforced on the returned selector.
///
/// ```
/// use selkie_css::CssSelectorBuilder;
///
/// let builder = CssSelectorBuilder;
/// let selector = builder
///     .element("a")
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), selkie_css::SelectorOrderError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssSelectorBuilder;

#[allow(clippy::unused_self)]
impl CssSelectorBuilder {
    /// Start a selector with an element (type) selector.
    #[must_use]
    pub fn element(self, name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::single(Fragment::new(FragmentKind::Element, name))
    }

    /// Start a selector with an id selector.
    #[must_use]
    pub fn id(self, name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::single(Fragment::new(FragmentKind::Id, name))
    }

    /// Start a selector with a class selector.
    #[must_use]
    pub fn class(self, name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::single(Fragment::new(FragmentKind::Class, name))
    }

    /// Start a selector with an attribute selector; `spec` goes between
    /// the brackets verbatim.
    #[must_use]
    pub fn attr(self, spec: impl Into<String>) -> CompoundSelector {
        CompoundSelector::single(Fragment::new(FragmentKind::Attribute, spec))
    }

    /// Start a selector with a pseudo-class.
    #[must_use]
    pub fn pseudo_class(self, name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::single(Fragment::new(FragmentKind::PseudoClass, name))
    }

    /// Start a selector with a pseudo-element.
    #[must_use]
    pub fn pseudo_element(self, name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::single(Fragment::new(FragmentKind::PseudoElement, name))
    }

    /// Join two built selectors with a combinator.
    ///
    /// The combinator may be given as a [`Combinator`](super::Combinator)
    /// or as its character (`' '`, `'+'`, `'~'`, `'>'`).
    #[must_use]
    pub fn combine(
        self,
        left: impl Into<SelectorNode>,
        combinator: impl Into<char>,
        right: impl Into<SelectorNode>,
    ) -> CombinedSelector {
        CombinedSelector::new(left, combinator, right)
    }
}
