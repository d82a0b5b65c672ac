//! Combinators and combined selectors.

use std::fmt;

use selkie_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use super::compound::CompoundSelector;
use super::specificity::Specificity;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The combinator written as a single character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }

    /// Look up the combinator for a character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Descendant),
            '>' => Some(Self::Child),
            '+' => Some(Self::NextSibling),
            '~' => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl From<Combinator> for char {
    fn from(combinator: Combinator) -> Self {
        combinator.as_char()
    }
}

/// Either side of a combined selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorNode {
    /// A single compound selector.
    Compound(CompoundSelector),
    /// A nested combination.
    Combined(Box<CombinedSelector>),
}

impl SelectorNode {
    /// Render this side of a combination.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Combined(combined) => combined.specificity(),
        }
    }

    fn collect_compounds<'a>(&'a self, out: &mut Vec<&'a CompoundSelector>) {
        match self {
            Self::Compound(compound) => out.push(compound),
            Self::Combined(combined) => {
                combined.left.collect_compounds(out);
                combined.right.collect_compounds(out);
            }
        }
    }
}

impl fmt::Display for SelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Combined(combined) => write!(f, "{combined}"),
        }
    }
}

impl From<CompoundSelector> for SelectorNode {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<CombinedSelector> for SelectorNode {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(Box::new(combined))
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two built selectors joined by a combinator, rendered as
/// `"<left> <combinator> <right>"`.
///
/// The combinator is kept as the character the caller supplied. Anything
/// other than `' '`, `'+'`, `'~'` or `'>'` is rendered verbatim and
/// reported once through [`warn_once`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinedSelector {
    left: SelectorNode,
    combinator: char,
    right: SelectorNode,
}

impl CombinedSelector {
    /// Join two selectors with a combinator.
    #[must_use]
    pub fn new(
        left: impl Into<SelectorNode>,
        combinator: impl Into<char>,
        right: impl Into<SelectorNode>,
    ) -> Self {
        let combinator = combinator.into();
        if Combinator::from_char(combinator).is_none() {
            let _ = warn_once(
                "Selector",
                &format!("{combinator:?} is not a CSS combinator; rendering it verbatim"),
            );
        }
        Self {
            left: left.into(),
            combinator,
            right: right.into(),
        }
    }

    /// The left-hand selector.
    #[must_use]
    pub const fn left(&self) -> &SelectorNode {
        &self.left
    }

    /// The right-hand selector.
    #[must_use]
    pub const fn right(&self) -> &SelectorNode {
        &self.right
    }

    /// The combinator character as supplied.
    #[must_use]
    pub const fn combinator(&self) -> char {
        self.combinator
    }

    /// The combinator, if it is one of the four CSS combinators.
    #[must_use]
    pub const fn combinator_kind(&self) -> Option<Combinator> {
        Combinator::from_char(self.combinator)
    }

    /// Every compound selector in the combination, left to right.
    #[must_use]
    pub fn compounds(&self) -> Vec<&CompoundSelector> {
        let mut out = Vec::new();
        self.left.collect_compounds(&mut out);
        self.right.collect_compounds(&mut out);
        out
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// The sum over both sides.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.left.specificity() + self.right.specificity()
    }

    /// Render the combination. Repeatable and side-effect free.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}
