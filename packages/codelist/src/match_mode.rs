/// How a [`CodeList`][crate::CodeList] decides whether a code falls within one of its ranges.
///
/// Literal codes are always matched exactly, regardless of the mode.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum MatchMode {
    /// A code matches a range if it compares between the range bounds as a string, even if it
    /// is longer than the bounds.
    ///
    /// This lets sub-codes match the range of their parent codes: `V90.1` is within `V90..V99`.
    #[default]
    Loose,

    /// A code matches a range only if it has the same length as the range bounds and compares
    /// between them as a string.
    Strict,
}

impl MatchMode {
    /// Combines the modes of two lists being merged. Strictness wins.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        if self == Self::Strict || other == Self::Strict {
            Self::Strict
        } else {
            Self::Loose
        }
    }
}
