use std::iter::FusedIterator;

use derive_more::Display;
use tracing::debug;

use crate::{Error, MatchMode, RANGE_SEPARATOR, Result, increment, normalize};

/// An inclusive range of codes, written as `BEGIN..END` in a code list.
///
/// Both bounds are normalized (trimmed and uppercased) and always have the same length.
/// The bounds are not reordered: a range whose beginning sorts after its end matches nothing.
///
/// # Example
///
/// ```
/// use codelist::{CodeRange, MatchMode};
///
/// let range = CodeRange::new("v90", "v99").unwrap();
/// assert_eq!(range.to_string(), "V90..V99");
///
/// assert!(range.contains("V95", MatchMode::Strict));
/// assert!(range.contains("V90.1", MatchMode::Loose));
/// assert!(!range.contains("V90.1", MatchMode::Strict));
/// ```
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display("{begin}..{end}")]
pub struct CodeRange {
    begin: String,
    end: String,
}

impl CodeRange {
    /// Creates a range from its first and last code (both inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedCodeList`] if either bound is blank and
    /// [`Error::InvalidCodeRange`] if the bounds do not have the same length after
    /// normalization.
    pub fn new(begin: &str, end: &str) -> Result<Self> {
        let begin = normalize(begin);
        let end = normalize(end);

        if begin.is_empty() || end.is_empty() {
            return Err(Error::MalformedCodeList {
                token: format!("{begin}{RANGE_SEPARATOR}{end}"),
            });
        }

        if begin.len() != end.len() {
            debug!(%begin, %end, "rejecting code range with bounds of different length");
            return Err(Error::InvalidCodeRange { begin, end });
        }

        Ok(Self { begin, end })
    }

    /// The first code in the range.
    #[must_use]
    pub fn begin(&self) -> &str {
        &self.begin
    }

    /// The last code in the range.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether `code` is within the range.
    ///
    /// The code is compared as given. Callers are expected to have uppercased it already,
    /// which [`CodeList::includes()`][crate::CodeList::includes] does.
    #[must_use]
    pub fn contains(&self, code: &str, mode: MatchMode) -> bool {
        let length_ok = match mode {
            MatchMode::Loose => true,
            MatchMode::Strict => code.len() == self.begin.len(),
        };

        length_ok && self.begin.as_str() <= code && code <= self.end.as_str()
    }

    /// Enumerates the codes of the range from the beginning to the end, stepping with
    /// [`increment()`][fn@crate::increment].
    ///
    /// This is the inverse of [`compact()`][fn@crate::compact]. Only codes reachable by
    /// incrementing are produced. For example, `A9..B0` yields `A9` and `B0` even though
    /// `AA` also sorts between them. The iteration stops early if a code cannot be incremented.
    ///
    /// # Example
    ///
    /// ```
    /// use codelist::CodeRange;
    ///
    /// let range = CodeRange::new("A98", "B01").unwrap();
    /// let members: Vec<_> = range.members().collect();
    ///
    /// assert_eq!(members, ["A98", "A99", "B00", "B01"]);
    /// ```
    #[must_use]
    pub fn members(&self) -> Members<'_> {
        Members {
            next: Some(self.begin.clone()),
            end: &self.end,
        }
    }
}

/// Iterator over the codes of a [`CodeRange`], returned by [`CodeRange::members()`].
#[derive(Clone, Debug)]
pub struct Members<'a> {
    next: Option<String>,
    end: &'a str,
}

impl Iterator for Members<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if current.as_str() > self.end {
            return None;
        }

        if current != self.end {
            self.next = increment(&current).filter(|next| next.as_str() <= self.end);
        }

        Some(current)
    }
}

impl FusedIterator for Members<'_> {}
