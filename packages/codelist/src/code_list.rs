use std::fmt;
use std::str::FromStr;

use foldhash::{HashSet, HashSetExt};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{CodeFinder, CodeRange, Error, MatchMode, RANGE_SEPARATOR, Result, normalize};

/// A set of codes and code ranges that can answer whether a code belongs to it.
///
/// Code lists are usually parsed from text such as `A001, A002, V90..V99`. See
/// [package-level documentation][crate] for the format.
///
/// Lists can be combined with [`merge()`][Self::merge] (union) and
/// [`except()`][Self::except] (exclusion). Neither modifies its inputs.
///
/// # Example
///
/// ```
/// use codelist::CodeList;
///
/// let pregnancy = CodeList::parse("O00..O9A, Z33, Z34");
/// let abortive_outcome = CodeList::parse("O00..O08");
///
/// let codes = pregnancy.except(&abortive_outcome);
///
/// assert!(codes.includes("O10.1"));
/// assert!(codes.includes("z33"));
/// assert!(!codes.includes("O05"));
/// assert!(!codes.includes("O00.1"));
/// ```
#[derive(Clone, Debug)]
pub struct CodeList {
    codes: HashSet<String>,
    ranges: Vec<CodeRange>,
    match_mode: MatchMode,

    /// Codes matching this list are never included, even if they also match `codes`/`ranges`.
    except: Option<Box<Self>>,
}

impl CodeList {
    /// Parses a code list.
    ///
    /// # Errors
    ///
    /// * [`Error::BlankCode`] if the input is empty or whitespace.
    /// * [`Error::InvalidCodeRange`] if the bounds of a range have different lengths.
    /// * [`Error::MalformedCodeList`] if a range has a blank bound or more than one `..`.
    ///
    /// Nothing is returned for partially valid input.
    pub fn try_parse(input: &str) -> Result<Self> {
        let input = normalize(input);

        if input.is_empty() {
            debug!("rejecting blank code list");
            return Err(Error::BlankCode);
        }

        let mut codes = HashSet::new();
        let mut ranges = Vec::new();

        for token in tokens(&input) {
            let parts = token.split(RANGE_SEPARATOR).map(str::trim).collect_vec();

            match parts.as_slice() {
                [code] => {
                    // A stray "." or similar delimiter residue is not a code.
                    if !code.is_empty() {
                        codes.insert((*code).to_string());
                    }
                }
                [begin, end] if !begin.is_empty() && !end.is_empty() => {
                    ranges.push(CodeRange::new(begin, end)?);
                }
                _ => {
                    debug!(token, "rejecting malformed code list entry");
                    return Err(Error::MalformedCodeList {
                        token: token.to_string(),
                    });
                }
            }
        }

        trace!(
            codes = codes.len(),
            ranges = ranges.len(),
            "parsed code list"
        );

        Ok(Self {
            codes,
            ranges,
            match_mode: MatchMode::default(),
            except: None,
        })
    }

    /// Parses a code list that is known to be valid, such as one compiled into the program.
    ///
    /// Use [`try_parse()`][Self::try_parse] for input that may legitimately be invalid.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid code list.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::try_parse(input)
            .unwrap_or_else(|error| panic!("invalid code list {input:?}: {error}"))
    }

    /// Requires codes to have the same length as range bounds to match a range.
    ///
    /// # Example
    ///
    /// ```
    /// use codelist::CodeList;
    ///
    /// let loose = CodeList::parse("CODE12..CODE20");
    /// let strict = loose.clone().with_strict_matching();
    ///
    /// assert!(loose.includes("CODE125"));
    /// assert!(!strict.includes("CODE125"));
    /// assert!(strict.includes("CODE17"));
    /// ```
    #[must_use]
    pub fn with_strict_matching(self) -> Self {
        self.with_match_mode(MatchMode::Strict)
    }

    /// Sets how codes are matched against the ranges of the list.
    #[must_use]
    pub fn with_match_mode(self, match_mode: MatchMode) -> Self {
        Self { match_mode, ..self }
    }

    /// How codes are matched against the ranges of the list.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Whether the list uses [`MatchMode::Strict`].
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.match_mode == MatchMode::Strict
    }

    /// The individual codes of the list, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// The code ranges of the list, in the order they were parsed or merged.
    #[must_use]
    pub fn ranges(&self) -> &[CodeRange] {
        &self.ranges
    }

    /// The list of codes excluded from this list, if any.
    #[must_use]
    pub fn exclusions(&self) -> Option<&Self> {
        self.except.as_deref()
    }

    /// Whether `code` belongs to the list.
    ///
    /// Excluded codes never belong to the list. Otherwise the code is uppercased (but not
    /// trimmed) and matched exactly against the individual codes of the list, then against its
    /// ranges according to the [match mode][Self::match_mode].
    #[must_use]
    pub fn includes(&self, code: &str) -> bool {
        if self
            .except
            .as_deref()
            .is_some_and(|except| except.includes(code))
        {
            return false;
        }

        let code = code.to_uppercase();

        self.codes.contains(&code)
            || self
                .ranges
                .iter()
                .any(|range| range.contains(&code, self.match_mode))
    }

    /// Whether at least one of `codes` belongs to the list.
    #[must_use]
    pub fn includes_any<I>(&self, codes: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        codes.into_iter().any(|code| self.includes(code.as_ref()))
    }

    /// Whether every one of `codes` belongs to the list.
    #[must_use]
    pub fn includes_all<I>(&self, codes: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        codes.into_iter().all(|code| self.includes(code.as_ref()))
    }

    /// Creates a list with the codes and ranges of both lists.
    ///
    /// The result uses strict matching if either input does. Exclusions of the inputs are not
    /// carried over, as the union of two lists with different exclusions cannot be expressed
    /// as a single list.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            codes: self.codes.iter().chain(&other.codes).cloned().collect(),
            ranges: self.ranges.iter().chain(&other.ranges).cloned().collect(),
            match_mode: self.match_mode.combine(other.match_mode),
            except: None,
        }
    }

    /// Creates a copy of this list that excludes every code that belongs to `other`.
    ///
    /// Exclusions accumulate: if this list already excludes some codes, the new list excludes
    /// those codes as well as the ones in `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use codelist::CodeList;
    ///
    /// let codes = CodeList::parse("A001..A009")
    ///     .except(&CodeList::parse("A003"))
    ///     .except(&CodeList::parse("A005"));
    ///
    /// assert!(codes.includes("A004"));
    /// assert!(!codes.includes("A003"));
    /// assert!(!codes.includes("A005"));
    /// ```
    #[must_use]
    pub fn except(&self, other: &Self) -> Self {
        let except = match &self.except {
            Some(existing) => existing.merge(other),
            None => other.clone(),
        };

        Self {
            codes: self.codes.clone(),
            ranges: self.ranges.clone(),
            match_mode: self.match_mode,
            except: Some(Box::new(except)),
        }
    }
}

/// Splits normalized input into candidate codes and ranges. Anything that is not an ASCII
/// letter, digit or `.` separates tokens.
fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
        .filter(|token| !token.is_empty())
}

impl CodeFinder for CodeList {
    fn has_any(&self, codes: &[&str]) -> bool {
        self.includes_any(codes)
    }

    fn has_all(&self, codes: &[&str]) -> bool {
        self.includes_all(codes)
    }
}

impl FromStr for CodeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

/// Renders the codes and ranges sorted and comma-separated, e.g. `A001,A002,A003..A010`.
///
/// Exclusions are appended as ` EXCEPT [...]`. The exclusion suffix is for humans and is not
/// understood by the parser.
impl fmt::Display for CodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .codes
            .iter()
            .cloned()
            .chain(self.ranges.iter().map(ToString::to_string))
            .sorted()
            .join(",");

        write!(f, "{entries}")?;

        if let Some(except) = &self.except {
            write!(f, " EXCEPT [{except}]")?;
        }

        Ok(())
    }
}
