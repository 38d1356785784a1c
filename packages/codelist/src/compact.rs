use itertools::Itertools;
use tracing::{debug, trace};

use crate::{Error, RANGE_SEPARATOR, Result, increment, normalize};

/// Renders a list of individual codes as a compact [code list][crate], replacing runs of
/// consecutive codes with ranges.
///
/// The codes are normalized (trimmed and uppercased), sorted and deduplicated. Two codes are
/// consecutive if the second is the [`increment()`][fn@crate::increment] of the first. A run of
/// consecutive codes is written as `FIRST..LAST` if it has at least `minimum_run_length`
/// members; shorter runs are written out code by code. A single code is never written as a
/// range, whatever the minimum.
///
/// # Errors
///
/// Returns [`Error::CodeRangeInCompactionInput`] if any input code already contains `..`.
///
/// # Example
///
/// ```
/// let codes = ["F203", "A101", "A102", "A103", "A104"];
///
/// assert_eq!(codelist::compact(4, codes).unwrap(), "A101..A104,F203");
/// assert_eq!(
///     codelist::compact(5, codes).unwrap(),
///     "A101,A102,A103,A104,F203"
/// );
/// ```
pub fn compact<I>(minimum_run_length: usize, codes: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let codes: Vec<String> = codes
        .into_iter()
        .map(|code| {
            let code = code.as_ref();

            if code.contains(RANGE_SEPARATOR) {
                debug!(code, "rejecting code range in compaction input");
                return Err(Error::CodeRangeInCompactionInput {
                    code: code.to_string(),
                });
            }

            Ok(normalize(code))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .sorted()
        .dedup()
        .collect();

    let mut output = Vec::new();
    let mut remaining = codes.as_slice();

    while let Some((first, rest)) = remaining.split_first() {
        let successors = successor_count(remaining);
        let (run, after_run) = rest.split_at(successors);

        match run.last() {
            Some(last) if successors >= minimum_run_length.saturating_sub(1) => {
                output.push(format!("{first}{RANGE_SEPARATOR}{last}"));
                remaining = after_run;
            }
            _ => {
                output.push(first.clone());
                remaining = rest;
            }
        }
    }

    trace!(
        codes = codes.len(),
        entries = output.len(),
        minimum_run_length,
        "compacted codes"
    );

    Ok(output.join(","))
}

/// How many codes after the first one continue its run of consecutive codes.
///
/// [`increment()`] preserves length, so every code in a run has the length of the first.
fn successor_count(codes: &[String]) -> usize {
    codes
        .iter()
        .tuple_windows()
        .take_while(|(current, next)| increment(current).as_deref() == Some(next.as_str()))
        .count()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{CodeList, CodeRange};

    #[test]
    fn no_runs() {
        assert_eq!(compact(2, ["A101", "F203"]).unwrap(), "A101,F203");
    }

    #[test]
    fn sorts_codes() {
        assert_eq!(compact(2, ["F203", "A101"]).unwrap(), "A101,F203");
    }

    #[test]
    fn normalizes_and_deduplicates() {
        assert_eq!(
            compact(2, [" a101", "A102 ", "a101", "a103"]).unwrap(),
            "A101..A103"
        );
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(compact(2, Vec::<String>::new()).unwrap(), "");
    }

    #[test]
    fn code_range_in_input_is_error() {
        assert_eq!(
            compact(2, ["F203", "A101..A201"]).unwrap_err(),
            Error::CodeRangeInCompactionInput {
                code: "A101..A201".to_string()
            }
        );
    }

    #[test]
    fn compacts_runs() {
        assert_eq!(
            compact(2, ["F203", "A101", "A102", "A103", "A104"]).unwrap(),
            "A101..A104,F203"
        );
    }

    #[test]
    fn minimum_run_length_is_inclusive() {
        let codes = ["F203", "A101", "A102", "A103", "A104"];

        assert_eq!(compact(4, codes).unwrap(), "A101..A104,F203");
        assert_eq!(compact(5, codes).unwrap(), "A101,A102,A103,A104,F203");
    }

    #[test]
    fn exact_threshold_without_other_codes() {
        let codes = ["A101", "A102", "A103", "A104"];

        assert_eq!(compact(4, codes).unwrap(), "A101..A104");
        assert_eq!(compact(5, codes).unwrap(), "A101,A102,A103,A104");
    }

    #[test]
    fn single_code_is_never_a_range() {
        assert_eq!(compact(0, ["A1"]).unwrap(), "A1");
        assert_eq!(compact(1, ["A1", "C1"]).unwrap(), "A1,C1");
    }

    #[test]
    fn low_minimum_compacts_pairs() {
        assert_eq!(compact(0, ["A1", "A2", "C1"]).unwrap(), "A1..A2,C1");
        assert_eq!(compact(1, ["A1", "A2", "C1"]).unwrap(), "A1..A2,C1");
    }

    #[test]
    fn runs_follow_carry() {
        assert_eq!(
            compact(3, ["A98", "A99", "B00", "B01"]).unwrap(),
            "A98..B01"
        );
        assert_eq!(compact(2, ["AY", "AZ", "BA"]).unwrap(), "AY..BA");
    }

    #[test]
    fn multiple_runs() {
        assert_eq!(
            compact(3, ["D1", "D2", "D3", "D5", "D7", "D8", "D9", "E1", "E2"]).unwrap(),
            "D1..D3,D5,D7..D9,E1,E2"
        );
    }

    #[test]
    fn different_lengths_break_runs() {
        // "D9" is followed by "D10" numerically but not by the increment relation.
        assert_eq!(
            compact(2, ["D8", "D9", "D10", "D11"]).unwrap(),
            "D10..D11,D8..D9"
        );
    }

    #[test]
    fn codes_that_cannot_be_incremented_stay_single() {
        assert_eq!(
            compact(2, ["V90.8", "V90.9", "V91.0"]).unwrap(),
            "V90.8..V90.9,V91.0"
        );
        assert_eq!(compact(2, ["Z", "ZA"]).unwrap(), "Z,ZA");
    }

    #[test]
    fn round_trips_through_members() {
        let input = [
            "A101", "A102", "A103", "A104", "B7", "C10", "C11", "C12", "C13", "C14", "Q1", "Q3",
        ];

        let compacted = compact(3, input).unwrap();
        assert_eq!(compacted, "A101..A104,B7,C10..C14,Q1,Q3");

        let list = CodeList::parse(&compacted);
        let expanded = list
            .codes()
            .map(ToString::to_string)
            .chain(list.ranges().iter().flat_map(CodeRange::members))
            .sorted()
            .collect_vec();

        assert_eq!(expanded, input);
    }
}
