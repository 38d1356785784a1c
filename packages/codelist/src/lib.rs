#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Parse, match and compact lists of classification codes such as medical diagnosis and
//! procedure codes.
//!
//! Example code list: `A001, A002, V90..V99`
//!
//! # Format
//!
//! A code list is free text made of codes and inclusive code ranges:
//!
//! * a code is a run of ASCII letters, digits and `.` (e.g. `A001` or `V90.1`);
//! * a range is two codes of the same length joined by `..` (e.g. `V90..V99`);
//! * anything else - commas, whitespace, newlines - separates entries.
//!
//! Codes are case-insensitive and normalized to uppercase. Consecutive separators are ignored.
//! A blank list is an error, as is a range with bounds of different lengths or with more than
//! one `..`.
//!
//! [`CodeList::to_string()`][CodeList] emits the same format in canonical form: entries sorted
//! and joined with `,` without whitespace.
//!
//! # Matching
//!
//! A code belongs to a [`CodeList`] if it is one of the listed codes or falls within one of the
//! listed ranges by string comparison. By default ([`MatchMode::Loose`]) codes longer than the
//! range bounds also match, so sub-codes such as `V90.1` fall within `V90..V99`. With
//! [`MatchMode::Strict`] only codes of the same length as the bounds match a range.
//!
//! # Example
//!
//! ```
//! use codelist::CodeList;
//!
//! let hypertension = CodeList::parse("I10..I16, O10, O11");
//!
//! assert!(hypertension.includes("I11.9"));
//! assert!(hypertension.includes("o10"));
//! assert!(!hypertension.includes("I20"));
//!
//! println!("Hypertension codes: {hypertension}");
//! ```
//!
//! Going the other way, [`compact()`] turns a list of individual codes into a code list that
//! uses ranges where the codes are consecutive:
//!
//! ```
//! let compacted = codelist::compact(3, ["A101", "A102", "A103", "A104", "F203"]).unwrap();
//! assert_eq!(compacted, "A101..A104,F203");
//! ```

mod code_list;
mod code_range;
mod compact;
mod error;
mod finder;
mod increment;
mod match_mode;

pub use code_list::*;
pub use code_range::*;
pub use compact::*;
pub use error::*;
pub use finder::*;
pub use increment::*;
pub use match_mode::*;

/// Separates the first and last code of a code range.
pub const RANGE_SEPARATOR: &str = "..";

pub(crate) fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
