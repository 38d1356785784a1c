use thiserror::Error;

/// Errors that can occur when parsing or compacting code lists.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The code list was empty or consisted only of whitespace.
    #[error("code list cannot be blank")]
    BlankCode,

    /// The code is not of a type this package knows how to handle.
    ///
    /// Reserved for callers that classify codes before parsing them. The parser itself never
    /// returns this variant.
    #[error("invalid code type")]
    InvalidCodeType,

    /// The two bounds of a code range did not have the same length.
    #[error(
        "invalid code range '{begin}..{end}': beginning and end of a code range must have the same length"
    )]
    InvalidCodeRange {
        /// The first code in the range.
        begin: String,

        /// The last code in the range.
        end: String,
    },

    /// A part of the code list was neither a single code nor a well-formed code range.
    #[error("malformed code list: '{token}' is neither a code nor a code range")]
    MalformedCodeList {
        /// The part of the code list that could not be understood.
        token: String,
    },

    /// The input to compaction already contained range notation, whereas compaction expects
    /// every code to be spelled out individually.
    #[error("cannot compact '{code}': compaction input must not contain code ranges")]
    CodeRangeInCompactionInput {
        /// The input element that contained the range separator.
        code: String,
    },
}

/// A specialized `Result` type for code list operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug, Clone);

    #[test]
    fn messages_name_the_offending_input() {
        let error = Error::InvalidCodeRange {
            begin: "V90".to_string(),
            end: "V98.1".to_string(),
        };
        assert!(error.to_string().contains("'V90..V98.1'"));

        let error = Error::MalformedCodeList {
            token: "V90..V98..V99".to_string(),
        };
        assert!(error.to_string().contains("'V90..V98..V99'"));

        let error = Error::CodeRangeInCompactionInput {
            code: "A101..A201".to_string(),
        };
        assert!(error.to_string().contains("'A101..A201'"));
    }

    #[test]
    fn blank_code_is_error() {
        let result: Result<()> = Err(Error::BlankCode);
        assert_eq!(result.unwrap_err().to_string(), "code list cannot be blank");
    }
}
