/// Returns the code that immediately follows `code` when compacting or expanding code ranges.
///
/// The code is treated as a fixed-length number whose positions are either decimal digits or
/// uppercase ASCII letters. The last position is incremented by one, `9` wrapping to `0` and `Z`
/// wrapping to `A` with a carry into the position to its left.
///
/// Returns `None` if the code has no successor of the same length:
///
/// * the carry propagates past the first position (e.g. `Z` or `99`);
/// * a position that needs to be incremented is not `0-9` or `A-Z` (lowercase letters included);
/// * the code is empty.
///
/// # Example
///
/// ```
/// assert_eq!(codelist::increment("A1").as_deref(), Some("A2"));
/// assert_eq!(codelist::increment("A9").as_deref(), Some("B0"));
/// assert_eq!(codelist::increment("AZ9").as_deref(), Some("BA0"));
/// assert_eq!(codelist::increment("Z"), None);
/// ```
#[must_use]
pub fn increment(code: &str) -> Option<String> {
    let mut bytes = code.as_bytes().to_vec();

    for byte in bytes.iter_mut().rev() {
        match *byte {
            b'9' => *byte = b'0',
            b'Z' => *byte = b'A',
            b'0'..=b'8' | b'A'..=b'Y' => {
                #[expect(
                    clippy::arithmetic_side_effects,
                    reason = "the match arm excludes the only values that could overflow"
                )]
                {
                    *byte += 1;
                }

                // Only ASCII bytes were rewritten, so the result is as valid as the input.
                return String::from_utf8(bytes).ok();
            }
            _ => return None,
        }
    }

    // Empty input or carry out of the most significant position.
    None
}
