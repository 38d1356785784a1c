/// Looks up codes in some collection of codes.
///
/// [`CodeList`][crate::CodeList] is the main implementation. The trait is object-safe, so code
/// that only needs to ask "does this contain any/all of these codes?" can accept
/// `&dyn CodeFinder` and work with any lookup strategy.
///
/// # Example
///
/// ```
/// use codelist::{CodeFinder, CodeList};
///
/// fn is_relevant(finder: &dyn CodeFinder, claim_codes: &[&str]) -> bool {
///     finder.has_any(claim_codes)
/// }
///
/// let diabetes = CodeList::parse("E10..E13, O24");
/// assert!(is_relevant(&diabetes, &["Z00", "E11.9"]));
/// ```
pub trait CodeFinder {
    /// Whether at least one of `codes` is found. `false` if `codes` is empty.
    fn has_any(&self, codes: &[&str]) -> bool;

    /// Whether every one of `codes` is found. `true` if `codes` is empty.
    fn has_all(&self, codes: &[&str]) -> bool;
}
