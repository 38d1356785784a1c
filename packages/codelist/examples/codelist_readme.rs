//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how to parse, query, combine and compact code lists.

use codelist::CodeList;

fn main() {
    println!("=== CodeList README Example ===");

    let hypertension = CodeList::parse("I10..I16, O10, O11");
    let secondary = CodeList::parse("I15");

    let primary = hypertension.except(&secondary);

    assert!(primary.includes("I10"));
    assert!(primary.includes("i11.9"));
    assert!(!primary.includes("I15"));

    println!("Primary hypertension codes: {primary}");

    let compacted = codelist::compact(3, ["E10", "E11", "E12", "E13", "O24"]).unwrap();
    assert_eq!(compacted, "E10..E13,O24");

    println!("Compacted: {compacted}");

    println!("README example completed successfully!");
}
