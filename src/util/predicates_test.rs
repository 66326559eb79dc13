use super::*;

// =============================================================
// Blank / non-blank
// =============================================================

#[test]
fn blank_strings() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(is_blank("\t\n"));
    assert!(!is_blank(" a "));
}

#[test]
fn non_blank_is_the_negation() {
    for s in ["", " ", "x", " x ", "\u{a0}"] {
        assert_eq!(is_non_blank(s), !is_blank(s));
    }
}

// =============================================================
// Numeric strings
// =============================================================

#[test]
fn decimal_literals_are_numeric() {
    for s in ["0", "42", "-7", "+3", "3.25", ".5", "1.", "1e3", "-2.5E-4", "  12  "] {
        assert!(is_numeric_str(s), "{s:?} should be numeric");
    }
}

#[test]
fn radix_literals_are_numeric() {
    for s in ["0x1F", "0XfF", "0o17", "0b101"] {
        assert!(is_numeric_str(s), "{s:?} should be numeric");
    }
}

#[test]
fn malformed_radix_literals_are_not_numeric() {
    for s in ["0x", "0b2", "0o9", "-0x10", "0xg"] {
        assert!(!is_numeric_str(s), "{s:?} should not be numeric");
    }
}

#[test]
fn blank_and_non_finite_are_not_numeric() {
    for s in ["", "   ", "Infinity", "-Infinity", "inf", "NaN", "1e400"] {
        assert!(!is_numeric_str(s), "{s:?} should not be numeric");
    }
}

#[test]
fn partial_numbers_are_not_numeric() {
    for s in ["12px", "1,000", "1_000", "true", "e5", "1e", "--1", "."] {
        assert!(!is_numeric_str(s), "{s:?} should not be numeric");
    }
}

// =============================================================
// Trim
// =============================================================

#[test]
fn trim_as_string_trims_present_values() {
    assert_eq!(trim_as_string(Some("  hello  ")), "hello");
}

#[test]
fn trim_as_string_is_empty_for_missing_values() {
    assert_eq!(trim_as_string(None), "");
}
