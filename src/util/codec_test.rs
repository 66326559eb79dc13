use super::*;

// =============================================================
// Input interpretation
// =============================================================

#[test]
fn utf8_input_is_taken_verbatim() {
    assert_eq!(InputKind::Utf8.to_bytes(" hé ").ok(), Some(" hé ".as_bytes().to_vec()));
}

#[test]
fn hex_input_ignores_spaces_and_tabs() {
    assert_eq!(InputKind::Hex.to_bytes("fb ff\t00").ok(), Some(vec![0xfb, 0xff, 0x00]));
    assert_eq!(InputKind::Hex.to_bytes("FBFF").ok(), Some(vec![0xfb, 0xff]));
}

#[test]
fn malformed_hex_is_an_error() {
    for bad in ["zz", "abc", "0x10"] {
        assert!(
            matches!(InputKind::Hex.to_bytes(bad), Err(UiError::InvalidHex(_))),
            "{bad:?} should be rejected"
        );
    }
}

// =============================================================
// Encode
// =============================================================

#[test]
fn encodes_text_with_padding() {
    assert_eq!(encode("hello", InputKind::Utf8, EncodeOutput::Standard).ok().as_deref(), Some("aGVsbG8="));
}

#[test]
fn url_safe_alphabet_differs_from_standard() {
    let standard = encode("fbff", InputKind::Hex, EncodeOutput::Standard);
    let url = encode("fbff", InputKind::Hex, EncodeOutput::UrlSafe);
    assert_eq!(standard.ok().as_deref(), Some("+/8="));
    assert_eq!(url.ok().as_deref(), Some("-_8="));
}

#[test]
fn empty_input_encodes_to_empty() {
    assert_eq!(encode("", InputKind::Utf8, EncodeOutput::Standard).ok().as_deref(), Some(""));
    assert_eq!(encode("", InputKind::Hex, EncodeOutput::UrlSafe).ok().as_deref(), Some(""));
}

#[test]
fn encode_reports_bad_hex_input() {
    assert!(encode("xyz", InputKind::Hex, EncodeOutput::Standard).is_err());
}

// =============================================================
// Decode
// =============================================================

#[test]
fn decodes_to_text() {
    assert_eq!(decode("aGVsbG8=", DecodeOutput::Utf8).ok().as_deref(), Some("hello"));
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    assert_eq!(decode("/w==", DecodeOutput::Utf8).ok().as_deref(), Some("\u{fffd}"));
}

#[test]
fn json_output_is_pretty_printed() {
    // {"a":1}
    assert_eq!(decode("eyJhIjoxfQ==", DecodeOutput::Json).ok().as_deref(), Some("{\n  \"a\": 1\n}"));
}

#[test]
fn json_output_falls_back_to_text() {
    assert_eq!(decode("aGVsbG8=", DecodeOutput::Json).ok().as_deref(), Some("hello"));
}

#[test]
fn simple_hex_lists_every_byte() {
    let Ok(out) = decode("aGVsbG8=", DecodeOutput::SimpleHex) else {
        panic!("valid base64");
    };
    assert_eq!(out.split_whitespace().collect::<String>(), "68656c6c6f");
    assert!(!out.contains("Length"));
}

#[test]
fn pretty_hex_has_header_and_ascii_column() {
    let Ok(out) = decode("aGVsbG8=", DecodeOutput::PrettyHex) else {
        panic!("valid base64");
    };
    assert!(out.starts_with("Length: 5"), "{out}");
    assert!(out.contains("hello"), "{out}");
}

#[test]
fn invalid_base64_is_an_error() {
    for bad in ["@@@@", "aGVsbG8", "-_8="] {
        assert!(
            matches!(decode(bad, DecodeOutput::Utf8), Err(UiError::InvalidBase64(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn empty_input_decodes_to_empty() {
    assert_eq!(decode("", DecodeOutput::Utf8).ok().as_deref(), Some(""));
}

// =============================================================
// Labels
// =============================================================

#[test]
fn option_keys_are_unique() {
    let keys: std::collections::BTreeSet<_> = DecodeOutput::ALL.iter().map(|o| o.key()).collect();
    assert_eq!(keys.len(), DecodeOutput::ALL.len());
    assert_eq!(EncodeOutput::UrlSafe.label(), "URL");
    assert_eq!(InputKind::Hex.label(), "Hex");
}
