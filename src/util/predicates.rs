//! Value predicates.
//!
//! The string predicates follow JavaScript coercion rules closely enough that
//! values read from form fields or the DOM classify the same way in Rust as
//! they do in the browser. The `JsValue` predicates are only compiled for the
//! browser.

#[cfg(test)]
#[path = "predicates_test.rs"]
mod predicates_test;

/// Whether `s` is empty or whitespace only.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Whether `s` contains at least one non-whitespace character.
#[must_use]
pub fn is_non_blank(s: &str) -> bool {
    !is_blank(s)
}

/// Whether the whole of `s` (ignoring surrounding whitespace) is a finite number.
///
/// Accepts decimal literals with optional sign, fraction, and exponent, and
/// unsigned `0x`/`0o`/`0b` integer literals. Rejects blank input, `Infinity`,
/// values that overflow to infinity, and any trailing garbage such as units.
#[must_use]
pub fn is_numeric_str(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    if let Some(valid) = radix_literal(trimmed) {
        return valid;
    }
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        // Rules out "inf", "NaN", and friends that `f64::from_str` accepts.
        return false;
    }
    trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// `Some(valid)` when `s` carries a radix prefix, `None` otherwise.
fn radix_literal(s: &str) -> Option<bool> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    Some(!digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}

/// Trimmed copy of `value`, or an empty string when there is none.
#[must_use]
pub fn trim_as_string(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}

#[cfg(feature = "csr")]
pub use self::js::*;

#[cfg(feature = "csr")]
mod js {
    use js_sys::{Array, Date, JsString, Object};
    use wasm_bindgen::{JsCast, JsValue};

    #[must_use]
    pub fn is_undefined(v: &JsValue) -> bool {
        v.is_undefined()
    }

    #[must_use]
    pub fn is_function(v: &JsValue) -> bool {
        v.is_function()
    }

    #[must_use]
    pub fn is_boolean(v: &JsValue) -> bool {
        v.as_bool().is_some()
    }

    #[must_use]
    pub fn is_array(v: &JsValue) -> bool {
        Array::is_array(v)
    }

    /// A number primitive that is neither infinite nor NaN.
    #[must_use]
    pub fn is_finite_numeric(v: &JsValue) -> bool {
        v.as_f64().is_some_and(f64::is_finite)
    }

    /// A `Date` object holding a real time value.
    #[must_use]
    pub fn is_valid_date(v: &JsValue) -> bool {
        v.dyn_ref::<Date>().is_some_and(|d| !d.get_time().is_nan())
    }

    /// A string primitive or a `String` wrapper object.
    #[must_use]
    pub fn is_string(v: &JsValue) -> bool {
        v.is_string() || v.is_instance_of::<JsString>()
    }

    /// The string content of a primitive or wrapper, if `v` is a string.
    #[must_use]
    pub fn string_value(v: &JsValue) -> Option<String> {
        if let Some(s) = v.as_string() {
            return Some(s);
        }
        if v.is_instance_of::<JsString>() {
            return JsValue::from(v.unchecked_ref::<Object>().value_of()).as_string();
        }
        None
    }

    #[must_use]
    pub fn is_non_blank_string(v: &JsValue) -> bool {
        string_value(v).is_some_and(|s| super::is_non_blank(&s))
    }

    #[must_use]
    pub fn is_blank_string(v: &JsValue) -> bool {
        string_value(v).is_some_and(|s| super::is_blank(&s))
    }

    #[must_use]
    pub fn is_string_finite_numeric(v: &JsValue) -> bool {
        string_value(v).is_some_and(|s| super::is_numeric_str(&s))
    }

    /// Trimmed string content of `v`; empty for non-strings.
    #[must_use]
    pub fn js_trim_as_string(v: &JsValue) -> String {
        super::trim_as_string(string_value(v).as_deref())
    }
}
