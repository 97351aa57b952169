//! Hex normalization for hardware-address style identifiers.

/// Strips every character that is not `0-9a-fA-F` and lower-cases the rest.
///
/// Separators such as `:`, `-`, `.` and whitespace disappear, but so does any
/// other non-hex character; callers that care must check the resulting length.
pub fn normalize_hex(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns true if the normalized form of `raw` is lower-case hex and, when
/// `expected_len` is given, exactly that many digits long.
pub fn is_hex_of_length(raw: &str, expected_len: Option<usize>) -> bool {
    let hex = normalize_hex(raw);
    if expected_len.is_some_and(|len| hex.len() != len) {
        return false;
    }
    is_lower_hex(&hex)
}

pub(crate) fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
