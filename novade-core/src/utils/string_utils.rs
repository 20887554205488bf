//! String Manipulation Utilities.

/// Truncates `s` to at most `max_bytes` bytes without splitting a UTF-8 character.
///
/// Fixed-capacity text fields (such as window titles) store at most a given
/// number of bytes. Unlike an ellipsis-style truncation, the result is always a
/// prefix of the input.
///
/// # Examples
///
/// ```
/// use novade_core::utils::string_utils::truncate_to_byte_limit;
///
/// assert_eq!(truncate_to_byte_limit("Hello, world!", 20), "Hello, world!");
/// assert_eq!(truncate_to_byte_limit("Hello, world!", 5), "Hello");
/// // 'é' is two bytes; it is dropped rather than split.
/// assert_eq!(truncate_to_byte_limit("café", 4), "caf");
/// ```
pub fn truncate_to_byte_limit(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
