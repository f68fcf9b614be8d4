// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Offsets handed to the rest of the crate are counted in characters, not
//! bytes, so a match in "café au lait" lands on the same group no matter how
//! many bytes the accented letter takes.

/// Fold a string for case-insensitive comparison.
///
/// Plain Unicode lowercasing. No diacritic stripping, no whitespace
/// collapsing: "Café" and "cafe" are different strings here.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Character offset of the first occurrence of `needle` in `haystack`.
///
/// Both arguments are expected to be folded already. An empty needle matches
/// at offset 0, same as `str::find`.
pub fn char_offset_of(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}

/// Length of a string in characters.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Split `value` into `(before, matched, after)` around a character range.
///
/// Both ends are clamped to the string, so a stale offset never panics; it
/// just yields a shorter (possibly empty) matched segment.
pub fn split_chars(value: &str, start: usize, len: usize) -> (&str, &str, &str) {
    let start_byte = byte_index(value, start);
    let end_byte = byte_index(value, start.saturating_add(len));
    (
        &value[..start_byte],
        &value[start_byte..end_byte],
        &value[end_byte..],
    )
}

/// Byte index of the `chars`-th character, or the string length past the end.
fn byte_index(value: &str, chars: usize) -> usize {
    value
        .char_indices()
        .nth(chars)
        .map_or(value.len(), |(idx, _)| idx)
}
