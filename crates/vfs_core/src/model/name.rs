//! Name policy shared by users, folders and files.
//!
//! # Responsibility
//! - Decide whether a candidate name is syntactically acceptable.
//! - Publish the per-level length ceilings enforced by the registries.
//!
//! # Invariants
//! - The same policy applies unchanged to every level of the namespace.
//! - Validation is a pure predicate with no side effects.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound for a bare name, and for the interior of a quoted name.
pub const MAX_NAME_CHARS: usize = 255;
/// Ceiling enforced by the user directory on registration.
pub const MAX_USERNAME_LEN: usize = 25;
/// Ceiling enforced by folder registries on create/rename.
pub const MAX_FOLDER_NAME_LEN: usize = 255;
/// Ceiling enforced by file registries on create.
pub const MAX_FILE_NAME_LEN: usize = 255;

static BARE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]._-]+$").expect("valid bare name regex"));
static QUOTED_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:"[[:alnum:]._[:space:]-]+"|'[[:alnum:]._[:space:]-]+')$"#)
        .expect("valid quoted name regex")
});

/// Returns whether `value` is an acceptable user, folder or file name.
///
/// Accepted shapes:
/// - bare: 1..=255 of ASCII letters, digits, `.`, `_`, `-`;
/// - quoted: the same set plus whitespace, wrapped in matching `"` or `'`,
///   with 1..=255 interior characters.
pub fn is_valid_name(value: &str) -> bool {
    if BARE_NAME_RE.is_match(value) {
        return value.len() <= MAX_NAME_CHARS;
    }
    if QUOTED_NAME_RE.is_match(value) {
        // Quotes are ASCII, so byte slicing stays on char boundaries.
        let interior = &value[1..value.len() - 1];
        return interior.chars().count() <= MAX_NAME_CHARS;
    }
    false
}

/// Length used against the per-level ceilings, quotes included.
pub fn name_len(value: &str) -> usize {
    value.chars().count()
}
