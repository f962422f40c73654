//! Single-scope matching
//!
//! A given scope satisfies a required scope when the two are equal, or when
//! the given scope ends with the wildcard marker and the text before the
//! marker is a prefix of the required scope.

/// Trailing marker that turns a given scope into a prefix grant
pub const WILDCARD: char = '*';

/// Returns `true` if `given` satisfies `required`
///
/// Only a trailing `*` on the given side has wildcard meaning. A `*` anywhere
/// else, or anywhere in `required`, is compared as a literal character.
///
/// # Examples
///
/// ```
/// use cretoai_scopes::scope::scope_match;
///
/// assert!(scope_match("abc:*", "abc:def"));
/// assert!(scope_match("abc:de*", "abc:def"));
/// assert!(scope_match("*", "anything"));
/// assert!(!scope_match("abc:def", "abc:*"));
/// ```
#[inline]
pub fn scope_match(given: &str, required: &str) -> bool {
    if given == required {
        return true;
    }

    match given.strip_suffix(WILDCARD) {
        Some(prefix) => required.starts_with(prefix),
        None => false,
    }
}
