/// Scope satisfaction module
///
/// Matches client scopes, which may end in a `*` wildcard, against
/// requirements written as an OR of ANDs of literal scopes.
///
/// # Examples
///
/// ```
/// use cretoai_scopes::scope::{scope_match, Given, Required};
///
/// assert!(scope_match("abc:*", "abc:def"));
///
/// let given = Given::new(["abc:*", "123:4:5"]);
/// let required = Required::from(vec![vec!["abc:def", "AB:CD:EF"], vec!["123:4:5"]]);
/// assert!(given.satisfies(&required));
/// ```

mod matcher;
mod types;


pub use matcher::{scope_match, WILDCARD};
pub use types::{satisfies, Given, Required, ScopeSet};
