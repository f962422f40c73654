//! Given and required scope types
//!
//! `Given` holds the scopes assigned to a client. `Required` holds, in
//! disjunctive normal form, the scope sets that are each sufficient to
//! authorize an action.

use std::fmt;

use tracing::{debug, trace};

use super::matcher::scope_match;
use crate::error::{Result, ScopesError};

/// Scopes assigned to a client
///
/// Entries are either literal scopes or prefixes ending in `*`. Order and
/// duplicates do not affect any check.
///
/// # Examples
///
/// ```
/// use cretoai_scopes::scope::{Given, Required};
///
/// let given = Given::from(vec!["abc:*", "123:4:56", "xyz", "AB:*"]);
/// let required = Required::from(vec![vec!["abc:def", "AB:CD:EF"]]);
///
/// assert!(given.satisfies(&required));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Given(Vec<String>);

/// A conjunction of literal required scopes
///
/// Every scope in the set must be satisfied for the set to be satisfied.
/// Required scopes never carry wildcard meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScopeSet(Vec<String>);

/// A disjunction of scope sets
///
/// ```text
/// ("abc:def" AND "AB:CD:EF") OR "123:4:5" OR ("abc:def" AND "123:4") OR "Xxyz"
/// ```
///
/// is written as
///
/// ```
/// use cretoai_scopes::scope::Required;
///
/// let required = Required::from(vec![
///     vec!["abc:def", "AB:CD:EF"],
///     vec!["123:4:5"],
///     vec!["abc:def", "123:4"],
///     vec!["Xxyz"],
/// ]);
/// assert_eq!(required.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Required(Vec<ScopeSet>);

impl Given {
    /// Creates a new set of given scopes
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(scopes.into_iter().map(Into::into).collect())
    }

    /// Returns a copy of these scopes with `extra` appended
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scopes = self.0.clone();
        scopes.extend(extra.into_iter().map(Into::into));
        Self(scopes)
    }

    /// Returns the number of given scopes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no scopes are given
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the given scopes
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns `true` if these scopes satisfy `required`
    ///
    /// At least one scope set must be fully satisfied. An empty requirement
    /// is never satisfied.
    pub fn satisfies(&self, required: &Required) -> bool {
        self.satisfying_set(required).is_some()
    }

    /// Returns the index of the first scope set these scopes satisfy
    pub fn satisfying_set(&self, required: &Required) -> Option<usize> {
        required.iter().position(|set| {
            let satisfied = self.satisfies_scope_set(set);
            trace!(scope_set = %set, satisfied, "Evaluated scope set");
            satisfied
        })
    }

    /// Returns `true` if every scope in `set` is satisfied
    ///
    /// An empty scope set is always satisfied.
    pub fn satisfies_scope_set(&self, set: &ScopeSet) -> bool {
        set.iter().all(|scope| self.satisfies_scope(scope))
    }

    /// Returns `true` if any given scope satisfies `required_scope`
    pub fn satisfies_scope(&self, required_scope: &str) -> bool {
        self.iter().any(|given| scope_match(given, required_scope))
    }

    /// Returns the scopes of `set` that no given scope satisfies
    pub fn missing_scopes<'a>(&self, set: &'a ScopeSet) -> Vec<&'a str> {
        set.iter()
            .filter(|scope| !self.satisfies_scope(scope))
            .collect()
    }

    /// Checks `required` and converts a denial into an error
    ///
    /// # Errors
    ///
    /// Returns [`ScopesError::InsufficientScopes`] if no scope set of
    /// `required` is satisfied.
    pub fn authorize(&self, required: &Required) -> Result<()> {
        if self.satisfies(required) {
            return Ok(());
        }

        debug!(%required, "Insufficient scopes");
        Err(ScopesError::InsufficientScopes {
            required: required.to_string(),
        })
    }
}

impl ScopeSet {
    /// Creates a scope set where all of `scopes` are required
    pub fn all_of<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(scopes.into_iter().map(Into::into).collect())
    }

    /// Returns the number of scopes in this set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the required scopes
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Required {
    /// Creates a requirement satisfied by any one of `sets`
    pub fn any_of<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = ScopeSet>,
    {
        Self(sets.into_iter().collect())
    }

    /// Returns the number of alternative scope sets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no alternatives
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the alternative scope sets
    pub fn iter(&self) -> std::slice::Iter<'_, ScopeSet> {
        self.0.iter()
    }
}

/// Returns `true` if `given` satisfies the DNF requirement `required`
///
/// Slice-based form of [`Given::satisfies`] for callers that already hold
/// plain string sequences.
///
/// ```
/// use cretoai_scopes::scope::satisfies;
///
/// let given = ["abc:*", "123:4:5"];
/// let required = [vec!["abc:def", "AB:CD:EF"], vec!["123:4:5"]];
/// assert!(satisfies(&given, &required));
/// ```
pub fn satisfies<G, S, R>(given: &[G], required: &[S]) -> bool
where
    G: AsRef<str>,
    S: AsRef<[R]>,
    R: AsRef<str>,
{
    required.iter().any(|set| {
        set.as_ref().iter().all(|scope| {
            given
                .iter()
                .any(|g| scope_match(g.as_ref(), scope.as_ref()))
        })
    })
}

impl<S: Into<String>> FromIterator<S> for Given {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for Given {
    fn from(scopes: Vec<S>) -> Self {
        Self::new(scopes)
    }
}

impl<S: Into<String>> FromIterator<S> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::all_of(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for ScopeSet {
    fn from(scopes: Vec<S>) -> Self {
        Self::all_of(scopes)
    }
}

impl FromIterator<ScopeSet> for Required {
    fn from_iter<I: IntoIterator<Item = ScopeSet>>(iter: I) -> Self {
        Self::any_of(iter)
    }
}

impl<S: Into<String>> From<Vec<Vec<S>>> for Required {
    fn from(sets: Vec<Vec<S>>) -> Self {
        Self(sets.into_iter().map(ScopeSet::from).collect())
    }
}

impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }

        for (idx, scope) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "\"{}\"", scope)?;
        }
        Ok(())
    }
}

impl fmt::Display for Required {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<unsatisfiable>");
        }

        for (idx, set) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, " OR ")?;
            }
            if set.len() > 1 {
                write!(f, "({})", set)?;
            } else {
                write!(f, "{}", set)?;
            }
        }
        Ok(())
    }
}
