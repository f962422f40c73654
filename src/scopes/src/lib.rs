//! # CretoAI Scopes
//!
//! Scope satisfaction checks for client authorization.
//!
//! ## Features
//!
//! - **Trailing wildcards** on given scopes (`queue:*` grants `queue:create`)
//! - **DNF requirements**: any one of several scope sets, each fully required
//! - **Pure predicates**, safe to call from any number of threads
//! - **Boundary errors** via `Given::authorize` for API handlers
//!
//! ## Example
//!
//! ```rust
//! use cretoai_scopes::{Given, Required};
//!
//! let given = Given::new(["abc:*", "123:4:56", "xyz", "AB:*"]);
//! let required = Required::from(vec![
//!     vec!["abc:def", "AB:CD:EF"],
//!     vec!["123:4:5"],
//! ]);
//!
//! if given.satisfies(&required) {
//!     println!("Access granted!");
//! }
//! ```

pub mod error;
pub mod scope;

// Re-export commonly used types
pub use error::{Result, ScopesError};
pub use scope::{satisfies, scope_match, Given, Required, ScopeSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
