//! nullkit Core - Null-coalescing helpers
//!
//! This crate collects small helpers for values that may be absent:
//! - Presence checks (`is_null`, `is_not_null`)
//! - Default substitution, eager and lazy (`or`, `or_get`)
//! - Conditional filtering and null-propagating mapping (`when`, `map_to`)
//! - Runtime downcasting through a type descriptor (`as_type`)
//!
//! Every helper exists both as a free function in [`nulls`] and as a
//! method on `Option` through the traits in [`ext`].
//!
//! ```rust
//! use nullkit_core::NullsExt;
//!
//! let title = Some("The original string");
//! let picked = title
//!     .when(|s| s.contains("original"))
//!     .or_value("Another string");
//! assert_eq!(picked, "The original string");
//!
//! let missing: Option<&str> = None;
//! assert_eq!(missing.or_value("world"), "world");
//! ```

pub mod descriptor;
pub mod error;
pub mod ext;
pub mod nulls;

pub use descriptor::*;
pub use error::*;
pub use ext::*;
