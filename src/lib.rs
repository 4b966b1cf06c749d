//! Defensive-programming primitives shared across an application.
//!
//! Three facilities with one error model:
//!
//! - [`guard`] — fail-fast validation checks (non-null, in-range,
//!   non-negative index, dense sequences) that return structured
//!   [`GuardError`]s with consistent, fully formatted messages.
//! - [`resolve`] — mapping user-facing display labels back to enum
//!   constants via the [`DisplayMetadata`] side-table, with ambiguity
//!   detection.
//! - [`set`] — equality-gated field mutation that notifies observers
//!   exactly once per real change, safe for mutually-referencing
//!   observable properties.
//!
//! Everything is synchronous, allocation-light, pure-CPU logic: no I/O, no
//! shared mutable state, no locking. The only process-wide data is the
//! read-only message catalog in [`catalog`].
//!
//! ```
//! use parapet::{guard, ErrorKind};
//!
//! let error = guard::require_non_null(None::<u32>, "retries").unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::NullArgument);
//! assert_eq!(error.to_string(), "Argument \"retries\" must not be null.");
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod dispose;
pub mod error;
pub mod guard;
pub mod resolve;
pub mod set;

pub use dispose::Dispose;
pub use error::{ErrorKind, GuardError, RangeBound, Result};
pub use resolve::DisplayMetadata;
