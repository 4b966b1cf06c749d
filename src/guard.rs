//! Validation checks that fail fast with structured errors.
//!
//! Each check either passes or returns a [`GuardError`], so call sites read
//! as guard expressions:
//!
//! ```
//! use parapet::guard;
//!
//! fn scale(factor: Option<i32>) -> parapet::Result<i32> {
//!     let factor = guard::require_non_null(factor, "factor")?;
//!     guard::require_in_range(factor, 1, 100, "factor")?;
//!     Ok(factor * 10)
//! }
//!
//! assert_eq!(scale(Some(5)).unwrap(), 50);
//! assert!(scale(None).is_err());
//! ```
//!
//! Argument names are passed explicitly; errors carry them into the
//! formatted message.

use crate::error::{GuardError, RangeBound, Result};
use std::fmt;

/// Wraps a guard error in `Err`.
///
/// Exists so checks and their callers share one raising idiom; construction
/// of the error itself cannot fail.
pub fn raise<T>(error: GuardError) -> Result<T> {
    Err(error)
}

/// Requires `value` to be present, returning the inner value.
///
/// Fails with [`ErrorKind::NullArgument`](crate::ErrorKind::NullArgument)
/// naming `argument`. Use for caller-supplied arguments.
pub fn require_non_null<T>(value: Option<T>, argument: &str) -> Result<T> {
    value.ok_or_else(|| GuardError::null_argument(argument))
}

/// Requires `value` to be present, returning the inner value.
///
/// Fails with [`ErrorKind::NullReference`](crate::ErrorKind::NullReference)
/// naming `argument` and `T`. Use where an absent value means a broken
/// invariant rather than a bad caller argument.
pub fn require_non_null_ref<T>(value: Option<T>, argument: &str) -> Result<T> {
    value.ok_or_else(|| GuardError::null_reference::<T>(argument))
}

/// Requires `minimum <= value <= maximum`.
///
/// The below-minimum check runs first; a value violating both bounds of an
/// inverted range is reported against the minimum only.
pub fn require_in_range<T>(value: T, minimum: T, maximum: T, argument: &str) -> Result<()>
where
    T: PartialOrd + fmt::Display,
{
    if value < minimum {
        return raise(GuardError::ArgumentOutOfRange {
            argument: argument.to_owned(),
            bound: RangeBound::Minimum(minimum.to_string()),
        });
    }
    if value > maximum {
        return raise(GuardError::ArgumentOutOfRange {
            argument: argument.to_owned(),
            bound: RangeBound::Maximum(maximum.to_string()),
        });
    }
    Ok(())
}

/// Requires `index` to be non-negative.
pub fn require_index_non_negative(index: isize) -> Result<()> {
    if index < 0 {
        return raise(GuardError::IndexOutOfRange { index });
    }
    Ok(())
}

/// Requires the sequence and every element of it to be present.
///
/// The sequence is consumed in a single forward pass and scanning stops at
/// the first absent element, so lazy iterators are supported. Fails with
/// [`ErrorKind::NullArgument`](crate::ErrorKind::NullArgument) for an absent
/// sequence and
/// [`ErrorKind::NullSequenceElement`](crate::ErrorKind::NullSequenceElement)
/// for an absent element, citing its position.
pub fn require_no_null_elements<T, I>(sequence: Option<I>, argument: &str) -> Result<()>
where
    I: IntoIterator<Item = Option<T>>,
{
    let sequence = require_non_null(sequence, argument)?;
    for (index, element) in sequence.into_iter().enumerate() {
        if element.is_none() {
            return raise(GuardError::NullSequenceElement {
                argument: argument.to_owned(),
                index,
            });
        }
    }
    Ok(())
}

/// Raises [`ErrorKind::ObjectDisposed`](crate::ErrorKind::ObjectDisposed)
/// naming `argument` and `T`.
///
/// Disposal state is not tracked here; callers invoke this after they have
/// determined the object is disposed.
pub fn raise_disposed<T: ?Sized>(_value: &T, argument: &str) -> Result<()> {
    raise(GuardError::disposed::<T>(argument))
}

/// Runs `action` when `value` is absent.
///
/// Returns `true` if `action` ran.
pub fn run_if_null<T, F: FnOnce()>(value: Option<&T>, action: F) -> bool {
    if value.is_none() {
        action();
        true
    } else {
        false
    }
}
