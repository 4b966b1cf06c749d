//! Structured guard errors.
//!
//! [`GuardError`] is a closed tagged union: one variant per failure class,
//! each with a fixed set of contextual parameters. Construction cannot fail,
//! and every `Display` rendering goes through the message catalog so wording
//! stays centralized.

use crate::catalog::{self, MessageKey};
use std::any;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Classification of a guard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A required argument was null.
    NullArgument,
    /// A value that an invariant promises non-null was null.
    NullReference,
    /// An argument fell outside its permissible range.
    ArgumentOutOfRange,
    /// An index was negative.
    IndexOutOfRange,
    /// An operation was invalid in the current state.
    InvalidOperation,
    /// An already-disposed object was used.
    ObjectDisposed,
    /// A sequence contained a null element.
    NullSequenceElement,
}

/// The range bound an out-of-range argument violated.
///
/// Bound values are rendered with `Display` at construction, so the error
/// stays free of the argument's concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeBound {
    /// The argument was below this minimum.
    Minimum(String),
    /// The argument was above this maximum.
    Maximum(String),
}

impl RangeBound {
    /// Renders the out-of-range message for `argument` against this bound.
    pub fn message(&self, argument: &str) -> String {
        match self {
            RangeBound::Minimum(minimum) => {
                catalog::render(MessageKey::OutOfRangeLow, &[&argument, minimum])
            }
            RangeBound::Maximum(maximum) => {
                catalog::render(MessageKey::OutOfRangeHigh, &[&argument, maximum])
            }
        }
    }
}

/// A guard failure with its contextual parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuardError {
    /// A required argument was null.
    #[error("{}", catalog::render(MessageKey::ArgumentNull, &[.argument]))]
    NullArgument {
        /// Name of the offending argument.
        argument: String,
    },

    /// A value that an invariant promises non-null was null.
    #[error("{}", catalog::render(MessageKey::NullReference, &[.argument, .type_name]))]
    NullReference {
        /// Name of the offending value.
        argument: String,
        /// Declared type of the offending value.
        type_name: String,
    },

    /// An argument fell outside its permissible range.
    #[error("{}", .bound.message(.argument))]
    ArgumentOutOfRange {
        /// Name of the offending argument.
        argument: String,
        /// The violated bound.
        bound: RangeBound,
    },

    /// An index was negative.
    #[error("{}", catalog::render(MessageKey::NegativeIndex, &[.index]))]
    IndexOutOfRange {
        /// The offending index.
        index: isize,
    },

    /// An operation was invalid in the current state.
    #[error("{message}")]
    InvalidOperation {
        /// Fully formatted description of the failure.
        message: String,
    },

    /// An already-disposed object was used.
    #[error("{}", catalog::render(MessageKey::ObjectDisposed, &[.argument, .type_name]))]
    ObjectDisposed {
        /// Name of the disposed object.
        argument: String,
        /// Declared type of the disposed object.
        type_name: String,
    },

    /// A sequence contained a null element.
    #[error("{}", catalog::render(MessageKey::SequenceNullElement, &[.argument, .index]))]
    NullSequenceElement {
        /// Name of the sequence argument.
        argument: String,
        /// Position of the first null element.
        index: usize,
    },
}

impl GuardError {
    /// A required argument was null.
    pub fn null_argument(argument: impl Into<String>) -> Self {
        GuardError::NullArgument {
            argument: argument.into(),
        }
    }

    /// A value of type `T` that an invariant promises non-null was null.
    pub fn null_reference<T: ?Sized>(argument: impl Into<String>) -> Self {
        GuardError::NullReference {
            argument: argument.into(),
            type_name: any::type_name::<T>().to_owned(),
        }
    }

    /// An operation was invalid in the current state.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        GuardError::InvalidOperation {
            message: message.into(),
        }
    }

    /// An already-disposed object of type `T` was used.
    pub fn disposed<T: ?Sized>(argument: impl Into<String>) -> Self {
        GuardError::ObjectDisposed {
            argument: argument.into(),
            type_name: any::type_name::<T>().to_owned(),
        }
    }

    /// Classification of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuardError::NullArgument { .. } => ErrorKind::NullArgument,
            GuardError::NullReference { .. } => ErrorKind::NullReference,
            GuardError::ArgumentOutOfRange { .. } => ErrorKind::ArgumentOutOfRange,
            GuardError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            GuardError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            GuardError::ObjectDisposed { .. } => ErrorKind::ObjectDisposed,
            GuardError::NullSequenceElement { .. } => ErrorKind::NullSequenceElement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_catalog_rendering() {
        let error = GuardError::null_argument("factor");
        assert_eq!(
            error.to_string(),
            catalog::render(MessageKey::ArgumentNull, &[&"factor"]),
        );
    }

    #[test]
    fn test_null_reference_names_argument_and_type() {
        let error = GuardError::null_reference::<String>("label");
        let message = error.to_string();
        assert!(message.contains("\"label\""));
        assert!(message.contains("alloc::string::String"));
    }

    #[test]
    fn test_out_of_range_distinguishes_bounds() {
        let low = GuardError::ArgumentOutOfRange {
            argument: "count".to_owned(),
            bound: RangeBound::Minimum("1".to_owned()),
        };
        let high = GuardError::ArgumentOutOfRange {
            argument: "count".to_owned(),
            bound: RangeBound::Maximum("10".to_owned()),
        };
        assert_eq!(
            low.to_string(),
            "Argument \"count\" must not be less than \"1\"."
        );
        assert_eq!(
            high.to_string(),
            "Argument \"count\" must not be greater than \"10\"."
        );
    }

    #[test]
    fn test_invalid_operation_keeps_preformatted_message() {
        let error = GuardError::invalid_operation("State machine already sealed.");
        assert_eq!(error.to_string(), "State machine already sealed.");
    }

    #[test]
    fn test_kind_is_stable_per_variant() {
        assert_eq!(
            GuardError::null_argument("a").kind(),
            ErrorKind::NullArgument
        );
        assert_eq!(
            GuardError::null_reference::<u8>("a").kind(),
            ErrorKind::NullReference
        );
        assert_eq!(
            GuardError::IndexOutOfRange { index: -1 }.kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(
            GuardError::invalid_operation("bad state").kind(),
            ErrorKind::InvalidOperation
        );
        assert_eq!(
            GuardError::disposed::<u8>("a").kind(),
            ErrorKind::ObjectDisposed
        );
        assert_eq!(
            GuardError::NullSequenceElement {
                argument: "items".to_owned(),
                index: 0,
            }
            .kind(),
            ErrorKind::NullSequenceElement
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_error_round_trips_through_serde() {
        let error = GuardError::ArgumentOutOfRange {
            argument: "count".to_owned(),
            bound: RangeBound::Maximum("10".to_owned()),
        };
        let json = serde_json::to_string(&error).unwrap();
        let back: GuardError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }
}
