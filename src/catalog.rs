//! Message catalog: per-failure message templates and positional rendering.
//!
//! Every message a guard error can produce lives here as a `{0}`/`{1}`
//! positional template, keyed by [`MessageKey`]. The table is `const` data,
//! read-only for the life of the process, so concurrent lookups need no
//! synchronization.

use std::fmt::{self, Write};

/// Symbolic key for one message template.
///
/// Keys are finer-grained than [`crate::ErrorKind`]: an out-of-range failure
/// has distinct below-minimum and above-maximum wordings under the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// A required argument was null.
    ArgumentNull,
    /// A value that an invariant promises non-null was null.
    NullReference,
    /// An argument fell below its permissible minimum.
    OutOfRangeLow,
    /// An argument exceeded its permissible maximum.
    OutOfRangeHigh,
    /// An index was negative.
    NegativeIndex,
    /// A sequence contained a null element.
    SequenceNullElement,
    /// An already-disposed object was used.
    ObjectDisposed,
    /// Display metadata matched more than one constant.
    AmbiguousDisplayValue,
    /// Fallback marker for a failure with no classification.
    ObscureError,
}

const ARGUMENT_NULL: &str = "Argument \"{0}\" must not be null.";
const NULL_REFERENCE: &str = "Object \"{0}\" of type \"{1}\" was null.";
const OUT_OF_RANGE_LOW: &str = "Argument \"{0}\" must not be less than \"{1}\".";
const OUT_OF_RANGE_HIGH: &str = "Argument \"{0}\" must not be greater than \"{1}\".";
const NEGATIVE_INDEX: &str = "Index \"{0}\" must not be less than zero.";
const SEQUENCE_NULL_ELEMENT: &str = "Sequence \"{0}\" contains a null element at position {1}.";
const OBJECT_DISPOSED: &str = "Object \"{0}\" of type \"{1}\" has been disposed.";
const AMBIGUOUS_DISPLAY_VALUE: &str =
    "Type \"{0}\" declares more than one constant with display value \"{1}\".";
const OBSCURE_ERROR: &str = "An unknown error was raised.";

/// Returns the template text for `key`.
pub const fn template(key: MessageKey) -> &'static str {
    match key {
        MessageKey::ArgumentNull => ARGUMENT_NULL,
        MessageKey::NullReference => NULL_REFERENCE,
        MessageKey::OutOfRangeLow => OUT_OF_RANGE_LOW,
        MessageKey::OutOfRangeHigh => OUT_OF_RANGE_HIGH,
        MessageKey::NegativeIndex => NEGATIVE_INDEX,
        MessageKey::SequenceNullElement => SEQUENCE_NULL_ELEMENT,
        MessageKey::ObjectDisposed => OBJECT_DISPOSED,
        MessageKey::AmbiguousDisplayValue => AMBIGUOUS_DISPLAY_VALUE,
        MessageKey::ObscureError => OBSCURE_ERROR,
    }
}

/// Renders the template for `key`, substituting `{n}` with `args[n]`.
///
/// A placeholder with no corresponding argument is left verbatim; surplus
/// arguments are ignored. Templates are trusted const data, so neither case
/// is an error.
pub fn render(key: MessageKey, args: &[&dyn fmt::Display]) -> String {
    let template = template(key);
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('}') {
            Some(close) => {
                match tail[1..close].parse::<usize>() {
                    Ok(index) if index < args.len() => {
                        let _ = write!(out, "{}", args[index]);
                    }
                    _ => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
