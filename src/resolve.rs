//! Resolution of enum constants from their display metadata.
//!
//! Enums shown to humans usually carry a friendlier label than their
//! symbolic identifier. [`DisplayMetadata`] is the side-table tying each
//! constant to that label; the resolvers walk it back from a label to the
//! constant at UI and serialization boundaries.
//!
//! ```
//! use parapet::{resolve, DisplayMetadata};
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! enum OrderState {
//!     Open,
//!     Settled,
//! }
//!
//! impl DisplayMetadata for OrderState {
//!     const VARIANTS: &'static [Self] = &[OrderState::Open, OrderState::Settled];
//!
//!     fn display_name(&self) -> Option<&'static str> {
//!         match self {
//!             OrderState::Open => Some("Open order"),
//!             OrderState::Settled => Some("Settled order"),
//!         }
//!     }
//! }
//!
//! let state = resolve::resolve_by_display_name::<OrderState>("Settled order").unwrap();
//! assert_eq!(state, Some(OrderState::Settled));
//! ```

use crate::catalog::{self, MessageKey};
use crate::error::{GuardError, Result};
use std::any;

/// Display metadata attached to an enum's constants.
///
/// Metadata is static and immutable for the life of the process, so lookups
/// are safe from any thread. A constant may omit either field; an omitted
/// field never matches anything.
pub trait DisplayMetadata: Copy + 'static {
    /// Every named constant of the type, in declaration order.
    const VARIANTS: &'static [Self];

    /// Human-facing name of this constant, if one is attached.
    fn display_name(&self) -> Option<&'static str> {
        None
    }

    /// Human-facing description of this constant, if one is attached.
    fn display_description(&self) -> Option<&'static str> {
        None
    }
}

/// Finds the constant of `E` whose display name equals `display_name`.
///
/// Comparison is exact and byte-wise; no locale-aware casing is applied.
/// Returns `Ok(None)` when no constant matches — an unknown label is a
/// normal outcome the caller interprets. Fails with
/// [`ErrorKind::InvalidOperation`](crate::ErrorKind::InvalidOperation) when
/// the label is attached to more than one constant, which is a
/// metadata-authoring bug.
pub fn resolve_by_display_name<E: DisplayMetadata>(display_name: &str) -> Result<Option<E>> {
    resolve_by(display_name, E::display_name)
}

/// Finds the constant of `E` whose display description equals
/// `display_description`.
///
/// Same contract as [`resolve_by_display_name`].
pub fn resolve_by_display_description<E: DisplayMetadata>(
    display_description: &str,
) -> Result<Option<E>> {
    resolve_by(display_description, E::display_description)
}

fn resolve_by<E, F>(display_value: &str, select: F) -> Result<Option<E>>
where
    E: DisplayMetadata,
    F: Fn(&E) -> Option<&'static str>,
{
    let mut found: Option<E> = None;
    for variant in E::VARIANTS {
        if select(variant).is_some_and(|attached| attached == display_value) {
            if found.is_some() {
                return Err(GuardError::invalid_operation(catalog::render(
                    MessageKey::AmbiguousDisplayValue,
                    &[&any::type_name::<E>(), &display_value],
                )));
            }
            found = Some(*variant);
        }
    }
    Ok(found)
}
