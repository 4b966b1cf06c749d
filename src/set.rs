//! Change-tracked field mutation.
//!
//! [`set`] is the building block for observable properties: assign only if
//! the value actually differs, and tell observers exactly once, after the
//! commit. Because an equal value is a no-op with no callback, wiring two
//! properties to update each other cannot recurse indefinitely — the
//! write-back of an unchanged value terminates the cycle.

use crate::error::Result;
use crate::guard;

/// Commits `value` into `slot` when it differs from the current content.
///
/// Equality uses `T`'s own `PartialEq`; with `T = Option<U>` two absent
/// values compare equal and absent versus present compare unequal. On a real
/// change the callback runs exactly once, synchronously, with a reference to
/// the already-committed value; on a no-op it never runs. Returns whether
/// the slot changed.
///
/// The slot is borrowed only for the duration of the call and the callback
/// cannot alias it, so observers always see fully committed state.
pub fn set<T, F>(slot: &mut T, value: T, on_changed: Option<F>) -> bool
where
    T: PartialEq,
    F: FnOnce(&T),
{
    if *slot == value {
        return false;
    }

    *slot = value;
    if let Some(callback) = on_changed {
        callback(&*slot);
    }
    true
}

/// Like [`set`], but requires `value` to be present first.
///
/// Fails with [`ErrorKind::NullArgument`](crate::ErrorKind::NullArgument)
/// naming `argument` and leaves the slot untouched; otherwise delegates to
/// [`set`].
pub fn set_non_null<T, F>(
    slot: &mut Option<T>,
    value: Option<T>,
    on_changed: Option<F>,
    argument: &str,
) -> Result<bool>
where
    T: PartialEq,
    F: FnOnce(&Option<T>),
{
    let value = guard::require_non_null(value, argument)?;
    Ok(set(slot, Some(value), on_changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::cell::Cell;

    #[test]
    fn test_equal_value_is_a_noop() {
        let mut slot = 42;
        let fired = Cell::new(false);

        let changed = set(&mut slot, 42, Some(|_: &i32| fired.set(true)));

        assert!(!changed);
        assert!(!fired.get());
        assert_eq!(slot, 42);
    }

    #[test]
    fn test_different_value_commits_then_notifies_once() {
        let mut slot = 1;
        let calls = Cell::new(0);
        let observed = Cell::new(0);

        let changed = set(
            &mut slot,
            2,
            Some(|committed: &i32| {
                calls.set(calls.get() + 1);
                observed.set(*committed);
            }),
        );

        assert!(changed);
        assert_eq!(slot, 2);
        assert_eq!(calls.get(), 1);
        // The callback saw the slot's post-commit value.
        assert_eq!(observed.get(), 2);
    }

    #[test]
    fn test_callback_is_optional() {
        let mut slot = String::from("old");
        assert!(set(&mut slot, String::from("new"), None::<fn(&String)>));
        assert_eq!(slot, "new");
    }

    #[test]
    fn test_option_slot_follows_null_equality() {
        let mut slot: Option<i32> = None;

        // None over None: equal, no change.
        assert!(!set(&mut slot, None, None::<fn(&Option<i32>)>));

        // Some over None: unequal, commits.
        assert!(set(&mut slot, Some(3), None::<fn(&Option<i32>)>));
        assert_eq!(slot, Some(3));

        // Equal Some over Some: no change.
        assert!(!set(&mut slot, Some(3), None::<fn(&Option<i32>)>));

        // None over Some: unequal, commits.
        assert!(set(&mut slot, None, None::<fn(&Option<i32>)>));
        assert_eq!(slot, None);
    }

    #[test]
    fn test_set_non_null_rejects_absent_value() {
        let mut slot = Some(5);
        let fired = Cell::new(false);

        let error = set_non_null(
            &mut slot,
            None,
            Some(|_: &Option<i32>| fired.set(true)),
            "value",
        )
        .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NullArgument);
        assert_eq!(error.to_string(), "Argument \"value\" must not be null.");
        assert!(!fired.get());
        assert_eq!(slot, Some(5));
    }

    #[test]
    fn test_set_non_null_delegates_to_set() {
        let mut slot: Option<i32> = None;

        assert!(set_non_null(&mut slot, Some(7), None::<fn(&Option<i32>)>, "value").unwrap());
        assert_eq!(slot, Some(7));

        // Same value again: present, but equal, so no change.
        assert!(!set_non_null(&mut slot, Some(7), None::<fn(&Option<i32>)>, "value").unwrap());
    }
}
