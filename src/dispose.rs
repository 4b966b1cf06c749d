//! Capability-based disposal.
//!
//! A thin bridge between "this value may hold releasable resources" and
//! "release them now if so". Disposal ahead of drop lets callers observe
//! and report whether anything was actually released.

/// Hook for releasing held resources before the value is dropped.
///
/// Implementations must tolerate being called more than once.
pub trait Dispose {
    /// Releases the resources held by this value.
    fn dispose(&mut self);
}

/// Invokes the disposal hook when `value` is present.
///
/// Returns `true` if a hook ran.
pub fn dispose_object<T: Dispose + ?Sized>(value: Option<&mut T>) -> bool {
    match value {
        Some(disposable) => {
            disposable.dispose();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Connection {
        open: bool,
    }

    impl Dispose for Connection {
        fn dispose(&mut self) {
            self.open = false;
        }
    }

    #[test]
    fn test_dispose_object_runs_the_hook() {
        let mut connection = Connection { open: true };
        assert!(dispose_object(Some(&mut connection)));
        assert!(!connection.open);
    }

    #[test]
    fn test_dispose_object_without_value_is_a_noop() {
        assert!(!dispose_object(None::<&mut Connection>));
    }

    #[test]
    fn test_dispose_object_works_through_trait_objects() {
        let mut connection = Connection { open: true };
        let disposable: &mut dyn Dispose = &mut connection;
        assert!(dispose_object(Some(disposable)));
        assert!(!connection.open);
    }
}
