//! The managed environment this layer reports to.
//!
//! A [`Host`] supplies the three collaborators the error path needs:
//! a named registry holding the error identity, a non-local propagation
//! primitive that never returns, and the calling thread's last native
//! error code.
//!
//! # Implementors
//!
//! - [`UnwindHost`]: pure-Rust hosts. `raise` unwinds the stack carrying
//!   the [`Raised`] signal; [`catch`] turns it back into a `Result` at
//!   the nearest handler.
//! - Language-runtime embedders implement `Host` over their own registry
//!   and exception machinery.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{RaiseResult, Raised};
use crate::kind::NativeErrorCode;

/// Contract consumed from the managed environment.
///
/// **Contract:**
/// - `lookup_registered_identity` must return the same reference for the
///   same name every time it succeeds. The raiser caches it and may
///   race other threads doing the same lookup.
/// - `raise` never returns.
/// - `last_native_error` reads the calling thread's error, already in the
///   native space of the table in use (normalized on Windows).
pub trait Host {
    type Identity: 'static;

    fn lookup_registered_identity(&self, name: &str) -> Option<&'static Self::Identity>;

    fn raise(&self, signal: Raised<Self::Identity>) -> !;

    fn last_native_error(&self) -> NativeErrorCode;
}

/// Name -> identity registry with a lookup counter.
pub struct Registry<I: 'static> {
    entries: Mutex<Vec<(String, &'static I)>>,
    lookups: AtomicUsize,
}

impl<I: 'static> Registry<I> {
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Register `identity` under `name`.
    ///
    /// Registering the same reference again is a no-op. A different
    /// identity under a taken name is refused with the one already held:
    /// raisers cache the first lookup, so a replacement would never reach
    /// them.
    pub fn register(&self, name: &str, identity: &'static I) -> Result<(), &'static I> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.iter().find(|(n, _)| n == name) {
            Some((_, held)) if std::ptr::eq(*held, identity) => Ok(()),
            Some((_, held)) => {
                crate::uwarn!("error identity `{}` already registered", name);
                Err(*held)
            }
            None => {
                entries.push((name.to_string(), identity));
                Ok(())
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&'static I> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().find(|(n, _)| n == name).map(|(_, id)| *id)
    }

    /// Number of `lookup` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl<I: 'static> Default for Registry<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Host backed by Rust unwinding.
///
/// `raise` resumes unwinding with the boxed signal as payload (the panic
/// hook is not run). Pair every raising call with [`catch`].
pub struct UnwindHost<I: Send + Sync + 'static> {
    registry: Registry<I>,
    last_error: fn() -> NativeErrorCode,
}

impl<I: Send + Sync + 'static> UnwindHost<I> {
    /// `last_error` reads the thread's native error; the runtime crate
    /// provides one per platform.
    pub const fn new(last_error: fn() -> NativeErrorCode) -> Self {
        Self { registry: Registry::new(), last_error }
    }

    pub fn registry(&self) -> &Registry<I> {
        &self.registry
    }
}

impl<I: Send + Sync + 'static> Host for UnwindHost<I> {
    type Identity = I;

    fn lookup_registered_identity(&self, name: &str) -> Option<&'static I> {
        self.registry.lookup(name)
    }

    fn raise(&self, signal: Raised<I>) -> ! {
        panic::resume_unwind(Box::new(signal))
    }

    fn last_native_error(&self) -> NativeErrorCode {
        (self.last_error)()
    }
}

/// Run `f`, converting a signal raised through an [`UnwindHost`] into `Err`.
///
/// Panics that are not `Raised<I>` keep unwinding.
pub fn catch<I, T, F>(f: F) -> RaiseResult<T, I>
where
    I: Send + Sync + 'static,
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Raised<I>>() {
            Ok(raised) => Err(*raised),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OsError;
    use crate::kind::ErrorKind;

    #[derive(Debug, PartialEq)]
    struct Ident(&'static str);

    static A: Ident = Ident("a");
    static B: Ident = Ident("b");

    #[test]
    fn test_registry_lookup_and_count() {
        let registry: Registry<Ident> = Registry::new();
        assert!(registry.lookup("a").is_none());
        assert_eq!(registry.register("a", &A), Ok(()));
        assert_eq!(registry.lookup("a"), Some(&A));
        assert_eq!(registry.lookups(), 2);
    }

    #[test]
    fn test_registry_refuses_different_identity() {
        let registry: Registry<Ident> = Registry::new();
        registry.register("x", &A).unwrap();
        assert_eq!(registry.register("x", &A), Ok(()));
        let held = registry.register("x", &B).unwrap_err();
        assert!(std::ptr::eq(held, &A));
        assert!(std::ptr::eq(registry.lookup("x").unwrap(), &A));
    }

    #[test]
    fn test_registry_refusal_keeps_cached_raiser_consistent() {
        let host: UnwindHost<Ident> = UnwindHost::new(|| 2);
        host.registry().register("unix_error", &A).unwrap();
        let raiser = crate::raise::ErrorRaiser::new(host, &crate::win32::WIN32_TABLE);
        assert!(std::ptr::eq(raiser.identity(), &A));

        assert!(raiser.host().registry().register("unix_error", &B).is_err());
        let looked_up = raiser.host().lookup_registered_identity("unix_error").unwrap();
        assert!(std::ptr::eq(raiser.identity(), looked_up));
    }

    #[test]
    fn test_catch_ok() {
        let r: Result<u32, Raised<Ident>> = catch(|| 7);
        assert_eq!(r.ok(), Some(7));
    }

    #[test]
    fn test_unwind_host_round_trip() {
        let host: UnwindHost<Ident> = UnwindHost::new(|| 2);
        assert_eq!(host.last_native_error(), 2);
        let r: Result<(), Raised<Ident>> = catch(|| {
            host.raise(Raised::Os {
                identity: &A,
                error: OsError::new(ErrorKind::NoSuchFile, "open", Some("/x")),
            })
        });
        let raised = r.unwrap_err();
        assert_eq!(raised.identity(), Some(&A));
        assert_eq!(raised.os_error().unwrap().argument(), "/x");
    }

    #[test]
    fn test_foreign_panic_propagates() {
        let outer = panic::catch_unwind(|| {
            let _: Result<(), Raised<Ident>> = catch(|| panic!("not ours"));
        });
        assert!(outer.is_err());
    }
}
