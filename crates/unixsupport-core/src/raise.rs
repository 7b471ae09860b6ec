//! The error raiser: native failure -> structured signal -> host.
//!
//! ```text
//! raise_os_error(code, "open", Some(path))
//!       │
//!       ├─ identity():  Acquire load ── hit ──▶ cached &'static Identity
//!       │                    │ miss
//!       │                    ▼
//!       │               host.lookup_registered_identity(name)
//!       │                    │ found            │ missing
//!       │                    ▼                  ▼
//!       │               Release store      raise NotLinked (fatal)
//!       │
//!       ├─ table.encode(code) ─▶ ErrorKind
//!       ▼
//! host.raise(Raised::Os { identity, OsError { kind, "open", path } })   // never returns
//! ```
//!
//! Threads racing through the miss path each look the identity up and
//! overwrite the cache. The host guarantees the lookup returns the same
//! reference every time, so every writer stores the same pointer; the
//! Release/Acquire pair makes the pointee visible to any reader that
//! sees a non-null value.

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

use crate::config::{defaults, SupportConfig};
use crate::error::{OsError, RaiseResult, Raised};
use crate::host::Host;
use crate::kind::{ErrorKind, NativeErrorCode};
use crate::table::ErrorTable;

/// Builds and delivers OS error signals through a [`Host`].
pub struct ErrorRaiser<H: Host> {
    host: H,
    table: &'static ErrorTable,
    identity_name: String,
    identity: AtomicPtr<H::Identity>,
}

impl<H: Host> ErrorRaiser<H> {
    /// Raiser translating with `table`, looking the identity up under the
    /// default name.
    pub fn new(host: H, table: &'static ErrorTable) -> Self {
        Self {
            host,
            table,
            identity_name: defaults::ERROR_IDENTITY.to_string(),
            identity: AtomicPtr::new(ptr::null_mut()),
        }
    }

    pub fn with_config(host: H, table: &'static ErrorTable, config: &SupportConfig) -> Self {
        Self::new(host, table).identity_name(config.identity_name.clone())
    }

    /// Override the registry name. Only meaningful before first use.
    pub fn identity_name(mut self, name: impl Into<String>) -> Self {
        self.identity_name = name.into();
        self
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn table(&self) -> &'static ErrorTable {
        self.table
    }

    /// True once the identity has been resolved and cached.
    pub fn identity_cached(&self) -> bool {
        !self.identity.load(Ordering::Acquire).is_null()
    }

    /// The cached error identity, resolving it on first use.
    ///
    /// Raises [`Raised::NotLinked`] if the host has nothing registered
    /// under the name.
    pub fn identity(&self) -> &'static H::Identity {
        let cached = self.identity.load(Ordering::Acquire);
        if !cached.is_null() {
            // SAFETY: only pointers derived from `&'static H::Identity`
            // are ever stored, and they are never written through.
            return unsafe { &*cached };
        }

        match self.host.lookup_registered_identity(&self.identity_name) {
            Some(identity) => {
                self.identity
                    .store(identity as *const H::Identity as *mut H::Identity, Ordering::Release);
                crate::udebug!("resolved error identity `{}`", self.identity_name);
                identity
            }
            None => self.host.raise(Raised::NotLinked {
                name: self.identity_name.clone(),
            }),
        }
    }

    /// Structured error for `code` without raising it.
    pub fn os_error(&self, code: NativeErrorCode, operation: &str, argument: Option<&str>) -> OsError {
        OsError::new(self.table.encode(code), operation, argument)
    }

    /// Raise the OS error `code` for `operation`. Never returns.
    pub fn raise_os_error(&self, code: NativeErrorCode, operation: &str, argument: Option<&str>) -> ! {
        let identity = self.identity();
        let error = self.os_error(code, operation, argument);
        self.host.raise(Raised::Os { identity, error })
    }

    /// Raise the calling thread's last native error.
    pub fn raise_from_errno(&self, operation: &str, argument: Option<&str>) -> ! {
        let code = self.host.last_native_error();
        self.raise_os_error(code, operation, argument)
    }

    /// Raise an invalid-argument failure.
    pub fn invalid_argument(&self, message: &str) -> ! {
        self.host.raise(Raised::InvalidArgument(message.to_string()))
    }

    /// Raise for a primitive this platform does not provide.
    pub fn unsupported(&self, primitive: &str) -> ! {
        self.invalid_argument(&format!("{} not implemented", primitive))
    }

    /// Reject paths a C call would silently truncate.
    ///
    /// A path with an interior NUL raises "no such file" for `operation`,
    /// with the path as the argument.
    pub fn check_path(&self, path: &str, operation: &str) {
        if path.as_bytes().contains(&0) {
            let enoent = self.table.decode(ErrorKind::NoSuchFile);
            self.raise_os_error(enoent, operation, Some(path));
        }
    }
}

impl<H: Host> ErrorRaiser<H>
where
    H::Identity: Send + Sync,
{
    /// Run `f`, turning a signal this raiser's host unwinds with into `Err`.
    ///
    /// For hosts whose `raise` unwinds with the boxed [`Raised`] payload,
    /// as [`UnwindHost`](crate::host::UnwindHost) does. The identity type
    /// comes from the host.
    pub fn catch<T, F>(&self, f: F) -> RaiseResult<T, H::Identity>
    where
        F: FnOnce() -> T,
    {
        crate::host::catch::<H::Identity, T, F>(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Registry, UnwindHost};
    use crate::kind::ErrorKind;
    use crate::win32::WIN32_TABLE;
    use std::sync::atomic::AtomicI32;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[derive(Debug, PartialEq)]
    struct ErrId(&'static str);

    static UNIX_ERROR: ErrId = ErrId("unix_error");

    /// Host double: counting registry plus a settable last error.
    struct TestHost {
        registry: Registry<ErrId>,
        last: AtomicI32,
    }

    impl TestHost {
        fn linked() -> Self {
            let host = Self::unlinked();
            host.registry.register("unix_error", &UNIX_ERROR).unwrap();
            host
        }

        fn unlinked() -> Self {
            Self { registry: Registry::new(), last: AtomicI32::new(0) }
        }
    }

    impl Host for TestHost {
        type Identity = ErrId;

        fn lookup_registered_identity(&self, name: &str) -> Option<&'static ErrId> {
            self.registry.lookup(name)
        }

        fn raise(&self, signal: Raised<ErrId>) -> ! {
            std::panic::resume_unwind(Box::new(signal))
        }

        fn last_native_error(&self) -> NativeErrorCode {
            self.last.load(Ordering::Relaxed)
        }
    }

    fn raiser(host: TestHost) -> ErrorRaiser<TestHost> {
        ErrorRaiser::new(host, &WIN32_TABLE)
    }

    #[test]
    fn test_open_nonexistent_end_to_end() {
        let r = raiser(TestHost::linked());
        let enoent = WIN32_TABLE.decode(ErrorKind::NoSuchFile);
        let raised = r.catch(|| r.raise_os_error(enoent, "open", Some("/nonexistent"))).unwrap_err();

        let err = raised.os_error().expect("os error");
        assert_eq!(err.kind(), ErrorKind::NoSuchFile);
        assert_eq!(err.operation(), "open");
        assert_eq!(err.argument(), "/nonexistent");
        assert!(std::ptr::eq(raised.identity().unwrap(), &UNIX_ERROR));
    }

    #[test]
    fn test_catch_takes_identity_from_host() {
        let host: UnwindHost<ErrId> = UnwindHost::new(|| 13);
        host.registry().register("unix_error", &UNIX_ERROR).unwrap();
        let r = ErrorRaiser::new(host, &WIN32_TABLE);

        let raised = r.catch(|| r.raise_from_errno("open", Some("/root/x"))).unwrap_err();
        assert_eq!(raised.os_error().unwrap().kind(), ErrorKind::PermissionDenied);
        assert_eq!(r.catch(|| 5).ok(), Some(5));
    }

    #[test]
    fn test_lookup_happens_once() {
        let r = raiser(TestHost::linked());
        assert!(!r.identity_cached());
        for _ in 0..5 {
            let _ = r.catch(|| r.raise_os_error(4, "read", None));
        }
        assert!(r.identity_cached());
        assert_eq!(r.host().registry.lookups(), 1);
    }

    #[test]
    fn test_missing_argument_is_empty_string() {
        let r = raiser(TestHost::linked());
        let raised = r.catch(|| r.raise_os_error(4, "select", None)).unwrap_err();
        assert_eq!(raised.os_error().unwrap().argument(), "");
    }

    #[test]
    fn test_unknown_code_preserved() {
        let r = raiser(TestHost::linked());
        let raised = r.catch(|| r.raise_os_error(-1_460, "connect", None)).unwrap_err();
        assert_eq!(raised.os_error().unwrap().kind(), ErrorKind::Unknown(-1_460));
    }

    #[test]
    fn test_not_linked_is_distinct() {
        let r = raiser(TestHost::unlinked());
        let raised = r.catch(|| r.raise_os_error(2, "open", None)).unwrap_err();
        match raised {
            Raised::NotLinked { name } => assert_eq!(name, "unix_error"),
            other => panic!("expected NotLinked, got {:?}", other),
        }
        assert!(!r.identity_cached());
    }

    #[test]
    fn test_custom_identity_name() {
        let host = TestHost::unlinked();
        host.registry.register("custom", &UNIX_ERROR).unwrap();
        let r = raiser(host).identity_name("custom");
        assert!(std::ptr::eq(r.identity(), &UNIX_ERROR));
    }

    #[test]
    fn test_raise_from_errno_reads_last_error() {
        let host = TestHost::linked();
        host.last.store(-10_061, Ordering::Relaxed); // negated WSAECONNREFUSED
        let r = raiser(host);
        let raised = r.catch(|| r.raise_from_errno("connect", Some("127.0.0.1:9"))).unwrap_err();
        let err = raised.os_error().unwrap();
        assert_eq!(err.kind(), ErrorKind::ConnectionRefused);
        assert_eq!(err.argument(), "127.0.0.1:9");
    }

    #[test]
    fn test_unsupported_primitive() {
        let r = raiser(TestHost::linked());
        let raised = r.catch(|| r.unsupported("setsid")).unwrap_err();
        match raised {
            Raised::InvalidArgument(msg) => assert_eq!(msg, "setsid not implemented"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_check_path() {
        let r = raiser(TestHost::linked());
        assert!(r.catch(|| r.check_path("/tmp/ok", "open")).is_ok());

        let raised = r.catch(|| r.check_path("/tmp/a\0b", "open")).unwrap_err();
        let err = raised.os_error().unwrap();
        assert_eq!(err.kind(), ErrorKind::NoSuchFile);
        assert_eq!(err.argument(), "/tmp/a\0b");
    }

    #[test]
    fn test_concurrent_first_use_agrees() {
        const THREADS: usize = 8;
        let r = Arc::new(raiser(TestHost::linked()));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let r = Arc::clone(&r);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    r.identity() as *const ErrId as usize
                })
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), &UNIX_ERROR as *const ErrId as usize);
        }
        let lookups = r.host().registry.lookups();
        assert!((1..=THREADS).contains(&lookups), "lookups = {}", lookups);

        let _ = r.identity();
        assert_eq!(r.host().registry.lookups(), lookups);
    }
}
