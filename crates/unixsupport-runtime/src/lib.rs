//! # unixsupport-runtime
//!
//! Platform-specific half of the support layer.
//!
//! This crate provides:
//! - The native error table (libc errno on Unix, normalized Win32 on Windows)
//! - The calling thread's last native error and its message
//! - Per-handle inheritance (close-on-exec)
//! - Owned handle/socket wrappers with at-most-once release
//! - `setsid`

pub mod errno;
pub mod handle;
pub mod inherit;
pub mod process;

// Re-exports
pub use errno::{
    decode, encode, error_message, last_crt_error, last_error, last_error_kind, NATIVE_TABLE,
};
pub use handle::{Closer, Handle, HandleKind, RawHandle, RawNative, RawSocket, SystemCloser};
pub use inherit::{apply_cloexec, is_inheritable, set_inheritable};
pub use process::setsid;

#[cfg(windows)]
pub use errno::last_socket_error;

use unixsupport_core::{ErrorRaiser, Host, SupportConfig, UnwindHost};

/// Wrap a native file/device handle.
#[inline]
pub fn wrap_handle(raw: RawHandle) -> Handle {
    Handle::wrap_handle(raw)
}

/// Wrap a native socket.
#[inline]
pub fn wrap_socket(raw: RawSocket) -> Handle {
    Handle::wrap_socket(raw)
}

/// Unwinding host reading this platform's last error.
pub fn unwind_host<I: Send + Sync + 'static>() -> UnwindHost<I> {
    UnwindHost::new(last_error)
}

/// Raiser translating with the native table, default identity name.
pub fn native_raiser<H: Host>(host: H) -> ErrorRaiser<H> {
    ErrorRaiser::new(host, &NATIVE_TABLE)
}

/// Raiser translating with the native table, identity name from `config`.
pub fn configured_raiser<H: Host>(host: H, config: &SupportConfig) -> ErrorRaiser<H> {
    ErrorRaiser::with_config(host, &NATIVE_TABLE, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unixsupport_core::ErrorKind;

    static UNIX_ERROR: &str = "unix_error";

    #[test]
    fn test_open_nonexistent_through_native_table() {
        let host = unwind_host::<&'static str>();
        host.registry().register("unix_error", &UNIX_ERROR).unwrap();
        let raiser = native_raiser(host);

        let code = decode(ErrorKind::NoSuchFile);
        let raised = raiser
            .catch(|| raiser.raise_os_error(code, "open", Some("/nonexistent")))
            .unwrap_err();
        let err = raised.os_error().unwrap();
        assert_eq!(err.kind(), ErrorKind::NoSuchFile);
        assert_eq!(err.operation(), "open");
        assert_eq!(err.argument(), "/nonexistent");
    }

    #[cfg(unix)]
    #[test]
    fn test_raise_from_errno_after_failed_call() {
        let host = unwind_host::<&'static str>();
        host.registry().register("unix_error", &UNIX_ERROR).unwrap();
        let raiser = native_raiser(host);

        let raised = raiser.catch(|| {
            let rc = unsafe { libc::close(-1) };
            assert_eq!(rc, -1);
            raiser.raise_from_errno("close", None)
        })
        .unwrap_err();
        assert_eq!(raised.os_error().unwrap().kind(), ErrorKind::BadDescriptor);
    }

    #[cfg(unix)]
    #[test]
    fn test_crt_error_after_failed_dup() {
        let host = unwind_host::<&'static str>();
        host.registry().register("unix_error", &UNIX_ERROR).unwrap();
        let raiser = native_raiser(host);

        let raised = raiser
            .catch(|| {
                let rc = unsafe { libc::dup(-1) };
                assert_eq!(rc, -1);
                raiser.raise_os_error(last_crt_error(), "dup", None)
            })
            .unwrap_err();
        assert_eq!(raised.os_error().unwrap().kind(), ErrorKind::BadDescriptor);
    }

    #[test]
    fn test_configured_identity_name() {
        let host = unwind_host::<&'static str>();
        host.registry().register("custom_error", &UNIX_ERROR).unwrap();
        let config = SupportConfig::new().identity_name("custom_error");
        let raiser = configured_raiser(host, &config);
        assert!(std::ptr::eq(raiser.identity(), &UNIX_ERROR));
    }
}
