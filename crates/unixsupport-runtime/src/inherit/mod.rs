//! Per-handle inheritance across process creation.
//!
//! POSIX expresses it as close-on-exec (the inverted sense); Windows as
//! the handle's inherit flag. Failures return the native code so the
//! caller decides whether to raise it.
//!
//! The process-wide default lives in [`unixsupport_core::cloexec`].

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::*;
    } else if #[cfg(windows)] {
        mod windows;
        pub use windows::*;
    }
}

use unixsupport_core::{resolve_cloexec, NativeErrorCode};

use crate::handle::RawHandle;

/// Apply the resolved close-on-exec policy to a freshly created handle.
///
/// `cloexec` is the caller's explicit choice; `None` takes the process
/// default.
pub fn apply_cloexec(raw: RawHandle, cloexec: Option<bool>) -> Result<(), NativeErrorCode> {
    set_inheritable(raw, !resolve_cloexec(cloexec))
}
