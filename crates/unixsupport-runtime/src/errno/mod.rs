//! Native error table and the thread's last error.
//!
//! `NATIVE_TABLE` is the table every raise on this platform translates
//! with: libc errno constants on Unix, the normalized Windows table on
//! Windows.

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::*;
    } else if #[cfg(windows)] {
        mod windows;
        pub use windows::*;
    } else {
        compile_error!("Unsupported platform");
    }
}

use unixsupport_core::{ErrorKind, NativeErrorCode};

/// Native code -> portable kind on this platform.
#[inline]
pub fn encode(code: NativeErrorCode) -> ErrorKind {
    NATIVE_TABLE.encode(code)
}

/// Portable kind -> native code on this platform.
#[inline]
pub fn decode(kind: ErrorKind) -> NativeErrorCode {
    NATIVE_TABLE.decode(kind)
}

/// Kind of the calling thread's last native error.
#[inline]
pub fn last_error_kind() -> ErrorKind {
    encode(last_error())
}
