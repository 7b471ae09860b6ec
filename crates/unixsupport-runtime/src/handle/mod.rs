//! Owned wrapper around a native handle or socket.
//!
//! A [`Handle`] owns exactly one native resource and records which kind
//! it is. The kind is always declared by the caller through
//! [`Handle::wrap_handle`] or [`Handle::wrap_socket`]; it is never
//! inferred from the raw value.
//!
//! # Identity
//!
//! Equality and hashing use the raw native value only. Two wrappers
//! built independently around the same value are equal and hash alike,
//! so handle-keyed maps and sets behave.
//!
//! # Release
//!
//! The resource is released at most once: by [`Handle::finalize`] or on
//! drop, whichever comes first. A `released` flag guards the close, so a
//! second finalize is a no-op. [`Handle::into_raw`] gives the value back
//! without releasing it.

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::*;
    } else if #[cfg(windows)] {
        mod windows;
        pub use windows::*;
    }
}

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};

use unixsupport_core::NativeErrorCode;

/// What the wrapped value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// File, pipe, device or other non-socket handle.
    Handle,
    Socket,
}

/// A raw value tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawNative {
    Handle(RawHandle),
    Socket(RawSocket),
}

impl RawNative {
    #[inline]
    pub fn kind(self) -> HandleKind {
        match self {
            RawNative::Handle(_) => HandleKind::Handle,
            RawNative::Socket(_) => HandleKind::Socket,
        }
    }

    /// Raw value widened to 64 bits; the identity used for eq/hash.
    #[inline]
    fn bits(self) -> u64 {
        match self {
            RawNative::Handle(h) => handle_bits(h),
            RawNative::Socket(s) => socket_bits(s),
        }
    }
}

/// Releases native resources. [`SystemCloser`] is the platform one.
pub trait Closer {
    fn close_handle(&self, raw: RawHandle) -> Result<(), NativeErrorCode>;

    fn close_socket(&self, raw: RawSocket) -> Result<(), NativeErrorCode>;
}

/// Owned native handle or socket.
pub struct Handle<C: Closer = SystemCloser> {
    native: RawNative,
    /// C-runtime descriptor aliasing this handle, if one was opened.
    crt_fd: Option<i32>,
    blocking: bool,
    released: AtomicBool,
    closer: C,
}

impl Handle<SystemCloser> {
    /// Take ownership of a native file/device handle.
    pub fn wrap_handle(raw: RawHandle) -> Self {
        Self::with_closer(RawNative::Handle(raw), SystemCloser)
    }

    /// Take ownership of a native socket.
    pub fn wrap_socket(raw: RawSocket) -> Self {
        Self::with_closer(RawNative::Socket(raw), SystemCloser)
    }
}

impl<C: Closer> Handle<C> {
    /// Wrap `native`, released through `closer`. No CRT alias, blocking.
    pub fn with_closer(native: RawNative, closer: C) -> Self {
        Self {
            native,
            crt_fd: None,
            blocking: true,
            released: AtomicBool::new(false),
            closer,
        }
    }

    #[inline]
    pub fn kind(&self) -> HandleKind {
        self.native.kind()
    }

    #[inline]
    pub fn raw(&self) -> RawNative {
        self.native
    }

    #[inline]
    pub fn crt_fd(&self) -> Option<i32> {
        self.crt_fd
    }

    pub fn set_crt_fd(&mut self, fd: Option<i32>) {
        self.crt_fd = fd;
    }

    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    /// Record the blocking mode. The native mode is the caller's to set.
    pub fn set_blocking(&mut self, blocking: bool) {
        self.blocking = blocking;
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Release the native resource now.
    ///
    /// Only the first call closes; later calls return `Ok(())` without
    /// touching the resource. Safe to race from several threads.
    pub fn finalize(&self) -> Result<(), NativeErrorCode> {
        if self.released.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        unixsupport_core::utrace!("releasing {:?}", self.native);
        match self.native {
            RawNative::Handle(h) => self.closer.close_handle(h),
            RawNative::Socket(s) => self.closer.close_socket(s),
        }
    }

    /// Give up ownership without releasing.
    pub fn into_raw(self) -> RawNative {
        self.released.store(true, Ordering::Release);
        self.native
    }
}

impl<C: Closer> Drop for Handle<C> {
    fn drop(&mut self) {
        if let Err(code) = self.finalize() {
            unixsupport_core::uwarn!("releasing {:?} failed: error {}", self.native, code);
        }
    }
}

impl<C: Closer, D: Closer> PartialEq<Handle<D>> for Handle<C> {
    fn eq(&self, other: &Handle<D>) -> bool {
        self.native.bits() == other.native.bits()
    }
}

impl<C: Closer> Eq for Handle<C> {}

impl<C: Closer> Hash for Handle<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.native.bits().hash(state);
    }
}

impl<C: Closer> fmt::Debug for Handle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("native", &self.native)
            .field("crt_fd", &self.crt_fd)
            .field("blocking", &self.blocking)
            .field("released", &self.is_released())
            .finish()
    }
}
