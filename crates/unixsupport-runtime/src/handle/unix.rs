//! Unix: handles and sockets are both file descriptors.

use std::os::unix::io::RawFd;

use nix::unistd;
use unixsupport_core::NativeErrorCode;

use super::Closer;

pub type RawHandle = RawFd;
pub type RawSocket = RawFd;

#[inline]
pub(super) fn handle_bits(fd: RawHandle) -> u64 {
    fd as i64 as u64
}

#[inline]
pub(super) fn socket_bits(fd: RawSocket) -> u64 {
    fd as i64 as u64
}

/// Releases descriptors with `close(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCloser;

impl Closer for SystemCloser {
    fn close_handle(&self, raw: RawHandle) -> Result<(), NativeErrorCode> {
        unistd::close(raw).map_err(|e| e as NativeErrorCode)
    }

    fn close_socket(&self, raw: RawSocket) -> Result<(), NativeErrorCode> {
        unistd::close(raw).map_err(|e| e as NativeErrorCode)
    }
}
