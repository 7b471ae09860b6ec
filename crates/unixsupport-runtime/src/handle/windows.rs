//! Windows: kernel `HANDLE`s and Winsock `SOCKET`s.

use windows_sys::Win32::Foundation::{CloseHandle, GetLastError, HANDLE};
use windows_sys::Win32::Networking::WinSock::{closesocket, WSAGetLastError, SOCKET, SOCKET_ERROR};

use unixsupport_core::{win32, NativeErrorCode};

use super::Closer;

pub type RawHandle = HANDLE;
pub type RawSocket = SOCKET;

#[inline]
pub(super) fn handle_bits(h: RawHandle) -> u64 {
    h as i64 as u64
}

#[inline]
pub(super) fn socket_bits(s: RawSocket) -> u64 {
    s as u64
}

/// Releases with `CloseHandle` / `closesocket`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCloser;

impl Closer for SystemCloser {
    fn close_handle(&self, raw: RawHandle) -> Result<(), NativeErrorCode> {
        if unsafe { CloseHandle(raw) } == 0 {
            return Err(win32::normalize(unsafe { GetLastError() }));
        }
        Ok(())
    }

    fn close_socket(&self, raw: RawSocket) -> Result<(), NativeErrorCode> {
        if unsafe { closesocket(raw) } == SOCKET_ERROR {
            return Err(win32::normalize(unsafe { WSAGetLastError() } as u32));
        }
        Ok(())
    }
}
