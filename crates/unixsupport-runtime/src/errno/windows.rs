//! Windows last-error access, normalized into the signed native space.

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::Networking::WinSock::WSAGetLastError;

use unixsupport_core::win32::{self, Win32Error};
use unixsupport_core::NativeErrorCode;

pub use unixsupport_core::win32::WIN32_TABLE as NATIVE_TABLE;

extern "C" {
    fn _errno() -> *mut libc::c_int;
}

/// `GetLastError()`, normalized.
///
/// Covers Win32 API failures only. CRT calls such as `_dup` or
/// `_open_osfhandle` report through the CRT `errno`; read that with
/// [`last_crt_error`].
#[inline]
pub fn last_error() -> NativeErrorCode {
    win32::normalize(unsafe { GetLastError() })
}

/// The calling thread's CRT `errno`.
///
/// CRT errno values are the non-negative half of the native space, so the
/// result goes to `raise_os_error` as is.
#[inline]
pub fn last_crt_error() -> NativeErrorCode {
    // SAFETY: `_errno` returns the calling thread's errno slot.
    unsafe { *_errno() }
}

/// `WSAGetLastError()`, normalized. Use after a failed Winsock call.
#[inline]
pub fn last_socket_error() -> NativeErrorCode {
    win32::normalize(unsafe { WSAGetLastError() } as u32)
}

/// Human-readable text for a normalized code.
///
/// Negative codes are negated Windows codes and get the system message;
/// the rest are CRT errno values.
pub fn error_message(code: NativeErrorCode) -> String {
    match Win32Error::from_native(code).windows_code() {
        Some(win32) => std::io::Error::from_raw_os_error(win32 as i32).to_string(),
        None => match NATIVE_TABLE.encode(code) {
            kind if kind.is_unknown() => format!("unknown error {}", code),
            kind => kind.description().to_string(),
        },
    }
}
