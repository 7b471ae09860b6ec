//! Windows error normalizer.
//!
//! Folds the two Windows error spaces, system errors (`GetLastError`) and
//! Windows Sockets errors (`WSAGetLastError`), into the single signed
//! POSIX-shaped space consumed by [`WIN32_TABLE`].
//!
//! # Encoding
//!
//! ```text
//! Win32Error::Posix(e)   ->  e            (e >= 0, CRT errno)
//! Win32Error::Socket(w)  -> -w            (w = WSAE* constant)
//! Win32Error::Raw(w)     -> -w            (w = unmapped system error)
//! ```
//!
//! Negative values are therefore "a Windows code, negated". Negating again
//! recovers it. Sockets errors never take a positive CRT value, so they
//! cannot be mistaken for an unrelated POSIX error of the same magnitude.
//!
//! Codes above `i32::MAX` do not fit the scheme. Their negation wraps to
//! a positive value, which reads back as an (unknown) CRT errno, so an
//! HRESULT-shaped last error such as `0x8007_0005` loses its Windows
//! identity. `0x8000_0000` alone stays negative because it negates to
//! itself. System and Sockets errors live far below that bound.
//!
//! Compiled on every host: the tables are plain data.

pub mod codes;
mod table;

pub use table::WIN32_TABLE;

use crate::kind::NativeErrorCode;
use table::{POSIX_MAP, POSIX_RANGES, SOCKET_ERRORS};

/// A Windows error after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Win32Error {
    /// Mapped onto a CRT errno value.
    Posix(NativeErrorCode),
    /// Windows Sockets error, kept in its own namespace.
    Socket(u32),
    /// No POSIX equivalent; the raw Windows code.
    Raw(u32),
}

impl Win32Error {
    /// Classify a raw `GetLastError` / `WSAGetLastError` value.
    pub fn classify(win32: u32) -> Self {
        if let Some(&(_, posix)) = POSIX_MAP.iter().find(|(code, _)| *code == win32) {
            return Win32Error::Posix(posix);
        }
        if let Some((_, posix)) = POSIX_RANGES.iter().find(|(range, _)| range.contains(&win32)) {
            return Win32Error::Posix(*posix);
        }
        if is_socket_error(win32) {
            return Win32Error::Socket(win32);
        }
        Win32Error::Raw(win32)
    }

    /// Serialize into the signed native space (negation for Windows codes).
    ///
    /// Windows codes above `i32::MAX` wrap: the result is positive and
    /// [`from_native`](Self::from_native) reads it as `Posix`.
    #[inline]
    pub const fn to_native(self) -> NativeErrorCode {
        match self {
            Win32Error::Posix(code) => code,
            Win32Error::Socket(code) | Win32Error::Raw(code) => {
                (code as NativeErrorCode).wrapping_neg()
            }
        }
    }

    /// Inverse of [`to_native`](Self::to_native).
    pub fn from_native(code: NativeErrorCode) -> Self {
        if code >= 0 {
            return Win32Error::Posix(code);
        }
        let win32 = code.wrapping_neg() as u32;
        if is_socket_error(win32) {
            Win32Error::Socket(win32)
        } else {
            Win32Error::Raw(win32)
        }
    }

    /// The Windows code behind a negated value, if any.
    #[inline]
    pub const fn windows_code(self) -> Option<u32> {
        match self {
            Win32Error::Posix(_) => None,
            Win32Error::Socket(code) | Win32Error::Raw(code) => Some(code),
        }
    }
}

/// True for codes in the Windows Sockets namespace.
#[inline]
pub fn is_socket_error(win32: u32) -> bool {
    SOCKET_ERRORS.contains(&win32)
}

/// Map a Windows error code into the native space fed to the translator.
///
/// Mapped codes return their CRT errno. Sockets codes and unmapped codes
/// return `-(code as i32)`.
#[inline]
pub fn normalize(win32: u32) -> NativeErrorCode {
    Win32Error::classify(win32).to_native()
}

#[cfg(test)]
mod tests {
    use super::codes::*;
    use super::*;
    use crate::kind::ErrorKind;

    #[test]
    fn test_mapped_codes() {
        assert_eq!(normalize(ERROR_FILE_NOT_FOUND), crt::ENOENT);
        assert_eq!(normalize(ERROR_ACCESS_DENIED), crt::EACCES);
        assert_eq!(normalize(ERROR_BROKEN_PIPE), crt::EPIPE);
        assert_eq!(normalize(WSAEINVAL), crt::EINVAL);
        assert_eq!(WIN32_TABLE.encode(normalize(ERROR_PATH_NOT_FOUND)), ErrorKind::NoSuchFile);
    }

    #[test]
    fn test_range_codes() {
        assert_eq!(normalize(ERROR_WRITE_PROTECT), crt::EACCES);
        assert_eq!(normalize(ERROR_SHARING_VIOLATION), crt::EACCES);
        assert_eq!(normalize(ERROR_INVALID_STARTING_CODESEG + 3), crt::ENOEXEC);
    }

    #[test]
    fn test_sockets_segregation() {
        let cases = [
            (WSAEWOULDBLOCK, ErrorKind::WouldBlock),
            (WSAEINPROGRESS, ErrorKind::InProgress),
            (WSAEALREADY, ErrorKind::AlreadyInProgress),
            (WSAECONNREFUSED, ErrorKind::ConnectionRefused),
            (WSAECONNRESET, ErrorKind::ConnectionReset),
            (WSAEHOSTDOWN, ErrorKind::HostDown),
            (WSAELOOP, ErrorKind::TooManySymlinks),
            (WSAETIMEDOUT, ErrorKind::TimedOut),
        ];
        for (wsa, kind) in cases {
            let native = normalize(wsa);
            assert_eq!(native, -(wsa as i32));
            assert_eq!(Win32Error::classify(wsa), Win32Error::Socket(wsa));
            assert_eq!(WIN32_TABLE.encode(native), kind);
            // Same magnitude, positive sign: must not alias anything.
            assert!(WIN32_TABLE.encode(wsa as i32).is_unknown());
        }
    }

    #[test]
    fn test_every_socket_constant_negates() {
        for &wsa in SOCKET_ERRORS {
            assert_eq!(normalize(wsa), -(wsa as i32));
        }
    }

    #[test]
    fn test_unmapped_code_negates() {
        let code = 1_460; // ERROR_TIMEOUT, no POSIX counterpart here
        let native = normalize(code);
        assert_eq!(native, -1_460);
        assert_eq!(Win32Error::from_native(native), Win32Error::Raw(code));
        assert_eq!((-native) as u32, code);
        assert_eq!(WIN32_TABLE.encode(native), ErrorKind::Unknown(-1_460));
    }

    #[test]
    fn test_arithmetic_overflow_substitution() {
        let native = normalize(ERROR_ARITHMETIC_OVERFLOW);
        assert_eq!(native, -(ERROR_ARITHMETIC_OVERFLOW as i32));
        assert_eq!(WIN32_TABLE.encode(native), ErrorKind::Overflow);
    }

    #[test]
    fn test_hresult_shaped_code_wraps_positive() {
        let n = normalize(0x8007_0005);
        assert_eq!(n, 2_147_024_891);
        assert_eq!(Win32Error::from_native(n), Win32Error::Posix(n));
        assert_eq!(Win32Error::from_native(n).windows_code(), None);
        assert_eq!(WIN32_TABLE.encode(n), ErrorKind::Unknown(n));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(normalize(ERROR_SUCCESS), 0);
        let max = normalize(i32::MAX as u32);
        assert_eq!(max, -i32::MAX);
        assert_eq!(Win32Error::from_native(max).windows_code(), Some(i32::MAX as u32));
        let edge = normalize(0x8000_0000);
        assert_eq!(Win32Error::from_native(edge), Win32Error::Raw(0x8000_0000));
    }

    #[test]
    fn test_win32_table_round_trip() {
        for &kind in ErrorKind::KNOWN {
            assert_eq!(WIN32_TABLE.encode(WIN32_TABLE.decode(kind)), kind, "{:?}", kind);
        }
    }

    #[test]
    fn test_crt_errno_passes_through_unnormalized() {
        assert_eq!(WIN32_TABLE.encode(crt::EBADF), ErrorKind::BadDescriptor);
        assert_eq!(WIN32_TABLE.encode(crt::EMFILE), ErrorKind::TooManyOpenFiles);
        assert_eq!(Win32Error::from_native(crt::EBADF), Win32Error::Posix(crt::EBADF));
    }

    #[test]
    fn test_from_native_socket() {
        assert_eq!(
            Win32Error::from_native(-(WSAEWOULDBLOCK as i32)),
            Win32Error::Socket(WSAEWOULDBLOCK)
        );
        assert_eq!(Win32Error::from_native(2), Win32Error::Posix(2));
    }
}
