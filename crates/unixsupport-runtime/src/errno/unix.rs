//! POSIX errno table, read from libc.

use nix::errno::Errno;
use unixsupport_core::{ErrorTable, NativeErrorCode};

/// errno constants in `ErrorKind` declaration order.
///
/// `EAGAIN` and `EWOULDBLOCK` share a value on Linux and macOS; encode
/// reports the first, `ResourceUnavailable`.
pub static NATIVE_TABLE: ErrorTable = ErrorTable::new(
    "posix",
    [
        libc::E2BIG,
        libc::EACCES,
        libc::EAGAIN,
        libc::EBADF,
        libc::EBUSY,
        libc::ECHILD,
        libc::EDEADLK,
        libc::EDOM,
        libc::EEXIST,
        libc::EFAULT,
        libc::EFBIG,
        libc::EINTR,
        libc::EINVAL,
        libc::EIO,
        libc::EISDIR,
        libc::EMFILE,
        libc::EMLINK,
        libc::ENAMETOOLONG,
        libc::ENFILE,
        libc::ENODEV,
        libc::ENOENT,
        libc::ENOEXEC,
        libc::ENOLCK,
        libc::ENOMEM,
        libc::ENOSPC,
        libc::ENOSYS,
        libc::ENOTDIR,
        libc::ENOTEMPTY,
        libc::ENOTTY,
        libc::ENXIO,
        libc::EPERM,
        libc::EPIPE,
        libc::ERANGE,
        libc::EROFS,
        libc::ESPIPE,
        libc::ESRCH,
        libc::EXDEV,
        // sockets
        libc::EWOULDBLOCK,
        libc::EINPROGRESS,
        libc::EALREADY,
        libc::ENOTSOCK,
        libc::EDESTADDRREQ,
        libc::EMSGSIZE,
        libc::EPROTOTYPE,
        libc::ENOPROTOOPT,
        libc::EPROTONOSUPPORT,
        libc::ESOCKTNOSUPPORT,
        libc::EOPNOTSUPP,
        libc::EPFNOSUPPORT,
        libc::EAFNOSUPPORT,
        libc::EADDRINUSE,
        libc::EADDRNOTAVAIL,
        libc::ENETDOWN,
        libc::ENETUNREACH,
        libc::ENETRESET,
        libc::ECONNABORTED,
        libc::ECONNRESET,
        libc::ENOBUFS,
        libc::EISCONN,
        libc::ENOTCONN,
        libc::ESHUTDOWN,
        libc::ETOOMANYREFS,
        libc::ETIMEDOUT,
        libc::ECONNREFUSED,
        libc::EHOSTDOWN,
        libc::EHOSTUNREACH,
        libc::ELOOP,
        libc::EOVERFLOW,
    ],
);

/// The calling thread's `errno`.
#[inline]
pub fn last_error() -> NativeErrorCode {
    Errno::last_raw()
}

/// The calling thread's C runtime `errno`. Same as [`last_error`] here.
#[inline]
pub fn last_crt_error() -> NativeErrorCode {
    last_error()
}

/// `strerror`-style text for `code`.
pub fn error_message(code: NativeErrorCode) -> String {
    match Errno::from_raw(code) {
        Errno::UnknownErrno => format!("unknown error {}", code),
        errno => errno.desc().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unixsupport_core::ErrorKind;

    #[test]
    fn test_posix_values() {
        assert_eq!(NATIVE_TABLE.decode(ErrorKind::NoSuchFile), libc::ENOENT);
        assert_eq!(NATIVE_TABLE.encode(libc::ECONNREFUSED), ErrorKind::ConnectionRefused);
        assert_eq!(NATIVE_TABLE.encode(libc::EOVERFLOW), ErrorKind::Overflow);
    }

    #[test]
    fn test_eagain_alias() {
        assert_eq!(NATIVE_TABLE.encode(libc::EAGAIN), ErrorKind::ResourceUnavailable);
        if libc::EAGAIN == libc::EWOULDBLOCK {
            assert!(!NATIVE_TABLE.is_canonical(ErrorKind::WouldBlock));
        }
    }

    #[test]
    fn test_last_error_reads_errno() {
        Errno::EINTR.set();
        assert_eq!(last_error(), libc::EINTR);
    }

    #[test]
    fn test_message() {
        assert_eq!(error_message(libc::ENOENT), Errno::ENOENT.desc());
        assert_eq!(error_message(9_999), "unknown error 9999");
    }
}
