//! Static Windows mapping tables.

use core::ops::RangeInclusive;

use super::codes::*;
use crate::kind::NativeErrorCode;
use crate::table::ErrorTable;

/// Negated sockets constant: the value a sockets-namespace kind takes in
/// the composed table.
const fn sock(wsa: u32) -> NativeErrorCode {
    (wsa as NativeErrorCode).wrapping_neg()
}

/// Windows system error -> CRT errno, exact matches.
///
/// The few `WSAE*` codes listed here have an unambiguous POSIX meaning
/// and join the POSIX namespace directly.
pub(super) const POSIX_MAP: &[(u32, NativeErrorCode)] = &[
    (ERROR_INVALID_FUNCTION, crt::EINVAL),
    (ERROR_FILE_NOT_FOUND, crt::ENOENT),
    (ERROR_PATH_NOT_FOUND, crt::ENOENT),
    (ERROR_TOO_MANY_OPEN_FILES, crt::EMFILE),
    (ERROR_ACCESS_DENIED, crt::EACCES),
    (ERROR_INVALID_HANDLE, crt::EBADF),
    (ERROR_ARENA_TRASHED, crt::ENOMEM),
    (ERROR_NOT_ENOUGH_MEMORY, crt::ENOMEM),
    (ERROR_INVALID_BLOCK, crt::ENOMEM),
    (ERROR_BAD_ENVIRONMENT, crt::E2BIG),
    (ERROR_BAD_FORMAT, crt::ENOEXEC),
    (ERROR_INVALID_ACCESS, crt::EINVAL),
    (ERROR_INVALID_DATA, crt::EINVAL),
    (ERROR_INVALID_DRIVE, crt::ENOENT),
    (ERROR_CURRENT_DIRECTORY, crt::EACCES),
    (ERROR_NOT_SAME_DEVICE, crt::EXDEV),
    (ERROR_NO_MORE_FILES, crt::ENOENT),
    (ERROR_NOT_SUPPORTED, crt::ENOSYS),
    (ERROR_BAD_NETPATH, crt::ENOENT),
    (ERROR_NETWORK_ACCESS_DENIED, crt::EACCES),
    (ERROR_BAD_NET_NAME, crt::ENOENT),
    (ERROR_FILE_EXISTS, crt::EEXIST),
    (ERROR_CANNOT_MAKE, crt::EACCES),
    (ERROR_FAIL_I24, crt::EACCES),
    (ERROR_INVALID_PARAMETER, crt::EINVAL),
    (ERROR_NO_PROC_SLOTS, crt::EAGAIN),
    (ERROR_DRIVE_LOCKED, crt::EACCES),
    (ERROR_BROKEN_PIPE, crt::EPIPE),
    (ERROR_DISK_FULL, crt::ENOSPC),
    (ERROR_INVALID_TARGET_HANDLE, crt::EBADF),
    (ERROR_CALL_NOT_IMPLEMENTED, crt::ENOSYS),
    (ERROR_INVALID_NAME, crt::ENOENT),
    (ERROR_WAIT_NO_CHILDREN, crt::ECHILD),
    (ERROR_CHILD_NOT_COMPLETE, crt::ECHILD),
    (ERROR_DIRECT_ACCESS_HANDLE, crt::EBADF),
    (ERROR_NEGATIVE_SEEK, crt::EINVAL),
    (ERROR_SEEK_ON_DEVICE, crt::EACCES),
    (ERROR_DIR_NOT_EMPTY, crt::ENOTEMPTY),
    (ERROR_NOT_LOCKED, crt::EACCES),
    (ERROR_BAD_PATHNAME, crt::ENOENT),
    (ERROR_MAX_THRDS_REACHED, crt::EAGAIN),
    (ERROR_LOCK_FAILED, crt::EACCES),
    (ERROR_BUSY, crt::EBUSY),
    (ERROR_ALREADY_EXISTS, crt::EEXIST),
    (ERROR_FILENAME_EXCED_RANGE, crt::ENOENT),
    (ERROR_NESTING_NOT_ALLOWED, crt::EAGAIN),
    (ERROR_BAD_PIPE, crt::EPIPE),
    (ERROR_PIPE_BUSY, crt::EAGAIN),
    (ERROR_NO_DATA, crt::EPIPE),
    (ERROR_PIPE_NOT_CONNECTED, crt::EPIPE),
    (ERROR_DIRECTORY, crt::ENOTDIR),
    (ERROR_OPERATION_ABORTED, crt::EINTR),
    (ERROR_PRIVILEGE_NOT_HELD, crt::EPERM),
    (ERROR_NOT_ENOUGH_QUOTA, crt::ENOMEM),
    (WSAEINTR, crt::EINTR),
    (WSAEBADF, crt::EBADF),
    (WSAEACCES, crt::EACCES),
    (WSAEFAULT, crt::EFAULT),
    (WSAEINVAL, crt::EINVAL),
    (WSAEMFILE, crt::EMFILE),
    (WSAENAMETOOLONG, crt::ENAMETOOLONG),
    (WSAENOTEMPTY, crt::ENOTEMPTY),
];

/// Contiguous blocks of system errors sharing one errno.
pub(super) const POSIX_RANGES: &[(RangeInclusive<u32>, NativeErrorCode)] = &[
    (ERROR_WRITE_PROTECT..=ERROR_SHARING_BUFFER_EXCEEDED, crt::EACCES),
    (ERROR_INVALID_STARTING_CODESEG..=ERROR_INFLOOP_IN_RELOC_CHAIN, crt::ENOEXEC),
];

/// Sockets-namespace codes. These never enter the POSIX namespace; they
/// normalize to their own negation.
pub(super) const SOCKET_ERRORS: &[u32] = &[
    WSAEWOULDBLOCK, WSAEINPROGRESS, WSAEALREADY, WSAENOTSOCK,
    WSAEDESTADDRREQ, WSAEMSGSIZE, WSAEPROTOTYPE, WSAENOPROTOOPT,
    WSAEPROTONOSUPPORT, WSAESOCKTNOSUPPORT, WSAEOPNOTSUPP, WSAEPFNOSUPPORT,
    WSAEAFNOSUPPORT, WSAEADDRINUSE, WSAEADDRNOTAVAIL, WSAENETDOWN,
    WSAENETUNREACH, WSAENETRESET, WSAECONNABORTED, WSAECONNRESET,
    WSAENOBUFS, WSAEISCONN, WSAENOTCONN, WSAESHUTDOWN, WSAETOOMANYREFS,
    WSAETIMEDOUT, WSAECONNREFUSED, WSAELOOP, WSAEHOSTDOWN, WSAEHOSTUNREACH,
    WSAEPROCLIM, WSAEUSERS, WSAEDQUOT, WSAESTALE, WSAEREMOTE,
];

/// The composed table the translator uses on Windows.
///
/// Socket kinds carry negated `WSAE*` constants instead of the CRT's
/// colliding values. `EOVERFLOW` has no CRT equivalent and is the negated
/// `ERROR_ARITHMETIC_OVERFLOW`, i.e. exactly what the normalizer yields
/// for that code.
pub static WIN32_TABLE: ErrorTable = ErrorTable::new("win32", [
    crt::E2BIG, crt::EACCES, crt::EAGAIN, crt::EBADF, crt::EBUSY,
    crt::ECHILD, crt::EDEADLK, crt::EDOM, crt::EEXIST, crt::EFAULT,
    crt::EFBIG, crt::EINTR, crt::EINVAL, crt::EIO, crt::EISDIR,
    crt::EMFILE, crt::EMLINK, crt::ENAMETOOLONG, crt::ENFILE, crt::ENODEV,
    crt::ENOENT, crt::ENOEXEC, crt::ENOLCK, crt::ENOMEM, crt::ENOSPC,
    crt::ENOSYS, crt::ENOTDIR, crt::ENOTEMPTY, crt::ENOTTY, crt::ENXIO,
    crt::EPERM, crt::EPIPE, crt::ERANGE, crt::EROFS, crt::ESPIPE,
    crt::ESRCH, crt::EXDEV,
    sock(WSAEWOULDBLOCK), sock(WSAEINPROGRESS), sock(WSAEALREADY),
    sock(WSAENOTSOCK), sock(WSAEDESTADDRREQ), sock(WSAEMSGSIZE),
    sock(WSAEPROTOTYPE), sock(WSAENOPROTOOPT), sock(WSAEPROTONOSUPPORT),
    sock(WSAESOCKTNOSUPPORT), sock(WSAEOPNOTSUPP), sock(WSAEPFNOSUPPORT),
    sock(WSAEAFNOSUPPORT), sock(WSAEADDRINUSE), sock(WSAEADDRNOTAVAIL),
    sock(WSAENETDOWN), sock(WSAENETUNREACH), sock(WSAENETRESET),
    sock(WSAECONNABORTED), sock(WSAECONNRESET), sock(WSAENOBUFS),
    sock(WSAEISCONN), sock(WSAENOTCONN), sock(WSAESHUTDOWN),
    sock(WSAETOOMANYREFS), sock(WSAETIMEDOUT), sock(WSAECONNREFUSED),
    sock(WSAEHOSTDOWN), sock(WSAEHOSTUNREACH), sock(WSAELOOP),
    sock(ERROR_ARITHMETIC_OVERFLOW),
]);
