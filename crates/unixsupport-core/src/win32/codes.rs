//! Windows numeric constants.
//!
//! Plain numbers rather than bindings so the normalizer tables build and
//! test on every host.

use crate::kind::NativeErrorCode;

// ── System error codes (GetLastError) ─────────────────────────────

pub const ERROR_SUCCESS: u32 = 0;
pub const ERROR_INVALID_FUNCTION: u32 = 1;
pub const ERROR_FILE_NOT_FOUND: u32 = 2;
pub const ERROR_PATH_NOT_FOUND: u32 = 3;
pub const ERROR_TOO_MANY_OPEN_FILES: u32 = 4;
pub const ERROR_ACCESS_DENIED: u32 = 5;
pub const ERROR_INVALID_HANDLE: u32 = 6;
pub const ERROR_ARENA_TRASHED: u32 = 7;
pub const ERROR_NOT_ENOUGH_MEMORY: u32 = 8;
pub const ERROR_INVALID_BLOCK: u32 = 9;
pub const ERROR_BAD_ENVIRONMENT: u32 = 10;
pub const ERROR_BAD_FORMAT: u32 = 11;
pub const ERROR_INVALID_ACCESS: u32 = 12;
pub const ERROR_INVALID_DATA: u32 = 13;
pub const ERROR_INVALID_DRIVE: u32 = 15;
pub const ERROR_CURRENT_DIRECTORY: u32 = 16;
pub const ERROR_NOT_SAME_DEVICE: u32 = 17;
pub const ERROR_NO_MORE_FILES: u32 = 18;
pub const ERROR_WRITE_PROTECT: u32 = 19;
pub const ERROR_SHARING_VIOLATION: u32 = 32;
pub const ERROR_LOCK_VIOLATION: u32 = 33;
pub const ERROR_SHARING_BUFFER_EXCEEDED: u32 = 36;
pub const ERROR_NOT_SUPPORTED: u32 = 50;
pub const ERROR_BAD_NETPATH: u32 = 53;
pub const ERROR_NETWORK_ACCESS_DENIED: u32 = 65;
pub const ERROR_BAD_NET_NAME: u32 = 67;
pub const ERROR_FILE_EXISTS: u32 = 80;
pub const ERROR_CANNOT_MAKE: u32 = 82;
pub const ERROR_FAIL_I24: u32 = 83;
pub const ERROR_INVALID_PARAMETER: u32 = 87;
pub const ERROR_NO_PROC_SLOTS: u32 = 89;
pub const ERROR_DRIVE_LOCKED: u32 = 108;
pub const ERROR_BROKEN_PIPE: u32 = 109;
pub const ERROR_DISK_FULL: u32 = 112;
pub const ERROR_INVALID_TARGET_HANDLE: u32 = 114;
pub const ERROR_CALL_NOT_IMPLEMENTED: u32 = 120;
pub const ERROR_INVALID_NAME: u32 = 123;
pub const ERROR_WAIT_NO_CHILDREN: u32 = 128;
pub const ERROR_CHILD_NOT_COMPLETE: u32 = 129;
pub const ERROR_DIRECT_ACCESS_HANDLE: u32 = 130;
pub const ERROR_NEGATIVE_SEEK: u32 = 131;
pub const ERROR_SEEK_ON_DEVICE: u32 = 132;
pub const ERROR_DIR_NOT_EMPTY: u32 = 145;
pub const ERROR_NOT_LOCKED: u32 = 158;
pub const ERROR_BAD_PATHNAME: u32 = 161;
pub const ERROR_MAX_THRDS_REACHED: u32 = 164;
pub const ERROR_LOCK_FAILED: u32 = 167;
pub const ERROR_BUSY: u32 = 170;
pub const ERROR_ALREADY_EXISTS: u32 = 183;
pub const ERROR_INVALID_STARTING_CODESEG: u32 = 188;
pub const ERROR_INFLOOP_IN_RELOC_CHAIN: u32 = 202;
pub const ERROR_FILENAME_EXCED_RANGE: u32 = 206;
pub const ERROR_NESTING_NOT_ALLOWED: u32 = 215;
pub const ERROR_BAD_PIPE: u32 = 230;
pub const ERROR_PIPE_BUSY: u32 = 231;
pub const ERROR_NO_DATA: u32 = 232;
pub const ERROR_PIPE_NOT_CONNECTED: u32 = 233;
pub const ERROR_DIRECTORY: u32 = 267;
pub const ERROR_ARITHMETIC_OVERFLOW: u32 = 534;
pub const ERROR_OPERATION_ABORTED: u32 = 995;
pub const ERROR_PRIVILEGE_NOT_HELD: u32 = 1314;
pub const ERROR_NOT_ENOUGH_QUOTA: u32 = 1816;

// ── Windows Sockets (WSAGetLastError) ─────────────────────────────

pub const WSAEINTR: u32 = 10004;
pub const WSAEBADF: u32 = 10009;
pub const WSAEACCES: u32 = 10013;
pub const WSAEFAULT: u32 = 10014;
pub const WSAEINVAL: u32 = 10022;
pub const WSAEMFILE: u32 = 10024;
pub const WSAEWOULDBLOCK: u32 = 10035;
pub const WSAEINPROGRESS: u32 = 10036;
pub const WSAEALREADY: u32 = 10037;
pub const WSAENOTSOCK: u32 = 10038;
pub const WSAEDESTADDRREQ: u32 = 10039;
pub const WSAEMSGSIZE: u32 = 10040;
pub const WSAEPROTOTYPE: u32 = 10041;
pub const WSAENOPROTOOPT: u32 = 10042;
pub const WSAEPROTONOSUPPORT: u32 = 10043;
pub const WSAESOCKTNOSUPPORT: u32 = 10044;
pub const WSAEOPNOTSUPP: u32 = 10045;
pub const WSAEPFNOSUPPORT: u32 = 10046;
pub const WSAEAFNOSUPPORT: u32 = 10047;
pub const WSAEADDRINUSE: u32 = 10048;
pub const WSAEADDRNOTAVAIL: u32 = 10049;
pub const WSAENETDOWN: u32 = 10050;
pub const WSAENETUNREACH: u32 = 10051;
pub const WSAENETRESET: u32 = 10052;
pub const WSAECONNABORTED: u32 = 10053;
pub const WSAECONNRESET: u32 = 10054;
pub const WSAENOBUFS: u32 = 10055;
pub const WSAEISCONN: u32 = 10056;
pub const WSAENOTCONN: u32 = 10057;
pub const WSAESHUTDOWN: u32 = 10058;
pub const WSAETOOMANYREFS: u32 = 10059;
pub const WSAETIMEDOUT: u32 = 10060;
pub const WSAECONNREFUSED: u32 = 10061;
pub const WSAELOOP: u32 = 10062;
pub const WSAENAMETOOLONG: u32 = 10063;
pub const WSAEHOSTDOWN: u32 = 10064;
pub const WSAEHOSTUNREACH: u32 = 10065;
pub const WSAENOTEMPTY: u32 = 10066;
pub const WSAEPROCLIM: u32 = 10067;
pub const WSAEUSERS: u32 = 10068;
pub const WSAEDQUOT: u32 = 10069;
pub const WSAESTALE: u32 = 10070;
pub const WSAEREMOTE: u32 = 10071;

/// Microsoft C runtime `errno` values.
///
/// Only the classic range is listed. The CRT's own socket-flavoured
/// values (`EWOULDBLOCK = 140`, ...) are deliberately absent: the table
/// uses negated `WSAE*` constants for those kinds instead.
pub mod crt {
    use super::NativeErrorCode;

    pub const EPERM: NativeErrorCode = 1;
    pub const ENOENT: NativeErrorCode = 2;
    pub const ESRCH: NativeErrorCode = 3;
    pub const EINTR: NativeErrorCode = 4;
    pub const EIO: NativeErrorCode = 5;
    pub const ENXIO: NativeErrorCode = 6;
    pub const E2BIG: NativeErrorCode = 7;
    pub const ENOEXEC: NativeErrorCode = 8;
    pub const EBADF: NativeErrorCode = 9;
    pub const ECHILD: NativeErrorCode = 10;
    pub const EAGAIN: NativeErrorCode = 11;
    pub const ENOMEM: NativeErrorCode = 12;
    pub const EACCES: NativeErrorCode = 13;
    pub const EFAULT: NativeErrorCode = 14;
    pub const EBUSY: NativeErrorCode = 16;
    pub const EEXIST: NativeErrorCode = 17;
    pub const EXDEV: NativeErrorCode = 18;
    pub const ENODEV: NativeErrorCode = 19;
    pub const ENOTDIR: NativeErrorCode = 20;
    pub const EISDIR: NativeErrorCode = 21;
    pub const EINVAL: NativeErrorCode = 22;
    pub const ENFILE: NativeErrorCode = 23;
    pub const EMFILE: NativeErrorCode = 24;
    pub const ENOTTY: NativeErrorCode = 25;
    pub const EFBIG: NativeErrorCode = 27;
    pub const ENOSPC: NativeErrorCode = 28;
    pub const ESPIPE: NativeErrorCode = 29;
    pub const EROFS: NativeErrorCode = 30;
    pub const EMLINK: NativeErrorCode = 31;
    pub const EPIPE: NativeErrorCode = 32;
    pub const EDOM: NativeErrorCode = 33;
    pub const ERANGE: NativeErrorCode = 34;
    pub const EDEADLK: NativeErrorCode = 36;
    pub const ENAMETOOLONG: NativeErrorCode = 38;
    pub const ENOLCK: NativeErrorCode = 39;
    pub const ENOSYS: NativeErrorCode = 40;
    pub const ENOTEMPTY: NativeErrorCode = 41;
}
