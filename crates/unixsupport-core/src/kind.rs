//! Portable error kinds.
//!
//! `ErrorKind` is a closed enumeration of OS failure categories plus one
//! escape variant, [`ErrorKind::Unknown`], that carries any native code
//! the tables do not know about.
//!
//! Declaration order is load-bearing: the position of a kind in this list
//! is its index into every [`ErrorTable`](crate::table::ErrorTable).
//! New kinds are appended, never inserted.

use core::fmt;

/// Raw error value as produced by the host OS (errno-style, or a
/// normalized Windows code; see [`crate::win32`]).
pub type NativeErrorCode = i32;

macro_rules! error_kinds {
    ($( $variant:ident => ($name:literal, $msg:literal), )*) => {
        /// Portable, platform-independent category of an OS failure.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorKind {
            $(
                #[doc = concat!("`", $name, "`: ", $msg, ".")]
                $variant,
            )*
            /// Code absent from the error table, preserved verbatim.
            Unknown(NativeErrorCode),
        }

        /// Fieldless shadow of `ErrorKind`; its discriminants are the
        /// table indices.
        #[repr(usize)]
        #[derive(Clone, Copy)]
        enum Ordinal {
            $( $variant, )*
        }

        impl ErrorKind {
            /// Every table-backed kind, in declaration order.
            pub const KNOWN: &'static [ErrorKind] = &[ $( ErrorKind::$variant, )* ];

            /// Number of table-backed kinds (excludes `Unknown`).
            pub const COUNT: usize = [$( $name, )*].len();

            /// Index into an error table, `None` for the escape variant.
            #[inline]
            pub const fn index(self) -> Option<usize> {
                match self {
                    $( ErrorKind::$variant => Some(Ordinal::$variant as usize), )*
                    ErrorKind::Unknown(_) => None,
                }
            }

            /// Symbolic POSIX name, e.g. `"ENOENT"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( ErrorKind::$variant => $name, )*
                    ErrorKind::Unknown(_) => "EUNKNOWNERR",
                }
            }

            /// Human-readable description.
            pub const fn description(self) -> &'static str {
                match self {
                    $( ErrorKind::$variant => $msg, )*
                    ErrorKind::Unknown(_) => "unknown error",
                }
            }
        }
    };
}

error_kinds! {
    ArgumentListTooLong        => ("E2BIG", "argument list too long"),
    PermissionDenied           => ("EACCES", "permission denied"),
    ResourceUnavailable        => ("EAGAIN", "resource temporarily unavailable"),
    BadDescriptor              => ("EBADF", "bad file descriptor"),
    Busy                       => ("EBUSY", "device or resource busy"),
    NoChildren                 => ("ECHILD", "no child processes"),
    Deadlock                   => ("EDEADLK", "resource deadlock avoided"),
    Domain                     => ("EDOM", "numerical argument out of domain"),
    AlreadyExists              => ("EEXIST", "file exists"),
    BadAddress                 => ("EFAULT", "bad address"),
    FileTooLarge               => ("EFBIG", "file too large"),
    Interrupted                => ("EINTR", "interrupted system call"),
    InvalidArgument            => ("EINVAL", "invalid argument"),
    Io                         => ("EIO", "input/output error"),
    IsDirectory                => ("EISDIR", "is a directory"),
    TooManyOpenFiles           => ("EMFILE", "too many open files"),
    TooManyLinks               => ("EMLINK", "too many links"),
    NameTooLong                => ("ENAMETOOLONG", "file name too long"),
    FileTableOverflow          => ("ENFILE", "too many open files in system"),
    NoDevice                   => ("ENODEV", "no such device"),
    NoSuchFile                 => ("ENOENT", "no such file or directory"),
    ExecFormat                 => ("ENOEXEC", "exec format error"),
    NoLocks                    => ("ENOLCK", "no locks available"),
    OutOfMemory                => ("ENOMEM", "cannot allocate memory"),
    NoSpace                    => ("ENOSPC", "no space left on device"),
    NotImplemented             => ("ENOSYS", "function not implemented"),
    NotDirectory               => ("ENOTDIR", "not a directory"),
    DirectoryNotEmpty          => ("ENOTEMPTY", "directory not empty"),
    NotTerminal                => ("ENOTTY", "inappropriate ioctl for device"),
    NoDeviceOrAddress          => ("ENXIO", "no such device or address"),
    NotPermitted               => ("EPERM", "operation not permitted"),
    BrokenPipe                 => ("EPIPE", "broken pipe"),
    OutOfRange                 => ("ERANGE", "numerical result out of range"),
    ReadOnlyFilesystem         => ("EROFS", "read-only file system"),
    IllegalSeek                => ("ESPIPE", "illegal seek"),
    NoSuchProcess              => ("ESRCH", "no such process"),
    CrossDevice                => ("EXDEV", "invalid cross-device link"),
    WouldBlock                 => ("EWOULDBLOCK", "operation would block"),
    InProgress                 => ("EINPROGRESS", "operation now in progress"),
    AlreadyInProgress          => ("EALREADY", "operation already in progress"),
    NotSocket                  => ("ENOTSOCK", "socket operation on non-socket"),
    DestinationRequired        => ("EDESTADDRREQ", "destination address required"),
    MessageTooLong             => ("EMSGSIZE", "message too long"),
    WrongProtocolType          => ("EPROTOTYPE", "protocol wrong type for socket"),
    ProtocolOptionUnavailable  => ("ENOPROTOOPT", "protocol not available"),
    ProtocolNotSupported       => ("EPROTONOSUPPORT", "protocol not supported"),
    SocketTypeNotSupported     => ("ESOCKTNOSUPPORT", "socket type not supported"),
    OperationNotSupported      => ("EOPNOTSUPP", "operation not supported"),
    ProtocolFamilyNotSupported => ("EPFNOSUPPORT", "protocol family not supported"),
    AddressFamilyNotSupported  => ("EAFNOSUPPORT", "address family not supported by protocol"),
    AddrInUse                  => ("EADDRINUSE", "address already in use"),
    AddrNotAvailable           => ("EADDRNOTAVAIL", "cannot assign requested address"),
    NetworkDown                => ("ENETDOWN", "network is down"),
    NetworkUnreachable         => ("ENETUNREACH", "network is unreachable"),
    NetworkReset               => ("ENETRESET", "network dropped connection on reset"),
    ConnectionAborted          => ("ECONNABORTED", "software caused connection abort"),
    ConnectionReset            => ("ECONNRESET", "connection reset by peer"),
    NoBufferSpace              => ("ENOBUFS", "no buffer space available"),
    AlreadyConnected           => ("EISCONN", "transport endpoint is already connected"),
    NotConnected               => ("ENOTCONN", "transport endpoint is not connected"),
    Shutdown                   => ("ESHUTDOWN", "cannot send after transport endpoint shutdown"),
    TooManyReferences          => ("ETOOMANYREFS", "too many references"),
    TimedOut                   => ("ETIMEDOUT", "connection timed out"),
    ConnectionRefused          => ("ECONNREFUSED", "connection refused"),
    HostDown                   => ("EHOSTDOWN", "host is down"),
    HostUnreachable            => ("EHOSTUNREACH", "no route to host"),
    TooManySymlinks            => ("ELOOP", "too many levels of symbolic links"),
    Overflow                   => ("EOVERFLOW", "value too large for defined data type"),
}

// KNOWN must stay in lockstep with the ordinal indices.
const _: () = {
    assert!(ErrorKind::KNOWN.len() == ErrorKind::COUNT);
    let mut i = 0;
    while i < ErrorKind::COUNT {
        match ErrorKind::KNOWN[i].index() {
            Some(idx) => assert!(idx == i),
            None => panic!("escape variant listed in KNOWN"),
        }
        i += 1;
    }
};

impl ErrorKind {
    /// True for the escape variant.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, ErrorKind::Unknown(_))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Unknown(code) => write!(f, "unknown error {}", code),
            kind => f.write_str(kind.description()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_known() {
        assert_eq!(ErrorKind::COUNT, 68);
        assert_eq!(ErrorKind::KNOWN.len(), ErrorKind::COUNT);
    }

    #[test]
    fn test_declaration_order_is_index() {
        assert_eq!(ErrorKind::ArgumentListTooLong.index(), Some(0));
        assert_eq!(ErrorKind::NoSuchFile.index(), Some(20));
        assert_eq!(ErrorKind::WouldBlock.index(), Some(37));
        assert_eq!(ErrorKind::Overflow.index(), Some(67));
        assert_eq!(ErrorKind::Unknown(5).index(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(ErrorKind::NoSuchFile.name(), "ENOENT");
        assert_eq!(ErrorKind::ConnectionRefused.name(), "ECONNREFUSED");
        assert_eq!(ErrorKind::Unknown(-1).name(), "EUNKNOWNERR");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorKind::NoSuchFile), "no such file or directory");
        assert_eq!(format!("{}", ErrorKind::Unknown(-1234)), "unknown error -1234");
        assert!(ErrorKind::Unknown(0).is_unknown());
        assert!(!ErrorKind::WouldBlock.is_unknown());
    }
}
