//! Error types: the structured OS error and the signals a host raises.

use std::fmt;

use crate::kind::ErrorKind;

/// A failed native call: what went wrong, in which operation, on what.
///
/// Immutable once built. `argument` is empty when the call had no
/// meaningful argument to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsError {
    kind: ErrorKind,
    operation: String,
    argument: String,
}

impl OsError {
    pub fn new(kind: ErrorKind, operation: &str, argument: Option<&str>) -> Self {
        Self {
            kind,
            operation: operation.to_string(),
            argument: argument.unwrap_or("").to_string(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the native operation that failed, e.g. `"open"`.
    #[inline]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Offending argument; empty string when absent.
    #[inline]
    pub fn argument(&self) -> &str {
        &self.argument
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.argument.is_empty() {
            write!(f, "{}: {}", self.operation, self.kind)
        } else {
            write!(f, "{} \"{}\": {}", self.operation, self.argument, self.kind)
        }
    }
}

impl std::error::Error for OsError {}

/// Signal delivered to a host's non-local propagation mechanism.
///
/// `I` is the host's registered error identity.
pub enum Raised<I: 'static> {
    /// An expected OS failure, tagged with the cached identity.
    Os {
        identity: &'static I,
        error: OsError,
    },
    /// Bad input or a primitive this platform lacks.
    InvalidArgument(String),
    /// The error identity was never registered: a broken build or link,
    /// not a runtime condition.
    NotLinked {
        name: String,
    },
}

impl<I: 'static> Raised<I> {
    /// The OS error, if this is one.
    pub fn os_error(&self) -> Option<&OsError> {
        match self {
            Raised::Os { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The identity the OS error was tagged with.
    pub fn identity(&self) -> Option<&'static I> {
        match self {
            Raised::Os { identity, .. } => Some(*identity),
            _ => None,
        }
    }
}

impl<I: 'static> fmt::Display for Raised<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raised::Os { error, .. } => write!(f, "{}", error),
            Raised::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Raised::NotLinked { name } => write!(
                f,
                "error identity `{}` not registered; the OS error module is not linked or not initialized",
                name
            ),
        }
    }
}

impl<I: fmt::Debug + 'static> fmt::Debug for Raised<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raised::Os { identity, error } => f
                .debug_struct("Raised::Os")
                .field("identity", identity)
                .field("error", error)
                .finish(),
            Raised::InvalidArgument(msg) => f.debug_tuple("Raised::InvalidArgument").field(msg).finish(),
            Raised::NotLinked { name } => f.debug_struct("Raised::NotLinked").field("name", name).finish(),
        }
    }
}

impl<I: fmt::Debug + 'static> std::error::Error for Raised<I> {}

/// Result of running code that may raise through an unwinding host.
pub type RaiseResult<T, I> = Result<T, Raised<I>>;

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_error_absent_argument_is_empty() {
        let err = OsError::new(ErrorKind::Interrupted, "select", None);
        assert_eq!(err.argument(), "");
        assert_eq!(format!("{}", err), "select: interrupted system call");
    }

    #[test]
    fn test_os_error_display_with_argument() {
        let err = OsError::new(ErrorKind::NoSuchFile, "open", Some("/nonexistent"));
        assert_eq!(err.operation(), "open");
        assert_eq!(
            format!("{}", err),
            "open \"/nonexistent\": no such file or directory"
        );
    }

    #[test]
    fn test_raised_accessors() {
        static ID: &str = "unix_error";
        let raised: Raised<&str> = Raised::Os {
            identity: &ID,
            error: OsError::new(ErrorKind::BrokenPipe, "write", None),
        };
        assert_eq!(raised.os_error().map(|e| e.kind()), Some(ErrorKind::BrokenPipe));
        assert_eq!(raised.identity(), Some(&ID));

        let other: Raised<&str> = Raised::InvalidArgument("setsid not implemented".into());
        assert!(other.os_error().is_none());
        assert_eq!(format!("{}", other), "invalid argument: setsid not implemented");
    }

    #[test]
    fn test_not_linked_is_labelled() {
        let raised: Raised<u8> = Raised::NotLinked { name: "unix_error".into() };
        let s = format!("{}", raised);
        assert!(s.contains("unix_error"), "{}", s);
        assert!(s.contains("not linked"), "{}", s);
    }

    #[test]
    fn test_config_error_display() {
        let e = ConfigError::InvalidValue("identity_name must not be empty");
        assert_eq!(format!("{}", e), "invalid config: identity_name must not be empty");
    }
}
