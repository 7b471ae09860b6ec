//! # unixsupport - OS error and handle support layer
//!
//! Translates native error codes and handles into a portable form for a
//! Unix-style system-call binding layer, on POSIX and Windows alike.
//!
//! ## Features
//!
//! - **Portable error kinds**: `ErrorKind` with lossless `Unknown(code)` escape
//! - **Windows normalization**: system and Winsock errors folded into one
//!   signed space, sockets segregated by negation
//! - **Error raiser**: structured `OsError` delivered through a host,
//!   identity resolved once and cached
//! - **Handles**: equality/hash by raw value, release at most once
//! - **Close-on-exec**: per-handle control plus a process-wide default
//!
//! ## Quick Start
//!
//! ```ignore
//! use unixsupport::{Support, SupportConfig};
//!
//! static UNIX_ERROR: &str = "unix_error";
//!
//! let support = Support::init(SupportConfig::from_env())?;
//! support.register(&UNIX_ERROR).ok();
//!
//! let result = support.run(|raiser| {
//!     raiser.check_path(path, "open");
//!     // ... native call failed:
//!     raiser.raise_from_errno("open", Some(path))
//! });
//! if let Err(raised) = result {
//!     eprintln!("{}", raised);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Binding layer (callers)                    │
//! │         open(), read(), socket(), setsid(), ...             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ native call failed
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ErrorRaiser                            │
//! │     identity cache, encode via NATIVE_TABLE, host.raise     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//!    ┌───────────┐      ┌─────────────┐     ┌─────────────┐
//!    │ ErrorTable│      │ win32       │     │    Host     │
//!    │ encode/   │      │ normalize   │     │ registry,   │
//!    │ decode    │      │ (Windows)   │     │ unwinding   │
//!    └───────────┘      └─────────────┘     └─────────────┘
//! ```

// Re-export core types
pub use unixsupport_core::{
    catch,
    CloexecPolicy,
    ConfigError,
    ErrorKind,
    ErrorRaiser,
    ErrorTable,
    Host,
    NativeErrorCode,
    OsError,
    RaiseResult,
    Raised,
    Registry,
    SupportConfig,
    UnwindHost,
    Win32Error,
    WIN32_TABLE,
};
pub use unixsupport_core::{default_cloexec, resolve_cloexec, set_cloexec_default};
pub use unixsupport_core::win32;

// Re-export logging macros
pub use unixsupport_core::{udebug, uerror, uinfo, utrace, uwarn};
pub use unixsupport_core::kprint::{self, set_flush_enabled, set_log_level, LogLevel};

// Re-export runtime types
pub use unixsupport_runtime::{
    apply_cloexec,
    configured_raiser,
    decode,
    encode,
    error_message,
    is_inheritable,
    last_crt_error,
    last_error,
    last_error_kind,
    native_raiser,
    set_inheritable,
    setsid,
    unwind_host,
    wrap_handle,
    wrap_socket,
    Closer,
    Handle,
    HandleKind,
    RawHandle,
    RawNative,
    RawSocket,
    SystemCloser,
    NATIVE_TABLE,
};

/// Read the environment and publish the process-wide settings.
///
/// Call once at startup, before other threads use this layer.
pub fn init() -> Result<SupportConfig, ConfigError> {
    let config = SupportConfig::from_env();
    config.apply()?;
    Ok(config)
}

/// Configured support layer over an unwinding host.
///
/// Owns the raiser; the identity is registered under the configured name.
pub struct Support<I: Send + Sync + 'static> {
    config: SupportConfig,
    raiser: ErrorRaiser<UnwindHost<I>>,
}

impl<I: Send + Sync + 'static> Support<I> {
    /// Validate `config` and build the raiser.
    ///
    /// Process-wide settings are left alone; see [`init`](Self::init).
    pub fn new(config: SupportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let raiser = configured_raiser(unwind_host(), &config);
        Ok(Self { config, raiser })
    }

    /// Apply `config` process-wide, then build the raiser.
    ///
    /// Call once at startup, before other threads use this layer.
    pub fn init(config: SupportConfig) -> Result<Self, ConfigError> {
        config.apply()?;
        Self::new(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::init(SupportConfig::from_env())
    }

    /// Register the error identity under the configured name.
    ///
    /// Fails with the identity already held if a different one was
    /// registered first.
    pub fn register(&self, identity: &'static I) -> Result<(), &'static I> {
        self.raiser
            .host()
            .registry()
            .register(&self.config.identity_name, identity)
    }

    #[inline]
    pub fn config(&self) -> &SupportConfig {
        &self.config
    }

    #[inline]
    pub fn raiser(&self) -> &ErrorRaiser<UnwindHost<I>> {
        &self.raiser
    }

    /// Run `f`, turning anything it raises into `Err`.
    pub fn run<T, F>(&self, f: F) -> RaiseResult<T, I>
    where
        F: FnOnce(&ErrorRaiser<UnwindHost<I>>) -> T,
    {
        self.raiser.catch(|| f(&self.raiser))
    }
}
