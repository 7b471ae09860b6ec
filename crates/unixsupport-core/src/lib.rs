//! # unixsupport-core
//!
//! Portable OS error model for a Unix-style system-call binding layer.
//!
//! This crate is platform-agnostic and makes no system calls. The native
//! error table, handle wrapper and process primitives live in
//! `unixsupport-runtime`.
//!
//! ## Modules
//!
//! - `kind` - `ErrorKind`, the portable error enumeration
//! - `table` - `ErrorTable`, native code <-> kind translation
//! - `win32` - Windows error normalization and the composed Windows table
//! - `error` - `OsError`, `Raised` signals, config errors
//! - `host` - The managed-environment contract and an unwinding host
//! - `raise` - `ErrorRaiser`: identity cache and raise paths
//! - `cloexec` - Process-wide close-on-exec default
//! - `config` - Environment-driven configuration
//! - `kprint` - Leveled stderr logging macros

pub mod kind;
pub mod table;
pub mod win32;
pub mod error;
pub mod host;
pub mod raise;
pub mod cloexec;
pub mod config;
pub mod kprint;

// Re-exports for convenience
pub use kind::{ErrorKind, NativeErrorCode};
pub use table::ErrorTable;
pub use win32::{Win32Error, WIN32_TABLE};
pub use error::{ConfigError, OsError, RaiseResult, Raised};
pub use host::{catch, Host, Registry, UnwindHost};
pub use raise::ErrorRaiser;
pub use cloexec::{default_cloexec, resolve_cloexec, set_cloexec_default, CloexecPolicy};
pub use config::SupportConfig;
pub use kprint::LogLevel;
