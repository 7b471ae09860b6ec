//! Process primitives that report failure through the error raiser.

use unixsupport_core::{ErrorRaiser, Host};

/// Start a new session; returns the new process group id.
///
/// Raises the OS error on failure, or an invalid-argument failure on
/// platforms without sessions.
#[cfg(unix)]
pub fn setsid<H: Host>(raiser: &ErrorRaiser<H>) -> i32 {
    match nix::unistd::setsid() {
        Ok(pgid) => pgid.as_raw(),
        Err(errno) => raiser.raise_os_error(errno as i32, "setsid", None),
    }
}

#[cfg(not(unix))]
pub fn setsid<H: Host>(raiser: &ErrorRaiser<H>) -> i32 {
    raiser.unsupported("setsid")
}
