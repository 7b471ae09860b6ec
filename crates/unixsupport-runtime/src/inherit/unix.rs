//! `FD_CLOEXEC` via fcntl.

use std::os::unix::io::RawFd;

use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use unixsupport_core::NativeErrorCode;

/// Clear (`inherit = true`) or set `FD_CLOEXEC` on `fd`.
pub fn set_inheritable(fd: RawFd, inherit: bool) -> Result<(), NativeErrorCode> {
    let bits = fcntl(fd, FcntlArg::F_GETFD).map_err(|e| e as NativeErrorCode)?;
    let mut flags = FdFlag::from_bits_truncate(bits);
    flags.set(FdFlag::FD_CLOEXEC, !inherit);
    fcntl(fd, FcntlArg::F_SETFD(flags)).map_err(|e| e as NativeErrorCode)?;
    Ok(())
}

/// True if `fd` survives `exec`.
pub fn is_inheritable(fd: RawFd) -> Result<bool, NativeErrorCode> {
    let bits = fcntl(fd, FcntlArg::F_GETFD).map_err(|e| e as NativeErrorCode)?;
    Ok(!FdFlag::from_bits_truncate(bits).contains(FdFlag::FD_CLOEXEC))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inherit::apply_cloexec;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn test_toggle_on_pipe() {
        let (r, _w) = nix::unistd::pipe().unwrap();
        let fd = r.as_raw_fd();

        set_inheritable(fd, false).unwrap();
        assert!(!is_inheritable(fd).unwrap());
        set_inheritable(fd, true).unwrap();
        assert!(is_inheritable(fd).unwrap());
    }

    #[test]
    fn test_explicit_override() {
        let (r, _w) = nix::unistd::pipe().unwrap();
        let fd = r.as_raw_fd();

        apply_cloexec(fd, Some(true)).unwrap();
        assert!(!is_inheritable(fd).unwrap());
        apply_cloexec(fd, Some(false)).unwrap();
        assert!(is_inheritable(fd).unwrap());
    }

    #[test]
    fn test_bad_fd_returns_code() {
        assert_eq!(set_inheritable(-1, true), Err(libc::EBADF));
        assert_eq!(is_inheritable(-1), Err(libc::EBADF));
    }
}
