//! `HANDLE_FLAG_INHERIT` via SetHandleInformation.

use windows_sys::Win32::Foundation::{
    GetHandleInformation, GetLastError, SetHandleInformation, HANDLE, HANDLE_FLAG_INHERIT,
};

use unixsupport_core::{win32, NativeErrorCode};

/// Set or clear the inherit flag on `handle`.
pub fn set_inheritable(handle: HANDLE, inherit: bool) -> Result<(), NativeErrorCode> {
    let flags = if inherit { HANDLE_FLAG_INHERIT } else { 0 };
    if unsafe { SetHandleInformation(handle, HANDLE_FLAG_INHERIT, flags) } == 0 {
        return Err(win32::normalize(unsafe { GetLastError() }));
    }
    Ok(())
}

/// True if child processes inherit `handle`.
pub fn is_inheritable(handle: HANDLE) -> Result<bool, NativeErrorCode> {
    let mut flags = 0u32;
    if unsafe { GetHandleInformation(handle, &mut flags) } == 0 {
        return Err(win32::normalize(unsafe { GetLastError() }));
    }
    Ok(flags & HANDLE_FLAG_INHERIT != 0)
}
