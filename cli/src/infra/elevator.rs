//! Platform privilege elevators.
//!
//! Only Windows has an elevation prompt to speak of; every other platform
//! gets [`NoElevation`], which reports "did not elevate" and leaves the
//! caller to surface its original permission failure.

use crate::application::ports::PrivilegeElevator;
use crate::domain::{ElevationError, LaunchDescriptor};

/// Elevator for platforms without an elevation concept. Always `false`,
/// never a side effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoElevation;

impl PrivilegeElevator for NoElevation {
    fn try_elevate(
        &self,
        _launch: &LaunchDescriptor,
        _show_window: bool,
    ) -> Result<bool, ElevationError> {
        Ok(false)
    }
}

#[cfg(windows)]
pub use self::uac::UacElevator;

#[cfg(windows)]
#[allow(unsafe_code)] // ShellExecuteExW and the admin check are Win32 FFI
mod uac {
    use std::os::windows::ffi::OsStrExt;

    use winapi::shared::minwindef::DWORD;
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::shellapi::{
        SEE_MASK_NOCLOSEPROCESS, SHELLEXECUTEINFOW, ShellExecuteExW,
    };
    use winapi::um::shlobj::IsUserAnAdmin;
    use winapi::um::sysinfoapi::GetVersion;
    use winapi::um::winuser::{SW_HIDE, SW_SHOWNORMAL};

    use super::{ElevationError, LaunchDescriptor, PrivilegeElevator};

    /// The user pressed "No" on the consent prompt.
    const ERROR_CANCELLED: DWORD = 1223;

    /// UAC-based elevator: relaunches the original command line through the
    /// `runas` verb.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct UacElevator;

    fn wide(s: &std::ffi::OsStr) -> Vec<u16> {
        s.encode_wide().chain(std::iter::once(0)).collect()
    }

    /// Quote the argument vector into a single parameters string, doubling
    /// embedded quotes the way CommandLineToArgvW expects.
    fn parameters(launch: &LaunchDescriptor) -> std::ffi::OsString {
        let mut joined = String::new();
        for (i, arg) in launch.args.iter().enumerate() {
            if i > 0 {
                joined.push(' ');
            }
            let text = arg.to_string_lossy();
            joined.push('"');
            joined.push_str(&text.replace('"', "\"\""));
            joined.push('"');
        }
        joined.into()
    }

    impl PrivilegeElevator for UacElevator {
        fn try_elevate(
            &self,
            launch: &LaunchDescriptor,
            show_window: bool,
        ) -> Result<bool, ElevationError> {
            // Pre-Vista Windows has no consent prompt: major version < 6.
            let version = unsafe { GetVersion() };
            if (version & 0xFF) < 6 {
                return Ok(false);
            }
            // Already elevated — nothing to gain from a relaunch.
            if unsafe { IsUserAnAdmin() } != 0 {
                return Ok(false);
            }

            let verb = wide(std::ffi::OsStr::new("runas"));
            let file = wide(launch.program.as_os_str());
            let params = wide(&parameters(launch));

            let mut info: SHELLEXECUTEINFOW = unsafe { std::mem::zeroed() };
            #[allow(clippy::cast_possible_truncation)]
            {
                info.cbSize = std::mem::size_of::<SHELLEXECUTEINFOW>() as DWORD;
            }
            info.fMask = SEE_MASK_NOCLOSEPROCESS;
            info.lpVerb = verb.as_ptr();
            info.lpFile = file.as_ptr();
            info.lpParameters = params.as_ptr();
            info.nShow = if show_window { SW_SHOWNORMAL } else { SW_HIDE };

            let launched = unsafe { ShellExecuteExW(&mut info) };
            if launched == 0 {
                let code = unsafe { GetLastError() };
                if code == ERROR_CANCELLED {
                    return Ok(false);
                }
                #[allow(clippy::cast_possible_wrap)]
                return Err(ElevationError { code: code as i32 });
            }

            // A successful call without a process handle is ambiguous; treat
            // it as "did not elevate" so the caller's original error is the
            // one the operator sees.
            Ok(!info.hProcess.is_null())
        }
    }
}
