//! Platform process probes: liveness and signal delivery with
//! permission-failure classification.

#[cfg(unix)]
pub use self::unix::UnixProcessProbe;
#[cfg(windows)]
pub use self::windows::WindowsProcessProbe;

#[cfg(unix)]
mod unix {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    use crate::application::ports::{ProcessProbe, StopSignal};
    use crate::domain::SignalError;

    /// Probe using signal semantics: signal 0 for liveness, SIGINT/SIGKILL
    /// for stops, errno for classification.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct UnixProcessProbe;

    fn classify(pid: u32, errno: Errno) -> SignalError {
        match errno {
            Errno::EPERM | Errno::EACCES => SignalError::AccessDenied { pid },
            Errno::ESRCH => SignalError::NotFound { pid },
            other => SignalError::Io {
                pid,
                source: std::io::Error::from_raw_os_error(other as i32),
            },
        }
    }

    impl ProcessProbe for UnixProcessProbe {
        #[allow(clippy::cast_possible_wrap)]
        fn is_alive(&self, pid: u32) -> bool {
            // EPERM still proves existence — we just may not own it.
            match kill(Pid::from_raw(pid as i32), None) {
                Ok(()) | Err(Errno::EPERM) => true,
                Err(_) => false,
            }
        }

        #[allow(clippy::cast_possible_wrap)]
        fn signal(&self, pid: u32, signal: StopSignal) -> Result<(), SignalError> {
            let sig = match signal {
                StopSignal::Interrupt => Signal::SIGINT,
                StopSignal::Kill => Signal::SIGKILL,
            };
            kill(Pid::from_raw(pid as i32), sig).map_err(|errno| classify(pid, errno))
        }
    }

}

#[cfg(windows)]
#[allow(unsafe_code)] // Win32 process APIs have no safe wrapper in our stack
mod windows {
    use winapi::shared::winerror::{ERROR_ACCESS_DENIED, ERROR_INVALID_PARAMETER};
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::handleapi::CloseHandle;
    use winapi::um::processthreadsapi::{OpenProcess, TerminateProcess};
    use winapi::um::winnt::{PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE};

    use crate::application::ports::{ProcessProbe, StopSignal};
    use crate::domain::SignalError;

    /// Probe using process-handle semantics: a handle that opens (or is
    /// denied) proves existence; stops are forced termination — Windows has
    /// no cross-process interrupt for console-less agents.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WindowsProcessProbe;

    #[allow(clippy::cast_possible_wrap)]
    fn classify(pid: u32, code: u32) -> SignalError {
        match code {
            ERROR_ACCESS_DENIED => SignalError::AccessDenied { pid },
            ERROR_INVALID_PARAMETER => SignalError::NotFound { pid },
            other => SignalError::Io {
                pid,
                source: std::io::Error::from_raw_os_error(other as i32),
            },
        }
    }

    impl ProcessProbe for WindowsProcessProbe {
        fn is_alive(&self, pid: u32) -> bool {
            let handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid) };
            if handle.is_null() {
                // Denied still proves existence.
                return unsafe { GetLastError() } == ERROR_ACCESS_DENIED;
            }
            unsafe { CloseHandle(handle) };
            true
        }

        fn signal(&self, pid: u32, _signal: StopSignal) -> Result<(), SignalError> {
            let handle = unsafe { OpenProcess(PROCESS_TERMINATE, 0, pid) };
            if handle.is_null() {
                return Err(classify(pid, unsafe { GetLastError() }));
            }
            let terminated = unsafe { TerminateProcess(handle, 0) };
            let code = unsafe { GetLastError() };
            unsafe { CloseHandle(handle) };
            if terminated == 0 {
                return Err(classify(pid, code));
            }
            Ok(())
        }
    }
}
