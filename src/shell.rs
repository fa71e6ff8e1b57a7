use std::{fmt::Display, path::{Path, PathBuf}};

use crate::i18n::t;

pub const SHELL_EXE: &str = "cmd.exe";

// ShellExecute return values at or below this are errors
#[cfg(windows)]
const SE_ERR_MAX: isize = 32;
const SE_ERR_FNF: isize = 2;
const SE_ERR_PNF: isize = 3;
const SE_ERR_ACCESSDENIED: isize = 5;

/// Starts `file` with administrator rights, handing it `parameters` as its command line.
pub trait ShellExecute {
    /// Checked before any prompt is shown.
    fn ensure_shell(&self, file: &Path) -> Result<(), LaunchError> {
        if file.is_file() {
            Ok(())
        }
        else {
            Err(LaunchError::ShellNotFound(file.to_path_buf()))
        }
    }

    fn execute_elevated(&self, file: &Path, parameters: &str) -> Result<(), LaunchError>;

    fn report_error(&self, err: &dyn Display);
}

/// Absolute path of the console host, taken from the system directory.
#[cfg(windows)]
pub fn default_shell_path() -> PathBuf {
    get_system_directory().join(SHELL_EXE)
}

#[cfg(not(windows))]
pub fn default_shell_path() -> PathBuf {
    PathBuf::from(SHELL_EXE)
}

#[cfg(windows)]
fn get_system_directory() -> PathBuf {
    use windows::Win32::{Foundation::MAX_PATH, System::SystemInformation::GetSystemDirectoryW};

    let mut buffer = [0u16; MAX_PATH as usize];
    let length = unsafe { GetSystemDirectoryW(Some(&mut buffer)) } as usize;
    if length == 0 || length > buffer.len() {
        return PathBuf::from(r"C:\Windows\System32");
    }
    PathBuf::from(String::from_utf16_lossy(&buffer[..length]))
}

/// The real shell: UAC `runas` on Windows.
#[derive(Default)]
pub struct SystemShell;

#[cfg(windows)]
impl ShellExecute for SystemShell {
    fn execute_elevated(&self, file: &Path, parameters: &str) -> Result<(), LaunchError> {
        use windows::{
            core::{HSTRING, PCWSTR},
            Win32::{Foundation::HWND, UI::{Shell::ShellExecuteW, WindowsAndMessaging::SW_SHOWNORMAL}}
        };

        let res = unsafe {
            ShellExecuteW(
                None::<&HWND>,
                &HSTRING::from("runas"),
                &HSTRING::from(file.as_os_str()),
                &HSTRING::from(parameters),
                PCWSTR::null(),
                SW_SHOWNORMAL
            )
        };

        let code = res.0 as isize;
        if code > SE_ERR_MAX {
            Ok(())
        }
        else {
            Err(LaunchError::from_shell_code(code, file))
        }
    }

    fn report_error(&self, err: &dyn Display) {
        use windows::{
            core::HSTRING,
            Win32::{Foundation::HWND, UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK}}
        };

        unsafe {
            MessageBoxW(
                None::<&HWND>,
                &HSTRING::from(err.to_string()),
                &HSTRING::from(t!("app.title")),
                MB_OK | MB_ICONERROR
            );
        }
    }
}

#[cfg(not(windows))]
impl ShellExecute for SystemShell {
    // No elevation backend here; there is no shell to look for either
    fn ensure_shell(&self, _file: &Path) -> Result<(), LaunchError> {
        Err(LaunchError::Unsupported)
    }

    fn execute_elevated(&self, _file: &Path, _parameters: &str) -> Result<(), LaunchError> {
        Err(LaunchError::Unsupported)
    }

    fn report_error(&self, err: &dyn Display) {
        eprintln!("{}", err);
    }
}

#[derive(Debug)]
pub enum LaunchError {
    /// The user declined the elevation prompt.
    Cancelled,
    ShellNotFound(PathBuf),
    Os(isize),
    Unsupported
}

impl LaunchError {
    pub fn from_shell_code(code: isize, file: &Path) -> LaunchError {
        match code {
            SE_ERR_ACCESSDENIED => LaunchError::Cancelled,
            SE_ERR_FNF | SE_ERR_PNF => LaunchError::ShellNotFound(file.to_path_buf()),
            _ => LaunchError::Os(code)
        }
    }
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchError::Cancelled => write!(f, "{}", t!("error.cancelled")),
            LaunchError::ShellNotFound(path) => write!(f, "{}", t!("error.shell_not_found", path = path.display())),
            LaunchError::Os(code) => write!(f, "{}", t!("error.os", code = code)),
            LaunchError::Unsupported => write!(f, "{}", t!("error.unsupported")),
        }
    }
}

impl std::error::Error for LaunchError {}
