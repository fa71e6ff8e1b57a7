use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::i18n::t;
use crate::shell::{self, LaunchError, ShellExecute};

/// Process exit status for a failed run.
pub const EXIT_FAILURE: u8 = 1;

/// Joins the arguments with single spaces. Arguments are used as given.
pub fn build_title<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>
{
    let mut title = String::new();
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            title.push(' ');
        }
        title.push_str(arg.as_ref());
    }
    title
}

/// Builds the `cmd.exe` command line: change into `directory`, then set the
/// window title if there is one. Neither value is escaped.
pub fn build_invocation(directory: &Path, title: &str) -> String {
    let mut cmd = format!("/k cd \"{}\"", directory.display());
    if !title.is_empty() {
        cmd.push_str(" & title ");
        cmd.push_str(title);
    }
    cmd
}

/// Directory containing the running executable.
pub fn resolve_script_directory() -> Result<PathBuf, Error> {
    // Not canonicalized: on Windows that yields a \\?\ path cmd.exe can't cd into
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("{} has no parent directory", exe.display())
    ))?;
    Ok(dir.to_path_buf())
}

pub struct Launcher<S: ShellExecute> {
    shell: S,
    shell_path: PathBuf,
    directory: Option<PathBuf>
}

impl<S: ShellExecute> Launcher<S> {
    pub fn new(shell: S) -> Launcher<S> {
        Self::with_shell_path(shell, shell::default_shell_path())
    }

    pub fn with_shell_path(shell: S, shell_path: PathBuf) -> Launcher<S> {
        Launcher {
            shell,
            shell_path,
            directory: None
        }
    }

    /// Starts the console in `directory` instead of the executable's directory.
    pub fn with_directory(mut self, directory: PathBuf) -> Launcher<S> {
        self.directory = Some(directory);
        self
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Fire and forget: returns once the OS has accepted the request.
    pub fn launch_elevated(&self, invocation: &str) -> Result<(), Error> {
        self.shell.ensure_shell(&self.shell_path)?;

        info!(shell = %self.shell_path.display(), invocation, "requesting elevated console");
        self.shell.execute_elevated(&self.shell_path, invocation)?;
        Ok(())
    }

    pub fn run<I, A>(&self, args: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>
    {
        let title = build_title(args);
        debug!(title, "built window title");

        let directory = match &self.directory {
            Some(dir) => dir.clone(),
            None => resolve_script_directory()?
        };
        debug!(directory = %directory.display(), "resolved start directory");

        let invocation = build_invocation(&directory, &title);
        self.launch_elevated(&invocation)
    }

    /// Turns a run result into the process exit status. Failures are shown to
    /// the user unless they dismissed the elevation prompt themselves.
    pub fn exit_status(&self, result: Result<(), Error>) -> u8 {
        match result {
            Ok(()) => 0,
            Err(e) => {
                error!("{}", e);
                if !e.is_cancelled() {
                    self.shell.report_error(&e);
                }
                EXIT_FAILURE
            }
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Environment(std::io::Error),
    Launch(LaunchError)
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Launch(LaunchError::Cancelled))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Environment(e) => write!(f, "{}", t!("error.environment", error = e)),
            Error::Launch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Environment(e) => Some(e),
            Error::Launch(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Environment(e)
    }
}

impl From<LaunchError> for Error {
    fn from(e: LaunchError) -> Self {
        Error::Launch(e)
    }
}
