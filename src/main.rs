#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::process::ExitCode;

use admincmd::{i18n, logging, Launcher, SystemShell};

pub fn main() -> ExitCode {
    logging::init();
    i18n::init();

    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let launcher = Launcher::new(SystemShell);
    let result = launcher.run(args);
    ExitCode::from(launcher.exit_status(result))
}
