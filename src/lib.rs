rust_i18n::i18n!("locales", fallback = "en");

pub mod i18n;
pub mod launcher;
pub mod logging;
pub mod shell;

pub use launcher::{Error, Launcher};
pub use shell::{LaunchError, ShellExecute, SystemShell};
