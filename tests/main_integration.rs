#[path = "../src/main.rs"]
mod main_mod;

#[cfg(not(windows))]
#[test]
fn cli_exits_with_failure_without_an_elevation_backend() {
    use std::process::ExitCode;

    let code = main_mod::main();
    assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
}
