use std::env;

// Defines handed to rc.exe; assets/admincmd.rc expands them into VERSIONINFO
fn version_defines() -> Vec<String> {
    let version = env!("CARGO_PKG_VERSION");
    let numeric = format!(
        "{},{},{},0",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH")
    );
    let exe_name = env!("CARGO_PKG_NAME");

    vec![
        format!("VERSION_INFO_STR=\"{}\"", version),
        format!("VERSION_INFO_VER={}", numeric),
        format!("INTERNAL_NAME_STR=\"{}\"", exe_name),
        format!("ORIGINAL_FILENAME_STR=\"{}.exe\"", exe_name)
    ]
}

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=assets/admincmd.rc");
    println!("cargo:rerun-if-changed=locales");

    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }
    embed_resource::compile("assets/admincmd.rc", version_defines());
}
