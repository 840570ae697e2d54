use chrono::Utc;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Short hash of HEAD, or "unknown" outside a git checkout
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    let contents = format!(
        "pub const BUILD_TIME: &str = \"{}\";\npub const GIT_HASH: &str = \"{}\";\n",
        build_time,
        git_hash()
    );
    fs::write(out_dir.join("version.rs"), contents).expect("failed to write version.rs");
}
