//! Temporary source trees and a preconfigured command for the binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Write `contents` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

/// A small web project:
///
/// ```text
/// app.ts                      contains the target on line 1
/// readme.md                   contains the target, wrong extension
/// node_modules/lib/index.js   contains the target, excluded
/// src/components/Button.tsx   contains the target on lines 2 and 4
/// src/util.js                 no match
/// ```
pub fn web_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "app.ts", "const boldss = 1;\n");
    write_file(root, "readme.md", "boldss everywhere\n");
    write_file(root, "node_modules/lib/index.js", "module.exports = 'boldss';\n");
    write_file(
        root,
        "src/components/Button.tsx",
        "export function Button() {\n  return <b className=\"boldss\" />;\n}\n\t// boldss   \n",
    );
    write_file(root, "src/util.js", "export const bold = true;\n");
    temp_dir
}

/// The binary with configuration discovery pointed at `config_home` and
/// colour disabled
pub fn sourcescan_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sourcescan"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1");
    cmd
}

/// Run the binary against `root` with extra arguments
pub fn run_scan(root: &Path, extra_args: &[&str]) -> Output {
    let config_home = TempDir::new().unwrap();
    sourcescan_cmd(config_home.path())
        .arg("--root")
        .arg(root)
        .args(extra_args)
        .output()
        .unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
