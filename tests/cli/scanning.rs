//! Running the binary against real directory trees

use crate::common::fixtures::*;
use tempfile::TempDir;

#[test]
fn test_single_match_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let app = write_file(root, "app.ts", "const boldss = 1;\n");

    let output = run_scan(root, &[]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        format!(
            "FOUND in: {}\nLine 1: const boldss = 1;\nSearch complete.\n",
            app.display()
        )
    );
}

#[test]
fn test_web_project_output() {
    let project = web_project();
    let root = project.path();

    let output = run_scan(root, &[]);

    assert!(output.status.success());
    let expected = format!(
        "FOUND in: {}\n\
         Line 1: const boldss = 1;\n\
         FOUND in: {}\n\
         Line 2: return <b className=\"boldss\" />;\n\
         Line 4: // boldss\n\
         Search complete.\n",
        root.join("app.ts").display(),
        root.join("src").join("components").join("Button.tsx").display()
    );
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn test_excluded_and_filtered_files_never_appear() {
    let project = web_project();

    let stdout = stdout_of(&run_scan(project.path(), &[]));

    assert!(!stdout.contains("node_modules"));
    assert!(!stdout.contains("readme.md"));
    assert!(!stdout.contains("util.js"));
}

#[test]
fn test_empty_directory_prints_completion_only() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_scan(temp_dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Search complete.\n");
}

#[test]
fn test_missing_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let output = run_scan(&missing, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("FATAL"), "stderr: {}", stderr);
    assert!(stderr.contains("Cannot read root directory"));
}

#[test]
fn test_missing_root_containing_marker_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent").join("node_modules");

    let output = run_scan(&missing, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "");
    assert!(stderr_of(&output).contains("Cannot read root directory"));
}

#[test]
fn test_root_inside_excluded_directory_finds_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "node_modules/pkg/index.js", "boldss\n");

    let output = run_scan(&temp_dir.path().join("node_modules"), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Search complete.\n");
}

#[test]
fn test_invalid_utf8_is_skipped_silently() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "a_binary.js", b"boldss \xff\xfe\n");
    let good = write_file(root, "b_good.js", "let boldss;\n");

    let output = run_scan(root, &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!(
            "FOUND in: {}\nLine 1: let boldss;\nSearch complete.\n",
            good.display()
        )
    );
    assert_eq!(stderr_of(&output), "");
}

#[test]
fn test_report_skipped_logs_warning() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a_binary.js", b"\xc3\x28");

    let output = run_scan(temp_dir.path(), &["--report-skipped"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Search complete.\n");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("a_binary.js"), "stderr: {}", stderr);
    assert!(stderr.contains("not valid UTF-8"));
}

#[test]
fn test_crlf_and_case_sensitivity() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(
        temp_dir.path(),
        "page.jsx",
        "const A = 'BOLDSS';\r\n   <p>boldss</p>   \r\nBoldss\r\n",
    );

    let output = run_scan(temp_dir.path(), &[]);

    assert_eq!(
        stdout_of(&output),
        format!(
            "FOUND in: {}\nLine 2: <p>boldss</p>\nSearch complete.\n",
            file.display()
        )
    );
}

#[test]
fn test_custom_target_and_extensions() {
    let project = web_project();
    let root = project.path();

    let output = run_scan(root, &["--target", "bold =", "--extension", "js,md"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!(
            "FOUND in: {}\nLine 1: export const bold = true;\nSearch complete.\n",
            root.join("src").join("util.js").display()
        )
    );
}

#[test]
fn test_custom_exclusions_replace_defaults() {
    let project = web_project();
    let root = project.path();

    let output = run_scan(root, &["--exclude", "src", "--extension", ".js"]);

    assert_eq!(
        stdout_of(&output),
        format!(
            "FOUND in: {}\nLine 1: module.exports = 'boldss';\nSearch complete.\n",
            root.join("node_modules")
                .join("lib")
                .join("index.js")
                .display()
        )
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let project = web_project();

    let first = run_scan(project.path(), &[]);
    let second = run_scan(project.path(), &[]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_followed() {
    let project = web_project();
    let root = project.path();
    std::os::unix::fs::symlink(root.join("src"), root.join("linked")).unwrap();

    let stdout = stdout_of(&run_scan(root, &[]));

    assert!(!stdout.contains("linked"));
    assert_eq!(stdout.matches("FOUND in:").count(), 2);
}
