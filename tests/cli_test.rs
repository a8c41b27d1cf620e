//! End-to-end tests for the `vcxlist` binary.
//!
//! Each test lays out a scratch project tree, runs the binary inside it, and
//! checks stdout, stderr and the exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const DEFAULT_INPUT: &str = "src/plugins/7zip/vcxproj/7ZA/7za.dll.vcxproj";

const PROJECT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <ClCompile Include="..\..\7za\C\Alloc.c" />
    <ClCompile Include="..\..\7za\CPP\7zip\Archive\7z\7zHandler.cpp" />
    <ClCompile Include="..\..\spl\splthread.c" />
  </ItemGroup>
  <ItemGroup>
    <ClInclude Include="..\..\7za\C\Alloc.h" />
  </ItemGroup>
</Project>
"#;

fn write_project(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create project dirs");
    }
    fs::write(path, content).expect("Failed to write project file");
}

fn run_vcxlist(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vcxlist"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run vcxlist")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn default_input_is_translated() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), DEFAULT_INPUT, PROJECT);

    let output = run_vcxlist(dir.path(), &[]);

    assert!(
        output.status.success(),
        "vcxlist failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        r#"set(7ZA_SOURCES
  "${SEVENZIP_7ZA}/C/Alloc.c"
  "${SEVENZIP_7ZA}/CPP/7zip/Archive/7z/7zHandler.cpp"
  "../../spl/splthread.c"
)
"#
    );
}

#[test]
fn empty_project_prints_header_only() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), DEFAULT_INPUT, "<Project />\n");

    let output = run_vcxlist(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "set(7ZA_SOURCES\n)\n");
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_vcxlist(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout: {}", stdout_of(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("7za.dll.vcxproj"), "stderr: {}", stderr);
}

#[test]
fn verbose_status_stays_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), DEFAULT_INPUT, PROJECT);

    let output = run_vcxlist(dir.path(), &["--verbose"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("set(7ZA_SOURCES\n"));
    assert_eq!(stdout.lines().count(), 5);
    assert!(String::from_utf8_lossy(&output.stderr).contains("3 sources"));
}

#[test]
fn non_utf8_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_INPUT);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"<ClCompile Include=\"a\xff.c\" />").unwrap();

    let output = run_vcxlist(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout: {}", stdout_of(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("7za.dll.vcxproj"));
}

#[test]
fn verbose_empty_project_warns_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), DEFAULT_INPUT, "<Project />\n");

    let output = run_vcxlist(dir.path(), &["--verbose"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "set(7ZA_SOURCES\n)\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No ClCompile entries found"), "stderr: {}", stderr);
}

#[test]
fn flags_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), "proj/app.vcxproj", PROJECT);

    let output = run_vcxlist(
        dir.path(),
        &[
            "--input",
            "proj/app.vcxproj",
            "--name",
            "APP_HEADERS",
            "--item",
            "ClInclude",
            "--placeholder",
            "${APP_ROOT}/",
        ],
    );

    assert!(
        output.status.success(),
        "vcxlist failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        "set(APP_HEADERS\n  \"${APP_ROOT}/C/Alloc.h\"\n)\n"
    );
}

#[test]
fn config_file_is_layered_under_flags() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), "lib/lib.vcxproj", PROJECT);
    fs::write(
        dir.path().join("vcxlist.toml"),
        r#"input = "lib/lib.vcxproj"
name = "FROM_FILE"

[rewrite]
prefix = '..\..\spl\'
placeholder = "${SPL}/"
"#,
    )
    .unwrap();

    let output = run_vcxlist(
        dir.path(),
        &["--config", "vcxlist.toml", "--name", "FROM_CLI"],
    );

    assert!(
        output.status.success(),
        "vcxlist failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        r#"set(FROM_CLI
  "../../7za/C/Alloc.c"
  "../../7za/CPP/7zip/Archive/7z/7zHandler.cpp"
  "${SPL}/splthread.c"
)
"#
    );
}

#[test]
fn invalid_name_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_vcxlist(dir.path(), &["--name", "TWO WORDS"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
}

#[test]
fn broken_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path(), DEFAULT_INPUT, PROJECT);
    fs::write(dir.path().join("vcxlist.toml"), "name = [\n").unwrap();

    let output = run_vcxlist(dir.path(), &["--config", "vcxlist.toml"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config file"));
}
