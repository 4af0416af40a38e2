//! End-to-end runs of the `swagger-cs-gen` binary.

use std::{path::Path, process::Command};

const BIN: &str = env!("CARGO_BIN_EXE_swagger-cs-gen");
const NAKAMA_API: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/nakama_api.json");
const MARKER: &str = "/* Code generated by swagger-cs-gen. DO NOT EDIT. */";

fn run(args: &[&str], cwd: &Path) -> std::process::Output {
  Command::new(BIN)
    .args(args)
    .current_dir(cwd)
    .env("NO_COLOR", "1")
    .output()
    .expect("binary should start")
}

#[test]
fn test_no_input_prints_usage() {
  let dir = tempfile::tempdir().unwrap();
  let output = run(&["-o", "Client.cs"], dir.path());

  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("No input file found"));
  assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
  assert!(!dir.path().join("Client.cs").exists());
}

#[test]
fn test_generate_to_file() {
  let dir = tempfile::tempdir().unwrap();
  let output = run(&[NAKAMA_API, "-o", "Client.cs"], dir.path());

  assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
  assert!(output.stdout.is_empty());

  let code = std::fs::read_to_string(dir.path().join("Client.cs")).unwrap();
  assert!(code.starts_with(MARKER));
  assert!(code.contains("namespace NakamaAPIV2"));
  assert!(code.contains("public async Task<IApiAccount> GetAccountAsync("));
}

#[test]
fn test_generate_to_stdout_only_first_input() {
  let dir = tempfile::tempdir().unwrap();
  let output = run(&[NAKAMA_API, "does-not-exist.json"], dir.path());

  assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
  let code = String::from_utf8(output.stdout).unwrap();
  assert!(code.starts_with(MARKER));
  assert!(code.ends_with("}\n"));
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
  let dir = tempfile::tempdir().unwrap();
  let first = run(&[NAKAMA_API], dir.path()).stdout;
  let second = run(&[NAKAMA_API], dir.path()).stdout;

  assert!(!first.is_empty());
  assert_eq!(first, second);
}

#[test]
fn test_unresolved_reference_fails_without_output() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("broken.json");
  std::fs::write(
    &input,
    r##"{"definitions":{"apiGroup":{"properties":{"creator":{"$ref":"#/definitions/apiUser"}}}},"paths":{}}"##,
  )
  .unwrap();

  let output = run(&[input.to_str().unwrap(), "-o", "Client.cs"], dir.path());

  assert!(!output.status.success());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("unresolved reference '#/definitions/apiUser' in definition 'apiGroup'"));
  assert!(!dir.path().join("Client.cs").exists());
}

#[test]
fn test_missing_input_file_fails() {
  let dir = tempfile::tempdir().unwrap();
  let output = run(&["absent.json"], dir.path());

  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("absent.json"));
  assert!(output.stdout.is_empty());
}
