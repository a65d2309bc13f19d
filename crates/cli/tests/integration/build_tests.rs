use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

#[test]
#[serial]
fn build_passes_kernel_flags_to_compiler() {
  let env = TestEnv::with_compiler(0);

  env
    .build_cmd()
    .arg("./cmd/demo")
    .assert()
    .success()
    .stdout(predicate::str::contains("Built kernel image"));

  let args = env.recorded("args");
  assert_eq!(&args[..5], &["build", "-tags", "eggos", "-ldflags", "-E github.com/icexin/eggos/kernel.rt0 -T 0x100000"]);
  assert_eq!(args[5], "-overlay");
  assert!(args[6].ends_with("overlay.json"));
  assert_eq!(args.last().unwrap(), "./cmd/demo");
}

#[test]
#[serial]
fn build_test_flag_selects_harness() {
  let env = TestEnv::with_compiler(0);

  env
    .build_cmd()
    .args(["--test", "./kernel"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Built test harness"));

  assert_eq!(&env.recorded("args")[..2], &["test", "-c"]);
}

#[test]
#[serial]
fn trailing_compiler_flags_are_forwarded() {
  let env = TestEnv::with_compiler(0);

  env
    .build_cmd()
    .args(["--", "-tags", "netgo", "-o", "kernel.elf", "./cmd/demo"])
    .assert()
    .success();

  let args = env.recorded("args");
  assert_eq!(&args[args.len() - 5..], &["-tags", "netgo,eggos", "-o", "kernel.elf", "./cmd/demo"]);
  assert_eq!(args.iter().filter(|a| *a == "-tags").count(), 1);
}

#[test]
#[serial]
fn ambient_target_is_overridden() {
  let env = TestEnv::with_compiler(0);

  env
    .build_cmd()
    .env("GOOS", "windows")
    .env("GOARCH", "arm64")
    .env("CGO_ENABLED", "1")
    .assert()
    .success();

  assert_eq!(env.recorded("env"), vec!["GOOS=linux", "GOARCH=amd64", "CGO_ENABLED=0"]);
}

#[test]
#[serial]
fn work_dir_sets_compiler_cwd() {
  let env = TestEnv::with_compiler(0);
  let work = env.path().join("src");
  std::fs::create_dir(&work).unwrap();

  env.build_cmd().arg("-C").arg(&work).assert().success();

  let cwd = env.recorded("cwd").concat();
  assert_eq!(std::path::PathBuf::from(cwd), canonical(&work));
}

#[test]
#[serial]
fn compiler_failure_propagates_exit_code() {
  let env = TestEnv::with_compiler(3);

  env
    .build_cmd()
    .arg("./cmd/broken")
    .assert()
    .code(3)
    .stderr(predicate::str::contains("fake compiler diagnostics"))
    .stderr(predicate::str::contains("Failed to build kernel image"));
}

#[test]
#[serial]
fn basedir_is_left_in_place() {
  let env = TestEnv::with_compiler(0);
  let scratch = env.path().join("scratch");

  env.build_cmd().arg("--basedir").arg(&scratch).assert().success();

  assert!(scratch.join("overlay.json").exists());
}

#[test]
#[serial]
fn replacements_land_in_overlay() {
  let env = TestEnv::with_compiler(0);
  let scratch = env.path().join("scratch");

  env
    .build_cmd()
    .arg("--basedir")
    .arg(&scratch)
    .args(["--replace", "/src/main.go=/gen/main.go"])
    .assert()
    .success();

  let overlay = std::fs::read_to_string(scratch.join("overlay.json")).unwrap();
  assert!(overlay.contains("\"Replace\""));
  assert!(overlay.contains("/gen/main.go"));
}

fn canonical(path: &std::path::Path) -> std::path::PathBuf {
  std::fs::canonicalize(path).unwrap()
}
