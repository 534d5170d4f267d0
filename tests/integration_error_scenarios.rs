//! Failure modes that end the run with exit code 1.

use assert_cmd::Command;
use gomod_tree::test_utils::GoPathFixture;
use predicates::prelude::*;

fn cmd_for(fixture: &GoPathFixture) -> Command {
    let mut cmd = Command::cargo_bin("gomod-tree").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--module-path")
        .arg(fixture.project_dir())
        .arg("--gopath")
        .arg(fixture.root());
    cmd
}

#[test]
fn test_missing_go_mod() {
    let fixture = GoPathFixture::new().unwrap();

    cmd_for(&fixture)
        .arg("tree")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("go.mod is not present"))
        .stderr(predicate::str::contains("--module-path"));
}

#[test]
fn test_malformed_root_go_mod() {
    let fixture = GoPathFixture::new().unwrap();
    fixture.write_project_raw("module example.com/app\n\nrequire (\n\texample.com/a v1.0.0\n").unwrap();

    cmd_for(&fixture)
        .arg("graph")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid go.mod syntax"));
}

#[test]
fn test_invalid_depth_rejected() {
    let fixture = GoPathFixture::new().unwrap();
    fixture.write_project("example.com/app", &[]).unwrap();

    for depth in ["0", "-2"] {
        cmd_for(&fixture)
            .args(["tree", "--max-depth", depth])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(format!("Invalid depth {depth}")));
    }
}

#[test]
fn test_broken_dependency_manifest_is_not_fatal() {
    let fixture = GoPathFixture::new().unwrap();
    fixture.write_project("example.com/app", &[("example.com/broken", "v1.0.0")]).unwrap();
    fixture.add_cached_module_raw("example.com/broken", "v1.0.0", "require (\n").unwrap();

    cmd_for(&fixture)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("  example.com/broken v1.0.0"));
}

#[test]
fn test_missing_cache_root_is_not_fatal() {
    let fixture = GoPathFixture::new().unwrap();
    fixture.write_project("example.com/app", &[("example.com/a", "v1.0.0")]).unwrap();

    let mut cmd = Command::cargo_bin("gomod-tree").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--module-path")
        .arg(fixture.project_dir())
        .arg("--gopath")
        .arg(fixture.project_dir().join("no-such-gopath"))
        .arg("tree");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("has no src/ or pkg/mod/ directory"))
        .stdout(predicate::str::contains("example.com/a v1.0.0"));
}
