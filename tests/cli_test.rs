use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn hash_password_prints_known_digest() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("hash-password")
        .arg("admin123")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9",
        ));
}

#[test]
fn serve_on_a_bad_bind_address_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("serve")
        .arg("--site-root")
        .arg(temp_dir.path())
        .arg("--bind")
        .arg("256.0.0.1:99999")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
