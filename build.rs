//! Stamps the binary with git metadata for `libris --version`.
//!
//! Dev builds report `<version>@<hash> <date>`; a clean checkout sitting on a
//! `v<version>` tag reports the bare version. Outside a git checkout every
//! value is empty and the bare version is used.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let date = git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d %H:%M"])
        .unwrap_or_default();

    let release_tag = format!("v{}", env!("CARGO_PKG_VERSION"));
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .map(|tags| tags.lines().any(|t| t == release_tag))
        .unwrap_or(false);
    let clean = git(&["status", "--porcelain"]).is_some_and(|s| s.is_empty());

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rustc-env=GIT_COMMIT_DATE={}", date);
    println!("cargo:rustc-env=IS_RELEASE={}", tagged && clean);
}
