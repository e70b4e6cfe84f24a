use std::{env, process::Command};

/// Exposes the commit the bundle was built from as `JINVA_WEB_GIT_SHA`.
/// CI can pin the value through the same variable when `.git` is absent.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=JINVA_WEB_GIT_SHA");

    let sha = env::var("JINVA_WEB_GIT_SHA")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=JINVA_WEB_GIT_SHA={}", sha.trim());
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
