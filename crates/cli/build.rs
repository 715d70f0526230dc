use std::process::Command;

/// Short hash of the checked-out commit, if this is a git checkout.
fn commit_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_owned()).filter(|h| !h.is_empty())
}

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-env-changed=JOINPROBE_BUILD_HASH");

    // Release tarballs have no .git; packagers can pass the hash in
    let hash = std::env::var("JOINPROBE_BUILD_HASH")
        .ok()
        .or_else(commit_hash)
        .unwrap_or_else(|| "unknown".into());
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".into());

    for (key, value) in [("GIT_COMMIT_HASH", hash), ("TARGET", target)] {
        println!("cargo:rustc-env={key}={value}");
    }
}
