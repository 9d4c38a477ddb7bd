//! Build script for mydict-server
//!
//! Exposes build identification to the startup banner:
//! - `MYDICT_GIT_DESCRIBE`: `git describe` of the checkout, `-dirty` when modified
//! - `MYDICT_BUILD_TIMESTAMP`: UTC build time
//! - `MYDICT_BUILD_PROFILE`: cargo profile (debug/release)

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let describe = git(&["describe", "--tags", "--always", "--dirty"])
        .unwrap_or_else(|| "unknown".to_string());

    let build_timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=MYDICT_GIT_DESCRIBE={}", describe);
    println!("cargo:rustc-env=MYDICT_BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rustc-env=MYDICT_BUILD_PROFILE={}", profile);

    // The banner only needs refreshing when the checkout moves
    if let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]) {
        println!("cargo:rerun-if-changed={}/HEAD", git_dir);
        println!("cargo:rerun-if-changed={}/index", git_dir);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
