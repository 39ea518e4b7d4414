//! Build script to stamp the product name and source revision into the binary.

use std::env;
use std::process::Command;

#[path = "src/stamp.rs"]
mod stamp;

fn main() {
    // Re-run if the injected values, the sources or git state change
    println!("cargo:rerun-if-env-changed={}", stamp::NAME_VAR);
    println!("cargo:rerun-if-env-changed={}", stamp::REVISION_VAR);
    for path in stamp::RERUN_PATHS {
        println!("cargo:rerun-if-changed={path}");
    }

    let name = env::var(stamp::NAME_VAR).ok();
    let revision = env::var(stamp::REVISION_VAR).ok();
    let stamp = stamp::resolve(name.as_deref(), revision.as_deref(), git_revision);

    for var in &stamp.truncated {
        println!("cargo:warning={var} spans several lines; only the first line is stamped");
    }

    println!("cargo:rustc-env={}={}", stamp::NAME_VAR, stamp.name);
    println!("cargo:rustc-env={}={}", stamp::REVISION_VAR, stamp.revision);
}

/// Short git commit hash (7 chars), with a `*` suffix for a dirty tree.
fn git_revision() -> Option<String> {
    let hash = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())?;

    let dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .is_some_and(|o| !o.stdout.is_empty());

    stamp::git_revision(&hash, dirty)
}
