//! Resolution rules for the values the build script stamps into the binary.
//!
//! Shared with `build.rs`, which includes this file by path, so it must
//! stay dependency-free.

/// Environment variable carrying the product name.
pub const NAME_VAR: &str = "VERSTAMP_BUILD_NAME";

/// Environment variable carrying the source revision.
pub const REVISION_VAR: &str = "VERSTAMP_BUILD_REVISION";

/// Paths whose changes can alter the stamped revision. Package sources move
/// the dirty marker; the git files move the hash.
pub const RERUN_PATHS: &[&str] = &[
    "build.rs",
    "Cargo.toml",
    "src",
    "tests",
    ".git/HEAD",
    ".git/index",
    ".git/refs/heads/",
];

/// Values to stamp, already cut to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub name: String,
    pub revision: String,
    /// Variables whose value was cut at the first newline.
    pub truncated: Vec<&'static str>,
}

/// Resolve the stamped name and revision.
///
/// `name` and `revision` are the raw environment values (`None` when
/// unset). An explicit revision wins over `git`, even when empty; `git`
/// is only invoked when no revision was supplied.
#[must_use]
pub fn resolve(
    name: Option<&str>,
    revision: Option<&str>,
    git: impl FnOnce() -> Option<String>,
) -> Stamp {
    let name = name.unwrap_or_default().to_string();
    let revision = revision.map_or_else(|| git().unwrap_or_default(), str::to_string);

    let mut truncated = Vec::new();
    let name = cut(name, NAME_VAR, &mut truncated);
    let revision = cut(revision, REVISION_VAR, &mut truncated);

    Stamp {
        name,
        revision,
        truncated,
    }
}

/// Revision string for a commit hash and working tree state.
#[must_use]
pub fn git_revision(hash: &str, dirty: bool) -> Option<String> {
    let hash = hash.trim();
    if hash.is_empty() {
        None
    } else if dirty {
        Some(format!("{hash}*"))
    } else {
        Some(hash.to_string())
    }
}

// `rustc-env` values end at the first newline.
fn cut(value: String, var: &'static str, truncated: &mut Vec<&'static str>) -> String {
    let kept = value.trim_end_matches(['\r', '\n']);
    match kept.split_once('\n') {
        Some((first, _)) => {
            truncated.push(var);
            first.trim_end_matches('\r').to_string()
        }
        None => kept.to_string(),
    }
}
