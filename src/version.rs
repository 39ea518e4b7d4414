//! Version metadata captured at compile time.
//!
//! The semantic version is fixed in source. The product name and source
//! revision are stamped in by the build script from `VERSTAMP_BUILD_NAME`
//! and `VERSTAMP_BUILD_REVISION` (the revision falls back to the short git
//! hash). Either may be empty.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// Semantic version of the product. Informal, never parsed.
pub const SEMANTIC_VERSION: &str = "0.8.0a";

/// Product name supplied by the build process.
pub const BUILD_NAME: &str = env!("VERSTAMP_BUILD_NAME");

/// Source revision supplied by the build process.
pub const BUILD_REVISION: &str = env!("VERSTAMP_BUILD_REVISION");

/// Process-wide version info built from the stamped values.
static CURRENT: LazyLock<VersionInfo> = LazyLock::new(VersionInfo::from_build);

/// Format the composite version string.
///
/// Format: `<name> v<version> (<revision>)`. Empty parts are kept as-is,
/// so an unstamped build renders as ` v0.8.0a ()`.
#[must_use]
pub fn format_human(name: &str, version: &str, revision: &str) -> String {
    format!("{name} v{version} ({revision})")
}

/// Composite version string of the running process.
#[must_use]
pub fn human_version() -> &'static str {
    VersionInfo::current().human()
}

/// Name, version and revision, plus the composite string derived from them.
///
/// The composite string is computed once in the constructor and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    name: String,
    version: String,
    revision: String,
    human: String,
}

impl VersionInfo {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let version = version.into();
        let revision = revision.into();
        let human = format_human(&name, &version, &revision);

        Self {
            name,
            version,
            revision,
            human,
        }
    }

    /// Build from the values stamped in at compile time.
    #[must_use]
    pub fn from_build() -> Self {
        Self::new(BUILD_NAME, SEMANTIC_VERSION, BUILD_REVISION)
    }

    /// The process-wide instance, initialized on first access.
    #[must_use]
    pub fn current() -> &'static Self {
        &CURRENT
    }

    /// Composite string, e.g. `demo v0.8.0a (abc1234)`.
    #[must_use]
    pub fn human(&self) -> &str {
        &self.human
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn revision(&self) -> &str {
        &self.revision
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::from_build()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human)
    }
}
