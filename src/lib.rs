//! Verstamp - build-stamped version metadata.
//!
//! A fixed semantic version, plus a product name and source revision stamped
//! in by the build script, combined into one display string:
//!
//! ```text
//! <name> v<version> (<revision>)
//! ```
//!
//! ```
//! use verstamp::VersionInfo;
//!
//! let info = VersionInfo::new("demo", "0.8.0a", "abc1234");
//! assert_eq!(info.human(), "demo v0.8.0a (abc1234)");
//! ```

pub mod cli;
pub mod stamp;
pub mod version;

pub use version::{
    BUILD_NAME, BUILD_REVISION, SEMANTIC_VERSION, VersionInfo, format_human, human_version,
};
