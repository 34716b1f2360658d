//! Serializable version metadata about the current build.

use serde::{Deserialize, Serialize};

use crate::build_info;
use crate::protocol::CURRENT_CAPABILITY_VERSION;
use crate::version;

/// All version information about a build, as reported to clients and
/// telemetry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    /// The `major.minor.patch` version, without any hyphenated suffix.
    pub major_minor_patch: String,

    /// Whether `short` contains a `-dev` suffix. Set for builds not stamped
    /// as an official stable or unstable release.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_dev: bool,

    /// `major_minor_patch`, optionally followed by `-dev` or `-devYYYYMMDD`.
    pub short: String,

    /// The full version string, including git commit hash(es) as suffix.
    pub long: String,

    /// Whether the build is from an unstable branch (odd minor version).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unstable_branch: bool,

    /// Git commit of this repository at which the build was made.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub git_commit: String,

    /// Whether the working tree had uncommitted changes at build time.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub git_dirty: bool,

    /// Git commit of a supplemental repository this build was integrated
    /// into. Together with `git_commit` this describes every source used.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra_git_commit: String,

    /// Long version reported by the daemon, if requested.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub daemon_long: String,

    /// Current capability version.
    pub cap: i64,
}

impl Meta {
    /// Assemble metadata for the running build.
    #[must_use]
    pub fn current() -> Self {
        Self {
            major_minor_patch: build_info::MAJOR_MINOR_PATCH.to_string(),
            is_dev: version::is_dev_version(build_info::SHORT),
            short: build_info::SHORT.to_string(),
            long: build_info::LONG.to_string(),
            unstable_branch: version::is_unstable_build(),
            git_commit: build_info::GIT_COMMIT.to_string(),
            git_dirty: build_info::is_dirty(),
            extra_git_commit: build_info::EXTRA_GIT_COMMIT.to_string(),
            daemon_long: String::new(),
            cap: i64::from(CURRENT_CAPABILITY_VERSION),
        }
    }

    /// Attach the daemon's long version.
    #[must_use]
    pub fn with_daemon_long(mut self, daemon_long: impl Into<String>) -> Self {
        self.daemon_long = daemon_long.into();
        self
    }
}

/// Returns version metadata about the current build.
#[must_use]
pub fn get_meta() -> Meta {
    Meta::current()
}
