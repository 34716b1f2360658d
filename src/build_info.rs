//! Build information captured at compile time.

/// The `major.minor.patch` version, without any hyphenated suffix.
///
/// Always a prefix of [`SHORT`].
pub const MAJOR_MINOR_PATCH: &str = env!("BUILD_MAJOR_MINOR_PATCH");

/// Short version, e.g. `0.4.0` or `0.4.0-dev` for development builds.
pub const SHORT: &str = env!("BUILD_SHORT");

/// Short version plus commit hash suffixes, e.g. `0.4.0-dev-tabc123def`.
pub const LONG: &str = env!("BUILD_LONG");

/// Full git commit hash of this repository. Empty if unknown.
pub const GIT_COMMIT: &str = env!("BUILD_GIT_COMMIT");

/// Git commit of a supplemental repository this build was integrated into.
/// Empty if not applicable.
pub const EXTRA_GIT_COMMIT: &str = env!("BUILD_EXTRA_GIT_COMMIT");

/// Whether the build was from a dirty working directory (as string).
const BUILD_DIRTY_STR: &str = env!("BUILD_DIRTY");

/// Check if the build was from a dirty working directory.
#[must_use]
pub fn is_dirty() -> bool {
    BUILD_DIRTY_STR == "true"
}
