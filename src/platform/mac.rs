//! macOS app, system extension, and daemon flavors.

use std::path::Path;
use std::sync::LazyLock;

/// Executable file name of the standalone system extension ("macsys") build.
pub const SYSTEM_EXTENSION_NAME: &str = "dev.omni.cli.macsys.network-extension";

/// Path suffix of the sandboxed app's main executable.
pub const APP_EXECUTABLE_SUFFIX: &str = "/Contents/MacOS/Omni";

/// Path suffix of the sandboxed network extension's executable.
pub const EXTENSION_EXECUTABLE_SUFFIX: &str = "/Contents/MacOS/OmniExtension";

/// Packaging flavor of a macOS process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacFlavor {
    /// Running as the standalone system extension.
    pub is_system_extension: bool,
    /// Running inside the app sandbox (app or extension).
    pub is_sandboxed: bool,
}

impl MacFlavor {
    /// Classify an executable path.
    #[must_use]
    pub fn from_exe_path(exe: &Path) -> Self {
        let is_system_extension = exe
            .file_name()
            .is_some_and(|name| name == SYSTEM_EXTENSION_NAME);
        let path = exe.to_string_lossy();
        let is_sandboxed = is_system_extension
            || path.ends_with(APP_EXECUTABLE_SUFFIX)
            || path.ends_with(EXTENSION_EXECUTABLE_SUFFIX);

        Self {
            is_system_extension,
            is_sandboxed,
        }
    }

    /// Classify the running executable.
    ///
    /// Returns the default (unsandboxed daemon) flavor if the executable path
    /// cannot be resolved.
    fn detect() -> Self {
        match std::env::current_exe() {
            Ok(exe) => {
                let flavor = Self::from_exe_path(&exe);
                tracing::debug!(
                    exe = %exe.display(),
                    system_extension = flavor.is_system_extension,
                    sandboxed = flavor.is_sandboxed,
                    "detected macOS build flavor"
                );
                flavor
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "could not resolve executable path, assuming daemon flavor"
                );
                Self::default()
            }
        }
    }
}

static MAC_FLAVOR: LazyLock<MacFlavor> = LazyLock::new(MacFlavor::detect);

/// Reports whether this process is a sandboxed macOS process (either the app
/// or the extension).
///
/// True for the App Store and system extension builds, false for the daemon
/// and on every other platform.
#[must_use]
pub fn is_sandboxed_macos() -> bool {
    if !cfg!(target_os = "macos") {
        return false;
    }
    MAC_FLAVOR.is_sandboxed
}

/// Reports whether this binary is the standalone system extension build.
#[must_use]
pub fn is_mac_sys_ext() -> bool {
    if !cfg!(target_os = "macos") {
        return false;
    }
    MAC_FLAVOR.is_system_extension
}
