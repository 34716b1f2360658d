//! Operating system naming and platform build flavors.
//!
//! The same binary ships in several packagings (sandboxed app, system
//! extension, GUI, daemon). Which one is running is decided from the
//! executable's own path rather than at compile time.

mod mac;
mod windows;

pub use mac::{
    APP_EXECUTABLE_SUFFIX, EXTENSION_EXECUTABLE_SUFFIX, MacFlavor, SYSTEM_EXTENSION_NAME,
    is_mac_sys_ext, is_sandboxed_macos,
};
pub use windows::{GUI_EXECUTABLE_NAMES, is_windows_gui, is_windows_gui_exe};

/// Reports whether this is a mobile client build.
#[must_use]
pub const fn is_mobile() -> bool {
    cfg!(any(target_os = "android", target_os = "ios"))
}

/// Returns the display name of the running operating system.
///
/// See [`os_name_for`].
#[must_use]
pub fn os_name() -> &'static str {
    os_name_for(std::env::consts::OS)
}

/// Returns the display name for a runtime OS identifier.
///
/// Apple platforms are reported as `iOS` and `macOS` with that exact
/// capitalization, since stored records already use these values. Every other
/// identifier is returned unchanged.
#[must_use]
pub fn os_name_for(os: &str) -> &str {
    match os {
        "ios" => "iOS",
        "macos" | "darwin" => "macOS",
        other => other,
    }
}
