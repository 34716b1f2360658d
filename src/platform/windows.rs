//! Windows GUI and service flavors.

use std::path::Path;

/// Executable names of the Windows GUI build.
pub const GUI_EXECUTABLE_NAMES: [&str; 2] = ["omni-gui.exe", "omni-gui"];

/// Reports whether `exe` names the Windows GUI executable.
///
/// Only the file name is compared, ignoring ASCII case.
#[must_use]
pub fn is_windows_gui_exe(exe: &Path) -> bool {
    let name = exe
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    GUI_EXECUTABLE_NAMES
        .iter()
        .any(|gui| name.eq_ignore_ascii_case(gui))
}

/// Reports whether the current process is the Windows GUI.
///
/// Resolves the executable path on every call.
#[must_use]
pub fn is_windows_gui() -> bool {
    if !cfg!(target_os = "windows") {
        return false;
    }
    let exe = std::env::current_exe().unwrap_or_default();
    is_windows_gui_exe(&exe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gui_names_match_ignoring_case() {
        assert!(is_windows_gui_exe(Path::new("omni-gui.exe")));
        assert!(is_windows_gui_exe(Path::new("OMNI-GUI.EXE")));
        assert!(is_windows_gui_exe(Path::new("Omni-Gui")));
    }

    #[test]
    fn only_file_name_is_compared() {
        assert!(is_windows_gui_exe(Path::new("/opt/omni/bin/omni-gui.exe")));
        assert!(!is_windows_gui_exe(Path::new("/opt/omni-gui.exe/omnid")));
    }

    #[test]
    fn service_and_empty_paths_are_not_gui() {
        assert!(!is_windows_gui_exe(Path::new("omnid.exe")));
        assert!(!is_windows_gui_exe(Path::new("")));
    }

    #[test]
    fn non_windows_is_never_gui() {
        if cfg!(target_os = "windows") {
            return;
        }
        assert!(!is_windows_gui());
    }
}
