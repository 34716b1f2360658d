//! Rendering of build facts for terminal and machine consumers.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::meta::Meta;
use crate::{platform, version};

/// Platform and release flags of the running process.
#[allow(clippy::struct_excessive_bools)] // Flat record of independent yes/no facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    /// Display name of the operating system.
    pub os: &'static str,
    /// Mobile client build.
    pub mobile: bool,
    /// Sandboxed macOS app or extension.
    pub sandboxed_macos: bool,
    /// Standalone macOS system extension.
    pub mac_sys_ext: bool,
    /// Windows GUI process.
    pub windows_gui: bool,
    /// Odd minor version.
    pub unstable: bool,
    /// Development build.
    pub dev: bool,
}

impl Flags {
    /// Collect the flags of the running process.
    #[must_use]
    pub fn current() -> Self {
        Self {
            os: platform::os_name(),
            mobile: platform::is_mobile(),
            sandboxed_macos: platform::is_sandboxed_macos(),
            mac_sys_ext: platform::is_mac_sys_ext(),
            windows_gui: platform::is_windows_gui(),
            unstable: version::is_unstable_build(),
            dev: version::is_dev_version(crate::build_info::SHORT),
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("os", self.os.to_string()),
            ("mobile", self.mobile.to_string()),
            ("sandboxed macos", self.sandboxed_macos.to_string()),
            ("mac sysext", self.mac_sys_ext.to_string()),
            ("windows gui", self.windows_gui.to_string()),
            ("unstable", self.unstable.to_string()),
            ("dev", self.dev.to_string()),
        ]
    }
}

fn meta_rows(meta: &Meta) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("version", meta.major_minor_patch.clone()),
        ("short", meta.short.clone()),
        ("long", meta.long.clone()),
        ("dev", meta.is_dev.to_string()),
        ("unstable", meta.unstable_branch.to_string()),
    ];
    if !meta.git_commit.is_empty() {
        rows.push(("commit", meta.git_commit.clone()));
    }
    rows.push(("dirty", meta.git_dirty.to_string()));
    if !meta.extra_git_commit.is_empty() {
        rows.push(("extra commit", meta.extra_git_commit.clone()));
    }
    if !meta.daemon_long.is_empty() {
        rows.push(("daemon", meta.daemon_long.clone()));
    }
    rows.push(("capability", meta.cap.to_string()));
    rows
}

fn table(rows: &[(&'static str, String)]) -> String {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;
    let mut out = String::new();
    for (key, value) in rows {
        let label = format!("{key}:");
        let _ = writeln!(out, "{label:<width$} {value}");
    }
    out
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json + "\n")
}

/// Render build metadata in the given format.
pub fn render_meta(meta: &Meta, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(table(&meta_rows(meta))),
        OutputFormat::Json => to_json(meta, pretty),
    }
}

/// Render platform flags in the given format.
pub fn render_flags(flags: &Flags, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(table(&flags.rows())),
        OutputFormat::Json => to_json(flags, pretty),
    }
}
