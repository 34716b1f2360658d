//! Build script to stamp version and git provenance into the binary.

use std::env;
use std::process::Command;

/// Number of hash characters kept in the long version suffix.
const SHORT_HASH_LEN: usize = 9;

fn git(args: &[&str]) -> Option<Vec<u8>> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| o.stdout)
}

fn env_nonempty(key: &str) -> Option<String> {
    println!("cargo:rerun-if-env-changed={key}");
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn abbrev(hash: &str) -> &str {
    hash.get(..SHORT_HASH_LEN).unwrap_or(hash)
}

fn main() {
    // Re-run if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");

    let commit = git(&["rev-parse", "HEAD"])
        .and_then(|out| String::from_utf8(out).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    println!("cargo:rustc-env=BUILD_GIT_COMMIT={commit}");

    let dirty = git(&["status", "--porcelain"]).is_some_and(|out| !out.is_empty());
    println!("cargo:rustc-env=BUILD_DIRTY={dirty}");

    let extra = env_nonempty("OMNI_EXTRA_GIT_COMMIT").unwrap_or_default();
    println!("cargo:rustc-env=BUILD_EXTRA_GIT_COMMIT={extra}");

    let pkg_version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let release = env_nonempty("OMNI_RELEASE_BUILD").is_some();
    let short = env_nonempty("OMNI_VERSION_SHORT").unwrap_or_else(|| {
        if release {
            pkg_version
        } else {
            format!("{pkg_version}-dev")
        }
    });
    println!("cargo:rustc-env=BUILD_SHORT={short}");

    let major_minor_patch = short.split_once('-').map_or(short.as_str(), |(mmp, _)| mmp);
    println!("cargo:rustc-env=BUILD_MAJOR_MINOR_PATCH={major_minor_patch}");

    let mut long = short;
    if !commit.is_empty() {
        long.push_str("-t");
        long.push_str(abbrev(&commit));
    }
    if !extra.is_empty() {
        long.push_str("-e");
        long.push_str(abbrev(&extra));
    }
    println!("cargo:rustc-env=BUILD_LONG={long}");
}
