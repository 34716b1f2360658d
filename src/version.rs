//! Release train detection from the stamped short version.

use std::sync::LazyLock;

use crate::build_info;

/// Substring marking a development build in the short version.
pub const DEV_MARKER: &str = "-dev";

static UNSTABLE: LazyLock<bool> = LazyLock::new(detect_unstable);

fn detect_unstable() -> bool {
    let short = build_info::SHORT;
    let unstable = is_unstable_version(short);
    tracing::debug!(short, unstable, "detected release train");
    unstable
}

/// Reports whether this is an unstable build, i.e. its minor version is odd.
///
/// Computed once per process.
#[must_use]
pub fn is_unstable_build() -> bool {
    *UNSTABLE
}

/// Reports whether `short` belongs to the unstable release train.
///
/// Returns `false` if `short` has fewer than two `.` separators or its minor
/// component is not an integer.
#[must_use]
pub fn is_unstable_version(short: &str) -> bool {
    let Some((_, rest)) = short.split_once('.') else {
        return false;
    };
    let Some((minor, _)) = rest.split_once('.') else {
        return false;
    };
    minor.parse::<i64>().is_ok_and(|minor| minor % 2 == 1)
}

/// Reports whether `short` is a development build version.
#[must_use]
pub fn is_dev_version(short: &str) -> bool {
    short.contains(DEV_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn even_minor_is_stable() {
        assert!(!is_unstable_version("1.2.0"));
        assert!(!is_unstable_version("1.0.0"));
        assert!(!is_unstable_version("0.4.0-dev"));
    }

    #[test]
    fn odd_minor_is_unstable() {
        assert!(is_unstable_version("1.3.0"));
        assert!(is_unstable_version("1.77.2-dev20250101"));
    }

    #[test]
    fn malformed_versions_are_stable() {
        assert!(!is_unstable_version("1.x.0"));
        assert!(!is_unstable_version("1"));
        assert!(!is_unstable_version("1.3"));
        assert!(!is_unstable_version(""));
        assert!(!is_unstable_version("1..0"));
    }

    #[test]
    fn negative_minor_is_not_unstable() {
        assert!(!is_unstable_version("1.-3.0"));
    }

    #[test]
    fn dev_marker_is_substring_match() {
        assert!(is_dev_version("1.2.0-dev"));
        assert!(is_dev_version("1.2.0-dev20250101"));
        assert!(!is_dev_version("1.2.0"));
        assert!(!is_dev_version("1.2.0-rc1"));
    }

    #[test]
    fn unstable_build_matches_stamped_short() {
        assert_eq!(is_unstable_build(), is_unstable_version(build_info::SHORT));
        assert_eq!(is_unstable_build(), is_unstable_build());
    }

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    static COUNTED: LazyLock<bool> = LazyLock::new(|| {
        CALLS.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        detect_unstable()
    });

    #[test]
    fn contended_first_access_runs_detection_once() {
        let threads = 32;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    *COUNTED
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), is_unstable_build());
        }
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }
}
