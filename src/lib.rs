//! Omni version - build identity of the running Omni binary.
//!
//! This library answers read-only questions about the current build:
//! - which operating system it runs on, named the way clients expect
//! - which packaging flavor it is (sandboxed macOS app, system extension,
//!   Windows GUI, or plain daemon)
//! - whether it belongs to the unstable release train
//! - a serializable [`Meta`] snapshot of version and git provenance
//!
//! Flags derived from the executable path or version string are computed at
//! most once per process and never fail; anything that cannot be determined
//! reads as `false` or empty.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//! │  platform   │  │   version   │  │ build_info  │
//! └──────┬──────┘  └──────┬──────┘  └──────┬──────┘
//!        │                │                │
//!        └────────────────┼────────────────┘
//!                         │
//!                  ┌──────┴──────┐
//!                  │    meta     │
//!                  └─────────────┘
//! ```

pub mod build_info;
pub mod cli;
pub mod config;
mod error;
pub mod meta;
pub mod platform;
pub mod protocol;
pub mod report;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use meta::{Meta, get_meta};
pub use version::is_unstable_build;
