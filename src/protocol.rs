//! Protocol capability versioning.

/// A capability version understood by clients and the daemon.
pub type CapabilityVersion = u32;

/// The capability version of this build.
///
/// Incremented whenever a new client-visible capability is added. Never
/// decremented.
pub const CURRENT_CAPABILITY_VERSION: CapabilityVersion = 7;
