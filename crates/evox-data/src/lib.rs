//! # evox-data - Domain Types and Aggregation Logic
//!
//! Foundation crate for the Evolution X website. Provides the wire models
//! for every remote catalog, the aggregation and filtering logic behind the
//! download pages, and the selection policies the UI applies.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, futures-util) and compiles on
//! both native and wasm targets, so all of its logic is plain `cargo test`
//! territory.
//!
//! ## Public API
//!
//! ### Wire Models (`models`)
//! - [`DeviceEntry`] - Entry in the global device catalog
//! - [`VersionEntry`] - Branch to human version label mapping
//! - [`OtaBuild`], [`OtaResponse`] - Downloadable builds per device/branch
//! - [`TeamRoster`], [`TeamMember`], [`Maintainer`] - People pages
//! - [`MerchItem`] - Merchandise catalog
//!
//! ### Aggregation (`aggregate`)
//! - [`join_branches()`] - Join branch lists with version labels and builds
//! - [`DeviceData`], [`BranchBuilds`] - Everything a device page renders
//!
//! ### Fleet Summaries (`fleet`)
//! - [`summarize_device()`] - Reduce per-branch builds to one listing card
//! - [`filter_summaries()`], [`visible_oems()`] - Reactive listing filters
//!
//! ### Selection Policy (`policy`)
//! - [`default_branch()`] - Which branch a device page opens on
//! - [`latest_branch()`] - The branch carrying the latest release
//!
//! ### Download Gating (`acknowledge`)
//! - [`AcknowledgedBuilds`] - Persisted set of acknowledged unmaintained builds
//!
//! ### Remote Endpoints (`endpoints`)
//! - URL constants and builders for both content repositories and the
//!   SourceForge statistics API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for the remote-data layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use evox_data::prelude::*;
//! ```

pub mod acknowledge;
pub mod aggregate;
pub mod concurrent;
pub mod endpoints;
pub mod error;
pub mod fleet;
pub mod format;
pub mod models;
pub mod policy;
pub mod stats;

/// Prelude for common imports used throughout the website crates
pub mod prelude {
    pub use super::error::{Error, Result};
}

// Re-export commonly used types at crate root for convenience
pub use acknowledge::{build_identifier, AcknowledgedBuilds};
pub use aggregate::{find_device, join_branches, version_label, BranchBuilds, BranchOta, DeviceData};
pub use concurrent::settle_all;
pub use error::{Error, Result};
pub use fleet::{
    all_oems, filter_summaries, sort_by_latest, summarize_device, visible_oems, DeviceSummary,
};
pub use format::{build_date, download_count_display, size_gb, version_label_display};
pub use models::{
    DeviceEntry, MaintainedDevice, Maintainer, MerchItem, OtaBuild, OtaResponse, TeamMember,
    TeamRoster, VersionEntry,
};
pub use policy::{default_branch, is_vanilla, latest_branch};
pub use stats::StatsResponse;
