//! Per-device aggregation of the remote catalogs
//!
//! A device page needs the device's catalog entry joined with, per branch,
//! the human version label, the OTA build list, and per-build download
//! counts. The join is pure; the caller does the fetching and hands results
//! in branch order.

use std::collections::BTreeMap;

use crate::models::{DeviceEntry, OtaBuild, VersionEntry};

/// One branch of a device after joining the version label and build list.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchOta {
    pub branch: String,
    pub version: String,
    pub ota: Vec<OtaBuild>,
}

/// A branch with per-build download counts attached, keyed by filename.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchBuilds {
    pub branch: String,
    pub version: String,
    pub ota: Vec<OtaBuild>,
    pub downloads: BTreeMap<String, u64>,
}

/// Everything the device page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceData {
    pub device_info: DeviceEntry,
    pub branches_data: Vec<BranchBuilds>,
}

/// Looks up a device by codename in the global catalog.
pub fn find_device<'a>(devices: &'a [DeviceEntry], codename: &str) -> Option<&'a DeviceEntry> {
    devices.iter().find(|d| d.codename == codename)
}

/// Human version label for a branch, `"N/A"` when the branch has no entry
/// in the version catalog.
pub fn version_label(versions: &[VersionEntry], branch: &str) -> String {
    versions
        .iter()
        .find(|v| v.branch == branch)
        .map(|v| v.version.clone())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Joins a device's branch list with version labels and fetched build
/// lists. `ota_results` is positionally aligned with `branches`; a `None`
/// entry (fetch failed or 404) drops that branch from the output. Branch
/// order is preserved.
pub fn join_branches(
    branches: &[String],
    versions: &[VersionEntry],
    ota_results: Vec<Option<Vec<OtaBuild>>>,
) -> Vec<BranchOta> {
    branches
        .iter()
        .zip(ota_results)
        .filter_map(|(branch, ota)| {
            ota.map(|ota| BranchOta {
                branch: branch.clone(),
                version: version_label(versions, branch),
                ota,
            })
        })
        .collect()
}

impl BranchOta {
    /// Attaches download counts, positionally aligned with `self.ota`.
    pub fn with_downloads(self, counts: Vec<u64>) -> BranchBuilds {
        let downloads = self
            .ota
            .iter()
            .zip(counts)
            .map(|(build, count)| (build.filename.clone(), count))
            .collect();
        BranchBuilds {
            branch: self.branch,
            version: self.version,
            ota: self.ota,
            downloads,
        }
    }
}

impl BranchBuilds {
    /// Download count for one build, `0` when the stats fetch failed.
    pub fn download_count(&self, filename: &str) -> u64 {
        self.downloads.get(filename).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(filename: &str) -> OtaBuild {
        OtaBuild {
            filename: filename.to_string(),
            version: "9.0".to_string(),
            oem: None,
            device: None,
            maintainer: String::new(),
            github: String::new(),
            download: format!("https://example.org/{filename}"),
            size: 0,
            timestamp: 0,
            buildtype: String::new(),
            currently_maintained: false,
            paypal: None,
            forum: None,
        }
    }

    fn versions() -> Vec<VersionEntry> {
        vec![
            VersionEntry {
                branch: "udc".into(),
                version: "8.3".into(),
            },
            VersionEntry {
                branch: "vic".into(),
                version: "9.0".into(),
            },
        ]
    }

    #[test]
    fn test_find_device_by_codename() {
        let devices = vec![DeviceEntry {
            codename: "cheetah".into(),
            branches: vec!["udc".into()],
            oem: Some("Google".into()),
            device: Some("Pixel 7 Pro".into()),
        }];
        assert!(find_device(&devices, "cheetah").is_some());
        assert!(find_device(&devices, "panther").is_none());
    }

    #[test]
    fn test_version_label_falls_back_to_na() {
        let versions = versions();
        assert_eq!(version_label(&versions, "vic"), "9.0");
        assert_eq!(version_label(&versions, "unknown"), "N/A");
    }

    #[test]
    fn test_join_branches_drops_failed_fetches() {
        let branches = vec!["udc".to_string(), "vic".to_string()];
        let joined = join_branches(
            &branches,
            &versions(),
            vec![None, Some(vec![build("a.zip")])],
        );
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].branch, "vic");
        assert_eq!(joined[0].version, "9.0");
    }

    #[test]
    fn test_join_branches_preserves_branch_order() {
        let branches = vec!["udc".to_string(), "vic".to_string()];
        let joined = join_branches(
            &branches,
            &versions(),
            vec![Some(vec![build("a.zip")]), Some(vec![build("b.zip")])],
        );
        let order: Vec<_> = joined.iter().map(|b| b.branch.as_str()).collect();
        assert_eq!(order, vec!["udc", "vic"]);
    }

    #[test]
    fn test_join_branches_all_failed_yields_empty() {
        let branches = vec!["udc".to_string(), "vic".to_string()];
        let joined = join_branches(&branches, &versions(), vec![None, None]);
        assert!(joined.is_empty());
    }

    #[test]
    fn test_with_downloads_keys_by_filename() {
        let branch = BranchOta {
            branch: "vic".into(),
            version: "9.0".into(),
            ota: vec![build("a.zip"), build("b.zip")],
        };
        let with = branch.with_downloads(vec![12, 34]);
        assert_eq!(with.download_count("a.zip"), 12);
        assert_eq!(with.download_count("b.zip"), 34);
        assert_eq!(with.download_count("missing.zip"), 0);
    }
}
