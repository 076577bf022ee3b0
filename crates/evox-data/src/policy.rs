//! Branch selection rules
//!
//! Vanilla branches ship without GApps and are never the default offering.

use crate::aggregate::BranchBuilds;
use crate::models::VersionEntry;

/// A branch is vanilla when its name contains "vanilla", case-insensitively.
pub fn is_vanilla(branch: &str) -> bool {
    branch.to_lowercase().contains("vanilla")
}

/// Picks the branch a device page should open on: the non-vanilla branch
/// with the greatest version label (case-insensitive comparison, earlier
/// branch wins ties), falling back to the first branch when every branch
/// is vanilla.
pub fn default_branch(branches: &[BranchBuilds]) -> Option<String> {
    let mut best: Option<&BranchBuilds> = None;
    for candidate in branches.iter().filter(|b| !is_vanilla(&b.branch)) {
        match best {
            Some(current)
                if candidate.version.to_lowercase() <= current.version.to_lowercase() => {}
            _ => best = Some(candidate),
        }
    }
    best.or_else(|| branches.first())
        .map(|b| b.branch.clone())
}

/// The branch carrying the latest release: the first non-vanilla entry of
/// the version catalog. Catalog order is the upstream contract.
pub fn latest_branch(versions: &[VersionEntry]) -> Option<&str> {
    versions
        .iter()
        .find(|v| !is_vanilla(&v.branch))
        .map(|v| v.branch.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn branch(name: &str, version: &str) -> BranchBuilds {
        BranchBuilds {
            branch: name.to_string(),
            version: version.to_string(),
            ota: vec![],
            downloads: BTreeMap::new(),
        }
    }

    #[test]
    fn test_is_vanilla_case_insensitive() {
        assert!(is_vanilla("vic-vanilla"));
        assert!(is_vanilla("Vanilla"));
        assert!(is_vanilla("udc_VANILLA"));
        assert!(!is_vanilla("vic"));
    }

    #[test]
    fn test_default_branch_skips_vanilla_with_greater_version() {
        let branches = vec![
            branch("A", "14"),
            branch("B-vanilla", "15"),
            branch("C", "13"),
        ];
        assert_eq!(default_branch(&branches).as_deref(), Some("A"));
    }

    #[test]
    fn test_default_branch_prefers_greatest_version() {
        let branches = vec![branch("udc", "8.3"), branch("vic", "9.0")];
        assert_eq!(default_branch(&branches).as_deref(), Some("vic"));
    }

    #[test]
    fn test_default_branch_tie_keeps_earlier_branch() {
        let branches = vec![branch("first", "9.0"), branch("second", "9.0")];
        assert_eq!(default_branch(&branches).as_deref(), Some("first"));
    }

    #[test]
    fn test_default_branch_all_vanilla_falls_back_to_first() {
        let branches = vec![branch("udc-vanilla", "8.3"), branch("vic-vanilla", "9.0")];
        assert_eq!(default_branch(&branches).as_deref(), Some("udc-vanilla"));
    }

    #[test]
    fn test_default_branch_empty() {
        assert_eq!(default_branch(&[]), None);
    }

    #[test]
    fn test_latest_branch_first_non_vanilla_entry() {
        let versions = vec![
            VersionEntry {
                branch: "vic-vanilla".into(),
                version: "9.0".into(),
            },
            VersionEntry {
                branch: "vic".into(),
                version: "9.0".into(),
            },
            VersionEntry {
                branch: "udc".into(),
                version: "8.3".into(),
            },
        ];
        assert_eq!(latest_branch(&versions), Some("vic"));
        assert_eq!(latest_branch(&[]), None);
    }
}
