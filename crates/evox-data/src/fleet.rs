//! Fleet-wide device summaries and filtering
//!
//! The downloads listing reduces every device's per-branch build lists to
//! one card, then filters that set reactively by search text, maintenance
//! state, and OEM.

use crate::endpoints;
use crate::models::{DeviceEntry, OtaBuild};

/// One card in the downloads listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSummary {
    pub codename: String,
    pub device: String,
    pub oem: String,
    pub supports_latest: bool,
    pub is_maintained: bool,
    /// Unix timestamp of the newest build across all branches, `0` when the
    /// device has no fetchable builds.
    pub latest_build: i64,
    pub image_url: String,
}

/// Reduces one device's fetched branch build lists to a summary card.
///
/// Failed fetches arrive as `None` and contribute nothing. OEM and
/// marketing name come from the first build that carries them, falling
/// back to the device catalog entry, then `"N/A"`.
pub fn summarize_device(
    entry: &DeviceEntry,
    latest_branch: Option<&str>,
    ota_results: &[Option<Vec<OtaBuild>>],
) -> DeviceSummary {
    let builds = ota_results.iter().flatten().flatten();

    let mut oem = None;
    let mut device = None;
    let mut is_maintained = false;
    let mut latest_build = 0_i64;
    for build in builds {
        if oem.is_none() {
            oem = build.oem.clone().filter(|s| !s.is_empty());
        }
        if device.is_none() {
            device = build.device.clone().filter(|s| !s.is_empty());
        }
        is_maintained |= build.currently_maintained;
        latest_build = latest_build.max(build.timestamp);
    }

    let supports_latest = latest_branch
        .map(|latest| entry.branches.iter().any(|b| b == latest))
        .unwrap_or(false);

    DeviceSummary {
        codename: entry.codename.clone(),
        device: device
            .or_else(|| entry.device.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        oem: oem
            .or_else(|| entry.oem.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        supports_latest,
        is_maintained,
        latest_build,
        image_url: endpoints::device_image_url(&entry.codename),
    }
}

/// Newest devices first. The sort is stable so equal timestamps keep
/// catalog order.
pub fn sort_by_latest(summaries: &mut [DeviceSummary]) {
    summaries.sort_by(|a, b| b.latest_build.cmp(&a.latest_build));
}

impl DeviceSummary {
    /// Case-insensitive match against the marketing name, the codename, and
    /// the combined "oem device" string.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.device.to_lowercase().contains(&query)
            || self.codename.to_lowercase().contains(&query)
            || format!("{} {}", self.oem, self.device)
                .to_lowercase()
                .contains(&query)
    }
}

/// Applies the listing filters. `maintained` of `None` means both states.
pub fn filter_summaries<'a>(
    summaries: &'a [DeviceSummary],
    search: &str,
    maintained: Option<bool>,
    oem: Option<&str>,
) -> Vec<&'a DeviceSummary> {
    summaries
        .iter()
        .filter(|s| maintained.map(|m| s.is_maintained == m).unwrap_or(true))
        .filter(|s| oem.map(|o| s.oem == o).unwrap_or(true))
        .filter(|s| search.is_empty() || s.matches_search(search))
        .collect()
}

/// Every OEM in the fleet, deduplicated and sorted.
pub fn all_oems(summaries: &[DeviceSummary]) -> Vec<String> {
    let mut oems: Vec<String> = summaries.iter().map(|s| s.oem.clone()).collect();
    oems.sort();
    oems.dedup();
    oems
}

/// OEMs that still have at least one device under the active maintenance
/// filter, so the OEM chips narrow with the toggle.
pub fn visible_oems(summaries: &[DeviceSummary], maintained: Option<bool>) -> Vec<String> {
    let mut oems: Vec<String> = summaries
        .iter()
        .filter(|s| maintained.map(|m| s.is_maintained == m).unwrap_or(true))
        .map(|s| s.oem.clone())
        .collect();
    oems.sort();
    oems.dedup();
    oems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(codename: &str, branches: &[&str]) -> DeviceEntry {
        DeviceEntry {
            codename: codename.to_string(),
            branches: branches.iter().map(|b| b.to_string()).collect(),
            oem: None,
            device: None,
        }
    }

    fn build(oem: Option<&str>, device: Option<&str>, maintained: bool, ts: i64) -> OtaBuild {
        OtaBuild {
            filename: "file.zip".into(),
            version: "9.0".into(),
            oem: oem.map(Into::into),
            device: device.map(Into::into),
            maintainer: String::new(),
            github: String::new(),
            download: String::new(),
            size: 0,
            timestamp: ts,
            buildtype: String::new(),
            currently_maintained: maintained,
            paypal: None,
            forum: None,
        }
    }

    fn summary(codename: &str, oem: &str, device: &str, maintained: bool) -> DeviceSummary {
        DeviceSummary {
            codename: codename.to_string(),
            device: device.to_string(),
            oem: oem.to_string(),
            supports_latest: false,
            is_maintained: maintained,
            latest_build: 0,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_summarize_mixed_maintenance_is_maintained() {
        let entry = entry("cheetah", &["udc", "vic"]);
        let results = vec![
            Some(vec![build(Some("Google"), Some("Pixel 7 Pro"), false, 100)]),
            Some(vec![build(None, None, true, 250)]),
        ];
        let s = summarize_device(&entry, Some("vic"), &results);
        assert!(s.is_maintained);
        assert_eq!(s.latest_build, 250);
        assert_eq!(s.oem, "Google");
        assert_eq!(s.device, "Pixel 7 Pro");
        assert!(s.supports_latest);
    }

    #[test]
    fn test_summarize_no_builds_falls_back() {
        let entry = entry("cheetah", &["udc"]);
        let s = summarize_device(&entry, Some("vic"), &[None]);
        assert!(!s.is_maintained);
        assert_eq!(s.latest_build, 0);
        assert_eq!(s.oem, "N/A");
        assert_eq!(s.device, "N/A");
        assert!(!s.supports_latest);
    }

    #[test]
    fn test_summarize_catalog_entry_fallback_before_na() {
        let entry = DeviceEntry {
            codename: "cheetah".into(),
            branches: vec!["udc".into()],
            oem: Some("Google".into()),
            device: Some("Pixel 7 Pro".into()),
        };
        let s = summarize_device(&entry, None, &[Some(vec![build(None, None, false, 10)])]);
        assert_eq!(s.oem, "Google");
        assert_eq!(s.device, "Pixel 7 Pro");
    }

    #[test]
    fn test_supports_latest_requires_listed_branch() {
        let a = entry("a", &["udc", "vic"]);
        let b = entry("b", &["udc"]);
        assert!(summarize_device(&a, Some("vic"), &[]).supports_latest);
        assert!(!summarize_device(&b, Some("vic"), &[]).supports_latest);
    }

    #[test]
    fn test_sort_by_latest_descending_and_stable() {
        let mut summaries = vec![
            DeviceSummary {
                latest_build: 100,
                ..summary("a", "Google", "A", true)
            },
            DeviceSummary {
                latest_build: 300,
                ..summary("b", "Google", "B", true)
            },
            DeviceSummary {
                latest_build: 100,
                ..summary("c", "Google", "C", true)
            },
        ];
        sort_by_latest(&mut summaries);
        let order: Vec<_> = summaries.iter().map(|s| s.codename.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_matches_search_all_fields() {
        let s = summary("cheetah", "Google", "Pixel 7 Pro", true);
        assert!(s.matches_search("pixel"));
        assert!(s.matches_search("CHEETAH"));
        assert!(s.matches_search("google pixel"));
        assert!(!s.matches_search("oneplus"));
    }

    #[test]
    fn test_filter_summaries_combines_filters() {
        let summaries = vec![
            summary("a", "Google", "Pixel 7", true),
            summary("b", "Google", "Pixel 6", false),
            summary("c", "OnePlus", "OnePlus 9", true),
        ];
        let maintained = filter_summaries(&summaries, "", Some(true), None);
        assert_eq!(maintained.len(), 2);

        let google_maintained = filter_summaries(&summaries, "", Some(true), Some("Google"));
        assert_eq!(google_maintained.len(), 1);
        assert_eq!(google_maintained[0].codename, "a");

        let searched = filter_summaries(&summaries, "oneplus", None, None);
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].codename, "c");
    }

    #[test]
    fn test_visible_oems_narrow_with_maintenance_filter() {
        let summaries = vec![
            summary("a", "Google", "Pixel 7", true),
            summary("b", "OnePlus", "OnePlus 9", false),
        ];
        assert_eq!(all_oems(&summaries), vec!["Google", "OnePlus"]);
        assert_eq!(visible_oems(&summaries, Some(true)), vec!["Google"]);
        assert_eq!(visible_oems(&summaries, Some(false)), vec!["OnePlus"]);
        assert_eq!(visible_oems(&summaries, None), vec!["Google", "OnePlus"]);
    }
}
