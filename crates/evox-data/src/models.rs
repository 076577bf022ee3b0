//! Wire models for the remote content catalogs

use serde::{Deserialize, Serialize};

/// Entry in the global device catalog (`devices.json`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeviceEntry {
    pub codename: String,
    pub branches: Vec<String>,
    #[serde(default)]
    pub oem: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

/// Maps a release branch to its human version label (`versions.json`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VersionEntry {
    pub branch: String,
    pub version: String,
}

/// A single downloadable build for a device/branch combination.
///
/// One entry per build variant in `{branch}/builds/{codename}.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OtaBuild {
    pub filename: String,
    pub version: String,
    #[serde(default)]
    pub oem: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub maintainer: String,
    #[serde(default)]
    pub github: String,
    pub download: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub buildtype: String,
    #[serde(default)]
    pub currently_maintained: bool,
    #[serde(default)]
    pub paypal: Option<String>,
    #[serde(default)]
    pub forum: Option<String>,
}

/// Wire wrapper around the OTA build list.
#[derive(Debug, Clone, Deserialize)]
pub struct OtaResponse {
    pub response: Vec<OtaBuild>,
}

/// Team roster (`team/team.json`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    pub founders: Vec<TeamMember>,
    pub team_members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub imgsrc: String,
    #[serde(default)]
    pub github: Option<String>,
}

/// Device reference on a maintainer card.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MaintainedDevice {
    pub codename: String,
    pub device: String,
}

/// Entry in the maintainer roster (`team/maintainers.json`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Maintainer {
    pub name: String,
    pub github: String,
    #[serde(default)]
    pub currently_maintains: Vec<MaintainedDevice>,
    #[serde(default)]
    pub used_to_maintain: Vec<MaintainedDevice>,
}

impl Maintainer {
    /// Active maintainers currently maintain at least one device.
    pub fn is_active(&self) -> bool {
        !self.currently_maintains.is_empty()
    }
}

/// Entry in the merchandise catalog (`merch/merch.json`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MerchItem {
    pub name: String,
    pub image: String,
    pub link: String,
    #[serde(default)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_entry_parses_minimal_shape() {
        let json = r#"{"codename": "cheetah", "branches": ["udc", "vic"]}"#;
        let entry: DeviceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.codename, "cheetah");
        assert_eq!(entry.branches, vec!["udc", "vic"]);
        assert_eq!(entry.oem, None);
        assert_eq!(entry.device, None);
    }

    #[test]
    fn test_ota_build_optional_fields_default() {
        let json = r#"{
            "filename": "EvolutionX-9.0-cheetah.zip",
            "version": "9.0",
            "download": "https://example.org/EvolutionX-9.0-cheetah.zip"
        }"#;
        let build: OtaBuild = serde_json::from_str(json).unwrap();
        assert_eq!(build.size, 0);
        assert_eq!(build.timestamp, 0);
        assert!(!build.currently_maintained);
        assert_eq!(build.paypal, None);
        assert_eq!(build.forum, None);
    }

    #[test]
    fn test_ota_response_unwraps_build_list() {
        let json = r#"{"response": [{
            "filename": "EvolutionX-9.0-cheetah.zip",
            "version": "9.0",
            "oem": "Google",
            "device": "Pixel 7 Pro",
            "maintainer": "anierinb",
            "github": "AnierinBliss",
            "download": "https://example.org/file.zip",
            "size": 2234567890,
            "timestamp": 1710806400,
            "buildtype": "Official",
            "currently_maintained": true
        }]}"#;
        let resp: OtaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response.len(), 1);
        assert_eq!(resp.response[0].oem.as_deref(), Some("Google"));
        assert!(resp.response[0].currently_maintained);
    }

    #[test]
    fn test_team_roster_camel_case_keys() {
        let json = r#"{
            "founders": [{"name": "Joey", "role": "Founder", "imgsrc": "joey.png"}],
            "teamMembers": [{"name": "Dev", "imgsrc": "dev.png"}]
        }"#;
        let roster: TeamRoster = serde_json::from_str(json).unwrap();
        assert_eq!(roster.founders.len(), 1);
        assert_eq!(roster.team_members.len(), 1);
        assert_eq!(roster.team_members[0].role, None);
    }

    #[test]
    fn test_maintainer_activity() {
        let active = Maintainer {
            name: "A".into(),
            github: "a".into(),
            currently_maintains: vec![MaintainedDevice {
                codename: "cheetah".into(),
                device: "Pixel 7 Pro".into(),
            }],
            used_to_maintain: vec![],
        };
        let retired = Maintainer {
            name: "B".into(),
            github: "b".into(),
            currently_maintains: vec![],
            used_to_maintain: vec![],
        };
        assert!(active.is_active());
        assert!(!retired.is_active());
    }
}
