//! Tests to verify remote catalog fixtures parse and aggregate correctly

use evox_data::{
    find_device, join_branches, latest_branch, summarize_device, DeviceEntry, Maintainer,
    OtaResponse, StatsResponse, TeamRoster, VersionEntry,
};

fn devices() -> Vec<DeviceEntry> {
    serde_json::from_str(include_str!("fixtures/devices.json")).unwrap()
}

fn versions() -> Vec<VersionEntry> {
    serde_json::from_str(include_str!("fixtures/versions.json")).unwrap()
}

#[test]
fn test_device_catalog_fixture_parses() {
    let devices = devices();
    assert_eq!(devices.len(), 3);

    let cheetah = find_device(&devices, "cheetah").unwrap();
    assert_eq!(cheetah.branches, vec!["udc", "vic", "vic-vanilla"]);
    assert_eq!(cheetah.oem, None);

    let lemonadep = find_device(&devices, "lemonadep").unwrap();
    assert_eq!(lemonadep.oem.as_deref(), Some("OnePlus"));
}

#[test]
fn test_version_catalog_fixture_skips_vanilla_for_latest() {
    let versions = versions();
    assert_eq!(versions.len(), 3);
    // The first entry is vanilla; "latest" is the first non-vanilla one.
    assert_eq!(latest_branch(&versions), Some("vic"));
}

#[test]
fn test_ota_fixture_parses_and_ignores_unknown_fields() {
    let resp: OtaResponse = serde_json::from_str(include_str!("fixtures/ota_cheetah.json")).unwrap();
    assert_eq!(resp.response.len(), 1);

    let build = &resp.response[0];
    assert_eq!(build.filename, "EvolutionX-10.0-20250612-cheetah-OFFICIAL.zip");
    assert_eq!(build.maintainer, "anierinb");
    assert_eq!(build.size, 2234567890);
    assert!(build.currently_maintained);
    assert_eq!(build.paypal.as_deref(), Some("https://paypal.me/anierinb"));
}

#[test]
fn test_fixtures_aggregate_into_device_page_data() {
    let devices = devices();
    let versions = versions();
    let cheetah = find_device(&devices, "cheetah").unwrap();

    let ota: OtaResponse = serde_json::from_str(include_str!("fixtures/ota_cheetah.json")).unwrap();
    // udc fetch failed, vic succeeded, vic-vanilla has no build list yet.
    let results = vec![None, Some(ota.response.clone()), Some(vec![])];

    let joined = join_branches(&cheetah.branches, &versions, results.clone());
    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].branch, "vic");
    assert_eq!(joined[0].version, "10.0");
    assert_eq!(joined[1].branch, "vic-vanilla");
    assert!(joined[1].ota.is_empty());

    let summary = summarize_device(cheetah, latest_branch(&versions), &results);
    assert_eq!(summary.oem, "Google");
    assert_eq!(summary.device, "Pixel 7 Pro");
    assert!(summary.is_maintained);
    assert!(summary.supports_latest);
    assert_eq!(summary.latest_build, 1749686400);
}

#[test]
fn test_team_fixture_parses() {
    let roster: TeamRoster = serde_json::from_str(include_str!("fixtures/team.json")).unwrap();
    assert_eq!(roster.founders.len(), 2);
    assert_eq!(roster.team_members.len(), 1);
    assert_eq!(roster.founders[0].role.as_deref(), Some("Founder"));
    assert_eq!(roster.team_members[0].github, None);
}

#[test]
fn test_maintainers_fixture_splits_active_and_retired() {
    let maintainers: Vec<Maintainer> =
        serde_json::from_str(include_str!("fixtures/maintainers.json")).unwrap();
    assert_eq!(maintainers.len(), 2);
    assert!(maintainers[0].is_active());
    assert!(!maintainers[1].is_active());
    assert_eq!(maintainers[0].currently_maintains.len(), 2);
    assert_eq!(maintainers[1].used_to_maintain[0].codename, "lemonadep");
}

#[test]
fn test_stats_fixture_extracts_download_count() {
    let stats: StatsResponse = serde_json::from_str(include_str!("fixtures/stats.json")).unwrap();
    assert_eq!(stats.download_count(), 15073);
}

#[test]
fn test_all_fixtures_are_valid_json() {
    let fixtures = [
        include_str!("fixtures/devices.json"),
        include_str!("fixtures/versions.json"),
        include_str!("fixtures/ota_cheetah.json"),
        include_str!("fixtures/team.json"),
        include_str!("fixtures/maintainers.json"),
        include_str!("fixtures/stats.json"),
    ];

    for (idx, fixture) in fixtures.iter().enumerate() {
        let result: serde_json::Result<serde_json::Value> = serde_json::from_str(fixture);
        assert!(result.is_ok(), "Fixture {} failed to parse as JSON", idx);
    }
}
