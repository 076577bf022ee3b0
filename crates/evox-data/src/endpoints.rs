//! Remote endpoint constants and URL builders
//!
//! All site content lives in two GitHub repositories served through
//! `raw.githubusercontent.com`, plus the SourceForge statistics API for
//! per-build download counts. Everything here is a pure string builder so
//! the URLs are unit-testable without any network.

use chrono::Utc;

/// Root of the `www_gitres` content repository.
pub const GITRES: &str = "https://raw.githubusercontent.com/Evolution-X/www_gitres/refs/heads/main/";

/// Root of the OTA build-metadata repository.
pub const OTA: &str = "https://raw.githubusercontent.com/Evolution-X/OTA/";

/// Fixed start of the download-statistics window.
pub const STATS_ORIGIN_DATE: &str = "2019-03-19";

/// Global device catalog.
pub fn devices_url() -> String {
    format!("{GITRES}devices/devices.json")
}

/// Branch-to-version mapping.
pub fn versions_url() -> String {
    format!("{GITRES}version/versions.json")
}

/// Current release label, `{"<version>": "<branch>"}` with a single key.
pub fn latest_version_url() -> String {
    format!("{GITRES}version/latestversion.json")
}

/// Badge image advertising the current release.
pub fn latest_version_badge_url() -> String {
    format!("{GITRES}version/latestversion.svg")
}

/// Build list for one device on one release branch.
pub fn ota_builds_url(branch: &str, codename: &str) -> String {
    format!("{OTA}{branch}/builds/{codename}.json")
}

/// Plain-text changelog for a device/branch pair.
pub fn changelog_url(branch: &str, codename: &str) -> String {
    format!("{OTA}refs/heads/{branch}/changelogs/{codename}.txt")
}

/// Markdown flashing instructions for a device/branch pair.
pub fn instructions_url(branch: &str, codename: &str) -> String {
    format!("{GITRES}devices/instructions/{branch}/{codename}.md")
}

/// Device marketing render.
pub fn device_image_url(codename: &str) -> String {
    format!("{GITRES}devices/images/{codename}.webp")
}

/// Screenshot name list for the home page carousel.
pub fn screenshots_url() -> String {
    format!("{GITRES}screenshots/screenshots.json")
}

/// Screenshot images are served through the blob endpoint with `raw=true`.
pub fn screenshot_image_url(name: &str) -> String {
    format!("https://github.com/Evolution-X/www_gitres/blob/main/screenshots/{name}.png?raw=true")
}

/// Core team roster.
pub fn team_url() -> String {
    format!("{GITRES}team/team.json")
}

/// Device maintainer roster.
pub fn maintainers_url() -> String {
    format!("{GITRES}team/maintainers.json")
}

/// Team member portrait.
pub fn team_image_url(imgsrc: &str) -> String {
    format!("{GITRES}team/images/{imgsrc}")
}

/// Merchandise catalog.
pub fn merch_url() -> String {
    format!("{GITRES}merch/merch.json")
}

/// Merch item photo, served through the blob endpoint with `raw=true`.
pub fn merch_image_url(image: &str) -> String {
    format!("https://github.com/Evolution-X/www_gitres/blob/main/merch/items/{image}.png?raw=true")
}

/// GitHub avatar for a maintainer handle.
pub fn avatar_url(github: &str) -> String {
    format!("https://avatars.githubusercontent.com/{github}")
}

/// GitHub profile link for a maintainer handle.
pub fn github_profile_url(github: &str) -> String {
    format!("https://github.com/{github}")
}

/// SourceForge monthly download statistics for one build, from the fixed
/// origin date through today.
pub fn download_stats_url(codename: &str, version: &str, filename: &str) -> String {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    stats_url_with_range(codename, version, filename, &today)
}

pub fn stats_url_with_range(
    codename: &str,
    version: &str,
    filename: &str,
    end_date: &str,
) -> String {
    format!(
        "https://sourceforge.net/projects/evolution-x/files/{codename}/{version}/{filename}/stats/json?start_date={STATS_ORIGIN_DATE}&end_date={end_date}&period=monthly"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_urls() {
        assert_eq!(
            devices_url(),
            "https://raw.githubusercontent.com/Evolution-X/www_gitres/refs/heads/main/devices/devices.json"
        );
        assert_eq!(
            versions_url(),
            "https://raw.githubusercontent.com/Evolution-X/www_gitres/refs/heads/main/version/versions.json"
        );
    }

    #[test]
    fn test_ota_urls_interpolate_branch_and_codename() {
        assert_eq!(
            ota_builds_url("udc", "cheetah"),
            "https://raw.githubusercontent.com/Evolution-X/OTA/udc/builds/cheetah.json"
        );
        assert_eq!(
            changelog_url("udc", "cheetah"),
            "https://raw.githubusercontent.com/Evolution-X/OTA/refs/heads/udc/changelogs/cheetah.txt"
        );
        assert_eq!(
            instructions_url("udc", "cheetah"),
            "https://raw.githubusercontent.com/Evolution-X/www_gitres/refs/heads/main/devices/instructions/udc/cheetah.md"
        );
    }

    #[test]
    fn test_stats_url_range() {
        let url = stats_url_with_range("cheetah", "9.0", "EvolutionX-9.0.zip", "2026-08-06");
        assert_eq!(
            url,
            "https://sourceforge.net/projects/evolution-x/files/cheetah/9.0/EvolutionX-9.0.zip/stats/json?start_date=2019-03-19&end_date=2026-08-06&period=monthly"
        );
    }

    #[test]
    fn test_download_stats_url_uses_origin_date() {
        let url = download_stats_url("cheetah", "9.0", "file.zip");
        assert!(url.contains("start_date=2019-03-19"));
        assert!(url.contains("period=monthly"));
    }

    #[test]
    fn test_image_and_profile_urls() {
        assert_eq!(
            device_image_url("cheetah"),
            "https://raw.githubusercontent.com/Evolution-X/www_gitres/refs/heads/main/devices/images/cheetah.webp"
        );
        assert_eq!(
            screenshot_image_url("home"),
            "https://github.com/Evolution-X/www_gitres/blob/main/screenshots/home.png?raw=true"
        );
        assert_eq!(
            avatar_url("AnierinBliss"),
            "https://avatars.githubusercontent.com/AnierinBliss"
        );
        assert_eq!(
            github_profile_url("AnierinBliss"),
            "https://github.com/AnierinBliss"
        );
    }
}
