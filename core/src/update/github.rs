//! Updater backed by GitHub releases.

use self_update::backends::github::Update;
use self_update::Status;

use super::{UpdateCheck, UpdateStatus};
use crate::{Error, Result, UpdateConfig};

/// Checks `<owner>/<repo>` releases on GitHub and swaps the running binary
/// for the newest asset.
#[derive(Debug, Clone, Default)]
pub struct GithubUpdater {
    config: UpdateConfig,
}

impl GithubUpdater {
    pub fn new(config: UpdateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }
}

impl UpdateCheck for GithubUpdater {
    fn check(&self, tool: &str, version: &str) -> Result<UpdateStatus> {
        let repo_name = self.config.repo_name.as_deref().unwrap_or(tool);
        let bin_name = self.config.bin_name.as_deref().unwrap_or(tool);
        let target = katana_target();
        tracing::info!(
            "checking {}/{} for a {} release newer than {}",
            self.config.repo_owner,
            repo_name,
            target,
            version
        );

        let status = Update::configure()
            .repo_owner(&self.config.repo_owner)
            .repo_name(repo_name)
            .bin_name(bin_name)
            .target(&target)
            .show_output(false)
            .show_download_progress(self.config.show_download_progress)
            .no_confirm(self.config.no_confirm)
            .current_version(normalize_version(version))
            .build()
            .map_err(|err| Error::UpdateSetup(err.to_string()))?
            .update()
            .map_err(|err| Error::Update(err.to_string()))?;

        let status = update_status(status, version);
        if let UpdateStatus::Updated { to, .. } = &status {
            tracing::info!("{} updated to {}", tool, to);
        }
        Ok(status)
    }
}

/// Release tags carry a `v` prefix, semver comparison wants it gone.
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Asset suffix for the running platform, e.g. `linux_amd64`.
pub fn katana_target() -> String {
    release_target(std::env::consts::OS, std::env::consts::ARCH)
}

/// Release assets are named `katana_<version>_<os>_<arch>.zip` using Go's
/// platform names rather than Rust's.
fn release_target(os: &str, arch: &str) -> String {
    let os = match os {
        "macos" => "macOS",
        other => other,
    };
    let arch = match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    };
    format!("{}_{}", os, arch)
}

fn update_status(status: Status, current: &str) -> UpdateStatus {
    match status {
        Status::UpToDate(_) => UpdateStatus::UpToDate { version: current.to_string() },
        Status::Updated(latest) => UpdateStatus::Updated {
            from: current.to_string(),
            to: format!("v{}", normalize_version(&latest)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use self_update::update::{Release, ReleaseAsset};

    fn katana_release() -> Release {
        let assets = ["linux_amd64", "linux_arm64", "macOS_amd64", "macOS_arm64", "windows_amd64", "windows_386"]
            .iter()
            .map(|platform| ReleaseAsset {
                download_url: format!("https://example.invalid/katana_1.2.3_{}.zip", platform),
                name: format!("katana_1.2.3_{}.zip", platform),
            })
            .collect();
        Release {
            name: "v1.2.3".to_string(),
            version: "1.2.3".to_string(),
            date: "2024-01-01T00:00:00Z".to_string(),
            body: None,
            assets,
        }
    }

    #[test]
    fn test_normalize_strips_single_prefix() {
        assert_eq!(normalize_version("v1.2.2"), "1.2.2");
        assert_eq!(normalize_version("1.2.2"), "1.2.2");
        assert_eq!(normalize_version("vv1.0.0"), "v1.0.0");
        assert_eq!(normalize_version(""), "");
    }

    #[test]
    fn test_release_target_uses_go_platform_names() {
        assert_eq!(release_target("linux", "x86_64"), "linux_amd64");
        assert_eq!(release_target("linux", "aarch64"), "linux_arm64");
        assert_eq!(release_target("macos", "aarch64"), "macOS_arm64");
        assert_eq!(release_target("windows", "x86"), "windows_386");
    }

    #[test]
    fn test_target_selects_matching_asset() {
        let release = katana_release();

        let asset = release.asset_for(&release_target("linux", "x86_64"), None).unwrap();
        assert_eq!(asset.name, "katana_1.2.3_linux_amd64.zip");

        let asset = release.asset_for(&release_target("macos", "aarch64"), None).unwrap();
        assert_eq!(asset.name, "katana_1.2.3_macOS_arm64.zip");
    }

    #[test]
    fn test_running_platform_has_an_asset() {
        let target = katana_target();
        if ["linux_amd64", "linux_arm64", "macOS_amd64", "macOS_arm64", "windows_amd64", "windows_386"]
            .contains(&target.as_str())
        {
            assert!(katana_release().asset_for(&target, None).is_some());
        }
    }

    #[test]
    fn test_up_to_date_keeps_current_tag() {
        let status = update_status(Status::UpToDate("1.2.2".to_string()), "v1.2.2");
        assert_eq!(status, UpdateStatus::UpToDate { version: "v1.2.2".to_string() });
    }

    #[test]
    fn test_updated_restores_tag_prefix() {
        let status = update_status(Status::Updated("1.3.0".to_string()), "v1.2.2");
        assert_eq!(
            status,
            UpdateStatus::Updated { from: "v1.2.2".to_string(), to: "v1.3.0".to_string() }
        );

        let status = update_status(Status::Updated("v1.3.0".to_string()), "v1.2.2");
        assert!(matches!(status, UpdateStatus::Updated { ref to, .. } if to == "v1.3.0"));
    }

    #[test]
    fn test_default_targets_projectdiscovery() {
        let updater = GithubUpdater::default();
        assert_eq!(updater.config().repo_owner, "projectdiscovery");
        assert!(updater.config().repo_name.is_none());
        assert!(updater.config().bin_name.is_none());
        assert!(updater.config().show_download_progress);
        assert!(updater.config().no_confirm);
    }
}
