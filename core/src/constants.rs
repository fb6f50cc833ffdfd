//! Build-time identity of the tool.

/// Name the tool is published under, also used as the release lookup key
pub const TOOL_NAME: &str = "katana";

/// Current release tag
pub const VERSION: &str = "v1.2.2";

/// Label printed under the banner art
pub const LABEL: &str = "SEO DUO";

/// GitHub account that publishes katana releases
pub const RELEASE_REPO_OWNER: &str = "projectdiscovery";

/// Environment variable that turns the update check off
pub const DISABLE_UPDATE_CHECK_ENV: &str = "KATANA_DISABLE_UPDATE_CHECK";
