use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::model::ClusterSpec;

/// User overrides applied on top of a built profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_template: Option<String>,
    #[serde(default)]
    pub ssh_public_key_path: Option<String>,
    #[serde(default)]
    pub ssh_user: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Settings {
    pub fn template<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .or(self.default_template.as_deref())
            .unwrap_or(crate::profile::DEFAULT_TEMPLATE)
    }

    pub fn apply(&self, spec: &mut ClusterSpec) {
        let control_plane = &mut spec.control_plane;

        if let Some(path) = non_empty(self.ssh_public_key_path.as_deref()) {
            control_plane.ssh.public_key_path = path.to_string();
        }
        if let Some(user) = non_empty(self.ssh_user.as_deref()) {
            control_plane.ssh.user = user.to_string();
        }
        if let Some(location) = non_empty(self.location.as_deref()) {
            control_plane.location = location.to_string();
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;
    use crate::token::{BootstrapToken, StaticTokenSource};

    fn spec() -> ClusterSpec {
        let tokens = StaticTokenSource::new(BootstrapToken::new("abcdef.0123456789abcdef"));
        profile::build_profile("demo", &tokens).expect("profile")
    }

    #[test]
    fn empty_settings_leave_profile_untouched() {
        let mut built = spec();
        Settings::default().apply(&mut built);
        assert_eq!(built, spec());
    }

    #[test]
    fn overrides_ssh_and_location() {
        let settings = Settings {
            ssh_public_key_path: Some("~/.ssh/ecs.pub".to_string()),
            ssh_user: Some(" ".to_string()),
            location: Some("de-fra1".to_string()),
            ..Settings::default()
        };

        let mut built = spec();
        settings.apply(&mut built);
        assert_eq!(built.control_plane.ssh.public_key_path, "~/.ssh/ecs.pub");
        assert_eq!(built.control_plane.ssh.user, "ubuntu");
        assert_eq!(built.control_plane.location, "de-fra1");
    }

    #[test]
    fn requested_template_wins_over_default() {
        let settings = Settings {
            default_template: Some("custom".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.template(Some("other")), "other");
        assert_eq!(settings.template(None), "custom");
        assert_eq!(Settings::default().template(None), profile::DEFAULT_TEMPLATE);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = load(&dir.path().join("settings.json")).expect("settings");
        assert!(settings.default_template.is_none());
    }

    #[test]
    fn loads_partial_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"ssh_user":"core"}"#).expect("write");
        let settings = load(&path).expect("settings");
        assert_eq!(settings.ssh_user.as_deref(), Some("core"));
        assert!(settings.location.is_none());
    }
}
