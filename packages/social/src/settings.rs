use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Settings for the refresh job, read once at process start.
///
/// Sources, later ones winning: built-in defaults, an optional `instagram.toml`
/// in the working directory, then `IG_*` environment variables
/// (`IG_HANDLE`, `IG_OUT_PATH`, `IG_PROXY_BASE`, `IG_PROFILE_BASE`, `IG_USER_AGENT`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RefreshSettings {
    pub handle: String,
    pub out_path: PathBuf,
    /// Prefix for proxied requests. Empty fetches pages directly.
    pub proxy_base: String,
    pub profile_base: String,
    pub user_agent: String,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            handle: "bhsteachersassociation".into(),
            out_path: PathBuf::from("data/instagram.json"),
            proxy_base: "https://r.jina.ai/".into(),
            profile_base: "https://www.instagram.com/".into(),
            user_agent: "bta-member-hub-bot/1.0 (GitHub Actions)".into(),
        }
    }
}

impl RefreshSettings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources("instagram.toml", Environment::with_prefix("IG"))
    }

    pub(crate) fn from_sources(file: &str, env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("handle", defaults.handle)?
            .set_default("out_path", defaults.out_path.to_string_lossy().into_owned())?
            .set_default("proxy_base", defaults.proxy_base)?
            .set_default("profile_base", defaults.profile_base)?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(File::with_name(file).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        let mut settings: Self = config.try_deserialize()?;
        settings.handle = settings.handle.trim().trim_start_matches('@').to_string();
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("IG").source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = RefreshSettings::from_sources("missing-instagram.toml", env(&[])).unwrap();
        assert_eq!(settings, RefreshSettings::default());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = RefreshSettings::from_sources(
            "missing-instagram.toml",
            env(&[
                ("IG_HANDLE", "@localunion"),
                ("IG_OUT_PATH", "public/data/instagram.json"),
                ("IG_PROXY_BASE", ""),
            ]),
        )
        .unwrap();
        assert_eq!(settings.handle, "localunion");
        assert_eq!(settings.out_path, PathBuf::from("public/data/instagram.json"));
        assert_eq!(settings.proxy_base, "");
        assert_eq!(settings.profile_base, "https://www.instagram.com/");
    }

    #[test]
    fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instagram.toml");
        std::fs::write(&path, "handle = \"fromfile\"\n").unwrap();
        let settings =
            RefreshSettings::from_sources(path.to_str().unwrap(), env(&[("IG_USER_AGENT", "ua")]))
                .unwrap();
        assert_eq!(settings.handle, "fromfile");
        assert_eq!(settings.user_agent, "ua");
    }
}
