use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the JSON file holding the contact collection.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("contacts.json"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3001".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.server.bind.is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.store.path.as_os_str().is_empty() {
        anyhow::bail!("store.path must not be empty");
    }

    Ok(config)
}

/// Load the config file if it exists, otherwise fall back to defaults
/// (`contacts.json` in the working directory, bind `127.0.0.1:3001`).
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.store.path, PathBuf::from("contacts.json"));
        assert_eq!(cfg.server.bind, "127.0.0.1:3001");
    }

    #[test]
    fn test_parse_full_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("contactbook.toml");
        std::fs::write(
            &path,
            r#"[store]
path = "/var/lib/contactbook/contacts.json"

[server]
bind = "0.0.0.0:8080"
"#,
        )
        .unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(
            cfg.store.path,
            PathBuf::from("/var/lib/contactbook/contacts.json")
        );
        assert_eq!(cfg.server.bind, "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("contactbook.toml");
        std::fs::write(&path, "[server]\nbind = \"127.0.0.1:4000\"\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:4000");
        assert_eq!(cfg.store.path, PathBuf::from("contacts.json"));
    }

    #[test]
    fn test_empty_bind_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("contactbook.toml");
        std::fs::write(&path, "[server]\nbind = \"\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let cfg = load_or_default(Path::new("/definitely/not/here.toml")).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:3001");
    }
}
