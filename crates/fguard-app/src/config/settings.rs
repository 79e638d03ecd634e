//! Settings loader for focusguard/config.toml

use std::path::{Path, PathBuf};

use fguard_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "focusguard";

/// Default config file location, e.g. `~/.config/focusguard/config.toml`.
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `path`, or from [`config_path`] when `None`.
///
/// A missing default-location file yields `Settings::default()`; an
/// explicitly requested file that does not exist is an error, as is a file
/// that fails to parse.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (config_path(), false),
    };

    if !path.exists() {
        if explicit {
            return Err(Error::ConfigNotFound { path });
        }
        debug!("no config file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let settings = toml::from_str(&contents)
        .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_loads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nbase_url = \"http://box:5000/api\"").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.server.base_url, "http://box:5000/api");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbroken").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
