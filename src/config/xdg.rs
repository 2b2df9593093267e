//! Platform-aware path resolution for fleet-dashboard.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/fleet-dashboard` or `~/.config/fleet-dashboard`
//! - Data: `$XDG_DATA_HOME/fleet-dashboard` or `~/.local/share/fleet-dashboard`
//!
//! On **macOS** both default to `~/Library/Application Support/fleet-dashboard`,
//! with the same XDG env var overrides.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "fleet-dashboard";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/fleet-dashboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/fleet-dashboard`
///    - macOS: `~/Library/Application Support/fleet-dashboard`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| home().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home().join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the data directory holding the saved layout.
///
/// `$XDG_DATA_HOME/fleet-dashboard` when set, else the platform data dir.
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_data_dir().join(APP_NAME)
}

fn platform_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().unwrap_or_else(|| home().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home().join(".local/share")
    }
}

/// Default location of the saved layout document.
pub fn layout_path() -> PathBuf {
    data_dir().join("layout.json")
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home().join(rest)
    } else if path == "~" {
        home()
    } else {
        PathBuf::from(path)
    }
}

/// Creates a directory and all parent directories with mode 0700.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::with_env;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/fleet-dashboard/config.toml")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_path_without_xdg_uses_platform_default() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let expected = platform_config_dir().join("fleet-dashboard/config.toml");
            assert_eq!(config_path(), expected);
        });
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn test_linux_defaults() {
        with_env(&[("XDG_CONFIG_HOME", None), ("XDG_DATA_HOME", None)], || {
            let home = dirs::home_dir().expect("could not determine home directory");
            assert_eq!(config_dir(), home.join(".config/fleet-dashboard"));
            assert_eq!(data_dir(), home.join(".local/share/fleet-dashboard"));
        });
    }

    #[test]
    #[serial]
    fn test_layout_path_with_xdg_data_home() {
        with_env(&[("XDG_DATA_HOME", Some("/srv/data"))], || {
            assert_eq!(
                layout_path(),
                PathBuf::from("/srv/data/fleet-dashboard/layout.json")
            );
        });
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~/foo"), home.join("foo"));
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn test_ensure_dir_creates_directory() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).expect("ensure_dir failed");
        assert!(nested.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_dir_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let dir = tmp.path().join("secure");
        ensure_dir(&dir).expect("ensure_dir failed");
        let mode = fs::metadata(&dir)
            .expect("failed to read metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
