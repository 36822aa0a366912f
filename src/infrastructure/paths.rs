//! Path handling for the Zellij sandbox environment.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`. These
//! helpers resolve the default data directory and expand user-supplied paths
//! from the plugin configuration.

use std::path::PathBuf;

/// Returns the default data directory for Palancas storage.
///
/// The directory is `/host/.local/share/zellij/palancas`. Inside Zellij `/host`
/// points at the folder Zellij was started from, which is usually the home
/// directory, so this resolves to `~/.local/share/zellij/palancas`.
///
/// # Examples
///
/// ```
/// use palancas::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/palancas");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("palancas")
}

/// Expands a leading tilde to the `/host` mount point.
///
/// # Examples
///
/// ```
/// use palancas::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/palancas"), "/tmp/palancas");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
