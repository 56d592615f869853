//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which is
//! usually the user's home directory.

use std::path::PathBuf;

/// Returns the listkeeper data directory, used for log files.
///
/// # Examples
///
/// ```
/// use listkeeper::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str().unwrap(),
///     "/host/.local/share/zellij/listkeeper"
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("listkeeper")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use listkeeper::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/paper.toml"), "/host/themes/paper.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
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
