//! Path resolution for configuration and user themes.
//!
//! Resolution takes an environment lookup function instead of reading
//! `std::env` directly, so callers and tests can supply their own environment.

use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "BLOODREF_CONFIG";

/// Application directory name under the config root.
const APP_DIR: &str = "bloodref";

/// Returns the bloodref config directory.
///
/// Uses `$XDG_CONFIG_HOME/bloodref` when set and non-empty, otherwise
/// `$HOME/.config/bloodref`. Returns `None` when neither variable is available.
///
/// # Examples
///
/// ```
/// use bloodref::infrastructure::get_config_dir;
/// use std::path::PathBuf;
///
/// let env = |key: &str| (key == "HOME").then(|| "/home/gp".to_string());
/// assert_eq!(get_config_dir(env), Some(PathBuf::from("/home/gp/.config/bloodref")));
/// ```
#[must_use]
pub fn get_config_dir(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(xdg) = env("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join(APP_DIR));
    }

    env("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join(APP_DIR))
}

/// Returns the config file path.
///
/// `$BLOODREF_CONFIG` wins (with `~` expanded); otherwise `config.toml` inside
/// [`get_config_dir`].
#[must_use]
pub fn config_file_path(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(explicit) = env(CONFIG_ENV).filter(|v| !v.is_empty()) {
        let home = env("HOME");
        return Some(PathBuf::from(expand_tilde(&explicit, home.as_deref())));
    }

    get_config_dir(env).map(|dir| dir.join("config.toml"))
}

/// Expands a leading `~` to the given home directory.
///
/// Paths without a leading tilde, or calls without a home directory, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use bloodref::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml", Some("/home/gp")), "/home/gp/themes/dark.toml");
/// assert_eq!(expand_tilde("~", Some("/home/gp")), "/home/gp");
/// assert_eq!(expand_tilde("/etc/bloodref.toml", Some("/home/gp")), "/etc/bloodref.toml");
/// assert_eq!(expand_tilde("~/x", None), "~/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else if path == "~" {
        home.to_string()
    } else {
        path.to_string()
    }
}

/// Reads a variable from the process environment.
#[must_use]
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn xdg_takes_precedence_over_home() {
        let env = env_of(&[("HOME", "/home/gp"), ("XDG_CONFIG_HOME", "/cfg")]);
        assert_eq!(get_config_dir(env), Some(PathBuf::from("/cfg/bloodref")));
    }

    #[test]
    fn empty_xdg_falls_back_to_home() {
        let env = env_of(&[("HOME", "/home/gp"), ("XDG_CONFIG_HOME", "")]);
        assert_eq!(
            get_config_dir(env),
            Some(PathBuf::from("/home/gp/.config/bloodref"))
        );
    }

    #[test]
    fn no_home_means_no_config_dir() {
        assert_eq!(get_config_dir(env_of(&[])), None);
        assert_eq!(config_file_path(env_of(&[])), None);
    }

    #[test]
    fn explicit_config_env_wins() {
        let env = env_of(&[("HOME", "/home/gp"), (CONFIG_ENV, "~/ref.toml")]);
        assert_eq!(config_file_path(env), Some(PathBuf::from("/home/gp/ref.toml")));
    }

    #[test]
    fn default_config_file_name() {
        let env = env_of(&[("HOME", "/home/gp")]);
        assert_eq!(
            config_file_path(env),
            Some(PathBuf::from("/home/gp/.config/bloodref/config.toml"))
        );
    }
}
