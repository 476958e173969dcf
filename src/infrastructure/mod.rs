//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration and user-supplied themes live on disk.

pub mod paths;

pub use paths::{config_file_path, expand_tilde, get_config_dir, process_env};

use std::path::PathBuf;

/// Finds a user theme file named after `theme_name` in the config directory.
///
/// Looks for `<config dir>/themes/<theme_name>.toml`. Returns `None` if the
/// config directory cannot be resolved or the file does not exist.
///
/// # Examples
///
/// ```
/// use bloodref::infrastructure::find_theme_file;
///
/// let env = |key: &str| (key == "HOME").then(|| "/nonexistent".to_string());
/// assert!(find_theme_file("solarized", env).is_none());
/// ```
#[must_use]
pub fn find_theme_file(theme_name: &str, env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if theme_name.is_empty() || theme_name.contains(['/', '\\']) {
        return None;
    }

    let path = get_config_dir(env)?
        .join("themes")
        .join(format!("{theme_name}.toml"));

    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_theme_in_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let themes = dir.path().join("bloodref").join("themes");
        std::fs::create_dir_all(&themes).unwrap();
        std::fs::write(themes.join("ward.toml"), "name = \"ward\"").unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let env = move |key: &str| (key == "XDG_CONFIG_HOME").then(|| root.clone());

        assert_eq!(find_theme_file("ward", &env), Some(themes.join("ward.toml")));
        assert_eq!(find_theme_file("missing", &env), None);
    }

    #[test]
    fn rejects_path_like_names() {
        let env = |_: &str| Some("/tmp".to_string());
        assert_eq!(find_theme_file("../etc/passwd", env), None);
    }
}
