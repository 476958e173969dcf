//! bloodref: a terminal reference for interpreting common blood tests.
//!
//! The crate provides:
//! - An embedded manifest of chapters, keyword sets and normal ranges
//! - A case-insensitive substring search index over chapters and range tests
//! - Tabbed navigation (Home, Chapters, Search, About) driven by events
//! - Themed terminal rendering with TOML colour schemes
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command-line front end (main.rs)                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Tab and chapter stack navigation                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search Layer  │   │ Content Layer │
//! │ (ui/)         │   │ (search/)     │   │ (content/)    │
//! │ - Rendering   │   │ - Index build │   │ - TOML load   │
//! │ - Theming     │   │ - Filtering   │   │ - Validation  │
//! │ - Components  │   │ - Policies    │   │ - Source API  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Config and theme paths (infrastructure/)         │
//! │  - Error types (domain/error)                       │
//! │  - Chapter and range models (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber writing to stderr             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`content`]: Manifest loading and the [`ContentSource`] trait
//! - [`domain`]: Core domain types (chapters, ranges, errors)
//! - [`infrastructure`]: Config directory and theme file resolution
//! - [`search`]: The keyword search index
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Read from `$BLOODREF_CONFIG`, else `$XDG_CONFIG_HOME/bloodref/config.toml`
//! or `~/.config/bloodref/config.toml`:
//!
//! ```toml
//! trace_level = "debug"
//! theme = "clinical-dark"
//! # theme_file = "~/.config/bloodref/themes/ward.toml"
//! color = true
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bloodref::{handle_event, initialize, Config, Event, Tab};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! for event in [Event::SelectTab(Tab::Search), Event::Char('m'), Event::Char('c'), Event::Char('v')] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.visible_count(), 2); // FBC chapter and the MCV range
//! # Ok::<(), bloodref::BloodRefError>(())
//! ```
//!
//! Searching without the navigation layer:
//!
//! ```rust
//! use bloodref::{KeywordSearchIndex, Manifest};
//!
//! let index = KeywordSearchIndex::build(Manifest::embedded()?);
//! let results = index.search("anaemia");
//! assert_eq!(results.chapters[0].title, "Full Blood Count (FBC)");
//! # Ok::<(), bloodref::BloodRefError>(())
//! ```

pub mod app;
pub mod content;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Screen, Tab};
pub use content::{ContentSource, ContentStats, Manifest};
pub use domain::{BloodRefError, ChapterRecord, ClinicalPearl, RangeEntry, RangeTable, Result};
pub use search::{EmptyQueryPolicy, KeywordSearchIndex, SearchHit, SearchResults};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive (`trace`, `debug`, `info`, `warn`, `error`, or
    /// a full `EnvFilter` string). `RUST_LOG` overrides it.
    pub trace_level: Option<String>,

    /// Theme name: a built-in (`clinical-light`, `clinical-dark`) or a file in
    /// `<config dir>/themes/`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Emit ANSI colour sequences. Default: `true`
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            theme_name: None,
            theme_file: None,
            color: true,
        }
    }
}

/// On-disk form of [`Config`]; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    trace_level: Option<String>,
    theme: Option<String>,
    theme_file: Option<String>,
    color: Option<bool>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Self {
            trace_level: file.trace_level,
            theme_name: file.theme,
            theme_file: file.theme_file,
            color: file.color.unwrap_or(true),
        }
    }
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`, `theme`, `theme_file`: copied as-is
    /// - `color`: `false`/`no`/`off`/`0` disable colour, anything else keeps it on
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bloodref::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "clinical-dark".to_string());
    /// map.insert("color".to_string(), "off".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("clinical-dark"));
    /// assert!(!config.color);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let color = config.get("color").map_or(true, |v| {
            !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "false" | "no" | "off" | "0"
            )
        });

        Self {
            trace_level: config.get("trace_level").cloned(),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            color,
        }
    }

    /// Parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`BloodRefError::Io`] if the file cannot be read and
    /// [`BloodRefError::Config`] if it is not valid TOML or has unknown keys.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| BloodRefError::Config(format!("{}: {e}", path.display())))?;
        Ok(file.into())
    }

    /// Loads configuration from the process environment's config location.
    ///
    /// # Errors
    ///
    /// See [`Config::load_with`].
    pub fn load() -> Result<Self> {
        Self::load_with(infrastructure::process_env)
    }

    /// Loads configuration, resolving the config path through `env`.
    ///
    /// A missing file yields [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(path) = infrastructure::config_file_path(env) else {
            tracing::debug!("no config directory, using defaults");
            return Ok(Self::default());
        };

        if !path.is_file() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading config file");
        Self::from_file(&path)
    }
}

/// Resolves the theme for `config`, falling back to the default on any failure.
///
/// Order: `theme_file`, then a built-in named `theme_name`, then
/// `<config dir>/themes/<theme_name>.toml`, then [`Theme::default`].
#[must_use]
pub fn resolve_theme(config: &Config, env: impl Fn(&str) -> Option<String>) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file, env("HOME").as_deref());
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    let Some(theme_name) = &config.theme_name else {
        return Theme::default();
    };

    if let Some(theme) = Theme::from_name(theme_name) {
        return theme;
    }

    infrastructure::find_theme_file(theme_name, env)
        .and_then(|path| {
            Theme::from_file(&path)
                .map_err(|e| {
                    tracing::debug!(path = %path.display(), error = %e, "failed to load user theme");
                })
                .ok()
        })
        .unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
}

/// Builds the application state from configuration.
///
/// Loads the embedded manifest, builds the search index and resolves the theme.
///
/// # Errors
///
/// Returns [`BloodRefError::Manifest`] if the embedded manifest is invalid.
///
/// # Example
///
/// ```rust
/// use bloodref::{initialize, Config, Screen};
///
/// let state = initialize(&Config::default())?;
/// assert_eq!(state.screen(), Screen::Home);
/// # Ok::<(), bloodref::BloodRefError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing bloodref");

    let manifest = Manifest::embedded()?;
    let theme = resolve_theme(config, infrastructure::process_env);

    Ok(AppState::new(manifest, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn color_defaults_on() {
        assert!(Config::default().color);
        assert!(Config::from_map(&BTreeMap::new()).color);
    }

    #[test]
    fn from_file_reads_every_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "trace_level = \"debug\"\ntheme = \"clinical-dark\"\ntheme_file = \"/tmp/x.toml\"\ncolor = false"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.theme_name.as_deref(), Some("clinical-dark"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/x.toml"));
        assert!(!config.color);
    }

    #[test]
    fn unknown_key_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scan_depth = 4").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BloodRefError::Config(_)));
    }

    #[test]
    fn missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().to_string_lossy().to_string();
        let env = move |key: &str| (key == "HOME").then(|| home.clone());

        assert_eq!(Config::load_with(env).unwrap(), Config::default());
    }

    #[test]
    fn explicit_config_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "theme = \"clinical-dark\"\n").unwrap();
        let path = path.to_string_lossy().to_string();
        let env = move |key: &str| (key == infrastructure::paths::CONFIG_ENV).then(|| path.clone());

        let config = Config::load_with(env).unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("clinical-dark"));
    }

    #[test]
    fn theme_resolution_falls_back_to_default() {
        let no_env = |_: &str| -> Option<String> { None };
        let config = Config {
            theme_name: Some("does-not-exist".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config, no_env), Theme::default());

        let config = Config {
            theme_file: Some("/no/such/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config, no_env), Theme::default());
    }

    #[test]
    fn user_theme_in_config_dir_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let themes = dir.path().join("bloodref").join("themes");
        fs::create_dir_all(&themes).unwrap();
        let text = include_str!("../themes/clinical-dark.toml").replace("clinical-dark", "ward");
        fs::write(themes.join("ward.toml"), text).unwrap();

        let xdg = dir.path().to_string_lossy().to_string();
        let env = move |key: &str| (key == "XDG_CONFIG_HOME").then(|| xdg.clone());
        let config = Config {
            theme_name: Some("ward".to_string()),
            ..Config::default()
        };

        assert_eq!(resolve_theme(&config, env).name, "ward");
    }
}
