//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Programmatic overrides can be applied during load via [`Overrides`].
//!
//! The loaded [`Config`] is an immutable value constructed once at startup
//! and passed explicitly to consumers; nothing here is process-global.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `url`
//! - `base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Programmatic settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Override site title.
    pub title: Option<String>,
    /// Override site URL.
    pub url: Option<String>,
    /// Override base URL path.
    pub base_url: Option<String>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebar definition file.
    pub sidebar_file: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title.
    pub title: String,
    /// Site URL (scheme and host, no trailing path).
    pub url: String,
    /// Base URL path the site is served under. Must start and end with `/`.
    pub base_url: String,
    /// GitHub organization or user that owns the deployment.
    pub organization_name: Option<String>,
    /// Project name for the deployment.
    pub project_name: Option<String>,
    /// Behavior when a sidebar references an unknown document.
    pub on_broken_links: BrokenLinks,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Navbar configuration.
    pub navbar: NavbarConfig,
    /// Footer configuration.
    pub footer: FooterConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Behavior when a sidebar entry references an unknown document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinks {
    /// Abort the build (fail fast, no partial output).
    #[default]
    Throw,
    /// Log a warning and drop the entry.
    Warn,
    /// Silently drop the entry.
    Ignore,
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebar_file: Option<String>,
    route_base_path: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// Sidebar definition file (JSON).
    pub sidebar_file: PathBuf,
    /// Route prefix under `base_url` docs are served at ("/" serves docs at
    /// the site root, as the original deployment does).
    pub route_base_path: String,
}

/// Navbar configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Navbar title. Falls back to the site title when unset.
    pub title: Option<String>,
    /// Navbar items in display order.
    pub items: Vec<NavbarItem>,
}

/// One navbar item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavbarItem {
    /// Display label.
    pub label: String,
    /// Link target URL.
    pub href: String,
    /// Placement within the navbar.
    #[serde(default)]
    pub position: NavbarPosition,
}

/// Navbar item placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    /// Left side of the navbar.
    #[default]
    Left,
    /// Right side of the navbar.
    Right,
}

/// Footer configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer color style.
    pub style: FooterStyle,
}

/// Footer color style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    /// Light footer.
    #[default]
    Light,
    /// Dark footer.
    Dark,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// Overrides are applied after loading and path resolution, allowing
    /// callers to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the loaded values fail validation.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        Ok(config)
    }

    /// Effective navbar title: the navbar's own title, or the site title.
    #[must_use]
    pub fn navbar_title(&self) -> &str {
        self.navbar.title.as_deref().unwrap_or(&self.title)
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(title) = &overrides.title {
            self.title.clone_from(title);
        }
        if let Some(url) = &overrides.url {
            self.url.clone_from(url);
        }
        if let Some(base_url) = &overrides.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(source_dir) = &overrides.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebar_file) = &overrides.sidebar_file {
            self.docs_resolved.sidebar_file.clone_from(sidebar_file);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: "Documentation".to_owned(),
            url: "http://localhost:3000".to_owned(),
            base_url: "/".to_owned(),
            organization_name: None,
            project_name: None,
            on_broken_links: BrokenLinks::default(),
            docs: DocsConfigRaw::default(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebar_file: base.join("sidebars.json"),
                route_base_path: "/".to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.url, "url")?;
        require_http_url(&self.url, "url")?;

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must start and end with '/'".to_owned(),
            ));
        }
        if !self.docs_resolved.route_base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "docs.route_base_path must start with '/'".to_owned(),
            ));
        }

        for item in &self.navbar.items {
            require_non_empty(&item.label, "navbar.items.label")?;
            require_non_empty(&item.href, "navbar.items.href")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.url = expand::expand_env(&self.url, "url")?;
        self.base_url = expand::expand_env(&self.base_url, "base_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebar_file: resolve(self.docs.sidebar_file.as_deref(), "sidebars.json"),
            route_base_path: self
                .docs
                .route_base_path
                .clone()
                .unwrap_or_else(|| "/".to_owned()),
        };
    }
}
