//! Site configuration for Walrus.
//!
//! A site is described by a sparse document (JSON, or TOML with the same keys)
//! that names the site, its base URL and a tree of subjects and articles. This
//! crate parses that document into [`ConfigRaw`] and normalizes it into a
//! fully-populated [`Config`]:
//!
//! - absent settings get their defaults
//! - subjects inherit `Math`/`Direction` from the site, articles from their subject
//! - slugs are derived from titles via [`slug::encode`]
//! - subject directories and article files are joined onto the site directory
//!
//! Normalization fails fast with [`ConfigError::Validation`] when a required
//! field is missing, naming the offending field path.
//!
//! ## Environment Variable Expansion
//!
//! `BaseURL` and `Directory` support `${VAR}` and `${VAR:-default}`.
//!
//! ## Example
//!
//! ```
//! use walrus_config::Config;
//!
//! let config = Config::from_json_str(r#"{
//!     "Title": "Notes",
//!     "BaseURL": "notes.example.com",
//!     "Subjects": [{ "Title": "Group Theory", "Articles": [{ "Title": "Cosets" }] }]
//! }"#).unwrap();
//!
//! let subject = &config.subjects[0];
//! assert_eq!(subject.slug, "Group-Theory");
//! assert_eq!(subject.articles[0].file, "./Group Theory/Cosets.tex");
//! ```

mod expand;
mod model;
pub mod slug;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

pub use model::{Article, Direction, DisplayMode, Protocol, Subject, UnknownValue};

/// Configuration filenames searched for during auto-discovery, in order.
const CONFIG_FILENAMES: [&str; 2] = ["walrus.json", "walrus.toml"];

/// Extension appended to an article title when no `File` is given.
const DEFAULT_ARTICLE_EXTENSION: &str = ".tex";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site base URL.
    pub base_url: Option<String>,
    /// Override the URL scheme.
    pub protocol: Option<Protocol>,
    /// Override the reload-on-navigation flag.
    pub reload: Option<bool>,
}

/// Site configuration as written by the author.
///
/// Keys are `PascalCase` (`BaseURL` and `MathJaxConfig` keep their historical
/// spelling). Every field is optional at the parsing stage; required fields are
/// checked by [`Config::from_raw`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigRaw {
    pub title: Option<String>,
    pub directory: Option<String>,
    pub math: Option<bool>,
    pub direction: Option<String>,
    #[serde(rename = "BaseURL")]
    pub base_url: Option<String>,
    pub default_mode: Option<String>,
    pub protocol: Option<String>,
    pub reload: Option<bool>,
    #[serde(default)]
    pub subjects: Vec<SubjectRaw>,
    #[serde(rename = "MathJaxConfig")]
    pub math_config: Option<serde_json::Value>,
}

/// Subject entry as written by the author.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubjectRaw {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub directory: Option<String>,
    pub math: Option<bool>,
    pub direction: Option<String>,
    #[serde(default)]
    pub articles: Vec<ArticleRaw>,
}

/// Article entry as written by the author.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArticleRaw {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub file: Option<String>,
    pub direction: Option<String>,
    pub math: Option<bool>,
}

/// Normalized site configuration.
///
/// Read-only once built; every subject and article carries its resolved
/// slug, path and inherited settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Site title.
    pub title: String,
    /// Site content directory, relative to the site root.
    pub directory: String,
    /// Site-wide math default.
    pub math: bool,
    /// Site-wide direction, also used for the index and 404 pages.
    pub direction: Direction,
    /// Host and path prefix of the site, without scheme or trailing slash.
    pub base_url: String,
    /// Display mode used until the reader picks one.
    pub default_mode: DisplayMode,
    /// URL scheme of the site.
    pub protocol: Protocol,
    /// Whether in-app links perform full page loads.
    pub reload: bool,
    /// Subjects in menu order.
    pub subjects: Vec<Subject>,
    /// Configuration object handed to the math typesetter.
    pub math_config: serde_json::Value,
    /// Path to the config file (set when loaded from disk).
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No configuration file found during auto-discovery.
    #[error("No walrus.json or walrus.toml found in current directory or its parents")]
    NotDiscovered,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`BaseURL`").
        field: String,
        /// Error message (e.g., "${`SITE_HOST`} not set").
        message: String,
    },
}

/// Default math typesetter configuration: `$...$` and `\(...\)` inline
/// delimiters with AMS equation numbering.
#[must_use]
pub fn default_math_config() -> serde_json::Value {
    serde_json::json!({
        "tex": {
            "inlineMath": [["$", "$"], ["\\(", "\\)"]],
            "tags": "ams"
        }
    })
}

/// Require an optional string field to be present and non-empty.
fn require(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(ConfigError::Validation(format!("{field} cannot be empty"))),
        None => Err(ConfigError::Validation(format!("{field} is required"))),
    }
}

/// Parse an optional enum setting, falling back to `default` when absent.
fn parse_setting<T>(value: Option<&str>, default: T, field: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = UnknownValue>,
{
    match value {
        Some(v) => v
            .parse()
            .map_err(|e: UnknownValue| ConfigError::Validation(format!("{field}: {e}"))),
        None => Ok(default),
    }
}

/// Require the base URL to be scheme-less.
fn require_no_scheme(url: &str, field: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must not include the scheme, set Protocol instead"
        )));
    }
    Ok(())
}

impl Config {
    /// Normalize a raw configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` when a required title or the base URL
    /// is missing or an enum setting is unrecognized, and `ConfigError::EnvVar`
    /// when an expanded variable is unset.
    pub fn from_raw(raw: ConfigRaw) -> Result<Self, ConfigError> {
        let title = require(raw.title, "Title")?;
        let base_url = expand::expand_env(&require(raw.base_url, "BaseURL")?, "BaseURL")?;
        require_no_scheme(&base_url, "BaseURL")?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(ConfigError::Validation("BaseURL cannot be empty".to_owned()));
        }
        let directory = match raw.directory {
            Some(dir) => expand::expand_env(&dir, "Directory")?,
            None => ".".to_owned(),
        };

        let math = raw.math.unwrap_or(false);
        let direction = parse_setting(raw.direction.as_deref(), Direction::Ltr, "Direction")?;
        let default_mode =
            parse_setting(raw.default_mode.as_deref(), DisplayMode::Dark, "DefaultMode")?;
        let protocol = parse_setting(raw.protocol.as_deref(), Protocol::Http, "Protocol")?;

        let subjects = raw
            .subjects
            .into_iter()
            .enumerate()
            .map(|(i, subject)| normalize_subject(subject, i, &directory, math, direction))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            title = %title,
            subjects = subjects.len(),
            "normalized site configuration"
        );

        Ok(Self {
            title,
            directory,
            math,
            direction,
            base_url,
            default_mode,
            protocol,
            reload: raw.reload.unwrap_or(false),
            subjects,
            math_config: raw.math_config.unwrap_or_else(default_math_config),
            config_path: None,
        })
    }

    /// Parse and normalize a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` on malformed JSON, otherwise as [`Config::from_raw`].
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Parse and normalize a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` on malformed TOML, otherwise as [`Config::from_raw`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `walrus.json` / `walrus.toml` in the current directory and parents.
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, cannot be parsed or fails validation.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => Self::discover_config().ok_or(ConfigError::NotDiscovered)?,
        };

        let mut config = Self::load_from_file(&path)?;
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    pub fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.base_url = base_url.trim_end_matches('/').to_owned();
        }
        if let Some(protocol) = settings.protocol {
            self.protocol = protocol;
        }
        if let Some(reload) = settings.reload {
            self.reload = reload;
        }
    }

    /// Full URL of a site-relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use walrus_config::Config;
    /// let config = Config::from_json_str(r#"{"Title": "T", "BaseURL": "example.com/docs"}"#).unwrap();
    /// assert_eq!(config.page_url("Algebra/Groups"), "http://example.com/docs/Algebra/Groups");
    /// assert_eq!(config.page_url(""), "http://example.com/docs/");
    /// ```
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        format!("{}://{}/{}", self.protocol, self.base_url, path)
    }

    /// URL of an article's raw text file.
    #[must_use]
    pub fn article_url(&self, article: &Article) -> String {
        self.page_url(&article.file)
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            for name in CONFIG_FILENAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let mut config = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

/// Normalize one subject and its articles.
fn normalize_subject(
    raw: SubjectRaw,
    index: usize,
    site_directory: &str,
    site_math: bool,
    site_direction: Direction,
) -> Result<Subject, ConfigError> {
    let field = format!("Subjects[{index}]");
    let title = require(raw.title, &format!("{field}.Title"))?;
    let slug = slug::encode(raw.slug.as_deref().unwrap_or(&title));
    let directory = format!(
        "{site_directory}/{}",
        raw.directory.as_deref().unwrap_or(&title)
    );
    let math = raw.math.unwrap_or(site_math);
    let direction = parse_setting(
        raw.direction.as_deref(),
        site_direction,
        &format!("{field}.Direction"),
    )?;

    let articles = raw
        .articles
        .into_iter()
        .enumerate()
        .map(|(j, article)| {
            normalize_article(
                article,
                &format!("{field}.Articles[{j}]"),
                &directory,
                math,
                direction,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Subject {
        title,
        slug,
        directory,
        math,
        direction,
        articles,
    })
}

/// Normalize one article against its (already normalized) subject settings.
fn normalize_article(
    raw: ArticleRaw,
    field: &str,
    subject_directory: &str,
    subject_math: bool,
    subject_direction: Direction,
) -> Result<Article, ConfigError> {
    let title = require(raw.title, &format!("{field}.Title"))?;
    let slug = slug::encode(raw.slug.as_deref().unwrap_or(&title));
    let file = match raw.file {
        Some(file) => format!("{subject_directory}/{file}"),
        None => format!("{subject_directory}/{title}{DEFAULT_ARTICLE_EXTENSION}"),
    };
    let direction = parse_setting(
        raw.direction.as_deref(),
        subject_direction,
        &format!("{field}.Direction"),
    )?;

    Ok(Article {
        title,
        slug,
        file,
        direction,
        math: raw.math.unwrap_or(subject_math),
    })
}
