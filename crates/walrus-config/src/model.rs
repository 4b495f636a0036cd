//! Normalized site model: subjects, articles and display settings.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Text direction of a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Canonical upper-case name, also used as the root element class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "LTR",
            Self::Rtl => "RTL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LTR" => Ok(Self::Ltr),
            "RTL" => Ok(Self::Rtl),
            _ => Err(UnknownValue(s.to_owned())),
        }
    }
}

/// Light or dark colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Light background.
    Light,
    /// Dark background.
    #[default]
    Dark,
}

impl DisplayMode {
    /// Canonical lower-case name, also used as the document element class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownValue(s.to_owned())),
        }
    }
}

/// URL scheme the site is served over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP.
    #[default]
    Http,
    /// HTTP over TLS.
    Https,
}

impl Protocol {
    /// Scheme name without the `://` separator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(UnknownValue(s.to_owned())),
        }
    }
}

/// A string that does not name any variant of a settings enum.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value {0:?}")]
pub struct UnknownValue(pub String);

/// A top-level category of articles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    /// Display title.
    pub title: String,
    /// URL segment identifying the subject.
    pub slug: String,
    /// Directory holding the subject's article files, relative to the site root.
    pub directory: String,
    /// Whether math typesetting is enabled by default for the subject's articles.
    pub math: bool,
    /// Default direction for the subject's articles.
    pub direction: Direction,
    /// Articles in menu order.
    pub articles: Vec<Article>,
}

/// A single content page backed by a text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    /// Display title.
    pub title: String,
    /// URL segment identifying the article within its subject.
    pub slug: String,
    /// Path of the raw text file, relative to the site root.
    pub file: String,
    /// Page direction.
    pub direction: Direction,
    /// Whether math typesetting runs after the article is shown.
    pub math: bool,
}
