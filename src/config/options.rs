// src/config/options.rs
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub display: DisplayOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            display: DisplayOptions::default(),
        }
    }
}

/// The three panel modes. `Auto` renders like `Full` and keeps refreshing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Minimal,
    Full,
    Auto,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Minimal, DisplayMode::Full, DisplayMode::Auto];

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Minimal => "Minimal",
            DisplayMode::Full => "Full UI",
            DisplayMode::Auto => "Auto-Refresh",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            DisplayMode::Minimal => "minimal",
            DisplayMode::Full => "full",
            DisplayMode::Auto => "auto",
        }
    }

    pub fn render_mode(self) -> RenderMode {
        match self {
            DisplayMode::Minimal => RenderMode::Minimal,
            DisplayMode::Full | DisplayMode::Auto => RenderMode::Full,
        }
    }

    pub fn is_auto(self) -> bool {
        self == DisplayMode::Auto
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(DisplayMode::Minimal),
            "full" => Ok(DisplayMode::Full),
            "auto" => Ok(DisplayMode::Auto),
            other => Err(format!("Unknown mode: {}", other)),
        }
    }
}

/// How a set of buckets is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Minimal,
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Scheme + host, no trailing slash
    pub origin: String,
    /// Session cookie header value, as copied from the browser
    pub cookie: Option<String>,
    /// Candidate paths, tried in order
    pub endpoints: Vec<String>,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            origin: s!(DEFAULT_ORIGIN),
            cookie: None,
            endpoints: ENDPOINTS.iter().map(|p| s!(*p)).collect(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl FetchOptions {
    /// `origin` + `path`, tolerating a trailing slash on the origin.
    pub fn url_for(&self, path: &str) -> String {
        join!(self.origin.trim_end_matches('/'), path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub mode: DisplayMode,
    pub refresh_interval: Duration,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Minimal,
            refresh_interval: Duration::from_secs(REFRESH_INTERVAL_SECS),
        }
    }
}
