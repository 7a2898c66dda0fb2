//! Environment-derived configuration.
//!
//! Read once at session-construction time; the harness core never touches
//! it. An optional `config/local.env` file supplies developer overrides for
//! variables not already set in the environment.

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

/// Browser engine for the session builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Browser {
    #[default]
    Chrome,
    Firefox,
}

impl FromStr for Browser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            other => Err(format!("unknown browser \"{other}\"")),
        }
    }
}

/// Everything a suite run needs from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for flows that navigate relative to a deployment.
    pub base_url: Option<String>,
    /// WebDriver endpoint (chromedriver/geckodriver/selenium).
    pub webdriver_url: String,
    pub browser: Browser,
    pub headless: bool,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Config {
    /// Read the environment, applying `config/local.env` overrides first.
    pub fn from_env() -> Self {
        load_local_env_overrides();

        let browser = match env::var("BROWSER") {
            Ok(name) => name.parse().unwrap_or_else(|err: String| {
                warn!(%err, "falling back to chrome");
                Browser::Chrome
            }),
            Err(_) => Browser::Chrome,
        };

        Self {
            base_url: env::var("BASE_URL").ok(),
            webdriver_url: env::var("WEBDRIVER_URL")
                .unwrap_or_else(|_| "http://localhost:9515".to_string()),
            browser,
            headless: env::var("HEADLESS")
                .map(|v| v.to_ascii_lowercase() == "true")
                .unwrap_or(true),
            username: env::var("APP_USERNAME").ok(),
            password: env::var("APP_PASSWORD").ok(),
        }
    }
}

/// Seed missing environment variables from `config/local.env` if present.
/// Variables already set in the environment always win.
pub fn load_local_env_overrides() {
    let path = Path::new("config/local.env");
    if !path.exists() {
        return;
    }

    match fs::read_to_string(path) {
        Ok(contents) => {
            for (idx, raw_line) in contents.lines().enumerate() {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let Some((key, value)) = line.split_once('=') else {
                    warn!(line = idx + 1, "invalid local.env entry; skipping");
                    continue;
                };
                let key = key.trim();
                if key.is_empty() || env::var(key).is_ok() {
                    continue;
                }
                env::set_var(key, value.trim().trim_matches('"'));
            }
            info!(path = %path.display(), "loaded environment overrides from local.env");
        }
        Err(err) => {
            warn!(path = %path.display(), ?err, "failed to read local.env overrides");
        }
    }
}
