//! Browser session construction.
//!
//! The session handle built here is owned by the calling fixture, which is
//! responsible for quitting it on every exit path. The harness only borrows
//! it.

use std::path::{Path, PathBuf};

use thirtyfour::prelude::*;
use thirtyfour::DesiredCapabilities;
use tracing::info;

use crate::config::{Browser, Config};

/// Per-run overrides on top of the environment defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Override the `HEADLESS` environment default for this session.
    pub headless: Option<bool>,
}

impl SessionOptions {
    /// Convenience for debugging a single suite with a visible browser.
    pub fn headed() -> Self {
        Self {
            headless: Some(false),
        }
    }
}

/// Build a session using the environment defaults.
pub async fn build(config: &Config) -> WebDriverResult<WebDriver> {
    build_with(config, SessionOptions::default()).await
}

/// Build a session with per-run overrides. Precedence: per-run option first,
/// environment default second.
pub async fn build_with(config: &Config, opts: SessionOptions) -> WebDriverResult<WebDriver> {
    let headless = opts.headless.unwrap_or(config.headless);
    info!(browser = ?config.browser, headless, endpoint = %config.webdriver_url, "building browser session");

    let driver = match config.browser {
        Browser::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if headless {
                caps.add_arg("--headless=new")?;
            }
            caps.add_arg("--window-size=1280,800")?;
            // Keep driver output quiet.
            caps.add_arg("--disable-logging")?;
            caps.add_experimental_option("excludeSwitches", ["enable-logging"])?;
            WebDriver::new(&config.webdriver_url, caps).await?
        }
        Browser::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if headless {
                caps.add_arg("-headless")?;
            }
            WebDriver::new(&config.webdriver_url, caps).await?
        }
    };

    driver.maximize_window().await?;
    info!("browser session started");
    Ok(driver)
}

/// Save a PNG screenshot under `reports/screenshots` for failure diagnosis.
/// Callers invoke this from their teardown; the harness never captures
/// screenshots implicitly.
pub async fn capture_screenshot(driver: &WebDriver, name: &str) -> anyhow::Result<PathBuf> {
    let dir = Path::new("reports/screenshots");
    std::fs::create_dir_all(dir)?;
    let safe: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let path = dir.join(format!("{safe}.png"));
    let png = driver.screenshot_as_png().await?;
    std::fs::write(&path, png)?;
    info!(path = %path.display(), "saved failure screenshot");
    Ok(path)
}
