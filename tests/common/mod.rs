//! Shared fixture for the live-browser suites.
#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use cartwheel::config::Config;
use cartwheel::{logging, session, Harness, Target};
use thirtyfour::WebDriver;
use tracing::debug;

pub struct Fixture {
    pub driver: WebDriver,
    pub harness: Harness,
    pub config: Config,
}

/// Build a fresh session from the environment. One session per test; suites
/// sequence their own calls against it.
pub async fn fixture() -> Result<Fixture> {
    logging::init();
    let config = Config::from_env();
    let driver = session::build(&config).await?;
    let harness = Harness::new(driver.clone());
    Ok(Fixture {
        driver,
        harness,
        config,
    })
}

impl Fixture {
    /// Teardown: screenshot on failure, then quit the session. The session
    /// must be released on every exit path, so suites run their body to a
    /// `Result` and hand it here rather than using `?` mid-test.
    pub async fn finish(self, name: &str, outcome: &Result<()>) -> Result<()> {
        if outcome.is_err() {
            let _ = session::capture_screenshot(&self.driver, name).await;
        }
        self.driver.quit().await?;
        Ok(())
    }
}

/// Caller-side optional-element pattern: a bounded-timeout click whose
/// failure is a normal, expected outcome (cookie banners and the like).
pub async fn dismiss_if_present(harness: &Harness, target: impl Into<Target>) {
    let mut target = target.into();
    if target.timeout.is_none() {
        target = target.with_timeout(Duration::from_secs(5));
    }
    if let Err(err) = harness.click(target).await {
        debug!(%err, "optional element not interactable; continuing");
    }
}
