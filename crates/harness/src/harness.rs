//! The harness facade itself.

use std::time::Duration;

use cartwheel_core_types::{HarnessError, WaitCondition, WaitMode, DEFAULT_TIMEOUT};
use cartwheel_wait as wait;
use cartwheel_wait::WaitSpec;
use thirtyfour::prelude::*;
use tracing::{debug, info};

use crate::model::Target;

/// Thin convenience layer over a WebDriver session.
///
/// Holds no cross-call state beyond the default wait timeout, fixed at
/// construction. The session handle is a cheap clone of the fixture-owned
/// `WebDriver`; the harness never quits it.
#[derive(Clone)]
pub struct Harness {
    driver: WebDriver,
    default_timeout: Duration,
}

impl Harness {
    pub fn new(driver: WebDriver) -> Self {
        Self {
            driver,
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// The borrowed session handle, for assertions the facade does not cover.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn spec(&self, target: &Target, mode: WaitMode) -> WaitSpec {
        WaitSpec::new(mode, target.timeout_or(self.default_timeout))
    }

    pub async fn goto(&self, url: &str) -> Result<(), HarnessError> {
        info!(url, "navigating");
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Block until the target satisfies the given wait semantics.
    pub async fn wait_until(
        &self,
        target: impl Into<Target>,
        mode: WaitMode,
    ) -> Result<(), HarnessError> {
        let target = target.into();
        wait::wait_until(&self.driver, &target.locator, self.spec(&target, mode)).await
    }

    /// Wait until the target is displayed and return its handle.
    pub async fn find_visible(
        &self,
        target: impl Into<Target>,
    ) -> Result<WebElement, HarnessError> {
        let target = target.into();
        let timeout = target.timeout_or(self.default_timeout);
        wait::appeared(&self.driver, &target.locator, timeout).await
    }

    /// Wait until the target is present in the DOM, visible or not, and
    /// return its handle. Useful for staleness tracking.
    pub async fn find_present(
        &self,
        target: impl Into<Target>,
    ) -> Result<WebElement, HarnessError> {
        let target = target.into();
        let timeout = target.timeout_or(self.default_timeout);
        wait::present(&self.driver, &target.locator, WaitCondition::Present, timeout).await
    }

    /// Wait for visibility, clear the field, then send the literal text.
    /// No client-side validation; the text passes straight through.
    pub async fn type_text(
        &self,
        target: impl Into<Target>,
        text: &str,
    ) -> Result<(), HarnessError> {
        let target = target.into();
        debug!(
            strategy = target.locator.strategy.name(),
            value = %target.locator.value,
            "typing"
        );
        let timeout = target.timeout_or(self.default_timeout);
        let element = wait::appeared(&self.driver, &target.locator, timeout).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        debug!(value = %target.locator.value, "typed");
        Ok(())
    }

    /// Wait until the target is visible and enabled, then click it.
    /// Intercepted-click errors propagate to the caller unmodified.
    pub async fn click(&self, target: impl Into<Target>) -> Result<(), HarnessError> {
        let target = target.into();
        debug!(
            strategy = target.locator.strategy.name(),
            value = %target.locator.value,
            "clicking"
        );
        let timeout = target.timeout_or(self.default_timeout);
        let element = wait::clickable(&self.driver, &target.locator, timeout).await?;
        element.click().await?;
        debug!(value = %target.locator.value, "clicked");
        Ok(())
    }
}
