//! The wait predicates, composed over the client's native pollers.

use std::fmt::Display;
use std::time::Duration;

use cartwheel_core_types::{HarnessError, WaitCondition, WaitMode};
use cartwheel_locator::Locator;
use thirtyfour::prelude::*;
use tracing::debug;

use crate::types::{WaitSpec, POLL_INTERVAL};

fn timeout_err(
    locator: &Locator,
    condition: WaitCondition,
    timeout: Duration,
    detail: impl Display,
) -> HarnessError {
    HarnessError::wait_timeout(
        locator.strategy.name(),
        &locator.value,
        condition,
        timeout,
        detail.to_string(),
    )
}

/// Wait until at least one element matches the query. Visibility is not
/// required; use this when a handle is needed for staleness tracking.
///
/// `condition` is the condition the caller is servicing; a staleness wait
/// whose find phase times out must still report `Stale`, not the lookup.
pub async fn present(
    driver: &WebDriver,
    locator: &Locator,
    condition: WaitCondition,
    timeout: Duration,
) -> Result<WebElement, HarnessError> {
    driver
        .query(locator.to_by())
        .wait(timeout, POLL_INTERVAL)
        .first()
        .await
        .map_err(|err| timeout_err(locator, condition, timeout, err))
}

/// Wait until an element matches the query and is displayed.
pub async fn appeared(
    driver: &WebDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<WebElement, HarnessError> {
    driver
        .query(locator.to_by())
        .wait(timeout, POLL_INTERVAL)
        .and_displayed()
        .first()
        .await
        .map_err(|err| timeout_err(locator, WaitCondition::Appeared, timeout, err))
}

/// Wait until an element is displayed and enabled: the readiness gate used
/// before every click.
pub async fn clickable(
    driver: &WebDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<WebElement, HarnessError> {
    driver
        .query(locator.to_by())
        .wait(timeout, POLL_INTERVAL)
        .and_clickable()
        .first()
        .await
        .map_err(|err| timeout_err(locator, WaitCondition::Clickable, timeout, err))
}

/// Wait until no displayed element matches the query.
///
/// Removal, hiding and handles that go stale mid-inspection all count as
/// disappeared; transient UI such as spinners may leave the DOM or merely
/// be hidden.
pub async fn disappeared(
    driver: &WebDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<(), HarnessError> {
    let gone = driver
        .query(locator.to_by())
        .wait(timeout, POLL_INTERVAL)
        .and_displayed()
        .not_exists()
        .await
        .map_err(|err| timeout_err(locator, WaitCondition::Disappeared, timeout, err))?;
    if gone {
        Ok(())
    } else {
        Err(timeout_err(
            locator,
            WaitCondition::Disappeared,
            timeout,
            "element still displayed",
        ))
    }
}

/// Wait for an element to be present, then for that specific handle to be
/// detached from the document.
pub async fn stale(
    driver: &WebDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<(), HarnessError> {
    let element = present(driver, locator, WaitCondition::Stale, timeout).await?;
    element
        .wait_until()
        .wait(timeout, POLL_INTERVAL)
        .stale()
        .await
        .map_err(|err| timeout_err(locator, WaitCondition::Stale, timeout, err))
}

/// Single dispatch entry point for the three wait semantics.
pub async fn wait_until(
    driver: &WebDriver,
    locator: &Locator,
    spec: WaitSpec,
) -> Result<(), HarnessError> {
    debug!(
        mode = %spec.mode,
        strategy = locator.strategy.name(),
        value = %locator.value,
        timeout_ms = spec.timeout.as_millis() as u64,
        "waiting"
    );
    match spec.mode {
        WaitMode::Appeared => {
            appeared(driver, locator, spec.timeout).await?;
        }
        WaitMode::Disappeared => {
            disappeared(driver, locator, spec.timeout).await?;
        }
        WaitMode::Stale => {
            stale(driver, locator, spec.timeout).await?;
        }
    }
    debug!(mode = %spec.mode, value = %locator.value, "wait satisfied");
    Ok(())
}
