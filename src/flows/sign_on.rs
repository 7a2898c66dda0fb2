//! Sign-on flow for the demo login page.

use anyhow::{Context, Result};
use cartwheel_harness::Harness;

use crate::config::Config;

/// Log in at `{base_url}/login` with the configured credentials.
pub async fn sign_on(harness: &Harness, config: &Config) -> Result<()> {
    let base = config.base_url.as_deref().context("BASE_URL is not set")?;
    let username = config
        .username
        .as_deref()
        .context("APP_USERNAME is not set")?;
    let password = config
        .password
        .as_deref()
        .context("APP_PASSWORD is not set")?;

    harness.goto(&format!("{base}/login")).await?;
    harness.type_text(("css", "#username"), username).await?;
    harness.type_text(("css", "#password"), password).await?;
    // The demo site button carries the text "Login".
    harness.click(("button", "Login")).await?;
    Ok(())
}
