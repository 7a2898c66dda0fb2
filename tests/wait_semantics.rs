//! Behavioral checks for the wait engine against deterministic `data:` URL
//! pages. These exercise real polling, so they need a WebDriver endpoint and
//! are ignored by default:
//!
//!   cargo test --test wait_semantics -- --ignored

mod common;

use std::time::{Duration, Instant};

use anyhow::Result;
use cartwheel::{HarnessError, WaitMode};

/// Minimal escaping for inline pages; '#' would start a URL fragment.
fn page(html: &str) -> String {
    format!(
        "data:text/html,{}",
        html.replace('%', "%25").replace('#', "%23").replace(' ', "%20")
    )
}

fn assert_wait_timeout(err: &HarnessError, condition: &str) {
    assert!(
        matches!(err, HarnessError::WaitTimeout { .. }),
        "expected WaitTimeout, got: {err}"
    );
    let msg = err.to_string();
    assert!(
        msg.contains(&format!("wait {condition} timed out")),
        "timeout message does not name {condition}: {msg}"
    );
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn appeared_resolves_once_element_renders() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><script>setTimeout(function(){var e=document.createElement('h2');e.id='late';e.textContent='Ready';document.body.appendChild(e);},400);</script></body>";
        fx.harness.goto(&page(html)).await?;

        let started = Instant::now();
        fx.harness
            .wait_until(("id", "late"), WaitMode::Appeared)
            .await?;
        let elapsed = started.elapsed();
        anyhow::ensure!(elapsed >= Duration::from_millis(300), "resolved too early: {elapsed:?}");
        anyhow::ensure!(elapsed < Duration::from_secs(5), "resolved too late: {elapsed:?}");

        let heading = fx.harness.find_visible(("id", "late")).await?;
        anyhow::ensure!(heading.text().await? == "Ready");
        Ok(())
    }
    .await;
    fx.finish("wait-appeared", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn appeared_times_out_on_hidden_element() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><div id='ghost' style='display:none'>hidden</div></body>";
        fx.harness.goto(&page(html)).await?;

        let started = Instant::now();
        let err = fx
            .harness
            .wait_until(("id", "ghost", Duration::from_secs(1)), WaitMode::Appeared)
            .await
            .expect_err("hidden element must not count as appeared");
        assert_wait_timeout(&err, "Appeared");
        anyhow::ensure!(started.elapsed() >= Duration::from_secs(1));
        Ok(())
    }
    .await;
    fx.finish("wait-appeared-timeout", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn disappeared_resolves_when_spinner_hides() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><div id='spinner'>loading</div><script>setTimeout(function(){document.getElementById('spinner').style.display='none';},400);</script></body>";
        fx.harness.goto(&page(html)).await?;

        let started = Instant::now();
        fx.harness
            .wait_until(("id", "spinner"), WaitMode::Disappeared)
            .await?;
        anyhow::ensure!(started.elapsed() < Duration::from_secs(5));
        Ok(())
    }
    .await;
    fx.finish("wait-disappeared-hidden", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn disappeared_resolves_when_element_is_removed() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><div id='toast'>saving</div><script>setTimeout(function(){var e=document.getElementById('toast');e.parentNode.removeChild(e);},400);</script></body>";
        fx.harness.goto(&page(html)).await?;
        fx.harness
            .wait_until(("id", "toast"), WaitMode::Disappeared)
            .await?;
        Ok(())
    }
    .await;
    fx.finish("wait-disappeared-removed", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn disappeared_times_out_while_still_visible() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><div id='banner'>still here</div></body>";
        fx.harness.goto(&page(html)).await?;

        let started = Instant::now();
        let err = fx
            .harness
            .wait_until(("id", "banner", Duration::from_secs(1)), WaitMode::Disappeared)
            .await
            .expect_err("visible element must not count as disappeared");
        assert_wait_timeout(&err, "Disappeared");
        anyhow::ensure!(started.elapsed() >= Duration::from_secs(1));
        Ok(())
    }
    .await;
    fx.finish("wait-disappeared-timeout", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn stale_resolves_when_node_is_replaced() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><span id='status'>Saving...</span><script>setTimeout(function(){var e=document.getElementById('status');e.parentNode.removeChild(e);},400);</script></body>";
        fx.harness.goto(&page(html)).await?;
        fx.harness
            .wait_until(("id", "status"), WaitMode::Stale)
            .await?;
        Ok(())
    }
    .await;
    fx.finish("wait-stale", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn stale_times_out_when_node_is_kept() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><span id='status'>Saved</span></body>";
        fx.harness.goto(&page(html)).await?;
        let err = fx
            .harness
            .wait_until(("id", "status", Duration::from_secs(1)), WaitMode::Stale)
            .await
            .expect_err("attached element must not count as stale");
        assert_wait_timeout(&err, "Stale");
        Ok(())
    }
    .await;
    fx.finish("wait-stale-timeout", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn stale_timeout_on_absent_element_still_reports_stale() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><p>nothing to track here</p></body>";
        fx.harness.goto(&page(html)).await?;
        // The find phase is what fails; the error must still name the
        // semantics that were asked for.
        let err = fx
            .harness
            .wait_until(("id", "missing", Duration::from_secs(1)), WaitMode::Stale)
            .await
            .expect_err("absent element cannot satisfy a staleness wait");
        assert_wait_timeout(&err, "Stale");
        Ok(())
    }
    .await;
    fx.finish("wait-stale-absent", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn type_text_replaces_existing_value() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><input id='field' value='old text'></body>";
        fx.harness.goto(&page(html)).await?;
        fx.harness.type_text(("id", "field"), "fresh").await?;

        let field = fx.harness.find_visible(("id", "field")).await?;
        let value = field.prop("value").await?;
        anyhow::ensure!(
            value.as_deref() == Some("fresh"),
            "clear-then-send semantics violated: {value:?}"
        );
        Ok(())
    }
    .await;
    fx.finish("type-round-trip", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn click_waits_for_element_to_become_enabled() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><button id='go' disabled onclick='document.title=\"clicked\"'>Go</button><script>setTimeout(function(){document.getElementById('go').removeAttribute('disabled');},400);</script></body>";
        fx.harness.goto(&page(html)).await?;

        let started = Instant::now();
        fx.harness.click(("id", "go")).await?;
        anyhow::ensure!(
            started.elapsed() >= Duration::from_millis(300),
            "click fired before the element was enabled"
        );
        anyhow::ensure!(fx.driver.title().await? == "clicked");
        Ok(())
    }
    .await;
    fx.finish("click-readiness-gate", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn click_times_out_on_permanently_disabled_element() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><button id='never' disabled>Never</button></body>";
        fx.harness.goto(&page(html)).await?;
        let err = fx
            .harness
            .click(("id", "never", Duration::from_secs(1)))
            .await
            .expect_err("disabled element must not be clicked");
        assert_wait_timeout(&err, "Clickable");
        anyhow::ensure!(fx.driver.title().await? != "clicked");
        Ok(())
    }
    .await;
    fx.finish("click-disabled-timeout", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn tag_text_locator_finds_element_by_visible_text() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><h1> Dashboard </h1><span>Hello, world</span></body>";
        fx.harness.goto(&page(html)).await?;
        // normalize-space(.) trims the padding around the heading text.
        fx.harness
            .wait_until(("h1", "Dashboard"), WaitMode::Appeared)
            .await?;
        let span = fx
            .harness
            .find_visible(cartwheel::Target::from(("span", "Hello")).contains(true))
            .await?;
        anyhow::ensure!(span.text().await? == "Hello, world");
        Ok(())
    }
    .await;
    fx.finish("tag-text-locator", &outcome).await?;
    outcome
}

#[tokio::test]
#[ignore = "requires a running WebDriver endpoint"]
async fn optional_element_pattern_discards_bounded_failure() -> Result<()> {
    let fx = common::fixture().await?;
    let outcome = async {
        let html = "<body><p>no banner on this page</p></body>";
        fx.harness.goto(&page(html)).await?;
        // Must not fail the test; the banner simply is not there.
        common::dismiss_if_present(
            &fx.harness,
            ("id", "cookie-accept", Duration::from_millis(500)),
        )
        .await;
        Ok(())
    }
    .await;
    fx.finish("optional-element", &outcome).await?;
    outcome
}
