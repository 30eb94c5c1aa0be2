use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::{task::JoinHandle, time::timeout};

use crate::{Error, Result, NAV_TIMEOUT_MS};

/// One launched browser for the whole run. Acquired once at pipeline start,
/// released exactly once through [`Session::shutdown`].
pub struct Session {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl Session {
    pub async fn launch() -> Result<Self> {
        let config = BrowserConfig::builder()
            // Sandboxing off for container compatibility only.
            .no_sandbox()
            .request_timeout(Duration::from_millis(NAV_TIMEOUT_MS))
            .build()
            .map_err(Error::BrowserConfig)?;

        let (browser, mut handler) = Browser::launch(config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    pub async fn new_page(&self) -> Result<Page> {
        Ok(self.browser.new_page("about:blank").await?)
    }

    pub async fn shutdown(mut self) -> Result<()> {
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}

/// Navigates and waits for the load to settle, bounded by the fixed
/// per-navigation deadline.
pub async fn goto(page: &Page, url: &str) -> Result<()> {
    let navigation = async {
        page.goto(url).await?;
        page.wait_for_navigation().await?;
        Ok::<(), Error>(())
    };
    match timeout(Duration::from_millis(NAV_TIMEOUT_MS), navigation).await {
        Ok(outcome) => outcome,
        Err(_) => Err(Error::NavigationTimeout {
            url: url.to_string(),
            timeout_ms: NAV_TIMEOUT_MS,
        }),
    }
}

/// Label-anchored page query: finds the element containing `label` and
/// returns the first paragraph-level text of its adjacent sibling block.
/// `None` when the label (or its sibling) is nowhere on the page.
pub async fn find_value_near_label(page: &Page, label: &str) -> Result<Option<String>> {
    let needle = serde_json::to_string(label)?;
    let script = format!(
        r#"(() => {{
            const needle = {needle};
            const leaves = Array.from(document.querySelectorAll("body *"))
                .filter(el => el.children.length === 0);
            const anchor = leaves.find(el => el.textContent.includes(needle));
            if (!anchor) return "";
            const block = anchor.nextElementSibling
                || (anchor.parentElement && anchor.parentElement.nextElementSibling);
            if (!block) return "";
            const value = block.matches("p") ? block : (block.querySelector("p") || block);
            return value.textContent.trim();
        }})()"#
    );

    let raw: String = page.evaluate(script).await?.into_value()?;
    Ok((!raw.is_empty()).then_some(raw))
}
