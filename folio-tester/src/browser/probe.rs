use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use folio_core::{AlbumFilter, Page};
use serde_json::Value;
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

const PAGE_SHOWN_JS: &str = "\
const el = document.getElementById(arguments[0]);
if (!el || el.classList.contains('hidden')) { return false; }
const style = getComputedStyle(el);
return style.display !== 'none' && style.opacity === '1';";

/// Reads the site's DOM contract through WebDriver.
#[derive(Debug, Clone)]
pub struct PageProbe<'a> {
    driver: &'a WebDriver,
}

impl<'a> PageProbe<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    async fn script(&self, source: &str, args: Vec<Value>) -> Result<Value> {
        let ret = self
            .driver
            .execute(source, args)
            .await
            .with_context(|| format!("executing script: {source}"))?;
        Ok(ret.json().clone())
    }

    pub async fn hash(&self) -> Result<String> {
        let value = self.script("return window.location.hash;", vec![]).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    pub async fn is_shown(&self, page: Page) -> Result<bool> {
        let value = self
            .script(PAGE_SHOWN_JS, vec![Value::from(page.element_id())])
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    pub async fn body_style(&self, property: &str) -> Result<String> {
        let value = self
            .script(
                "return document.body.style.getPropertyValue(arguments[0]);",
                vec![Value::from(property)],
            )
            .await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Wait until `page` is on screen with its fade-in finished.
    pub async fn wait_for_page(&self, page: Page) -> Result<()> {
        let started = Instant::now();
        while started.elapsed() < SETTLE_TIMEOUT {
            if self.is_shown(page).await? {
                return Ok(());
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        bail!("{page} page did not settle within {SETTLE_TIMEOUT:?}")
    }

    pub async fn click(&self, selector: &str) -> Result<()> {
        self.driver
            .find(By::Css(selector))
            .await
            .with_context(|| format!("finding {selector}"))?
            .click()
            .await
            .with_context(|| format!("clicking {selector}"))?;
        Ok(())
    }

    pub async fn open_from_home(&self, page: Page) -> Result<()> {
        self.click(&format!("#homepage .category[data-page='{}']", page.name()))
            .await?;
        self.wait_for_page(page).await
    }

    pub async fn grid_len(&self) -> Result<usize> {
        let items = self
            .driver
            .find_all(By::Css("#album-grid .grid-item"))
            .await
            .context("listing grid items")?;
        Ok(items.len())
    }

    /// Names of the filter buttons currently marked active.
    pub async fn active_filters(&self) -> Result<Vec<String>> {
        let buttons = self
            .driver
            .find_all(By::Css(".filter-btn.active"))
            .await
            .context("listing active filter buttons")?;
        let mut names = Vec::with_capacity(buttons.len());
        for button in buttons {
            if let Some(name) = button.attr("data-filter").await? {
                names.push(name);
            }
        }
        Ok(names)
    }

    pub async fn select_filter(&self, filter: AlbumFilter) -> Result<()> {
        self.click(&format!(".filter-btn[data-filter='{}']", filter.name()))
            .await?;
        tokio::time::sleep(POLL_INTERVAL).await;
        Ok(())
    }
}
