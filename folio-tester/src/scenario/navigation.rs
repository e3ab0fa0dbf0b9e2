use anyhow::Result;
use folio_core::{AlbumCatalog, Page, location_hash};
use thirtyfour::prelude::*;

use super::{BrowserScenario, Scenario, ScenarioCtx};
use crate::browser::PageProbe;
use crate::logic::{ScenarioResult, routing_failures};

pub struct NavigationScenario;

async fn expect_hash(probe: &PageProbe<'_>, page: Page) -> Result<()> {
    let hash = probe.hash().await?;
    let expected = location_hash(page);
    anyhow::ensure!(hash == expected, "expected hash '{expected}', got '{hash}'");
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for NavigationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let probe = PageProbe::new(driver);
        driver.goto(&ctx.url_with_fragment("")).await?;
        probe.wait_for_page(Page::Home).await?;

        probe.open_from_home(Page::Audio).await?;
        expect_hash(&probe, Page::Audio).await?;
        let overflow = probe.body_style("overflow").await?;
        anyhow::ensure!(overflow == "hidden", "content page left body overflow '{overflow}'");

        probe.click("#audio-page .nav-arrow-right").await?;
        probe.wait_for_page(Page::Music).await?;
        expect_hash(&probe, Page::Music).await?;

        probe.click("#music-page #backButton").await?;
        probe.wait_for_page(Page::Home).await?;
        expect_hash(&probe, Page::Home).await?;

        driver.back().await?;
        probe.wait_for_page(Page::Music).await?;
        anyhow::ensure!(
            !probe.is_shown(Page::Audio).await?,
            "audio page still visible after going back"
        );

        driver.goto(&ctx.url_with_fragment("software")).await?;
        probe.wait_for_page(Page::Software).await?;

        if ctx.verbose {
            println!("  🧭 Tiles, arrows, back button and history all routed correctly");
        }
        Ok(())
    }
}

impl Scenario for NavigationScenario {
    fn key(&self) -> &'static str {
        "navigation"
    }

    fn description(&self) -> &'static str {
        "Hash routing, history traversal and page transitions"
    }

    fn run_logic(&self, _catalog: &AlbumCatalog) -> ScenarioResult {
        ScenarioResult::run("Routing", routing_failures)
    }
}
