use anyhow::Result;
use folio_core::{AlbumCatalog, Page};
use thirtyfour::prelude::*;

use super::{BrowserScenario, Scenario, ScenarioCtx};
use crate::browser::PageProbe;
use crate::logic::{ScenarioResult, catalog_failures};

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let probe = PageProbe::new(driver);
        driver.goto(&ctx.url_with_fragment("")).await?;
        probe.wait_for_page(Page::Home).await?;

        let tiles = driver.find_all(By::Css("#homepage .category")).await?;
        anyhow::ensure!(
            tiles.len() == Page::CONTENT.len(),
            "expected {} homepage tiles, found {}",
            Page::CONTENT.len(),
            tiles.len()
        );

        for page in Page::CONTENT {
            anyhow::ensure!(
                !probe.is_shown(page).await?,
                "{page} page is visible on the homepage"
            );
        }

        let background = probe.body_style("background-color").await?;
        anyhow::ensure!(
            background.contains("18, 18, 18"),
            "unexpected homepage background {background}"
        );

        if ctx.verbose {
            println!("  🏠 Homepage rendered with {} tiles", tiles.len());
        }
        Ok(())
    }
}

impl Scenario for SmokeScenario {
    fn key(&self) -> &'static str {
        "smoke"
    }

    fn description(&self) -> &'static str {
        "Homepage loads; catalog records are renderable"
    }

    fn run_logic(&self, catalog: &AlbumCatalog) -> ScenarioResult {
        ScenarioResult::run("Catalog", || catalog_failures(catalog))
    }
}
