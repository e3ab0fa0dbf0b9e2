use anyhow::Result;
use folio_core::{AlbumCatalog, AlbumFilter, Page};
use thirtyfour::prelude::*;

use super::{BrowserScenario, Scenario, ScenarioCtx};
use crate::browser::PageProbe;
use crate::logic::{ScenarioResult, filter_counts, filter_failures};

pub struct FiltersScenario;

#[async_trait::async_trait]
impl BrowserScenario for FiltersScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let probe = PageProbe::new(driver);
        driver
            .goto(&ctx.url_with_fragment(Page::Audio.title()))
            .await?;
        probe.wait_for_page(Page::Audio).await?;

        let loaded = probe.grid_len().await?;
        anyhow::ensure!(loaded > 0, "album grid is empty after loading");

        let expected = ctx.catalog.as_deref().map(filter_counts);

        for filter in AlbumFilter::ALL {
            probe.select_filter(filter).await?;

            let active = probe.active_filters().await?;
            anyhow::ensure!(
                active == [filter.name()],
                "after selecting '{}' the active buttons are {active:?}",
                filter.name()
            );

            let shown = probe.grid_len().await?;
            if let Some(count) = expected
                .as_ref()
                .and_then(|counts| counts.iter().find(|(f, _)| *f == filter))
                .map(|(_, count)| *count)
            {
                anyhow::ensure!(
                    shown == count,
                    "filter '{}' shows {shown} albums, expected {count}",
                    filter.name()
                );
            }
            if ctx.verbose {
                println!("  🎚️  {} → {shown} albums", filter.label());
            }
        }
        Ok(())
    }
}

impl Scenario for FiltersScenario {
    fn key(&self) -> &'static str {
        "filters"
    }

    fn description(&self) -> &'static str {
        "Album filter buttons narrow the grid and stay exclusive"
    }

    fn run_logic(&self, catalog: &AlbumCatalog) -> ScenarioResult {
        ScenarioResult::run("Filters", || filter_failures(catalog))
    }
}
