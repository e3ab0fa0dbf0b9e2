use anyhow::Result;
use folio_core::AlbumCatalog;
use std::sync::Arc;
use thirtyfour::prelude::*;

use crate::logic::ScenarioResult;

pub mod filters;
pub mod navigation;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub verbose: bool,
    /// Catalog the site is expected to serve, when one was loaded.
    pub catalog: Option<Arc<AlbumCatalog>>,
}

impl ScenarioCtx {
    /// Base URL with `fragment` (no `#`) appended.
    pub fn url_with_fragment(&self, fragment: &str) -> String {
        let base = self.base_url.split('#').next().unwrap_or_default();
        if fragment.is_empty() {
            base.to_string()
        } else {
            format!("{base}#{fragment}")
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario: Send + Sync {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

// A scenario with both a browser run and an offline check
pub trait Scenario: BrowserScenario {
    fn key(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn run_logic(&self, catalog: &AlbumCatalog) -> ScenarioResult;
}

pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(smoke::SmokeScenario),
        Box::new(navigation::NavigationScenario),
        Box::new(filters::FiltersScenario),
    ]
}

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    all_scenarios()
        .into_iter()
        .find(|scenario| scenario.key() == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .iter()
        .map(|scenario| (scenario.key(), scenario.description()))
        .collect()
}
