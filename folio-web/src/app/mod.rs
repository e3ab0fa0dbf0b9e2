use folio_core::SiteConfig;
use yew::prelude::*;

use crate::albums::AlbumGridState;
use crate::pages::{AudioPage, HomePage, MusicPage, SoftwarePage};
use crate::styles::LAYOUT_CSS;

pub mod context;
pub mod manager;
pub mod registry;

pub use context::{AppContext, use_navigator};
pub use manager::PageManager;
pub use registry::{AudioPageController, PageRegistry, Showable, StaticPageController};

const SITE_CONFIG: &str = include_str!("../../static/site.json");

#[must_use]
pub fn site_config() -> SiteConfig {
    SiteConfig::from_json_or_default(SITE_CONFIG)
}

#[function_component(App)]
pub fn app() -> Html {
    let grid = use_reducer(AlbumGridState::default);
    let manager = {
        let dispatcher = grid.dispatcher();
        use_memo((), move |()| PageManager::new(site_config(), dispatcher))
    };

    {
        let manager = manager.clone();
        use_effect_with((), move |()| {
            let listeners = manager.start();
            move || drop(listeners)
        });
    }

    let context = AppContext::new(manager);

    html! {
        <ContextProvider<AppContext> context={context}>
            <style>{ LAYOUT_CSS }</style>
            <HomePage />
            <AudioPage grid={grid} />
            <MusicPage />
            <SoftwarePage />
        </ContextProvider<AppContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_site_config_is_valid() {
        let config = site_config();
        assert_eq!(config, SiteConfig::default_config());
        assert!(config.validate().is_ok());
    }
}
