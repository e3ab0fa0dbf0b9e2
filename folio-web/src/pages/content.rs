use folio_core::Page;
use yew::prelude::*;

use crate::app::use_navigator;
use crate::components::NavArrows;

#[derive(Properties, PartialEq, Clone)]
pub struct ContentPageProps {
    pub page: Page,
    #[prop_or_default]
    pub children: Html,
}

/// Full-screen overlay shared by the content pages.
///
/// Rendered hidden; the transition steps reveal it, tint it and fade it in.
#[function_component(ContentPage)]
pub fn content_page(props: &ContentPageProps) -> Html {
    let navigate = use_navigator();
    let on_back = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Page::Home))
    };

    html! {
        <div id={props.page.element_id()} class="page-content hidden" data-page={props.page.name()}>
            <div id="backButton" role="button" aria-label="Back to home" onclick={on_back}>
                { "\u{2039}" }
            </div>
            <NavArrows page={props.page} on_navigate={navigate} />
            { props.children.clone() }
        </div>
    }
}
