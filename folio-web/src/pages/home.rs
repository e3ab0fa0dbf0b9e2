use folio_core::Page;
use yew::prelude::*;

use crate::app::{AppContext, use_navigator};

/// Landing view: one colored tile per content page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigate = use_navigator();
    let accents = use_context::<AppContext>()
        .map(|ctx| ctx.config().accents.clone())
        .unwrap_or_default();

    html! {
        <>
            <header class="title-bar">{ "Folio" }</header>
            <p class="intro">{ "Audio engineering, music and software." }</p>
            <div id={Page::Home.element_id()}>
                <div class="category-wrapper">
                    { for Page::CONTENT.into_iter().map(|page| {
                        let navigate = navigate.clone();
                        let onclick = Callback::from(move |_: MouseEvent| navigate.emit(page));
                        let style = accents
                            .for_page(page)
                            .map(|accent| format!("background-color: {accent}"));
                        html! {
                            <div
                                key={page.name()}
                                class="category"
                                role="button"
                                data-page={page.name()}
                                {style}
                                {onclick}
                            >
                                <span>{ page.title() }</span>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </>
    }
}
