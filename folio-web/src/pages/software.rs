use folio_core::Page;
use yew::prelude::*;

use crate::pages::ContentPage;

struct Project {
    name: &'static str,
    summary: &'static str,
    url: &'static str,
}

const PROJECTS: [Project; 2] = [
    Project {
        name: "Folio",
        summary: "This site: a Rust and WebAssembly single-page portfolio.",
        url: "https://github.com/",
    },
    Project {
        name: "Session Tools",
        summary: "Small utilities for organising studio sessions and stems.",
        url: "https://github.com/",
    },
];

#[function_component(SoftwarePage)]
pub fn software_page() -> Html {
    html! {
        <ContentPage page={Page::Software}>
            <div class="software-content">
                <div class="content-header">
                    <h1>{ Page::Software.title() }</h1>
                </div>
                <div class="grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <a key={project.name} class="grid-item" href={project.url} target="_blank" rel="noopener noreferrer">
                            <div class="item-info">
                                <span class="title">{ project.name }</span>
                                <span class="role">{ project.summary }</span>
                            </div>
                        </a>
                    }) }
                </div>
            </div>
        </ContentPage>
    }
}
