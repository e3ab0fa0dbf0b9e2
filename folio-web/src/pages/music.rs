use folio_core::Page;
use yew::prelude::*;

use crate::pages::ContentPage;

#[function_component(MusicPage)]
pub fn music_page() -> Html {
    html! {
        <ContentPage page={Page::Music}>
            <div class="music-content">
                <div class="content-header">
                    <h1>{ Page::Music.title() }</h1>
                    <p>{ "Original music, released and in progress." }</p>
                </div>
            </div>
        </ContentPage>
    }
}
