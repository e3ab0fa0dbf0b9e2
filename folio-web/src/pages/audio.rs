use folio_core::{AlbumFilter, Page};
use yew::prelude::*;

use crate::albums::{AlbumGridState, GridAction};
use crate::components::{AlbumGrid, FilterBar};
use crate::pages::ContentPage;

#[derive(Properties, PartialEq, Clone)]
pub struct AudioPageProps {
    pub grid: UseReducerHandle<AlbumGridState>,
}

#[function_component(AudioPage)]
pub fn audio_page(props: &AudioPageProps) -> Html {
    let on_select = {
        let grid = props.grid.clone();
        Callback::from(move |filter: AlbumFilter| grid.dispatch(GridAction::Filter(filter)))
    };

    html! {
        <ContentPage page={Page::Audio}>
            <div class="audio-content">
                <div class="content-header">
                    <h1>{ Page::Audio.title() }</h1>
                    <p>{ "Records I have produced, engineered, mixed or mastered." }</p>
                </div>
                <FilterBar active={props.grid.view.filter} {on_select} />
                <AlbumGrid albums={props.grid.view.visible.clone()} />
            </div>
        </ContentPage>
    }
}
