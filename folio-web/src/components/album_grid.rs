use std::rc::Rc;

use folio_core::AlbumRecord;
use yew::prelude::*;

pub const GRID_ID: &str = "album-grid";

#[derive(Properties, PartialEq, Clone)]
pub struct AlbumCardProps {
    pub album: AlbumRecord,
}

/// One album tile linking out to the release page.
#[function_component(AlbumCard)]
pub fn album_card(props: &AlbumCardProps) -> Html {
    let album = &props.album;
    html! {
        <a class="grid-item" href={album.url.clone()} target="_blank" rel="noopener noreferrer">
            <img src={album.img.clone()} alt={album.title.clone()} loading="lazy" />
            <div class="item-info">
                <span class="title"><i>{ album.title.clone() }</i>{ format!(" ({})", album.year) }</span>
                <span class="artist">{ album.artist.clone() }</span>
                <span class="role">{ album.role_line() }</span>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AlbumGridProps {
    pub albums: Rc<[AlbumRecord]>,
}

/// Renders exactly the records it is given, in order.
#[function_component(AlbumGrid)]
pub fn album_grid(props: &AlbumGridProps) -> Html {
    html! {
        <div id={GRID_ID} class="grid">
            { for props.albums.iter().enumerate().map(|(idx, album)| html! {
                <AlbumCard key={format!("{idx}-{}", album.title)} album={album.clone()} />
            }) }
        </div>
    }
}
