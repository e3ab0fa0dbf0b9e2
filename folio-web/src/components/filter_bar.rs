use folio_core::AlbumFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    pub active: AlbumFilter,
    #[prop_or_default]
    pub on_select: Callback<AlbumFilter>,
}

/// One button per filter; only the active one carries `active`.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    html! {
        <div class="filter-controls" role="toolbar" aria-label="Filter albums">
            { for AlbumFilter::ALL.into_iter().map(|filter| {
                let active = filter == props.active;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(filter));
                html! {
                    <button
                        key={filter.name()}
                        class={classes!("filter-btn", active.then_some("active"))}
                        data-filter={filter.name()}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        { filter.label() }
                    </button>
                }
            }) }
        </div>
    }
}
