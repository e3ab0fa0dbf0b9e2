use folio_core::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavArrowsProps {
    pub page: Page,
    #[prop_or_default]
    pub on_navigate: Callback<Page>,
}

/// Arrows to the neighbouring content pages.
#[function_component(NavArrows)]
pub fn nav_arrows(props: &NavArrowsProps) -> Html {
    let arrow = |target: Option<Page>, side: &'static str, glyph: &'static str| {
        target.map_or_else(Html::default, |target| {
            let on_navigate = props.on_navigate.clone();
            let onclick = Callback::from(move |_| on_navigate.emit(target));
            html! {
                <div
                    class={classes!("nav-arrow", format!("nav-arrow-{side}"))}
                    role="button"
                    aria-label={format!("Go to {}", target.title())}
                    data-target={target.name()}
                    {onclick}
                >
                    { glyph }
                </div>
            }
        })
    };

    html! {
        <>
            { arrow(props.page.previous(), "left", "\u{2190}") }
            { arrow(props.page.next(), "right", "\u{2192}") }
        </>
    }
}
