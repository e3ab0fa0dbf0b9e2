use folio_core::Page;
use folio_web::app::App;
use folio_web::pages::{ContentPage, HomePage};
use futures::executor::block_on;
use yew::LocalServerRenderer;
use yew::prelude::*;

fn render_app() -> String {
    block_on(LocalServerRenderer::<App>::new().render())
}

#[test]
fn app_renders_every_page_container() {
    let html = render_app();
    for page in Page::ALL {
        assert!(
            html.contains(&format!(r#"id="{}""#, page.element_id())),
            "missing container for {page}"
        );
    }
    assert!(html.contains(r#"id="album-grid""#));
    assert!(html.contains("filter-controls"));
    assert!(html.contains("<style>"));
}

#[test]
fn content_pages_start_hidden_and_home_does_not() {
    let html = render_app();
    assert_eq!(html.matches("page-content hidden").count(), Page::CONTENT.len());
    let home = html.find(r#"id="homepage""#).expect("homepage");
    let home_tag_end = home + html[home..].find('>').expect("tag end");
    assert!(!html[home..home_tag_end].contains("hidden"));
}

#[test]
fn grid_is_empty_until_the_catalog_loads() {
    let html = render_app();
    assert!(html.contains("filter-btn active"));
    assert!(html.contains(r#"data-filter="all""#));
    let grid = html.find(r#"id="album-grid""#).expect("grid");
    let music = html.find(r#"id="music-page""#).expect("music page");
    assert!(!html[grid..music].contains("grid-item"));
}

#[test]
fn home_tiles_use_accent_colors() {
    let html = render_app();
    assert!(html.contains("background-color: #ff5733"));
    assert!(html.contains("background-color: #33f039"));
    assert!(html.contains("background-color: #5733ff"));
}

#[test]
fn home_page_renders_without_app_context() {
    let html = block_on(LocalServerRenderer::<HomePage>::new().render());
    assert!(html.contains("category-wrapper"));
    assert_eq!(html.matches(r#"class="category""#).count(), 3);
}

#[derive(Properties, PartialEq)]
struct FrameProps {
    page: Page,
}

#[function_component(Frame)]
fn frame(props: &FrameProps) -> Html {
    html! {
        <ContentPage page={props.page}>
            <p class="probe">{ "inner" }</p>
        </ContentPage>
    }
}

#[test]
fn content_frame_carries_back_button_and_children() {
    let html = block_on(
        LocalServerRenderer::<Frame>::with_props(FrameProps { page: Page::Music }).render(),
    );
    assert!(html.contains(r#"id="music-page""#));
    assert!(html.contains(r#"id="backButton""#));
    assert!(html.contains(r#"<p class="probe">inner</p>"#));
    assert!(html.contains("nav-arrow-left"));
    assert!(html.contains("nav-arrow-right"));
}
