//! DOM side of the page transition steps.

use folio_core::{InlineStyle, Page, Reveal};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;
use crate::sticky::StickyFilters;

pub const PAGE_CONTENT: &str = ".page-content";
const HIDDEN_CLASS: &str = "hidden";
const BACK_BUTTON: &str = "#backButton";

pub fn apply_inline(element: &HtmlElement, style: InlineStyle) {
    dom::set_style(element, "transition", style.transition);
    dom::set_style(element, "opacity", style.opacity);
    dom::set_style(element, "transform", style.transform);
}

fn page_containers() -> Vec<HtmlElement> {
    dom::query_all(&format!("{PAGE_CONTENT}, #{}", Page::Home.element_id()))
}

/// Clear whatever an interrupted transition left behind.
pub fn reset_styles() {
    for element in page_containers() {
        apply_inline(&element, InlineStyle::CLEARED);
    }
}

pub fn fade_out_visible() {
    for element in dom::query_all(&format!("{PAGE_CONTENT}:not(.{HIDDEN_CLASS})")) {
        apply_inline(&element, InlineStyle::FADE_OUT);
    }
}

pub fn hide_content_pages() {
    for element in dom::query_all(PAGE_CONTENT) {
        let _ = element.class_list().add_1(HIDDEN_CLASS);
        dom::set_style(&element, "display", "none");
        apply_inline(&element, InlineStyle::CLEARED);
    }
    StickyFilters::reset();
}

/// Put the target container on screen in its pre-animation state.
pub fn reveal(reveal: &Reveal) {
    let id = reveal.page.element_id();
    let Some(element) = dom::element_by_id(id) else {
        log::error!("page container #{id} is missing");
        return;
    };

    let _ = element.class_list().remove_1(HIDDEN_CLASS);
    dom::set_style(&element, "display", reveal.display);
    apply_inline(&element, reveal.from);

    if let Some(background) = &reveal.background {
        dom::set_style(&element, "background-color", background);
    }
    if let Some(tint) = &reveal.back_tint
        && let Ok(Some(back)) = element.query_selector(BACK_BUTTON)
        && let Ok(back) = back.dyn_into::<HtmlElement>()
    {
        dom::set_style(&back, "background-color", tint);
    }
    if let Some(background) = &reveal.body_background {
        dom::set_body_style("background-color", background);
    }
    dom::set_body_style("overflow", reveal.body_overflow.css());
}

pub fn fade_in(page: Page, to: InlineStyle) {
    if let Some(element) = dom::element_by_id(page.element_id()) {
        apply_inline(&element, to);
    }
}
