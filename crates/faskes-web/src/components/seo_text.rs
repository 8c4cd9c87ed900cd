//! SEO copy at the bottom of a page

use dioxus::prelude::*;

#[component]
pub fn SeoText(#[props(into)] text: String) -> Element {
    rsx! {
        section {
            class: "seo-text",
            p { "{text}" }
        }
    }
}
