//! Document head and body shared by every page

use dioxus::prelude::*;

/// Head and body of a page; the `<html>` root is added when the page is
/// written out as a document.
#[component]
pub fn Layout(
    #[props(into)] title: String,
    #[props(into)] description: String,
    children: Element,
) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{title}" }
            meta { name: "description", content: "{description}" }
        }
        body {
            main {
                class: "container",
                {children}
            }
        }
    }
}
