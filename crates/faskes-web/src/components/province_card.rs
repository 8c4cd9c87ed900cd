//! Province card component

use dioxus::prelude::*;
use faskes_core::seo::province_link_label;
use faskes_core::ProvinceListItem;

/// A single province row linking to its detail page
#[component]
pub fn ProvinceCard(item: ProvinceListItem) -> Element {
    let href = item.href();
    let label = province_link_label(&item.name);

    rsx! {
        li {
            class: "province-item",

            a {
                href: "{href}",
                aria_label: "{label}",
                title: "{label}",

                span {
                    class: "province-initials",
                    aria_hidden: "true",
                    "{item.initials}"
                }
                div {
                    class: "province-text",
                    p { class: "province-name", "{item.name}" }
                    p { class: "province-count", "{item.count} Entri" }
                }
            }
        }
    }
}
