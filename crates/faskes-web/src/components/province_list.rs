//! Province list component

use dioxus::prelude::*;
use faskes_core::ProvinceListItem;

use super::ProvinceCard;

/// List of provinces currently matching the search.
///
/// No match renders an empty list rather than a message.
#[component]
pub fn ProvinceList(items: Vec<ProvinceListItem>) -> Element {
    rsx! {
        ul {
            class: "province-list",

            for item in items {
                {
                    let slug = item.slug.clone();
                    rsx! {
                        ProvinceCard { key: "{slug}", item }
                    }
                }
            }
        }
    }
}
