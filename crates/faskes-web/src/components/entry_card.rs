//! Entry card for the province detail page

use dioxus::prelude::*;
use faskes_core::ProvinceEntry;

/// One healthcare entry rendered as a definition list
#[component]
pub fn EntryCard(index: usize, entry: ProvinceEntry) -> Element {
    let fields: Vec<(String, String)> = entry
        .display_fields()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    let number = index + 1;

    rsx! {
        li {
            class: "entry-card",

            h2 { class: "entry-number", "Entri #{number}" }

            if fields.is_empty() {
                p { class: "entry-empty", "Tidak ada keterangan" }
            } else {
                dl {
                    for (key, value) in fields {
                        div {
                            key: "{key}",
                            class: "entry-field",
                            dt { "{key}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
