//! Search bar component

use dioxus::prelude::*;

const SEARCH_INPUT_ID: &str = "province-search";

/// Search box for filtering provinces by name.
///
/// Every keystroke writes the query signal, which re-renders the list in
/// the same pass. As a plain form it also submits `?q=` for server renders.
#[component]
pub fn SearchBar(query: Signal<String>) -> Element {
    let mut query = query;

    rsx! {
        form {
            class: "search-bar",
            role: "search",
            method: "get",
            action: "/provinces",

            label { r#for: SEARCH_INPUT_ID, "Cari provinsi:" }
            input {
                id: SEARCH_INPUT_ID,
                r#type: "text",
                name: "q",
                placeholder: "Contoh: Jawa Barat",
                autocomplete: "off",
                value: "{query}",
                oninput: move |evt| {
                    query.set(evt.value());
                },
            }
        }
    }
}
