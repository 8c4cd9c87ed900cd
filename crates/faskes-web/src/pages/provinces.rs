//! Provinces listing page

use chrono::NaiveDate;
use dioxus::prelude::*;
use faskes_core::seo::seo_text;
use faskes_core::{filter_provinces, ProvinceListItem};

use super::{page_title, with_doctype, PROVINCES_HREF, PROVINCES_LABEL};
use crate::components::{Breadcrumbs, Crumb, Layout, ProvinceList, SearchBar, SeoText};

#[derive(Props, Clone, PartialEq)]
pub struct ProvincesPageProps {
    /// Full precomputed list, never reordered by the page
    pub provinces_list: Vec<ProvinceListItem>,
    /// Date stamped into the SEO copy
    pub today: NaiveDate,
    /// Query the search box starts with
    #[props(default)]
    pub initial_query: String,
    #[props(default)]
    pub site_title: String,
}

/// Searchable list of all provinces.
///
/// The query lives in page-local state and is dropped when the page unmounts.
#[allow(non_snake_case)]
pub fn ProvincesPage(props: ProvincesPageProps) -> Element {
    let query = use_signal(|| props.initial_query.clone());

    rsx! {
        ProvincesView {
            provinces_list: props.provinces_list,
            today: props.today,
            query,
            site_title: props.site_title,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProvincesViewProps {
    pub provinces_list: Vec<ProvinceListItem>,
    pub today: NaiveDate,
    /// Written by the search box on every keystroke
    pub query: Signal<String>,
    pub site_title: String,
}

/// Provinces page body for a given query signal.
///
/// Reading the signal subscribes this view, so each write re-filters the
/// list in the next render without remounting the page.
#[allow(non_snake_case)]
pub fn ProvincesView(props: ProvincesViewProps) -> Element {
    let query = props.query;
    let visible = filter_provinces(&props.provinces_list, &query());
    let seo = seo_text(props.today);
    let title = page_title(PROVINCES_LABEL, &props.site_title);

    rsx! {
        Layout {
            title,
            description: seo.clone(),

            Breadcrumbs { crumbs: vec![Crumb::new(PROVINCES_LABEL, PROVINCES_HREF)] }
            h1 { class: "page-title", "{PROVINCES_LABEL}" }
            SearchBar { query }
            ProvinceList { items: visible }
            SeoText { text: seo }
        }
    }
}

/// Render the provinces page to a complete HTML document.
pub fn render_provinces_page(props: ProvincesPageProps) -> String {
    let mut dom = VirtualDom::new_with_props(ProvincesPage, props);
    dom.rebuild_in_place();
    with_doctype(&dioxus_ssr::render(&dom))
}
