//! Province detail page

use chrono::NaiveDate;
use dioxus::prelude::*;
use faskes_core::seo::province_seo_text;
use faskes_core::{ProvinceListItem, ProvinceRecord};

use super::{page_title, with_doctype, PROVINCES_HREF, PROVINCES_LABEL};
use crate::components::{Breadcrumbs, Crumb, EntryCard, Layout, SeoText};

#[derive(Props, Clone, PartialEq)]
pub struct ProvinceDetailPageProps {
    pub province: ProvinceRecord,
    pub today: NaiveDate,
    #[props(default)]
    pub site_title: String,
}

/// Entries recorded for a single province
#[allow(non_snake_case)]
pub fn ProvinceDetailPage(props: ProvinceDetailPageProps) -> Element {
    let province = &props.province;
    let href = ProvinceListItem::from_record(province).href();
    let count = province.entry_count();
    let seo = province_seo_text(&province.name, props.today);
    let title = page_title(&format!("Provinsi {}", province.name), &props.site_title);
    let crumbs = vec![
        Crumb::new(PROVINCES_LABEL, PROVINCES_HREF),
        Crumb::new(province.name.clone(), href),
    ];
    let entries = province.data.clone();

    rsx! {
        Layout {
            title,
            description: seo.clone(),

            Breadcrumbs { crumbs }
            h1 { class: "page-title", "{province.name}" }
            p { class: "entry-count", "{count} Entri" }

            if entries.is_empty() {
                p { class: "empty-state", "Belum ada data untuk provinsi ini." }
            } else {
                ol {
                    class: "entry-list",
                    for (index, entry) in entries.into_iter().enumerate() {
                        EntryCard { key: "{index}", index, entry }
                    }
                }
            }

            SeoText { text: seo }
        }
    }
}

/// Render a province detail page to a complete HTML document.
pub fn render_province_page(props: ProvinceDetailPageProps) -> String {
    let mut dom = VirtualDom::new_with_props(ProvinceDetailPage, props);
    dom.rebuild_in_place();
    with_doctype(&dioxus_ssr::render(&dom))
}
