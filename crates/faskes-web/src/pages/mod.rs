//! Pages
//!
//! Page-level components and the helpers that render them to HTML.

mod province_detail;
mod provinces;

pub use province_detail::{render_province_page, ProvinceDetailPageProps};
pub use provinces::{render_provinces_page, ProvincesPageProps};

const DOCTYPE: &str = "<!DOCTYPE html>";
const HTML_OPEN: &str = r#"<html lang="id">"#;
const HTML_CLOSE: &str = "</html>";
const PROVINCES_HREF: &str = "/provinces";
const PROVINCES_LABEL: &str = "Provinsi";

fn page_title(page: &str, site_title: &str) -> String {
    if site_title.is_empty() {
        page.to_string()
    } else {
        format!("{page} | {site_title}")
    }
}

/// Wrap rendered head and body markup into a full HTML document.
fn with_doctype(markup: &str) -> String {
    format!("{DOCTYPE}{HTML_OPEN}{markup}{HTML_CLOSE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_markup_in_indonesian_html_root() {
        assert_eq!(
            with_doctype("<head></head><body></body>"),
            r#"<!DOCTYPE html><html lang="id"><head></head><body></body></html>"#
        );
    }

    #[test]
    fn page_title_appends_site_title() {
        assert_eq!(page_title("Provinsi", ""), "Provinsi");
        assert_eq!(page_title("Provinsi", "Faskes"), "Provinsi | Faskes");
    }
}
