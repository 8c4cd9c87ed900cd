//! SEO copy for the generated pages

use chrono::NaiveDate;

use crate::date::format_date;

/// SEO sentence for the provinces page, stamped with `date`.
#[must_use]
pub fn seo_text(date: NaiveDate) -> String {
    format!(
        "Cari & Temukan Informasi Fasilitas Kesehatan (Faskes) & Alat Kesehatan (Alkes) untuk COVID-19 di seluruh Indonesia per {}",
        format_date(date)
    )
}

/// SEO sentence for a single province page.
#[must_use]
pub fn province_seo_text(province_name: &str, date: NaiveDate) -> String {
    format!(
        "Cari & Temukan Informasi Fasilitas Kesehatan (Faskes) & Alat Kesehatan (Alkes) untuk COVID-19 di Provinsi {province_name} per {}",
        format_date(date)
    )
}

/// Accessible name of the link to a province page.
#[must_use]
pub fn province_link_label(province_name: &str) -> String {
    format!("Informasi Faskes & Alkes untuk COVID-19 di Provinsi {province_name}")
}
