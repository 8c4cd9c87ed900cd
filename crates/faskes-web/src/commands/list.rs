use faskes_core::{build_province_list, filter_provinces, ProvinceListItem, ProvinceRecord};

use crate::error::SiteError;

pub fn run_list(records: &[ProvinceRecord], query: &str, json: bool) -> Result<(), SiteError> {
    let items = filter_provinces(&build_province_list(records), query);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No provinces match \"{query}\"");
        return Ok(());
    }
    for line in format_list_lines(&items) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_list_lines(items: &[ProvinceListItem]) -> Vec<String> {
    let initials_width = items
        .iter()
        .map(|item| item.initials.chars().count())
        .max()
        .unwrap_or(0);

    items
        .iter()
        .map(|item| {
            format!(
                "{:<initials_width$}  {} ({} Entri)  {}",
                item.initials,
                item.name,
                item.count,
                item.href()
            )
        })
        .collect()
}
