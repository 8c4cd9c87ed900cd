use std::fs;
use std::path::{Path, PathBuf};

use faskes_core::date::Clock;
use faskes_core::util::slugify;
use faskes_core::ProvinceRecord;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::pages::{
    render_province_page, render_provinces_page, ProvinceDetailPageProps, ProvincesPageProps,
};
use crate::static_props::get_static_props;

const PROPS_FILE: &str = "props.json";

/// Summary of a static build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: usize,
}

/// Generate every province page under `config.out_dir`.
///
/// Layout: `provinces/index.html`, `provinces/props.json` and one
/// `provinces/{slug}/index.html` per province. The root `index.html` is a
/// copy of the provinces page.
pub fn run_build(
    config: &SiteConfig,
    records: &[ProvinceRecord],
    clock: &dyn Clock,
) -> Result<BuildReport, SiteError> {
    ensure_safe_slugs(records)?;
    let today = clock.today();
    let provinces_dir = config.out_dir.join("provinces");
    fs::create_dir_all(&provinces_dir)?;

    let static_props = get_static_props(records);
    write_file(
        &provinces_dir.join(PROPS_FILE),
        &serde_json::to_string_pretty(&static_props)?,
    )?;

    let listing = render_provinces_page(ProvincesPageProps {
        provinces_list: static_props.props.provinces_list,
        today,
        initial_query: String::new(),
        site_title: config.site_title.clone(),
    });
    write_file(&provinces_dir.join("index.html"), &listing)?;
    write_file(&config.out_dir.join("index.html"), &listing)?;
    let mut pages = 1;

    for record in records {
        let page = render_province_page(ProvinceDetailPageProps {
            province: record.clone(),
            today,
            site_title: config.site_title.clone(),
        });
        let page_dir = provinces_dir.join(&record.slug);
        fs::create_dir_all(&page_dir)?;
        write_file(&page_dir.join("index.html"), &page)?;
        pages += 1;
    }

    tracing::info!(
        out_dir = %config.out_dir.display(),
        pages,
        "Static build complete"
    );
    Ok(BuildReport {
        out_dir: config.out_dir.clone(),
        pages,
    })
}

/// Every slug names a directory under `provinces/`, so it must stay a single
/// plain path segment.
fn ensure_safe_slugs(records: &[ProvinceRecord]) -> Result<(), SiteError> {
    match records.iter().find(|record| slugify(&record.slug) != record.slug) {
        Some(record) => Err(faskes_core::Error::InvalidDataset(format!(
            "province `{}` has malformed slug `{}`",
            record.name, record.slug
        ))
        .into()),
        None => Ok(()),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), SiteError> {
    fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}
