//! Province dataset
//!
//! The site ships with a bundled dataset listing every province. Deployments
//! that export fresher entries can point the site at a JSON file of the same
//! shape: an array of `{ "name", "slug", "data": [...] }` objects, where
//! `slug` may be omitted and is then derived from the name.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{ProvinceEntry, ProvinceRecord};
use crate::util::{normalize_text_option, slugify};

const BUNDLED_DATASET: &str = include_str!("../data/provinces.json");

/// Parse the bundled province dataset.
pub fn provinces() -> Result<Vec<ProvinceRecord>> {
    parse_provinces(BUNDLED_DATASET)
}

/// Load and validate a province dataset from a JSON file.
pub fn load_provinces(path: &Path) -> Result<Vec<ProvinceRecord>> {
    let payload = std::fs::read_to_string(path)?;
    let records = parse_provinces(&payload)?;
    tracing::info!(
        path = %path.display(),
        provinces = records.len(),
        "Loaded province dataset"
    );
    Ok(records)
}

/// Load the dataset at `path`, or the bundled one when no path is given.
pub fn load_or_bundled(path: Option<&Path>) -> Result<Vec<ProvinceRecord>> {
    match path {
        Some(path) => load_provinces(path),
        None => provinces(),
    }
}

/// Parse and validate a province dataset from a raw JSON payload.
///
/// Rejects records with an empty name, and slugs that are empty, repeated, or
/// not already in `slugify` form (so a slug can never name another path).
pub fn parse_provinces(payload: &str) -> Result<Vec<ProvinceRecord>> {
    let raw: Vec<RawProvince> = serde_json::from_str(payload)?;
    let mut seen_slugs = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for (index, province) in raw.into_iter().enumerate() {
        let record = province.into_record(index)?;
        if !seen_slugs.insert(record.slug.clone()) {
            return Err(Error::InvalidDataset(format!(
                "duplicate province slug `{}` at index {index}",
                record.slug
            )));
        }
        records.push(record);
    }

    tracing::debug!(provinces = records.len(), "Parsed province dataset");
    Ok(records)
}

// ---------------------------------------------------------------------------
// Private
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawProvince {
    name: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    data: Vec<ProvinceEntry>,
}

impl RawProvince {
    fn into_record(self, index: usize) -> Result<ProvinceRecord> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidDataset(format!(
                "province at index {index} has an empty name"
            )));
        }

        let slug = normalize_text_option(self.slug).unwrap_or_else(|| slugify(&name));
        if slug.is_empty() {
            return Err(Error::InvalidDataset(format!(
                "province `{name}` has no usable slug"
            )));
        }
        // Slugs become output directories and URL segments.
        if slugify(&slug) != slug {
            return Err(Error::InvalidDataset(format!(
                "province `{name}` has malformed slug `{slug}`"
            )));
        }

        Ok(ProvinceRecord::new(name, slug, self.data))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_dataset_lists_every_province() {
        let records = provinces().unwrap();
        assert_eq!(records.len(), 34);
        assert_eq!(records[0].name, "Aceh");
        assert!(records
            .iter()
            .any(|record| record.slug == "jawa-barat" && record.name == "Jawa Barat"));
    }

    #[test]
    fn missing_slug_is_derived_from_name() {
        let records =
            parse_provinces(r#"[{ "name": "Nusa Tenggara Barat", "data": [{ "nama": "RSUD" }] }]"#)
                .unwrap();

        assert_eq!(records[0].slug, "nusa-tenggara-barat");
        assert_eq!(records[0].entry_count(), 1);
    }

    #[test]
    fn missing_data_defaults_to_no_entries() {
        let records = parse_provinces(r#"[{ "name": "Bali", "slug": "bali" }]"#).unwrap();
        assert!(records[0].data.is_empty());
    }

    #[test]
    fn rejects_empty_name() {
        let err = parse_provinces(r#"[{ "name": "  ", "slug": "blank" }]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let err = parse_provinces(
            r#"[{ "name": "Bali", "slug": "bali" }, { "name": "Bali Lama", "slug": "bali" }]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate province slug `bali`"));
    }

    #[test]
    fn rejects_parent_directory_slug() {
        let err = parse_provinces(r#"[{ "name": "Bali", "slug": "../../escaped" }]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));
        assert!(err.to_string().contains("malformed slug `../../escaped`"));
    }

    #[test]
    fn rejects_absolute_path_slug() {
        let err = parse_provinces(r#"[{ "name": "Bali", "slug": "/tmp/site" }]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));
    }

    #[test]
    fn rejects_slug_with_uppercase_or_spaces() {
        assert!(parse_provinces(r#"[{ "name": "Bali", "slug": "Bali Utara" }]"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_provinces(r#"{ "name": "Bali" }"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn loads_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "name": "Aceh", "slug": "aceh", "data": [{{}}, {{}}] }}]"#
        )
        .unwrap();

        let records = load_or_bundled(Some(file.path())).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entry_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_provinces(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
