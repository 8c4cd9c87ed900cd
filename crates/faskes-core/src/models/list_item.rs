//! Province list item, the render-ready view of a province record

use serde::{Deserialize, Serialize};

use super::ProvinceRecord;
use crate::util::get_initial;

/// A province as shown in the provinces list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceListItem {
    /// Abbreviation shown in the list avatar
    pub initials: String,
    /// Display name
    pub name: String,
    /// URL slug of the province detail page
    pub slug: String,
    /// Number of entries at build time
    pub count: usize,
}

impl ProvinceListItem {
    /// Derive the list item for a single record
    #[must_use]
    pub fn from_record(record: &ProvinceRecord) -> Self {
        Self {
            initials: get_initial(&record.name),
            name: record.name.clone(),
            slug: record.slug.clone(),
            count: record.entry_count(),
        }
    }

    /// Path of the province detail page
    #[must_use]
    pub fn href(&self) -> String {
        format!("/provinces/{}", self.slug)
    }
}

impl From<&ProvinceRecord> for ProvinceListItem {
    fn from(record: &ProvinceRecord) -> Self {
        Self::from_record(record)
    }
}

/// Build the provinces list from the dataset, one item per record in order.
#[must_use]
pub fn build_province_list(records: &[ProvinceRecord]) -> Vec<ProvinceListItem> {
    records.iter().map(ProvinceListItem::from_record).collect()
}
