//! Province record model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One healthcare facility or equipment entry attached to a province.
///
/// The shape of an entry depends on the upstream sheet it was exported from,
/// so it is kept as an ordered JSON object. Only the detail page looks inside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvinceEntry(Map<String, Value>);

impl ProvinceEntry {
    /// Wrap an already parsed JSON object
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Fields in dataset order, with values rendered as display text.
    ///
    /// Strings are returned without quotes, `null` becomes `-`, and any
    /// other value uses its JSON representation.
    pub fn display_fields(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.0.iter().map(|(key, value)| {
            let text = match value {
                Value::String(text) => text.clone(),
                Value::Null => "-".to_string(),
                other => other.to_string(),
            };
            (key.as_str(), text)
        })
    }

    /// Check if the entry carries no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A province and its healthcare resource entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceRecord {
    /// Display name, e.g. "Jawa Barat"
    pub name: String,
    /// URL slug, e.g. "jawa-barat"
    pub slug: String,
    /// Raw entries exported for this province
    pub data: Vec<ProvinceEntry>,
}

impl ProvinceRecord {
    /// Create a record with the given name, slug and entries
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<String>, data: Vec<ProvinceEntry>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            data,
        }
    }

    /// Number of entries recorded for this province
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(value: Value) -> ProvinceEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn entry_display_fields_keep_dataset_order() {
        let entry = entry(json!({
            "nama": "RSUD Cibinong",
            "kebutuhan": "APD",
            "jumlah": 120,
            "kontak": null
        }));

        let fields: Vec<(&str, String)> = entry.display_fields().collect();
        assert_eq!(
            fields,
            vec![
                ("nama", "RSUD Cibinong".to_string()),
                ("kebutuhan", "APD".to_string()),
                ("jumlah", "120".to_string()),
                ("kontak", "-".to_string()),
            ]
        );
    }

    #[test]
    fn record_deserializes_from_dataset_shape() {
        let record: ProvinceRecord = serde_json::from_value(json!({
            "name": "Bali",
            "slug": "bali",
            "data": [{ "nama": "RSUP Sanglah" }, {}]
        }))
        .unwrap();

        assert_eq!(record.name, "Bali");
        assert_eq!(record.entry_count(), 2);
        assert!(record.data[1].is_empty());
    }
}
