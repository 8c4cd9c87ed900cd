//! Build-time props for the provinces page

use faskes_core::{build_province_list, ProvinceListItem, ProvinceRecord};
use serde::{Deserialize, Serialize};

/// Props envelope written next to the generated provinces page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticProps {
    pub props: ProvincesPageData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvincesPageData {
    pub provinces_list: Vec<ProvinceListItem>,
}

/// Compute the provinces page props from the dataset.
pub fn get_static_props(records: &[ProvinceRecord]) -> StaticProps {
    StaticProps {
        props: ProvincesPageData {
            provinces_list: build_province_list(records),
        },
    }
}
