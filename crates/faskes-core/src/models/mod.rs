//! Data models for the Faskes site

mod list_item;
mod province;

pub use list_item::{build_province_list, ProvinceListItem};
pub use province::{ProvinceEntry, ProvinceRecord};
