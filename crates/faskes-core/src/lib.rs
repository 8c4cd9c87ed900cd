//! faskes-core - Core library for the Faskes site
//!
//! This crate contains the province models, the bundled province dataset,
//! and the logic that turns province records into the searchable list shown
//! on the provinces page.

pub mod date;
pub mod error;
pub mod models;
pub mod provinces;
pub mod search;
pub mod seo;
pub mod util;

pub use error::{Error, Result};
pub use models::{build_province_list, ProvinceEntry, ProvinceListItem, ProvinceRecord};
pub use search::filter_provinces;
