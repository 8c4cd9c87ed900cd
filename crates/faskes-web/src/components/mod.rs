//! UI Components
//!
//! Building blocks shared by the province pages.

mod breadcrumbs;
mod entry_card;
mod layout;
mod province_card;
mod province_list;
mod search_bar;
mod seo_text;

pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use entry_card::EntryCard;
pub use layout::Layout;
pub use province_card::ProvinceCard;
pub use province_list::ProvinceList;
pub use search_bar::SearchBar;
pub use seo_text::SeoText;
