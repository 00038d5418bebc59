pub mod detail_view;

pub use crate::domain::model::{CategoryDetail, ProductDetail, TagDetail};
pub use crate::domain::ports::{CategoryLookup, MediaConfigProvider, ProductLookup, TagLookup};
pub use crate::utils::error::Result;
