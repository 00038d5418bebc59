pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{fixed::FixedLookups, in_memory::InMemoryCatalog};
pub use config::toml_config::CatalogConfig;
pub use core::detail_view::{CategoryDetailResponse, CategoryDetailView};
pub use domain::image_url::ImageUrlBuilder;
pub use domain::services::CategoryDetailService;
pub use utils::error::{CatalogError, Result};
