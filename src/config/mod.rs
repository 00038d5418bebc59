pub mod toml_config;

use crate::domain::image_url::{ImageUrlBuilder, DEFAULT_MEDIA_HOST, LEGACY_MEDIA_SCHEME};
use crate::domain::ports::MediaConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::MediaSection;

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-detail")]
#[command(about = "Print the category → tags → products view of a catalog category")]
pub struct CliConfig {
    #[arg(long, allow_negative_numbers = true)]
    pub category_id: i64,

    #[arg(long, help = "TOML catalog file; the built-in sample catalog is used when omitted")]
    pub config: Option<String>,

    #[arg(long, env = "CATALOG_MEDIA_HOST")]
    pub media_host: Option<String>,

    #[arg(long, env = "CATALOG_MEDIA_SCHEME")]
    pub media_scheme: Option<String>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn media_overrides(&self) -> MediaSection {
        MediaSection {
            host: self.media_host.clone(),
            scheme: self.media_scheme.clone(),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_file_extension("config", path, &["toml"])?;
        }
        self.media_overrides().validate_section("media")
    }
}

/// Delivery host and scheme after layering flags over the catalog file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSettings {
    pub host: String,
    pub scheme: String,
}

impl MediaSettings {
    pub fn resolve(overrides: &MediaSection, file: Option<&MediaSection>) -> Self {
        Self {
            host: layered(
                overrides.host.as_ref(),
                file.and_then(|m| m.host.as_ref()),
                DEFAULT_MEDIA_HOST,
            ),
            scheme: layered(
                overrides.scheme.as_ref(),
                file.and_then(|m| m.scheme.as_ref()),
                LEGACY_MEDIA_SCHEME,
            ),
        }
    }

    pub fn image_url_builder(&self) -> ImageUrlBuilder {
        ImageUrlBuilder::from_config(self)
    }
}

fn layered(flag: Option<&String>, from_file: Option<&String>, default: &str) -> String {
    flag.or(from_file)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self::resolve(&MediaSection::default(), None)
    }
}

impl MediaConfigProvider for MediaSettings {
    fn media_host(&self) -> &str {
        &self.host
    }

    fn media_scheme(&self) -> &str {
        &self.scheme
    }
}

impl Validate for MediaSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_scheme("media.scheme", &self.scheme)?;
        validation::validate_media_host("media.host", &self.scheme, &self.host)
    }
}
