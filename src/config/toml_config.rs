use crate::adapters::in_memory::InMemoryCatalog;
use crate::domain::image_url::LEGACY_MEDIA_SCHEME;
use crate::domain::model::{CategoryId, CategoryRecord, ProductId, ProductRecord, TagId, TagRecord};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Catalog file: optional media settings plus flat fixture tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub media: Option<MediaSection>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub tags: Vec<TagEntry>,
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSection {
    pub host: Option<String>,
    pub scheme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub category_id: CategoryId,
    pub id: TagId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub tag_id: TagId,
    pub id: ProductId,
    pub name: String,
    pub image: String,
}

impl MediaSection {
    pub fn validate_section(&self, prefix: &str) -> Result<()> {
        if let Some(scheme) = &self.scheme {
            validation::validate_scheme(&format!("{}.scheme", prefix), scheme)?;
        }
        if let Some(host) = &self.host {
            let scheme = self.scheme.as_deref().unwrap_or(LEGACY_MEDIA_SCHEME);
            validation::validate_media_host(&format!("{}.host", prefix), scheme, host)?;
        }
        Ok(())
    }
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog file: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(media) = &self.media {
            media.validate_section("media")?;
        }

        validation::validate_unique_ids("categories", self.categories.iter().map(|c| c.id))?;

        let mut tags_per_category: HashMap<CategoryId, Vec<TagId>> = HashMap::new();
        for tag in &self.tags {
            tags_per_category
                .entry(tag.category_id)
                .or_default()
                .push(tag.id);
        }
        for (category_id, tag_ids) in tags_per_category {
            validation::validate_unique_ids(&format!("tags[category_id={}]", category_id), tag_ids)?;
        }

        for category in &self.categories {
            validation::validate_non_empty_string(
                &format!("categories[id={}].name", category.id),
                &category.name,
            )?;
        }
        for product in &self.products {
            validation::validate_non_empty_string(
                &format!("products[id={}].image", product.id),
                &product.image,
            )?;
        }

        Ok(())
    }

    /// File order is kept for every key.
    pub fn to_catalog(&self) -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        for category in &self.categories {
            catalog.insert_category(category.clone());
        }
        for tag in &self.tags {
            catalog.insert_tag(tag.category_id, TagRecord::new(tag.id));
        }
        for product in &self.products {
            catalog.insert_product(
                product.tag_id,
                ProductRecord::new(product.id, product.name.clone(), product.image.clone()),
            );
        }
        catalog
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CategoryLookup, ProductLookup, TagLookup};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"
[media]
host = "cdn.example.com"
scheme = "https"

[[categories]]
id = 1
name = "Category 1"

[[tags]]
category_id = 1
id = 2

[[tags]]
category_id = 1
id = 1

[[products]]
tag_id = 1
id = 1
name = "Product 1"
image = "image_1.jpg"
"#;

    #[tokio::test]
    async fn test_parse_catalog_file() {
        let config = CatalogConfig::from_toml_str(CATALOG).unwrap();
        assert!(config.validate().is_ok());

        let media = config.media.clone().unwrap();
        assert_eq!(media.host.as_deref(), Some("cdn.example.com"));

        let catalog = config.to_catalog();
        assert_eq!(catalog.categories_by_id(1).await[0].name, "Category 1");
        assert_eq!(
            catalog.tags_by_category_id(1).await,
            vec![TagRecord::new(2), TagRecord::new(1)]
        );
        assert_eq!(catalog.products_by_tag_id(1).await.len(), 1);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CATALOG_TEST_MEDIA_HOST", "media.internal");

        let config = CatalogConfig::from_toml_str(
            "[media]\nhost = \"${CATALOG_TEST_MEDIA_HOST}\"\nscheme = \"${CATALOG_TEST_UNSET_VAR}\"\n",
        )
        .unwrap();
        let media = config.media.unwrap();
        assert_eq!(media.host.as_deref(), Some("media.internal"));
        assert_eq!(media.scheme.as_deref(), Some("${CATALOG_TEST_UNSET_VAR}"));

        std::env::remove_var("CATALOG_TEST_MEDIA_HOST");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let config = CatalogConfig::from_toml_str(
            r#"
[[categories]]
id = 1
name = "A"

[[categories]]
id = 1
name = "B"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = CatalogConfig::from_toml_str(
            r#"
[[tags]]
category_id = 1
id = 5

[[tags]]
category_id = 2
id = 5

[[tags]]
category_id = 1
id = 5
"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tags[category_id=1]"));
    }

    #[test]
    fn test_media_host_that_would_move_the_path_is_rejected() {
        for host in ["cdn?x=1", "cdn#frag", "user@cdn.example.com"] {
            let config =
                CatalogConfig::from_toml_str(&format!("[media]\nhost = \"{}\"\n", host)).unwrap();
            assert!(config.validate().is_err(), "{} should be rejected", host);
        }
    }

    #[test]
    fn test_invalid_media_scheme_is_rejected() {
        let config = CatalogConfig::from_toml_str("[media]\nscheme = \"ht tp\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = CatalogConfig::from_toml_str("[[categories]]\nid = \"one\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(CATALOG.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.products[0].image, "image_1.jpg");
    }
}
