use crate::domain::model::{CategoryId, CategoryRecord, ProductRecord, TagId, TagRecord};
use crate::domain::ports::{CategoryLookup, ProductLookup, TagLookup};
use async_trait::async_trait;

/// Lookups that ignore the key and always answer with the same lists.
#[derive(Debug, Clone, Default)]
pub struct FixedLookups {
    categories: Vec<CategoryRecord>,
    tags: Vec<TagRecord>,
    products: Vec<ProductRecord>,
}

impl FixedLookups {
    pub fn new(
        categories: Vec<CategoryRecord>,
        tags: Vec<TagRecord>,
        products: Vec<ProductRecord>,
    ) -> Self {
        Self {
            categories,
            tags,
            products,
        }
    }

    /// Two categories, two tags and two products, served for every id.
    pub fn sample() -> Self {
        Self::new(
            vec![
                CategoryRecord::new(1, "Category 1"),
                CategoryRecord::new(2, "Category 2"),
            ],
            vec![TagRecord::new(1), TagRecord::new(2)],
            vec![
                ProductRecord::new(1, "Product 1", "image_1.jpg"),
                ProductRecord::new(2, "Product 2", "image_2.jpg"),
            ],
        )
    }
}

#[async_trait]
impl CategoryLookup for FixedLookups {
    async fn categories_by_id(&self, category_id: CategoryId) -> Vec<CategoryRecord> {
        tracing::debug!(category_id, count = self.categories.len(), "fixed category lookup");
        self.categories.clone()
    }
}

#[async_trait]
impl TagLookup for FixedLookups {
    async fn tags_by_category_id(&self, category_id: CategoryId) -> Vec<TagRecord> {
        tracing::debug!(category_id, count = self.tags.len(), "fixed tag lookup");
        self.tags.clone()
    }
}

#[async_trait]
impl ProductLookup for FixedLookups {
    async fn products_by_tag_id(&self, tag_id: TagId) -> Vec<ProductRecord> {
        tracing::debug!(tag_id, count = self.products.len(), "fixed product lookup");
        self.products.clone()
    }
}
