use crate::domain::model::{CategoryId, CategoryRecord, ProductRecord, TagId, TagRecord};
use crate::domain::ports::{CategoryLookup, ProductLookup, TagLookup};
use async_trait::async_trait;
use std::collections::HashMap;

/// Catalog held in memory and keyed the same way the lookup ports are.
/// Records under one key keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    categories: HashMap<CategoryId, Vec<CategoryRecord>>,
    tags: HashMap<CategoryId, Vec<TagRecord>>,
    products: HashMap<TagId, Vec<ProductRecord>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryRecord) -> Self {
        self.insert_category(category);
        self
    }

    pub fn with_tag(mut self, category_id: CategoryId, tag: TagRecord) -> Self {
        self.insert_tag(category_id, tag);
        self
    }

    pub fn with_product(mut self, tag_id: TagId, product: ProductRecord) -> Self {
        self.insert_product(tag_id, product);
        self
    }

    pub fn insert_category(&mut self, category: CategoryRecord) {
        self.categories.entry(category.id).or_default().push(category);
    }

    pub fn insert_tag(&mut self, category_id: CategoryId, tag: TagRecord) {
        self.tags.entry(category_id).or_default().push(tag);
    }

    pub fn insert_product(&mut self, tag_id: TagId, product: ProductRecord) {
        self.products.entry(tag_id).or_default().push(product);
    }

    pub fn category_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn product_count(&self) -> usize {
        self.products.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl CategoryLookup for InMemoryCatalog {
    async fn categories_by_id(&self, category_id: CategoryId) -> Vec<CategoryRecord> {
        self.categories
            .get(&category_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl TagLookup for InMemoryCatalog {
    async fn tags_by_category_id(&self, category_id: CategoryId) -> Vec<TagRecord> {
        self.tags.get(&category_id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ProductLookup for InMemoryCatalog {
    async fn products_by_tag_id(&self, tag_id: TagId) -> Vec<ProductRecord> {
        self.products.get(&tag_id).cloned().unwrap_or_default()
    }
}
