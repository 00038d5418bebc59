use crate::domain::model::{CategoryId, CategoryRecord, ProductRecord, TagId, TagRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// Categories matching an id. An empty result means the category does not exist.
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    async fn categories_by_id(&self, category_id: CategoryId) -> Vec<CategoryRecord>;
}

/// Tags of a category, in source order. Empty is a valid answer.
#[async_trait]
pub trait TagLookup: Send + Sync {
    async fn tags_by_category_id(&self, category_id: CategoryId) -> Vec<TagRecord>;
}

/// Products of a tag, in source order. Empty is a valid answer.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn products_by_tag_id(&self, tag_id: TagId) -> Vec<ProductRecord>;
}

pub trait MediaConfigProvider: Send + Sync {
    fn media_host(&self) -> &str;
    fn media_scheme(&self) -> &str;
}

#[async_trait]
impl<L: CategoryLookup + ?Sized> CategoryLookup for Arc<L> {
    async fn categories_by_id(&self, category_id: CategoryId) -> Vec<CategoryRecord> {
        (**self).categories_by_id(category_id).await
    }
}

#[async_trait]
impl<L: TagLookup + ?Sized> TagLookup for Arc<L> {
    async fn tags_by_category_id(&self, category_id: CategoryId) -> Vec<TagRecord> {
        (**self).tags_by_category_id(category_id).await
    }
}

#[async_trait]
impl<L: ProductLookup + ?Sized> ProductLookup for Arc<L> {
    async fn products_by_tag_id(&self, tag_id: TagId) -> Vec<ProductRecord> {
        (**self).products_by_tag_id(tag_id).await
    }
}
