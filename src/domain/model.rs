use serde::{Deserialize, Serialize};

pub type CategoryId = i64;
pub type TagId = i64;
pub type ProductId = i64;

/// Category as returned by a [`CategoryLookup`](crate::domain::ports::CategoryLookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub id: TagId,
}

/// Product as stored; `image` is a storage-relative reference such as a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetail {
    pub id: CategoryId,
    pub name: String,
    pub tags: Vec<TagDetail>,
}

/// Tags carry no name: the tag source never supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDetail {
    pub id: TagId,
    pub products: Vec<ProductDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    /// Absolute delivery URL.
    pub image: String,
}

impl CategoryRecord {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl TagRecord {
    pub fn new(id: TagId) -> Self {
        Self { id }
    }
}

impl ProductRecord {
    pub fn new(id: ProductId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}
