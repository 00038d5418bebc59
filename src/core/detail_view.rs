use crate::core::{CategoryDetail, CategoryLookup, ProductLookup, TagLookup};
use crate::domain::model::CategoryId;
use crate::domain::services::CategoryDetailService;
use crate::utils::error::{CatalogError, Result};

/// Outcome of a category detail request as seen by a caller at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryDetailResponse {
    Ok(Vec<CategoryDetail>),
    /// No payload.
    NotFound,
}

impl CategoryDetailResponse {
    pub fn is_found(&self) -> bool {
        matches!(self, CategoryDetailResponse::Ok(_))
    }

    /// The JSON body, or `None` for a not-found response.
    pub fn to_json(&self, pretty: bool) -> Result<Option<String>> {
        match self {
            CategoryDetailResponse::Ok(details) => {
                let body = if pretty {
                    serde_json::to_string_pretty(details)?
                } else {
                    serde_json::to_string(details)?
                };
                Ok(Some(body))
            }
            CategoryDetailResponse::NotFound => Ok(None),
        }
    }
}

/// Boundary around [`CategoryDetailService`] that turns a missing category
/// into a not-found response instead of an error.
pub struct CategoryDetailView<C, T, P> {
    service: CategoryDetailService<C, T, P>,
}

impl<C, T, P> CategoryDetailView<C, T, P>
where
    C: CategoryLookup,
    T: TagLookup,
    P: ProductLookup,
{
    pub fn new(service: CategoryDetailService<C, T, P>) -> Self {
        Self { service }
    }

    pub async fn get(&self, category_id: CategoryId) -> Result<CategoryDetailResponse> {
        match self.service.run(category_id).await {
            Ok(details) => {
                tracing::info!(
                    category_id,
                    categories = details.len(),
                    "Category detail assembled"
                );
                Ok(CategoryDetailResponse::Ok(details))
            }
            Err(CatalogError::CategoryNotFound { category_id }) => {
                tracing::info!(category_id, "Category not found");
                Ok(CategoryDetailResponse::NotFound)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::FixedLookups;
    use crate::adapters::in_memory::InMemoryCatalog;
    use crate::domain::image_url::ImageUrlBuilder;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_category_maps_to_not_found() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let view = CategoryDetailView::new(CategoryDetailService::new(
            catalog.clone(),
            catalog.clone(),
            catalog,
            ImageUrlBuilder::default(),
        ));

        let response = view.get(999).await.unwrap();
        assert_eq!(response, CategoryDetailResponse::NotFound);
        assert!(!response.is_found());
        assert_eq!(response.to_json(false).unwrap(), None);
    }

    #[tokio::test]
    async fn test_json_shape_omits_tag_names() {
        let lookups = FixedLookups::new(
            vec![crate::domain::model::CategoryRecord::new(1, "Category 1")],
            vec![crate::domain::model::TagRecord::new(1)],
            vec![crate::domain::model::ProductRecord::new(
                1,
                "Product 1",
                "image_1.jpg",
            )],
        );
        let view = CategoryDetailView::new(CategoryDetailService::new(
            lookups.clone(),
            lookups.clone(),
            lookups,
            ImageUrlBuilder::default(),
        ));

        let body = view.get(1).await.unwrap().to_json(false).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": 1,
                "name": "Category 1",
                "tags": [{
                    "id": 1,
                    "products": [{
                        "id": 1,
                        "name": "Product 1",
                        "image": "htts://localhost/media/image_1.jpg"
                    }]
                }]
            }])
        );
    }
}
