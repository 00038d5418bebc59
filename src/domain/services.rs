use crate::domain::image_url::ImageUrlBuilder;
use crate::domain::model::{
    CategoryDetail, CategoryId, CategoryRecord, ProductDetail, ProductRecord, TagDetail, TagRecord,
};
use crate::domain::ports::{CategoryLookup, ProductLookup, TagLookup};
use crate::utils::error::{CatalogError, Result};

/// Builds the category → tags → products view for a single category id.
///
/// Lookups run one after another in nesting order. Output order at every
/// level is the order the lookups returned, and nothing is cached, so a tag
/// id that appears under two categories is looked up twice.
pub struct CategoryDetailService<C, T, P> {
    categories: C,
    tags: T,
    products: P,
    image_urls: ImageUrlBuilder,
}

impl<C, T, P> CategoryDetailService<C, T, P>
where
    C: CategoryLookup,
    T: TagLookup,
    P: ProductLookup,
{
    pub fn new(categories: C, tags: T, products: P, image_urls: ImageUrlBuilder) -> Self {
        Self {
            categories,
            tags,
            products,
            image_urls,
        }
    }

    /// Fails with [`CatalogError::CategoryNotFound`] only when the category
    /// lookup comes back empty. Empty tag or product lists are kept as empty.
    pub async fn run(&self, category_id: CategoryId) -> Result<Vec<CategoryDetail>> {
        let categories = self.categories.categories_by_id(category_id).await;
        if categories.is_empty() {
            return Err(CatalogError::CategoryNotFound { category_id });
        }

        let mut details = Vec::with_capacity(categories.len());
        for category in categories {
            details.push(self.category_detail(category).await);
        }
        Ok(details)
    }

    async fn category_detail(&self, category: CategoryRecord) -> CategoryDetail {
        let tags = self.tags.tags_by_category_id(category.id).await;

        let mut tag_details = Vec::with_capacity(tags.len());
        for tag in tags {
            tag_details.push(self.tag_detail(tag).await);
        }

        CategoryDetail {
            id: category.id,
            name: category.name,
            tags: tag_details,
        }
    }

    async fn tag_detail(&self, tag: TagRecord) -> TagDetail {
        let products = self
            .products
            .products_by_tag_id(tag.id)
            .await
            .into_iter()
            .map(|product| self.product_detail(product))
            .collect();

        TagDetail {
            id: tag.id,
            products,
        }
    }

    fn product_detail(&self, product: ProductRecord) -> ProductDetail {
        ProductDetail {
            image: self.image_urls.build(&product.image),
            id: product.id,
            name: product.name,
        }
    }
}
