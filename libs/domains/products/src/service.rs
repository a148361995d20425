//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductRequest, ProductResponse};
use crate::repository::ProductRepository;

/// Creates and lists products through a [`ProductRepository`].
///
/// Store failures are returned unchanged to the caller.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new product built from `request`
    #[instrument(skip(self, request), fields(product_name = ?request.name))]
    pub async fn create_product(&self, request: ProductRequest) -> ProductResult<()> {
        let product = self.repository.insert(Product::from(request)).await?;

        tracing::info!("Product {} saved", product.id.as_deref().unwrap_or_default());
        Ok(())
    }

    /// All stored products, in store order.
    ///
    /// A stored product without an id fails the whole listing.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<ProductResponse>> {
        let products = self.repository.find_all().await?;

        products.into_iter().map(ProductResponse::try_from).collect()
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
