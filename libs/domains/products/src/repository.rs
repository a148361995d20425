use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Persistence for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store one product; the returned copy carries the assigned `id`
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Every stored product, in store order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;
}
