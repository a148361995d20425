//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Collection holding one document per product
pub const COLLECTION_NAME: &str = "product";

/// Stored shape of a product.
///
/// `price` is kept as its decimal string so scale survives the round trip.
/// Absent fields are left out of the document and read back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub price: Option<Decimal>,
}

impl ProductDocument {
    /// Document for a new insert; the store generates `_id`
    fn for_insert(product: Product) -> Self {
        Self {
            id: None,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(document: ProductDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()),
            name: document.name,
            description: document.description,
            price: document.price,
        }
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<ProductDocument> {
        &self.collection
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_name = ?product.name))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let document = ProductDocument::for_insert(product);

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ProductError::Database(format!(
                "insert returned a non-ObjectId _id: {}",
                result.inserted_id
            ))
        })?;

        Ok(Product::from(ProductDocument {
            id: Some(id),
            ..document
        }))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Bson, from_document, to_document};
    use std::str::FromStr;

    fn product(price: &str) -> Product {
        Product {
            id: None,
            name: Some("Samsung Note 20".to_string()),
            description: Some("Note 20".to_string()),
            price: Some(Decimal::from_str(price).unwrap()),
        }
    }

    #[test]
    fn test_insert_document_has_no_id_and_string_price() {
        let document = to_document(&ProductDocument::for_insert(product("1200.00"))).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get("name"), Some(&Bson::String("Samsung Note 20".into())));
        assert_eq!(document.get("price"), Some(&Bson::String("1200.00".into())));
    }

    #[test]
    fn test_for_insert_drops_existing_id() {
        let mut input = product("1");
        input.id = Some("ignored".to_string());

        assert_eq!(ProductDocument::for_insert(input).id, None);
    }

    #[test]
    fn test_stored_document_maps_to_product() {
        let oid = ObjectId::new();
        let stored = doc! {
            "_id": oid,
            "name": "Samsung Note 20",
            "description": "Note 20",
            "price": "1200",
        };

        let product = Product::from(from_document::<ProductDocument>(stored).unwrap());

        assert_eq!(product.id, Some(oid.to_hex()));
        assert_eq!(product.price.unwrap().to_string(), "1200");
    }

    #[test]
    fn test_absent_fields_are_omitted_and_read_back_as_none() {
        let input = Product {
            id: None,
            name: Some("only a name".to_string()),
            description: None,
            price: None,
        };

        let document = to_document(&ProductDocument::for_insert(input)).unwrap();
        assert_eq!(document.keys().collect::<Vec<_>>(), vec!["name"]);

        let stored = doc! { "_id": ObjectId::new(), "name": "only a name", "price": Bson::Null };
        let product = Product::from(from_document::<ProductDocument>(stored).unwrap());
        assert_eq!(product.name.as_deref(), Some("only a name"));
        assert_eq!(product.description, None);
        assert_eq!(product.price, None);
    }

    #[test]
    fn test_invalid_stored_price_fails_to_decode() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "name": "x",
            "description": "y",
            "price": "twelve hundred",
        };

        assert!(from_document::<ProductDocument>(stored).is_err());
    }
}
