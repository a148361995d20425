use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ProductError;

/// A catalogue product.
///
/// `id` is assigned by the store on insert and is `None` before that. The
/// other fields are copied from the request as sent, absent ones included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

/// Body of `POST /api/product`
///
/// Missing and `null` fields are accepted and stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[serde(default)]
    #[schema(example = "Samsung Note 20")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Note 20")]
    pub description: Option<String>,
    /// Exact decimal amount; digits are kept as sent
    #[serde(default, with = "exact_price")]
    #[schema(value_type = Option<f64>, example = 1200)]
    pub price: Option<Decimal>,
}

/// Element of the `GET /api/product` array; absent fields are `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    /// Store-assigned identifier
    #[schema(example = "6724f1c2a9d3b84e5c0f1a2b")]
    pub id: String,
    #[serde(default)]
    #[schema(example = "Samsung Note 20")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Note 20")]
    pub description: Option<String>,
    #[serde(default, with = "exact_price")]
    #[schema(value_type = Option<f64>, example = 1200)]
    pub price: Option<Decimal>,
}

impl From<ProductRequest> for Product {
    fn from(request: ProductRequest) -> Self {
        Self {
            id: None,
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

impl TryFrom<Product> for ProductResponse {
    type Error = ProductError;

    /// Fails for a product the store returned without an id
    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let id = product
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProductError::Database("stored product has no id".to_string()))?;

        Ok(Self {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
        })
    }
}

/// JSON number <-> `Decimal` without rounding.
///
/// Relies on serde_json's `arbitrary_precision` so the number's source text
/// reaches the deserializer. A value `Decimal` cannot hold digit for digit
/// (more than 28 significant digits) is rejected.
pub mod exact_price {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(price) => serde_json::Number::from_str(&price.to_string())
                .map_err(ser::Error::custom)?
                .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<serde_json::Number>::deserialize(deserializer)?
            .map(|number| parse_exact(&number.to_string()).map_err(de::Error::custom))
            .transpose()
    }

    /// Parse a JSON number literal, failing if any digit would be lost
    pub fn parse_exact(text: &str) -> Result<Decimal, String> {
        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(text)
        } else {
            Decimal::from_str(text)
        }
        .map_err(|e| format!("price {text} is not a representable decimal: {e}"))?;

        if significant_digits(text) != significant_digits(&parsed.to_string()) {
            return Err(format!(
                "price {text} has more significant digits than can be stored exactly"
            ));
        }
        Ok(parsed)
    }

    /// Mantissa digits without sign, point, leading or trailing zeros
    fn significant_digits(text: &str) -> String {
        let mantissa = text.split(['e', 'E']).next().unwrap_or_default();
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        digits.trim_matches('0').to_string()
    }
}
