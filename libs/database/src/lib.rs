//! Database connectors for the product service
//!
//! # Features
//!
//! - `mongodb` - MongoDB connector, config and health probes
//! - `config` - load connector settings through `core_config::FromEnv`
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017").with_database("catalog");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
