//! Extractors whose rejections render as [`ErrorResponse`](crate::errors::ErrorResponse).

pub mod json;

pub use json::AppJson;
