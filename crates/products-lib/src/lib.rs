//! Products library entry points.
//!
//! This crate holds the product record type, the in-memory [`ProductStore`]
//! with its list/search/stats/CRUD operations, pagination parsing and payload
//! validation. The HTTP services only translate requests into calls on the
//! items exported here.
//!

#![deny(warnings)]

pub mod error;
pub mod paging;
pub mod product;
pub mod store;
pub mod validation;

pub use error::{Error, Result, NAME_QUERY_REQUIRED, PRODUCT_NOT_FOUND};
pub use paging::{parse_leading_int, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use product::{seed_products, Product, ProductFields, ProductId};
pub use store::{CategoryCounts, CategoryFilter, ProductPage, ProductStore};
pub use validation::validate_product;
