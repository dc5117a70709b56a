//! Request types and validation for the product endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use products_lib::{
    validate_product, CategoryFilter, Error as LibError, PageRequest, ProductFields,
};
use url::form_urlencoded;

use crate::error::ApiError;

/// Validation trait for request types.
///
/// Implementations check every field and hand back the typed value the
/// handler works with, or an [`ApiError`] describing the first problem.
pub trait Validate {
    /// Value produced by a successful validation.
    type Output;

    /// Validate the request.
    fn validate(&self) -> Result<Self::Output, ApiError>;
}

/// Query string of `GET /api/products`.
///
/// Every value of every key is kept so parsing can never reject a request.
/// A repeated `page` or `limit` is read as its values joined with commas,
/// so only the first value's leading integer counts. A repeated `category`
/// matches no product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Vec<String>,
    pub page: Vec<String>,
    pub limit: Vec<String>,
}

impl ListQuery {
    /// Read a raw (still percent-encoded) query string. Unknown keys are ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        let pairs = form_urlencoded::parse(raw.unwrap_or_default().as_bytes());
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "category" => &mut query.category,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.push(value.into_owned());
        }
        query
    }

    /// Category filter requested by this query.
    pub fn category(&self) -> CategoryFilter<'_> {
        match self.category.as_slice() {
            [] => CategoryFilter::Any,
            [category] => CategoryFilter::from(Some(category.as_str())),
            _ => CategoryFilter::Nothing,
        }
    }

    /// Pagination requested by this query, with defaults applied.
    pub fn paging(&self) -> PageRequest {
        let page = joined(&self.page);
        let limit = joined(&self.limit);
        PageRequest::from_query(page.as_deref(), limit.as_deref())
    }
}

fn joined(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(","))
}

/// Query string of `GET /api/products/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive name fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for SearchQuery {
    type Output = String;

    fn validate(&self) -> Result<String, ApiError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(LibError::validation(products_lib::NAME_QUERY_REQUIRED).into()),
        }
    }
}

/// Raw JSON body of a create or replace request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductPayload(pub Value);

impl Validate for ProductPayload {
    type Output = ProductFields;

    fn validate(&self) -> Result<ProductFields, ApiError> {
        Ok(validate_product(&self.0)?)
    }
}
