//! In-memory product catalog.
//!
//! [`ProductStore`] owns an ordered list of [`Product`] records. Listing and
//! search preserve insertion order; ids are unique for the lifetime of the
//! store.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result, NAME_QUERY_REQUIRED};
use crate::paging::PageRequest;
use crate::product::{seed_products, Product, ProductFields, ProductId};

/// One page of a (possibly filtered) listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    /// Number of records matching the filter, across all pages.
    pub total: usize,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub items: Vec<Product>,
}

/// Product count per category, keyed in first-seen order.
pub type CategoryCounts = IndexMap<String, usize>;

/// Category restriction applied by [`ProductStore::list_filtered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    /// Every product.
    Any,
    /// Products whose category equals this value exactly.
    Exact(&'a str),
    /// No product at all.
    Nothing,
}

impl<'a> From<Option<&'a str>> for CategoryFilter<'a> {
    /// An absent or empty category applies no filter.
    fn from(category: Option<&'a str>) -> Self {
        match category {
            None | Some("") => CategoryFilter::Any,
            Some(category) => CategoryFilter::Exact(category),
        }
    }
}

impl CategoryFilter<'_> {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Exact(category) => product.category == *category,
            CategoryFilter::Nothing => false,
        }
    }
}

/// Ordered collection of products with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the three seed records.
    pub fn seeded() -> Self {
        Self::from_products(seed_products())
    }

    /// Create a store from existing records.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::new();
        for product in products {
            if store.position(&product.id).is_some() {
                debug!(id = %product.id, "dropping duplicate product id");
                continue;
            }
            store.products.push(product);
        }
        store
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All records in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Filter by exact category (if given) and return the requested page.
    ///
    /// An empty category string applies no filter.
    pub fn list(&self, category: Option<&str>, paging: PageRequest) -> ProductPage {
        self.list_filtered(CategoryFilter::from(category), paging)
    }

    /// Apply `filter` and return the requested page of the matches.
    pub fn list_filtered(&self, filter: CategoryFilter<'_>, paging: PageRequest) -> ProductPage {
        let filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect();

        let window = paging.window(filtered.len());
        let items = filtered[window].iter().map(|p| (*p).clone()).collect();

        ProductPage {
            total: filtered.len(),
            page: paging.page,
            limit: paging.limit,
            items,
        }
    }

    /// Case-insensitive substring match on `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `name` is empty.
    pub fn search(&self, name: &str) -> Result<Vec<Product>> {
        if name.is_empty() {
            return Err(Error::validation(NAME_QUERY_REQUIRED));
        }

        let needle = name.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Record count per category over the whole collection.
    ///
    /// Categories appear in the order their first product was stored.
    pub fn stats(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::new();
        for product in &self.products {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has that id.
    pub fn get(&self, id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(Error::product_not_found)
    }

    /// Append a new record with a freshly generated id.
    pub fn create(&mut self, fields: ProductFields) -> Product {
        let id = self.fresh_id();
        let product = Product::from_fields(id, fields);
        debug!(id = %product.id, name = %product.name, "product created");
        self.products.push(product.clone());
        product
    }

    /// Overwrite every field of an existing record except its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has that id.
    pub fn replace(&mut self, id: &str, fields: ProductFields) -> Result<Product> {
        let idx = self.position(id).ok_or_else(Error::product_not_found)?;
        let product = &mut self.products[idx];
        product.apply(fields);
        debug!(id = %product.id, "product replaced");
        Ok(product.clone())
    }

    /// Remove a record and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has that id.
    pub fn delete(&mut self, id: &str) -> Result<Product> {
        let idx = self.position(id).ok_or_else(Error::product_not_found)?;
        let removed = self.products.remove(idx);
        debug!(id = %removed.id, "product deleted");
        Ok(removed)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    fn fresh_id(&self) -> ProductId {
        loop {
            let candidate = Uuid::new_v4().to_string();
            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
