use serde::{Deserialize, Serialize, Serializer};

/// Opaque identifier assigned to a product when it is created.
pub type ProductId = String;

/// A product record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Every product attribute except the identifier.
///
/// This is what create and replace accept; the store owns id assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
}

/// Largest magnitude below which every `f64` integer is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Write whole prices as JSON integers (`1200`, not `1200.0`).
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

impl Product {
    /// Attach an identifier to a set of fields.
    pub fn from_fields(id: impl Into<ProductId>, fields: ProductFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
        }
    }

    /// Overwrite every attribute except `id`.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
        self.in_stock = fields.in_stock;
    }

    /// Copy of the record without its identifier.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            in_stock: self.in_stock,
        }
    }
}

/// The three records every fresh catalog starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
