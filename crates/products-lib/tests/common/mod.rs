use products_lib::ProductFields;

pub fn kettle() -> ProductFields {
    ProductFields {
        name: "Kettle".to_string(),
        description: "Electric kettle with auto shut-off".to_string(),
        price: 35.0,
        category: "kitchen".to_string(),
        in_stock: true,
    }
}
