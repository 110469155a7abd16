use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalogue record. Never mutated by queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub model: String,
    pub category: String,
    /// Whole currency units.
    pub price: u32,
}

impl Product {
    pub fn new(model: impl Into<String>, category: impl Into<String>, price: u32) -> Self {
        Self {
            model: model.into(),
            category: category.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}$", self.category, self.model, self.price)
    }
}

/// Projection of a product onto its model and a scaled price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedModel {
    pub model: String,
    pub price: u64,
}

impl PricedModel {
    pub fn from_product(product: &Product, factor: u64) -> Self {
        Self {
            model: product.model.clone(),
            price: u64::from(product.price) * factor,
        }
    }
}

impl fmt::Display for PricedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ model = {}, price = {} }}", self.model, self.price)
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("iPhone X", "Electronics", 430),
        Product::new("Tesla Model 3", "Auto", 69000),
        Product::new("Bicycle Ukraine", "Transport", 790),
        Product::new("Adidas T-Shirt", "Clothes", 144),
        Product::new("VW Passat B8", "Auto", 20430),
        Product::new("Samsung S23", "Electronics", 1299),
    ]
}

pub fn sample_numbers() -> Vec<i32> {
    vec![1, 6, -3, 12, 663, 992, -3, 1, -34, 40, 5690, -10, 0, 99, 123]
}

pub fn sample_colors() -> Vec<String> {
    ["red", "blue", "black", "yellow", "orange", "white", "gray"]
        .into_iter()
        .map(String::from)
        .collect()
}
