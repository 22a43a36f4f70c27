use bigdecimal::BigDecimal;

use super::coerce;
use super::errors::{DomainError, BAD_ID};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// A product as shown in the catalog, with its category name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub currency: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// The slice of a product that order placement prices against.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    pub id: i32,
    pub price: BigDecimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    CategoryId(i32),
    CategoryName(String),
}

impl ProductFilter {
    /// Build a filter from the raw `category_id` / `category` query
    /// parameters. A non-empty `category_id` wins over `category`.
    pub fn from_query(category_id: Option<&str>, category: Option<&str>) -> Result<Self, DomainError> {
        if let Some(raw) = category_id.filter(|s| !s.is_empty()) {
            return coerce::parse_record_id(raw)
                .map(ProductFilter::CategoryId)
                .ok_or_else(|| DomainError::invalid(BAD_ID));
        }
        Ok(match category.filter(|s| !s.is_empty()) {
            Some(name) => ProductFilter::CategoryName(name.to_string()),
            None => ProductFilter::All,
        })
    }
}
