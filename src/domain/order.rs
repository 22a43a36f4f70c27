use std::collections::{BTreeSet, HashMap};

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::catalog::PricedProduct;
use super::errors::{DomainError, MIXED_CURRENCIES, PRODUCT_NOT_FOUND};

/// Customer details submitted at checkout. Empty strings are treated as
/// "not supplied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl CustomerDetails {
    pub fn normalized(self) -> Self {
        Self {
            name: supplied(self.name),
            email: supplied(self.email),
            company: supplied(self.company),
            address1: supplied(self.address1),
            address2: supplied(self.address2),
            city: supplied(self.city),
            country: supplied(self.country),
            phone: supplied(self.phone),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLineInput {
    pub product_id: i32,
    pub quantity: i32,
}

/// A validated checkout: typed lines plus the customer descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrder {
    pub customer: CustomerDetails,
    pub lines: Vec<OrderLineInput>,
}

impl PlaceOrder {
    /// Distinct product ids, ascending.
    pub fn product_ids(&self) -> Vec<i32> {
        self.lines
            .iter()
            .map(|l| l.product_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub lines: Vec<PricedLine>,
    pub total: BigDecimal,
    pub currency: String,
}

/// Price checkout lines against the products resolved for them.
///
/// `products` is the batch lookup result for the distinct requested ids. Its
/// length must equal the number of requested lines, so a missing product and
/// a duplicated line both fail with `product not found`. Unit prices and
/// currency are copied onto each line so the order keeps the price it was
/// placed at.
pub fn price_order(
    lines: &[OrderLineInput],
    products: &[PricedProduct],
) -> Result<PricedOrder, DomainError> {
    if products.len() != lines.len() {
        return Err(DomainError::not_found(PRODUCT_NOT_FOUND));
    }
    let Some(first) = products.first() else {
        return Err(DomainError::not_found(PRODUCT_NOT_FOUND));
    };
    if products.iter().any(|p| p.currency != first.currency) {
        return Err(DomainError::invalid(MIXED_CURRENCIES));
    }

    let by_id: HashMap<i32, &PricedProduct> = products.iter().map(|p| (p.id, p)).collect();
    let mut total = BigDecimal::from(0);
    let mut priced = Vec::with_capacity(lines.len());
    for line in lines {
        let product = by_id
            .get(&line.product_id)
            .ok_or_else(|| DomainError::not_found(PRODUCT_NOT_FOUND))?;
        total += &product.price * BigDecimal::from(line.quantity);
        priced.push(PricedLine {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: product.price.clone(),
            currency: product.currency.clone(),
        });
    }

    Ok(PricedOrder {
        lines: priced,
        total,
        currency: first.currency.clone(),
    })
}

/// The result of a committed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub id: i32,
    pub total: BigDecimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemView {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub customer_name: Option<String>,
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub customer: Option<CustomerSummary>,
    pub items: Vec<OrderItemView>,
}
