//! Client-side cart.
//!
//! The cart lives with the client (the browser keeps it in local storage) and
//! only reaches the server at checkout, as the `items` of `POST /orders`. The
//! persisted form is a plain JSON array of lines.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i32,
    #[serde(default)]
    pub name: String,
    /// Catalog price when the line was added; display only, the server
    /// prices the order itself.
    pub price: BigDecimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_quantity() -> i32 {
    1
}

const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Restore a persisted cart. Lines missing a name, currency or quantity
    /// are filled in; anything unreadable yields an empty cart.
    pub fn load(persisted: &str) -> Self {
        let mut cart: Cart = serde_json::from_str(persisted).unwrap_or_default();
        for line in &mut cart.lines {
            line.quantity = line.quantity.max(1);
        }
        cart
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product, merging with an existing line.
    pub fn add(&mut self, product_id: i32, name: &str, price: BigDecimal, currency: &str) {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id,
                name: name.to_string(),
                price,
                currency: currency.to_string(),
                quantity: 1,
            }),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> BigDecimal {
        self.lines
            .iter()
            .map(|l| &l.price * BigDecimal::from(l.quantity))
            .sum()
    }

    /// Currency to show the total in: the first line's, else USD.
    pub fn display_currency(&self) -> &str {
        self.lines
            .first()
            .map_or(DEFAULT_CURRENCY, |l| l.currency.as_str())
    }

    /// Build the `POST /orders` body. Checkout needs a name, an email and at
    /// least one line; otherwise nothing is submitted.
    pub fn checkout(&self, customer: CheckoutCustomer) -> Option<Checkout> {
        let customer = customer.trimmed();
        if customer.name.is_empty() || customer.email.is_empty() || self.is_empty() {
            return None;
        }
        Some(Checkout {
            customer,
            items: self
                .lines
                .iter()
                .map(|l| CheckoutItem {
                    product_id: l.product_id,
                    quantity: l.quantity,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutCustomer {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub country: String,
}

impl CheckoutCustomer {
    fn trimmed(self) -> Self {
        let t = |s: String| s.trim().to_string();
        Self {
            name: t(self.name),
            email: t(self.email),
            company: t(self.company),
            phone: t(self.phone),
            address1: t(self.address1),
            address2: t(self.address2),
            city: t(self.city),
            country: t(self.country),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutItem {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checkout {
    pub customer: CheckoutCustomer,
    pub items: Vec<CheckoutItem>,
}
