//! In-memory implementations of the repository ports for unit and handler
//! tests. Pricing goes through the same domain function as the diesel
//! repository, and every write happens after validation so a failed call
//! leaves the store untouched.

use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use actix_web::web;
use bigdecimal::BigDecimal;
use chrono::Utc;

use crate::application::catalog_service::CatalogService;
use crate::application::order_service::OrderService;
use crate::application::payment_service::PaymentService;
use crate::domain::catalog::{Category, PricedProduct, Product, ProductFilter};
use crate::domain::errors::{DomainError, ORDER_NOT_FOUND};
use crate::domain::order::{
    price_order, CustomerDetails, CustomerSummary, OrderItemView, OrderView, PlaceOrder,
    PlacedOrder,
};
use crate::domain::payment::{PaymentReceipt, RecordPayment, PAYMENT_STATUS_SUCCESS};
use crate::domain::ports::{CatalogRepository, OrderRepository, PaymentRepository};
use crate::AppServices;

/// Services wired to one shared in-memory store, ready for `App::configure`.
pub fn services(store: &InMemoryStore) -> AppServices {
    AppServices {
        catalog: web::Data::new(CatalogService::new(store.clone())),
        orders: web::Data::new(OrderService::new(store.clone())),
        payments: web::Data::new(PaymentService::new(store.clone())),
    }
}

#[derive(Debug, Clone)]
pub struct StoredProduct {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub currency: String,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct StoredCustomer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    next_id: i32,
    categories: Vec<Category>,
    products: Vec<StoredProduct>,
    customers: Vec<StoredCustomer>,
    orders: Vec<OrderView>,
    payments: Vec<(i32, RecordPayment)>,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn category_name(&self, id: Option<i32>) -> Option<String> {
        let id = id?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }

    fn to_product(&self, p: &StoredProduct) -> Product {
        Product {
            id: p.id,
            name: p.name.clone(),
            description: None,
            price: p.price.clone(),
            currency: p.currency.clone(),
            image_url: None,
            category: self.category_name(p.category_id),
        }
    }

    fn upsert_customer(&mut self, details: &CustomerDetails, email: &str) -> i32 {
        if let Some(existing) = self.customers.iter_mut().find(|c| c.email == email) {
            fn keep(slot: &mut Option<String>, new: &Option<String>) {
                if new.is_some() {
                    slot.clone_from(new);
                }
            }
            if let Some(name) = &details.name {
                existing.name.clone_from(name);
            }
            keep(&mut existing.company, &details.company);
            keep(&mut existing.address1, &details.address1);
            keep(&mut existing.address2, &details.address2);
            keep(&mut existing.city, &details.city);
            keep(&mut existing.country, &details.country);
            keep(&mut existing.phone, &details.phone);
            return existing.id;
        }
        let id = self.next_id();
        self.customers.push(StoredCustomer {
            id,
            name: details.name.clone().unwrap_or_default(),
            email: email.to_string(),
            company: details.company.clone(),
            address1: details.address1.clone(),
            address2: details.address2.clone(),
            city: details.city.clone(),
            country: details.country.clone(),
            phone: details.phone.clone(),
        });
        id
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store mutex poisoned")
    }

    pub fn add_category(&self, name: &str) -> i32 {
        let mut state = self.lock();
        let id = state.next_id();
        state.categories.push(Category {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn add_product(&self, name: &str, price: &str, currency: &str, category_id: Option<i32>) -> i32 {
        let mut state = self.lock();
        let id = state.next_id();
        state.products.push(StoredProduct {
            id,
            name: name.to_string(),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            currency: currency.to_string(),
            category_id,
        });
        id
    }

    /// Insert a bare order, bypassing checkout.
    pub fn add_order(&self, total: &str) -> i32 {
        let mut state = self.lock();
        let id = state.next_id();
        state.orders.push(OrderView {
            id,
            customer_id: None,
            customer_name: None,
            total: BigDecimal::from_str(total).expect("valid decimal"),
            created_at: Utc::now(),
            customer: None,
            items: vec![],
        });
        id
    }

    pub fn customers(&self) -> Vec<StoredCustomer> {
        self.lock().customers.clone()
    }

    /// Row counts as `(customers, orders, order_items, payments)`.
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let state = self.lock();
        (
            state.customers.len(),
            state.orders.len(),
            state.orders.iter().map(|o| o.items.len()).sum(),
            state.payments.len(),
        )
    }
}

impl CatalogRepository for InMemoryStore {
    fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let state = self.lock();
        Ok(state
            .products
            .iter()
            .map(|p| state.to_product(p))
            .zip(state.products.iter())
            .filter(|(product, stored)| match filter {
                ProductFilter::All => true,
                ProductFilter::CategoryId(id) => stored.category_id == Some(*id),
                ProductFilter::CategoryName(name) => product.category.as_ref() == Some(name),
            })
            .map(|(product, _)| product)
            .collect())
    }

    fn find_product(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let state = self.lock();
        Ok(state
            .products
            .iter()
            .find(|p| p.id == id)
            .map(|p| state.to_product(p)))
    }
}

impl OrderRepository for InMemoryStore {
    fn place(&self, order: PlaceOrder) -> Result<PlacedOrder, DomainError> {
        let mut state = self.lock();
        let ids = order.product_ids();
        let resolved: Vec<PricedProduct> = state
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(|p| PricedProduct {
                id: p.id,
                price: p.price.clone(),
                currency: p.currency.clone(),
            })
            .collect();
        let priced = price_order(&order.lines, &resolved)?;

        let customer_id = order
            .customer
            .email()
            .map(|email| state.upsert_customer(&order.customer, email));
        let customer = customer_id.and_then(|id| {
            state
                .customers
                .iter()
                .find(|c| c.id == id)
                .map(|c| CustomerSummary {
                    name: c.name.clone(),
                    email: c.email.clone(),
                    company: c.company.clone(),
                    city: c.city.clone(),
                    country: c.country.clone(),
                })
        });
        let items = priced
            .lines
            .iter()
            .map(|l| OrderItemView {
                product_id: l.product_id,
                product_name: state
                    .products
                    .iter()
                    .find(|p| p.id == l.product_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                quantity: l.quantity,
                unit_price: l.unit_price.clone(),
                currency: l.currency.clone(),
            })
            .collect();

        let id = state.next_id();
        let created_at = Utc::now();
        state.orders.push(OrderView {
            id,
            customer_id,
            customer_name: order.customer.name.clone(),
            total: priced.total.clone(),
            created_at,
            customer,
            items,
        });
        Ok(PlacedOrder {
            id,
            total: priced.total,
            currency: priced.currency,
            created_at,
        })
    }

    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        Ok(self.lock().orders.iter().find(|o| o.id == id).cloned())
    }
}

impl PaymentRepository for InMemoryStore {
    fn record(&self, payment: RecordPayment) -> Result<PaymentReceipt, DomainError> {
        let mut state = self.lock();
        if !state.orders.iter().any(|o| o.id == payment.order_id) {
            return Err(DomainError::not_found(ORDER_NOT_FOUND));
        }
        let payment_id = state.next_id();
        state.payments.push((payment_id, payment));
        Ok(PaymentReceipt {
            payment_id,
            status: PAYMENT_STATUS_SUCCESS.to_string(),
            created_at: Utc::now(),
        })
    }
}
