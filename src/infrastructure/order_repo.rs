use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::PricedProduct;
use crate::domain::errors::DomainError;
use crate::domain::order::{
    price_order, CustomerDetails, CustomerSummary, OrderItemView, OrderView, PlaceOrder,
    PlacedOrder,
};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, order_items, orders, products};

use super::models::{
    CustomerChangeset, NewCustomerRow, NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow,
    ProductPriceRow,
};

/// Insert the customer or, when the email is already registered, update the
/// supplied fields in place. A single statement keyed on the unique email, so
/// concurrent first orders from one address converge on one row.
fn upsert_customer(
    conn: &mut PgConnection,
    details: &CustomerDetails,
    email: &str,
) -> Result<i32, DomainError> {
    let new_row = NewCustomerRow {
        name: details.name.as_deref().unwrap_or(""),
        email,
        company: details.company.as_deref(),
        address1: details.address1.as_deref(),
        address2: details.address2.as_deref(),
        city: details.city.as_deref(),
        country: details.country.as_deref(),
        phone: details.phone.as_deref(),
    };
    let changes = CustomerChangeset {
        email,
        name: details.name.as_deref(),
        company: details.company.as_deref(),
        address1: details.address1.as_deref(),
        address2: details.address2.as_deref(),
        city: details.city.as_deref(),
        country: details.country.as_deref(),
        phone: details.phone.as_deref(),
    };

    let id = diesel::insert_into(customers::table)
        .values(&new_row)
        .on_conflict(customers::email)
        .do_update()
        .set(&changes)
        .returning(customers::id)
        .get_result::<i32>(conn)?;
    Ok(id)
}

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn place(&self, order: PlaceOrder) -> Result<PlacedOrder, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Resolve prices for the distinct requested products
            let resolved: Vec<PricedProduct> = products::table
                .filter(products::id.eq_any(order.product_ids()))
                .select(ProductPriceRow::as_select())
                .order(products::id.asc())
                .load(conn)?
                .into_iter()
                .map(|p| PricedProduct {
                    id: p.id,
                    price: p.price,
                    currency: p.currency,
                })
                .collect();

            // 2. Total and per-line price capture; a mismatch aborts the transaction
            let priced = price_order(&order.lines, &resolved)?;

            // 3. Customer upsert, only when an email was given
            let customer_id = match order.customer.email() {
                Some(email) => Some(upsert_customer(conn, &order.customer, email)?),
                None => None,
            };

            // 4. The order itself
            let (order_id, created_at) = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    customer_id,
                    customer_name: order.customer.name.as_deref(),
                    total: &priced.total,
                })
                .returning((orders::id, orders::created_at))
                .get_result::<(i32, DateTime<Utc>)>(conn)?;

            // 5. One item per line at the resolved unit price
            let new_items: Vec<NewOrderItemRow> = priced
                .lines
                .iter()
                .map(|l| NewOrderItemRow {
                    order_id,
                    product_id: l.product_id,
                    quantity: l.quantity,
                    unit_price: &l.unit_price,
                    currency: &l.currency,
                })
                .collect();
            diesel::insert_into(order_items::table)
                .values(&new_items)
                .execute(conn)?;

            Ok(PlacedOrder {
                id: order_id,
                total: priced.total,
                currency: priced.currency,
                created_at,
            })
        })
    }

    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .left_join(customers::table)
            .filter(orders::id.eq(id))
            .select((
                OrderRow::as_select(),
                (
                    customers::name,
                    customers::email,
                    customers::company,
                    customers::city,
                    customers::country,
                )
                    .nullable(),
            ))
            .first::<(
                OrderRow,
                Option<(String, String, Option<String>, Option<String>, Option<String>)>,
            )>(&mut conn)
            .optional()?;

        let Some((order, customer)) = order else {
            return Ok(None);
        };

        let items: Vec<(OrderItemRow, String)> = order_items::table
            .inner_join(products::table)
            .filter(order_items::order_id.eq(order.id))
            .select((OrderItemRow::as_select(), products::name))
            .order(order_items::id.asc())
            .load(&mut conn)?;

        Ok(Some(OrderView {
            id: order.id,
            customer_id: order.customer_id,
            customer_name: order.customer_name,
            total: order.total,
            created_at: order.created_at,
            customer: customer.map(|(name, email, company, city, country)| CustomerSummary {
                name,
                email,
                company,
                city,
                country,
            }),
            items: items
                .into_iter()
                .map(|(item, product_name)| OrderItemView {
                    product_id: item.product_id,
                    product_name,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    currency: item.currency,
                })
                .collect(),
        }))
    }
}
