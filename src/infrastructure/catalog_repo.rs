use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::{Category, Product, ProductFilter};
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogRepository;
use crate::schema::{categories, products};

use super::models::{CategoryRow, ProductRow};

fn to_product(row: ProductRow, category: Option<String>) -> Product {
    Product {
        id: row.id,
        name: row.name,
        description: row.description,
        price: row.price,
        currency: row.currency,
        image_url: row.image_url,
        category,
    }
}

pub struct DieselCatalogRepository {
    pool: DbPool,
}

impl DieselCatalogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CatalogRepository for DieselCatalogRepository {
    fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = categories::table
            .select(CategoryRow::as_select())
            .order(categories::name.asc())
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|c| Category {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = products::table
            .left_join(categories::table)
            .select((ProductRow::as_select(), categories::name.nullable()))
            .order(products::id.asc())
            .into_boxed();

        query = match filter {
            ProductFilter::All => query,
            ProductFilter::CategoryId(id) => query.filter(products::category_id.eq(*id)),
            ProductFilter::CategoryName(name) => {
                query.filter(categories::name.nullable().eq(name.clone()))
            }
        };

        let rows: Vec<(ProductRow, Option<String>)> = query.load(&mut conn)?;
        Ok(rows
            .into_iter()
            .map(|(row, category)| to_product(row, category))
            .collect())
    }

    fn find_product(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row: Option<(ProductRow, Option<String>)> = products::table
            .left_join(categories::table)
            .filter(products::id.eq(id))
            .select((ProductRow::as_select(), categories::name.nullable()))
            .first(&mut conn)
            .optional()?;

        Ok(row.map(|(row, category)| to_product(row, category)))
    }
}
