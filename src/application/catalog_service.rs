use crate::domain::catalog::{Category, Product, ProductFilter};
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogRepository;

pub struct CatalogService {
    repo: Box<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: impl CatalogRepository) -> Self {
        Self {
            repo: Box::new(repo),
        }
    }

    pub fn ping(&self) -> Result<(), DomainError> {
        self.repo.ping()
    }

    pub fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.repo.list_categories()
    }

    pub fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        self.repo.list_products(filter)
    }

    pub fn get_product(&self, id: i32) -> Result<Option<Product>, DomainError> {
        self.repo.find_product(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryStore;

    #[test]
    fn lists_products_by_category_name() {
        let store = InMemoryStore::default();
        let books = store.add_category("Books");
        let toys = store.add_category("Toys");
        store.add_product("Novel", "12.00", "USD", Some(books));
        store.add_product("Kite", "8.50", "USD", Some(toys));
        let service = CatalogService::new(store);

        let all = service.list_products(&ProductFilter::All).unwrap();
        assert_eq!(all.len(), 2);

        let only_books = service
            .list_products(&ProductFilter::CategoryName("Books".into()))
            .unwrap();
        assert_eq!(only_books.len(), 1);
        assert_eq!(only_books[0].name, "Novel");
        assert_eq!(only_books[0].category.as_deref(), Some("Books"));

        let by_id = service.list_products(&ProductFilter::CategoryId(toys)).unwrap();
        assert_eq!(by_id[0].name, "Kite");
    }

    #[test]
    fn categories_are_sorted_by_name() {
        let store = InMemoryStore::default();
        store.add_category("Toys");
        store.add_category("Books");
        let service = CatalogService::new(store);

        let names: Vec<String> = service
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Books", "Toys"]);
    }

    #[test]
    fn unknown_product_is_none() {
        let service = CatalogService::new(InMemoryStore::default());
        assert!(service.get_product(42).unwrap().is_none());
    }
}
