//! Static implementation of [`ProductCatalog`].
//!
//! The collection is loaded once and never changes. Create, update and
//! delete are validated and acknowledged, then discarded.

use chrono::Utc;
use stockroom_core::error::StockroomResult;
use stockroom_core::filter;
use stockroom_core::models::product::{CreateProduct, ProductRecord, UpdateProduct};
use stockroom_core::models::query::{FilterQuery, ProductSort};
use stockroom_core::repository::{PaginatedResult, Pagination, ProductCatalog};
use stockroom_core::stats::CatalogStats;
use tracing::info;

use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<ProductRecord>,
}

impl StaticCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// Catalog over the seed collection.
    pub fn seeded() -> Self {
        Self::new(crate::seed::products())
    }

    fn next_id(&self) -> u64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

impl ProductCatalog for StaticCatalog {
    fn list(&self) -> &[ProductRecord] {
        &self.products
    }

    fn get_by_id(&self, id: u64) -> StockroomResult<ProductRecord> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "product".into(),
                    id: id.to_string(),
                }
                .into()
            })
    }

    fn search(
        &self,
        query: &FilterQuery,
        sort: Option<ProductSort>,
        pagination: Pagination,
    ) -> PaginatedResult<ProductRecord> {
        let mut matched = filter::filter(&self.products, query);
        if let Some(sort) = sort {
            filter::sort(&mut matched, sort);
        }
        filter::paginate(matched, pagination)
    }

    fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.products)
    }

    fn create(&self, input: CreateProduct) -> StockroomResult<ProductRecord> {
        input.validate()?;
        let record = ProductRecord {
            id: self.next_id(),
            name: input.name,
            category: input.category,
            price: input.price,
            quantity: input.quantity,
            supplier: input.supplier,
            status: input.status,
            last_updated: Utc::now().date_naive(),
            image: input.image,
            description: input.description,
        };
        info!(product_id = record.id, name = %record.name, "Product added (not persisted)");
        Ok(record)
    }

    fn update(&self, id: u64, input: UpdateProduct) -> StockroomResult<ProductRecord> {
        let current = self.get_by_id(id)?;
        input.validate()?;
        let record = input.apply(current, Utc::now().date_naive());
        info!(product_id = id, "Product updated (not persisted)");
        Ok(record)
    }

    fn delete(&self, id: u64) -> StockroomResult<()> {
        self.get_by_id(id)?;
        info!(product_id = id, "Product deleted (not persisted)");
        Ok(())
    }
}
