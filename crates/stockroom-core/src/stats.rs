//! Dashboard statistics derived from a product collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::count_status;
use crate::models::product::{Category, ProductRecord, StockStatus};

/// Number of products in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// One month of the sales series shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub sales: u64,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_value: Decimal,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    /// First-seen category order.
    pub by_category: Vec<CategoryCount>,
    pub low_stock_products: Vec<ProductRecord>,
}

impl CatalogStats {
    pub fn compute(collection: &[ProductRecord]) -> Self {
        let mut by_category: Vec<CategoryCount> = Vec::new();
        for record in collection {
            match by_category.iter_mut().find(|c| c.category == record.category) {
                Some(entry) => entry.count += 1,
                None => by_category.push(CategoryCount {
                    category: record.category.clone(),
                    count: 1,
                }),
            }
        }

        Self {
            total_products: collection.len(),
            total_value: collection.iter().map(ProductRecord::stock_value).sum(),
            low_stock_items: count_status(collection, StockStatus::LowStock),
            out_of_stock_items: count_status(collection, StockStatus::OutOfStock),
            by_category,
            low_stock_products: collection
                .iter()
                .filter(|r| r.status == StockStatus::LowStock)
                .cloned()
                .collect(),
        }
    }
}
