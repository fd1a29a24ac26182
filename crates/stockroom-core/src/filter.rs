//! Catalog filter engine.
//!
//! Every function here is pure: inputs are borrowed, results are new
//! vectors, and nothing is cached between calls. The catalog view calls
//! [`filter`] again whenever any predicate changes.

use tracing::debug;

use crate::models::product::{Category, ProductRecord, StockStatus};
use crate::models::query::{FilterQuery, ProductSort, SortKey, SortOrder, WILDCARD};
use crate::repository::{PaginatedResult, Pagination};

/// Does `record` satisfy every predicate of `query`?
pub fn matches(record: &ProductRecord, query: &FilterQuery) -> bool {
    matches_lowered(record, &query.search_text.to_lowercase(), query)
}

fn matches_lowered(record: &ProductRecord, needle: &str, query: &FilterQuery) -> bool {
    matches_text(record, needle)
        && query.category.matches(&record.category)
        && query.status.matches(&record.status)
}

fn matches_text(record: &ProductRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.supplier.to_lowercase().contains(needle)
}

/// Records of `collection` matching `query`, in source order.
pub fn filter(collection: &[ProductRecord], query: &FilterQuery) -> Vec<ProductRecord> {
    let needle = query.search_text.to_lowercase();
    let result: Vec<ProductRecord> = collection
        .iter()
        .filter(|r| matches_lowered(r, &needle, query))
        .cloned()
        .collect();
    debug!(
        search = %query.search_text,
        input = collection.len(),
        matched = result.len(),
        "Recomputed product filter"
    );
    result
}

/// Stable sort; records with equal keys keep their filtered order.
pub fn sort(records: &mut [ProductRecord], sort: ProductSort) {
    records.sort_by(|a, b| {
        let ord = match sort.key {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
        };
        match sort.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

/// Slice one page out of `records`. `total` is the pre-pagination count.
pub fn paginate<T>(records: Vec<T>, pagination: Pagination) -> PaginatedResult<T> {
    let total = records.len() as u64;
    let items = records
        .into_iter()
        .skip(pagination.offset as usize)
        .take(pagination.limit as usize)
        .collect();
    PaginatedResult {
        items,
        total,
        offset: pagination.offset,
        limit: pagination.limit,
    }
}

/// Counts shown above the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
}

impl FilterSummary {
    /// Re-scan `records`; the caller passes the filtered result.
    pub fn of(records: &[ProductRecord]) -> Self {
        Self {
            total: records.len(),
            in_stock: count_status(records, StockStatus::InStock),
            low_stock: count_status(records, StockStatus::LowStock),
        }
    }
}

pub fn count_status(records: &[ProductRecord], status: StockStatus) -> usize {
    records.iter().filter(|r| r.status == status).count()
}

/// Category filter options: `"all"` first, then first-seen order.
pub fn category_options(collection: &[ProductRecord]) -> Vec<String> {
    let mut seen: Vec<&Category> = Vec::new();
    for record in collection {
        if !seen.contains(&&record.category) {
            seen.push(&record.category);
        }
    }
    std::iter::once(WILDCARD.to_owned())
        .chain(seen.into_iter().map(|c| c.to_string()))
        .collect()
}

/// Status filter options: `"all"` first, then first-seen order.
pub fn status_options(collection: &[ProductRecord]) -> Vec<String> {
    let mut seen: Vec<StockStatus> = Vec::new();
    for record in collection {
        if !seen.contains(&record.status) {
            seen.push(record.status);
        }
    }
    std::iter::once(WILDCARD.to_owned())
        .chain(seen.into_iter().map(|s| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::query::Selector;

    fn product(
        id: u64,
        name: &str,
        category: &str,
        supplier: &str,
        status: StockStatus,
        price_cents: i64,
    ) -> ProductRecord {
        ProductRecord {
            id,
            name: name.into(),
            category: category.into(),
            price: Decimal::new(price_cents, 2),
            quantity: id as u32 * 10,
            supplier: supplier.into(),
            status,
            last_updated: NaiveDate::from_ymd_opt(2025, 1, 20 - id as u32).unwrap(),
            image: None,
            description: String::new(),
        }
    }

    fn collection() -> Vec<ProductRecord> {
        vec![
            product(1, "Premium Coffee Beans", "Beverages", "Global Coffee Co.", StockStatus::InStock, 2499),
            product(2, "Organic Wheat Flour", "Grains", "Farm Fresh Ltd.", StockStatus::InStock, 1250),
            product(3, "Extra Virgin Olive Oil", "Oils", "Mediterranean Foods", StockStatus::LowStock, 1875),
            product(4, "Basmati Rice", "Grains", "Asian Imports Inc.", StockStatus::InStock, 1530),
            product(5, "Dark Chocolate", "Confectionery", "Cocoa Masters", StockStatus::LowStock, 899),
        ]
    }

    fn ids(records: &[ProductRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn unconstrained_query_returns_input_unchanged() {
        let all = collection();
        assert_eq!(filter(&all, &FilterQuery::default()), all);
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let hits = filter(&collection(), &FilterQuery::search("CHOC"));
        assert_eq!(ids(&hits), vec![5]);
    }

    #[test]
    fn search_also_matches_supplier() {
        let hits = filter(&collection(), &FilterQuery::search("farm fresh"));
        assert_eq!(ids(&hits), vec![2]);
    }

    #[test]
    fn predicates_are_anded() {
        let query = FilterQuery::search("i")
            .with_category("Grains")
            .with_status(StockStatus::InStock);
        assert_eq!(ids(&filter(&collection(), &query)), vec![2, 4]);

        let none = FilterQuery::default()
            .with_category("Grains")
            .with_status(StockStatus::LowStock);
        assert!(filter(&collection(), &none).is_empty());
    }

    #[test]
    fn result_is_an_ordered_subset_without_duplicates() {
        let all = collection();
        let queries = [
            FilterQuery::search("o"),
            FilterQuery::default().with_status(StockStatus::LowStock),
            FilterQuery::default().with_category("Grains"),
            FilterQuery::search("zzz"),
        ];
        for query in &queries {
            let hits = ids(&filter(&all, query));
            let mut last = None;
            for id in hits {
                let pos = all.iter().position(|r| r.id == id).unwrap();
                assert!(last.is_none_or(|l| pos > l), "order or uniqueness broken");
                last = Some(pos);
            }
        }
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let query = FilterQuery {
            category: Selector::Only("Dairy".into()),
            ..Default::default()
        };
        assert!(filter(&collection(), &query).is_empty());
    }

    #[test]
    fn summary_counts_filtered_result() {
        let hits = filter(&collection(), &FilterQuery::search("o"));
        let summary = FilterSummary::of(&hits);
        assert_eq!(summary.total, hits.len());
        assert_eq!(summary.in_stock, count_status(&hits, StockStatus::InStock));
        assert_eq!(summary.low_stock, 2);
    }

    #[test]
    fn sort_by_price_both_directions() {
        let mut records = collection();
        sort(&mut records, ProductSort::ascending(SortKey::Price));
        assert_eq!(ids(&records), vec![5, 2, 4, 3, 1]);
        sort(&mut records, ProductSort::descending(SortKey::Price));
        assert_eq!(ids(&records), vec![1, 3, 4, 2, 5]);
    }

    #[test]
    fn sort_by_last_updated() {
        let mut records = collection();
        sort(&mut records, ProductSort::ascending(SortKey::LastUpdated));
        assert_eq!(ids(&records), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn paginate_reports_total_before_slicing() {
        let page = paginate(collection(), Pagination { offset: 3, limit: 10 });
        assert_eq!(page.total, 5);
        assert_eq!(ids(&page.items), vec![4, 5]);

        let past_end = paginate(collection(), Pagination::page(4, 2));
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 5);
    }

    #[test]
    fn option_lists_start_with_wildcard() {
        let all = collection();
        assert_eq!(
            category_options(&all),
            vec!["all", "Beverages", "Grains", "Oils", "Confectionery"]
        );
        assert_eq!(status_options(&all), vec!["all", "In Stock", "Low Stock"]);
    }
}
