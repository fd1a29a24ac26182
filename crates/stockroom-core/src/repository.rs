//! Collaborator trait definitions.
//!
//! The credential directory stands in for a networked identity service
//! and is async. The key-value surface and the product catalog are
//! in-process and synchronous.

use std::sync::Arc;

use crate::error::StockroomResult;
use crate::models::{
    identity::CredentialRecord,
    product::{CreateProduct, ProductRecord, UpdateProduct},
    query::{FilterQuery, ProductSort},
};
use crate::stats::CatalogStats;

/// Page size used by the catalog table.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Pagination parameters for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Zero-based page index with the given page size.
    pub fn page(index: u64, size: u64) -> Self {
        Self {
            offset: index * size,
            limit: size,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

// ---------------------------------------------------------------------------
// Authentication directory
// ---------------------------------------------------------------------------

pub trait CredentialDirectory: Send + Sync {
    /// Look up a directory entry by exact email.
    ///
    /// Returns `StockroomError::NotFound` when no entry matches.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = StockroomResult<CredentialRecord>> + Send;
}

// ---------------------------------------------------------------------------
// Durable key-value surface
// ---------------------------------------------------------------------------

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StockroomResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StockroomResult<()>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StockroomResult<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Arc<K> {
    fn get(&self, key: &str) -> StockroomResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StockroomResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StockroomResult<()> {
        (**self).remove(key)
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> StockroomResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StockroomResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StockroomResult<()> {
        (**self).remove(key)
    }
}

// ---------------------------------------------------------------------------
// Product catalog
// ---------------------------------------------------------------------------

pub trait ProductCatalog: Send + Sync {
    /// The full collection in source order.
    fn list(&self) -> &[ProductRecord];

    fn get_by_id(&self, id: u64) -> StockroomResult<ProductRecord>;

    /// Filter, optionally sort, then paginate.
    fn search(
        &self,
        query: &FilterQuery,
        sort: Option<ProductSort>,
        pagination: Pagination,
    ) -> PaginatedResult<ProductRecord>;

    fn stats(&self) -> CatalogStats;

    /// Validate and acknowledge a new product. The backing collection
    /// is not modified.
    fn create(&self, input: CreateProduct) -> StockroomResult<ProductRecord>;

    /// Validate and acknowledge an edit. The backing collection is not
    /// modified.
    fn update(&self, id: u64, input: UpdateProduct) -> StockroomResult<ProductRecord>;

    /// Acknowledge a deletion. The backing collection is not modified.
    fn delete(&self, id: u64) -> StockroomResult<()>;
}
