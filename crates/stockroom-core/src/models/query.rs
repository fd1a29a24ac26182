//! Catalog query model: filter predicates, sorting and pagination.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::product::{Category, StockStatus};

/// The literal the catalog view uses for "no constraint".
pub const WILDCARD: &str = "all";

/// A predicate value that is either the wildcard or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> Selector<T> {
    /// Parse a selector as the view submits it: `"all"` or a value.
    pub fn parse(raw: &str) -> Result<Self, T::Err> {
        if raw == WILDCARD {
            Ok(Selector::All)
        } else {
            raw.parse().map(Selector::Only)
        }
    }
}

/// The search/category/status predicate tuple. Predicates are AND-ed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterQuery {
    pub search_text: String,
    pub category: Selector<Category>,
    pub status: Selector<StockStatus>,
}

impl FilterQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Selector::Only(category.into());
        self
    }

    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = Selector::Only(status);
        self
    }

    /// True when no predicate constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search_text.is_empty()
            && matches!(self.category, Selector::All)
            && matches!(self.status, Selector::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Price,
    Quantity,
    LastUpdated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl ProductSort {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Descending,
        }
    }
}
