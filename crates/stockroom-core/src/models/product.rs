//! Product catalog domain model.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{StockroomError, StockroomResult};

/// Product category. The set is open: any non-blank name is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

/// Stock status. Set by an external process; never derived from quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Stock" => Ok(StockStatus::InStock),
            "Low Stock" => Ok(StockStatus::LowStock),
            "Out of Stock" => Ok(StockStatus::OutOfStock),
            other => Err(StockroomError::validation(format!(
                "unknown stock status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub quantity: u32,
    pub supplier: String,
    pub status: StockStatus,
    pub last_updated: NaiveDate,
    pub image: Option<String>,
    pub description: String,
}

impl ProductRecord {
    /// Stock value of this line: `price × quantity`.
    pub fn stock_value(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Fields submitted by the add-product form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub quantity: u32,
    pub supplier: String,
    pub status: StockStatus,
    pub image: Option<String>,
    pub description: String,
}

impl CreateProduct {
    /// Apply the form's required-field and range rules.
    pub fn validate(&self) -> StockroomResult<()> {
        require(&self.name, "Please enter product name")?;
        require(self.category.as_str(), "Please select a category")?;
        require(&self.description, "Please enter product description")?;
        require_non_negative(self.price)?;
        require(&self.supplier, "Please select a supplier")?;
        Ok(())
    }
}

/// Fields that can be changed by the edit-product form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
    pub supplier: Option<String>,
    pub status: Option<StockStatus>,
    /// `Some(Some(url))` = set, `Some(None)` = clear, `None` = no change.
    pub image: Option<Option<String>>,
    pub description: Option<String>,
}

impl UpdateProduct {
    pub fn validate(&self) -> StockroomResult<()> {
        if let Some(name) = &self.name {
            require(name, "Please enter product name")?;
        }
        if let Some(category) = &self.category {
            require(category.as_str(), "Please select a category")?;
        }
        if let Some(description) = &self.description {
            require(description, "Please enter product description")?;
        }
        if let Some(price) = self.price {
            require_non_negative(price)?;
        }
        if let Some(supplier) = &self.supplier {
            require(supplier, "Please select a supplier")?;
        }
        Ok(())
    }

    /// Produce the record as it would look after this update.
    pub fn apply(self, mut record: ProductRecord, today: NaiveDate) -> ProductRecord {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        if let Some(supplier) = self.supplier {
            record.supplier = supplier;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(image) = self.image {
            record.image = image;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        record.last_updated = today;
        record
    }
}

fn require(value: &str, message: &str) -> StockroomResult<()> {
    if value.trim().is_empty() {
        return Err(StockroomError::validation(message));
    }
    Ok(())
}

fn require_non_negative(price: Decimal) -> StockroomResult<()> {
    if price < Decimal::ZERO {
        return Err(StockroomError::validation("Price must not be negative"));
    }
    Ok(())
}
