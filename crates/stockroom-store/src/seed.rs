//! Static seed data: demo accounts, the product collection and the
//! dashboard sales series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockroom_core::models::identity::Role;
use stockroom_core::models::product::{ProductRecord, StockStatus};
use stockroom_core::stats::SalesPoint;

use crate::directory::SeedAccount;

/// Categories offered by the add/edit forms.
pub const CATEGORIES: &[&str] = &[
    "Beverages",
    "Grains",
    "Oils",
    "Spices",
    "Confectionery",
    "Dairy",
    "Meat",
    "Vegetables",
    "Fruits",
];

/// Suppliers offered by the add/edit forms.
pub const SUPPLIERS: &[&str] = &[
    "Global Coffee Co.",
    "Farm Fresh Ltd.",
    "Mediterranean Foods",
    "Asian Imports Inc.",
    "Cocoa Masters",
    "Mountain Minerals",
];

pub fn demo_accounts() -> Vec<SeedAccount> {
    vec![
        SeedAccount {
            id: 1,
            email: "manager@company.com".into(),
            password: "manager123".into(),
            role: Role::Manager,
            name: "John Manager".into(),
        },
        SeedAccount {
            id: 2,
            email: "keeper@company.com".into(),
            password: "keeper123".into(),
            role: Role::StoreKeeper,
            name: "Jane Keeper".into(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u64,
    name: &str,
    category: &str,
    price: Decimal,
    quantity: u32,
    supplier: &str,
    status: StockStatus,
    day: u32,
    image: &str,
    description: &str,
) -> ProductRecord {
    ProductRecord {
        id,
        name: name.into(),
        category: category.into(),
        price,
        quantity,
        supplier: supplier.into(),
        status,
        last_updated: NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default(),
        image: Some(format!(
            "https://images.pexels.com/photos/{image}?auto=compress&cs=tinysrgb&w=300"
        )),
        description: description.into(),
    }
}

pub fn products() -> Vec<ProductRecord> {
    vec![
        product(
            1,
            "Premium Coffee Beans",
            "Beverages",
            Decimal::new(2499, 2),
            150,
            "Global Coffee Co.",
            StockStatus::InStock,
            15,
            "894695/pexels-photo-894695.jpeg",
            "High-quality arabica coffee beans from South America",
        ),
        product(
            2,
            "Organic Wheat Flour",
            "Grains",
            Decimal::new(1250, 2),
            200,
            "Farm Fresh Ltd.",
            StockStatus::InStock,
            14,
            "1580321/pexels-photo-1580321.jpeg",
            "Certified organic wheat flour for baking",
        ),
        product(
            3,
            "Extra Virgin Olive Oil",
            "Oils",
            Decimal::new(1875, 2),
            75,
            "Mediterranean Foods",
            StockStatus::LowStock,
            13,
            "33783/olive-oil-salad-dressing-cooking-olive.jpg",
            "Cold-pressed extra virgin olive oil from Italy",
        ),
        product(
            4,
            "Basmati Rice",
            "Grains",
            Decimal::new(1530, 2),
            300,
            "Asian Imports Inc.",
            StockStatus::InStock,
            12,
            "723198/pexels-photo-723198.jpeg",
            "Premium aged basmati rice from India",
        ),
        product(
            5,
            "Dark Chocolate",
            "Confectionery",
            Decimal::new(899, 2),
            50,
            "Cocoa Masters",
            StockStatus::LowStock,
            11,
            "65882/chocolate-dark-coffee-confiserie-65882.jpeg",
            "70% dark chocolate bars made from Belgian cocoa",
        ),
        product(
            6,
            "Himalayan Pink Salt",
            "Spices",
            Decimal::new(945, 2),
            120,
            "Mountain Minerals",
            StockStatus::InStock,
            10,
            "1340116/pexels-photo-1340116.jpeg",
            "Pure Himalayan pink rock salt for cooking",
        ),
    ]
}

pub fn sales_series() -> Vec<SalesPoint> {
    [
        ("Jan", 65_000, 120),
        ("Feb", 78_000, 145),
        ("Mar", 85_000, 160),
        ("Apr", 92_000, 175),
        ("May", 88_000, 168),
        ("Jun", 95_000, 190),
    ]
    .into_iter()
    .map(|(month, sales, orders)| SalesPoint {
        month: month.into(),
        sales,
        orders,
    })
    .collect()
}
