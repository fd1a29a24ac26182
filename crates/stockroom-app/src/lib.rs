//! Stockroom App — route composition, navigation, theme preference and
//! the wiring that hands them to the presentation layer.

pub mod app;
pub mod config;
pub mod navigation;
pub mod routes;
pub mod theme;

pub use app::{App, DashboardView, ProductsView};
pub use config::AppConfig;
pub use routes::{Router, View, ViewSelection};
