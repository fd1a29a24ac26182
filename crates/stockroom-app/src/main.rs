//! Stockroom — restores the persisted session, optionally logs in, and
//! reports how each requested path resolves.
//!
//! Usage: `stockroom [PATH...]`. Credentials for a login are read from
//! `STOCKROOM_LOGIN_EMAIL` and `STOCKROOM_LOGIN_PASSWORD`;
//! `STOCKROOM_LOGOUT=1` clears the stored session first.

use stockroom_app::{App, AppConfig, ViewSelection};
use stockroom_core::models::query::FilterQuery;
use stockroom_core::repository::Pagination;
use tracing_subscriber::EnvFilter;

const DEFAULT_PATHS: &[&str] = &["/", "/dashboard", "/products", "/add-product", "/edit-product/3"];

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stockroom=info")),
        )
        .json()
        .init();

    tracing::info!("Starting stockroom...");

    let config = AppConfig::from_env();
    let mut app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize");
            std::process::exit(1);
        }
    };

    app.start();

    if std::env::var("STOCKROOM_LOGOUT").is_ok_and(|v| v == "1") {
        app.logout();
    }

    if let (Ok(email), Ok(password)) = (
        std::env::var("STOCKROOM_LOGIN_EMAIL"),
        std::env::var("STOCKROOM_LOGIN_PASSWORD"),
    ) {
        if let Err(e) = app.login(&email, &password).await {
            tracing::warn!(error = %e, "Login rejected");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let paths: Vec<&str> = if args.is_empty() {
        DEFAULT_PATHS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for path in paths {
        let (landed, selection) = app.open(path);
        match &selection {
            ViewSelection::Render(view) => {
                tracing::info!(path, landed = %landed, ?view, "Render");
            }
            other => tracing::info!(path, landed = %landed, selection = ?other, "No render"),
        }
    }

    let menu: Vec<&str> = app.menu().iter().map(|item| item.label).collect();
    tracing::info!(?menu, theme = app.theme().current().as_str(), "Navigation");

    if app.session().is_authenticated() {
        let view = app.products_view(&FilterQuery::default(), None, Pagination::default());
        tracing::info!(
            total = view.summary.total,
            in_stock = view.summary.in_stock,
            low_stock = view.summary.low_stock,
            "Catalog summary"
        );
    }

    tracing::info!("Stockroom stopped.");
}
