//! Application wiring.
//!
//! Everything a view needs is constructed here once and reached through
//! [`App`]; nothing is looked up from ambient state.

use std::sync::Arc;

use stockroom_auth::error::AuthError;
use stockroom_auth::gate::{Decision, can_enter};
use stockroom_auth::session::{LoginInput, SessionStore};
use stockroom_core::error::{StockroomError, StockroomResult};
use stockroom_core::filter::{self, FilterSummary};
use stockroom_core::models::identity::Role;
use stockroom_core::models::product::ProductRecord;
use stockroom_core::models::query::{FilterQuery, ProductSort};
use stockroom_core::models::session::Session;
use stockroom_core::repository::{KeyValueStore, PaginatedResult, Pagination, ProductCatalog};
use stockroom_core::stats::{CatalogStats, SalesPoint};
use stockroom_store::{FileKeyValueStore, StaticCatalog, StaticCredentialDirectory, seed};
use tracing::info;

use crate::config::AppConfig;
use crate::navigation::{self, NavItem};
use crate::routes::{Router, ViewSelection};
use crate::theme::ThemeHolder;

/// Data behind the products view.
#[derive(Debug, Clone)]
pub struct ProductsView {
    pub page: PaginatedResult<ProductRecord>,
    /// Counts over the whole filtered result, not just this page.
    pub summary: FilterSummary,
    pub category_options: Vec<String>,
    pub status_options: Vec<String>,
}

/// Data behind the manager dashboard.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: CatalogStats,
    pub sales: Vec<SalesPoint>,
}

pub struct App<K: KeyValueStore> {
    session: SessionStore<StaticCredentialDirectory, Arc<K>>,
    theme: ThemeHolder<Arc<K>>,
    catalog: StaticCatalog,
    router: Router,
}

impl App<FileKeyValueStore> {
    /// Build the application over the file-backed key-value surface.
    pub fn from_config(config: AppConfig) -> StockroomResult<Self> {
        let storage = FileKeyValueStore::from_config(&config.store);
        info!(path = %storage.path().display(), "Using file key-value store");
        Self::with_storage(storage, config)
    }
}

impl<K: KeyValueStore> App<K> {
    pub fn with_storage(storage: K, config: AppConfig) -> StockroomResult<Self> {
        let storage = Arc::new(storage);
        let directory = StaticCredentialDirectory::demo(config.auth.pepper.as_deref())?;

        Ok(Self {
            session: SessionStore::new(directory, Arc::clone(&storage), config.auth),
            theme: ThemeHolder::load(storage),
            catalog: StaticCatalog::seeded(),
            router: Router::new(config.strict_role_gate),
        })
    }

    /// Restore any persisted session. Call once at start-up.
    pub fn start(&mut self) -> Option<&Session> {
        self.session.restore();
        self.session.current()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.session.login(LoginInput::new(email, password)).await
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn session(&self) -> &SessionStore<StaticCredentialDirectory, Arc<K>> {
        &self.session
    }

    pub fn theme(&self) -> &ThemeHolder<Arc<K>> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeHolder<Arc<K>> {
        &mut self.theme
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Resolve `path` for the current session, following redirects.
    pub fn open(&self, path: &str) -> (String, ViewSelection) {
        self.router.navigate(path, self.session.current())
    }

    pub fn menu(&self) -> Vec<NavItem> {
        navigation::menu_for(self.session.current())
    }

    /// Recompute the products view for the given predicates.
    pub fn products_view(
        &self,
        query: &FilterQuery,
        sort: Option<ProductSort>,
        pagination: Pagination,
    ) -> ProductsView {
        let all = self.catalog.list();
        let mut matched = filter::filter(all, query);
        let summary = FilterSummary::of(&matched);
        if let Some(sort) = sort {
            filter::sort(&mut matched, sort);
        }
        ProductsView {
            page: filter::paginate(matched, pagination),
            summary,
            category_options: filter::category_options(all),
            status_options: filter::status_options(all),
        }
    }

    /// Manager-only statistics.
    ///
    /// Always enforces the Manager role. `strict_role_gate` only changes
    /// how the router answers a denied path; it never opens this data to
    /// other roles.
    pub fn dashboard(&self) -> StockroomResult<DashboardView> {
        match can_enter(self.session.current(), Some(Role::Manager)) {
            Decision::Allow => Ok(DashboardView {
                stats: self.catalog.stats(),
                sales: seed::sales_series(),
            }),
            Decision::RedirectToLogin => Err(StockroomError::AuthenticationFailed {
                reason: "not logged in".into(),
            }),
            Decision::Deny => Err(StockroomError::AuthorizationDenied {
                reason: "dashboard requires the Manager role".into(),
            }),
        }
    }

    /// Load a product into the edit form.
    pub fn product_for_edit(&self, id: u64) -> StockroomResult<ProductRecord> {
        self.catalog.get_by_id(id)
    }
}
