//! Route table and gate-driven view resolution.
//!
//! The table is plain data: each path declares who may enter it and the
//! [`Router`] asks the authorization gate the same question for every
//! entry. No view performs its own capability check.

use stockroom_auth::gate::{Decision, can_enter};
use stockroom_core::models::identity::Role;
use stockroom_core::models::session::Session;
use tracing::debug;

pub const LOGIN_PATH: &str = "/login";
/// Where a soft role denial lands.
pub const DEFAULT_VIEW_PATH: &str = "/products";

const MAX_REDIRECTS: usize = 4;

/// A renderable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Products,
    AddProduct,
    EditProduct { id: u64 },
}

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only for visitors without a session; a session is sent to the path.
    GuestOnly(&'static str),
    /// Requires a session, and the role when one is given.
    Protected(Option<Role>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Login,
    Dashboard,
    Products,
    AddProduct,
    EditProduct,
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    /// Path pattern; a `:name` segment captures a numeric parameter.
    pub pattern: &'static str,
    pub access: Access,
    pub target: Target,
    /// Label shown in the side menu, if the route appears there.
    pub menu_label: Option<&'static str>,
}

pub static ROUTES: &[RouteSpec] = &[
    RouteSpec {
        pattern: LOGIN_PATH,
        access: Access::GuestOnly("/dashboard"),
        target: Target::Login,
        menu_label: None,
    },
    RouteSpec {
        pattern: "/dashboard",
        access: Access::Protected(Some(Role::Manager)),
        target: Target::Dashboard,
        menu_label: Some("Dashboard"),
    },
    RouteSpec {
        pattern: "/products",
        access: Access::Protected(None),
        target: Target::Products,
        menu_label: Some("View Products"),
    },
    RouteSpec {
        pattern: "/add-product",
        access: Access::Protected(None),
        target: Target::AddProduct,
        menu_label: Some("Add Product"),
    },
    RouteSpec {
        pattern: "/edit-product/:id",
        access: Access::Protected(None),
        target: Target::EditProduct,
        menu_label: None,
    },
    RouteSpec {
        pattern: "/",
        access: Access::Public,
        target: Target::Redirect("/dashboard"),
        menu_label: None,
    },
];

/// What the presentation layer should do for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSelection {
    Render(View),
    Redirect(String),
    /// Authenticated, but the role may not enter `path`.
    Forbidden(String),
    NotFound,
}

/// Resolves paths against [`ROUTES`]. Holds only policy, never session
/// state.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    /// When false, a role denial redirects to [`DEFAULT_VIEW_PATH`]
    /// instead of yielding `Forbidden`.
    strict_role_gate: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            strict_role_gate: true,
        }
    }
}

impl Router {
    pub fn new(strict_role_gate: bool) -> Self {
        Self { strict_role_gate }
    }

    pub fn routes(&self) -> &'static [RouteSpec] {
        ROUTES
    }

    /// One resolution step; redirects are returned, not followed.
    pub fn resolve(&self, path: &str, session: Option<&Session>) -> ViewSelection {
        let path = normalize(path);
        let Some((route, param)) = match_route(path) else {
            debug!(path, "No route");
            return ViewSelection::NotFound;
        };

        match route.access {
            Access::Public => {}
            Access::GuestOnly(home) => {
                if session.is_some() {
                    debug!(path, to = home, "Already signed in");
                    return ViewSelection::Redirect(home.to_owned());
                }
            }
            Access::Protected(required) => match can_enter(session, required) {
                Decision::Allow => {}
                Decision::RedirectToLogin => {
                    return ViewSelection::Redirect(LOGIN_PATH.to_owned());
                }
                Decision::Deny if self.strict_role_gate => {
                    return ViewSelection::Forbidden(path.to_owned());
                }
                Decision::Deny => {
                    return ViewSelection::Redirect(DEFAULT_VIEW_PATH.to_owned());
                }
            },
        }

        match route.target {
            Target::Login => ViewSelection::Render(View::Login),
            Target::Dashboard => ViewSelection::Render(View::Dashboard),
            Target::Products => ViewSelection::Render(View::Products),
            Target::AddProduct => ViewSelection::Render(View::AddProduct),
            Target::EditProduct => match param.and_then(|p| p.parse::<u64>().ok()) {
                Some(id) => ViewSelection::Render(View::EditProduct { id }),
                None => ViewSelection::NotFound,
            },
            Target::Redirect(to) => ViewSelection::Redirect(to.to_owned()),
        }
    }

    /// Resolve and follow redirects. Returns the final path alongside the
    /// selection.
    pub fn navigate(&self, path: &str, session: Option<&Session>) -> (String, ViewSelection) {
        let mut current = normalize(path).to_owned();
        for _ in 0..MAX_REDIRECTS {
            match self.resolve(&current, session) {
                ViewSelection::Redirect(next) => current = next,
                other => return (current, other),
            }
        }
        (current, ViewSelection::NotFound)
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn match_route(path: &str) -> Option<(&'static RouteSpec, Option<&str>)> {
    ROUTES.iter().find_map(|route| {
        let mut param = None;
        let mut want = route.pattern.split('/');
        let mut got = path.split('/');
        loop {
            match (want.next(), got.next()) {
                (None, None) => return Some((route, param)),
                (Some(w), Some(g)) if w.starts_with(':') && !g.is_empty() => param = Some(g),
                (Some(w), Some(g)) if w == g => {}
                _ => return None,
            }
        }
    })
}
