//! Side menu entries, derived from the route table.

use stockroom_auth::gate::{Decision, can_enter};
use stockroom_core::models::session::Session;

use crate::routes::{Access, ROUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

/// Menu entries `session` may enter, in route-table order.
pub fn menu_for(session: Option<&Session>) -> Vec<NavItem> {
    ROUTES
        .iter()
        .filter_map(|route| {
            let label = route.menu_label?;
            let allowed = match route.access {
                Access::Public => true,
                Access::GuestOnly(_) => session.is_none(),
                Access::Protected(required) => can_enter(session, required) == Decision::Allow,
            };
            allowed.then_some(NavItem {
                path: route.pattern,
                label,
            })
        })
        .collect()
}
