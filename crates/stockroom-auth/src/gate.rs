//! Role-based authorization gate.

use stockroom_core::models::identity::Role;
use stockroom_core::models::session::Session;
use tracing::debug;

/// Outcome of asking whether a session may enter a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    /// Authenticated, but the role does not satisfy the requirement.
    Deny,
}

/// Decide whether `session` may enter a view requiring `required`.
///
/// No session always redirects to login, whatever the requirement.
pub fn can_enter(session: Option<&Session>, required: Option<Role>) -> Decision {
    let decision = match (session, required) {
        (None, _) => Decision::RedirectToLogin,
        (Some(s), Some(role)) if !s.has_role(role) => Decision::Deny,
        (Some(_), _) => Decision::Allow,
    };
    debug!(
        role = session.map(|s| s.role().as_str()),
        required = required.map(|r| r.as_str()),
        ?decision,
        "Gate decision"
    );
    decision
}

#[cfg(test)]
mod tests {
    use stockroom_core::models::identity::Identity;

    use super::*;

    fn session(role: Role) -> Session {
        Session::new(
            Identity {
                id: 1,
                email: "someone@company.com".into(),
                role,
                name: "Someone".into(),
            },
            "stk_x",
        )
    }

    #[test]
    fn no_session_always_redirects() {
        for required in [None, Some(Role::Manager), Some(Role::StoreKeeper)] {
            assert_eq!(can_enter(None, required), Decision::RedirectToLogin);
        }
    }

    #[test]
    fn any_session_enters_unrestricted_views() {
        assert_eq!(can_enter(Some(&session(Role::StoreKeeper)), None), Decision::Allow);
        assert_eq!(can_enter(Some(&session(Role::Manager)), None), Decision::Allow);
    }

    #[test]
    fn store_keeper_is_denied_manager_views() {
        let decision = can_enter(Some(&session(Role::StoreKeeper)), Some(Role::Manager));
        assert_eq!(decision, Decision::Deny);
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            can_enter(Some(&session(Role::Manager)), Some(Role::Manager)),
            Decision::Allow
        );
    }
}
