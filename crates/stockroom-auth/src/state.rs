//! Session lifecycle state machine.
//!
//! ```text
//!   Unknown ──SetLoading(true)──▶ LoadingRestore ──Restored(Some)──▶ Authenticated
//!      │                              │    │                              │
//!      │                 SetLoading(false) Restored(None)             LoggedOut
//!      │                              ▼    ▼                              ▼
//!      └──────────Restored(None)───▶ Anonymous ◀──────────────────────────┘
//! ```
//!
//! `LoggedIn` moves any state to `Authenticated`; `LoggedOut` moves any
//! state to `Anonymous`.

use stockroom_core::models::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Before the persisted session has been looked at.
    #[default]
    Unknown,
    /// A restore or login is in flight and no session is held.
    LoadingRestore,
    Authenticated(Session),
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Outcome of reading the persisted session.
    Restored(Option<Session>),
    LoggedIn(Session),
    LoggedOut,
    SetLoading(bool),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// True until the first restore has settled, and while a login from
    /// an anonymous state is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown | SessionState::LoadingRestore)
    }

    /// Compute the next state. Never mutates in place.
    pub fn transition(self, event: SessionEvent) -> SessionState {
        match (self, event) {
            (_, SessionEvent::LoggedIn(session)) => SessionState::Authenticated(session),
            (_, SessionEvent::LoggedOut) => SessionState::Anonymous,
            (_, SessionEvent::Restored(Some(session))) => SessionState::Authenticated(session),
            (_, SessionEvent::Restored(None)) => SessionState::Anonymous,
            // An authenticated session stays usable while a new login runs.
            (SessionState::Authenticated(session), SessionEvent::SetLoading(_)) => {
                SessionState::Authenticated(session)
            }
            (_, SessionEvent::SetLoading(true)) => SessionState::LoadingRestore,
            (SessionState::Unknown | SessionState::LoadingRestore, SessionEvent::SetLoading(false)) => {
                SessionState::Anonymous
            }
            (SessionState::Anonymous, SessionEvent::SetLoading(false)) => SessionState::Anonymous,
        }
    }
}
