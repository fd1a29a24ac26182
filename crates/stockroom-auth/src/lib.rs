//! Stockroom Auth — password verification, session token synthesis,
//! the persisted session store and the role-based authorization gate.

pub mod config;
pub mod error;
pub mod gate;
pub mod password;
pub mod session;
pub mod state;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use gate::{Decision, can_enter};
pub use session::{LoginInput, SessionStore};
pub use state::{SessionEvent, SessionState};
