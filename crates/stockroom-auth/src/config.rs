//! Authentication configuration.

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Key-value key holding the session token (default: `token`).
    pub token_key: String,
    /// Key-value key holding the serialized identity (default: `user`).
    pub user_key: String,
    /// Prefix of every synthesized session token.
    pub token_prefix: String,
    /// Optional pepper prepended to passwords before Argon2id verification.
    pub pepper: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: "token".into(),
            user_key: "user".into(),
            token_prefix: "stk_".into(),
            pepper: None,
        }
    }
}
