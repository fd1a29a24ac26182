//! Opaque session token synthesis.
//!
//! Tokens are capability proofs only; nothing in the system parses them.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Generate a random session token: `prefix` followed by 32 random
/// bytes, base64url-encoded without padding.
pub fn generate_session_token(prefix: &str) -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    format!("{prefix}{}", URL_SAFE_NO_PAD.encode(bytes))
}

/// Short SHA-256 fingerprint of a token for log lines.
pub fn fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..12].to_owned()
}
