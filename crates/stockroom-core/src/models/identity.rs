//! Identity and role domain model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StockroomError;

/// Capability tag carried by every identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    #[serde(rename = "Store Keeper")]
    StoreKeeper,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::StoreKeeper => "Store Keeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manager" => Ok(Role::Manager),
            "Store Keeper" | "StoreKeeper" => Ok(Role::StoreKeeper),
            other => Err(StockroomError::validation(format!("unknown role: {other}"))),
        }
    }
}

/// An authenticated principal, as persisted under the `user` key.
///
/// Never carries the password; see [`CredentialRecord`] for the
/// directory-side shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: u64,
    pub email: String,
    pub role: Role,
    pub name: String,
}

/// A directory entry: an identity plus its Argon2id PHC hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
}

impl CredentialRecord {
    /// The identity with the password hash stripped.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            email: self.email.clone(),
            role: self.role,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keeper_uses_spaced_wire_name() {
        let json = serde_json::to_string(&Role::StoreKeeper).unwrap();
        assert_eq!(json, "\"Store Keeper\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::StoreKeeper);
    }

    #[test]
    fn identity_json_shape() {
        let identity = Identity {
            id: 1,
            email: "manager@company.com".into(),
            role: Role::Manager,
            name: "John Manager".into(),
        };
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["role"], "Manager");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn role_parses_display_form() {
        assert_eq!("Store Keeper".parse::<Role>().unwrap(), Role::StoreKeeper);
        assert_eq!(Role::Manager.to_string().parse::<Role>().unwrap(), Role::Manager);
        assert!("Cashier".parse::<Role>().is_err());
    }
}
