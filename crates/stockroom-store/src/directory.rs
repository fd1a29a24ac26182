//! Fixed in-memory implementation of [`CredentialDirectory`].
//!
//! Entries are hashed once at construction with
//! [`stockroom_auth::password::hash_password`]; the session store must
//! verify with the same pepper.

use stockroom_auth::password::hash_password;
use stockroom_core::error::{StockroomError, StockroomResult};
use stockroom_core::models::identity::{CredentialRecord, Role};
use stockroom_core::repository::CredentialDirectory;
use tracing::debug;

use crate::error::StoreError;

/// A directory entry before its password is hashed.
#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

/// The authentication directory as a fixed list of accounts.
#[derive(Debug, Clone)]
pub struct StaticCredentialDirectory {
    records: Vec<CredentialRecord>,
}

impl StaticCredentialDirectory {
    /// Hash every account's password and build the directory.
    pub fn new(accounts: Vec<SeedAccount>, pepper: Option<&str>) -> Result<Self, StoreError> {
        let records = accounts
            .into_iter()
            .map(|account| -> Result<CredentialRecord, StoreError> {
                Ok(CredentialRecord {
                    id: account.id,
                    password_hash: hash_password(&account.password, pepper)
                        .map_err(|e| StoreError::Hashing(e.to_string()))?,
                    email: account.email,
                    role: account.role,
                    name: account.name,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(accounts = records.len(), "Built credential directory");
        Ok(Self { records })
    }

    /// Directory holding the two demo accounts.
    pub fn demo(pepper: Option<&str>) -> Result<Self, StoreError> {
        Self::new(crate::seed::demo_accounts(), pepper)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialDirectory for StaticCredentialDirectory {
    async fn find_by_email(&self, email: &str) -> StockroomResult<CredentialRecord> {
        self.records
            .iter()
            .find(|r| r.email == email)
            .cloned()
            .ok_or_else(|| StockroomError::not_found("user", email))
    }
}
