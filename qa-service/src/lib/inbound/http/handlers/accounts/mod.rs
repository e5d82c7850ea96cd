use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::account::models::Account;

pub mod create_account;
pub mod delete_account;
pub mod update_account;

/// Response body shared by the account handlers. Never carries the
/// password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.as_str().to_string(),
            role: account.role.as_str().to_string(),
            display_name: account.display_name.as_ref().map(|n| n.as_str().to_string()),
            created_at: account.created_at,
        }
    }
}
