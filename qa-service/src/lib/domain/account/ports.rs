use async_trait::async_trait;
use auth::Principal;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::RegisterAccountCommand;
use crate::account::models::Role;
use crate::account::models::UpdateAccountCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new admin or user account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is registered under either role
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError>;

    /// Verify credentials for the given role and issue a bearer token.
    ///
    /// # Returns
    /// The authenticated account and its signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `DatabaseError` - Database operation failed
    async fn login(
        &self,
        email: &str,
        role: Role,
        password: &str,
    ) -> Result<(Account, String), AccountError>;

    /// Resolve a decoded token principal to a live account.
    ///
    /// The subject must exist and still carry the role the token claims;
    /// a token for a deleted account fails here.
    ///
    /// # Errors
    /// * `NotFound` - No account matches the principal's id and role
    /// * `DatabaseError` - Database operation failed
    async fn authorize(&self, principal: Principal) -> Result<Account, AccountError>;

    /// Update an existing account with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DisplayNameNotApplicable` - Display name given for an admin account
    /// * `DatabaseError` - Database operation failed
    async fn update_account(
        &self,
        id: AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError>;

    /// Delete an existing account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_account(&self, id: AccountId) -> Result<(), AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by email, regardless of role.
    ///
    /// Used for the joint-uniqueness check at registration.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by email under a specific role.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email_and_role(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Option<Account>, AccountError>;

    /// Update an existing account in storage.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, account: Account) -> Result<Account, AccountError>;

    /// Remove an account from storage.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
}
