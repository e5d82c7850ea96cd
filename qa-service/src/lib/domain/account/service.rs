use std::sync::Arc;

use async_trait::async_trait;
use auth::Principal;
use auth::TokenService;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::RegisterAccountCommand;
use crate::account::models::Role;
use crate::account::models::UpdateAccountCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Owns credential handling: password hashes never leave this layer in
/// plaintext form, and tokens are issued only after a successful verify.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
    tokens: Arc<TokenService>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    pub fn new(repository: Arc<AR>, tokens: Arc<TokenService>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
            tokens,
        }
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
        // Joint uniqueness across roles: an admin email can never also be a
        // user email. The unique constraint backs this up under races.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            email: command.email,
            role: command.role,
            display_name: command.display_name,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(account).await
    }

    async fn login(
        &self,
        email: &str,
        role: Role,
        password: &str,
    ) -> Result<(Account, String), AccountError> {
        let account = self
            .repository
            .find_by_email_and_role(email, role)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &account.password_hash) {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.tokens.issue(account.principal())?;

        Ok((account, token))
    }

    async fn authorize(&self, principal: Principal) -> Result<Account, AccountError> {
        let id = AccountId(principal.id());
        let account = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))?;

        // The stored role must still match the token's tag.
        if account.principal() != principal {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(account)
    }

    async fn update_account(
        &self,
        id: AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError> {
        let mut account = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))?;

        if let Some(new_email) = command.email {
            account.email = new_email;
        }

        if let Some(new_password) = command.password {
            account.password_hash = self.password_hasher.hash(&new_password)?;
        }

        if let Some(new_name) = command.display_name {
            if account.role == Role::Admin {
                return Err(AccountError::DisplayNameNotApplicable);
            }
            account.display_name = Some(new_name);
        }

        self.repository.update(account).await
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), AccountError> {
        self.repository.delete(&id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::account::models::DisplayName;
    use crate::account::models::EmailAddress;

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: Account) -> Result<Account, AccountError>;
            async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
            async fn find_by_email_and_role(&self, email: &str, role: Role) -> Result<Option<Account>, AccountError>;
            async fn update(&self, account: Account) -> Result<Account, AccountError>;
            async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
        }
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::hours(1),
        ))
    }

    fn stored_account(role: Role, password: &str) -> Account {
        let hasher = auth::PasswordHasher::new();
        Account {
            id: AccountId::new(),
            email: EmailAddress::new("guest@hotel.example".to_string()).unwrap(),
            role,
            display_name: match role {
                Role::User => Some(DisplayName::new("Guest".to_string()).unwrap()),
                Role::Admin => None,
            },
            password_hash: hasher.hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_email()
            .with(eq("guest@hotel.example"))
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|account| {
                account.role == Role::User
                    && account.password_hash.starts_with("$argon2")
                    && account.password_hash != "pw1"
            })
            .times(1)
            .returning(|account| Ok(account));

        let service = AccountService::new(Arc::new(repository), token_service());

        let command = RegisterAccountCommand {
            email: EmailAddress::new("guest@hotel.example".to_string()).unwrap(),
            password: "pw1".to_string(),
            role: Role::User,
            display_name: Some(DisplayName::new("Guest".to_string()).unwrap()),
        };

        let account = service.register(command).await.unwrap();
        assert!(auth::PasswordHasher::new().verify("pw1", &account.password_hash));
        assert!(!auth::PasswordHasher::new().verify("pw2", &account.password_hash));
    }

    #[tokio::test]
    async fn test_register_rejects_email_used_by_other_role() {
        let mut repository = MockTestAccountRepository::new();

        // An admin already owns this email; registering it as a user fails.
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_account(Role::Admin, "adminpw"))));
        repository.expect_create().times(0);

        let service = AccountService::new(Arc::new(repository), token_service());

        let command = RegisterAccountCommand {
            email: EmailAddress::new("guest@hotel.example".to_string()).unwrap(),
            password: "pw1".to_string(),
            role: Role::User,
            display_name: None,
        };

        let result = service.register(command).await;
        assert!(matches!(result, Err(AccountError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_issues_decodable_token() {
        let mut repository = MockTestAccountRepository::new();
        let account = stored_account(Role::User, "pw1");
        let account_id = account.id;

        repository
            .expect_find_by_email_and_role()
            .with(eq("guest@hotel.example"), eq(Role::User))
            .times(1)
            .returning(move |_, _| Ok(Some(account.clone())));

        let tokens = token_service();
        let service = AccountService::new(Arc::new(repository), Arc::clone(&tokens));

        let (logged_in, token) = service
            .login("guest@hotel.example", Role::User, "pw1")
            .await
            .unwrap();
        assert_eq!(logged_in.id, account_id);

        let claims = tokens.decode(&token).unwrap();
        assert_eq!(claims.principal, Principal::User(account_id.0));
        assert!(!claims.principal.is_admin());
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_alike() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_email_and_role()
            .with(eq("guest@hotel.example"), eq(Role::User))
            .times(1)
            .returning(|_, _| Ok(Some(stored_account(Role::User, "pw1"))));
        repository
            .expect_find_by_email_and_role()
            .with(eq("nobody@hotel.example"), eq(Role::User))
            .times(1)
            .returning(|_, _| Ok(None));

        let service = AccountService::new(Arc::new(repository), token_service());

        let wrong_password = service
            .login("guest@hotel.example", Role::User, "wrong")
            .await;
        let unknown_email = service
            .login("nobody@hotel.example", Role::User, "pw1")
            .await;

        assert!(matches!(
            wrong_password,
            Err(AccountError::InvalidCredentials)
        ));
        assert!(matches!(
            unknown_email,
            Err(AccountError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_authorize_rejects_deleted_account() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository), token_service());

        let result = service
            .authorize(Principal::User(uuid::Uuid::new_v4()))
            .await;
        assert!(matches!(result, Err(AccountError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_authorize_rejects_role_mismatch() {
        let mut repository = MockTestAccountRepository::new();
        let account = stored_account(Role::User, "pw1");
        let account_id = account.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = AccountService::new(Arc::new(repository), token_service());

        // A forged admin tag over a user account id does not authorize.
        let result = service.authorize(Principal::Admin(account_id.0)).await;
        assert!(matches!(result, Err(AccountError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rehashes_new_password() {
        let mut repository = MockTestAccountRepository::new();
        let account = stored_account(Role::User, "old_pw");
        let account_id = account.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));
        repository
            .expect_update()
            .withf(|account| auth::PasswordHasher::new().verify("new_pw", &account.password_hash))
            .times(1)
            .returning(|account| Ok(account));

        let service = AccountService::new(Arc::new(repository), token_service());

        let command = UpdateAccountCommand {
            email: None,
            password: Some("new_pw".to_string()),
            display_name: None,
        };

        let result = service.update_account(account_id, command).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_display_name_rejected_for_admin() {
        let mut repository = MockTestAccountRepository::new();
        let account = stored_account(Role::Admin, "adminpw");
        let account_id = account.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));
        repository.expect_update().times(0);

        let service = AccountService::new(Arc::new(repository), token_service());

        let command = UpdateAccountCommand {
            email: None,
            password: None,
            display_name: Some(DisplayName::new("Front Desk".to_string()).unwrap()),
        };

        let result = service.update_account(account_id, command).await;
        assert!(matches!(
            result,
            Err(AccountError::DisplayNameNotApplicable)
        ));
    }

    #[tokio::test]
    async fn test_delete_account_not_found() {
        let mut repository = MockTestAccountRepository::new();
        let missing = AccountId::new();

        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(AccountError::NotFound(missing.to_string())));

        let service = AccountService::new(Arc::new(repository), token_service());

        let result = service.delete_account(missing).await;
        assert!(matches!(result, Err(AccountError::NotFound(_))));
    }
}
