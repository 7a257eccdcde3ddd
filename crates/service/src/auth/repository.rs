use async_trait::async_trait;

use super::domain::{AuthUser, Credentials, NewAccount};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError>;
    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError>;
    async fn create_user(&self, account: NewAccount) -> Result<AuthUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, Credentials>>, // key: email
    }

    impl MockAuthRepository {
        /// Drop a user, simulating a row deleted behind a live session.
        pub fn remove(&self, email: &str) {
            self.users.lock().unwrap().remove(email);
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(email).cloned())
        }

        async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().find(|c| c.user.id == id).map(|c| c.user.clone()))
        }

        async fn create_user(&self, account: NewAccount) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(&account.email) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser {
                id: users.len() as i32 + 1,
                name: account.name,
                email: account.email.clone(),
                phone: account.phone,
                address: account.address,
                birth_date: account.birth_date,
            };
            users.insert(account.email, Credentials { user: user.clone(), password_hash: account.password_hash });
            Ok(user)
        }
    }
}
