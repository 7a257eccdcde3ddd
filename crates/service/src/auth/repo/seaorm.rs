use sea_orm::DatabaseConnection;

use crate::auth::domain::{AuthUser, Credentials, NewAccount};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

#[derive(Clone)]
pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<Credentials>, AuthError> {
        let res = models::user::find_by_email(&self.db, email).await?;
        Ok(res.map(Credentials::from))
    }

    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::find_by_id(&self.db, id).await?;
        Ok(res.map(AuthUser::from))
    }

    async fn create_user(&self, account: NewAccount) -> Result<AuthUser, AuthError> {
        let created = models::user::create(
            &self.db,
            models::user::NewUser {
                name: account.name,
                email: account.email,
                password_hash: account.password_hash,
                phone: account.phone,
                address: account.address,
                birth_date: account.birth_date,
            },
        )
        .await?;
        Ok(created.into())
    }
}
