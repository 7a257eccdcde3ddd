use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use tracing::{info, debug, warn, instrument};

use super::domain::{RegisterInput, LoginInput, AuthUser, NewAccount};
use super::errors::AuthError;
use super::repository::AuthRepository;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new user with an Argon2 password hash.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MockAuthRepository::default()));
    /// let input = RegisterInput {
    ///     name: "Test".into(),
    ///     email: "user@example.com".into(),
    ///     password: "Secret123".into(),
    ///     phone: None,
    ///     address: None,
    ///     birth_date: None,
    /// };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        let email = input.email.trim().to_string();
        models::user::validate_email(&email)?;
        models::user::validate_name(&input.name)?;
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!("password too short (>={MIN_PASSWORD_LEN})")));
        }
        if self.repo.find_credentials_by_email(&email).await?.is_some() {
            debug!("email already registered");
            return Err(AuthError::Conflict);
        }

        let password = input.password;
        let password_hash = blocking(move || hash_password(&password)).await??;
        let user = self.repo.create_user(NewAccount {
            name: input.name.trim().to_string(),
            email,
            password_hash,
            phone: input.phone,
            address: input.address,
            birth_date: input.birth_date,
        }).await?;
        info!(user_id = user.id, "user_registered");
        Ok(user)
    }

    /// Check an email/password pair and return the matching user.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthUser, AuthError> {
        let cred = self.repo
            .find_credentials_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let password = input.password;
        let stored = cred.password_hash.clone();
        match blocking(move || verify_password(&password, &stored)).await? {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::Unauthorized),
            // Seeded accounts store a placeholder that never parses
            Err(e) => {
                warn!(user_id = cred.user.id, error = %e, "stored password hash is not usable");
                return Err(AuthError::Unauthorized);
            }
        }

        info!(user_id = cred.user.id, "user_logged_in");
        Ok(cred.user)
    }

    /// Load the user a session points at; `None` means the session is stale.
    pub async fn resolve_user(&self, user_id: i32) -> Result<Option<AuthUser>, AuthError> {
        let user = self.repo.find_user_by_id(user_id).await?;
        if user.is_none() {
            debug!(user_id, "session user not found");
        }
        Ok(user)
    }
}

/// Run Argon2 work on the blocking pool so request tasks keep making progress.
async fn blocking<T, F>(f: F) -> Result<T, AuthError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// `Err` means the stored hash is not a parsable PHC string.
fn verify_password(password: &str, stored: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;
    use chrono::NaiveDate;

    fn svc() -> (Arc<MockAuthRepository>, AuthService<MockAuthRepository>) {
        let repo = Arc::new(MockAuthRepository::default());
        (repo.clone(), AuthService::new(repo))
    }

    fn input(email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            name: "Anna".into(),
            email: email.into(),
            password: password.into(),
            phone: Some("+39 111".into()),
            address: Some("Via Roma 1".into()),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let (_, svc) = svc();
        let registered = svc.register(input("anna@example.com", "Passw0rd!")).await.unwrap();
        assert_eq!(registered.phone.as_deref(), Some("+39 111"));

        let user = svc
            .login(LoginInput { email: "anna@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap();
        assert_eq!(user, registered);
    }

    #[tokio::test]
    async fn stores_a_salted_hash() {
        let (repo, svc) = svc();
        svc.register(input("a@example.com", "Passw0rd!")).await.unwrap();
        svc.register(input("b@example.com", "Passw0rd!")).await.unwrap();

        let a = repo.find_credentials_by_email("a@example.com").await.unwrap().unwrap();
        let b = repo.find_credentials_by_email("b@example.com").await.unwrap().unwrap();
        assert!(a.password_hash.starts_with("$argon2"));
        assert_ne!(a.password_hash, "Passw0rd!");
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let (_, svc) = svc();
        svc.register(input("anna@example.com", "Passw0rd!")).await.unwrap();
        let err = svc
            .login(LoginInput { email: "anna@example.com".into(), password: "nope-nope".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn unknown_email_is_unauthorized() {
        let (_, svc) = svc();
        let err = svc
            .login(LoginInput { email: "ghost@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let (_, svc) = svc();
        svc.register(input("anna@example.com", "Passw0rd!")).await.unwrap();
        let err = svc.register(input(" anna@example.com ", "Other-pass1")).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
        assert_eq!(err.code(), 1002);
    }

    #[tokio::test]
    async fn rejects_invalid_input() {
        let (_, svc) = svc();
        let short = svc.register(input("anna@example.com", "short")).await.unwrap_err();
        assert!(matches!(short, AuthError::Validation(_)));

        let bad_email = svc.register(input("anna.example.com", "Passw0rd!")).await.unwrap_err();
        assert!(matches!(bad_email, AuthError::Validation(_)));

        let mut blank = input("anna@example.com", "Passw0rd!");
        blank.name = " ".into();
        assert!(matches!(svc.register(blank).await.unwrap_err(), AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn unusable_stored_hash_is_unauthorized() {
        let repo = Arc::new(MockAuthRepository::default());
        repo.create_user(NewAccount {
            name: "Seeded".into(),
            email: "seed@example.com".into(),
            password_hash: "!".into(),
            phone: None,
            address: None,
            birth_date: None,
        })
        .await
        .unwrap();
        let svc = AuthService::new(repo);
        let err = svc
            .login(LoginInput { email: "seed@example.com".into(), password: "!".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_logins_run_on_the_blocking_pool() {
        let (_, svc) = svc();
        let svc = Arc::new(svc);
        svc.register(input("anna@example.com", "Passw0rd!")).await.unwrap();

        let logins = (0..4).map(|i| {
            let svc = svc.clone();
            let password = if i % 2 == 0 { "Passw0rd!" } else { "wrong-pass" };
            tokio::spawn(async move {
                svc.login(LoginInput { email: "anna@example.com".into(), password: password.into() }).await
            })
        });
        for (i, handle) in logins.enumerate() {
            let res = handle.await.unwrap();
            assert_eq!(res.is_ok(), i % 2 == 0);
        }
    }

    #[test]
    fn verify_password_separates_mismatch_from_unusable_hash() {
        let hash = hash_password("Passw0rd!").unwrap();
        assert!(verify_password("Passw0rd!", &hash).unwrap());
        assert!(!verify_password("other-pass", &hash).unwrap());
        assert!(verify_password("!", "!").is_err());
    }

    #[tokio::test]
    async fn resolve_user_tracks_repository() {
        let (repo, svc) = svc();
        let user = svc.register(input("anna@example.com", "Passw0rd!")).await.unwrap();
        assert_eq!(svc.resolve_user(user.id).await.unwrap(), Some(user.clone()));

        repo.remove("anna@example.com");
        assert_eq!(svc.resolve_user(user.id).await.unwrap(), None);
    }
}
