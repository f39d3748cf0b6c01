use std::sync::Arc;

use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use super::domain::{AuthUser, LoginInput, NewUser, RegisterInput};
use super::errors::AuthError;
use super::password;
use super::repository::{RepositoryError, UserRepository};
use super::validation::ValidateInput;

/// Credential business service independent of web framework
pub struct CredentialService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> CredentialService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::CredentialService, repository::mock::MockUserRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::default());
    /// let svc = CredentialService::new(repo);
    /// let input = RegisterInput { email: "user@example.com".into(), password: "secret1".into(), name: Some("Test".into()) };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        input.validate().map_err(AuthError::Validation)?;

        let existing = self
            .repo
            .find_by_email(&input.email)
            .await
            .map_err(|e| AuthError::Registration(e.to_string()))?;
        if let Some(existing) = existing {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::DuplicateEmail);
        }

        let hash = password::hash_password(&input.password)
            .map_err(|e| AuthError::Registration(e.to_string()))?;

        let record = self
            .repo
            .create(NewUser { email: input.email, password_hash: hash, name: input.name })
            .await
            .map_err(|e| match e {
                // A racing duplicate loses at the store; same outcome for the caller
                RepositoryError::DuplicateEmail => AuthError::DuplicateEmail,
                other => AuthError::Registration(other.to_string()),
            })?;

        info!(user_id = %record.id, email = %record.email, "user_registered");
        Ok(record.into())
    }

    /// Authenticate against the stored hash.
    ///
    /// Unknown email and wrong password both return `InvalidCredentials`
    /// with an identical message.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::CredentialService, repository::mock::MockUserRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::default());
    /// let svc = CredentialService::new(repo);
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { email: "u@e.com".into(), password: "secret1".into(), name: None }));
    /// let user = tokio_test::block_on(svc.authenticate(LoginInput { email: "u@e.com".into(), password: "secret1".into() })).unwrap();
    /// assert_eq!(user.email, "u@e.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn authenticate(&self, input: LoginInput) -> Result<AuthUser, AuthError> {
        input.validate().map_err(AuthError::Validation)?;

        let record = self
            .repo
            .find_by_email(&input.email)
            .await
            .map_err(|e| AuthError::Authentication(e.to_string()))?;
        let Some(record) = record else {
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify_password(&input.password, &record.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %record.id, email = %record.email, "user_authenticated");
        Ok(record.into())
    }

    /// Look up the public view of an account by id.
    ///
    /// Lookup failures are logged and collapsed into `None`; callers treat
    /// absence and error identically.
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: Uuid) -> Option<AuthUser> {
        match self.repo.find_by_id(id).await {
            Ok(found) => found.map(AuthUser::from),
            Err(e) => {
                error!(user_id = %id, error = %e, "user lookup failed");
                None
            }
        }
    }
}
