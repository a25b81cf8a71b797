use std::sync::Arc;

use crate::command::shared::IdGenerator;
use crate::error::AppError;
use domain::user::{User, UserError, UserRepository};
use domain::value::UserId;

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, AppError>;
    fn verify(&self, pwd: &str, hashed_pwd: &str) -> Result<(), AppError>;
}

/// Issues and validates the stateless bearer tokens handed out at login.
/// Expiry is the only cutoff; there is no revocation list.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: UserId) -> Result<String, AppError>;
    fn validate(&self, token: &str) -> Result<UserId, AppError>;
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    token_svc: Arc<dyn TokenService>,
    id_generator: Arc<dyn IdGenerator>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        token_svc: Arc<dyn TokenService>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            token_svc,
            id_generator,
        }
    }

    /// Create a new account. Usernames are unique; a taken name is a
    /// validation failure, not an auth failure.
    pub async fn register(&self, username: &str, pwd: &str) -> Result<UserId, AppError> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(UserError::UsernameTaken(username.to_string()).into());
        }
        let hashed_pwd = self.hasher.hash(pwd)?;
        let id = UserId::from(self.id_generator.next_id().await?);
        let user = User::new(id, username, &hashed_pwd);
        self.user_repo.save(&user).await?;
        Ok(id)
    }

    /// Login with username and password, returns a signed bearer token.
    pub async fn login(&self, username: &str, pwd: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::AuthError("invalid credentials".to_string()))?;
        self.hasher.verify(pwd, &user.password)?;
        self.token_svc.issue(user.id)
    }

    /// Resolve a bearer token to the user it was issued for.
    pub fn authenticate(&self, token: &str) -> Result<UserId, AppError> {
        self.token_svc.validate(token)
    }
}
