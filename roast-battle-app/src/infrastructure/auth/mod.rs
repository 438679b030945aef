mod fixture_provider;

pub use fixture_provider::{FixtureAuthProvider, DEFAULT_LOGIN_DELAY};

use crate::domain::User;
use async_trait::async_trait;
use roast_battle_errors::AppError;

/// Source of the account behind a login.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self) -> Result<User, AppError>;
}
