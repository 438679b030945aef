use super::AuthProvider;
use crate::domain::User;
use async_trait::async_trait;
use roast_battle_errors::AppError;
use std::time::Duration;

pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Hands out a fixed user after a pause that stands in for the OAuth
/// round trip.
pub struct FixtureAuthProvider {
    user: User,
    delay: Duration,
}

impl FixtureAuthProvider {
    pub fn new(user: User, delay: Duration) -> Self {
        Self { user, delay }
    }
}

#[async_trait]
impl AuthProvider for FixtureAuthProvider {
    async fn authenticate(&self) -> Result<User, AppError> {
        tracing::info!("Simulating OAuth login for u/{}", self.user.username);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures::FixtureProvider;

    #[tokio::test(start_paused = true)]
    async fn test_waits_before_returning_user() {
        let user = FixtureProvider::bundled().unwrap().current_user().clone();
        let provider = FixtureAuthProvider::new(user, DEFAULT_LOGIN_DELAY);

        let started = tokio::time::Instant::now();
        let authed = provider.authenticate().await.unwrap();
        assert_eq!(authed.id, "1");
        assert!(started.elapsed() >= DEFAULT_LOGIN_DELAY);
    }
}
