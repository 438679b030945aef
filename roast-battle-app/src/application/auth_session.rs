use crate::domain::User;
use crate::infrastructure::auth::AuthProvider;
use crate::infrastructure::storage::KvStore;
use parking_lot::RwLock;
use roast_battle_errors::AppError;
use std::sync::Arc;

/// Storage key of the cached logged-in user.
pub const CACHED_USER_KEY: &str = "roast-battle-user";

#[derive(Default)]
struct AuthState {
    user: Option<User>,
    loading: bool,
}

/// Login state for one run of the app. Created by [`AuthSession::bootstrap`]
/// and torn down with [`AuthSession::end`]; views receive it explicitly.
pub struct AuthSession {
    store: Arc<dyn KvStore>,
    provider: Arc<dyn AuthProvider>,
    state: RwLock<AuthState>,
}

impl AuthSession {
    /// Restores the cached user, if any. Unreadable or corrupt cache entries
    /// are logged and treated as logged out.
    pub async fn bootstrap(store: Arc<dyn KvStore>, provider: Arc<dyn AuthProvider>) -> Self {
        let user = match store.get(CACHED_USER_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::error!("Error checking auth: cached user is unreadable: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Error checking auth: {}", e);
                None
            }
        };

        if let Some(user) = &user {
            tracing::info!("Restored session for u/{}", user.username);
        }

        Self {
            store,
            provider,
            state: RwLock::new(AuthState {
                user,
                loading: false,
            }),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub async fn login(&self) -> Result<User, AppError> {
        self.state.write().loading = true;
        let outcome = self.sign_in().await;

        let mut state = self.state.write();
        state.loading = false;
        let user = outcome?;
        tracing::info!("Logged in as u/{}", user.username);
        state.user = Some(user.clone());
        Ok(user)
    }

    async fn sign_in(&self) -> Result<User, AppError> {
        let user = self.provider.authenticate().await?;
        let json = serde_json::to_string(&user)?;
        self.store.set(CACHED_USER_KEY, json).await?;
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        if let Some(user) = self.state.write().user.take() {
            tracing::info!("Logged out u/{}", user.username);
        }
        self.store.remove(CACHED_USER_KEY).await
    }

    pub fn end(self) {
        let state = self.state.into_inner();
        tracing::debug!(
            "Auth session ended (authenticated: {})",
            state.user.is_some()
        );
    }
}
