use crate::application::AuthSession;
use crate::domain::turn_clock::DEFAULT_TURN_SECONDS;
use crate::infrastructure::auth::{AuthProvider, FixtureAuthProvider, DEFAULT_LOGIN_DELAY};
use crate::infrastructure::fixtures::FixtureProvider;
use crate::infrastructure::storage::{JsonFileStore, KvStore, MemoryStore};
use roast_battle_errors::AppError;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Cache file used when `ARENA_STORE_PATH` is unset, relative to the working
/// directory.
pub const DEFAULT_STORE_PATH: &str = ".roast-battle.json";

/// `ARENA_STORE_PATH` value that keeps the cached user in memory for one run.
pub const MEMORY_STORE: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Where the cached user lives. `None` keeps it in memory.
    pub store_path: Option<PathBuf>,
    pub turn_seconds: u32,
    pub login_delay: Duration,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            store_path: Some(PathBuf::from(DEFAULT_STORE_PATH)),
            turn_seconds: DEFAULT_TURN_SECONDS,
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }
}

impl ArenaConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = lookup("ARENA_STORE_PATH").filter(|p| !p.trim().is_empty()) {
            config.store_path = if path.trim() == MEMORY_STORE {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if let Some(raw) = lookup("ARENA_TURN_SECONDS") {
            config.turn_seconds = parse_number("ARENA_TURN_SECONDS", &raw)?;
        }
        if let Some(raw) = lookup("ARENA_LOGIN_DELAY_MS") {
            config.login_delay = Duration::from_millis(parse_number("ARENA_LOGIN_DELAY_MS", &raw)?);
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got '{}'", key, raw)))
}

#[derive(Clone)]
pub struct AppContext {
    pub config: ArenaConfig,
    pub data: Arc<FixtureProvider>,
    pub store: Arc<dyn KvStore>,
    pub auth_provider: Arc<dyn AuthProvider>,
}

impl AppContext {
    pub fn new(config: ArenaConfig) -> Result<Self, AppError> {
        let data = Arc::new(FixtureProvider::bundled()?);

        let store: Arc<dyn KvStore> = match &config.store_path {
            Some(path) => {
                tracing::info!("Caching login in {}", path.display());
                Arc::new(JsonFileStore::new(path))
            }
            None => {
                tracing::info!("Caching login in memory");
                Arc::new(MemoryStore::new())
            }
        };

        let auth_provider: Arc<dyn AuthProvider> = Arc::new(FixtureAuthProvider::new(
            data.current_user().clone(),
            config.login_delay,
        ));

        Ok(Self {
            config,
            data,
            store,
            auth_provider,
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(ArenaConfig::from_env()?)
    }

    /// Starts the login context for this run.
    pub async fn start_session(&self) -> AuthSession {
        AuthSession::bootstrap(self.store.clone(), self.auth_provider.clone()).await
    }
}
