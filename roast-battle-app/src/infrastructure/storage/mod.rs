mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

use async_trait::async_trait;
use roast_battle_errors::AppError;

/// String key-value store holding small records such as the cached user.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
