pub mod domain;

#[cfg(feature = "runtime")]
pub mod application;

#[cfg(feature = "runtime")]
pub mod infrastructure;

#[cfg(feature = "runtime")]
mod app_context;

#[cfg(feature = "runtime")]
pub use app_context::{AppContext, ArenaConfig, DEFAULT_STORE_PATH, MEMORY_STORE};
