pub mod auth;
pub mod fixtures;
pub mod scheduler;
pub mod storage;
