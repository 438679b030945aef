mod auth_session;
mod battle_session;
mod dashboard;

pub use auth_session::{AuthSession, CACHED_USER_KEY};
pub use battle_session::{BattleSession, Submission, TICK_PERIOD};
pub use dashboard::{BattleBoard, BattleTab, CommunityDirectory};
