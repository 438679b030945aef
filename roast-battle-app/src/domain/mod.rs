mod achievement;
mod battle;
mod community;
mod leaderboard;
mod user;

pub mod draft;
pub mod turn_clock;

pub use achievement::Achievement;
pub use battle::{Battle, BattleStatus, Roast, MAX_PARTICIPANTS};
pub use community::Community;
pub use draft::{word_count, DraftStatus, Rejection, RoastDraft, WordBudget};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use turn_clock::{ClockSnapshot, Tick, TurnClock};
pub use user::User;
