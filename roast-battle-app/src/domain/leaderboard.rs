use super::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user: User,
    pub score: i64,
    /// Rank movement since the previous snapshot. No history is kept, so 0.
    pub change: i32,
}

pub struct Leaderboard;

impl Leaderboard {
    /// Ranks by roast cred, highest first; ties go to the username that
    /// sorts first.
    pub fn rank(users: &[User]) -> Vec<LeaderboardEntry> {
        let mut sorted: Vec<&User> = users.iter().collect();
        sorted.sort_by(|a, b| {
            b.roast_cred
                .cmp(&a.roast_cred)
                .then_with(|| a.username.cmp(&b.username))
        });

        sorted
            .into_iter()
            .zip(1u32..)
            .map(|(user, rank)| LeaderboardEntry {
                rank,
                user: user.clone(),
                score: user.roast_cred,
                change: 0,
            })
            .collect()
    }
}
