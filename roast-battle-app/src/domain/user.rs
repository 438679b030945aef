use super::Achievement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub karma: i64,
    pub karma_level: String,
    pub roast_cred: i64,
    pub level: u32,
    pub avatar: String,
    pub joined_communities: Vec<String>,
    pub wins: u32,
    pub losses: u32,
    pub total_battles: u32,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_roast: Option<String>,
}

impl User {
    pub fn has_joined(&self, community: &str) -> bool {
        self.joined_communities.iter().any(|c| c == community)
    }

    /// Share of battles won, 0.0 for a user who never fought.
    pub fn win_rate(&self) -> f64 {
        if self.total_battles == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_battles)
        }
    }

    pub fn unlocked_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.is_unlocked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        serde_json::from_str(
            r#"{
                "id": "7",
                "username": "TabsNotSpaces",
                "karma": 100,
                "karmaLevel": "Newbie Roaster",
                "roastCred": 10,
                "level": 1,
                "avatar": "https://example.com/a.png",
                "joinedCommunities": ["programming"],
                "wins": 3,
                "losses": 1,
                "totalBattles": 4,
                "achievements": [
                    {"id": "1", "name": "First Blood", "description": "Won once", "icon": "🏆", "unlockedAt": "2024-01-15T00:00:00Z"},
                    {"id": "2", "name": "Locked", "description": "Not yet", "icon": "👑"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_reads_camel_case_record() {
        let user = sample();
        assert_eq!(user.karma_level, "Newbie Roaster");
        assert!(user.favorite_roast.is_none());
        assert!(user.has_joined("programming"));
        assert!(!user.has_joined("memes"));
        assert_eq!(user.unlocked_achievements().count(), 1);
    }

    #[test]
    fn test_win_rate() {
        let mut user = sample();
        assert_eq!(user.win_rate(), 0.75);
        user.total_battles = 0;
        assert_eq!(user.win_rate(), 0.0);
    }
}
