use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub icon: String,
    pub members: u64,
    pub description: String,
    /// Viewer's own preference, not a property of the community.
    #[serde(default)]
    pub is_pinned: bool,
}

impl Community {
    /// Case-insensitive substring match on display name or description.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.display_name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search() {
        let community = Community {
            id: "4".to_string(),
            name: "programming".to_string(),
            display_name: "r/programming".to_string(),
            icon: "💻".to_string(),
            members: 4_200_000,
            description: "Computer Programming".to_string(),
            is_pinned: false,
        };
        assert!(community.matches_search(""));
        assert!(community.matches_search("R/PROG"));
        assert!(community.matches_search("computer"));
        assert!(!community.matches_search("memes"));
    }
}
