use crate::domain::{Battle, BattleStatus, Community};
use roast_battle_errors::AppError;
use std::fmt;
use std::str::FromStr;

/// The viewer's own copy of the community list. Pins live here and are
/// never written back to the data provider.
pub struct CommunityDirectory {
    communities: Vec<Community>,
}

impl CommunityDirectory {
    pub fn new(communities: Vec<Community>) -> Self {
        Self { communities }
    }

    pub fn all(&self) -> &[Community] {
        &self.communities
    }

    /// Flips the pin and returns the new state.
    pub fn toggle_pin(&mut self, id: &str) -> Result<bool, AppError> {
        let community = self
            .communities
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Community {}", id)))?;
        community.is_pinned = !community.is_pinned;
        tracing::debug!(
            "{} {}",
            if community.is_pinned { "Pinned" } else { "Unpinned" },
            community.display_name
        );
        Ok(community.is_pinned)
    }

    pub fn search(&self, term: &str) -> Vec<&Community> {
        self.communities
            .iter()
            .filter(|c| c.matches_search(term))
            .collect()
    }

    /// Matches split into (pinned, unpinned), each in list order.
    pub fn partition(&self, term: &str) -> (Vec<&Community>, Vec<&Community>) {
        self.search(term).into_iter().partition(|c| c.is_pinned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleTab {
    Available,
    Active,
    Completed,
}

impl BattleTab {
    pub fn status(&self) -> BattleStatus {
        match self {
            Self::Available => BattleStatus::Waiting,
            Self::Active => BattleStatus::Active,
            Self::Completed => BattleStatus::Completed,
        }
    }
}

impl fmt::Display for BattleTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Available => "available",
            Self::Active => "active",
            Self::Completed => "completed",
        })
    }
}

impl FromStr for BattleTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" | "waiting" => Ok(Self::Available),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(AppError::NotFound(format!("Battle tab '{}'", other))),
        }
    }
}

pub struct BattleBoard {
    battles: Vec<Battle>,
}

impl BattleBoard {
    pub fn new(battles: Vec<Battle>) -> Self {
        Self { battles }
    }

    pub fn tab(&self, tab: BattleTab) -> Vec<&Battle> {
        let status = tab.status();
        self.battles.iter().filter(|b| b.status == status).collect()
    }

    pub fn find(&self, id: &str) -> Result<&Battle, AppError> {
        self.battles
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Battle {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures::FixtureProvider;

    fn directory() -> CommunityDirectory {
        CommunityDirectory::new(FixtureProvider::bundled().unwrap().communities())
    }

    fn names(list: &[&Community]) -> Vec<String> {
        list.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let dir = directory();
        assert_eq!(dir.search("").len(), 5);
        assert_eq!(names(&dir.search("ROAST")), vec!["roastme"]);
        assert_eq!(names(&dir.search("humour")), vec!["funny"]);
        assert!(dir.search("knitting").is_empty());
    }

    #[test]
    fn test_toggle_pin() {
        let mut dir = directory();
        let (pinned, unpinned) = dir.partition("");
        assert_eq!(names(&pinned), vec!["gaming", "funny"]);
        assert_eq!(unpinned.len(), 3);

        assert_eq!(dir.toggle_pin("4"), Ok(true));
        assert_eq!(dir.toggle_pin("1"), Ok(false));
        let (pinned, _) = dir.partition("");
        assert_eq!(names(&pinned), vec!["funny", "programming"]);

        assert!(dir.toggle_pin("404").is_err());
    }

    #[test]
    fn test_battle_tabs() {
        let board = BattleBoard::new(FixtureProvider::bundled().unwrap().battles());
        assert_eq!(board.tab(BattleTab::Available).len(), 1);
        assert_eq!(board.tab(BattleTab::Active)[0].id, "1");
        assert!(board.tab(BattleTab::Completed).is_empty());
        assert_eq!(board.find("2").map(|b| b.spectators), Ok(23));
        assert!(board.find("3").is_err());
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("Active".parse::<BattleTab>(), Ok(BattleTab::Active));
        assert_eq!("waiting".parse::<BattleTab>(), Ok(BattleTab::Available));
        assert!("archived".parse::<BattleTab>().is_err());
    }
}
