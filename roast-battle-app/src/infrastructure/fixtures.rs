use crate::domain::{Battle, BattleStatus, Community, Roast, User};
use chrono::{DateTime, Utc};
use roast_battle_errors::AppError;
use serde::Deserialize;
use std::collections::HashMap;

const ARENA_FIXTURES: &str = include_str!("../../fixtures/arena.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFixtures {
    current_user_id: String,
    users: Vec<User>,
    communities: Vec<Community>,
    battles: Vec<RawBattle>,
}

// Battles reference fighters by id so each user is written once.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBattle {
    id: String,
    participant_ids: Vec<String>,
    community: Option<String>,
    status: BattleStatus,
    current_round: u32,
    max_rounds: u32,
    #[serde(default)]
    roasts: Vec<Roast>,
    spectators: u32,
    #[serde(default)]
    votes: HashMap<String, String>,
    winner: Option<String>,
    created_at: DateTime<Utc>,
    theme: Option<String>,
}

/// Fixed data set standing in for a backend: users, communities, battles.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    current_user: User,
    users: Vec<User>,
    communities: Vec<Community>,
    battles: Vec<Battle>,
}

impl FixtureProvider {
    /// Loads the data set bundled with the crate.
    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(ARENA_FIXTURES)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let raw: RawFixtures = serde_json::from_str(json)?;

        let by_id: HashMap<&str, &User> = raw.users.iter().map(|u| (u.id.as_str(), u)).collect();
        let lookup = |id: &str| -> Result<User, AppError> {
            by_id
                .get(id)
                .map(|u| (*u).clone())
                .ok_or_else(|| AppError::NotFound(format!("Fixture user {}", id)))
        };

        let current_user = lookup(raw.current_user_id.as_str())?;
        let mut battles = Vec::with_capacity(raw.battles.len());
        for b in raw.battles {
            let participants = b
                .participant_ids
                .iter()
                .map(|id| lookup(id.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            let battle = Battle {
                id: b.id,
                participants,
                community: b.community,
                status: b.status,
                current_round: b.current_round,
                max_rounds: b.max_rounds,
                roasts: b.roasts,
                spectators: b.spectators,
                votes: b.votes,
                winner: b.winner,
                created_at: b.created_at,
                theme: b.theme,
            };
            battle.validate()?;
            battles.push(battle);
        }

        tracing::debug!(
            "Loaded fixtures: {} users, {} communities, {} battles",
            raw.users.len(),
            raw.communities.len(),
            battles.len()
        );

        Ok(Self {
            current_user,
            users: raw.users,
            communities: raw.communities,
            battles,
        })
    }

    /// The account the auth provider hands out on login.
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn communities(&self) -> Vec<Community> {
        self.communities.clone()
    }

    pub fn battles(&self) -> Vec<Battle> {
        self.battles.clone()
    }
}
