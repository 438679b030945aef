use super::draft::check_text;
use super::User;
use chrono::{DateTime, Utc};
use roast_battle_errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const MAX_PARTICIPANTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleStatus {
    Waiting,
    Active,
    Completed,
}

impl BattleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BattleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roast {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub round: u32,
    pub timestamp: DateTime<Utc>,
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub id: String,
    pub participants: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    pub(crate) status: BattleStatus,
    pub(crate) current_round: u32,
    pub max_rounds: u32,
    #[serde(default)]
    pub(crate) roasts: Vec<Roast>,
    pub spectators: u32,
    /// Voter id to the participant id they voted for.
    #[serde(default)]
    pub votes: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Battle {
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn roasts(&self) -> &[Roast] {
        &self.roasts
    }

    pub fn participant(&self, user_id: &str) -> Option<&User> {
        self.participants.iter().find(|p| p.id == user_id)
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participant(user_id).is_some()
    }

    pub fn opponent_of(&self, user_id: &str) -> Option<&User> {
        self.participants.iter().find(|p| p.id != user_id)
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    pub fn roasts_in_round(&self, round: u32) -> impl Iterator<Item = &Roast> {
        self.roasts.iter().filter(move |r| r.round == round)
    }

    pub fn join(&mut self, user: User) -> Result<(), AppError> {
        self.require_status(BattleStatus::Waiting, "joined")?;
        if self.is_participant(&user.id) {
            return Err(AppError::InvalidTransition {
                from: format!("{} with u/{}", self.status, user.username),
                to: format!("u/{} joining twice", user.username),
            });
        }
        if self.participants.len() >= MAX_PARTICIPANTS {
            return Err(AppError::BattleFull);
        }
        self.participants.push(user);
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), AppError> {
        self.require_status(BattleStatus::Waiting, BattleStatus::Active.as_str())?;
        if self.participants.len() < MAX_PARTICIPANTS {
            return Err(AppError::InvalidTransition {
                from: format!("{} with {} fighter(s)", self.status, self.participants.len()),
                to: BattleStatus::Active.to_string(),
            });
        }
        self.status = BattleStatus::Active;
        self.current_round = self.current_round.max(1);
        Ok(())
    }

    pub fn advance_round(&mut self) -> Result<u32, AppError> {
        self.require_status(BattleStatus::Active, "next round")?;
        if self.current_round >= self.max_rounds {
            return Err(AppError::InvalidTransition {
                from: format!("round {}/{}", self.current_round, self.max_rounds),
                to: format!("round {}", self.current_round + 1),
            });
        }
        self.current_round += 1;
        Ok(self.current_round)
    }

    /// Appends a roast for the current round. The battle is left untouched
    /// when the roast is refused.
    pub fn record_roast(
        &mut self,
        user_id: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<&Roast, AppError> {
        self.require_status(BattleStatus::Active, "roasting")?;
        if !self.is_participant(user_id) {
            return Err(AppError::NotAParticipant(user_id.to_string()));
        }
        check_text(text).map_err(|r| AppError::RoastRejected(r.to_string()))?;

        self.roasts.push(Roast {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            text: text.trim().to_string(),
            round: self.current_round.max(1),
            timestamp: now,
            votes: 0,
        });
        self.roasts
            .last()
            .ok_or_else(|| AppError::Internal("roast vanished after push".to_string()))
    }

    pub fn complete(&mut self, winner: Option<&str>) -> Result<(), AppError> {
        self.require_status(BattleStatus::Active, BattleStatus::Completed.as_str())?;
        if let Some(id) = winner {
            if !self.is_participant(id) {
                return Err(AppError::NotAParticipant(id.to_string()));
            }
        }
        self.status = BattleStatus::Completed;
        self.winner = winner.map(str::to_string);
        Ok(())
    }

    /// Checks a battle built from outside data: fighter count, round bounds,
    /// and that roasts, votes and the winner point at participants.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.participants.len() > MAX_PARTICIPANTS {
            return Err(AppError::BattleFull);
        }
        if self.current_round > self.max_rounds {
            return Err(AppError::InvalidTransition {
                from: format!("battle {} with {} rounds", self.id, self.max_rounds),
                to: format!("round {}", self.current_round),
            });
        }
        for roast in &self.roasts {
            if !self.is_participant(&roast.user_id) {
                return Err(AppError::NotAParticipant(roast.user_id.clone()));
            }
            if roast.round == 0 || roast.round > self.max_rounds {
                return Err(AppError::InvalidTransition {
                    from: format!("battle {} with {} rounds", self.id, self.max_rounds),
                    to: format!("roast {} in round {}", roast.id, roast.round),
                });
            }
        }
        if let Some(target) = self.votes.values().find(|id| !self.is_participant(id)) {
            return Err(AppError::NotAParticipant(target.clone()));
        }
        if let Some(winner) = self.winner.as_deref().filter(|id| !self.is_participant(id)) {
            return Err(AppError::NotAParticipant(winner.to_string()));
        }
        Ok(())
    }

    fn require_status(&self, expected: BattleStatus, action: &str) -> Result<(), AppError> {
        if self.status != expected {
            return Err(AppError::InvalidTransition {
                from: self.status.to_string(),
                to: action.to_string(),
            });
        }
        Ok(())
    }
}
