use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Could not (de)serialize data: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("User {0} is not a participant of this battle")]
    NotAParticipant(String),

    #[error("Battle cannot go from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Battle already has two participants")]
    BattleFull,

    #[error("Roast rejected: {0}")]
    RoastRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::Storage(_) => "Couldn't reach local storage. Try again.",
            Self::Serialization(_) => "Saved data looks corrupted.",
            Self::Config(_) => "The arena is misconfigured. Check your environment.",
            Self::NotFound(_) => "Nothing by that id here.",
            Self::NotAParticipant(_) => "You're a spectator in this one.",
            Self::InvalidTransition { .. } => "That battle can't do that right now.",
            Self::BattleFull => "Both corners are taken.",
            Self::RoastRejected(_) => "That roast didn't make it into the ring.",
            Self::Internal(_) => "Something broke on our side. Try again.",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
