use serde::{Deserialize, Serialize};

pub const MAX_ROAST_WORDS: usize = 100;
pub const NEAR_LIMIT_WORDS: usize = 80;

/// Counts whitespace-delimited words, ignoring empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Display state of the word counter under the roast input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordBudget {
    Normal,
    NearLimit,
    OverLimit,
}

impl WordBudget {
    pub fn for_count(count: usize) -> Self {
        if count > MAX_ROAST_WORDS {
            Self::OverLimit
        } else if count > NEAR_LIMIT_WORDS {
            Self::NearLimit
        } else {
            Self::Normal
        }
    }
}

/// Why a draft cannot be sent. Rejections are values, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("it's not your turn")]
    NotYourTurn,

    #[error("the roast is empty")]
    Empty,

    #[error("the roast has {0} words, the limit is {max}", max = MAX_ROAST_WORDS)]
    TooLong(usize),
}

/// Checks the text part of the submission rule.
pub fn check_text(text: &str) -> Result<(), Rejection> {
    if text.trim().is_empty() {
        return Err(Rejection::Empty);
    }
    let words = word_count(text);
    if words > MAX_ROAST_WORDS {
        return Err(Rejection::TooLong(words));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoastDraft {
    text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStatus {
    pub words: usize,
    pub budget: WordBudget,
}

impl RoastDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn status(&self) -> DraftStatus {
        let words = word_count(&self.text);
        DraftStatus {
            words,
            budget: WordBudget::for_count(words),
        }
    }
}
