use crate::domain::{
    Battle, BattleStatus, ClockSnapshot, DraftStatus, Rejection, Roast, RoastDraft, Tick,
    TurnClock, User,
};
use crate::infrastructure::scheduler::Ticker;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// What happened to an accepted roast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Appended to the battle's roast sequence.
    Recorded(Roast),
    /// The turn passed, but the battle did not take the roast (not active,
    /// or the viewer is a spectator).
    Local,
}

struct BattleState {
    battle: Battle,
    clock: TurnClock,
    draft: RoastDraft,
}

struct Shared {
    state: Mutex<BattleState>,
    snapshots: watch::Sender<ClockSnapshot>,
}

/// Controller behind an open battle view. Owns the turn clock and the
/// one-second ticker driving it; the ticker stops on [`BattleSession::close`]
/// or when the session is dropped.
pub struct BattleSession {
    local_user_id: String,
    shared: Arc<Shared>,
    ticker: Ticker,
}

impl BattleSession {
    /// Must be called from within a tokio runtime.
    pub fn open(battle: Battle, local_user: &User, turn_seconds: u32) -> Self {
        Self::open_with_period(battle, local_user, turn_seconds, TICK_PERIOD)
    }

    pub fn open_with_period(
        battle: Battle,
        local_user: &User,
        turn_seconds: u32,
        period: Duration,
    ) -> Self {
        let clock = TurnClock::new(turn_seconds, true);
        let (snapshots, _) = watch::channel(clock.snapshot());

        if !battle.is_participant(&local_user.id) {
            tracing::info!(
                "u/{} is spectating battle {}",
                local_user.username,
                battle.id
            );
        }
        tracing::info!(
            "Opened battle {} ({}, round {}/{})",
            battle.id,
            battle.status,
            battle.current_round,
            battle.max_rounds
        );

        let shared = Arc::new(Shared {
            state: Mutex::new(BattleState {
                battle,
                clock,
                draft: RoastDraft::new(),
            }),
            snapshots,
        });

        let ticker = Ticker::spawn(period, {
            let shared = shared.clone();
            move || shared.tick()
        });

        Self {
            local_user_id: local_user.id.clone(),
            shared,
            ticker,
        }
    }

    pub fn local_user_id(&self) -> &str {
        &self.local_user_id
    }

    pub fn is_open(&self) -> bool {
        self.ticker.is_running()
    }

    /// Receives a new snapshot after every tick and every accepted roast.
    pub fn subscribe(&self) -> watch::Receiver<ClockSnapshot> {
        self.shared.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        self.shared.state.lock().clock.snapshot()
    }

    pub fn battle(&self) -> Battle {
        self.shared.state.lock().battle.clone()
    }

    pub fn opponent(&self) -> Option<User> {
        self.shared
            .state
            .lock()
            .battle
            .opponent_of(&self.local_user_id)
            .cloned()
    }

    pub fn draft(&self) -> String {
        self.shared.state.lock().draft.text().to_string()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.shared.state.lock().draft.set_text(text);
    }

    pub fn draft_status(&self) -> DraftStatus {
        self.shared.state.lock().draft.status()
    }

    /// Whether the current draft would be accepted right now.
    pub fn can_submit(&self) -> Result<(), Rejection> {
        let state = self.shared.state.lock();
        state.clock.can_submit(state.draft.text())
    }

    /// Sends the current draft. A rejected draft leaves everything as it was.
    pub fn submit(&self) -> Result<Submission, Rejection> {
        let mut guard = self.shared.state.lock();
        let state = &mut *guard;

        let text = state.draft.text().to_string();
        if let Err(rejection) = state.clock.submit(&text) {
            tracing::warn!("Roast not sent: {}", rejection);
            return Err(rejection);
        }
        state.draft.clear();
        self.shared.snapshots.send_replace(state.clock.snapshot());

        let recordable = state.battle.status() == BattleStatus::Active
            && state.battle.is_participant(&self.local_user_id);
        if !recordable {
            tracing::debug!("Battle {} did not record the roast", state.battle.id);
            return Ok(Submission::Local);
        }

        let battle_id = state.battle.id.clone();
        match state
            .battle
            .record_roast(&self.local_user_id, &text, chrono::Utc::now())
        {
            Ok(roast) => {
                tracing::info!(
                    "Roast {} recorded in battle {} round {}",
                    roast.id,
                    battle_id,
                    roast.round
                );
                Ok(Submission::Recorded(roast.clone()))
            }
            Err(e) => {
                tracing::warn!("Battle {} refused roast: {}", battle_id, e);
                Ok(Submission::Local)
            }
        }
    }

    /// Stops the ticker. Returns false if the session was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.ticker.cancel();
        if was_open {
            tracing::info!("Closed battle {}", self.shared.state.lock().battle.id);
        }
        was_open
    }
}

impl Shared {
    fn tick(&self) {
        let mut state = self.state.lock();
        if let Tick::TurnFlipped { is_local_turn } = state.clock.tick() {
            tracing::debug!(
                "Turn expired in battle {}; local turn: {}",
                state.battle.id,
                is_local_turn
            );
        }
        self.snapshots.send_replace(state.clock.snapshot());
    }
}
