use super::draft::{check_text, Rejection};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TURN_SECONDS: u32 = 60;

/// What a single elapsed second did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counting { seconds_remaining: u32 },
    TurnFlipped { is_local_turn: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockSnapshot {
    pub seconds_remaining: u32,
    pub is_local_turn: bool,
}

/// Per-battle countdown. When a turn runs out, possession flips to the
/// other participant and the countdown restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnClock {
    turn_seconds: u32,
    seconds_remaining: u32,
    is_local_turn: bool,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS, true)
    }
}

impl TurnClock {
    /// A zero turn length is treated as one second.
    pub fn new(turn_seconds: u32, is_local_turn: bool) -> Self {
        let turn_seconds = turn_seconds.max(1);
        Self {
            turn_seconds,
            seconds_remaining: turn_seconds,
            is_local_turn,
        }
    }

    pub fn turn_seconds(&self) -> u32 {
        self.turn_seconds
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_local_turn(&self) -> bool {
        self.is_local_turn
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            seconds_remaining: self.seconds_remaining,
            is_local_turn: self.is_local_turn,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.seconds_remaining <= 1 {
            self.is_local_turn = !self.is_local_turn;
            self.seconds_remaining = self.turn_seconds;
            Tick::TurnFlipped {
                is_local_turn: self.is_local_turn,
            }
        } else {
            self.seconds_remaining -= 1;
            Tick::Counting {
                seconds_remaining: self.seconds_remaining,
            }
        }
    }

    /// Checks the submission rule without touching the clock.
    pub fn can_submit(&self, text: &str) -> Result<(), Rejection> {
        if !self.is_local_turn {
            return Err(Rejection::NotYourTurn);
        }
        check_text(text)
    }

    /// Applies the submission rule. On success the turn passes to the
    /// opponent with a full countdown; on rejection nothing changes.
    pub fn submit(&mut self, text: &str) -> Result<(), Rejection> {
        self.can_submit(text)?;
        self.is_local_turn = false;
        self.seconds_remaining = self.turn_seconds;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_one_per_tick() {
        let mut clock = TurnClock::default();
        for expected in (1..60).rev() {
            assert_eq!(
                clock.tick(),
                Tick::Counting {
                    seconds_remaining: expected
                }
            );
        }
        assert_eq!(clock.seconds_remaining(), 1);
        assert!(clock.is_local_turn());
    }

    #[test]
    fn test_flips_after_full_turn() {
        let mut clock = TurnClock::default();
        for _ in 0..59 {
            clock.tick();
        }
        assert_eq!(clock.tick(), Tick::TurnFlipped { is_local_turn: false });
        assert_eq!(
            clock.snapshot(),
            ClockSnapshot {
                seconds_remaining: 60,
                is_local_turn: false
            }
        );
    }

    #[test]
    fn test_never_reaches_zero() {
        let mut clock = TurnClock::new(3, true);
        let mut flips = 0;
        for _ in 0..300 {
            if let Tick::TurnFlipped { .. } = clock.tick() {
                flips += 1;
            }
            assert!(clock.seconds_remaining() >= 1);
            assert!(clock.seconds_remaining() <= 3);
        }
        assert_eq!(flips, 100);
        // Even number of flips brings possession back.
        assert!(clock.is_local_turn());
    }

    #[test]
    fn test_zero_turn_length_is_one_second() {
        let mut clock = TurnClock::new(0, true);
        assert_eq!(clock.turn_seconds(), 1);
        assert_eq!(clock.tick(), Tick::TurnFlipped { is_local_turn: false });
        assert_eq!(clock.seconds_remaining(), 1);
    }

    #[test]
    fn test_submit_on_own_turn() {
        let mut clock = TurnClock::default();
        assert_eq!(clock.submit("short roast"), Ok(()));
        assert!(!clock.is_local_turn());
        assert_eq!(clock.seconds_remaining(), 60);
    }

    #[test]
    fn test_submit_resets_countdown() {
        let mut clock = TurnClock::default();
        for _ in 0..42 {
            clock.tick();
        }
        assert_eq!(clock.seconds_remaining(), 18);
        clock.submit("your commits read like ransom notes").unwrap();
        assert_eq!(clock.seconds_remaining(), 60);
    }

    #[test]
    fn test_rejected_submissions_change_nothing() {
        let mut clock = TurnClock::new(60, false);
        clock.tick();
        let before = clock.clone();
        assert_eq!(clock.submit("short roast"), Err(Rejection::NotYourTurn));
        assert_eq!(clock, before);

        let mut clock = TurnClock::default();
        clock.tick();
        let before = clock.clone();
        assert_eq!(clock.submit("  \n "), Err(Rejection::Empty));
        assert_eq!(clock.submit(&"no ".repeat(101)), Err(Rejection::TooLong(101)));
        assert_eq!(clock, before);
    }
}
