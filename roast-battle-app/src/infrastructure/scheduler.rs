use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Runs a callback once per period on the tokio runtime until cancelled.
/// The first call happens one full period after spawning. Dropping the
/// ticker cancels it.
pub struct Ticker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                on_tick();
            }
        });

        Self {
            period,
            handle: Some(handle),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stops the task. Returns false if it was already cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn counting_ticker(period: Duration) -> (Ticker, Arc<AtomicU32>) {
        let count = Arc::new(AtomicU32::new(0));
        let seen = count.clone();
        let ticker = Ticker::spawn(period, move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (ticker, count)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (ticker, count) = counting_ticker(Duration::from_secs(1));
        assert_eq!(ticker.period(), Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (mut ticker, count) = counting_ticker(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        assert!(ticker.cancel());
        assert!(!ticker.cancel());
        assert!(!ticker.is_running());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (ticker, count) = counting_ticker(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(1500)).await;
        drop(ticker);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
