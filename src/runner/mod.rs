//! Transaction round runner
//!
//! Repeats one turn per identity, `count` times over, with fixed pacing:
//! a short delay between invocations and a long wait between indices.
//! Everything is strictly sequential; concurrent submission from one node
//! view would collide on nonces.

use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Running,
    Waiting,
    Done,
}

pub struct RoundRunner {
    wallet_delay: Duration,
    round_delay: Duration,
    state: RunnerState,
}

impl RoundRunner {
    pub fn new(wallet_delay: Duration, round_delay: Duration) -> Self {
        Self {
            wallet_delay,
            round_delay,
            state: RunnerState::Idle,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_secs(config.wallet_delay_secs),
            Duration::from_secs(config.round_delay_secs),
        )
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// Run `turn` once per item, `count` times over, in order. Sleeps the
    /// short delay after every invocation except the final one, and the long
    /// delay between indices. `turn` must handle its own failures; the
    /// schedule never stops early.
    pub async fn run<T, F, Fut>(&mut self, count: u32, items: &[T], mut turn: F)
    where
        T: Clone,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if count == 0 || items.is_empty() {
            self.state = RunnerState::Done;
            return;
        }

        let total = count as usize * items.len();
        let mut executed = 0usize;

        for index in 0..count {
            self.state = RunnerState::Running;
            info!("=== Transaction {}/{} ===", index + 1, count);

            for item in items {
                turn(item.clone()).await;
                executed += 1;
                if executed < total {
                    sleep(self.wallet_delay).await;
                }
            }

            if index + 1 < count {
                self.state = RunnerState::Waiting;
                info!(
                    "⏸  Waiting {}s before next transaction...",
                    self.round_delay.as_secs()
                );
                sleep(self.round_delay).await;
            }
        }

        self.state = RunnerState::Done;
        info!("🏁 Transaction round completed!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn schedule_is_sequential_with_fixed_delays() {
        let mut runner =
            RoundRunner::new(Duration::from_secs(2), Duration::from_secs(30));
        let order = RefCell::new(Vec::new());
        let start = Instant::now();

        runner
            .run(3, &["id1", "id2"], |id| {
                order.borrow_mut().push(id);
                async {}
            })
            .await;

        // 6 invocations in identity order, each index completing before the next
        assert_eq!(
            order.into_inner(),
            vec!["id1", "id2", "id1", "id2", "id1", "id2"]
        );
        // 5 short sleeps (one fewer than invocations) plus 2 long waits
        assert_eq!(start.elapsed(), Duration::from_secs(5 * 2 + 2 * 30));
        assert_eq!(runner.state(), RunnerState::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_count_goes_straight_to_done() {
        let mut runner =
            RoundRunner::new(Duration::from_secs(2), Duration::from_secs(30));
        let start = Instant::now();

        runner.run(0, &["id1"], |_| async {}).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(runner.state(), RunnerState::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn single_invocation_never_sleeps() {
        let mut runner =
            RoundRunner::new(Duration::from_secs(2), Duration::from_secs(30));
        let start = Instant::now();

        runner.run(1, &["id1"], |_| async {}).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
