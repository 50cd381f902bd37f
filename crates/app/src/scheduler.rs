//! Periodic scheduler for the light controller.
//!
//! Runs one tick immediately, then one per interval, until the shutdown
//! future resolves. Ticks are awaited in turn so they never overlap. The
//! active schedule is logged at startup and again whenever the season
//! changes.

use std::future::Future;
use std::time::Duration;

use growlight_domain::schedule::Season;
use growlight_domain::time::Timestamp;
use tokio::time::MissedTickBehavior;

use crate::controller::LightController;
use crate::ports::{Clock, SensorReader, SwitchActuator};

/// Ten minutes.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Fixed-interval driver around a [`LightController`].
pub struct Scheduler<C, S, A> {
    controller: LightController<C, S, A>,
    interval: Duration,
}

impl<C, S, A> Scheduler<C, S, A>
where
    C: Clock,
    S: SensorReader,
    A: SwitchActuator,
{
    /// Create a new scheduler. A zero `interval` falls back to
    /// [`DEFAULT_CHECK_INTERVAL`].
    pub fn new(controller: LightController<C, S, A>, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            DEFAULT_CHECK_INTERVAL
        } else {
            interval
        };
        Self {
            controller,
            interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Tick until `shutdown` resolves. Returns the number of ticks run.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) -> u64 {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(interval_secs = self.interval.as_secs(), "scheduler started");

        let mut season = None;
        let mut ticks = 0;
        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    tracing::info!(ticks, "scheduler stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let at = self.controller.now();
                    self.announce_season(at, &mut season);
                    self.controller.tick_at(at).await;
                    ticks += 1;
                }
            }
        }
        ticks
    }

    fn announce_season(&self, at: Timestamp, last: &mut Option<Season>) {
        let season = Season::of(at);
        if *last == Some(season) {
            return;
        }
        let window = self.controller.settings().schedule.window(season);
        tracing::info!(%season, %window, "using {season} schedule: {window}");
        *last = Some(season);
    }
}
