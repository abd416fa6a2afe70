use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::Stream;
use serde::Serialize;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::utils::clock::Clock;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total: i64,
}

impl Countdown {
    /// Splits a non-negative number of seconds into days/hours/minutes/seconds.
    /// Negative input clamps to zero.
    pub fn from_total_seconds(total: i64) -> Self {
        let total = total.max(0);
        Countdown {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
            total,
        }
    }

    pub fn between(now: DateTime<Utc>, reveal_at: DateTime<Utc>) -> Self {
        // num_seconds truncates toward zero, so a partial second left counts as 0
        Self::from_total_seconds((reveal_at - now).num_seconds())
    }

    pub fn is_done(&self) -> bool {
        self.total == 0
    }
}

/// The countdown gate in front of the public feed.
#[derive(Clone)]
pub struct RevealClock {
    reveal_at: Option<DateTime<Utc>>,
    clock: Arc<dyn Clock>,
}

impl RevealClock {
    pub fn new(reveal_at: Option<DateTime<Utc>>, clock: Arc<dyn Clock>) -> Self {
        Self { reveal_at, clock }
    }

    pub fn reveal_at(&self) -> Option<DateTime<Utc>> {
        self.reveal_at
    }

    /// Unconfigured means the epoch, i.e. the gate has always been open.
    pub fn reveal_instant(&self) -> DateTime<Utc> {
        self.reveal_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn is_revealed(&self) -> bool {
        self.clock.now() >= self.reveal_instant()
    }

    pub fn time_until_reveal(&self) -> Countdown {
        Countdown::between(self.clock.now(), self.reveal_instant())
    }

    /// Emits the countdown once per `period`, starting immediately. The
    /// stream ends right after the first countdown that reaches zero, so a
    /// gate that opened never closes again for that subscriber.
    pub fn ticks(&self, period: Duration) -> impl Stream<Item = Countdown> + Send + 'static {
        struct TickState {
            gate: RevealClock,
            timer: Option<Interval>,
            opened: bool,
        }

        let state = TickState { gate: self.clone(), timer: None, opened: false };

        futures_util::stream::unfold(state, move |mut state| async move {
            if state.opened {
                return None;
            }

            // created lazily so the stream can be built outside a runtime
            let timer = state.timer.get_or_insert_with(|| {
                let mut timer = interval(period);
                timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                timer
            });
            timer.tick().await;

            let countdown = state.gate.time_until_reveal();
            state.opened = countdown.is_done();
            Some((countdown, state))
        })
    }
}
