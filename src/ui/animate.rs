use std::time::{Duration, Instant};

use crate::store::Totals;

/// How long a counter takes to reach a new value.
pub(crate) const COUNTER_DURATION: Duration = Duration::from_millis(500);

/// Redraw interval while any counter is moving.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub(crate) fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// A displayed number easing from one value to another. Purely cosmetic:
/// the target is always the real value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnimatedValue {
    from: f64,
    to: f64,
    start: Instant,
}

impl AnimatedValue {
    pub(crate) fn new(from: f64, to: f64, start: Instant) -> Self {
        Self { from, to, start }
    }

    /// Start a new run from whatever is on screen at `now`.
    pub(crate) fn retarget(&mut self, to: f64, now: Instant) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
    }

    pub(crate) fn value_at(&self, now: Instant) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    pub(crate) fn target(&self) -> f64 {
        self.to
    }

    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        (elapsed / COUNTER_DURATION.as_secs_f64()).min(1.0)
    }
}

/// The three summary counters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Counters {
    pub(crate) balance: AnimatedValue,
    pub(crate) income: AnimatedValue,
    pub(crate) expenses: AnimatedValue,
}

impl Counters {
    /// All counters start at zero and run up to `totals`.
    pub(crate) fn starting_at_zero(totals: Totals, now: Instant) -> Self {
        Self {
            balance: AnimatedValue::new(0.0, totals.balance, now),
            income: AnimatedValue::new(0.0, totals.income, now),
            expenses: AnimatedValue::new(0.0, totals.expenses, now),
        }
    }

    pub(crate) fn retarget(&mut self, totals: Totals, now: Instant) {
        self.balance.retarget(totals.balance, now);
        self.income.retarget(totals.income, now);
        self.expenses.retarget(totals.expenses, now);
    }

    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.balance.is_animating(now)
            || self.income.is_animating(now)
            || self.expenses.is_animating(now)
    }
}
