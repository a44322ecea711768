use std::time::{Duration, Instant};

/// How long the gate holds between accepted updates.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(200);

/// Injectable time source so gate behaviour is deterministic under test.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Rate limiter for render submissions.
///
/// Holds the instant of the last accepted update; a call within the
/// interval is rejected and dropped (no trailing submission), a call at or
/// past it is accepted and restamps the gate. The first call always
/// passes. Rejection only delays when an evaluation is requested; it never
/// changes what any individual evaluation produces.
#[derive(Debug)]
pub struct UpdateGate<C: Clock> {
    interval: Duration,
    last_accepted: Option<Instant>,
    clock: C,
}

impl<C: Clock> UpdateGate<C> {
    #[must_use]
    pub fn new(interval: Duration, clock: C) -> Self {
        Self {
            interval,
            last_accepted: None,
            clock,
        }
    }

    pub fn try_accept(&mut self) -> bool {
        let now = self.clock.now();
        let accept = self
            .last_accepted
            .is_none_or(|last| now.duration_since(last) >= self.interval);

        if accept {
            self.last_accepted = Some(now);
        }

        accept
    }
}

impl Default for UpdateGate<SystemClock> {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL, SystemClock)
    }
}
