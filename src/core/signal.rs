//! Scroll signals: the raw `immediate` offset, its eased `damped`
//! shadow, and the sampler that is their only writer.
//!
//! Time is always passed in explicitly so the same code runs under the
//! frame loop and under tests.

use std::time::{Duration, Instant};

use super::interpolate::ease_in_out_quad;

// ───────────────────────────────────────── damped ────────────

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f64,
    to: f64,
    started: Instant,
}

/// A value that eases toward its latest target over a fixed duration.
///
/// Retargeting while a transition is in flight restarts from the value
/// sampled at that instant, never from the old target, so the signal
/// never jumps.
#[derive(Debug, Clone)]
pub struct DampedSignal {
    value: f64,
    duration: Duration,
    transition: Option<Transition>,
}

impl DampedSignal {
    pub fn new(initial: f64, duration: Duration) -> Self {
        Self {
            value: initial,
            duration,
            transition: None,
        }
    }

    /// Last value written by [`advance`](Self::advance) or a retarget.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the signal would have at `now`, without mutating it.
    pub fn sample(&self, now: Instant) -> f64 {
        let Some(tr) = self.transition else {
            return self.value;
        };
        let elapsed = now.saturating_duration_since(tr.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return tr.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        tr.from + (tr.to - tr.from) * ease_in_out_quad(t)
    }

    /// Start a transition toward `target`, superseding any in flight.
    pub fn retarget(&mut self, target: f64, now: Instant) {
        let current = self.sample(now);
        self.value = current;
        if current == target {
            self.transition = None;
            return;
        }
        self.transition = Some(Transition {
            from: current,
            to: target,
            started: now,
        });
    }

    /// Per-frame update.  Returns `true` while a transition is in flight.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(tr) = self.transition else {
            return false;
        };
        self.value = self.sample(now);
        if now.saturating_duration_since(tr.started) >= self.duration {
            self.value = tr.to;
            self.transition = None;
            return false;
        }
        true
    }

    /// Stop in place at the current value.
    pub fn cancel(&mut self) {
        self.transition = None;
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }
}

// ───────────────────────────────────────── sampler ───────────

/// Receives raw scroll offsets and republishes them as the two signals.
///
/// This is the single writer: everything else only reads
/// [`immediate`](Self::immediate) and [`damped`](Self::damped).
#[derive(Debug, Clone)]
pub struct ScrollSampler {
    immediate: f64,
    damped: DampedSignal,
}

impl ScrollSampler {
    pub fn new(delay: Duration) -> Self {
        Self {
            immediate: 0.0,
            damped: DampedSignal::new(0.0, delay),
        }
    }

    /// Feed one scroll sample.  Negative offsets pass through unchecked.
    pub fn on_scroll_sample(&mut self, offset: f64, now: Instant) {
        self.immediate = offset;
        self.damped.retarget(offset, now);
    }

    /// Per-frame update of the damped signal.  Returns `true` while it is
    /// still converging.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.damped.advance(now)
    }

    pub fn immediate(&self) -> f64 {
        self.immediate
    }

    pub fn damped(&self) -> f64 {
        self.damped.value()
    }

    /// Cancel any in-flight damped transition.
    pub fn teardown(&mut self) {
        self.damped.cancel();
    }
}
