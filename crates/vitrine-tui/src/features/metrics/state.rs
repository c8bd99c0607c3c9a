//! Counter state machines and the first-visible latch.

use std::time::{Duration, Instant};

use vitrine_core::content::Metric;

/// One-shot "this region has scrolled into view" detector.
///
/// `observe` is called with each frame's visibility; the first visible
/// observation arms the latch. `fire` consumes the armed signal on the
/// following tick, at most once per page lifetime, so the observation
/// never mutates downstream state synchronously.
#[derive(Debug, Default)]
pub struct FirstVisible {
    armed: bool,
    fired: bool,
}

impl FirstVisible {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports this frame's visibility. Only the first visible
    /// observation has any effect.
    pub fn observe(&mut self, visible: bool) {
        if visible && !self.fired {
            self.armed = true;
        }
    }

    /// Consumes the armed signal. Returns true exactly once.
    pub fn fire(&mut self) -> bool {
        if self.armed && !self.fired {
            self.fired = true;
            self.armed = false;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Counter lifecycle. `Done` is terminal: a counter never restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Done,
}

/// Count-up animation from 0 to a fixed target.
///
/// The displayed value is a pure function of elapsed time since start
/// (`floor(target × elapsed/duration)`, clamped), sampled on each tick.
/// The sequence never decreases, never overshoots, and completes on
/// exactly the target.
#[derive(Debug)]
pub struct Counter {
    target: u64,
    duration: Duration,
    started: Option<Instant>,
    displayed: u64,
    phase: Phase,
}

impl Counter {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started: None,
            displayed: 0,
            phase: Phase::Idle,
        }
    }

    /// Starts the animation. Has no effect unless the counter is `Idle`,
    /// so a counter can never be restarted. A zero target or zero
    /// duration completes immediately without scheduling any ticks.
    pub fn start(&mut self, now: Instant) {
        if self.phase != Phase::Idle {
            return;
        }
        if self.target == 0 || self.duration.is_zero() {
            self.displayed = self.target;
            self.phase = Phase::Done;
            return;
        }
        self.started = Some(now);
        self.phase = Phase::Running;
    }

    /// Advances the displayed value. No-op unless running.
    pub fn sample(&mut self, now: Instant) {
        let Some(started) = self.started else {
            return;
        };
        if self.phase != Phase::Running {
            return;
        }

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.displayed = self.target;
            self.phase = Phase::Done;
            return;
        }

        let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = (self.target as f64 * fraction).floor() as u64;
        // Monotonic: a clock hiccup can never move the display backwards.
        self.displayed = self.displayed.max(value.min(self.target));
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// All counters plus the visibility gate for the metrics section.
#[derive(Debug)]
pub struct MetricsState {
    pub gate: FirstVisible,
    counters: Vec<Counter>,
}

impl MetricsState {
    pub fn new(metrics: &[Metric], duration: Duration) -> Self {
        Self {
            gate: FirstVisible::new(),
            counters: metrics
                .iter()
                .map(|m| Counter::new(m.target, duration))
                .collect(),
        }
    }

    /// Tick handler: consumes the gate's one-shot signal to start the
    /// counters, then advances whichever are running.
    pub fn on_tick(&mut self, now: Instant) {
        if self.gate.fire() {
            tracing::debug!("metrics section became visible; starting counters");
            for counter in &mut self.counters {
                counter.start(now);
            }
        }
        for counter in &mut self.counters {
            counter.sample(now);
        }
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// True while any counter is animating (the runtime polls fast).
    pub fn any_running(&self) -> bool {
        self.counters.iter().any(Counter::is_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn gate_fires_exactly_once_across_reentry() {
        let mut gate = FirstVisible::new();

        // Not visible yet: nothing armed.
        gate.observe(false);
        assert!(!gate.fire());

        // Enter, leave, enter again: one fire total.
        gate.observe(true);
        gate.observe(false);
        gate.observe(true);
        assert!(gate.fire());
        assert!(!gate.fire());

        gate.observe(true);
        assert!(!gate.fire());
        assert!(gate.has_fired());
    }

    #[test]
    fn gate_does_not_fire_within_the_observation() {
        let mut gate = FirstVisible::new();
        gate.observe(true);
        // The signal is only delivered by a later fire() call (next tick);
        // observe itself reports nothing.
        assert!(!gate.has_fired());
        assert!(gate.fire());
    }

    #[test]
    fn counter_sequence_is_monotonic_and_exact() {
        let start = Instant::now();
        let duration = Duration::from_millis(2_000);
        let mut counter = Counter::new(100, duration);
        counter.start(start);
        assert_eq!(counter.displayed(), 0);

        let mut previous = 0;
        let mut t = start;
        let mut completed_at = None;
        while counter.is_running() {
            t += TICK;
            counter.sample(t);
            assert!(counter.displayed() >= previous);
            assert!(counter.displayed() <= 100);
            previous = counter.displayed();
            if counter.phase() == Phase::Done {
                completed_at = Some(t);
            }
        }

        assert_eq!(counter.displayed(), 100);
        let completed = completed_at.unwrap().duration_since(start);
        assert!(completed >= duration.saturating_sub(TICK));
        assert!(completed <= duration + TICK);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut counter = Counter::new(0, Duration::from_millis(2_000));
        counter.start(Instant::now());
        assert_eq!(counter.displayed(), 0);
        assert_eq!(counter.phase(), Phase::Done);
        assert!(!counter.is_running());
    }

    #[test]
    fn counter_never_restarts() {
        let start = Instant::now();
        let mut counter = Counter::new(50, Duration::from_millis(100));
        counter.start(start);
        counter.sample(start + Duration::from_millis(200));
        assert_eq!(counter.phase(), Phase::Done);

        // A second visibility signal must not replay the animation.
        counter.start(start + Duration::from_millis(300));
        assert_eq!(counter.phase(), Phase::Done);
        assert_eq!(counter.displayed(), 50);
    }

    #[test]
    fn jittered_sampling_stays_monotonic() {
        let start = Instant::now();
        let mut counter = Counter::new(100, Duration::from_millis(1_000));
        counter.start(start);

        // Out-of-order samples (clock hiccup): display never reverses.
        counter.sample(start + Duration::from_millis(600));
        let at_600 = counter.displayed();
        counter.sample(start + Duration::from_millis(550));
        assert_eq!(counter.displayed(), at_600);
    }

    #[test]
    fn metrics_state_starts_all_counters_on_gate_fire() {
        let metrics = vec![
            Metric {
                target: 10,
                suffix: "%".into(),
                label: "a".into(),
                description: String::new(),
            },
            Metric {
                target: 0,
                suffix: "%".into(),
                label: "b".into(),
                description: String::new(),
            },
        ];
        let mut state = MetricsState::new(&metrics, Duration::from_millis(160));
        let t0 = Instant::now();

        // Ticks before visibility do nothing.
        state.on_tick(t0);
        assert_eq!(state.counters()[0].phase(), Phase::Idle);

        state.gate.observe(true);
        state.on_tick(t0 + TICK);
        assert!(state.counters()[0].is_running());
        // Zero target was already complete with no ticks scheduled.
        assert_eq!(state.counters()[1].phase(), Phase::Done);

        let mut t = t0 + TICK;
        for _ in 0..20 {
            t += TICK;
            state.on_tick(t);
        }
        assert_eq!(state.counters()[0].displayed(), 10);
        assert!(!state.any_running());
    }
}
