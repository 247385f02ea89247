//! Preloader readiness gate
//!
//! Content stays hidden until two independent conditions hold: a minimum
//! display time has elapsed and the page reported that its resources loaded.
//! Once both hold the gate fades out and, after the fade duration, invokes its
//! completion callback exactly once.
//!
//! Known limitation: if the readiness signal never fires, the gate waits
//! forever. There is no timeout escape.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Default time the preloader stays on screen
pub const DEFAULT_MINIMUM_DISPLAY: Duration = Duration::from_millis(2500);

/// Default length of the fade-out transition
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(1000);

/// Gate lifecycle. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum GatePhase {
    /// At least one condition is still pending
    #[default]
    Waiting,
    /// Both conditions hold, the fade transition is running
    FadingOut,
    /// Fade finished and the completion callback has run
    Done,
}

impl GatePhase {
    pub fn is_visible(&self) -> bool {
        !matches!(self, GatePhase::Done)
    }

    pub fn is_fading(&self) -> bool {
        matches!(self, GatePhase::FadingOut)
    }
}

/// Timing for a [`LoadGate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGateConfig {
    pub minimum_display: Duration,
    pub fade_duration: Duration,
}

impl Default for LoadGateConfig {
    fn default() -> Self {
        Self {
            minimum_display: DEFAULT_MINIMUM_DISPLAY,
            fade_duration: DEFAULT_FADE_DURATION,
        }
    }
}

impl LoadGateConfig {
    pub fn minimum_display(mut self, duration: Duration) -> Self {
        self.minimum_display = duration;
        self
    }

    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }
}

/// One-shot delayed callbacks on the UI timeline.
///
/// Tasks must never run synchronously inside `schedule_once`, even for a zero
/// delay.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

type PhaseListener = Rc<dyn Fn(GatePhase)>;

struct GateState {
    minimum_elapsed: bool,
    resources_ready: bool,
    phase: GatePhase,
    on_ready: Option<Box<dyn FnOnce()>>,
    listeners: Vec<PhaseListener>,
}

/// Dual-condition readiness gate.
///
/// Cloning yields another handle to the same gate.
pub struct LoadGate<S: Scheduler> {
    state: Rc<RefCell<GateState>>,
    scheduler: Rc<S>,
    config: LoadGateConfig,
}

impl<S: Scheduler> Clone for LoadGate<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            scheduler: Rc::clone(&self.scheduler),
            config: self.config,
        }
    }
}

impl<S: Scheduler + 'static> LoadGate<S> {
    /// Arm the minimum display timer and register the completion callback.
    ///
    /// `resources_already_ready` covers the case where the readiness signal's
    /// precondition was already true at subscribe time.
    pub fn start(
        config: LoadGateConfig,
        scheduler: S,
        resources_already_ready: bool,
        on_ready: impl FnOnce() + 'static,
    ) -> Self {
        let gate = Self {
            state: Rc::new(RefCell::new(GateState {
                minimum_elapsed: false,
                resources_ready: false,
                phase: GatePhase::Waiting,
                on_ready: Some(Box::new(on_ready)),
                listeners: Vec::new(),
            })),
            scheduler: Rc::new(scheduler),
            config,
        };

        tracing::debug!(
            minimum_ms = config.minimum_display.as_millis() as u64,
            resources_already_ready,
            "load gate started"
        );

        let timer_gate = gate.clone();
        gate.scheduler.schedule_once(
            config.minimum_display,
            Box::new(move || timer_gate.mark_minimum_elapsed()),
        );

        if resources_already_ready {
            gate.signal_resources_ready();
        }

        gate
    }

    /// Subscribe to phase transitions. Listeners see each transition once.
    pub fn on_phase_change(&self, listener: impl Fn(GatePhase) + 'static) {
        self.state.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// The external "content loaded" signal fired.
    pub fn signal_resources_ready(&self) {
        self.state.borrow_mut().resources_ready = true;
        self.check_completion();
    }

    fn mark_minimum_elapsed(&self) {
        self.state.borrow_mut().minimum_elapsed = true;
        self.check_completion();
    }

    /// Begin the fade if both conditions hold. Redundant calls are no-ops.
    pub fn check_completion(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.phase != GatePhase::Waiting
                || !(state.minimum_elapsed && state.resources_ready)
            {
                return;
            }
            state.phase = GatePhase::FadingOut;
        }

        tracing::debug!("load gate fading out");
        self.notify(GatePhase::FadingOut);

        let fade_gate = self.clone();
        self.scheduler.schedule_once(
            self.config.fade_duration,
            Box::new(move || fade_gate.finish()),
        );
    }

    fn finish(&self) {
        let on_ready = {
            let mut state = self.state.borrow_mut();
            if state.phase != GatePhase::FadingOut {
                return;
            }
            state.phase = GatePhase::Done;
            state.on_ready.take()
        };

        tracing::debug!("load gate done");
        self.notify(GatePhase::Done);

        if let Some(on_ready) = on_ready {
            on_ready();
        }
    }

    fn notify(&self, phase: GatePhase) {
        // Listeners may call back into the gate, so no borrow is held here.
        let listeners = self.state.borrow().listeners.clone();
        for listener in listeners {
            listener(phase);
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.state.borrow().phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Virtual clock scheduler. Tasks run only from `advance`.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        inner: Rc<RefCell<ManualInner>>,
    }

    #[derive(Default)]
    struct ManualInner {
        now: Duration,
        seq: u64,
        queue: Vec<(Duration, u64, Box<dyn FnOnce()>)>,
    }

    impl Scheduler for ManualScheduler {
        fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            let mut inner = self.inner.borrow_mut();
            let due = inner.now + delay;
            let seq = inner.seq;
            inner.seq += 1;
            inner.queue.push((due, seq, task));
        }
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            let target = self.inner.borrow().now + by;
            loop {
                let next = {
                    let mut inner = self.inner.borrow_mut();
                    let idx = inner
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (due, _, _))| *due <= target)
                        .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                        .map(|(idx, _)| idx);
                    idx.map(|idx| {
                        let (due, _, task) = inner.queue.remove(idx);
                        inner.now = due;
                        task
                    })
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.inner.borrow_mut().now = target;
        }

        fn pending(&self) -> usize {
            self.inner.borrow().queue.len()
        }
    }

    fn counting_gate(
        config: LoadGateConfig,
        already_ready: bool,
    ) -> (LoadGate<ManualScheduler>, ManualScheduler, Rc<Cell<u32>>) {
        let scheduler = ManualScheduler::default();
        let calls = Rc::new(Cell::new(0));
        let calls_in_callback = Rc::clone(&calls);
        let gate = LoadGate::start(config, scheduler.clone(), already_ready, move || {
            calls_in_callback.set(calls_in_callback.get() + 1)
        });
        (gate, scheduler, calls)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_default_config() {
        let config = LoadGateConfig::default();
        assert_eq!(config.minimum_display, ms(2500));
        assert_eq!(config.fade_duration, ms(1000));
    }

    #[test]
    fn test_timer_first_then_signal() {
        let (gate, scheduler, calls) = counting_gate(LoadGateConfig::default(), false);

        scheduler.advance(ms(2500));
        assert_eq!(gate.phase(), GatePhase::Waiting);

        gate.signal_resources_ready();
        assert_eq!(gate.phase(), GatePhase::FadingOut);
        assert_eq!(calls.get(), 0);

        scheduler.advance(ms(999));
        assert_eq!(calls.get(), 0);
        scheduler.advance(ms(1));
        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_signal_first_then_timer() {
        let (gate, scheduler, calls) = counting_gate(LoadGateConfig::default(), false);

        scheduler.advance(ms(100));
        gate.signal_resources_ready();
        assert_eq!(gate.phase(), GatePhase::Waiting);

        scheduler.advance(ms(2400));
        assert_eq!(gate.phase(), GatePhase::FadingOut);

        scheduler.advance(ms(1000));
        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_simultaneous_triggers() {
        let (gate, scheduler, calls) = counting_gate(LoadGateConfig::default(), false);

        let signal_gate = gate.clone();
        scheduler.schedule_once(
            ms(2500),
            Box::new(move || signal_gate.signal_resources_ready()),
        );

        scheduler.advance(ms(2500));
        assert_eq!(gate.phase(), GatePhase::FadingOut);

        scheduler.advance(ms(5000));
        assert_eq!(calls.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_zero_minimum_and_already_ready_is_not_synchronous() {
        let config = LoadGateConfig::default().minimum_display(Duration::ZERO);
        let (gate, scheduler, calls) = counting_gate(config, true);

        assert_eq!(gate.phase(), GatePhase::Waiting);
        assert_eq!(calls.get(), 0);

        scheduler.advance(Duration::ZERO);
        assert_eq!(gate.phase(), GatePhase::FadingOut);
        assert_eq!(calls.get(), 0);

        scheduler.advance(ms(1000));
        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_redundant_checks_after_done_are_noops() {
        let (gate, scheduler, calls) = counting_gate(LoadGateConfig::default(), true);
        scheduler.advance(ms(3500));
        assert_eq!(gate.phase(), GatePhase::Done);

        gate.check_completion();
        gate.signal_resources_ready();
        gate.mark_minimum_elapsed();
        scheduler.advance(ms(5000));

        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(calls.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_repeated_signal_while_fading_schedules_one_fade() {
        let (gate, scheduler, calls) = counting_gate(LoadGateConfig::default(), true);
        scheduler.advance(ms(2500));
        assert_eq!(gate.phase(), GatePhase::FadingOut);

        gate.signal_resources_ready();
        gate.signal_resources_ready();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(ms(1000));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_never_completes_without_signal() {
        let (gate, scheduler, calls) = counting_gate(LoadGateConfig::default(), false);
        scheduler.advance(Duration::from_secs(3600));

        assert_eq!(gate.phase(), GatePhase::Waiting);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_phase_listener_sees_monotonic_transitions() {
        let (gate, scheduler, _calls) = counting_gate(LoadGateConfig::default(), false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_listener = Rc::clone(&seen);
        gate.on_phase_change(move |phase| seen_in_listener.borrow_mut().push(phase));

        gate.signal_resources_ready();
        scheduler.advance(ms(10_000));
        gate.check_completion();

        assert_eq!(*seen.borrow(), vec![GatePhase::FadingOut, GatePhase::Done]);
    }

    #[test]
    fn test_listener_may_reenter_gate() {
        let (gate, scheduler, calls) = counting_gate(LoadGateConfig::default(), true);
        let reentrant = gate.clone();
        gate.on_phase_change(move |_| {
            reentrant.check_completion();
            let _ = reentrant.phase();
        });

        scheduler.advance(ms(3500));
        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_phase_visibility_helpers() {
        assert!(GatePhase::Waiting.is_visible());
        assert!(GatePhase::FadingOut.is_visible());
        assert!(!GatePhase::Done.is_visible());
        assert!(GatePhase::FadingOut.is_fading());
        assert!(!GatePhase::Waiting.is_fading());
        assert!(GatePhase::Waiting < GatePhase::FadingOut);
        assert!(GatePhase::FadingOut < GatePhase::Done);
    }
}
