//! Field streams: dedup + trailing debounce in front of a field rule.
//!
//! A field stream owns one raw-input channel. Values pass an optional
//! duplicate filter, then wait out the quiescence window; when the window
//! closes with no newer value, the latest value is classified and reported
//! to the gate.
//!
//! The timing logic lives in [`Debouncer`], a plain state machine driven by
//! explicit instants, so it can be tested without a runtime. The task wrapper
//! only turns deadlines into `sleep_until` calls.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::gate::Report;
use crate::state::Verdict;

// ============================================================================
// SETTINGS
// ============================================================================

/// Where consecutive duplicates are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dedup {
    /// Every value goes through.
    #[default]
    Off,
    /// Drop a raw value equal to the previous raw value. A dropped
    /// duplicate does not restart the debounce window.
    BeforeDebounce,
    /// Drop a settled value equal to the previous settled value.
    AfterDebounce,
}

/// Timing and filtering of one field stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamSettings {
    /// Quiescence window; zero settles every value immediately.
    pub debounce: Duration,
    /// Duplicate filter placement.
    pub dedup: Dedup,
}

impl StreamSettings {
    /// Settles every value as soon as it arrives, no filtering.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            debounce: Duration::ZERO,
            dedup: Dedup::Off,
        }
    }

    /// Trailing debounce with the given dedup placement.
    #[must_use]
    pub const fn debounced(debounce: Duration, dedup: Dedup) -> Self {
        Self { debounce, dedup }
    }
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self::immediate()
    }
}

// ============================================================================
// DEBOUNCER
// ============================================================================

/// Dedup + trailing-debounce state machine.
///
/// The seed counts as both the last raw and the last settled value, so
/// re-entering the initial value is filtered like any other duplicate.
#[derive(Debug, Clone)]
pub struct Debouncer<I> {
    settings: StreamSettings,
    last_raw: I,
    last_settled: I,
    pending: Option<(I, Instant)>,
}

impl<I: Clone + PartialEq> Debouncer<I> {
    /// Creates a debouncer whose history starts at `seed`.
    pub fn new(settings: StreamSettings, seed: I) -> Self {
        Self {
            settings,
            last_raw: seed.clone(),
            last_settled: seed,
            pending: None,
        }
    }

    /// Feeds a raw value received at `now`.
    ///
    /// Returns the value to classify right away when the window is zero;
    /// otherwise the value waits until [`deadline`](Self::deadline).
    pub fn push(&mut self, value: I, now: Instant) -> Option<I> {
        if self.settings.dedup == Dedup::BeforeDebounce {
            if value == self.last_raw {
                return None;
            }
            self.last_raw = value.clone();
        }

        if self.settings.debounce.is_zero() {
            self.pending = None;
            return self.settle(value);
        }

        self.pending = Some((value, now + self.settings.debounce));
        None
    }

    /// When the pending value settles, if one is waiting.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Settles the pending value if its window has closed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<I> {
        match self.pending.take() {
            Some((value, at)) if at <= now => self.settle(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    fn settle(&mut self, value: I) -> Option<I> {
        if self.settings.dedup == Dedup::AfterDebounce && value == self.last_settled {
            return None;
        }
        self.last_settled = value.clone();
        Some(value)
    }
}

// ============================================================================
// FIELD TASK
// ============================================================================

/// Everything a field task needs besides its rule.
pub(crate) struct FieldTask<I, V> {
    pub(crate) name: &'static str,
    pub(crate) slot: usize,
    pub(crate) settings: StreamSettings,
    pub(crate) seed: I,
    pub(crate) input: mpsc::UnboundedReceiver<I>,
    pub(crate) state: watch::Sender<V>,
    pub(crate) emissions: Arc<AtomicU64>,
    pub(crate) reports: mpsc::UnboundedSender<Report>,
    pub(crate) cancel: CancellationToken,
}

impl<I, V> FieldTask<I, V>
where
    I: Clone + PartialEq + Send + 'static,
    V: Verdict,
{
    /// Runs the stream on `runtime` until cancelled or the input closes.
    pub(crate) fn spawn<F>(self, runtime: &tokio::runtime::Handle, rule: F) -> JoinHandle<()>
    where
        F: Fn(&I) -> V + Send + 'static,
    {
        runtime.spawn(self.run(rule))
    }

    async fn run<F>(mut self, rule: F)
    where
        F: Fn(&I) -> V + Send + 'static,
    {
        let mut debouncer = Debouncer::new(self.settings, self.seed.clone());

        loop {
            let wake = debouncer.deadline();
            let settled = tokio::select! {
                biased;

                () = self.cancel.cancelled() => break,

                received = self.input.recv() => match received {
                    Some(value) => {
                        trace!(field = self.name, "raw value received");
                        debouncer.push(value, Instant::now())
                    }
                    None => break,
                },

                () = sleep_until(wake.unwrap_or_else(Instant::now)), if wake.is_some() => {
                    debouncer.poll(Instant::now())
                }
            };

            let Some(value) = settled else { continue };
            if !self.emit(rule(&value)) {
                break;
            }
        }

        trace!(field = self.name, "field stream stopped");
    }

    /// Publishes a settled state; returns `false` once the gate is gone.
    fn emit(&self, verdict: V) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }

        debug!(field = self.name, state = ?verdict, "field settled");
        let report = Report {
            slot: self.slot,
            valid: verdict.is_valid(),
            error: verdict.error_message(),
        };
        self.state.send_replace(verdict);
        self.emissions.fetch_add(1, Ordering::Relaxed);
        self.reports.send(report).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_immediate_settles_every_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(StreamSettings::immediate(), String::new());
        assert_eq!(d.push("a".into(), t0), Some("a".to_string()));
        assert_eq!(d.push("a".into(), t0), Some("a".to_string()));
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn test_trailing_debounce_keeps_latest() {
        let t0 = Instant::now();
        let settings = StreamSettings::debounced(WINDOW, Dedup::Off);
        let mut d = Debouncer::new(settings, String::new());

        assert_eq!(d.push("A".into(), t0), None);
        assert_eq!(d.push("An".into(), t0 + ms(100)), None);
        assert_eq!(d.push("Anna".into(), t0 + ms(300)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(800)));

        // window restarted by every push
        assert_eq!(d.poll(t0 + ms(799)), None);
        assert_eq!(d.poll(t0 + ms(800)), Some("Anna".to_string()));
        assert_eq!(d.deadline(), None);
        assert_eq!(d.poll(t0 + ms(2000)), None);
    }

    #[test]
    fn test_dedup_before_debounce_ignores_repeats() {
        let t0 = Instant::now();
        let settings = StreamSettings::debounced(WINDOW, Dedup::BeforeDebounce);
        let mut d = Debouncer::new(settings, String::new());

        // the seed is a duplicate of itself
        assert_eq!(d.push(String::new(), t0), None);
        assert_eq!(d.deadline(), None);

        d.push("A".into(), t0);
        // a duplicate does not restart the window
        d.push("A".into(), t0 + ms(400));
        assert_eq!(d.deadline(), Some(t0 + WINDOW));
        assert_eq!(d.poll(t0 + WINDOW), Some("A".to_string()));
    }

    #[test]
    fn test_dedup_before_debounce_lets_round_trip_through() {
        let t0 = Instant::now();
        let settings = StreamSettings::debounced(WINDOW, Dedup::BeforeDebounce);
        let mut d = Debouncer::new(settings, String::new());

        d.push("A".into(), t0);
        assert_eq!(d.poll(t0 + WINDOW), Some("A".to_string()));

        d.push("AB".into(), t0 + ms(600));
        d.push("A".into(), t0 + ms(650));
        assert_eq!(d.poll(t0 + ms(1150)), Some("A".to_string()));
    }

    #[test]
    fn test_dedup_after_debounce_suppresses_same_settled_value() {
        let t0 = Instant::now();
        let settings = StreamSettings::debounced(WINDOW, Dedup::AfterDebounce);
        let mut d = Debouncer::new(settings, String::new());

        d.push("A".into(), t0);
        assert_eq!(d.poll(t0 + WINDOW), Some("A".to_string()));

        d.push("AB".into(), t0 + ms(600));
        d.push("A".into(), t0 + ms(650));
        assert_eq!(d.poll(t0 + ms(1150)), None);

        // typing and deleting back to the seed settles nothing
        let mut d = Debouncer::new(settings, String::new());
        d.push("x".into(), t0);
        d.push(String::new(), t0 + ms(10));
        assert_eq!(d.poll(t0 + ms(510)), None);
    }

    #[test]
    fn test_zero_window_drops_pending() {
        let t0 = Instant::now();
        let settings = StreamSettings::debounced(Duration::ZERO, Dedup::AfterDebounce);
        let mut d = Debouncer::new(settings, 0_u32);
        assert_eq!(d.push(1, t0), Some(1));
        assert_eq!(d.push(1, t0), None);
        assert_eq!(d.push(2, t0), Some(2));
    }
}
