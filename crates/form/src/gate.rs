//! Combine N validated fields into one boolean.
//!
//! A [`GateBuilder`] spawns one field stream per [`field`](GateBuilder::field)
//! call and an aggregator task on [`build`](GateBuilder::build). Each field
//! stream reports its settled verdict to the aggregator, which
//!
//! - publishes that field's message on the field's own error channel (when
//!   [`GateSettings::report_errors`] is set), and
//! - recomputes validity as the AND of every field's latest verdict and
//!   publishes it.
//!
//! Every field starts from the verdict of its seed value. That initial
//! combination is published only when [`GateSettings::surface_initial`] is
//! set; otherwise validity stays `None` ("not yet validated") until the
//! first report arrives.
//!
//! ```rust,no_run
//! use formflow_form::gate::{GateBuilder, GateSettings};
//! use formflow_form::stream::StreamSettings;
//!
//! # async fn demo() -> formflow_form::Result<()> {
//! let mut builder = GateBuilder::new(GateSettings::default())?;
//! let agree = builder.field("agree", StreamSettings::immediate(), false, |v: &bool| *v);
//! let gate = builder.build();
//!
//! agree.send(true)?;
//! let mut validity = gate.subscribe();
//! validity.changed().await.ok();
//! assert_eq!(*validity.borrow(), Some(true));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::state::Verdict;
use crate::stream::{FieldTask, StreamSettings};
use crate::subscription::Subscriptions;

/// What a field stream tells the aggregator after settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Report {
    pub(crate) slot: usize,
    pub(crate) valid: bool,
    pub(crate) error: Option<&'static str>,
}

/// How a gate surfaces its outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateSettings {
    /// Publish the combination of seed verdicts at build time.
    pub surface_initial: bool,
    /// Publish each field's message on its own error channel.
    pub report_errors: bool,
}

// ============================================================================
// FIELD HANDLE
// ============================================================================

/// Input side and observable outputs of one gate field.
#[derive(Debug)]
pub struct FieldHandle<I, V> {
    name: &'static str,
    input: mpsc::UnboundedSender<I>,
    state: watch::Receiver<V>,
    error: watch::Receiver<Option<&'static str>>,
    emissions: Arc<AtomicU64>,
    closed: CancellationToken,
}

impl<I, V: Clone> FieldHandle<I, V> {
    /// Field name used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Feeds a raw value into the field stream.
    pub fn send(&self, value: I) -> Result<()> {
        if self.closed.is_cancelled() {
            return Err(Error::SessionClosed { field: self.name });
        }
        self.input
            .send(value)
            .map_err(|_| Error::SessionClosed { field: self.name })
    }

    /// Latest settled state (the seed verdict before the first emission).
    pub fn state(&self) -> V {
        self.state.borrow().clone()
    }

    /// Receiver woken on every settled state.
    pub fn subscribe_state(&self) -> watch::Receiver<V> {
        self.state.clone()
    }

    /// Latest published message; `None` until the field first settles.
    pub fn error(&self) -> Option<&'static str> {
        *self.error.borrow()
    }

    /// Receiver woken when the published message changes.
    pub fn subscribe_error(&self) -> watch::Receiver<Option<&'static str>> {
        self.error.clone()
    }

    /// How many values this field has settled so far.
    pub fn emissions(&self) -> u64 {
        self.emissions.load(Ordering::Relaxed)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Assembles the field streams of one gate.
///
/// Dropping the builder without calling [`build`](Self::build) stops every
/// field already spawned.
#[derive(Debug)]
pub struct GateBuilder {
    runtime: Handle,
    settings: GateSettings,
    subscriptions: Subscriptions,
    reports_tx: mpsc::UnboundedSender<Report>,
    reports_rx: mpsc::UnboundedReceiver<Report>,
    initial: Vec<bool>,
    errors: Vec<watch::Sender<Option<&'static str>>>,
}

impl GateBuilder {
    /// Creates a builder bound to the current tokio runtime.
    pub fn new(settings: GateSettings) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| Error::RuntimeUnavailable(e.to_string()))?;
        let (reports_tx, reports_rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            settings,
            subscriptions: Subscriptions::new(),
            reports_tx,
            reports_rx,
            initial: Vec::new(),
            errors: Vec::new(),
        })
    }

    /// Adds a field stream classifying raw values with `rule`.
    ///
    /// `seed` is the raw value the field starts with; its verdict is the
    /// field's state until the stream first settles.
    pub fn field<I, V, F>(
        &mut self,
        name: &'static str,
        stream: StreamSettings,
        seed: I,
        rule: F,
    ) -> FieldHandle<I, V>
    where
        I: Clone + PartialEq + Send + 'static,
        V: Verdict,
        F: Fn(&I) -> V + Send + 'static,
    {
        let slot = self.initial.len();
        let initial = rule(&seed);
        self.initial.push(initial.is_valid());

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(initial);
        let (error_tx, error_rx) = watch::channel(None);
        self.errors.push(error_tx);
        let emissions = Arc::new(AtomicU64::new(0));

        let task = FieldTask {
            name,
            slot,
            settings: stream,
            seed,
            input: input_rx,
            state: state_tx,
            emissions: Arc::clone(&emissions),
            reports: self.reports_tx.clone(),
            cancel: self.subscriptions.token().clone(),
        };
        self.subscriptions.track(task.spawn(&self.runtime, rule));
        trace!(field = name, slot, ?stream, "field stream spawned");

        FieldHandle {
            name,
            input: input_tx,
            state: state_rx,
            error: error_rx,
            emissions,
            closed: self.subscriptions.token().clone(),
        }
    }

    /// Spawns the aggregator and returns the running gate.
    pub fn build(self) -> Gate {
        let Self {
            runtime,
            settings,
            mut subscriptions,
            reports_tx,
            reports_rx,
            initial,
            errors,
        } = self;
        drop(reports_tx);

        let seeded = settings.surface_initial.then(|| initial.iter().all(|v| *v));
        let (validity_tx, validity_rx) = watch::channel(seeded);

        let aggregator = Aggregator {
            settings,
            valid: initial,
            errors,
            validity: validity_tx,
            reports: reports_rx,
            cancel: subscriptions.token().clone(),
        };
        subscriptions.track(runtime.spawn(aggregator.run()));

        Gate {
            validity: validity_rx,
            subscriptions,
        }
    }
}

// ============================================================================
// AGGREGATOR
// ============================================================================

struct Aggregator {
    settings: GateSettings,
    valid: Vec<bool>,
    errors: Vec<watch::Sender<Option<&'static str>>>,
    validity: watch::Sender<Option<bool>>,
    reports: mpsc::UnboundedReceiver<Report>,
    cancel: CancellationToken,
}

impl Aggregator {
    async fn run(mut self) {
        loop {
            let report = tokio::select! {
                biased;

                () = self.cancel.cancelled() => break,

                report = self.reports.recv() => match report {
                    Some(report) => report,
                    None => break,
                },
            };

            if self.cancel.is_cancelled() {
                break;
            }
            self.apply(report);
        }
    }

    fn apply(&mut self, report: Report) {
        let Some(slot) = self.valid.get_mut(report.slot) else {
            return;
        };
        *slot = report.valid;

        if self.settings.report_errors
            && let Some(error) = self.errors.get(report.slot)
        {
            error.send_if_modified(|current| replace_if_changed(current, report.error));
        }

        let all_valid = self.valid.iter().all(|v| *v);
        let changed = self
            .validity
            .send_if_modified(|current| replace_if_changed(current, Some(all_valid)));
        debug!(
            slot = report.slot,
            valid = report.valid,
            form_valid = all_valid,
            changed,
            "validity recomputed"
        );
    }
}

fn replace_if_changed<T: PartialEq>(current: &mut T, next: T) -> bool {
    if *current == next {
        false
    } else {
        *current = next;
        true
    }
}

// ============================================================================
// GATE
// ============================================================================

/// A running gate: its validity signal and the tasks behind it.
#[derive(Debug)]
pub struct Gate {
    validity: watch::Receiver<Option<bool>>,
    subscriptions: Subscriptions,
}

impl Gate {
    /// Latest validity; `None` while not yet validated.
    pub fn validity(&self) -> Option<bool> {
        *self.validity.borrow()
    }

    /// Receiver woken when validity changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<bool>> {
        self.validity.clone()
    }

    /// Stops every field stream and the aggregator.
    pub fn release(&mut self) {
        self.subscriptions.release();
    }

    /// Whether [`release`](Self::release) has run.
    pub fn is_released(&self) -> bool {
        self.subscriptions.is_released()
    }
}
