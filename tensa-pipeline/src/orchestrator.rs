//! Reactive analysis orchestration
//!
//! One [`Orchestrator`] instance owns all scheduling state for a text field:
//! the debounce task, the last committed result, the in-flight guard, and a
//! generation counter. On every edit it may fire a cheap quick-path
//! classification, and it always re-arms the debounce window; when the
//! window expires the full path runs through the transport, falling back to
//! the local rule set on any transport failure so the UI never stalls.
//!
//! Concurrency discipline:
//! - at most one full-path request is in flight (`is_analyzing`); while one
//!   is pending, expiring debounce windows defer rather than start a second
//! - the quick path has no guard and may overlap anything
//! - cancellation only ever replaces the debounce task, never aborts an
//!   in-flight request; a response from a superseded generation is discarded
//!   when it lands
//! - `last_result` is replaced wholesale, never mutated

use std::sync::Arc;
use std::time::Duration;

use tensa_analyzer::{analyze, AnalysisResult, QuickClassification};
use tensa_config::PipelineConfig;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::transport::AnalysisTransport;

/// How long a deferred full path waits before re-checking the in-flight
/// guard.
const DEFER_INTERVAL: Duration = Duration::from_millis(25);

/// State snapshot published to subscribers on every pipeline event.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineUpdate {
    /// Field is empty; all icons reset.
    Idle,
    /// Quick-path role/tense activity (best effort, may be superseded).
    Quick(QuickClassification),
    /// A committed full analysis.
    Full(AnalysisResult),
}

struct PipelineState {
    debounce: Option<JoinHandle<()>>,
    last_text: Option<String>,
    last_result: Option<AnalysisResult>,
    is_analyzing: bool,
    /// Bumped on every input event; a full-path response only commits if the
    /// generation it was started for is still current.
    generation: u64,
}

impl PipelineState {
    fn new() -> Self {
        PipelineState {
            debounce: None,
            last_text: None,
            last_result: None,
            is_analyzing: false,
            generation: 0,
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }
}

/// Owns the reactive scheduling for one input field.
pub struct Orchestrator<T: AnalysisTransport> {
    transport: Arc<T>,
    settings: PipelineConfig,
    state: Arc<Mutex<PipelineState>>,
    updates: watch::Sender<PipelineUpdate>,
}

impl<T: AnalysisTransport> Orchestrator<T> {
    pub fn new(transport: T, settings: PipelineConfig) -> Self {
        let (updates, _) = watch::channel(PipelineUpdate::Idle);
        Orchestrator {
            transport: Arc::new(transport),
            settings,
            state: Arc::new(Mutex::new(PipelineState::new())),
            updates,
        }
    }

    /// Subscribe to pipeline updates. Receivers always observe the latest
    /// state; intermediate updates may be skipped.
    pub fn subscribe(&self) -> watch::Receiver<PipelineUpdate> {
        self.updates.subscribe()
    }

    /// The last committed full analysis, if any.
    pub async fn last_result(&self) -> Option<AnalysisResult> {
        self.state.lock().await.last_result.clone()
    }

    /// Whether a full-path request is currently in flight.
    pub async fn is_analyzing(&self) -> bool {
        self.state.lock().await.is_analyzing
    }

    /// Feed one text-change event into the pipeline.
    pub async fn handle_input(&self, text: &str) {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            let mut state = self.state.lock().await;
            state.cancel_debounce();
            state.generation += 1;
            state.last_text = None;
            state.last_result = None;
            drop(state);
            self.updates.send_replace(PipelineUpdate::Idle);
            return;
        }

        // Too short to analyze: stop any pending work but keep the last
        // result on screen.
        if trimmed.chars().count() < self.settings.min_input_chars {
            let mut state = self.state.lock().await;
            state.cancel_debounce();
            state.generation += 1;
            return;
        }

        let mut state = self.state.lock().await;

        if self.is_minor_edit(&state, text) {
            self.spawn_quick(text.to_string());
        }

        state.cancel_debounce();
        state.generation += 1;
        let generation = state.generation;
        state.debounce = Some(self.spawn_debounced_full(text.to_string(), generation));
    }

    /// Minor edits (small word and character deltas against the last
    /// analyzed text) are eligible for the quick path.
    fn is_minor_edit(&self, state: &PipelineState, text: &str) -> bool {
        let Some(last) = state.last_text.as_deref() else {
            return false;
        };
        if state.last_result.is_none() {
            return false;
        }

        let word_delta = text
            .split_whitespace()
            .count()
            .abs_diff(last.split_whitespace().count());
        let char_delta = text.chars().count().abs_diff(last.chars().count());

        word_delta <= self.settings.quick_word_delta
            && char_delta <= self.settings.quick_char_delta
    }

    /// Fire-and-forget quick classification. Failures are swallowed (logged
    /// at debug); the committed result is never touched from here.
    fn spawn_quick(&self, text: String) {
        let transport = Arc::clone(&self.transport);
        let updates = self.updates.clone();
        tokio::spawn(async move {
            match transport.quick_classify(&text).await {
                Ok(quick) => {
                    updates.send_replace(PipelineUpdate::Quick(quick));
                }
                Err(err) => debug!(error = %err, "quick classification failed"),
            }
        });
    }

    /// Arm the debounce window. The returned handle covers only the waiting
    /// phase; once the full-path request is dispatched it runs detached and
    /// cannot be aborted, only discarded on arrival.
    fn spawn_debounced_full(&self, text: String, generation: u64) -> JoinHandle<()> {
        let transport = Arc::clone(&self.transport);
        let state = Arc::clone(&self.state);
        let updates = self.updates.clone();
        let debounce = Duration::from_millis(self.settings.debounce_ms);

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            loop {
                {
                    let mut state_guard = state.lock().await;
                    if state_guard.generation != generation {
                        return;
                    }
                    if !state_guard.is_analyzing {
                        state_guard.is_analyzing = true;
                        // No await between claiming the guard and spawning,
                        // so an abort cannot leak the flag.
                        tokio::spawn(run_full(
                            transport,
                            Arc::clone(&state),
                            updates,
                            text,
                            generation,
                        ));
                        return;
                    }
                }
                // Another full path is in flight; defer this attempt.
                tokio::time::sleep(DEFER_INTERVAL).await;
            }
        })
    }
}

/// The full path: remote analysis with local fallback, then commit unless a
/// newer generation superseded this request while it was in flight.
async fn run_full<T: AnalysisTransport>(
    transport: Arc<T>,
    state: Arc<Mutex<PipelineState>>,
    updates: watch::Sender<PipelineUpdate>,
    text: String,
    generation: u64,
) {
    let result = match transport.analyze(&text).await {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "remote analysis failed, recomputing locally");
            analyze(&text)
        }
    };

    let mut state_guard = state.lock().await;
    state_guard.is_analyzing = false;
    if state_guard.generation != generation {
        debug!("discarding stale analysis response");
        return;
    }
    state_guard.last_text = Some(text);
    state_guard.last_result = Some(result.clone());
    drop(state_guard);

    updates.send_replace(PipelineUpdate::Full(result));
}
