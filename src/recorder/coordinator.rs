//! Recording coordinator
//!
//! Drives the single capture session through its lifecycle and publishes
//! the recorded-output, elapsed-time and failure channels.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use super::engine::{Recorder, RecordingEngine};
use super::state::{RecordedOutput, RecordingState, SessionConfig};
use super::timer;
use crate::capture::traits::{DeviceAcquisition, MediaStream};
use crate::utils::error::{CaptureError, FailureNotification};

/// Fixed pieces of the generated output title
const TITLE_PREFIX: &str = "video_";
const TITLE_EXTENSION: &str = ".mp4";

/// Resources owned by a live session, held and released as one unit
struct ActiveSession {
    /// Session id for log correlation
    id: Uuid,

    /// The acquired capture stream
    stream: MediaStream,

    /// Recorder bound to the stream
    recorder: Box<dyn Recorder>,

    /// When recording actually began
    started_at: Instant,

    /// Elapsed-time publisher task
    ticker: JoinHandle<()>,
}

/// Lifecycle phase of the single session slot
///
/// The stream, recorder, start instant and ticker exist only inside
/// `Recording`, so partial resource states are unrepresentable.
enum Phase {
    Idle,
    Acquiring,
    Recording(ActiveSession),
}

impl Phase {
    fn state(&self) -> RecordingState {
        match self {
            Phase::Idle => RecordingState::Idle,
            Phase::Acquiring => RecordingState::Acquiring,
            Phase::Recording(_) => RecordingState::Recording,
        }
    }
}

/// Mutable session slot guarded by the coordinator lock
struct SessionSlot {
    phase: Phase,

    /// Bumped on every start; an in-flight acquisition carrying an older
    /// generation belongs to a discarded session
    generation: u64,

    /// Bumped on every abort; an in-flight finalize that observes a newer
    /// epoch discards its result
    abort_epoch: u64,
}

/// Manages the exclusive capture session
///
/// Commands never fail: redundant commands are absorbed as no-ops and
/// collaborator failures are translated into failure-channel emissions.
pub struct RecordingCoordinator {
    /// Single session slot; the lock is never held across an await
    slot: Mutex<SessionSlot>,

    /// Device-side collaborator
    acquisition: Arc<dyn DeviceAcquisition>,

    /// Encoder-side collaborator
    engine: Arc<dyn RecordingEngine>,

    /// Session configuration
    config: SessionConfig,

    /// Completed-output broadcaster
    recorded_tx: broadcast::Sender<RecordedOutput>,

    /// Elapsed-time broadcaster
    elapsed_tx: broadcast::Sender<String>,

    /// Failure broadcaster
    failure_tx: broadcast::Sender<FailureNotification>,
}

impl RecordingCoordinator {
    /// Create a new coordinator around the given collaborators
    pub fn new(
        acquisition: Arc<dyn DeviceAcquisition>,
        engine: Arc<dyn RecordingEngine>,
        config: SessionConfig,
    ) -> Self {
        let (recorded_tx, _) = broadcast::channel(100);
        let (elapsed_tx, _) = broadcast::channel(100);
        let (failure_tx, _) = broadcast::channel(100);

        Self {
            slot: Mutex::new(SessionSlot {
                phase: Phase::Idle,
                generation: 0,
                abort_epoch: 0,
            }),
            acquisition,
            engine,
            config,
            recorded_tx,
            elapsed_tx,
            failure_tx,
        }
    }

    /// Get the current recording state
    pub fn state(&self) -> RecordingState {
        self.slot.lock().phase.state()
    }

    /// Time since recording began, while a session is recording
    pub fn elapsed(&self) -> Option<Duration> {
        match &self.slot.lock().phase {
            Phase::Recording(session) => Some(session.started_at.elapsed()),
            _ => None,
        }
    }

    /// Subscribe to completed session outputs
    pub fn subscribe_recorded(&self) -> broadcast::Receiver<RecordedOutput> {
        self.recorded_tx.subscribe()
    }

    /// Subscribe to elapsed-time clock strings
    pub fn subscribe_elapsed(&self) -> broadcast::Receiver<String> {
        self.elapsed_tx.subscribe()
    }

    /// Subscribe to failure notifications
    pub fn subscribe_failures(&self) -> broadcast::Receiver<FailureNotification> {
        self.failure_tx.subscribe()
    }

    /// Start a capture session
    ///
    /// No-op while a session is already acquiring or recording: at most
    /// one device request and one ticker exist at a time.
    pub async fn start_recording(&self) {
        let generation = {
            let mut slot = self.slot.lock();
            if !matches!(slot.phase, Phase::Idle) {
                tracing::debug!(
                    state = ?slot.phase.state(),
                    "start_recording ignored: session already in progress"
                );
                return;
            }
            slot.generation += 1;
            slot.phase = Phase::Acquiring;
            slot.generation
        };

        let session_id = Uuid::new_v4();
        tracing::info!(session_id = %session_id, "Starting capture session");

        // Subscribers see the clock at zero before the device answers
        let _ = self.elapsed_tx.send(timer::format_clock(Duration::ZERO));

        match self.acquisition.request(&self.config.constraints).await {
            Ok(stream) => self.install_session(generation, session_id, stream),
            Err(error) => self.fail_acquiring(generation, session_id, error.into()),
        }
    }

    /// Stop the active session and publish its output
    ///
    /// No-op unless a session is recording: nothing is emitted and no
    /// error is raised.
    pub async fn stop_recording(&self) {
        let (session, abort_epoch) = {
            let mut slot = self.slot.lock();
            match std::mem::replace(&mut slot.phase, Phase::Idle) {
                Phase::Recording(session) => (session, slot.abort_epoch),
                other => {
                    slot.phase = other;
                    tracing::debug!("stop_recording ignored: no active recording");
                    return;
                }
            }
        };

        tracing::info!(session_id = %session.id, "Stopping recording");
        session.ticker.abort();

        let ActiveSession {
            id,
            stream,
            recorder,
            ..
        } = session;

        let finalized = recorder.stop_and_finalize().await;
        stream.stop_all();

        if self.slot.lock().abort_epoch != abort_epoch {
            tracing::debug!(session_id = %id, "Discarding finalize result: session aborted");
            return;
        }

        match finalized {
            Ok(blob) => {
                let title = build_title();
                tracing::info!(
                    session_id = %id,
                    title = %title,
                    bytes = blob.bytes.len(),
                    "Recording finished"
                );
                let _ = self.recorded_tx.send(RecordedOutput { blob, title });
            }
            Err(error) => {
                tracing::warn!(session_id = %id, error = %error, "Failed to finalize recording");
                let _ = self
                    .failure_tx
                    .send(CaptureError::from(error).into());
            }
        }
    }

    /// Tear down any session without publishing output
    ///
    /// Safe from any state. Late results from an acquisition or finalize
    /// already in flight are discarded.
    pub fn abort_recording(&self) {
        let session = {
            let mut slot = self.slot.lock();
            slot.abort_epoch += 1;
            match std::mem::replace(&mut slot.phase, Phase::Idle) {
                Phase::Recording(session) => Some(session),
                _ => None,
            }
        };

        match session {
            Some(session) => {
                tracing::info!(session_id = %session.id, "Aborting recording");
                session.ticker.abort();
                session.stream.stop_all();
            }
            None => {
                tracing::debug!("abort_recording: no recording session held");
            }
        }
    }

    /// Transition Acquiring → Recording, unless the session was cancelled
    /// while the device request was in flight
    fn install_session(&self, generation: u64, session_id: Uuid, stream: MediaStream) {
        let mut slot = self.slot.lock();
        if slot.generation != generation || !matches!(slot.phase, Phase::Acquiring) {
            drop(slot);
            tracing::debug!(
                session_id = %session_id,
                "Releasing stream acquired for a cancelled session"
            );
            stream.stop_all();
            return;
        }

        let mut recorder = match self.engine.bind(&stream, &self.config.format) {
            Ok(recorder) => recorder,
            Err(error) => {
                slot.phase = Phase::Idle;
                drop(slot);
                stream.stop_all();
                tracing::warn!(
                    session_id = %session_id,
                    error = %error,
                    "Recording engine rejected the stream"
                );
                let _ = self.failure_tx.send(CaptureError::from(error).into());
                return;
            }
        };

        recorder.start();
        let started_at = Instant::now();
        let ticker = timer::spawn_ticker(started_at, self.elapsed_tx.clone());

        slot.phase = Phase::Recording(ActiveSession {
            id: session_id,
            stream,
            recorder,
            started_at,
            ticker,
        });
        tracing::info!(session_id = %session_id, "Recording started");
    }

    /// Acquisition-path failure: reset the slot and notify subscribers,
    /// unless the session was cancelled while the request was in flight
    fn fail_acquiring(&self, generation: u64, session_id: Uuid, error: CaptureError) {
        {
            let mut slot = self.slot.lock();
            if slot.generation != generation || !matches!(slot.phase, Phase::Acquiring) {
                tracing::debug!(
                    session_id = %session_id,
                    "Suppressing failure from a cancelled session"
                );
                return;
            }
            slot.phase = Phase::Idle;
        }

        tracing::warn!(session_id = %session_id, error = %error, "Device acquisition failed");
        let _ = self.failure_tx.send(error.into());
    }
}

/// Build the output title: fixed prefix, wall-clock milliseconds at
/// finalize time, fixed extension, percent-encoded
fn build_title() -> String {
    let stamp = Utc::now().timestamp_millis();
    let name = format!("{}{}{}", TITLE_PREFIX, stamp, TITLE_EXTENSION);
    urlencoding::encode(&name).into_owned()
}
