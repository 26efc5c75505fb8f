//! clipcap - single-session media capture coordination.
//!
//! Drives one exclusive capture session through its lifecycle: device
//! acquisition, recording, elapsed-time ticking, and final payload
//! delivery. Device backends and encoders plug in through the
//! `DeviceAcquisition` and `RecordingEngine` traits, so real hardware
//! and test doubles are interchangeable.

pub mod capture;
pub mod recorder;
pub mod utils;

// Re-export key types at crate root for convenience.
pub use capture::traits::{DeviceAcquisition, MediaConstraints, MediaStream, MediaTrack, TrackKind};
pub use recorder::coordinator::RecordingCoordinator;
pub use recorder::engine::{Recorder, RecordingEngine};
pub use recorder::state::{MediaBlob, RecordedOutput, RecordingFormat, RecordingState, SessionConfig};
pub use recorder::timer::format_clock;
pub use utils::error::{AcquisitionError, CaptureError, EngineError, FailureNotification};
