//! Recording system module
//!
//! This module implements the capture session lifecycle:
//! - RecordingEngine/Recorder contracts for encoder backends
//! - RecordingCoordinator to drive the single exclusive session
//! - Elapsed clock formatting and ticking

pub mod coordinator;
pub mod engine;
pub mod state;
pub mod timer;

pub use coordinator::RecordingCoordinator;
pub use engine::{Recorder, RecordingEngine};
pub use state::{MediaBlob, RecordedOutput, RecordingFormat, RecordingState, SessionConfig};
