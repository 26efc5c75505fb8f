//! Shared utilities

pub mod error;

pub use error::{AcquisitionError, CaptureError, EngineError, FailureNotification};
